//! Source files of a project and how they are found, loaded and parsed.

mod config;
pub mod file_loader;
#[allow(clippy::module_inception)]
mod project;
mod source_file;

pub use config::ProjectConfig;
pub use project::Project;
pub use source_file::{ParseStatus, SourceFile};
