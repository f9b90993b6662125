//! IDE features: definition lookup over the project symbol table.
//!
//! The interface between the symbol table and an editor. Requests are
//! expressed with URIs and 0-indexed line/column positions; no protocol types
//! leak in or out.
//!
//! ## Usage
//!
//! The recommended way to use this module is through [`AnalysisHost`], which
//! keeps the project, the symbol table and the open buffers consistent:
//!
//! ```no_run
//! use svindex::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_project("/work/chip", ["rtl/include"], Some("chip"));
//! host.did_open("file:///work/chip/rtl/top.sv", "module top; endmodule");
//! for location in host.find_definition("file:///work/chip/rtl/top.sv", 0, 7) {
//!     println!("{} {}", location.uri, location.span);
//! }
//! ```

mod analysis;
mod buffers;
mod goto;

pub use analysis::{AnalysisHost, BatchReport, FileReport, SharedAnalysisHost};
pub use buffers::{BufferTracker, BufferTrackerContainer};
pub use goto::{Location, find_definition};
