//! Project configuration.

use std::path::{Path, PathBuf};

/// Settings a [`Project`](super::Project) is created from.
///
/// ```
/// use svindex::project::ProjectConfig;
///
/// let config = ProjectConfig::new("/work/chip")
///     .with_include_path("rtl/include")
///     .with_corpus("chip");
/// assert_eq!(config.include_paths.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectConfig {
    /// Directory relative paths and include directories are resolved against
    pub root: PathBuf,
    /// Directories searched for `` `include `` references, in order
    pub include_paths: Vec<PathBuf>,
    /// Free-form tag used only when reporting
    pub corpus: Option<String>,
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    pub fn with_include_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.include_paths
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    pub fn with_corpus(mut self, corpus: impl Into<String>) -> Self {
        self.corpus = Some(corpus.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_include_order() {
        let config = ProjectConfig::new("/p")
            .with_include_path("b")
            .with_include_paths(["a", "c"]);
        assert_eq!(
            config.include_paths,
            vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("c")]
        );
        assert_eq!(config.corpus, None);
    }
}
