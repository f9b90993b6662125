//! A single translation unit tracked by a project.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::base::{Error, Result, SyntaxError};
use crate::syntax::SyntaxFile;

/// Parse state of a [`SourceFile`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParseStatus {
    /// Not parsed since it was opened or its contents last changed
    #[default]
    Unparsed,
    /// Parsed without errors; the tree is available
    Parsed,
    /// Parsed with errors; the tree was discarded
    Failed(Vec<SyntaxError>),
}

/// One source file: its path, its text once loaded, and its tree once
/// parsed successfully.
///
/// The file knows nothing about the project that owns it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    contents: Option<Arc<str>>,
    status: ParseStatus,
    syntax: Option<SyntaxFile>,
    /// Bumped on every content change and every parse
    generation: u32,
}

impl SourceFile {
    /// Track `path`; the contents are read from disk on first parse.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: None,
            status: ParseStatus::Unparsed,
            syntax: None,
            generation: 0,
        }
    }

    /// Track `path` with contents supplied by the caller.
    pub fn with_contents(path: impl Into<PathBuf>, contents: &str) -> Self {
        let mut file = Self::new(path);
        file.contents = Some(Arc::from(contents));
        file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn status(&self) -> &ParseStatus {
        &self.status
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_parsed(&self) -> bool {
        self.status == ParseStatus::Parsed
    }

    /// The tree, if the last parse succeeded
    pub fn syntax(&self) -> Option<&SyntaxFile> {
        self.syntax.as_ref()
    }

    /// Replace the contents and drop any tree built from the old ones.
    pub fn set_contents(&mut self, contents: &str) {
        self.contents = Some(Arc::from(contents));
        self.status = ParseStatus::Unparsed;
        self.syntax = None;
        self.generation += 1;
    }

    /// Read the contents from disk if none are loaded yet.
    pub fn load(&mut self) -> Result<&str> {
        if self.contents.is_none() {
            trace!(path = %self.path.display(), "reading source file");
            let text =
                std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
            self.contents = Some(Arc::from(text));
        }
        Ok(self.contents.as_deref().unwrap_or_default())
    }

    /// Parse the file unless it already has been.
    ///
    /// A file that failed before fails again with the same diagnostics
    /// without being re-parsed.
    pub fn parse(&mut self) -> Result<()> {
        match &self.status {
            ParseStatus::Parsed => Ok(()),
            ParseStatus::Failed(diagnostics) => Err(Error::ParseFailed {
                path: self.path.clone(),
                diagnostics: diagnostics.clone(),
            }),
            ParseStatus::Unparsed => self.reparse(),
        }
    }

    /// Parse the file again, replacing any previous tree.
    pub fn reparse(&mut self) -> Result<()> {
        let text = self.load()?;
        let syntax = SyntaxFile::new(text);
        self.generation += 1;

        if syntax.has_errors() {
            let diagnostics = syntax.errors().to_vec();
            debug!(
                path = %self.path.display(),
                errors = diagnostics.len(),
                "parse failed"
            );
            self.status = ParseStatus::Failed(diagnostics.clone());
            self.syntax = None;
            return Err(Error::ParseFailed {
                path: self.path.clone(),
                diagnostics,
            });
        }

        self.status = ParseStatus::Parsed;
        self.syntax = Some(syntax);
        Ok(())
    }
}
