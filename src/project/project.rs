//! The set of translation units making up one source tree.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

use super::config::ProjectConfig;
use super::file_loader;
use super::source_file::SourceFile;
use crate::base::paths::{absolutize, normalize};
use crate::base::{Error, FileId, Result};

/// A source project: a root directory, include search directories and every
/// file opened so far.
///
/// Files are addressed by [`FileId`] and by their canonical path, which is
/// the lexically normalized absolute path.
#[derive(Debug, Default)]
pub struct Project {
    root: PathBuf,
    include_paths: Vec<PathBuf>,
    corpus: Option<String>,
    files: Vec<SourceFile>,
    by_path: FxHashMap<PathBuf, FileId>,
    /// Header → every file whose indexing pass expanded it, directly or
    /// through other headers
    included_by: FxHashMap<FileId, FxHashSet<FileId>>,
}

impl Project {
    pub fn new(config: ProjectConfig) -> Self {
        let root = match std::env::current_dir() {
            Ok(cwd) => absolutize(&cwd, &config.root),
            Err(_) => normalize(&config.root),
        };
        let include_paths = config
            .include_paths
            .iter()
            .map(|dir| absolutize(&root, dir))
            .collect();
        debug!(root = %root.display(), "creating project");
        Self {
            root,
            include_paths,
            corpus: config.corpus,
            files: Vec::new(),
            by_path: FxHashMap::default(),
            included_by: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }

    pub fn corpus(&self) -> Option<&str> {
        self.corpus.as_deref()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Canonical form of `path`: absolute against the root, then normalized
    pub fn canonical_path(&self, path: &Path) -> PathBuf {
        absolutize(&self.root, path)
    }

    /// Resolve a path or `` `include `` reference to an existing file.
    ///
    /// The reference is tried as written (relative to the root when it is
    /// relative), then under each include directory in order.
    pub fn resolve(&self, reference: impl AsRef<Path>) -> Result<PathBuf> {
        let reference = reference.as_ref();
        let literal = self.canonical_path(reference);
        if literal.is_file() {
            return Ok(literal);
        }
        if reference.is_relative() {
            for dir in &self.include_paths {
                let candidate = normalize(&dir.join(reference));
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }
        Err(Error::not_found(reference.display().to_string()))
    }

    /// Start tracking `path` if it is not tracked yet. Does not parse.
    pub fn open(&mut self, path: impl AsRef<Path>) -> FileId {
        let path = self.canonical_path(path.as_ref());
        if let Some(&id) = self.by_path.get(&path) {
            return id;
        }
        let id = FileId::from(self.files.len());
        debug!(file = %id, path = %path.display(), "opening translation unit");
        self.files.push(SourceFile::new(path.clone()));
        self.by_path.insert(path, id);
        id
    }

    /// Resolve a reference and open the file it names
    pub fn open_reference(&mut self, reference: impl AsRef<Path>) -> Result<FileId> {
        let path = self.resolve(reference)?;
        Ok(self.open(path))
    }

    /// Parse a tracked file unless it already is
    pub fn parse(&mut self, id: FileId) -> Result<()> {
        self.file_mut(id)?.parse()
    }

    /// Parse every tracked file that is not parsed yet, in parallel.
    ///
    /// Results are in `FileId` order.
    pub fn parse_all(&mut self) -> Vec<(FileId, Result<()>)> {
        self.files
            .par_iter_mut()
            .enumerate()
            .map(|(index, file)| (FileId::from(index), file.parse()))
            .collect()
    }

    /// `path` relative to the project root, or unchanged if it lies outside
    pub fn relative_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = self.canonical_path(path.as_ref());
        match path.strip_prefix(&self.root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path,
        }
    }

    pub fn lookup(&self, path: impl AsRef<Path>) -> Option<FileId> {
        self.by_path
            .get(&self.canonical_path(path.as_ref()))
            .copied()
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    pub fn file_mut(&mut self, id: FileId) -> Result<&mut SourceFile> {
        self.files.get_mut(id.index()).ok_or(Error::UnknownFile(id))
    }

    /// Replace the contents of a tracked file; it becomes unparsed
    pub fn set_contents(&mut self, id: FileId, contents: &str) -> Result<()> {
        self.file_mut(id)?.set_contents(contents);
        Ok(())
    }

    /// Open every source file under the root. Returns how many were found.
    pub fn discover_files(&mut self) -> Result<usize> {
        let paths = file_loader::collect_file_paths(&self.root)?;
        let count = paths.len();
        for path in paths {
            self.open(path);
        }
        info!(
            root = %self.root.display(),
            corpus = self.corpus.as_deref().unwrap_or(""),
            files = count,
            "discovered project files"
        );
        Ok(count)
    }

    /// Tracked files in path order
    pub fn files(&self) -> impl Iterator<Item = (FileId, &SourceFile)> {
        let mut ids: Vec<FileId> = (0..self.files.len()).map(FileId::from).collect();
        ids.sort_by(|a, b| self.files[a.index()].path().cmp(self.files[b.index()].path()));
        ids.into_iter().map(|id| (id, &self.files[id.index()]))
    }

    /// Forget every tracked file. Previously issued ids become invalid.
    pub fn reset(&mut self) {
        if !self.files.is_empty() {
            warn!(files = self.files.len(), "resetting project");
        }
        self.files.clear();
        self.by_path.clear();
        self.included_by.clear();
    }

    /// Note that indexing `includer` expanded `header`
    pub fn record_include(&mut self, includer: FileId, header: FileId) {
        self.included_by.entry(header).or_default().insert(includer);
    }

    /// Forget every include recorded for `includer`
    pub fn clear_includes(&mut self, includer: FileId) {
        self.included_by.retain(|_, includers| {
            includers.remove(&includer);
            !includers.is_empty()
        });
    }

    /// Files whose symbols were built from `header`, in id order
    pub fn includers_of(&self, header: FileId) -> Vec<FileId> {
        let mut includers: Vec<FileId> = self
            .included_by
            .get(&header)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        includers.sort();
        includers
    }
}
