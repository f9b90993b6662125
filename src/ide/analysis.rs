//! AnalysisHost: owns the project, the symbol table and the open buffers.
//!
//! All mutation goes through `&mut AnalysisHost`. Callers that share one host
//! between threads wrap it in a [`SharedAnalysisHost`].
//!
//! ## Usage
//!
//! ```no_run
//! use svindex::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_project("/work/chip", ["rtl/include"], None);
//! let report = host.build_project_symbol_table();
//! println!("{} of {} files indexed", report.indexed_count(), report.len());
//!
//! host.did_open("file:///work/chip/rtl/top.sv", "module top; endmodule");
//! let locations = host.find_definition("file:///work/chip/rtl/top.sv", 0, 7);
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use super::buffers::BufferTrackerContainer;
use super::goto::{self, Location};
use crate::base::{Error, FileId, LineCol, uri_to_path};
use crate::hir::{DeclarationPatterns, Diagnostic, SymbolTable, index_file};
use crate::project::{Project, ProjectConfig, file_loader};

// ============================================================================
// BATCH REPORT
// ============================================================================

/// Outcome of indexing one file during a batch build.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub file: FileId,
    pub path: PathBuf,
    /// The file parsed and contributed its declarations
    pub indexed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-file outcomes of [`AnalysisHost::build_project_symbol_table`], in
/// path order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn indexed_count(&self) -> usize {
        self.files.iter().filter(|f| f.indexed).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.indexed)
    }

    pub fn is_ok(&self) -> bool {
        self.files.iter().all(|f| f.indexed)
    }
}

// ============================================================================
// ANALYSIS HOST
// ============================================================================

/// Owns all mutable state for definition lookup.
#[derive(Debug)]
pub struct AnalysisHost {
    project: Project,
    table: SymbolTable,
    patterns: DeclarationPatterns,
    buffers: BufferTrackerContainer,
    /// Files whose current contents are reflected in `table`
    indexed: FxHashSet<FileId>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a host over an empty project rooted at the working directory.
    pub fn new() -> Self {
        Self::with_config(ProjectConfig::default())
    }

    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            project: Project::new(config),
            table: SymbolTable::new(),
            patterns: DeclarationPatterns::new(),
            buffers: BufferTrackerContainer::new(),
            indexed: FxHashSet::default(),
        }
    }

    /// Replace the project. The symbol table starts over; open buffers stay.
    pub fn set_project<I, P>(&mut self, root: impl Into<PathBuf>, include_paths: I, corpus: Option<&str>)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut config = ProjectConfig::new(root).with_include_paths(include_paths);
        config.corpus = corpus.map(str::to_string);
        self.set_project_config(config);
    }

    pub fn set_project_config(&mut self, config: ProjectConfig) {
        self.project = Project::new(config);
        self.table = SymbolTable::new();
        self.indexed.clear();
        info!(root = %self.project.root().display(), "project set");
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn buffers(&self) -> &BufferTrackerContainer {
        &self.buffers
    }

    pub fn is_indexed(&self, file: FileId) -> bool {
        self.indexed.contains(&file)
    }

    /// Index (or re-index) one file
    pub fn index_file(&mut self, file: FileId) -> Vec<Diagnostic> {
        let diagnostics = index_file(file, &mut self.table, &mut self.project, &self.patterns);
        if self.project.file(file).is_some_and(|f| f.is_parsed()) {
            self.indexed.insert(file);
        } else {
            self.indexed.remove(&file);
        }
        diagnostics
    }

    /// Discover every source file under the project root and index them all.
    ///
    /// Files are parsed in parallel, then indexed one by one in path order.
    /// Header files (`.svh`, `.vh`) are not indexed on their own; they are
    /// indexed where they are included. A file that fails does not stop the
    /// others.
    pub fn build_project_symbol_table(&mut self) -> BatchReport {
        if let Err(err) = self.project.discover_files() {
            warn!("cannot discover project files: {}", err);
            return BatchReport::default();
        }
        for (file, result) in self.project.parse_all() {
            if let Err(err) = result {
                debug!(file = %file, "{}", err);
            }
        }

        let units: Vec<(FileId, PathBuf)> = self
            .project
            .files()
            .filter(|(_, source)| !file_loader::is_header_file(source.path()))
            .map(|(id, source)| (id, source.path().to_path_buf()))
            .collect();

        let mut report = BatchReport::default();
        for (file, path) in units {
            let diagnostics = self.index_file(file);
            let indexed = self.is_indexed(file);
            let relative = self.project.relative_path(&path);
            if indexed {
                info!(path = %relative.display(), diagnostics = diagnostics.len(), "indexed");
            } else {
                warn!(path = %relative.display(), "failed to index");
            }
            report.files.push(FileReport {
                file,
                path,
                indexed,
                diagnostics,
            });
        }
        info!(
            files = report.len(),
            failed = report.len() - report.indexed_count(),
            symbols = self.table.len(),
            "project symbol table built"
        );
        report
    }

    // ------------------------------------------------------------------------
    // Buffer events
    // ------------------------------------------------------------------------

    pub fn did_open(&mut self, uri: &str, text: &str) {
        self.buffers.open(uri, text);
        self.sync_buffer(uri, text);
    }

    pub fn did_change(&mut self, uri: &str, text: &str) {
        self.buffers.update(uri, text);
        self.sync_buffer(uri, text);
    }

    /// Stop tracking a buffer. The project keeps the last text it was given.
    pub fn did_close(&mut self, uri: &str) {
        self.buffers.close(uri);
    }

    /// Push buffer text into a tracked project file and drop its symbols.
    ///
    /// Files that expanded it through `` `include `` hold symbols built from
    /// the old text; those that were indexed are indexed again right away.
    fn sync_buffer(&mut self, uri: &str, text: &str) {
        let Ok(path) = uri_to_path(uri) else {
            return;
        };
        let Some(file) = self.project.lookup(&path) else {
            return;
        };
        if let Err(err) = self.project.set_contents(file, text) {
            warn!(uri, "cannot update project file: {}", err);
            return;
        }
        self.table.remove_contributions(file);
        self.indexed.remove(&file);
        debug!(uri, file = %file, "buffer change invalidated symbols");

        for includer in self.project.includers_of(file) {
            if includer == file {
                continue;
            }
            if self.is_indexed(includer) {
                let diagnostics = self.index_file(includer);
                debug!(file = %includer, diagnostics = diagnostics.len(), "re-indexed includer");
            } else {
                self.table.remove_contributions(includer);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Make sure the file at `path` is tracked, parsed and indexed
    fn ensure_indexed(&mut self, uri: &str, path: &Path) -> Option<FileId> {
        let file = match self.project.lookup(path) {
            Some(file) => file,
            None => {
                let file = self.project.open(path);
                if let Some(buffer) = self.buffers.get(uri) {
                    self.project.set_contents(file, buffer.text()).ok()?;
                }
                file
            }
        };
        if !self.is_indexed(file) {
            let diagnostics = self.index_file(file);
            debug!(uri, diagnostics = diagnostics.len(), "indexed on demand");
        }
        self.is_indexed(file).then_some(file)
    }

    /// Definition of the identifier at `line`/`column` (0-indexed, byte
    /// column) in the open document `uri`. Empty when there is none or the
    /// request cannot be served.
    pub fn find_definition(&mut self, uri: &str, line: u32, column: u32) -> Vec<Location> {
        let path = match uri_to_path(uri) {
            Ok(path) => path,
            Err(err) => {
                warn!("{}", err);
                return Vec::new();
            }
        };
        let path = self.project.canonical_path(&path);
        if self.ensure_indexed(uri, &path).is_none() {
            debug!(uri, "file is not parsable, no definitions");
            return Vec::new();
        }
        let Some(buffer) = self.buffers.get(uri) else {
            warn!("{}", Error::BufferNotTracked(uri.to_string()));
            return Vec::new();
        };

        goto::find_definition(
            &self.table,
            &self.project,
            buffer.current(),
            LineCol::new(line, column),
        )
        .into_iter()
        .collect()
    }
}

// ============================================================================
// SHARED HOST
// ============================================================================

/// An [`AnalysisHost`] shared between threads. Callers are serialized by a
/// mutex.
#[derive(Clone, Debug, Default)]
pub struct SharedAnalysisHost(Arc<parking_lot::Mutex<AnalysisHost>>);

impl SharedAnalysisHost {
    pub fn new(host: AnalysisHost) -> Self {
        SharedAnalysisHost(Arc::new(parking_lot::Mutex::new(host)))
    }

    /// Exclusive access to the host
    pub fn lock(&self) -> parking_lot::MutexGuard<'_, AnalysisHost> {
        self.0.lock()
    }

    pub fn find_definition(&self, uri: &str, line: u32, column: u32) -> Vec<Location> {
        self.lock().find_definition(uri, line, column)
    }
}
