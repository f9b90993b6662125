//! Temporary project directories and hosts over them.

use std::fs;
use std::path::PathBuf;

use svindex::base::path_to_uri;
use svindex::ide::AnalysisHost;

/// A project tree written to a temporary directory.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    /// Writes each `(relative path, text)` pair, creating directories as needed.
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let workspace = Self { dir };
        for (path, text) in files {
            workspace.write(path, text);
        }
        workspace
    }

    pub fn write(&self, path: &str, text: &str) {
        let path = self.path(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn uri(&self, relative: &str) -> String {
        path_to_uri(&self.path(relative))
    }

    /// A host over this workspace, `inc` as the include directory.
    pub fn host(&self) -> AnalysisHost {
        let mut host = AnalysisHost::new();
        host.set_project(self.dir.path(), ["inc"], Some("test"));
        host
    }

    /// A host with every file indexed.
    pub fn built_host(&self) -> AnalysisHost {
        let mut host = self.host();
        let report = host.build_project_symbol_table();
        assert!(!report.is_empty(), "no files discovered");
        host
    }

    /// Open `relative` in `host` with its on-disk text.
    pub fn open(&self, host: &mut AnalysisHost, relative: &str) -> String {
        let uri = self.uri(relative);
        let text = fs::read_to_string(self.path(relative)).unwrap();
        host.did_open(&uri, &text);
        uri
    }
}
