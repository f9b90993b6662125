//! Open editor buffers.
//!
//! Every document the client has open is tracked by URI. Each tracker keeps
//! the tree of the text as currently edited, errors and all; cursor lookups
//! read tokens from it.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::syntax::SyntaxFile;

/// Parse state of one open document
#[derive(Clone, Debug)]
pub struct BufferTracker {
    current: Arc<SyntaxFile>,
    /// Number of edits applied since the buffer was opened
    version: u32,
}

impl BufferTracker {
    pub fn new(text: &str) -> Self {
        Self {
            current: Arc::new(SyntaxFile::new(text)),
            version: 0,
        }
    }

    /// Replace the buffer text
    pub fn update(&mut self, text: &str) {
        self.current = Arc::new(SyntaxFile::new(text));
        self.version += 1;
    }

    /// The buffer as currently edited, errors and all
    pub fn current(&self) -> &SyntaxFile {
        &self.current
    }

    pub fn text(&self) -> &str {
        self.current.text()
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

/// All open buffers, keyed by document URI
#[derive(Clone, Debug, Default)]
pub struct BufferTrackerContainer {
    trackers: FxHashMap<String, BufferTracker>,
}

impl BufferTrackerContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a document, replacing any tracker it already had
    pub fn open(&mut self, uri: &str, text: &str) -> &BufferTracker {
        trace!(uri, "buffer opened");
        self.trackers.insert(uri.to_string(), BufferTracker::new(text));
        &self.trackers[uri]
    }

    /// Apply new text to a document; starts tracking it if needed
    pub fn update(&mut self, uri: &str, text: &str) -> &BufferTracker {
        let tracker = self
            .trackers
            .entry(uri.to_string())
            .and_modify(|tracker| tracker.update(text))
            .or_insert_with(|| BufferTracker::new(text));
        trace!(uri, version = tracker.version(), "buffer updated");
        tracker
    }

    pub fn close(&mut self, uri: &str) -> Option<BufferTracker> {
        trace!(uri, "buffer closed");
        self.trackers.remove(uri)
    }

    pub fn get(&self, uri: &str) -> Option<&BufferTracker> {
        self.trackers.get(uri)
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.trackers.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.trackers.keys().map(String::as_str)
    }
}
