use crate::directory::{Directory, DirectoryEntry};
use crate::error::{GmlqError, Result};

/// The parameters of the most recent [`MemoryDirectory::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub base: String,
    pub filter: String,
    pub attrs: Vec<String>,
}

/// In-memory directory for testing: returns canned entries in insertion
/// order and records the request it was given. No persistence, no network.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    entries: Vec<DirectoryEntry>,
    error: Option<GmlqError>,
    pub last_search: Option<RecordedSearch>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Make the next search fail with `error`. The error fires exactly once;
    /// searches after it return the canned entries again.
    pub fn failing_with(error: GmlqError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

impl Directory for MemoryDirectory {
    fn search(&mut self, base: &str, filter: &str, attrs: &[String]) -> Result<Vec<DirectoryEntry>> {
        self.last_search = Some(RecordedSearch {
            base: base.to_string(),
            filter: filter.to_string(),
            attrs: attrs.to_vec(),
        });

        if let Some(error) = self.error.take() {
            return Err(error);
        }
        Ok(self.entries.clone())
    }
}
