//! Static question/answer list and substring matching.
//!
//! The list is loaded once at startup from a JSON data file and never
//! changes afterwards. Entry order is display order for suggestion
//! buttons and decides ties during matching.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QnaError, RdchatResult};

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnaEntry {
    pub question: String,
    pub answer: String,
}

/// Ordered list of QnA entries.
///
/// No uniqueness constraint is enforced; when several questions match
/// an input, the earliest entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QnaList {
    entries: Vec<QnaEntry>,
}

impl QnaList {
    /// Build a list from entries. An empty list is rejected: it would
    /// render no suggestions and could never match anything.
    pub fn new(entries: Vec<QnaEntry>) -> RdchatResult<Self> {
        if entries.is_empty() {
            return Err(QnaError::Empty);
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{"question", "answer"}` objects.
    pub fn from_json(json: &str) -> RdchatResult<Self> {
        let entries: Vec<QnaEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> RdchatResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| QnaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let list = Self::from_json(&json)?;
        debug!(path = %path.display(), entries = list.len(), "loaded QnA file");
        Ok(list)
    }

    /// First entry whose question is a case-insensitive substring of
    /// the input. Linear scan in list order.
    pub fn find_match(&self, input: &str) -> Option<&QnaEntry> {
        let input = input.to_lowercase();
        self.entries
            .iter()
            .find(|entry| input.contains(&entry.question.to_lowercase()))
    }

    /// Entry at a given position, in load order.
    pub fn get(&self, index: usize) -> Option<&QnaEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QnaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
