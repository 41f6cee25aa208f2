use std::path::PathBuf;

use derive_more::{Deref, Display, From};

use crate::types::CalDateOrDateTime;

/// A `YYYY-MM-DD HH:MM` timestamp.
///
/// Ordering is the lexicographic order of the string, which is chronological for this format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, From)]
pub struct Timestamp(String);

impl From<&CalDateOrDateTime> for Timestamp {
    fn from(value: &CalDateOrDateTime) -> Self {
        Self(value.format())
    }
}

/// An event selected by at least one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Attendee identifiers in source order.
    pub guests: Vec<String>,
    pub location: String,
    /// Deduplication key; empty if the event has no UID.
    pub unique_id: String,
    pub source_file: PathBuf,
    /// The keywords that selected this event, in keyword-list order.
    pub matched_keywords: Vec<String>,
}

impl EventRecord {
    pub fn matched(&self, keyword: &str) -> bool {
        self.matched_keywords.iter().any(|k| k == keyword)
    }
}
