//! Drop repeated events and order the rest chronologically.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::EventRecord;

/// Duplicate counts keyed by keyword, then by source file, both in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateDetails(Vec<(String, Vec<(PathBuf, usize)>)>);

impl DuplicateDetails {
    pub fn increment(&mut self, keyword: &str, file: &Path) {
        let pos = match self.0.iter().position(|(k, _)| k == keyword) {
            Some(pos) => pos,
            None => {
                self.0.push((keyword.to_owned(), vec![]));
                self.0.len() - 1
            }
        };
        let files = &mut self.0[pos].1;
        match files.iter_mut().find(|(f, _)| f == file) {
            Some((_, count)) => *count += 1,
            None => files.push((file.to_owned(), 1)),
        }
    }

    pub fn get(&self, keyword: &str, file: &Path) -> usize {
        self.iter()
            .find(|(k, f, _)| *k == keyword && *f == file)
            .map_or(0, |(_, _, count)| count)
    }

    /// `(keyword, file, count)` triples, all counts are non-zero.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path, usize)> {
        self.0.iter().flat_map(|(keyword, files)| {
            files
                .iter()
                .map(move |(file, count)| (keyword.as_str(), file.as_path(), *count))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    /// First occurrence of every UID, sorted by start.
    pub events: Vec<EventRecord>,
    /// Number of dropped events, `input.len() - events.len()`.
    pub duplicate_count: usize,
    pub duplicate_details: DuplicateDetails,
}

/// Keep the first event of every UID, then stable-sort by start.
///
/// Every dropped event is counted once globally and once per matched keyword under its own
/// source file. Events sharing a start keep their first-seen order.
pub fn dedup_and_sort(events: impl IntoIterator<Item = EventRecord>) -> Deduplicated {
    let mut seen = HashSet::new();
    let mut out = Deduplicated::default();

    for event in events {
        if seen.insert(event.unique_id.clone()) {
            out.events.push(event);
            continue;
        }
        out.duplicate_count += 1;
        for keyword in &event.matched_keywords {
            out.duplicate_details.increment(keyword, &event.source_file);
        }
    }

    out.events.sort_by(|a, b| a.start.cmp(&b.start));
    out
}
