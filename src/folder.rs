//! Run the extractor over every calendar file of a directory.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::{Error, EventRecord, InvalidFilePolicy, extract::extract_events};

pub const CALENDAR_EXTENSION: &str = "ics";

fn is_calendar_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CALENDAR_EXTENSION))
}

/// The `.ics` files directly inside `folder`, in directory listing order.
pub fn calendar_files(folder: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = vec![];
    for entry in std::fs::read_dir(folder).map_err(Error::filesystem(folder))? {
        let entry = entry.map_err(Error::filesystem(folder))?;
        let path = entry.path();
        if is_calendar_file(&path) && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Concatenate the matching events of every calendar file in `folder`. No deduplication.
///
/// A missing or unreadable folder always fails. A file that cannot be read or parsed fails
/// the run or is skipped depending on `on_invalid_file`.
pub fn process_folder(
    folder: &Path,
    keywords: &[String],
    on_invalid_file: InvalidFilePolicy,
) -> Result<Vec<EventRecord>, Error> {
    let mut events = vec![];
    for path in calendar_files(folder)? {
        info!("Processing file: {}", path.display());
        match (extract_events(&path, keywords), on_invalid_file) {
            (Ok(found), _) => events.extend(found),
            (Err(err), InvalidFilePolicy::Skip) => warn!("Skipping file: {err}"),
            (Err(err), InvalidFilePolicy::Abort) => return Err(err),
        }
    }
    Ok(events)
}
