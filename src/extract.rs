//! Read one calendar file and keep the events matching any keyword.

use std::path::Path;

use log::{debug, warn};

use crate::{Error, EventRecord, IcalEvent, IcalParser, ParserError, Timestamp};

/// Case-folded search corpus of an event: title, description and attendee identifiers.
struct SearchText {
    title: String,
    description: String,
    attendees: Vec<String>,
}

impl SearchText {
    fn new(event: &IcalEvent) -> Self {
        Self {
            title: event.get_summary().unwrap_or_default().to_lowercase(),
            description: event.get_description().unwrap_or_default().to_lowercase(),
            attendees: event
                .attendee_identifiers()
                .into_iter()
                .map(str::to_lowercase)
                .collect(),
        }
    }

    fn contains(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.contains(&keyword)
            || self.description.contains(&keyword)
            || self.attendees.iter().any(|a| a.contains(&keyword))
    }
}

/// The keywords matching `event`, in the order of `keywords`.
///
/// A keyword matches if it is a case-insensitive substring of the title, the description or
/// any single attendee identifier.
pub fn match_keywords(event: &IcalEvent, keywords: &[String]) -> Vec<String> {
    let text = SearchText::new(event);
    keywords
        .iter()
        .filter(|keyword| text.contains(keyword))
        .cloned()
        .collect()
}

/// Turn a matched event into a record. Fails if its start or end cannot be resolved.
pub fn to_record(
    event: &IcalEvent,
    source_file: &Path,
    matched_keywords: Vec<String>,
) -> Result<EventRecord, Error> {
    let malformed = |reason: ParserError| Error::MalformedEvent {
        uid: event.get_uid().unwrap_or_default().to_owned(),
        reason,
    };
    let start = event.start().map_err(malformed)?;
    let end = event.end().map_err(malformed)?;

    Ok(EventRecord {
        title: event.get_summary().unwrap_or_default().to_owned(),
        start: Timestamp::from(&start),
        end: Timestamp::from(&end),
        guests: event
            .attendee_identifiers()
            .into_iter()
            .map(str::to_owned)
            .collect(),
        location: event.get_location().unwrap_or_default().to_owned(),
        unique_id: event.get_uid().unwrap_or_default().to_owned(),
        source_file: source_file.to_owned(),
        matched_keywords,
    })
}

/// Extract the matching events of calendar data read from `source_file`.
///
/// Matched events without a usable start or end are skipped with a warning.
pub fn extract_from_slice(
    input: &[u8],
    source_file: &Path,
    keywords: &[String],
) -> Result<Vec<EventRecord>, ParserError> {
    let calendars = IcalParser::from_slice(input).collect_all()?;

    let mut records = vec![];
    for event in calendars.iter().flat_map(|cal| cal.events.iter()) {
        let matched = match_keywords(event, keywords);
        if matched.is_empty() {
            continue;
        }
        match to_record(event, source_file, matched) {
            Ok(record) => {
                debug!(
                    "Matched {:?} ({}) for {:?}",
                    record.title, record.start, record.matched_keywords
                );
                records.push(record);
            }
            Err(err) => warn!("Skipping event in {}: {err}", source_file.display()),
        }
    }
    Ok(records)
}

/// Extract the matching events of one calendar file, in file order.
pub fn extract_events(path: &Path, keywords: &[String]) -> Result<Vec<EventRecord>, Error> {
    let input = std::fs::read(path).map_err(Error::filesystem(path))?;
    extract_from_slice(&input, path, keywords).map_err(|source| Error::Parse {
        path: path.to_owned(),
        source,
    })
}
