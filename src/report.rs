//! Keyword statistics, console summary, text report and CSV report.

use std::fmt;
use std::io::Write;

use itertools::Itertools;

use crate::{EventRecord, dedup::Deduplicated, dedup::DuplicateDetails};

pub const NO_EVENTS: &str = "No events found with the specified keywords.";
pub const CSV_HEADER: [&str; 6] = [
    "Start",
    "End",
    "Guest number",
    "Event title or summary",
    "Location",
    "Guests",
];
const RULE_WIDTH: usize = 40;

/// Number of retained events matched by each distinct keyword, in keyword-list order.
///
/// An event matching several keywords counts once for each of them.
pub fn keyword_counts(events: &[EventRecord], keywords: &[String]) -> Vec<(String, usize)> {
    keywords
        .iter()
        .unique()
        .map(|keyword| {
            let count = events.iter().filter(|e| e.matched(keyword)).count();
            (keyword.to_owned(), count)
        })
        .collect()
}

/// The console summary of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub keyword_counts: Vec<(String, usize)>,
    pub duplicate_count: usize,
    pub duplicate_details: DuplicateDetails,
    pub unique_events: usize,
}

impl Summary {
    pub fn new(result: &Deduplicated, keywords: &[String]) -> Self {
        Self {
            keyword_counts: keyword_counts(&result.events, keywords),
            duplicate_count: result.duplicate_count,
            duplicate_details: result.duplicate_details.clone(),
            unique_events: result.events.len(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (keyword, count) in &self.keyword_counts {
            writeln!(f, "Events found for '{keyword}': {count}")?;
        }
        writeln!(
            f,
            "Overall duplicated events found across .ics files: {}",
            self.duplicate_count
        )?;
        for (keyword, file, count) in self.duplicate_details.iter() {
            writeln!(
                f,
                "Duplicated events for keyword '{keyword}' in file '{}': {count}",
                file.display()
            )?;
        }
        write!(
            f,
            "Total unique events stored in the file: {}",
            self.unique_events
        )
    }
}

/// One block per event followed by a dash rule, or a single line if there are none.
pub fn write_text_report<W: Write>(mut out: W, events: &[EventRecord]) -> std::io::Result<()> {
    if events.is_empty() {
        writeln!(out, "{NO_EVENTS}")?;
        return out.flush();
    }
    for event in events {
        writeln!(out, "Event: {}", event.title)?;
        writeln!(out, "Start: {}", event.start)?;
        writeln!(out, "End: {}", event.end)?;
        writeln!(out, "Guests: {}", event.guests.iter().join(", "))?;
        writeln!(out, "Location: {}", event.location)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    }
    out.flush()
}

/// Semicolon-separated CSV with a header row; every guest sits on its own line of one cell.
pub fn write_csv_report<W: Write>(out: W, events: &[EventRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for event in events {
        let guest_number = event.guests.len().to_string();
        let guests = event.guests.iter().join("\n");
        writer.write_record([
            event.start.as_str(),
            event.end.as_str(),
            guest_number.as_str(),
            event.title.as_str(),
            event.location.as_str(),
            guests.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Summary, keyword_counts, write_csv_report, write_text_report};
    use crate::{EventRecord, dedup::dedup_and_sort};
    use std::path::PathBuf;

    fn record(uid: &str, title: &str, guests: &[&str], keywords: &[&str]) -> EventRecord {
        EventRecord {
            title: title.to_owned(),
            start: "2024-03-01 09:00".to_owned().into(),
            end: "2024-03-01 10:00".to_owned().into(),
            guests: guests.iter().map(|&g| g.to_owned()).collect(),
            location: "HQ; 3rd floor".to_owned(),
            unique_id: uid.to_owned(),
            source_file: PathBuf::from("cal.ics"),
            matched_keywords: keywords.iter().map(|&k| k.to_owned()).collect(),
        }
    }

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|&k| k.to_owned()).collect()
    }

    #[test]
    fn counts_per_distinct_keyword() {
        let events = vec![
            record("1", "a", &[], &["Meeting", "ClientX"]),
            record("2", "b", &[], &["Meeting"]),
        ];
        assert_eq!(
            keyword_counts(&events, &keywords(&["Meeting", "ClientX", "Discovery", "Meeting"])),
            vec![
                ("Meeting".to_owned(), 2),
                ("ClientX".to_owned(), 1),
                ("Discovery".to_owned(), 0),
            ]
        );
    }

    #[test]
    fn summary_lines() {
        let result = dedup_and_sort(vec![
            record("1", "a", &[], &["Meeting"]),
            record("1", "a", &[], &["Meeting"]),
        ]);
        let summary = Summary::new(&result, &keywords(&["Meeting", "ClientX"]));
        similar_asserts::assert_eq!(
            summary.to_string(),
            concat!(
                "Events found for 'Meeting': 1\n",
                "Events found for 'ClientX': 0\n",
                "Overall duplicated events found across .ics files: 1\n",
                "Duplicated events for keyword 'Meeting' in file 'cal.ics': 1\n",
                "Total unique events stored in the file: 1",
            )
        );
    }

    #[test]
    fn text_report() {
        let mut out = vec![];
        write_text_report(
            &mut out,
            &[record("1", "Sync", &["a@x.org", "b@x.org"], &["Sync"])],
        )
        .unwrap();
        similar_asserts::assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                "Event: Sync\n",
                "Start: 2024-03-01 09:00\n",
                "End: 2024-03-01 10:00\n",
                "Guests: a@x.org, b@x.org\n",
                "Location: HQ; 3rd floor\n",
                "----------------------------------------\n",
            )
        );
    }

    #[test]
    fn empty_text_report() {
        let mut out = vec![];
        write_text_report(&mut out, &[]).unwrap();
        assert_eq!(out, b"No events found with the specified keywords.\n");
    }

    #[test]
    fn csv_report() {
        let mut out = vec![];
        write_csv_report(
            &mut out,
            &[
                record("1", "Sync", &["a@x.org", "b@x.org"], &["Sync"]),
                record("2", "Solo", &[], &["Solo"]),
            ],
        )
        .unwrap();
        similar_asserts::assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                "Start;End;Guest number;Event title or summary;Location;Guests\r\n",
                "2024-03-01 09:00;2024-03-01 10:00;2;Sync;\"HQ; 3rd floor\";\"a@x.org\nb@x.org\"\r\n",
                "2024-03-01 09:00;2024-03-01 10:00;0;Solo;\"HQ; 3rd floor\";\r\n",
            )
        );
    }

    #[test]
    fn empty_csv_report() {
        let mut out = vec![];
        write_csv_report(&mut out, &[]).unwrap();
        assert_eq!(
            out,
            b"Start;End;Guest number;Event title or summary;Location;Guests\r\n"
        );
    }
}
