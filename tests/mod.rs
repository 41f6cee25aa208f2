use std::fs;
use std::path::{Path, PathBuf};

use icsmerge::{Config, InvalidFilePolicy};
use tempfile::TempDir;

const TEAM: &[u8] = include_bytes!("./resources/team.ics");
const CLIENT: &[u8] = include_bytes!("./resources/client.ics");
const BROKEN: &[u8] = include_bytes!("./resources/broken.ics");

/// A scratch folder holding the given calendar files, with reports written next to it.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(files: &[(&str, &[u8])]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("calendars")).unwrap();
        for (name, content) in files {
            fs::write(dir.path().join("calendars").join(name), content).unwrap();
        }
        Self { dir }
    }

    fn folder(&self) -> PathBuf {
        self.dir.path().join("calendars")
    }

    fn config(&self, keywords: &[&str]) -> Config {
        Config {
            folder: self.folder(),
            text_output: self.dir.path().join("out.txt"),
            csv_output: self.dir.path().join("out.csv"),
            ..Config::default()
        }
        .with_keywords(keywords.iter().map(|&k| k.to_owned()).collect())
    }

    fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}

pub mod pipeline {
    use super::{BROKEN, CLIENT, TEAM, Workspace};
    use icsmerge::{Error, InvalidFilePolicy, pipeline::run};

    #[test]
    fn single_file_reports() {
        let ws = Workspace::new(&[("team.ics", TEAM)]);
        let config = ws.config(&[]);
        let summary = run(&config).unwrap();

        let folder = regex::escape(&ws.folder().display().to_string());
        insta::with_settings!({filters => vec![(folder.as_str(), "[DIR]")]}, {
            insta::assert_snapshot!(summary.to_string(), @r"
Events found for 'Meeting': 1
Events found for 'ClientX': 1
Events found for 'Discovery': 2
Overall duplicated events found across .ics files: 1
Duplicated events for keyword 'Meeting' in file '[DIR]/team.ics': 1
Total unique events stored in the file: 4
");
        });

        similar_asserts::assert_eq!(
            ws.read(&config.text_output),
            concat!(
                "Event: Offsite\n",
                "Start: 2024-01-03 00:00\n",
                "End: 2024-01-05 00:00\n",
                "Guests: \n",
                "Location: \n",
                "----------------------------------------\n",
                "Event: Lunch\n",
                "Start: 2024-01-05 12:00\n",
                "End: 2024-01-05 13:00\n",
                "Guests: \n",
                "Location: Cafe, Main St\n",
                "----------------------------------------\n",
                "Event: Weekly Team Meeting\n",
                "Start: 2024-01-08 10:00\n",
                "End: 2024-01-08 10:30\n",
                "Guests: alice@example.com, bob@example.com\n",
                "Location: Room A\n",
                "----------------------------------------\n",
                "Event: Planning\n",
                "Start: 2024-01-08 10:00\n",
                "End: 2024-01-08 10:45\n",
                "Guests: clientx-pm@partner.example\n",
                "Location: \n",
                "----------------------------------------\n",
            )
        );

        similar_asserts::assert_eq!(
            ws.read(&config.csv_output),
            concat!(
                "Start;End;Guest number;Event title or summary;Location;Guests\r\n",
                "2024-01-03 00:00;2024-01-05 00:00;0;Offsite;;\r\n",
                "2024-01-05 12:00;2024-01-05 13:00;0;Lunch;Cafe, Main St;\r\n",
                "2024-01-08 10:00;2024-01-08 10:30;2;Weekly Team Meeting;Room A;\"alice@example.com\nbob@example.com\"\r\n",
                "2024-01-08 10:00;2024-01-08 10:45;1;Planning;;clientx-pm@partner.example\r\n",
            )
        );
    }

    #[test]
    fn empty_folder() {
        let ws = Workspace::new(&[]);
        let config = ws.config(&["Meeting"]);
        let summary = run(&config).unwrap();

        assert_eq!(summary.unique_events, 0);
        assert_eq!(summary.duplicate_count, 0);
        assert_eq!(summary.keyword_counts, vec![("Meeting".to_owned(), 0)]);
        assert_eq!(
            ws.read(&config.text_output),
            "No events found with the specified keywords.\n"
        );
        assert_eq!(
            ws.read(&config.csv_output),
            "Start;End;Guest number;Event title or summary;Location;Guests\r\n"
        );
    }

    #[test]
    fn reruns_are_byte_identical() {
        let ws = Workspace::new(&[("team.ics", TEAM), ("client.ics", CLIENT)]);
        let config = ws.config(&[]);

        run(&config).unwrap();
        let first = (ws.read(&config.text_output), ws.read(&config.csv_output));
        run(&config).unwrap();
        let second = (ws.read(&config.text_output), ws.read(&config.csv_output));
        similar_asserts::assert_eq!(first, second);
    }

    #[test]
    fn missing_folder_fails() {
        let ws = Workspace::new(&[]);
        let mut config = ws.config(&[]);
        config.folder = ws.folder().join("does-not-exist");
        assert!(matches!(run(&config), Err(Error::Filesystem { .. })));
        assert!(!config.text_output.exists());
    }

    #[test]
    fn broken_file_policy() {
        let ws = Workspace::new(&[("team.ics", TEAM), ("broken.ics", BROKEN)]);
        let mut config = ws.config(&[]);
        assert!(matches!(run(&config), Err(Error::Parse { .. })));

        config.on_invalid_file = InvalidFilePolicy::Skip;
        let summary = run(&config).unwrap();
        assert_eq!(summary.unique_events, 4);
    }
}

pub mod properties {
    use super::{CLIENT, TEAM, Workspace};
    use icsmerge::{dedup::dedup_and_sort, folder::process_folder};
    use std::collections::HashSet;

    #[test]
    fn dedup_invariants_across_files() {
        let ws = Workspace::new(&[("team.ics", TEAM), ("client.ics", CLIENT)]);
        let config = ws.config(&[]);

        let events = process_folder(&config.folder, &config.keywords, config.on_invalid_file)
            .unwrap();
        let matched = events.len();
        assert_eq!(matched, 7);

        let result = dedup_and_sort(events);
        assert_eq!(result.events.len(), 5);
        assert_eq!(result.duplicate_count, matched - result.events.len());
        assert_eq!(
            result.duplicate_details.iter().map(|(_, _, n)| n).sum::<usize>(),
            2
        );

        assert!(result.events.windows(2).all(|w| w[0].start <= w[1].start));
        let uids = result
            .events
            .iter()
            .map(|e| e.unique_id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(uids.len(), result.events.len());
    }

    #[test]
    fn per_keyword_counts() {
        let ws = Workspace::new(&[("team.ics", TEAM), ("client.ics", CLIENT)]);
        let summary = icsmerge::pipeline::run(&ws.config(&[])).unwrap();
        assert_eq!(
            summary.keyword_counts,
            vec![
                ("Meeting".to_owned(), 1),
                ("ClientX".to_owned(), 2),
                ("Discovery".to_owned(), 3),
            ]
        );
    }
}

pub mod scenarios {
    use super::Workspace;
    use icsmerge::pipeline::run;
    use std::path::Path;

    fn calendar(events: &[&str]) -> Vec<u8> {
        let mut out = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
        for event in events {
            out += "BEGIN:VEVENT\r\n";
            out += event;
            out += "END:VEVENT\r\n";
        }
        out += "END:VCALENDAR\r\n";
        out.into_bytes()
    }

    #[test]
    fn duplicate_uid_in_one_file() {
        let cal = calendar(&[
            "UID:same\r\nSUMMARY:Team Meeting\r\nDTSTART:20240101T100000\r\nDTEND:20240101T110000\r\n",
            "UID:same\r\nSUMMARY:Team Meeting\r\nDTSTART:20240101T100000\r\nDTEND:20240101T110000\r\n",
        ]);
        let ws = Workspace::new(&[("dup.ics", cal.as_slice())]);
        let summary = run(&ws.config(&["Meeting"])).unwrap();

        assert_eq!(summary.unique_events, 1);
        assert_eq!(summary.duplicate_count, 1);
        assert_eq!(
            summary
                .duplicate_details
                .get("Meeting", &ws.folder().join("dup.ics")),
            1
        );
        assert_eq!(
            summary
                .duplicate_details
                .get("Meeting", Path::new("other.ics")),
            0
        );
    }

    #[test]
    fn lowercase_keyword_and_no_attendees() {
        let cal = calendar(&[
            "UID:1\r\nSUMMARY:Board Meeting\r\nDTSTART:20240101T100000\r\nDTEND:20240101T110000\r\n",
        ]);
        let ws = Workspace::new(&[("a.ics", cal.as_slice())]);
        let config = ws.config(&["meeting"]);
        let summary = run(&config).unwrap();

        assert_eq!(summary.keyword_counts, vec![("meeting".to_owned(), 1)]);
        similar_asserts::assert_eq!(
            ws.read(&config.csv_output),
            concat!(
                "Start;End;Guest number;Event title or summary;Location;Guests\r\n",
                "2024-01-01 10:00;2024-01-01 11:00;0;Board Meeting;;\r\n",
            )
        );
    }

    #[test]
    fn identical_starts_keep_file_order() {
        let cal = calendar(&[
            "UID:z\r\nSUMMARY:Meeting Z\r\nDTSTART:20240101T100000\r\nDTEND:20240101T110000\r\n",
            "UID:a\r\nSUMMARY:Meeting A\r\nDTSTART:20240101T100000\r\nDTEND:20240101T103000\r\n",
        ]);
        let ws = Workspace::new(&[("a.ics", cal.as_slice())]);
        let config = ws.config(&["Meeting"]);
        run(&config).unwrap();

        let text = ws.read(&config.text_output);
        let titles = text
            .lines()
            .filter_map(|line| line.strip_prefix("Event: "))
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Meeting Z", "Meeting A"]);
    }

    #[test]
    fn attendee_only_match() {
        let cal = calendar(&[
            "UID:1\r\nSUMMARY:Sync\r\nDTSTART:20240101T100000\r\nDTEND:20240101T110000\r\nATTENDEE:mailto:ops@clientx.example\r\n",
        ]);
        let ws = Workspace::new(&[("a.ics", cal.as_slice())]);
        let summary = run(&ws.config(&["ClientX", "Meeting"])).unwrap();
        assert_eq!(
            summary.keyword_counts,
            vec![("ClientX".to_owned(), 1), ("Meeting".to_owned(), 0)]
        );
    }
}

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.folder, Path::new("samples"));
    assert_eq!(config.keywords, vec!["Meeting", "ClientX", "Discovery"]);
    assert_eq!(config.text_output, Path::new("merged_filtered_events.txt"));
    assert_eq!(config.csv_output, Path::new("merged_filtered_events.csv"));
    assert_eq!(config.on_invalid_file, InvalidFilePolicy::Abort);
}
