use std::path::PathBuf;

pub const DEFAULT_FOLDER: &str = "samples";
pub const DEFAULT_KEYWORDS: &[&str] = &["Meeting", "ClientX", "Discovery"];
pub const DEFAULT_TEXT_OUTPUT: &str = "merged_filtered_events.txt";
pub const DEFAULT_CSV_OUTPUT: &str = "merged_filtered_events.csv";

/// What to do with a calendar file that cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidFilePolicy {
    /// Stop the whole run with the error.
    #[default]
    Abort,
    /// Log a warning and continue with the next file.
    Skip,
}

/// Inputs of [`crate::pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned (non-recursively) for `.ics` files. Defaults to `samples`.
    pub folder: PathBuf,
    /// Keywords, OR-matched case-insensitively. Defaults to `Meeting`, `ClientX`, `Discovery`.
    pub keywords: Vec<String>,
    /// Defaults to `merged_filtered_events.txt`.
    pub text_output: PathBuf,
    /// Defaults to `merged_filtered_events.csv`.
    pub csv_output: PathBuf,
    pub on_invalid_file: InvalidFilePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: DEFAULT_FOLDER.into(),
            keywords: DEFAULT_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
            text_output: DEFAULT_TEXT_OUTPUT.into(),
            csv_output: DEFAULT_CSV_OUTPUT.into(),
            on_invalid_file: InvalidFilePolicy::default(),
        }
    }
}

impl Config {
    /// Replace the keywords, keeping the defaults if `keywords` is empty.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            self.keywords = keywords;
        }
        self
    }
}
