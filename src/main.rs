use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use icsmerge::{
    Config, InvalidFilePolicy,
    config::{DEFAULT_CSV_OUTPUT, DEFAULT_FOLDER, DEFAULT_TEXT_OUTPUT},
};

/// Process .ics files to extract and merge calendar events.
#[derive(Parser, Debug)]
#[command(name = "icsmerge")]
#[command(version)]
struct Cli {
    /// Path to the folder containing .ics files.
    #[arg(default_value = DEFAULT_FOLDER)]
    folder: PathBuf,

    /// Keywords to search for in events (OR query) [default: Meeting ClientX Discovery]
    keywords: Vec<String>,

    /// Where to write the text report.
    #[arg(long, default_value = DEFAULT_TEXT_OUTPUT)]
    text_output: PathBuf,

    /// Where to write the CSV report.
    #[arg(long, default_value = DEFAULT_CSV_OUTPUT)]
    csv_output: PathBuf,

    /// Warn about unreadable or malformed calendar files instead of aborting.
    #[arg(long)]
    skip_invalid: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            folder: cli.folder,
            text_output: cli.text_output,
            csv_output: cli.csv_output,
            on_invalid_file: if cli.skip_invalid {
                InvalidFilePolicy::Skip
            } else {
                InvalidFilePolicy::Abort
            },
            ..Config::default()
        }
        .with_keywords(cli.keywords)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from(Cli::parse());
    let summary = icsmerge::pipeline::run(&config)
        .with_context(|| format!("Failed to process {}", config.folder.display()))?;

    println!("{summary}");
    println!(
        "Filtered events have been saved to {} and {}.",
        config.text_output.display(),
        config.csv_output.display()
    );
    Ok(())
}
