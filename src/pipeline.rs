//! The whole run: folder -> extraction -> dedup/sort -> reports.

use std::fs::File;
use std::io::BufWriter;

use log::info;

use crate::{
    Config, Error,
    dedup::dedup_and_sort,
    folder::process_folder,
    report::{Summary, write_csv_report, write_text_report},
};

/// Process `config.folder` and write both reports, returning the console summary.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let events = process_folder(&config.folder, &config.keywords, config.on_invalid_file)?;
    let matched = events.len();
    let result = dedup_and_sort(events);
    info!(
        "{matched} matching events, {} after removing duplicates",
        result.events.len()
    );

    let text = File::create(&config.text_output).map_err(Error::filesystem(&config.text_output))?;
    write_text_report(BufWriter::new(text), &result.events)
        .map_err(Error::filesystem(&config.text_output))?;

    let csv = File::create(&config.csv_output).map_err(Error::filesystem(&config.csv_output))?;
    write_csv_report(BufWriter::new(csv), &result.events)?;

    Ok(Summary::new(&result, &config.keywords))
}
