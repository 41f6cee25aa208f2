//! Merge keyword-matching events from a folder of iCalendar files.
//!
//! The crate is a linear pipeline:
//!
//! 1. [`extract`] parses one `.ics` file and keeps the events matching any keyword.
//! 2. [`folder`] runs the extractor over every `.ics` file of a directory.
//! 3. [`dedup`] drops events whose UID was already seen and sorts the rest by start.
//! 4. [`report`] renders the console summary, the text report and the CSV report.
//!
//! [`pipeline::run`] wires all of them together from a [`Config`].

const PARAM_VALUE_DELIMITER: char = ',';
const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';
const PARAM_QUOTE: char = '"';

pub mod component;
pub use component::{IcalCalendar, IcalComponent, IcalEvent};

pub mod parser;
pub use parser::{ComponentParser, ContentLineParser, IcalParser, LineReader, ParserError};

pub mod property;

pub mod types;

mod error;
pub use error::Error;

pub mod config;
pub use config::{Config, InvalidFilePolicy};

pub mod event;
pub use event::{EventRecord, Timestamp};

pub mod extract;
pub mod folder;
pub mod dedup;
pub mod report;
pub mod pipeline;
