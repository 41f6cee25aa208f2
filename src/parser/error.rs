use crate::{
    parser::ContentLineError,
    types::{InvalidDateTime, InvalidDuration},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("empty input")]
    EmptyInput,
    #[error("incomplete object")]
    NotComplete,
    #[error("missing header")]
    MissingHeader,
    #[error("mismatched END: expected {expected}, found {found}")]
    MismatchedEnd { expected: String, found: String },
    #[error("content line error: {0}")]
    ContentLineError(#[from] ContentLineError),
    #[error("missing property: {0}")]
    MissingProperty(&'static str),
    #[error("property conflict: {0}")]
    PropertyConflict(&'static str),
    #[error(transparent)]
    InvalidDuration(#[from] InvalidDuration),
    #[error(transparent)]
    DateTime(#[from] InvalidDateTime),
    #[error("invalid property value type for {0}: {1}")]
    InvalidPropertyType(&'static str, String),
}
