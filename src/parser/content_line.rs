//! Split the result of `LineReader` into content lines.
//!
//! A content line contains:
//! - A name formatted in uppercase.
//! - An optional list of parameters represented by a vector of `(key, values)` tuples. The key
//!   is formatted in uppercase and the values stay untouched (minus surrounding dquotes).
//! - A value that stays untouched. Unescaping is left to the typed property layer.
//!
//! # Examples
//!
//! ```rust
//! let input = b"ATTENDEE;CN=\"Doe, Jane\";ROLE=REQ-PARTICIPANT:mailto:jane@example.com\r\n";
//! let line = icsmerge::ContentLineParser::from_slice(input)
//!     .next()
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(line.name, "ATTENDEE");
//! assert_eq!(line.params.get_param("CN"), Some("Doe, Jane"));
//! assert_eq!(line.value.as_deref(), Some("mailto:jane@example.com"));
//! ```

use derive_more::From;
use std::borrow::Cow;
use std::fmt;
use std::iter::Iterator;

use super::{BytesLines, Line, LineError, LineReader};
use crate::{
    PARAM_DELIMITER, PARAM_NAME_DELIMITER, PARAM_QUOTE, PARAM_VALUE_DELIMITER, VALUE_DELIMITER,
};

/// Error arising when trying to parse a content line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentLineError {
    #[error("Line {0}: Missing property name.")]
    MissingName(usize),
    #[error("Line {0}: Missing a closing quote.")]
    MissingClosingQuote(usize),
    #[error("Line {0}: Missing a \"{1}\" delimiter.")]
    MissingDelimiter(usize, char),
    #[error("Line {0}: Missing content after \"{1}\".")]
    MissingContentAfter(usize, char),
    #[error("Line {0}: Missing a parameter key.")]
    MissingParamKey(usize),
    #[error("Line {0}: Missing value.")]
    MissingValue(usize),
    #[error(transparent)]
    LineError(#[from] LineError),
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, From)]
pub struct ContentLineParams(pub(crate) Vec<(String, Vec<String>)>);

impl ContentLineParams {
    #[inline]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| name == key)
            .and_then(|(_, value)| value.iter().map(String::as_ref).next())
    }

    #[inline]
    pub fn get_value_type(&self) -> Option<&str> {
        self.get_param("VALUE")
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An ICAL content line.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ContentLine {
    /// Property name.
    pub name: String,
    /// Property list of parameters.
    pub params: ContentLineParams,
    /// Property value.
    pub value: Option<String>,
    /// Physical line the content line started on.
    pub line: usize,
}

impl ContentLine {
    #[inline]
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name: {}\nparams: {:?}\nvalue: {:?}",
            self.name, self.params, self.value
        )
    }
}

pub struct ContentLineParser<'a, T: Iterator<Item = Cow<'a, [u8]>>>(LineReader<'a, T>);

impl<'a> ContentLineParser<'a, BytesLines<'a>> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        ContentLineParser(LineReader::from_slice(slice))
    }
}

impl<'a, T: Iterator<Item = Cow<'a, [u8]>>> ContentLineParser<'a, T> {
    pub fn new(line_reader: LineReader<'a, T>) -> Self {
        ContentLineParser(line_reader)
    }

    /// Parse the comma-separated values of one parameter.
    ///
    /// Returns the values and the remainder of the line, which starts with either
    /// `PARAM_DELIMITER` or `VALUE_DELIMITER`.
    fn parse_param_values<'l>(
        mut to_parse: &'l str,
        number: usize,
    ) -> Result<(Vec<String>, &'l str), ContentLineError> {
        // In almost all cases we'll have one parameter value
        let mut values = Vec::with_capacity(1);

        loop {
            if let Some(quoted) = to_parse.strip_prefix(PARAM_QUOTE) {
                // NAME;Foo="Bar:Baz":value
                let Some((content, remainder)) = quoted.split_once(PARAM_QUOTE) else {
                    return Err(ContentLineError::MissingClosingQuote(number));
                };
                values.push(content.to_owned());
                to_parse = remainder;
            } else {
                // NAME;Foo=Bar:value
                let Some(delim_pos) =
                    to_parse.find([PARAM_DELIMITER, VALUE_DELIMITER, PARAM_VALUE_DELIMITER])
                else {
                    return Err(ContentLineError::MissingContentAfter(
                        number,
                        PARAM_NAME_DELIMITER,
                    ));
                };
                let (content, remainder) = to_parse.split_at(delim_pos);
                values.push(content.to_owned());
                to_parse = remainder;
            }

            match to_parse.strip_prefix(PARAM_VALUE_DELIMITER) {
                Some(remainder) => to_parse = remainder,
                None => return Ok((values, to_parse)),
            }
        }
    }

    fn parse(&self, line: Line) -> Result<ContentLine, ContentLineError> {
        let number = line.number();
        let mut to_parse = line.as_str();

        let Some(name_end_pos) = to_parse.find([PARAM_DELIMITER, VALUE_DELIMITER]) else {
            return Err(ContentLineError::MissingName(number));
        };
        let (prop_name, remainder) = to_parse.split_at(name_end_pos);
        if prop_name.is_empty() {
            return Err(ContentLineError::MissingName(number));
        }
        to_parse = remainder;

        let mut params = vec![];
        while let Some(remainder) = to_parse.strip_prefix(PARAM_DELIMITER) {
            let Some((key, remainder)) = remainder.split_once(PARAM_NAME_DELIMITER) else {
                return Err(ContentLineError::MissingDelimiter(
                    number,
                    PARAM_NAME_DELIMITER,
                ));
            };
            if key.is_empty() {
                return Err(ContentLineError::MissingParamKey(number));
            }
            let (values, remainder) = Self::parse_param_values(remainder, number)?;
            params.push((key.to_uppercase(), values));
            to_parse = remainder;
        }

        let Some(value) = to_parse.strip_prefix(VALUE_DELIMITER) else {
            return Err(ContentLineError::MissingValue(number));
        };
        Ok(ContentLine {
            name: prop_name.to_uppercase(),
            params: params.into(),
            value: (!value.is_empty()).then(|| value.to_owned()),
            line: number,
        })
    }
}

impl<'a, T: Iterator<Item = Cow<'a, [u8]>>> Iterator for ContentLineParser<'a, T> {
    type Item = Result<ContentLine, ContentLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.0.next() {
            Some(Ok(line)) => Some(self.parse(line)),
            Some(Err(err)) => Some(Err(err.into())),
            None => None,
        }
    }
}
