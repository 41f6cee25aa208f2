//! Read raw bytes and yield unfolded content lines.
//!
//! RFC 5545 folds long lines by inserting a line break followed by a single space or
//! horizontal tab. The `LineReader` joins those continuations back into one logical line.
//! Folding is allowed to split a multi-octet UTF-8 sequence, so the raw bytes are joined
//! first and only then validated as UTF-8.
//!
//! Both `\r\n` and bare `\n` line endings are accepted and blank lines are skipped.
//!
//! # Examples
//!
//! ```rust
//! let input = b"BEGIN:VCALENDAR\r\nSUMMARY:Long\r\n  title\r\nEND:VCALENDAR\r\n";
//! let lines = icsmerge::LineReader::from_slice(input)
//!     .map(|line| line.unwrap().to_string())
//!     .collect::<Vec<_>>();
//! assert_eq!(lines, vec!["BEGIN:VCALENDAR", "SUMMARY:Long title", "END:VCALENDAR"]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::iter::Peekable;
use std::marker::PhantomData;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LineError {
    #[error("Line {0}: Invalid UTF-8.")]
    InvalidUtf8(usize),
    #[error("Line {0}: Invalid control character.")]
    ControlCharacter(usize),
}

/// An unfolded line along with the number of the physical line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub inner: Cow<'a, str>,
    number: usize,
}

impl<'a> Line<'a> {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Split a byte slice on `\n`, dropping a trailing `\r`.
pub struct BytesLines<'a> {
    remainder: Option<&'a [u8]>,
}

impl<'a> BytesLines<'a> {
    pub fn new(slice: &'a [u8]) -> Self {
        let slice = slice.strip_prefix(UTF8_BOM).unwrap_or(slice);
        Self {
            remainder: (!slice.is_empty()).then_some(slice),
        }
    }
}

impl<'a> Iterator for BytesLines<'a> {
    type Item = Cow<'a, [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        let slice = self.remainder?;
        let (line, rest) = match slice.iter().position(|&b| b == b'\n') {
            Some(pos) => (&slice[..pos], &slice[pos + 1..]),
            None => (slice, &[][..]),
        };
        self.remainder = (!rest.is_empty()).then_some(rest);
        Some(Cow::Borrowed(line.strip_suffix(b"\r").unwrap_or(line)))
    }
}

pub struct LineReader<'a, I: Iterator<Item = Cow<'a, [u8]>>> {
    lines: Peekable<I>,
    number: usize,
    _t: PhantomData<&'a [u8]>,
}

impl<'a> LineReader<'a, BytesLines<'a>> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        Self::new(BytesLines::new(slice))
    }
}

impl<'a, I: Iterator<Item = Cow<'a, [u8]>>> LineReader<'a, I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines: lines.peekable(),
            number: 0,
            _t: PhantomData,
        }
    }

    fn is_continuation(line: &[u8]) -> bool {
        matches!(line.first(), Some(b' ' | b'\t'))
    }
}

impl<'a, I: Iterator<Item = Cow<'a, [u8]>>> Iterator for LineReader<'a, I> {
    type Item = Result<Line<'a>, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = loop {
            let line = self.lines.next()?;
            self.number += 1;
            if !line.is_empty() {
                break line;
            }
        };
        let number = self.number;

        while let Some(next) = self.lines.peek() {
            if !Self::is_continuation(next) {
                break;
            }
            let Some(next) = self.lines.next() else {
                break;
            };
            self.number += 1;
            raw.to_mut().extend_from_slice(&next[1..]);
        }

        // Tabs are allowed inside values, every other C0 control character is not
        if raw.iter().any(|&b| b < 0x20 && b != b'\t') {
            return Some(Err(LineError::ControlCharacter(number)));
        }

        let inner = match raw {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).map(Cow::Borrowed).ok(),
            Cow::Owned(bytes) => String::from_utf8(bytes).map(Cow::Owned).ok(),
        };
        Some(
            inner
                .map(|inner| Line { inner, number })
                .ok_or(LineError::InvalidUtf8(number)),
        )
    }
}
