use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;

/// Format used in the reports, minute precision.
pub const REPORT_FORMAT: &str = "%Y-%m-%d %H:%M";

lazy_static! {
    static ref RE_DATE: regex::Regex = regex::Regex::new(r"^(\d{4})(\d{2})(\d{2})$").unwrap();
    static ref RE_DATETIME: regex::Regex =
        regex::Regex::new(r"^(\d{4})(\d{2})(\d{2})T(\d{2})(\d{2})(\d{2})(Z)?$").unwrap();
}

/// Largest year that still renders as four digits in [`REPORT_FORMAT`].
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InvalidDateTime {
    #[error("invalid DATE value: {0:?}")]
    Date(String),
    #[error("invalid DATE-TIME value: {0:?}")]
    DateTime(String),
    #[error("{0} plus {1} is out of range")]
    OutOfRange(String, chrono::Duration),
}

/// A DATE or DATE-TIME value as written in the calendar file.
///
/// The wall clock is kept as written, a trailing `Z` or a `TZID` parameter does not convert it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalDateOrDateTime {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

fn num<T: std::str::FromStr>(captures: &regex::Captures, idx: usize) -> Option<T> {
    captures.get(idx)?.as_str().parse().ok()
}

impl CalDateOrDateTime {
    pub fn parse_date(value: &str) -> Result<Self, InvalidDateTime> {
        let err = || InvalidDateTime::Date(value.to_owned());
        let captures = RE_DATE.captures(value).ok_or_else(err)?;
        NaiveDate::from_ymd_opt(
            num(&captures, 1).ok_or_else(err)?,
            num(&captures, 2).ok_or_else(err)?,
            num(&captures, 3).ok_or_else(err)?,
        )
        .map(Self::Date)
        .ok_or_else(err)
    }

    pub fn parse_datetime(value: &str) -> Result<Self, InvalidDateTime> {
        let err = || InvalidDateTime::DateTime(value.to_owned());
        let captures = RE_DATETIME.captures(value).ok_or_else(err)?;
        let date = NaiveDate::from_ymd_opt(
            num(&captures, 1).ok_or_else(err)?,
            num(&captures, 2).ok_or_else(err)?,
            num(&captures, 3).ok_or_else(err)?,
        )
        .ok_or_else(err)?;
        // RFC 5545 allows a leap second, chrono wants it as 59s + 1000ms
        let (second, milli) = match num::<u32>(&captures, 6).ok_or_else(err)? {
            60 => (59, 1_000),
            second => (second, 0),
        };
        let time = NaiveTime::from_hms_milli_opt(
            num(&captures, 4).ok_or_else(err)?,
            num(&captures, 5).ok_or_else(err)?,
            second,
            milli,
        )
        .ok_or_else(err)?;
        Ok(Self::DateTime(date.and_time(time)))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Wall clock of the value; a DATE starts at midnight.
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(datetime) => *datetime,
        }
    }

    pub fn format(&self) -> String {
        self.naive().format(REPORT_FORMAT).to_string()
    }

    /// Shift the value by `duration`.
    ///
    /// A DATE stays a DATE only for whole-day durations. Fails if the result leaves the
    /// years `0000..=9999`.
    pub fn checked_add(&self, duration: chrono::Duration) -> Result<Self, InvalidDateTime> {
        let shifted = match self {
            Self::Date(date) if duration.num_seconds() % 86_400 == 0 => {
                date.checked_add_signed(duration).map(Self::Date)
            }
            _ => self.naive().checked_add_signed(duration).map(Self::DateTime),
        };
        shifted
            .filter(|value| (0..=MAX_YEAR).contains(&value.naive().year()))
            .ok_or_else(|| InvalidDateTime::OutOfRange(self.format(), duration))
    }
}
