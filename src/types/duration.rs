use chrono::Duration;
use lazy_static::lazy_static;

lazy_static! {
    static ref RE_DURATION: regex::Regex = regex::Regex::new(
        r"^(?<sign>[+-])?P((?<W>\d+)W)?((?<D>\d+)D)?(T((?<H>\d+)H)?((?<M>\d+)M)?((?<S>\d+)S)?)?$"
    )
    .unwrap();
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Invalid duration: {0}")]
pub struct InvalidDuration(String);

/// Parse an RFC 5545 DURATION value such as `PT1H30M`, `P1D` or `-P2W`.
pub fn parse_duration(string: &str) -> Result<Duration, InvalidDuration> {
    let err = || InvalidDuration(string.to_owned());
    let captures = RE_DURATION.captures(string).ok_or_else(err)?;

    // "P" and "PT" alone carry no value
    if !["W", "D", "H", "M", "S"]
        .iter()
        .any(|part| captures.name(part).is_some())
    {
        return Err(err());
    }

    let part = |name: &str| -> Result<i64, InvalidDuration> {
        captures
            .name(name)
            .map_or(Ok(0), |m| m.as_str().parse().map_err(|_| err()))
    };

    let mut duration = Duration::try_weeks(part("W")?)
        .zip(Duration::try_days(part("D")?))
        .zip(Duration::try_hours(part("H")?))
        .zip(Duration::try_minutes(part("M")?))
        .zip(Duration::try_seconds(part("S")?))
        .and_then(|((((w, d), h), m), s)| {
            w.checked_add(&d)?
                .checked_add(&h)?
                .checked_add(&m)?
                .checked_add(&s)
        })
        .ok_or_else(err)?;

    if captures.name("sign").is_some_and(|sign| sign.as_str() == "-") {
        duration = -duration;
    }
    Ok(duration)
}
