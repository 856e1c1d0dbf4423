//! Parser for the RFC 822 style timestamps accepted in query strings.
//!
//! The only accepted layout is `DD Mon YY HH:MM ZONE`, for example
//! `02 Jan 06 15:04 MST`.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// Reference rendering of the accepted layout.
pub const RFC822_LAYOUT: &str = "02 Jan 06 15:04 MST";

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Errors produced by [`parse_rfc822`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rfc822Error {
    #[error("expected layout \"02 Jan 06 15:04 MST\"")]
    Layout,

    #[error("invalid day of month: {0:?}")]
    Day(String),

    #[error("invalid month: {0:?}")]
    Month(String),

    #[error("invalid year: {0:?}")]
    Year(String),

    #[error("invalid time of day: {0:?}")]
    Clock(String),

    #[error("invalid time zone: {0:?}")]
    Zone(String),

    #[error("date does not exist")]
    OutOfRange,
}

/// Parses a `DD Mon YY HH:MM ZONE` timestamp into UTC.
///
/// # Rules
///
/// - Fields are separated by exactly one space, with nothing before or after
/// - Day, year and minute take exactly two digits; hour takes one or two
/// - Month is an English three-letter abbreviation, any case
/// - Two-digit years `69..=99` map to 19xx, `00..=68` to 20xx
/// - Zone is an upper-case abbreviation: three letters, or four/five ending in `T`
/// - `UTC`, `GMT` and the US zones (`EST`, `EDT`, `CST`, `CDT`, `MST`, `MDT`,
///   `PST`, `PDT`) use their offsets; other abbreviations are taken as UTC
///
/// # Errors
///
/// Returns [`Rfc822Error`] describing the first field that failed.
///
/// # Examples
///
/// ```
/// use movie_aggregator::utils::rfc822::parse_rfc822;
///
/// let ts = parse_rfc822("01 Jan 23 10:00 UTC").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2023-01-01T10:00:00+00:00");
///
/// assert!(parse_rfc822("2023-01-01T10:00:00Z").is_err());
/// ```
pub fn parse_rfc822(input: &str) -> Result<DateTime<Utc>, Rfc822Error> {
    let mut fields = input.split(' ');
    let (Some(day), Some(month), Some(year), Some(clock), Some(zone), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(Rfc822Error::Layout);
    };

    let day = fixed_digits(day, 2).ok_or_else(|| Rfc822Error::Day(day.to_string()))?;
    let month = month_number(month).ok_or_else(|| Rfc822Error::Month(month.to_string()))?;
    let year = fixed_digits(year, 2).ok_or_else(|| Rfc822Error::Year(year.to_string()))?;
    let year = if year >= 69 { 1900 + year } else { 2000 + year };

    let (hour, minute) = clock
        .split_once(':')
        .and_then(|(h, m)| Some((hour_digits(h)?, fixed_digits(m, 2)?)))
        .ok_or_else(|| Rfc822Error::Clock(clock.to_string()))?;

    let offset = zone_offset(zone).ok_or_else(|| Rfc822Error::Zone(zone.to_string()))?;

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or(Rfc822Error::OutOfRange)?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(Rfc822Error::OutOfRange)
}

fn fixed_digits(value: &str, width: usize) -> Option<u32> {
    if value.len() != width || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn hour_digits(value: &str) -> Option<u32> {
    match value.len() {
        1 | 2 => fixed_digits(value, value.len()),
        _ => None,
    }
}

fn month_number(value: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(value))
        .map(|idx| idx as u32 + 1)
}

fn zone_offset(zone: &str) -> Option<FixedOffset> {
    let hours = match zone {
        "UTC" | "GMT" => 0,
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        _ if is_zone_abbreviation(zone) => 0,
        _ => return None,
    };
    FixedOffset::east_opt(hours * 3600)
}

fn is_zone_abbreviation(zone: &str) -> bool {
    if !zone.bytes().all(|b| b.is_ascii_uppercase()) {
        return false;
    }
    match zone.len() {
        3 => true,
        4 | 5 => zone.ends_with('T'),
        _ => false,
    }
}
