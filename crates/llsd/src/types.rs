//! Scalar support types: [`Uuid`], [`Date`] and [`Uri`].
//!
//! Binary payloads need no wrapper and are carried as `Vec<u8>`.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

pub use uuid::Uuid;

/// `strftime` layout of the canonical date string.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const NANOS_PER_SEC: i64 = 1_000_000_000;

fn uuid_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("uuid pattern compiles")
    })
}

fn date_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
            .expect("date pattern compiles")
    })
}

/// Parses the canonical lowercase `8-4-4-4-12` form. Uppercase, braced,
/// URN and simple (unhyphenated) renderings are rejected.
pub fn parse_canonical_uuid(s: &str) -> Option<Uuid> {
    if !uuid_regex().is_match(s) {
        return None;
    }
    Uuid::parse_str(s).ok()
}

/// An instant in time, always handled in UTC.
///
/// On the binary wire a date is a count of seconds since the Unix epoch as
/// an IEEE-754 double; the fractional part is kept to nanosecond resolution.
/// The textual form drops sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(DateTime<Utc>);

impl Date {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Builds a date from seconds since the Unix epoch.
    ///
    /// Returns `None` for NaN, infinities and instants outside the range
    /// `chrono` can represent.
    pub fn from_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
            return None;
        }
        let mut secs = whole as i64;
        let mut nanos = ((seconds - whole) * NANOS_PER_SEC as f64).round() as i64;
        if nanos >= NANOS_PER_SEC {
            secs = secs.checked_add(1)?;
            nanos -= NANOS_PER_SEC;
        }
        DateTime::from_timestamp(secs, nanos as u32).map(Self)
    }

    /// Seconds since the Unix epoch, the binary payload of a date.
    pub fn seconds(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / NANOS_PER_SEC as f64
    }

    /// Parses exactly `YYYY-MM-DDTHH:MM:SSZ` as UTC.
    ///
    /// Strings that have the right shape but name no real instant
    /// (month 13, February 30th) yield `None`. So does a leap second
    /// (`:60`), which has no distinct epoch-seconds value.
    pub fn parse_canonical(s: &str) -> Option<Self> {
        if !date_regex().is_match(s) {
            return None;
        }
        let naive = NaiveDateTime::parse_from_str(s, DATE_FORMAT).ok()?;
        // chrono encodes a leap second as nanosecond >= 1e9.
        if i64::from(naive.nanosecond()) >= NANOS_PER_SEC {
            return None;
        }
        Some(Self(naive.and_utc()))
    }

    /// Years outside `0000..=9999` render with a sign and extra digits
    /// (`+10000-01-01T00:00:00Z`). That text is not canonical and parses
    /// back as a plain string.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for Date {
    fn default() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

/// A URI. The text is opaque and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uri(String);

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_canonical_string_is_utc() {
        let date = Date::from_seconds(1_763_209_800.0).unwrap();
        assert_eq!(date.to_string(), "2025-11-15T12:30:00Z");
        assert_eq!(Date::parse_canonical("2025-11-15T12:30:00Z"), Some(date));
    }

    #[test]
    fn date_seconds_keep_fraction() {
        let date = Date::from_seconds(1.5).unwrap();
        assert_eq!(date.seconds(), 1.5);
        assert_eq!(date.to_string(), "1970-01-01T00:00:01Z");

        let before_epoch = Date::from_seconds(-0.25).unwrap();
        assert_eq!(before_epoch.seconds(), -0.25);
        assert_eq!(before_epoch.to_string(), "1969-12-31T23:59:59Z");
    }

    #[test]
    fn date_rejects_non_finite_seconds() {
        assert_eq!(Date::from_seconds(f64::NAN), None);
        assert_eq!(Date::from_seconds(f64::INFINITY), None);
        assert_eq!(Date::from_seconds(1e300), None);
    }

    #[test]
    fn date_parse_is_strict() {
        assert_eq!(Date::parse_canonical("2025-11-15T12:30:00"), None);
        assert_eq!(Date::parse_canonical("2025-11-15 12:30:00Z"), None);
        assert_eq!(Date::parse_canonical("2025-11-15T12:30:00.5Z"), None);
        assert_eq!(Date::parse_canonical("2025-13-15T12:30:00Z"), None);
        assert_eq!(Date::parse_canonical("2025-1-15T12:30:00Z"), None);
    }

    #[test]
    fn date_parse_rejects_leap_second() {
        assert_eq!(Date::parse_canonical("2016-12-31T23:59:60Z"), None);
        assert!(Date::parse_canonical("2016-12-31T23:59:59Z").is_some());
    }

    #[test]
    fn date_beyond_year_9999_is_not_canonical() {
        let date = Date::from_seconds(253_402_300_800.0).unwrap();
        assert_eq!(date.to_canonical_string(), "+10000-01-01T00:00:00Z");
        assert_eq!(Date::parse_canonical(&date.to_canonical_string()), None);

        let last = Date::from_seconds(253_402_300_799.0).unwrap();
        assert_eq!(last.to_canonical_string(), "9999-12-31T23:59:59Z");
        assert_eq!(Date::parse_canonical("9999-12-31T23:59:59Z"), Some(last));
    }

    #[test]
    fn default_date_is_epoch() {
        assert_eq!(Date::default().seconds(), 0.0);
        assert_eq!(Date::default().to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn uuid_canonical_form_only() {
        let text = "6bad258e-06f0-4f36-bf1b-0ee2a3f9c6a1";
        let uuid = parse_canonical_uuid(text).unwrap();
        assert_eq!(uuid.to_string(), text);
        assert_eq!(parse_canonical_uuid(&text.to_uppercase()), None);
        assert_eq!(parse_canonical_uuid(&text.replace('-', "")), None);
        assert_eq!(parse_canonical_uuid(&format!("{{{text}}}")), None);
    }
}
