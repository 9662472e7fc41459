//! Caption timestamps.
//!
//! A `Timestamp` is a non-negative offset in seconds with the canonical text
//! form `HH:MM:SS.D` (one decisecond digit). Arithmetic that may go negative
//! (hit-testing, drag deltas) is done on plain `f64` seconds; converting back
//! into a `Timestamp` clamps at zero. The two hour digits cap a timestamp at
//! `99:59:59.9`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::TimestampError;

/// A point on the caption timeline, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    seconds: f64,
}

impl Timestamp {
    /// Zero seconds.
    pub const ZERO: Self = Self { seconds: 0.0 };

    /// Largest value the `HH:MM:SS.D` form can hold, in seconds.
    pub const MAX_SECONDS: f64 = 359_999.9;

    /// Largest representable timestamp, `99:59:59.9`.
    pub const MAX: Self = Self {
        seconds: Self::MAX_SECONDS,
    };

    /// Build a timestamp from seconds, clamping to `[0, MAX_SECONDS]`. NaN becomes zero.
    pub fn from_seconds(seconds: f64) -> Self {
        let seconds = if seconds.is_nan() {
            0.0
        } else {
            seconds.clamp(0.0, Self::MAX_SECONDS)
        };
        Self { seconds }
    }

    /// The offset in seconds.
    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Parse the canonical `HH:MM:SS.D` form.
    ///
    /// Anything else fails, including surrounding whitespace, missing
    /// zero-padding and minute or second groups of 60 or more.
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        let bytes = text.as_bytes();
        if bytes.len() != 10 {
            return Err(TimestampError::invalid(text, "expected HH:MM:SS.D"));
        }
        if bytes[2] != b':' || bytes[5] != b':' || bytes[8] != b'.' {
            return Err(TimestampError::invalid(text, "expected HH:MM:SS.D separators"));
        }

        let group = |range: std::ops::Range<usize>, name: &str| -> Result<u32, TimestampError> {
            let digits = &bytes[range];
            if !digits.iter().all(u8::is_ascii_digit) {
                return Err(TimestampError::invalid(text, format!("{} must be digits", name)));
            }
            Ok(digits
                .iter()
                .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0')))
        };

        let hours = group(0..2, "hours")?;
        let minutes = group(3..5, "minutes")?;
        let seconds = group(6..8, "seconds")?;
        let deciseconds = group(9..10, "deciseconds")?;

        if minutes >= 60 {
            return Err(TimestampError::invalid(text, format!("minutes out of range: {}", minutes)));
        }
        if seconds >= 60 {
            return Err(TimestampError::invalid(text, format!("seconds out of range: {}", seconds)));
        }

        let total = f64::from(hours) * 3600.0
            + f64::from(minutes) * 60.0
            + f64::from(seconds)
            + f64::from(deciseconds) / 10.0;
        Ok(Self::from_seconds(total))
    }

    /// Total whole deciseconds, rounded to the nearest.
    fn total_deciseconds(&self) -> u64 {
        (self.seconds * 10.0).round() as u64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_deciseconds();
        let deciseconds = total % 10;
        let total_seconds = total / 10;
        let seconds = total_seconds % 60;
        let total_minutes = total_seconds / 60;
        let minutes = total_minutes % 60;
        let hours = total_minutes / 60;
        write!(f, "{:02}:{:02}:{:02}.{}", hours, minutes, seconds, deciseconds)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl From<f64> for Timestamp {
    fn from(seconds: f64) -> Self {
        Self::from_seconds(seconds)
    }
}

impl From<Timestamp> for f64 {
    fn from(value: Timestamp) -> Self {
        value.seconds
    }
}

impl Sub for Timestamp {
    type Output = f64;

    fn sub(self, rhs: Timestamp) -> f64 {
        self.seconds - rhs.seconds
    }
}

impl Add<f64> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: f64) -> Timestamp {
        Timestamp::from_seconds(self.seconds + rhs)
    }
}

impl Sub<f64> for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: f64) -> Timestamp {
        Timestamp::from_seconds(self.seconds - rhs)
    }
}

impl PartialEq<f64> for Timestamp {
    fn eq(&self, other: &f64) -> bool {
        self.seconds == *other
    }
}

impl PartialOrd<f64> for Timestamp {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.seconds.partial_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_canonical() {
        let ts = Timestamp::parse("01:02:03.4").unwrap();
        assert!((ts.as_seconds() - 3723.4).abs() < 1e-9);
        assert_eq!(ts.to_string(), "01:02:03.4");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "1:02:03.4",
            "01:02:03",
            "01:02:03.45",
            "01-02-03.4",
            "01:60:00.0",
            "01:00:60.0",
            "0a:00:00.0",
            " 00:00:01.0",
            "00:00:-1.0",
        ] {
            assert!(Timestamp::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_format_pads_and_rounds() {
        assert_eq!(Timestamp::from_seconds(0.0).to_string(), "00:00:00.0");
        assert_eq!(Timestamp::from_seconds(7.2).to_string(), "00:00:07.2");
        assert_eq!(Timestamp::from_seconds(59.96).to_string(), "00:01:00.0");
        assert_eq!(Timestamp::from_seconds(3600.0).to_string(), "01:00:00.0");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(Timestamp::from_seconds(-3.0), Timestamp::ZERO);
        assert_eq!(Timestamp::from_seconds(f64::NAN), Timestamp::ZERO);
        assert_eq!(Timestamp::from_seconds(2.0) - 5.0, Timestamp::ZERO);
    }

    #[test]
    fn test_clamps_to_two_hour_digits() {
        assert_eq!(Timestamp::from_seconds(360_000.0), Timestamp::MAX);
        assert_eq!(Timestamp::from_seconds(f64::INFINITY), Timestamp::MAX);
        assert_eq!(Timestamp::from_seconds(1e9).to_string(), "99:59:59.9");
        assert_eq!(Timestamp::MAX + 10.0, Timestamp::MAX);
        let largest = Timestamp::parse("99:59:59.9").unwrap();
        assert!((largest.as_seconds() - Timestamp::MAX_SECONDS).abs() < 1e-6);
    }

    #[test]
    fn test_huge_times_survive_serde() {
        let ts = Timestamp::from_seconds(500_000.0);
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Timestamp::MAX);
    }

    #[test]
    fn test_arithmetic() {
        let begin = Timestamp::from_seconds(10.0);
        let end = Timestamp::from_seconds(15.5);
        assert_eq!(end - begin, 5.5);
        assert_eq!(begin - end, -5.5);
        assert_eq!(begin + 2.5, Timestamp::from_seconds(12.5));
        assert!(begin < end);
        assert!(begin < 10.5);
        assert!(end == 15.5);
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let ts = Timestamp::from_seconds(65.3);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"00:01:05.3\"");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.to_string(), "00:01:05.3");
        assert!(serde_json::from_str::<Timestamp>("\"5 seconds\"").is_err());
    }

    proptest! {
        /// Canonical strings survive a parse/format cycle unchanged.
        #[test]
        fn roundtrip_canonical_text(h in 0u32..100, m in 0u32..60, s in 0u32..60, d in 0u32..10) {
            let text = format!("{:02}:{:02}:{:02}.{}", h, m, s, d);
            let parsed = Timestamp::parse(&text).unwrap();
            prop_assert_eq!(parsed.to_string(), text);
        }
    }
}
