//! Time-of-day value type.
//!
//! Bedtime estimation only ever deals with clock times; there is no
//! meaningful date component. `TimeOfDay` stores hour/minute, converts
//! to and from seconds-since-midnight, and subtracts durations with
//! wraparound across midnight.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A clock time (hour and minute), no date attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time of day, validating hour and minute ranges.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::OutOfRange {
                field: "hour".into(),
                message: format!("{hour} is not in 0..=23"),
            });
        }
        if minute > 59 {
            return Err(ValidationError::OutOfRange {
                field: "minute".into(),
                message: format!("{minute} is not in 0..=59"),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60
    }

    /// Build from seconds since midnight. Values ≥ 86 400 wrap;
    /// sub-minute remainders are truncated.
    pub fn from_seconds_since_midnight(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY as u32;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds % 3600 / 60) as u8,
        }
    }

    /// Subtract a duration in seconds, wrapping across midnight.
    /// The duration is rounded to the nearest whole second first.
    pub fn minus_seconds(&self, seconds: f64) -> Self {
        let offset = seconds.round() as i64;
        let result =
            (self.seconds_since_midnight() as i64 - offset).rem_euclid(SECONDS_PER_DAY);
        Self::from_seconds_since_midnight(result as u32)
    }

    /// Subtract a duration in fractional hours, wrapping across midnight.
    pub fn minus_hours(&self, hours: f64) -> Self {
        self.minus_seconds(hours * 3600.0)
    }

    /// Short display format: `"11:30 PM"` (12-hour) or `"23:30"` (24-hour).
    pub fn format_short(&self, clock24: bool) -> String {
        // hour/minute are validated, so the chrono conversion cannot fail
        let time = NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0)
            .unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        if clock24 {
            time.format("%H:%M").to_string()
        } else {
            time.format("%-I:%M %p").to_string()
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTimeOfDay(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.trim().parse().map_err(|_| invalid())?;
        let minute: u8 = m.trim().parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

// Serialized as "HH:MM" so config files stay human-editable.

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_validates_ranges() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert!(TimeOfDay::new(0, 0).is_ok());
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(7, 60).is_err());
    }

    #[test]
    fn test_seconds_since_midnight() {
        let t = TimeOfDay::new(7, 0).unwrap();
        assert_eq!(t.seconds_since_midnight(), 25_200);

        let t = TimeOfDay::new(18, 30).unwrap();
        assert_eq!(t.seconds_since_midnight(), 66_600);
    }

    #[test]
    fn test_minus_hours_wraps_across_midnight() {
        let wake = TimeOfDay::new(7, 0).unwrap();
        let bedtime = wake.minus_hours(7.5);
        assert_eq!(bedtime, TimeOfDay::new(23, 30).unwrap());
    }

    #[test]
    fn test_minus_hours_same_day() {
        let wake = TimeOfDay::new(18, 0).unwrap();
        let bedtime = wake.minus_hours(8.0);
        assert_eq!(bedtime, TimeOfDay::new(10, 0).unwrap());
    }

    #[test]
    fn test_minus_seconds_rounds() {
        let wake = TimeOfDay::new(7, 0).unwrap();
        // 29.7s rounds to 30s; sub-minute remainder then truncates
        let t = wake.minus_seconds(29.7);
        assert_eq!(t, TimeOfDay::new(6, 59).unwrap());
    }

    #[test]
    fn test_parse_and_display() {
        let t: TimeOfDay = "07:00".parse().unwrap();
        assert_eq!(t, TimeOfDay::new(7, 0).unwrap());
        assert_eq!(t.to_string(), "07:00");

        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("7".parse::<TimeOfDay>().is_err());
        assert!("seven:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_format_short() {
        let t = TimeOfDay::new(23, 30).unwrap();
        assert_eq!(t.format_short(false), "11:30 PM");
        assert_eq!(t.format_short(true), "23:30");

        let t = TimeOfDay::new(0, 5).unwrap();
        assert_eq!(t.format_short(false), "12:05 AM");
    }

    #[test]
    fn test_serde_round_trip() {
        let t = TimeOfDay::new(18, 0).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"18:00\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    proptest! {
        #[test]
        fn prop_seconds_round_trip(hour in 0u8..24, minute in 0u8..60) {
            let t = TimeOfDay::new(hour, minute).unwrap();
            let back = TimeOfDay::from_seconds_since_midnight(t.seconds_since_midnight());
            prop_assert_eq!(back, t);
        }

        #[test]
        fn prop_minus_hours_always_valid(
            hour in 0u8..24,
            minute in 0u8..60,
            duration in 0.0f64..48.0,
        ) {
            let t = TimeOfDay::new(hour, minute).unwrap();
            let result = t.minus_hours(duration);
            prop_assert!(result.hour() < 24);
            prop_assert!(result.minute() < 60);
        }
    }
}
