// Time-of-day value types shared by appointments and medications.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// 24-hour `H:MM` / `HH:MM`, hours 0-23, minutes 00-59.
pub const TIME_OF_DAY_PATTERN: &str = r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$";

static TIME_OF_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIME_OF_DAY_PATTERN).expect("time-of-day pattern compiles"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Invalid time format (HH:MM e.g., 14:30): '{0}'")]
    Malformed(String),

    #[error("Time {0} is listed more than once")]
    Duplicate(TimeOfDay),
}

/// Defaults to midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// 12-hour clock rendering, e.g. `00:05` -> `12:05 AM`, `13:30` -> `1:30 PM`.
    pub fn to_display_string(&self) -> String {
        let (hour, suffix) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{}:{:02} {}", hour, self.minute, suffix)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !TIME_OF_DAY_RE.is_match(s) {
            return Err(TimeParseError::Malformed(s.to_string()));
        }

        let malformed = || TimeParseError::Malformed(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        let hour = hour.parse().map_err(|_| malformed())?;
        let minute = minute.parse().map_err(|_| malformed())?;

        Self::new(hour, minute).ok_or_else(malformed)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered dose times for a medication, kept in the order they were entered.
///
/// Serialised as a comma-separated list (`"08:00,20:00"`); the empty string is
/// an empty schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoseTimes(Vec<TimeOfDay>);

impl DoseTimes {
    pub fn new(times: Vec<TimeOfDay>) -> Result<Self, TimeParseError> {
        let mut seen: Vec<TimeOfDay> = Vec::with_capacity(times.len());
        for time in times {
            if seen.contains(&time) {
                return Err(TimeParseError::Duplicate(time));
            }
            seen.push(time);
        }
        Ok(Self(seen))
    }

    pub fn first(&self) -> Option<&TimeOfDay> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for DoseTimes {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let times = s
            .split(',')
            .map(|part| part.trim().parse::<TimeOfDay>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(times)
    }
}

impl fmt::Display for DoseTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, time) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", time)?;
        }
        Ok(())
    }
}

impl Serialize for DoseTimes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DoseTimes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_accepts_single_digit_hour() {
        assert_eq!(t("9:05"), TimeOfDay::new(9, 5).unwrap());
        assert_eq!(t("9:05").to_string(), "09:05");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_matches!("9:60".parse::<TimeOfDay>(), Err(TimeParseError::Malformed(_)));
        assert_matches!("24:00".parse::<TimeOfDay>(), Err(TimeParseError::Malformed(_)));
        assert_matches!("12:5".parse::<TimeOfDay>(), Err(TimeParseError::Malformed(_)));
        assert_matches!(" 12:00".parse::<TimeOfDay>(), Err(TimeParseError::Malformed(_)));
        assert_matches!("noon".parse::<TimeOfDay>(), Err(TimeParseError::Malformed(_)));
    }

    #[test]
    fn test_twelve_hour_display() {
        assert_eq!(t("00:05").to_display_string(), "12:05 AM");
        assert_eq!(t("09:00").to_display_string(), "9:00 AM");
        assert_eq!(t("12:00").to_display_string(), "12:00 PM");
        assert_eq!(t("13:30").to_display_string(), "1:30 PM");
        assert_eq!(t("23:59").to_display_string(), "11:59 PM");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(t("9:30") < t("10:00"));
        assert!(t("00:00") < t("00:01"));
    }

    #[test]
    fn test_dose_times_parsing() {
        let times: DoseTimes = "08:00, 20:00".parse().unwrap();
        assert_eq!(times.len(), 2);
        assert_eq!(times.first(), Some(&t("08:00")));
        assert_eq!(times.to_string(), "08:00,20:00");

        let empty: DoseTimes = "  ".parse().unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_dose_times_keeps_entry_order() {
        let times: DoseTimes = "20:00,08:00".parse().unwrap();
        assert_eq!(times.first(), Some(&t("20:00")));
    }

    #[test]
    fn test_dose_times_rejects_bad_entries() {
        assert_matches!("08:00,".parse::<DoseTimes>(), Err(TimeParseError::Malformed(_)));
        assert_matches!("08:00,25:00".parse::<DoseTimes>(), Err(TimeParseError::Malformed(_)));
        assert_matches!("08:00,8:00".parse::<DoseTimes>(), Err(TimeParseError::Duplicate(_)));
    }

    #[test]
    fn test_serde_as_strings() {
        let times: DoseTimes = serde_json::from_str("\"07:00,19:00\"").unwrap();
        assert_eq!(serde_json::to_string(&times).unwrap(), "\"07:00,19:00\"");

        let time: TimeOfDay = serde_json::from_str("\"14:30\"").unwrap();
        assert_eq!(serde_json::to_value(time).unwrap(), "14:30");
        assert!(serde_json::from_str::<TimeOfDay>("\"14:75\"").is_err());
    }
}
