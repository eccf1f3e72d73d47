use super::utils::{
    fields_to_millis, parse_fields, parse_offset, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND,
};
use crate::errors::ParseError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const HOURS_PER_DAY: u64 = 24;

/// A point on the subtitle timeline with millisecond precision.
///
/// Stored as milliseconds since zero. Only the time of day is rendered:
/// whole days are dropped when formatting, so `24:00:00,000` prints as
/// `00:00:00,000` while `total_millis` still reports the full value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeCode {
    millis: u64,
}

impl TimeCode {
    pub fn from_parts(hour: u32, minute: u32, second: u32, millis: u32) -> Self {
        Self {
            millis: fields_to_millis(hour, minute, second, millis),
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Parse the first 12 characters of `text` as `HH:MM:SS,mmm`.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let (hour, minute, second, millis) = parse_fields(text)?;
        Ok(Self::from_parts(hour, minute, second, millis))
    }

    pub fn total_millis(&self) -> u64 {
        self.millis
    }

    /// (hour, minute, second, millisecond) as they are displayed.
    pub fn parts(&self) -> (u32, u32, u32, u32) {
        let hour = (self.millis / MILLIS_PER_HOUR) % HOURS_PER_DAY;
        let minute = (self.millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let second = (self.millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
        let millis = self.millis % MILLIS_PER_SECOND;
        (hour as u32, minute as u32, second as u32, millis as u32)
    }

    /// Shift forward by an offset written as `HH:MM:SS,mmm`.
    pub fn add(&mut self, offset: &str) -> Result<(), ParseError> {
        let offset = parse_offset(offset)?;
        self.shift(offset);
        Ok(())
    }

    pub fn shift(&mut self, offset: Duration) {
        let offset = u64::try_from(offset.as_millis()).unwrap_or(u64::MAX);
        self.millis = self.millis.saturating_add(offset);
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute, second, millis) = self.parts();
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            hour, minute, second, millis
        )
    }
}

impl FromStr for TimeCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeCode::from_text(s)
    }
}

impl Serialize for TimeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
