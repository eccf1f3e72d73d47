use crate::errors::ParseError;
use std::time::Duration;

/// Width of a `HH:MM:SS,mmm` time code.
pub const TIMECODE_LEN: usize = 12;

pub(crate) const MILLIS_PER_SECOND: u64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Split `HH:MM:SS,mmm` into (hour, minute, second, millisecond).
///
/// Fields are read from fixed offsets; the separators at 2, 5 and 8 are
/// skipped without being looked at, so `.` works as well as `,`. Values are
/// not range checked.
pub fn parse_fields(text: &str) -> Result<(u32, u32, u32, u32), ParseError> {
    if text.len() < TIMECODE_LEN {
        return Err(ParseError::new(format!(
            "time code too short: expected {} characters, got {:?}",
            TIMECODE_LEN, text
        )));
    }

    let hour = parse_field(text, 0, 2, "hour")?;
    let minute = parse_field(text, 3, 5, "minute")?;
    let second = parse_field(text, 6, 8, "second")?;
    let millis = parse_field(text, 9, 12, "millisecond")?;

    Ok((hour, minute, second, millis))
}

fn parse_field(text: &str, start: usize, end: usize, name: &str) -> Result<u32, ParseError> {
    let field = text.get(start..end).ok_or_else(|| {
        ParseError::new(format!("invalid {} field in time code {:?}", name, text))
    })?;

    field.parse::<u32>().map_err(|e| {
        ParseError::new(format!(
            "invalid {} field {:?} in time code {:?}: {}",
            name, field, text, e
        ))
    })
}

/// Parse an offset written like a time code into a `Duration`.
pub fn parse_offset(text: &str) -> Result<Duration, ParseError> {
    let (hour, minute, second, millis) = parse_fields(text)?;
    Ok(Duration::from_millis(fields_to_millis(
        hour, minute, second, millis,
    )))
}

pub(crate) fn fields_to_millis(hour: u32, minute: u32, second: u32, millis: u32) -> u64 {
    hour as u64 * MILLIS_PER_HOUR
        + minute as u64 * MILLIS_PER_MINUTE
        + second as u64 * MILLIS_PER_SECOND
        + millis as u64
}
