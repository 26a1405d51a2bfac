//! Time codec: conversions between `HH:MM` text and integer minutes,
//! duration arithmetic with midnight wraparound, and difference display.
//!
//! Time values cross the API boundary only in the literal `HH:MM` text form;
//! the integer minute form stays internal to derived fields.

use crate::error::AppError;
use crate::result::AppResult;

/// Minutes in a full day; used for midnight wraparound.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parses a strict `HH:MM` time string into total minutes since midnight.
///
/// Both fields must be exactly two digits, zero-padded, with `HH` in
/// `[00, 23]` and `MM` in `[00, 59]`. No other separators are accepted.
pub fn parse_time(text: &str) -> AppResult<i32> {
    let bytes = text.as_bytes();
    let valid = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !valid {
        return Err(AppError::invalid_format(format!(
            "Invalid time format: '{text}'. Expected HH:MM"
        )));
    }

    let hours = i32::from(bytes[0] - b'0') * 10 + i32::from(bytes[1] - b'0');
    let minutes = i32::from(bytes[3] - b'0') * 10 + i32::from(bytes[4] - b'0');
    if hours > 23 || minutes > 59 {
        return Err(AppError::invalid_format(format!(
            "Invalid time format: '{text}'. Expected HH:MM"
        )));
    }

    Ok(hours * 60 + minutes)
}

/// Returns whether a string is a valid `HH:MM` time.
pub fn is_valid_time(text: &str) -> bool {
    parse_time(text).is_ok()
}

/// Formats total minutes as zero-padded `HH:MM`.
///
/// Uses floor division for the hour field and does not wrap at 24 hours:
/// durations of a day or more render with an hour field of 24 or above,
/// which is the caller's responsibility to avoid where a time-of-day is
/// expected. Negative input is a caller bug and renders as `00:00`.
pub fn format_minutes(minutes: i32) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Computes the duration in minutes between two `HH:MM` times.
///
/// When the end time is earlier in the day than the start time the interval
/// is taken to cross midnight. Equal times yield a zero-minute duration;
/// the result is never negative.
pub fn duration_between(start: &str, end: &str) -> AppResult<i32> {
    let start_minutes = parse_time(start)?;
    let end_minutes = parse_time(end)?;

    if end_minutes < start_minutes {
        Ok((MINUTES_PER_DAY - start_minutes) + end_minutes)
    } else {
        Ok(end_minutes - start_minutes)
    }
}

/// Absolute difference between a predicted and an actual duration.
///
/// Directionality (over- vs. under-guess) is deliberately discarded here;
/// it is only reconstructed for display by [`format_difference`].
pub fn difference(predicted_minutes: i32, actual_minutes: i32) -> i32 {
    (predicted_minutes - actual_minutes).abs()
}

/// Formats a signed minute difference as a human-readable string.
///
/// Zero renders as `"0 min"`; other values carry an explicit sign:
/// `"+45 min"`, `"-5 min"`, `"+1h 30min"`, `"+2h"`.
pub fn format_difference(difference_minutes: i32) -> String {
    if difference_minutes == 0 {
        return "0 min".to_string();
    }

    let sign = if difference_minutes > 0 { '+' } else { '-' };
    let abs_diff = difference_minutes.abs();

    if abs_diff < 60 {
        return format!("{sign}{abs_diff} min");
    }

    let hours = abs_diff / 60;
    let minutes = abs_diff % 60;
    if minutes == 0 {
        format!("{sign}{hours}h")
    } else {
        format!("{sign}{hours}h {minutes}min")
    }
}
