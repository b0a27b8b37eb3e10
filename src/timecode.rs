use crate::error::{TimecodeError, TimecodePart};

use std::time::Duration;

use nom::character::complete::digit1;
use nom::combinator::all_consuming;
use nom::error::VerboseError;
use nom::IResult;

const MILLIS_PER_SECOND: u64 = 1000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Parses a timecode of the shape `HH:MM:SS,mmm` into an offset from the
/// start of the video.
///
/// Only the shape is checked: every subfield must be a non-negative integer,
/// but no range is enforced, so `00:61:00,000` is simply 61 minutes. Short
/// subfields are taken at face value (`,5` is 5 milliseconds).
pub fn parse_timecode(value: &str) -> Result<Duration, TimecodeError> {
    let (clock, millis) = split_exact(value, ',').ok_or_else(|| TimecodeError::CommaCount {
        value: value.to_string(),
        found: value.matches(',').count(),
    })?;

    let clock_parts: Vec<&str> = clock.split(':').collect();
    if clock_parts.len() != 3 {
        return Err(TimecodeError::ColonCount {
            value: value.to_string(),
            found: clock_parts.len() - 1,
        });
    }

    let hours = subfield(value, clock_parts[0], TimecodePart::Hours)?;
    let minutes = subfield(value, clock_parts[1], TimecodePart::Minutes)?;
    let seconds = subfield(value, clock_parts[2], TimecodePart::Seconds)?;
    let millis = subfield(value, millis, TimecodePart::Milliseconds)?;

    let total = hours
        .checked_mul(MILLIS_PER_HOUR)
        .and_then(|t| t.checked_add(minutes.checked_mul(MILLIS_PER_MINUTE)?))
        .and_then(|t| t.checked_add(seconds.checked_mul(MILLIS_PER_SECOND)?))
        .and_then(|t| t.checked_add(millis))
        .ok_or_else(|| TimecodeError::OutOfRange {
            value: value.to_string(),
        })?;

    Ok(Duration::from_millis(total))
}

/// Renders an offset as `HH:MM:SS,mmm`. Hours are not wrapped, so offsets of
/// 100 hours or more get a wider hour field.
pub fn format_timecode(timestamp: Duration) -> String {
    let total_secs = timestamp.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = timestamp.subsec_millis();
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Splits on `sep` only if it occurs exactly once.
fn split_exact(value: &str, sep: char) -> Option<(&str, &str)> {
    let (left, right) = value.split_once(sep)?;
    if right.contains(sep) {
        None
    } else {
        Some((left, right))
    }
}

fn digits(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    all_consuming(digit1)(input)
}

fn subfield(whole: &str, field: &str, part: TimecodePart) -> Result<u64, TimecodeError> {
    match digits(field) {
        Ok((_, digits)) => digits.parse().map_err(|_| TimecodeError::OutOfRange {
            value: whole.to_string(),
        }),
        Err(_) => Err(TimecodeError::NotAnInteger {
            part,
            value: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_parse_ts {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;

                let duration = parse_timecode(input).unwrap();

                assert_eq!(duration.as_millis(), expected);
            }
        )*
        }
    }

    test_parse_ts! {
        test_parse_ts_0: ("00:00:01,200", 1200),
        test_parse_ts_1: ("00:00:02,153", 2153),
        test_parse_ts_2: ("00:00:01,002", 1002),
        test_parse_ts_3: ("00:00:01,2", 1002),
        test_parse_ts_4: ("1:1:1,200", 3661200),
        test_parse_ts_5: ("01:01:01,200", 3661200),
        test_parse_ts_6: ("00:61:00,000", 3660000),
        test_parse_ts_7: ("25:00:00,000", 90000000),
        test_parse_ts_8: ("100:00:00,001", 360000001),
    }

    macro_rules! test_format_ts {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;

                assert_eq!(format_timecode(Duration::from_millis(input)), expected);
            }
        )*
        }
    }

    test_format_ts! {
        test_format_ts_0: (0, "00:00:00,000"),
        test_format_ts_1: (999, "00:00:00,999"),
        test_format_ts_2: (60_000, "00:01:00,000"),
        test_format_ts_3: (7_326_159, "02:02:06,159"),
        test_format_ts_4: (360_000_001, "100:00:00,001"),
    }

    #[test]
    fn offset_is_sum_of_subfields() {
        for &(h, m, s, ms) in &[(0, 0, 0, 0), (1, 2, 3, 4), (12, 59, 59, 999), (99, 99, 99, 9999)] {
            let input = format!("{:02}:{:02}:{:02},{:03}", h, m, s, ms);
            let expected = h * 3_600_000 + m * 60_000 + s * 1000 + ms;
            assert_eq!(parse_timecode(&input).unwrap(), Duration::from_millis(expected));
        }
    }

    #[test]
    fn rejects_wrong_comma_count() {
        assert_eq!(
            parse_timecode("00:00:01.000"),
            Err(TimecodeError::CommaCount {
                value: "00:00:01.000".to_string(),
                found: 0
            })
        );
        assert!(matches!(
            parse_timecode("00:00:01,000,1"),
            Err(TimecodeError::CommaCount { found: 2, .. })
        ));
    }

    #[test]
    fn rejects_wrong_colon_count() {
        assert!(matches!(
            parse_timecode("00:01,000"),
            Err(TimecodeError::ColonCount { found: 1, .. })
        ));
        assert!(matches!(
            parse_timecode("00:00:00:01,000"),
            Err(TimecodeError::ColonCount { found: 3, .. })
        ));
    }

    #[test]
    fn names_the_failing_subfield() {
        assert_eq!(
            parse_timecode("00:x1:00,000"),
            Err(TimecodeError::NotAnInteger {
                part: TimecodePart::Minutes,
                value: "x1".to_string()
            })
        );
        assert!(matches!(
            parse_timecode("00:00:00,"),
            Err(TimecodeError::NotAnInteger {
                part: TimecodePart::Milliseconds,
                ..
            })
        ));
        assert!(matches!(
            parse_timecode("-1:00:00,000"),
            Err(TimecodeError::NotAnInteger {
                part: TimecodePart::Hours,
                ..
            })
        ));
        assert!(matches!(
            parse_timecode("00:00: 1,000"),
            Err(TimecodeError::NotAnInteger {
                part: TimecodePart::Seconds,
                ..
            })
        ));
    }

    #[test]
    fn rejects_overflowing_offsets() {
        assert!(matches!(
            parse_timecode("99999999999999999:00:00,000"),
            Err(TimecodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_timecode("99999999999999999999999:00:00,000"),
            Err(TimecodeError::OutOfRange { .. })
        ));
    }
}
