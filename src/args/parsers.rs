use std::time::Duration;

use super::types::{ConcurrencyLevels, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Parses a comma-separated list of worker counts such as `1,5,10,20`.
///
/// # Errors
///
/// Returns an error when the list is empty or any entry is not a positive integer.
pub fn parse_levels(s: &str) -> Result<ConcurrencyLevels, ValidationError> {
    let mut levels = Vec::new();
    for entry in s.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let level = entry
            .parse::<PositiveUsize>()
            .map_err(|err| ValidationError::InvalidLevel {
                value: entry.to_owned(),
                source: Box::new(err),
            })?;
        levels.push(level);
    }
    ConcurrencyLevels::new(levels)
}

/// Parses a duration such as `500ms`, `30s`, `2m`, or `1h`. Bare numbers are seconds.
///
/// # Errors
///
/// Returns an error when the value is empty, malformed, zero, or overflows.
pub fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration(s).map_err(AppError::from)
}

pub(crate) fn parse_duration(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.as_millis() == 0 {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Splits a command string into arguments using POSIX shell quoting rules.
///
/// Single quotes are literal, double quotes honour `\"`, `\\`, `\$` and `` \` ``
/// escapes, and a backslash outside quotes escapes the next character. No
/// expansion of variables or globs takes place.
///
/// # Errors
///
/// Returns an error on an unterminated quote or a trailing backslash.
pub fn split_command_line(input: &str) -> Result<Vec<String>, ValidationError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote = Quote::None;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match quote {
            Quote::Single => {
                if ch == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(ch);
                }
            }
            Quote::Double => match ch {
                '"' => quote = Quote::None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => {
                        return Err(ValidationError::DanglingEscape {
                            value: input.to_owned(),
                        });
                    }
                },
                _ => current.push(ch),
            },
            Quote::None => match ch {
                '\'' => {
                    quote = Quote::Single;
                    in_token = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_token = true;
                }
                '\\' => {
                    let Some(next) = chars.next() else {
                        return Err(ValidationError::DanglingEscape {
                            value: input.to_owned(),
                        });
                    };
                    current.push(next);
                    in_token = true;
                }
                _ if ch.is_whitespace() => {
                    if in_token {
                        args.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                _ => {
                    current.push(ch);
                    in_token = true;
                }
            },
        }
    }

    if quote != Quote::None {
        return Err(ValidationError::UnterminatedQuote {
            value: input.to_owned(),
        });
    }
    if in_token {
        args.push(current);
    }
    Ok(args)
}
