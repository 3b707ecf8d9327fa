use std::time::Duration;

use crate::args::{ConcurrencyLevels, PositiveUsize, parse_levels, parsers::parse_duration};
use crate::error::ValidationError;

use super::types::{DurationValue, LevelsValue};

pub(crate) fn parse_duration_value(value: &DurationValue) -> Result<Duration, ValidationError> {
    match value {
        DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
        DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
        DurationValue::Text(text) => parse_duration(text),
    }
}

pub(crate) fn parse_levels_value(
    value: &LevelsValue,
) -> Result<ConcurrencyLevels, ValidationError> {
    match value {
        LevelsValue::Text(text) => parse_levels(text),
        LevelsValue::List(list) => {
            let mut levels = Vec::with_capacity(list.len());
            for level in list {
                levels.push(PositiveUsize::try_from(*level).map_err(|err| {
                    ValidationError::InvalidLevel {
                        value: level.to_string(),
                        source: Box::new(err),
                    }
                })?);
            }
            ConcurrencyLevels::new(levels)
        }
    }
}
