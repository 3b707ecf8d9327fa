use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::PositiveUsize;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

/// True when `name` was given on the command line or through its env binding,
/// at the top level or inside the active subcommand.
pub(super) fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    if has_explicit_source(matches, name) {
        return true;
    }
    matches
        .subcommand()
        .is_some_and(|(_, sub)| has_explicit_source(sub, name))
}

fn has_explicit_source(matches: &ArgMatches, name: &str) -> bool {
    if matches.try_get_raw(name).is_err() {
        return false;
    }
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

pub(super) fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

pub(super) fn invalid_field(field: &'static str) -> impl FnOnce(ValidationError) -> AppError {
    move |source| AppError::config(ConfigError::InvalidField { field, source })
}
