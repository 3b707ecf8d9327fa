use std::num::NonZeroUsize;

use crate::error::ValidationError;

use super::parsers::parse_levels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    pub const ONE: PositiveUsize = PositiveUsize(NonZeroUsize::MIN);

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or_else(|| ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveUsize::try_from(value)
    }
}

impl From<PositiveUsize> for usize {
    fn from(value: PositiveUsize) -> Self {
        value.get()
    }
}

impl std::fmt::Display for PositiveUsize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Ordered worker counts for a benchmark sweep.
///
/// Order and duplicates are preserved exactly as given; each entry becomes
/// one level of the resulting report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcurrencyLevels(Vec<PositiveUsize>);

impl ConcurrencyLevels {
    /// Builds a level list from already-validated values.
    ///
    /// # Errors
    ///
    /// Returns an error when `levels` is empty.
    pub fn new(levels: Vec<PositiveUsize>) -> Result<Self, ValidationError> {
        if levels.is_empty() {
            return Err(ValidationError::LevelsEmpty);
        }
        Ok(Self(levels))
    }

    #[must_use]
    pub fn single(level: PositiveUsize) -> Self {
        Self(vec![level])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PositiveUsize] {
        &self.0
    }
}

impl std::str::FromStr for ConcurrencyLevels {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_levels(s)
    }
}

impl std::fmt::Display for ConcurrencyLevels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}
