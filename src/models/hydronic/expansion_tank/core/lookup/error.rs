use thiserror::Error;

use crate::support::{constraint::ConstraintError, table::TableError};

use super::super::tidy;

/// A temperature outside what the net expansion table supports.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TemperatureRangeError {
    #[error(
        "initial temperature {}°F is outside the supported range ({}°F to {}°F)",
        tidy(.value),
        tidy(.min),
        tidy(.max)
    )]
    Initial { value: f64, min: f64, max: f64 },

    #[error(
        "maximum temperature {}°F is outside the supported range ({}°F to {}°F)",
        tidy(.value),
        tidy(.min),
        tidy(.max)
    )]
    Maximum { value: f64, min: f64, max: f64 },

    #[error(
        "maximum temperature ({}°F) must be greater than initial temperature ({}°F)",
        tidy(.maximum),
        tidy(.initial)
    )]
    NotIncreasing { initial: f64, maximum: f64 },
}

/// A pressure outside what the acceptance factor table supports.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PressureRangeError {
    #[error(
        "minimum tank pressure {} psig is outside the supported range ({} to {} psig)",
        tidy(.value),
        tidy(.min),
        tidy(.max)
    )]
    Minimum { value: f64, min: f64, max: f64 },

    #[error(
        "maximum tank pressure {} psig is outside the supported range ({} to {} psig)",
        tidy(.value),
        tidy(.min),
        tidy(.max)
    )]
    Maximum { value: f64, min: f64, max: f64 },

    #[error(
        "maximum tank pressure ({} psig) must be greater than minimum tank pressure ({} psig)",
        tidy(.maximum),
        tidy(.minimum)
    )]
    NotIncreasing { minimum: f64, maximum: f64 },

    /// The band sits between grid rows and too close to the diagonal to
    /// interpolate a positive factor.
    #[error(
        "tank pressure band {} to {} psig is too narrow to read from the acceptance factor table",
        tidy(.minimum),
        tidy(.maximum)
    )]
    NarrowBand { minimum: f64, maximum: f64 },
}

/// Errors from an [`ExpansionLookup`](super::ExpansionLookup).
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Temperature(#[from] TemperatureRangeError),

    #[error(transparent)]
    Pressure(#[from] PressureRangeError),

    /// The underlying table could not be evaluated.
    #[error("lookup table failed: {0}")]
    Table(#[from] TableError),

    /// The table produced a factor outside its physical bounds.
    #[error("tabulated factor is not physical: {0}")]
    Factor(#[from] ConstraintError),
}

impl LookupError {
    /// Returns `true` if the inputs were outside the supported range.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::Temperature(_) | Self::Pressure(_))
    }
}
