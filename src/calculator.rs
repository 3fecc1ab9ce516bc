//! Form-style front end for the sizing models.
//!
//! A "Calculate" action reads the raw text of every form field, parses it
//! into a fresh [`SizingRequest`], runs both sizing methods independently,
//! and renders a [`SizingReport`].
//! Nothing is kept between calculations.
//!
//! # Example
//!
//! ```
//! use expansion_tank_models::calculator::{Calculator, FormFields};
//!
//! let calculator = Calculator::new().unwrap();
//!
//! let fields = FormFields {
//!     system_volume: "4400".into(),
//!     min_tank_pressure: "50".into(),
//!     max_tank_pressure: "110".into(),
//!     average_temperature: "230".into(),
//!     initial_temperature: "70".into(),
//!     max_temperature: "230".into(),
//! };
//!
//! let report = calculator.calculate(&fields).unwrap();
//! assert_eq!(
//!     report.to_string(),
//!     "ASHRAE Method Min Tank Volume: 436.20 gallons\n\
//!      Critical Method Min Tank Volume: 421.53 gallons"
//! );
//! ```

mod fields;
pub mod options;
mod report;

pub use fields::{Field, FormFields, SizingRequest};
pub use report::SizingReport;

use thiserror::Error;
use twine_core::Model;

use crate::models::hydronic::expansion_tank::{
    AshraeSizing, CriticalSizing, ExpansionLookup, HandbookTables,
};
use crate::support::table::TableError;

/// Rejected form input.
///
/// The message is deliberately the same for every field; the offending field
/// is available through [`InputError::field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please provide valid inputs.")]
    InvalidInput { field: Field },
}

impl InputError {
    /// The field that failed to parse.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidInput { field } => *field,
        }
    }
}

/// Runs both sizing methods for each request.
#[derive(Debug)]
pub struct Calculator<L = HandbookTables> {
    ashrae: AshraeSizing,
    critical: CriticalSizing<L>,
}

impl Calculator {
    /// Creates a calculator with the default ASHRAE configuration and the
    /// handbook tables.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the tables fail to build.
    pub fn new() -> Result<Self, TableError> {
        Ok(Self::with_models(
            AshraeSizing::default(),
            CriticalSizing::handbook()?,
        ))
    }
}

impl<L: ExpansionLookup> Calculator<L> {
    /// Creates a calculator from configured models.
    #[must_use]
    pub fn with_models(ashrae: AshraeSizing, critical: CriticalSizing<L>) -> Self {
        Self { ashrae, critical }
    }

    /// Parses the form and sizes the tank with both methods.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidInput`] if any field does not parse; in
    /// that case neither method runs.
    pub fn calculate(&self, fields: &FormFields) -> Result<SizingReport, InputError> {
        let request = SizingRequest::parse(fields).inspect_err(|err| {
            tracing::debug!(field = %err.field(), "rejected form input");
        })?;
        Ok(self.size(&request))
    }

    /// Sizes the tank with both methods.
    #[must_use]
    pub fn size(&self, request: &SizingRequest) -> SizingReport {
        tracing::debug!(?request, "sizing expansion tank");

        let ashrae = self.ashrae.call(&request.ashrae_input());
        if let Err(err) = &ashrae {
            tracing::debug!(%err, "ASHRAE sizing failed");
        }

        let critical = self.critical.call(&request.critical_input());
        if let Err(err) = &critical {
            tracing::debug!(%err, "critical sizing failed");
        }

        SizingReport { ashrae, critical }
    }
}
