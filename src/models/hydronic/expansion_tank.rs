//! Expansion tank sizing models.
//!
//! This module provides [`twine_core::Model`] implementations for sizing the
//! minimum acceptance volume of a diaphragm expansion tank:
//!
//! - [`AshraeSizing`] evaluates the ASHRAE correlation.
//! - [`CriticalSizing`] combines tabulated net expansion and acceptance factors
//!   supplied by an [`ExpansionLookup`], by default the [`HandbookTables`].
//!
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use expansion_tank_models::models::hydronic::expansion_tank::{
//!     CriticalInput, CriticalSizing, TankPressures,
//! };
//! use expansion_tank_models::support::constraint::StrictlyPositive;
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{ThermodynamicTemperature, Volume},
//!     thermodynamic_temperature::degree_fahrenheit,
//!     volume::gallon,
//! };
//!
//! let model = CriticalSizing::handbook().unwrap();
//!
//! let results = model
//!     .call(&CriticalInput {
//!         system_volume: StrictlyPositive::new(Volume::new::<gallon>(4400.0)).unwrap(),
//!         fill_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
//!         max_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(230.0),
//!         pressures: TankPressures::psig(50.0, 110.0),
//!     })
//!     .unwrap();
//!
//! assert!((results.acceptance_volume.get::<gallon>() - 421.6).abs() < 0.08);
//! ```

pub(crate) mod core;

pub use self::core::{
    AcceptanceFactor, AshraeConfig, AshraeInput, AshraeSizingError, CriticalInput,
    CriticalResults, ExpansionLookup, HandbookTables, LookupError, NetExpansion,
    PressureRangeError, SystemVolume, TankPressures, TemperatureRangeError,
    ashrae_acceptance_volume, critical_acceptance_volume,
};

use twine_core::Model;
use uom::si::f64::Volume;

use crate::support::table::TableError;

use self::core::{ashrae, critical};

/// Sizes an expansion tank with the ASHRAE correlation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AshraeSizing {
    config: AshraeConfig,
}

impl AshraeSizing {
    /// Creates the model with the given configuration.
    #[must_use]
    pub fn new(config: AshraeConfig) -> Self {
        Self { config }
    }

    /// Returns the model's configuration.
    #[must_use]
    pub fn config(&self) -> &AshraeConfig {
        &self.config
    }
}

impl Model for AshraeSizing {
    type Input = AshraeInput;
    type Output = Volume;
    type Error = AshraeSizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        ashrae::size(input, &self.config)
    }
}

/// Sizes an expansion tank from tabulated net expansion and acceptance factors.
#[derive(Debug, Clone, Copy)]
pub struct CriticalSizing<L = HandbookTables> {
    lookup: L,
}

impl CriticalSizing {
    /// Creates the model backed by the [`HandbookTables`].
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the tables fail to build.
    pub fn handbook() -> Result<Self, TableError> {
        Ok(Self::new(HandbookTables::new()?))
    }
}

impl<L: ExpansionLookup> CriticalSizing<L> {
    /// Creates the model backed by the given lookup.
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the lookup backing this model.
    #[must_use]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}

impl<L: ExpansionLookup> Model for CriticalSizing<L> {
    type Input = CriticalInput;
    type Output = CriticalResults;
    type Error = LookupError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        critical::size(input, &self.lookup)
    }
}
