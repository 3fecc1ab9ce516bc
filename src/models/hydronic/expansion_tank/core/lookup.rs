//! Lookup of net expansion and acceptance factors.
//!
//! The critical sizing method takes both of its factors from tables.
//! [`ExpansionLookup`] is the seam between the method and whatever supplies
//! those tables; [`HandbookTables`] is the tabulated provider.

mod error;
mod handbook;

pub use error::{LookupError, PressureRangeError, TemperatureRangeError};
pub use handbook::HandbookTables;
pub(crate) use handbook::{
    INITIAL_TEMPERATURES_F, MAX_PRESSURES_PSIG, MAX_TEMPERATURES_F, MIN_PRESSURES_PSIG,
};

use uom::si::f64::{Ratio, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, StrictlyPositive, UnitIntervalLowerOpen};

use super::TankPressures;

/// Fractional growth of system water between fill and maximum temperature,
/// net of piping expansion.
pub type NetExpansion = Constrained<Ratio, StrictlyPositive>;

/// Fraction of tank volume available to accept expanded water.
pub type AcceptanceFactor = Constrained<Ratio, UnitIntervalLowerOpen>;

/// Supplies the factors used by the critical sizing method.
///
/// Implementations return an error, never a number, for conditions outside
/// their supported range.
pub trait ExpansionLookup {
    /// Looks up the net expansion factor between two water temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Temperature`] if either temperature is outside
    /// the supported range or the maximum does not exceed the initial.
    fn net_expansion(
        &self,
        initial: ThermodynamicTemperature,
        maximum: ThermodynamicTemperature,
    ) -> Result<NetExpansion, LookupError>;

    /// Looks up the acceptance factor for a tank pressure band.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Pressure`] if either pressure is outside the
    /// supported range or the maximum does not exceed the minimum.
    fn acceptance_factor(&self, pressures: TankPressures) -> Result<AcceptanceFactor, LookupError>;
}

impl<T: ExpansionLookup> ExpansionLookup for &T {
    fn net_expansion(
        &self,
        initial: ThermodynamicTemperature,
        maximum: ThermodynamicTemperature,
    ) -> Result<NetExpansion, LookupError> {
        (**self).net_expansion(initial, maximum)
    }

    fn acceptance_factor(&self, pressures: TankPressures) -> Result<AcceptanceFactor, LookupError> {
        (**self).acceptance_factor(pressures)
    }
}
