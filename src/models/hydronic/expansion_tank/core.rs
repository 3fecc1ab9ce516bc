//! Expansion tank sizing.
//!
//! Two methods size the minimum acceptance volume of a diaphragm expansion
//! tank:
//!
//! - [`ashrae`]: a single correlation in average operating temperature and the
//!   absolute pressure ratio.
//! - [`critical`]: system volume times a tabulated net expansion factor,
//!   divided by a tabulated acceptance factor.
//!
//! The methods are independent; neither consumes the other's results.

pub(crate) mod ashrae;
pub(crate) mod critical;
mod input;
pub(crate) mod lookup;

pub use ashrae::{AshraeConfig, AshraeSizingError, ashrae_acceptance_volume};
pub use critical::{CriticalResults, critical_acceptance_volume};
pub use input::{AshraeInput, CriticalInput, SystemVolume, TankPressures};
pub use lookup::{
    AcceptanceFactor, ExpansionLookup, HandbookTables, LookupError, NetExpansion,
    PressureRangeError, TemperatureRangeError,
};

/// Rounds away conversion noise so values read cleanly in messages.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn tidy(value: &f64) -> f64 {
    (value * 1e6).round() / 1e6
}
