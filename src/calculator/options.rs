//! Choices offered for each form field.
//!
//! The pressure and temperature choices match the grids of the
//! [`HandbookTables`](crate::models::hydronic::expansion_tank::HandbookTables).
//! They guide input; the formulas accept any number.

use crate::models::hydronic::expansion_tank::core::lookup::{
    INITIAL_TEMPERATURES_F, MAX_PRESSURES_PSIG, MAX_TEMPERATURES_F, MIN_PRESSURES_PSIG,
};

/// Minimum tank pressure choices, psig.
pub const MIN_TANK_PRESSURES_PSIG: &[f64] = &MIN_PRESSURES_PSIG;

/// Maximum tank pressure choices, psig.
pub const MAX_TANK_PRESSURES_PSIG: &[f64] = &MAX_PRESSURES_PSIG;

/// Average operating temperature choices for the ASHRAE method, °F.
pub const AVERAGE_TEMPERATURES_F: &[f64] = &[
    160.0, 170.0, 180.0, 190.0, 200.0, 210.0, 220.0, 230.0, 240.0, 250.0, 260.0, 270.0, 280.0,
];

/// Initial (fill) water temperature choices for the critical method, °F.
pub const INITIAL_WATER_TEMPERATURES_F: &[f64] = &INITIAL_TEMPERATURES_F;

/// Maximum water temperature choices for the critical method, °F.
pub const MAX_WATER_TEMPERATURES_F: &[f64] = &MAX_TEMPERATURES_F;

/// Returns `true` if `value` is one of `choices`.
#[must_use]
pub fn is_listed(choices: &[f64], value: f64) -> bool {
    choices
        .iter()
        .any(|&choice| (choice - value).abs() <= 1e-9 * choice.abs().max(1.0))
}
