//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (volume, temperature, pressure).
//! This module provides extensions that sizing needs but [`uom`] does not include.
//!
//! ## Gauge pressure
//!
//! Tank pressures are specified in psig, relative to the surrounding atmosphere.
//! [`GaugePressure`] keeps that reference explicit and converts to absolute
//! pressure against a given atmosphere:
//!
//! ```
//! use uom::si::pressure::psi;
//! use expansion_tank_models::support::units::{GaugePressure, standard_atmosphere};
//!
//! let p = GaugePressure::psig(50.0);
//! let absolute = p.absolute(standard_atmosphere());
//! assert!((absolute.get::<psi>() - 64.7).abs() < 1e-9);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval.

mod gauge_pressure;
mod temperature_difference;

pub use gauge_pressure::{GaugePressure, standard_atmosphere};
pub use temperature_difference::TemperatureDifference;
