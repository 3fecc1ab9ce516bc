use uom::si::f64::{ThermodynamicTemperature, Volume};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::GaugePressure,
};

/// Total water volume of the hydronic system.
pub type SystemVolume = Constrained<Volume, StrictlyPositive>;

/// Minimum and maximum tank pressures, both gauge.
///
/// The minimum is the fill (precharge) pressure at the tank and the maximum is
/// the highest pressure the tank may reach, usually set by the relief valve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankPressures {
    pub minimum: GaugePressure,
    pub maximum: GaugePressure,
}

impl TankPressures {
    /// Creates tank pressures from gauge readings.
    #[must_use]
    pub fn new(minimum: GaugePressure, maximum: GaugePressure) -> Self {
        Self { minimum, maximum }
    }

    /// Creates tank pressures from values in psig.
    #[must_use]
    pub fn psig(minimum: f64, maximum: f64) -> Self {
        Self::new(GaugePressure::psig(minimum), GaugePressure::psig(maximum))
    }

    /// Returns `true` if the maximum pressure exceeds the minimum.
    #[must_use]
    pub fn is_increasing(&self) -> bool {
        self.maximum > self.minimum
    }
}

/// Inputs to the ASHRAE sizing correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AshraeInput {
    pub system_volume: SystemVolume,
    pub average_temperature: ThermodynamicTemperature,
    pub pressures: TankPressures,
}

/// Inputs to the critical (table-based) sizing method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalInput {
    pub system_volume: SystemVolume,

    /// Water temperature when the system is filled.
    pub fill_temperature: ThermodynamicTemperature,

    /// Highest water temperature reached in operation.
    pub max_temperature: ThermodynamicTemperature,

    pub pressures: TankPressures,
}
