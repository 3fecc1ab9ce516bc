//! ASHRAE correlation for diaphragm tank sizing.

use thiserror::Error;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    pressure::psi,
    thermodynamic_temperature::degree_fahrenheit,
    volume::gallon,
};

use crate::support::units::standard_atmosphere;

use super::{AshraeInput, TankPressures, tidy};

/// Configuration for the ASHRAE correlation.
#[derive(Debug, Clone, Copy)]
pub struct AshraeConfig {
    /// Atmospheric pressure used to convert gauge tank pressures to absolute.
    pub atmospheric_pressure: Pressure,
}

impl Default for AshraeConfig {
    fn default() -> Self {
        Self {
            atmospheric_pressure: standard_atmosphere(),
        }
    }
}

/// Errors from [`size`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AshraeSizingError {
    /// The pressure band is empty or inverted, so the tank cannot accept any water.
    #[error(
        "maximum tank pressure ({} psig) must be greater than minimum tank pressure ({} psig)",
        tidy(.maximum),
        tidy(.minimum)
    )]
    PressureDifferential { minimum: f64, maximum: f64 },

    /// The correlation produced a volume that is zero, negative, or not finite.
    #[error(
        "the ASHRAE correlation gives a non-physical tank volume ({} gallons)",
        tidy(.gallons)
    )]
    NonPhysicalVolume { gallons: f64 },
}

/// Evaluates the ASHRAE diaphragm tank correlation.
///
/// ```text
/// V_t = (0.00041·T − 0.0466) · V_s / (1 − P_min,abs / P_max,abs)
/// ```
///
/// where `T` is the average operating temperature in °F.
/// No checks are made: degenerate pressure bands give infinite or negative
/// volumes. Use [`size`] for a checked result.
#[must_use]
pub fn ashrae_acceptance_volume(
    average_temperature: ThermodynamicTemperature,
    system_volume: Volume,
    pressures: TankPressures,
    atmosphere: Pressure,
) -> Volume {
    let t = average_temperature.get::<degree_fahrenheit>();
    let expansion = 0.00041 * t - 0.0466;

    let p_min = pressures.minimum.absolute(atmosphere).get::<psi>();
    let p_max = pressures.maximum.absolute(atmosphere).get::<psi>();

    system_volume * (expansion / (1.0 - p_min / p_max))
}

/// Sizes a tank with the ASHRAE correlation, rejecting non-physical results.
///
/// # Errors
///
/// - [`AshraeSizingError::PressureDifferential`] if the maximum pressure does
///   not exceed the minimum.
/// - [`AshraeSizingError::NonPhysicalVolume`] if the result is not a positive,
///   finite volume (e.g., an average temperature too low for the correlation).
pub fn size(input: &AshraeInput, config: &AshraeConfig) -> Result<Volume, AshraeSizingError> {
    let pressures = input.pressures;
    if !pressures.is_increasing() {
        return Err(AshraeSizingError::PressureDifferential {
            minimum: pressures.minimum.get_psig(),
            maximum: pressures.maximum.get_psig(),
        });
    }

    let volume = ashrae_acceptance_volume(
        input.average_temperature,
        input.system_volume.into_inner(),
        pressures,
        config.atmospheric_pressure,
    );

    let gallons = volume.get::<gallon>();
    if gallons.is_finite() && gallons > 0.0 {
        Ok(volume)
    } else {
        Err(AshraeSizingError::NonPhysicalVolume { gallons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::StrictlyPositive;

    fn input(average_f: f64, min_psig: f64, max_psig: f64) -> AshraeInput {
        AshraeInput {
            system_volume: StrictlyPositive::new(Volume::new::<gallon>(4400.0)).unwrap(),
            average_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(average_f),
            pressures: TankPressures::psig(min_psig, max_psig),
        }
    }

    #[test]
    fn matches_direct_evaluation() {
        let expected = (0.00041 * 230.0 - 0.0466) * 4400.0 / (1.0 - (50.0 + 14.7) / (110.0 + 14.7));

        let volume = size(&input(230.0, 50.0, 110.0), &AshraeConfig::default()).unwrap();
        assert_relative_eq!(volume.get::<gallon>(), expected, max_relative = 1e-9);
        assert_relative_eq!(volume.get::<gallon>(), 436.20, epsilon = 0.01);
    }

    #[test]
    fn is_deterministic() {
        let config = AshraeConfig::default();
        let a = size(&input(200.0, 12.0, 30.0), &config).unwrap();
        let b = size(&input(200.0, 12.0, 30.0), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wider_pressure_band_never_needs_a_bigger_tank() {
        let config = AshraeConfig::default();
        let max_pressures = [55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 90.0, 100.0, 110.0];

        let volumes: Vec<f64> = max_pressures
            .iter()
            .map(|&p_max| {
                size(&input(230.0, 50.0, p_max), &config)
                    .unwrap()
                    .get::<gallon>()
            })
            .collect();

        for pair in volumes.windows(2) {
            assert!(pair[1] <= pair[0], "volume grew: {pair:?}");
        }
    }

    #[test]
    fn atmosphere_is_configurable() {
        // About 5000 ft of elevation.
        let config = AshraeConfig {
            atmospheric_pressure: Pressure::new::<psi>(12.2),
        };
        let expected = (0.00041 * 230.0 - 0.0466) * 4400.0 / (1.0 - (50.0 + 12.2) / (110.0 + 12.2));

        let volume = size(&input(230.0, 50.0, 110.0), &config).unwrap();
        assert_relative_eq!(volume.get::<gallon>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn equal_pressures_are_rejected() {
        let result = size(&input(230.0, 50.0, 50.0), &AshraeConfig::default());
        let Err(AshraeSizingError::PressureDifferential { minimum, maximum }) = result else {
            panic!("expected a pressure differential error, got {result:?}");
        };
        assert_relative_eq!(minimum, 50.0, epsilon = 1e-9);
        assert_relative_eq!(maximum, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn inverted_pressures_are_rejected() {
        let result = size(&input(230.0, 80.0, 27.0), &AshraeConfig::default());
        assert!(matches!(
            result,
            Err(AshraeSizingError::PressureDifferential { .. })
        ));
    }

    #[test]
    fn unchecked_formula_diverges_on_equal_pressures() {
        let volume = ashrae_acceptance_volume(
            ThermodynamicTemperature::new::<degree_fahrenheit>(230.0),
            Volume::new::<gallon>(4400.0),
            TankPressures::psig(50.0, 50.0),
            standard_atmosphere(),
        );
        assert!(!volume.get::<gallon>().is_finite());
    }

    #[test]
    fn temperature_below_correlation_range_is_rejected() {
        // 0.00041·100 − 0.0466 < 0
        let result = size(&input(100.0, 12.0, 30.0), &AshraeConfig::default());
        assert!(matches!(
            result,
            Err(AshraeSizingError::NonPhysicalVolume { gallons }) if gallons < 0.0
        ));
    }
}
