use ndarray::{arr1, arr2};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::support::{
    constraint::{StrictlyPositive, UnitIntervalLowerOpen},
    table::{Table2D, TableError},
    units::TemperatureDifference,
};

use super::{
    AcceptanceFactor, ExpansionLookup, LookupError, NetExpansion, PressureRangeError,
    TemperatureRangeError,
};
use crate::models::hydronic::expansion_tank::core::TankPressures;

/// Initial (fill) water temperatures, °F.
pub(crate) const INITIAL_TEMPERATURES_F: [f64; 9] =
    [40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0];

/// Maximum water temperatures, °F.
pub(crate) const MAX_TEMPERATURES_F: [f64; 13] = [
    120.0, 130.0, 140.0, 150.0, 160.0, 170.0, 180.0, 190.0, 200.0, 210.0, 220.0, 230.0, 240.0,
];

/// Minimum tank pressures, psig.
pub(crate) const MIN_PRESSURES_PSIG: [f64; 11] =
    [5.0, 10.0, 12.0, 15.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];

/// Maximum tank pressures, psig.
pub(crate) const MAX_PRESSURES_PSIG: [f64; 15] = [
    27.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 90.0, 100.0, 110.0,
];

/// Net expansion of water, indexed by initial (rows) and maximum (columns)
/// temperature.
///
/// Growth in the specific volume of saturated water, less the volumetric growth
/// of steel piping (linear coefficient 7.0e-6 per °F).
#[rustfmt::skip]
const NET_EXPANSION: [[f64; 13]; 9] = [
    [0.0099, 0.0123, 0.0149, 0.0179, 0.0209, 0.0241, 0.0276, 0.0312, 0.0350, 0.0390, 0.0432, 0.0475, 0.0521],
    [0.0098, 0.0122, 0.0149, 0.0178, 0.0208, 0.0241, 0.0275, 0.0311, 0.0349, 0.0390, 0.0431, 0.0475, 0.0521],
    [0.0093, 0.0118, 0.0144, 0.0173, 0.0204, 0.0236, 0.0270, 0.0306, 0.0344, 0.0384, 0.0426, 0.0469, 0.0515],
    [0.0085, 0.0110, 0.0136, 0.0165, 0.0195, 0.0228, 0.0262, 0.0298, 0.0336, 0.0376, 0.0418, 0.0461, 0.0507],
    [0.0074, 0.0098, 0.0124, 0.0153, 0.0184, 0.0216, 0.0250, 0.0286, 0.0324, 0.0364, 0.0405, 0.0449, 0.0495],
    [0.0060, 0.0084, 0.0110, 0.0139, 0.0169, 0.0201, 0.0236, 0.0272, 0.0309, 0.0349, 0.0391, 0.0434, 0.0480],
    [0.0042, 0.0066, 0.0093, 0.0122, 0.0152, 0.0184, 0.0218, 0.0254, 0.0291, 0.0332, 0.0373, 0.0416, 0.0462],
    [0.0022, 0.0046, 0.0072, 0.0101, 0.0131, 0.0163, 0.0197, 0.0233, 0.0271, 0.0311, 0.0352, 0.0395, 0.0440],
    [0.0000, 0.0024, 0.0050, 0.0079, 0.0109, 0.0141, 0.0175, 0.0211, 0.0248, 0.0288, 0.0329, 0.0372, 0.0417],
];

/// Diaphragm tank acceptance factor, `(P_max − P_min) / (P_max + 14.7)`,
/// indexed by minimum (rows) and maximum (columns) tank pressure.
///
/// Cells where the maximum does not exceed the minimum hold the same relation's
/// non-positive values so interpolation stays continuous across the diagonal.
/// Lookups never return them: a band too narrow to read off the grid is a
/// [`PressureRangeError::NarrowBand`].
#[rustfmt::skip]
const ACCEPTANCE_FACTOR: [[f64; 15]; 11] = [
    [0.5276, 0.5593, 0.6036, 0.6399, 0.6700, 0.6955, 0.7174, 0.7363, 0.7528, 0.7674, 0.7804, 0.7920, 0.8118, 0.8282, 0.8420],
    [0.4077, 0.4474, 0.5030, 0.5484, 0.5863, 0.6182, 0.6456, 0.6693, 0.6901, 0.7084, 0.7246, 0.7392, 0.7641, 0.7847, 0.8019],
    [0.3597, 0.4027, 0.4628, 0.5119, 0.5528, 0.5873, 0.6169, 0.6426, 0.6650, 0.6848, 0.7023, 0.7181, 0.7450, 0.7672, 0.7859],
    [0.2878, 0.3356, 0.4024, 0.4570, 0.5025, 0.5410, 0.5739, 0.6024, 0.6274, 0.6494, 0.6689, 0.6864, 0.7163, 0.7411, 0.7618],
    [0.1679, 0.2237, 0.3018, 0.3656, 0.4188, 0.4637, 0.5022, 0.5355, 0.5646, 0.5903, 0.6132, 0.6336, 0.6686, 0.6975, 0.7217],
    [-0.0719, 0.0000, 0.1006, 0.1828, 0.2513, 0.3091, 0.3587, 0.4016, 0.4391, 0.4723, 0.5017, 0.5280, 0.5731, 0.6103, 0.6415],
    [-0.3118, -0.2237, -0.1006, 0.0000, 0.0838, 0.1546, 0.2152, 0.2677, 0.3137, 0.3542, 0.3902, 0.4224, 0.4776, 0.5231, 0.5613],
    [-0.5516, -0.4474, -0.3018, -0.1828, -0.0838, 0.0000, 0.0717, 0.1339, 0.1882, 0.2361, 0.2787, 0.3168, 0.3820, 0.4359, 0.4812],
    [-0.7914, -0.6711, -0.5030, -0.3656, -0.2513, -0.1546, -0.0717, 0.0000, 0.0627, 0.1181, 0.1672, 0.2112, 0.2865, 0.3487, 0.4010],
    [-1.0312, -0.8949, -0.7042, -0.5484, -0.4188, -0.3091, -0.2152, -0.1339, -0.0627, 0.0000, 0.0557, 0.1056, 0.1910, 0.2616, 0.3208],
    [-1.2710, -1.1186, -0.9054, -0.7313, -0.5863, -0.4637, -0.3587, -0.2677, -0.1882, -0.1181, -0.0557, 0.0000, 0.0955, 0.1744, 0.2406],
];

/// Net expansion and acceptance factor tables in the form published in
/// AMTROL's engineering handbook (hydro-pneumatics in hot water heating
/// systems).
///
/// Values between grid points are bilinearly interpolated.
/// Nothing is extrapolated: conditions outside the grid are reported as
/// range errors.
///
/// # Example
///
/// ```
/// use expansion_tank_models::models::hydronic::expansion_tank::{
///     ExpansionLookup, HandbookTables, TankPressures,
/// };
/// use uom::si::{f64::ThermodynamicTemperature, ratio::ratio, thermodynamic_temperature::degree_fahrenheit};
///
/// let tables = HandbookTables::new().unwrap();
///
/// let net = tables
///     .net_expansion(
///         ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
///         ThermodynamicTemperature::new::<degree_fahrenheit>(230.0),
///     )
///     .unwrap();
/// assert!((net.into_inner().get::<ratio>() - 0.0461).abs() < 1e-9);
///
/// assert!(tables.acceptance_factor(TankPressures::psig(50.0, 200.0)).is_err());
/// ```
#[derive(Debug)]
pub struct HandbookTables {
    net_expansion: Table2D,
    acceptance_factor: Table2D,
}

impl HandbookTables {
    /// Builds the tables.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if a table grid fails validation.
    pub fn new() -> Result<Self, TableError> {
        Ok(Self {
            net_expansion: Table2D::new(
                arr1(&INITIAL_TEMPERATURES_F),
                arr1(&MAX_TEMPERATURES_F),
                arr2(&NET_EXPANSION),
            )?,
            acceptance_factor: Table2D::new(
                arr1(&MIN_PRESSURES_PSIG),
                arr1(&MAX_PRESSURES_PSIG),
                arr2(&ACCEPTANCE_FACTOR),
            )?,
        })
    }
}

impl ExpansionLookup for HandbookTables {
    fn net_expansion(
        &self,
        initial: ThermodynamicTemperature,
        maximum: ThermodynamicTemperature,
    ) -> Result<NetExpansion, LookupError> {
        let rise = maximum.minus(initial).get::<delta_fahrenheit>();
        let initial = initial.get::<degree_fahrenheit>();
        let maximum = maximum.get::<degree_fahrenheit>();

        if !self.net_expansion.contains_x(initial) {
            let range = self.net_expansion.x_range();
            tracing::debug!(initial, "initial temperature outside net expansion table");
            return Err(TemperatureRangeError::Initial {
                value: initial,
                min: *range.start(),
                max: *range.end(),
            }
            .into());
        }

        if !self.net_expansion.contains_y(maximum) {
            let range = self.net_expansion.y_range();
            tracing::debug!(maximum, "maximum temperature outside net expansion table");
            return Err(TemperatureRangeError::Maximum {
                value: maximum,
                min: *range.start(),
                max: *range.end(),
            }
            .into());
        }

        if rise <= 0.0 {
            return Err(TemperatureRangeError::NotIncreasing { initial, maximum }.into());
        }

        let factor = self.net_expansion.lookup(initial, maximum)?;
        Ok(StrictlyPositive::new(Ratio::new::<ratio>(factor))?)
    }

    fn acceptance_factor(&self, pressures: TankPressures) -> Result<AcceptanceFactor, LookupError> {
        let minimum = pressures.minimum.get_psig();
        let maximum = pressures.maximum.get_psig();

        if !self.acceptance_factor.contains_x(minimum) {
            let range = self.acceptance_factor.x_range();
            tracing::debug!(minimum, "minimum pressure outside acceptance factor table");
            return Err(PressureRangeError::Minimum {
                value: minimum,
                min: *range.start(),
                max: *range.end(),
            }
            .into());
        }

        if !self.acceptance_factor.contains_y(maximum) {
            let range = self.acceptance_factor.y_range();
            tracing::debug!(maximum, "maximum pressure outside acceptance factor table");
            return Err(PressureRangeError::Maximum {
                value: maximum,
                min: *range.start(),
                max: *range.end(),
            }
            .into());
        }

        if !pressures.is_increasing() {
            return Err(PressureRangeError::NotIncreasing { minimum, maximum }.into());
        }

        let factor = self.acceptance_factor.lookup(minimum, maximum)?;
        if factor <= 0.0 {
            tracing::debug!(minimum, maximum, factor, "pressure band crosses the table diagonal");
            return Err(PressureRangeError::NarrowBand { minimum, maximum }.into());
        }

        Ok(UnitIntervalLowerOpen::new(Ratio::new::<ratio>(factor))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn fahrenheit(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(value)
    }

    fn net(tables: &HandbookTables, initial: f64, maximum: f64) -> Result<f64, LookupError> {
        tables
            .net_expansion(fahrenheit(initial), fahrenheit(maximum))
            .map(|f| f.into_inner().get::<ratio>())
    }

    fn acceptance(tables: &HandbookTables, minimum: f64, maximum: f64) -> Result<f64, LookupError> {
        tables
            .acceptance_factor(TankPressures::psig(minimum, maximum))
            .map(|f| f.into_inner().get::<ratio>())
    }

    #[test]
    fn grid_points() {
        let tables = HandbookTables::new().unwrap();

        assert_relative_eq!(net(&tables, 70.0, 230.0).unwrap(), 0.0461, epsilon = 1e-9);
        assert_relative_eq!(net(&tables, 40.0, 120.0).unwrap(), 0.0099, epsilon = 1e-9);
        assert_relative_eq!(net(&tables, 120.0, 240.0).unwrap(), 0.0417, epsilon = 1e-9);

        assert_relative_eq!(acceptance(&tables, 50.0, 110.0).unwrap(), 0.4812, epsilon = 1e-9);
        assert_relative_eq!(acceptance(&tables, 12.0, 30.0).unwrap(), 0.4027, epsilon = 1e-9);
        assert_relative_eq!(acceptance(&tables, 5.0, 27.0).unwrap(), 0.5276, epsilon = 1e-9);
    }

    #[test]
    fn interpolates_between_grid_points() {
        let tables = HandbookTables::new().unwrap();

        // Halfway between the 220°F and 230°F columns.
        assert_relative_eq!(
            net(&tables, 70.0, 225.0).unwrap(),
            (0.0418 + 0.0461) / 2.0,
            epsilon = 1e-9
        );

        // The relation is linear in minimum pressure, so interpolation along
        // that axis recovers it to table precision.
        assert_relative_eq!(
            acceptance(&tables, 45.0, 110.0).unwrap(),
            (110.0 - 45.0) / (110.0 + 14.7),
            epsilon = 1e-4
        );
    }

    #[test]
    fn narrow_band_near_the_diagonal_stays_positive() {
        let tables = HandbookTables::new().unwrap();
        let factor = acceptance(&tables, 45.0, 50.0).unwrap();
        assert!(factor > 0.0);
        assert_relative_eq!(factor, 5.0 / 64.7, epsilon = 2e-3);
    }

    #[test]
    fn off_grid_narrow_band_is_a_range_error() {
        let tables = HandbookTables::new().unwrap();

        for (minimum, maximum) in [(32.0, 32.1), (32.0, 32.01), (62.0, 62.05)] {
            let err = acceptance(&tables, minimum, maximum).unwrap_err();
            assert!(
                matches!(
                    err,
                    LookupError::Pressure(PressureRangeError::NarrowBand { .. })
                ),
                "{minimum} → {maximum}: {err:?}"
            );
            assert!(err.is_out_of_range());
        }

        let err = acceptance(&tables, 32.0, 32.1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tank pressure band 32 to 32.1 psig is too narrow to read from the acceptance factor table"
        );
    }

    #[test]
    fn temperatures_out_of_range() {
        let tables = HandbookTables::new().unwrap();

        assert!(matches!(
            net(&tables, 30.0, 200.0),
            Err(LookupError::Temperature(TemperatureRangeError::Initial { .. }))
        ));
        assert!(matches!(
            net(&tables, 70.0, 250.0),
            Err(LookupError::Temperature(TemperatureRangeError::Maximum { .. }))
        ));
        assert!(matches!(
            net(&tables, 120.0, 120.0),
            Err(LookupError::Temperature(TemperatureRangeError::NotIncreasing { .. }))
        ));
        assert!(matches!(
            net(&tables, f64::NAN, 200.0),
            Err(LookupError::Temperature(_))
        ));
    }

    #[test]
    fn pressures_out_of_range() {
        let tables = HandbookTables::new().unwrap();

        assert!(matches!(
            acceptance(&tables, 2.0, 30.0),
            Err(LookupError::Pressure(PressureRangeError::Minimum { .. }))
        ));
        assert!(matches!(
            acceptance(&tables, 12.0, 150.0),
            Err(LookupError::Pressure(PressureRangeError::Maximum { .. }))
        ));
        assert!(matches!(
            acceptance(&tables, 80.0, 27.0),
            Err(LookupError::Pressure(PressureRangeError::NotIncreasing { .. }))
        ));
        assert!(matches!(
            acceptance(&tables, 50.0, 50.0),
            Err(LookupError::Pressure(PressureRangeError::NotIncreasing { .. }))
        ));
    }

    #[test]
    fn error_messages_name_the_supported_range() {
        let tables = HandbookTables::new().unwrap();

        let err = net(&tables, 70.0, 250.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "maximum temperature 250°F is outside the supported range (120°F to 240°F)"
        );

        let err = acceptance(&tables, 2.0, 30.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "minimum tank pressure 2 psig is outside the supported range (5 to 80 psig)"
        );
    }

    #[test]
    fn every_listed_increasing_pair_has_a_factor() {
        let tables = HandbookTables::new().unwrap();

        for &initial in &INITIAL_TEMPERATURES_F {
            for &maximum in MAX_TEMPERATURES_F.iter().filter(|&&m| m > initial) {
                assert!(net(&tables, initial, maximum).is_ok(), "{initial} → {maximum}");
            }
        }

        for &minimum in &MIN_PRESSURES_PSIG {
            for &maximum in MAX_PRESSURES_PSIG.iter().filter(|&&m| m > minimum) {
                assert!(acceptance(&tables, minimum, maximum).is_ok(), "{minimum} → {maximum}");
            }
        }
    }
}
