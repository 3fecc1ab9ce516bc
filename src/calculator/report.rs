use std::fmt;

use uom::si::{f64::Volume, volume::gallon};

use crate::models::hydronic::expansion_tank::{AshraeSizingError, CriticalResults, LookupError};

/// Outcome of both sizing methods for one request.
///
/// Each method's result stands on its own; a failure in one never hides the
/// other.
/// [`Display`](fmt::Display) renders one line per method, volumes to two
/// decimal places.
#[derive(Debug)]
pub struct SizingReport {
    pub ashrae: Result<Volume, AshraeSizingError>,
    pub critical: Result<CriticalResults, LookupError>,
}

impl SizingReport {
    /// ASHRAE acceptance volume in gallons, if the method succeeded.
    #[must_use]
    pub fn ashrae_gallons(&self) -> Option<f64> {
        self.ashrae.as_ref().ok().map(|v| v.get::<gallon>())
    }

    /// Critical acceptance volume in gallons, if the method succeeded.
    #[must_use]
    pub fn critical_gallons(&self) -> Option<f64> {
        self.critical
            .as_ref()
            .ok()
            .map(|r| r.acceptance_volume.get::<gallon>())
    }
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ashrae {
            Ok(volume) => writeln!(
                f,
                "ASHRAE Method Min Tank Volume: {:.2} gallons",
                volume.get::<gallon>()
            )?,
            Err(err) => writeln!(f, "ASHRAE Method Error: {err}")?,
        }

        match &self.critical {
            Ok(results) => write!(
                f,
                "Critical Method Min Tank Volume: {:.2} gallons",
                results.acceptance_volume.get::<gallon>()
            ),
            Err(err) => write!(f, "Critical Method Error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    use crate::models::hydronic::expansion_tank::{PressureRangeError, TemperatureRangeError};
    use crate::support::constraint::{ConstraintError, StrictlyPositive, UnitIntervalLowerOpen};

    fn critical(gallons: f64) -> CriticalResults {
        CriticalResults {
            acceptance_volume: Volume::new::<gallon>(gallons),
            net_expansion: StrictlyPositive::new(Ratio::new::<ratio>(0.0461)).unwrap(),
            acceptance_factor: UnitIntervalLowerOpen::new(Ratio::new::<ratio>(0.4812)).unwrap(),
        }
    }

    #[test]
    fn both_methods_succeed() {
        let report = SizingReport {
            ashrae: Ok(Volume::new::<gallon>(436.2006)),
            critical: Ok(critical(421.5295)),
        };

        assert_eq!(
            report.to_string(),
            "ASHRAE Method Min Tank Volume: 436.20 gallons\n\
             Critical Method Min Tank Volume: 421.53 gallons"
        );
    }

    #[test]
    fn critical_error_replaces_only_its_line() {
        let report = SizingReport {
            ashrae: Ok(Volume::new::<gallon>(436.2006)),
            critical: Err(TemperatureRangeError::Maximum {
                value: 250.0,
                min: 120.0,
                max: 240.0,
            }
            .into()),
        };

        assert_eq!(
            report.to_string(),
            "ASHRAE Method Min Tank Volume: 436.20 gallons\n\
             Critical Method Error: maximum temperature 250°F is outside the supported range (120°F to 240°F)"
        );
        assert!(report.ashrae_gallons().is_some());
        assert!(report.critical_gallons().is_none());
    }

    #[test]
    fn ashrae_error_replaces_only_its_line() {
        let report = SizingReport {
            ashrae: Err(AshraeSizingError::PressureDifferential {
                minimum: 80.0,
                maximum: 27.0,
            }),
            critical: Err(PressureRangeError::NotIncreasing {
                minimum: 80.0,
                maximum: 27.0,
            }
            .into()),
        };

        assert_eq!(
            report.to_string(),
            "ASHRAE Method Error: maximum tank pressure (27 psig) must be greater than minimum tank pressure (80 psig)\n\
             Critical Method Error: maximum tank pressure (27 psig) must be greater than minimum tank pressure (80 psig)"
        );
    }

    #[test]
    fn critical_errors_carry_their_details() {
        let narrow = SizingReport {
            ashrae: Ok(Volume::new::<gallon>(436.2006)),
            critical: Err(PressureRangeError::NarrowBand {
                minimum: 32.0,
                maximum: 32.1,
            }
            .into()),
        };
        assert!(narrow.to_string().ends_with(
            "Critical Method Error: tank pressure band 32 to 32.1 psig is too narrow to read from the acceptance factor table"
        ));

        let factor = SizingReport {
            ashrae: Ok(Volume::new::<gallon>(436.2006)),
            critical: Err(LookupError::Factor(ConstraintError::BelowMinimum)),
        };
        assert!(factor.to_string().ends_with(
            "Critical Method Error: tabulated factor is not physical: value is below the minimum allowed"
        ));
    }
}
