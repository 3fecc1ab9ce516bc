use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the left-open unit interval: `0 < x ≤ 1`.
///
/// An acceptance factor is the fraction of tank volume that can take on
/// expanded water, so a usable one is never zero and never exceeds the tank.
///
/// # Examples
///
/// ```
/// use expansion_tank_models::support::constraint::UnitIntervalLowerOpen;
///
/// let factor = UnitIntervalLowerOpen::new(0.481).unwrap();
/// assert_eq!(factor.as_ref(), &0.481);
///
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(-0.2).is_err());
/// assert!(UnitIntervalLowerOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs `Constrained<T, UnitIntervalLowerOpen>` if 0 < value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLowerOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    use uom::si::{f64::Ratio, ratio::percent};

    #[test]
    fn acceptance_factors() {
        assert!(Constrained::<f64, UnitIntervalLowerOpen>::new(0.101).is_ok());
        assert!(UnitIntervalLowerOpen::new(0.842).is_ok());
        assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            UnitIntervalLowerOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(-0.183),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(1.000_000_1),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            UnitIntervalLowerOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn ratios() {
        assert!(UnitIntervalLowerOpen::new(Ratio::new::<percent>(48.1)).is_ok());
        assert!(UnitIntervalLowerOpen::new(Ratio::new::<percent>(0.0)).is_err());
        assert!(UnitIntervalLowerOpen::new(Ratio::new::<percent>(120.0)).is_err());
    }
}
