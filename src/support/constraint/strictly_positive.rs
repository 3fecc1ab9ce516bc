use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level.
/// Works with plain numbers and with [`uom`] quantities.
///
/// # Examples
///
/// ```
/// use expansion_tank_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Volume, volume::gallon};
///
/// assert!(StrictlyPositive::new(Volume::new::<gallon>(250.0)).is_ok());
/// assert!(StrictlyPositive::new(0.046).is_ok());
///
/// // Error cases:
/// assert!(StrictlyPositive::new(Volume::new::<gallon>(0.0)).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Volume, volume::gallon};

    #[test]
    fn factors() {
        assert!(Constrained::<f64, StrictlyPositive>::new(0.0461).is_ok());
        assert!(matches!(
            StrictlyPositive::new(0.0),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(-0.01),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn system_volumes() {
        let volume = Volume::new::<gallon>(4400.0);
        assert!(StrictlyPositive::new(volume).is_ok());

        let volume = Volume::new::<gallon>(0.0);
        assert!(StrictlyPositive::new(volume).is_err());

        let volume = Volume::new::<gallon>(-120.0);
        assert!(StrictlyPositive::new(volume).is_err());
    }
}
