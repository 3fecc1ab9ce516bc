//! Two-dimensional lookup tables.
//!
//! Engineering handbooks publish many sizing factors as grids indexed by two
//! operating conditions.
//! [`Table2D`] holds such a grid and bilinearly interpolates between its
//! points, refusing to extrapolate past the published range.
//!
//! Inputs usually arrive through unit conversions, so a point that lands on a
//! grid edge may be off by a few ulps. Points within a small tolerance of an
//! edge are treated as on it.

use std::{fmt, ops::RangeInclusive};

use ndarray::{Array1, Array2};
use ninterp::{
    error::{InterpolateError, ValidateError},
    interpolator::Extrapolate,
    prelude::{Interp2DOwned, Interpolator},
    strategy::Linear,
};
use thiserror::Error;

/// Relative distance past a grid edge still treated as on the edge.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Errors from building or evaluating a [`Table2D`].
#[derive(Debug, Error)]
pub enum TableError {
    /// An axis has no grid points.
    #[error("table axis has no grid points")]
    EmptyAxis,

    /// The grid failed validation (unsorted axis, shape mismatch).
    #[error(transparent)]
    Validation(#[from] ValidateError),

    /// The requested point lies outside the grid.
    #[error("point ({x}, {y}) is outside the table")]
    OutOfRange { x: f64, y: f64 },

    /// The requested point could not be interpolated.
    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}

/// A bilinear lookup table over a rectangular grid.
///
/// The grid is defined by strictly increasing `x` and `y` axes and a value
/// array of shape `(x.len(), y.len())`.
///
/// # Example
///
/// ```
/// use ndarray::{arr1, arr2};
/// use expansion_tank_models::support::table::Table2D;
///
/// let table = Table2D::new(
///     arr1(&[0.0, 10.0]),
///     arr1(&[0.0, 100.0]),
///     arr2(&[[0.0, 1.0], [2.0, 3.0]]),
/// )
/// .unwrap();
///
/// assert!((table.lookup(5.0, 50.0).unwrap() - 1.5).abs() < 1e-12);
/// assert!(!table.contains(11.0, 50.0));
/// ```
pub struct Table2D {
    interp: Interp2DOwned<f64, Linear>,
    x_range: RangeInclusive<f64>,
    y_range: RangeInclusive<f64>,
}

impl Table2D {
    /// Creates a table from grid axes and values.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyAxis`] if either axis is empty, or
    /// [`TableError::Validation`] if the axes are not strictly increasing or
    /// the value array's shape does not match them.
    pub fn new(x: Array1<f64>, y: Array1<f64>, values: Array2<f64>) -> Result<Self, TableError> {
        let x_range = axis_range(&x)?;
        let y_range = axis_range(&y)?;

        let interp = Interp2DOwned::new(x, y, values, Linear, Extrapolate::Error)?;

        Ok(Self {
            interp,
            x_range,
            y_range,
        })
    }

    /// The inclusive span of the `x` axis.
    #[must_use]
    pub fn x_range(&self) -> RangeInclusive<f64> {
        self.x_range.clone()
    }

    /// The inclusive span of the `y` axis.
    #[must_use]
    pub fn y_range(&self) -> RangeInclusive<f64> {
        self.y_range.clone()
    }

    /// Returns `true` if `x` lies within the `x` axis span.
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        within(&self.x_range, x)
    }

    /// Returns `true` if `y` lies within the `y` axis span.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        within(&self.y_range, y)
    }

    /// Returns `true` if `(x, y)` lies within the grid.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }

    /// Looks up the value at `(x, y)`, interpolating between grid points.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfRange`] if the point lies outside the grid
    /// or is not a number.
    pub fn lookup(&self, x: f64, y: f64) -> Result<f64, TableError> {
        if !self.contains(x, y) {
            return Err(TableError::OutOfRange { x, y });
        }

        let point = [
            x.clamp(*self.x_range.start(), *self.x_range.end()),
            y.clamp(*self.y_range.start(), *self.y_range.end()),
        ];
        Ok(self.interp.interpolate(&point)?)
    }
}

impl fmt::Debug for Table2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table2D")
            .field("x_range", &self.x_range)
            .field("y_range", &self.y_range)
            .finish_non_exhaustive()
    }
}

fn within(range: &RangeInclusive<f64>, value: f64) -> bool {
    let (start, end) = (*range.start(), *range.end());
    let slack = |edge: f64| EDGE_TOLERANCE * edge.abs().max(1.0);
    value >= start - slack(start) && value <= end + slack(end)
}

fn axis_range(axis: &Array1<f64>) -> Result<RangeInclusive<f64>, TableError> {
    match (axis.first(), axis.last()) {
        (Some(&first), Some(&last)) => Ok(first..=last),
        _ => Err(TableError::EmptyAxis),
    }
}
