use uom::si::{f64::Pressure, pressure::psi};

/// Standard atmospheric pressure at sea level, psi.
const STANDARD_ATMOSPHERE_PSI: f64 = 14.7;

/// Returns standard atmospheric pressure (14.7 psi).
#[must_use]
pub fn standard_atmosphere() -> Pressure {
    Pressure::new::<psi>(STANDARD_ATMOSPHERE_PSI)
}

/// A pressure measured relative to the surrounding atmosphere.
///
/// [`uom`] quantities carry no reference point, so a bare [`Pressure`] cannot
/// say whether it is gauge or absolute.
/// Wrapping gauge readings makes the conversion an explicit step.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GaugePressure(Pressure);

impl GaugePressure {
    /// Wraps a pressure measured relative to atmosphere.
    #[must_use]
    pub fn new(gauge: Pressure) -> Self {
        Self(gauge)
    }

    /// Creates a gauge pressure from a value in psig.
    #[must_use]
    pub fn psig(value: f64) -> Self {
        Self(Pressure::new::<psi>(value))
    }

    /// Returns the gauge reading.
    #[must_use]
    pub fn gauge(self) -> Pressure {
        self.0
    }

    /// Returns the gauge reading in psig.
    #[must_use]
    pub fn get_psig(self) -> f64 {
        self.0.get::<psi>()
    }

    /// Returns the absolute pressure given the surrounding atmosphere.
    #[must_use]
    pub fn absolute(self, atmosphere: Pressure) -> Pressure {
        self.0 + atmosphere
    }
}
