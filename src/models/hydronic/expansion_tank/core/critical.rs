//! Critical sizing from tabulated net expansion and acceptance factors.

use uom::si::{f64::Volume, ratio::ratio};

use super::{
    CriticalInput,
    lookup::{AcceptanceFactor, ExpansionLookup, LookupError, NetExpansion},
};

/// Results of a critical sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalResults {
    /// Minimum tank acceptance volume.
    pub acceptance_volume: Volume,

    /// Net expansion factor used.
    pub net_expansion: NetExpansion,

    /// Acceptance factor used.
    pub acceptance_factor: AcceptanceFactor,
}

/// Computes the acceptance volume from both factors.
///
/// ```text
/// V_t = V_s · E_net / F_accept
/// ```
#[must_use]
pub fn critical_acceptance_volume(
    system_volume: Volume,
    net_expansion: NetExpansion,
    acceptance_factor: AcceptanceFactor,
) -> Volume {
    let net = net_expansion.into_inner().get::<ratio>();
    let acceptance = acceptance_factor.into_inner().get::<ratio>();
    system_volume * (net / acceptance)
}

/// Sizes a tank with the critical method.
///
/// The temperature lookup runs first; if it fails, its error is returned and
/// the pressure lookup is never made.
///
/// # Errors
///
/// Returns the first [`LookupError`] raised by `lookup`.
pub fn size(
    input: &CriticalInput,
    lookup: &impl ExpansionLookup,
) -> Result<CriticalResults, LookupError> {
    let net_expansion = lookup.net_expansion(input.fill_temperature, input.max_temperature)?;
    let acceptance_factor = lookup.acceptance_factor(input.pressures)?;

    Ok(CriticalResults {
        acceptance_volume: critical_acceptance_volume(
            input.system_volume.into_inner(),
            net_expansion,
            acceptance_factor,
        ),
        net_expansion,
        acceptance_factor,
    })
}
