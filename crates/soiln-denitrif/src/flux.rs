//! Flux resolution
//!
//! Combines the substrate limits with the moisture scalar into a daily
//! denitrification flux, bounded by the nitrate actually present.

use crate::substrate::SubstrateLimits;
use serde::{Deserialize, Serialize};
use soiln_core::state::SoilNitrogenState;
use soiln_core::FloatValue;

/// Daily denitrification for a patch.
///
/// `min(fCO2, fNO3) * water_scalar` when substrate limits are available
/// (nitrate is present), otherwise zero. The result is clamped to
/// `[0, nitrate]`.
pub fn resolve_denitrification(
    limits: Option<&SubstrateLimits>,
    water_scalar: FloatValue,
    nitrate: FloatValue,
) -> FloatValue {
    let potential = limits.map_or(0.0, |limits| limits.binding() * water_scalar);
    potential.min(nitrate).max(0.0)
}

/// Change to a patch's nitrogen pools from one day's denitrification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NitrogenStateDelta {
    /// Change in soil nitrate (never positive)
    pub nitrate: FloatValue,
    /// Change in the volatilised sink (never negative)
    pub volatilized_sink: FloatValue,
}

impl NitrogenStateDelta {
    pub fn from_denitrification(denitrification: FloatValue) -> Self {
        Self {
            nitrate: -denitrification,
            volatilized_sink: denitrification,
        }
    }

    pub fn apply(&self, state: &mut SoilNitrogenState) {
        state.nitrate += self.nitrate;
        state.volatilized_sink += self.volatilized_sink;
    }
}
