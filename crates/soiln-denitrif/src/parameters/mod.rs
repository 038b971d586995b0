//! Denitrification component parameters
//!
//! One parameter struct per sub-model, each defaulting to the published
//! Parton et al. (1996) regression coefficients. [`DenitrificationParameters`]
//! groups them so a single TOML file can recalibrate any subset.

mod denitrification;
mod gas_partition;
mod moisture_response;
mod substrate_limits;

pub use denitrification::DenitrificationParameters;
pub use gas_partition::GasPartitionParameters;
pub use moisture_response::{
    MoistureResponseParameters, TextureCoefficients, CLAY_COEFFICIENTS, LOAM_COEFFICIENTS,
    SAND_COEFFICIENTS,
};
pub use substrate_limits::{CarbonLimitParameters, NitrateLimitParameters};

use soiln_core::errors::{SoilNError, SoilNResult};
use soiln_core::FloatValue;

/// Rejects non-finite parameter values.
pub(crate) fn check_finite(name: &str, value: FloatValue) -> SoilNResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SoilNError::invalid_parameter(
            name,
            format!("expected a finite value, got {value}"),
        ))
    }
}

/// Rejects negative values.
pub(crate) fn check_non_negative(name: &str, value: FloatValue) -> SoilNResult<()> {
    check_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SoilNError::invalid_parameter(
            name,
            format!("expected a non-negative value, got {value}"),
        ))
    }
}

/// Rejects values that are not strictly positive.
pub(crate) fn check_positive(name: &str, value: FloatValue) -> SoilNResult<()> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SoilNError::invalid_parameter(
            name,
            format!("expected a positive value, got {value}"),
        ))
    }
}
