//! Patch state, daily flux and driver records
//!
//! These records are created and owned by the simulation driver, one set per
//! patch. Components borrow them for the duration of a single call: state and
//! driver records are read, and flux records are overwritten.
//!
//! All pools are mass per unit area and all fluxes are mass per unit area per
//! day, in whatever consistent units the driver uses (kg/m² in practice).

use crate::errors::{ensure_finite, SoilNError, SoilNResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Soil organic carbon for a patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilCarbonState {
    /// Total soil organic carbon
    pub total_carbon: FloatValue,
}

impl SoilCarbonState {
    pub fn validate(&self) -> SoilNResult<()> {
        ensure_finite("total_carbon", self.total_carbon)
    }
}

/// Soil nitrogen pools for a patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilNitrogenState {
    /// Soil mineral nitrate (NO3)
    pub nitrate: FloatValue,
    /// Total soil nitrogen
    pub total_nitrogen: FloatValue,
    /// Cumulative nitrogen lost to gaseous volatilisation.
    ///
    /// This is an accumulator owned by the driver; components only ever add to it.
    pub volatilized_sink: FloatValue,
}

impl SoilNitrogenState {
    pub fn validate(&self) -> SoilNResult<()> {
        ensure_finite("nitrate", self.nitrate)?;
        ensure_finite("total_nitrogen", self.total_nitrogen)?;
        ensure_finite("volatilized_sink", self.volatilized_sink)
    }
}

/// Daily carbon fluxes for a patch.
///
/// Only the heterotrophic respiration terms of the four soil organic matter
/// pools are needed by the nitrogen components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonDayFlux {
    pub soil1_hr: FloatValue,
    pub soil2_hr: FloatValue,
    pub soil3_hr: FloatValue,
    pub soil4_hr: FloatValue,
}

impl CarbonDayFlux {
    /// Total heterotrophic respiration across the soil pools
    pub fn heterotrophic_respiration(&self) -> FloatValue {
        self.soil1_hr + self.soil2_hr + self.soil3_hr + self.soil4_hr
    }

    pub fn validate(&self) -> SoilNResult<()> {
        ensure_finite("soil1_hr", self.soil1_hr)?;
        ensure_finite("soil2_hr", self.soil2_hr)?;
        ensure_finite("soil3_hr", self.soil3_hr)?;
        ensure_finite("soil4_hr", self.soil4_hr)
    }
}

/// Daily nitrogen fluxes for a patch.
///
/// Every field is written on each call; previous values are never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NitrogenDayFlux {
    /// Total denitrification
    pub denitrification: FloatValue,
    /// Denitrification lost as N2
    pub denitrification_n2: FloatValue,
    /// Denitrification lost as N2O
    pub denitrification_n2o: FloatValue,
    /// Soil mineral nitrogen moved to the volatilised sink
    pub sminn_to_volatilization: FloatValue,
}

/// Sand and clay content of a patch's soil.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilTexture {
    /// Sand fraction in [0, 1]
    pub sand_fraction: FloatValue,
    /// Clay fraction in [0, 1]
    pub clay_fraction: FloatValue,
}

impl SoilTexture {
    pub fn new(sand_fraction: FloatValue, clay_fraction: FloatValue) -> Self {
        Self {
            sand_fraction,
            clay_fraction,
        }
    }

    pub fn validate(&self) -> SoilNResult<()> {
        for (field, value) in [
            ("sand_fraction", self.sand_fraction),
            ("clay_fraction", self.clay_fraction),
        ] {
            ensure_finite(field, value)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(SoilNError::invalid_input(
                    field,
                    format!("expected a fraction in [0, 1], got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Daily soil moisture drivers for a patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoistureDrivers {
    /// Relative soil water content, nominally in (0, 1]
    pub theta: FloatValue,
    /// Standard deviation of `theta` within the patch (0 disables the heterogeneity correction)
    pub theta_std: FloatValue,
}

impl MoistureDrivers {
    pub fn new(theta: FloatValue, theta_std: FloatValue) -> Self {
        Self { theta, theta_std }
    }

    /// Checks the drivers are usable.
    ///
    /// Out-of-range `theta` is not an error (components clamp it), but a
    /// non-finite value is. `theta_std` must be finite and non-negative.
    pub fn validate(&self) -> SoilNResult<()> {
        ensure_finite("theta", self.theta)?;
        ensure_finite("theta_std", self.theta_std)?;
        if self.theta_std < 0.0 {
            return Err(SoilNError::invalid_input(
                "theta_std",
                format!("standard deviation must not be negative, got {}", self.theta_std),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heterotrophic_respiration_sums_pools() {
        let flux = CarbonDayFlux {
            soil1_hr: 0.001,
            soil2_hr: 0.002,
            soil3_hr: 0.0005,
            soil4_hr: 0.0,
        };
        assert!((flux.heterotrophic_respiration() - 0.0035).abs() < 1e-15);
    }

    #[test]
    fn test_texture_validation() {
        assert!(SoilTexture::new(0.4, 0.3).validate().is_ok());
        assert!(SoilTexture::new(1.0, 0.0).validate().is_ok());
        // Both fractions dominant is inconsistent but still accepted
        assert!(SoilTexture::new(0.6, 0.6).validate().is_ok());

        assert!(SoilTexture::new(1.2, 0.1).validate().is_err());
        assert!(SoilTexture::new(0.2, -0.1).validate().is_err());
        assert!(SoilTexture::new(f64::NAN, 0.1).validate().is_err());
    }

    #[test]
    fn test_moisture_driver_validation() {
        assert!(MoistureDrivers::new(0.5, 0.0).validate().is_ok());
        // Out of range theta is clamped by components, not rejected here
        assert!(MoistureDrivers::new(1.5, 0.1).validate().is_ok());
        assert!(MoistureDrivers::new(-0.2, 0.1).validate().is_ok());

        assert!(matches!(
            MoistureDrivers::new(0.5, -0.1).validate(),
            Err(SoilNError::InvalidInput { ref field, .. }) if field == "theta_std"
        ));
        assert!(MoistureDrivers::new(f64::NAN, 0.0).validate().is_err());
        assert!(MoistureDrivers::new(0.5, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_nitrogen_state_validation() {
        let state = SoilNitrogenState {
            nitrate: 0.01,
            total_nitrogen: 1.0,
            volatilized_sink: 0.0,
        };
        assert!(state.validate().is_ok());

        let state = SoilNitrogenState {
            nitrate: f64::NAN,
            ..state
        };
        assert!(state.validate().is_err());
    }

    #[test]
    fn test_state_serialisation() {
        let state = SoilNitrogenState {
            nitrate: 0.01,
            total_nitrogen: 1.0,
            volatilized_sink: 0.25,
        };
        let serialised = serde_json::to_string(&state).unwrap();
        let deserialised: SoilNitrogenState = serde_json::from_str(&serialised).unwrap();
        assert_eq!(state, deserialised);
    }
}
