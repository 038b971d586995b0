//! Substrate Limit Parameters
//!
//! Parameters for the two independent upper bounds on daily denitrification:
//! one from nitrate availability, one from labile carbon availability
//! (estimated from heterotrophic respiration).
//!
//! # Reference
//!
//! Parton et al. 1996, Global Biogeochemical Cycles, 10(3), 401-412.

use super::{check_finite, check_positive};
use serde::{Deserialize, Serialize};
use soiln_core::errors::SoilNResult;
use soiln_core::FloatValue;

/// Parameters for the nitrate-derived denitrification limit
///
/// The limit is an arctangent saturation curve in the nitrate ratio $R$:
///
/// $$f_{NO_3} = \frac{A}{\pi} \arctan\left(\pi s (R - R_0)\right) + f_0$$
///
/// where $R = \text{NO}_3 / (C_{tot} + N_{tot}) \times 10^6$.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NitrateLimitParameters {
    /// Scale applied to the nitrate to total C+N mass ratio
    /// unit: ppm per unit ratio
    /// default: 1e6
    pub ratio_scale: FloatValue,

    /// Slope of the arctangent curve (s)
    /// unit: 1/ppm
    /// default: 0.002
    pub slope: FloatValue,

    /// Nitrate ratio at the curve's inflection point (R_0)
    /// unit: ppm
    /// default: 180.0
    pub midpoint: FloatValue,

    /// Full range of the curve (A)
    /// unit: denitrification per day
    /// default: 0.004
    pub amplitude: FloatValue,

    /// Value of the curve at the inflection point (f_0)
    /// unit: denitrification per day
    /// default: 0.0011
    pub offset: FloatValue,
}

impl Default for NitrateLimitParameters {
    fn default() -> Self {
        Self {
            ratio_scale: 1e6,
            slope: 0.002,
            midpoint: 180.0,
            amplitude: 0.004,
            offset: 0.0011,
        }
    }
}

impl NitrateLimitParameters {
    pub fn validate(&self) -> SoilNResult<()> {
        check_positive("nitrate_limit.ratio_scale", self.ratio_scale)?;
        check_finite("nitrate_limit.slope", self.slope)?;
        check_finite("nitrate_limit.midpoint", self.midpoint)?;
        check_finite("nitrate_limit.amplitude", self.amplitude)?;
        check_finite("nitrate_limit.offset", self.offset)
    }
}

/// Parameters for the carbon-derived denitrification limit
///
/// Heterotrophic respiration $h$ is a proxy for labile carbon. The limit is a
/// logistic curve:
///
/// $$f_{CO_2} = \frac{F_{max}}{1 + k / e^{r \cdot h \cdot S}} - f_0$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonLimitParameters {
    /// Upper asymptote of the logistic curve (F_max)
    /// unit: denitrification per day
    /// default: 0.0024
    pub max_rate: FloatValue,

    /// Shape constant controlling the curve's offset from zero respiration (k)
    /// unit: dimensionless
    /// default: 200.0
    pub shape: FloatValue,

    /// Growth rate of the logistic curve (r)
    /// unit: dimensionless
    /// default: 0.35
    pub steepness: FloatValue,

    /// Scale converting daily respiration to the regression's units (S)
    /// unit: dimensionless
    /// default: 10000.0
    pub respiration_scale: FloatValue,

    /// Constant subtracted from the curve (f_0)
    /// unit: denitrification per day
    /// default: 0.00001
    pub offset: FloatValue,
}

impl Default for CarbonLimitParameters {
    fn default() -> Self {
        Self {
            max_rate: 0.0024,
            shape: 200.0,
            steepness: 0.35,
            respiration_scale: 10000.0,
            offset: 0.00001,
        }
    }
}

impl CarbonLimitParameters {
    pub fn validate(&self) -> SoilNResult<()> {
        check_finite("carbon_limit.max_rate", self.max_rate)?;
        check_finite("carbon_limit.shape", self.shape)?;
        check_finite("carbon_limit.steepness", self.steepness)?;
        check_finite("carbon_limit.respiration_scale", self.respiration_scale)?;
        check_finite("carbon_limit.offset", self.offset)
    }
}
