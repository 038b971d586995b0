//! Gas Partition Parameters
//!
//! Parameters for the empirical N2:N2O ratio used to split denitrification into
//! its two gaseous products. The ratio is the product of a moisture factor and
//! the smaller of a nitrate factor and a respiration factor.
//!
//! # Reference
//!
//! Parton et al. 1996, Global Biogeochemical Cycles, 10(3), 401-412.

use super::{check_finite, check_positive};
use serde::{Deserialize, Serialize};
use soiln_core::errors::SoilNResult;
use soiln_core::FloatValue;

/// Parameters for the N2:N2O partition
///
/// $$F_{WFPS} = \frac{w_a}{w_b^{w_c / w_b^{w_d \theta}}}$$
///
/// $$F_{NO_3} = \left(1 - \left(\frac{\arctan(\pi s_n (R - R_n))}{\pi} + 0.5\right)\right) S_n$$
///
/// $$F_{CO_2} = B_c + \frac{A_c \arctan(\pi s_c (h - h_c))}{\pi}$$
///
/// $$\text{ratio} = \min(F_{NO_3}, F_{CO_2}) \cdot F_{WFPS}$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasPartitionParameters {
    /// Numerator of the moisture factor (w_a)
    /// default: 1.4
    pub wfps_a: FloatValue,

    /// Base of the moisture factor's double exponential (w_b)
    /// default: 13.0
    pub wfps_b: FloatValue,

    /// Outer exponent numerator of the moisture factor (w_c)
    /// default: 17.0
    pub wfps_c: FloatValue,

    /// Moisture coefficient of the inner exponent (w_d)
    /// default: 2.2
    pub wfps_d: FloatValue,

    /// Nitrate ratio at the nitrate factor's inflection point (R_n)
    /// unit: ppm
    /// default: 190.0
    pub nitrate_midpoint: FloatValue,

    /// Slope of the nitrate factor (s_n)
    /// unit: 1/ppm
    /// default: 0.01
    pub nitrate_slope: FloatValue,

    /// Maximum of the nitrate factor (S_n)
    /// default: 25.0
    pub nitrate_scale: FloatValue,

    /// Respiration factor at its inflection point (B_c)
    /// default: 13.0
    pub respiration_base: FloatValue,

    /// Full range of the respiration factor (A_c)
    /// default: 30.78
    pub respiration_amplitude: FloatValue,

    /// Slope of the respiration factor (s_c)
    /// default: 0.07
    pub respiration_slope: FloatValue,

    /// Respiration at the respiration factor's inflection point (h_c)
    /// default: 13.0
    pub respiration_midpoint: FloatValue,
}

impl Default for GasPartitionParameters {
    fn default() -> Self {
        Self {
            wfps_a: 1.4,
            wfps_b: 13.0,
            wfps_c: 17.0,
            wfps_d: 2.2,
            nitrate_midpoint: 190.0,
            nitrate_slope: 0.01,
            nitrate_scale: 25.0,
            respiration_base: 13.0,
            respiration_amplitude: 30.78,
            respiration_slope: 0.07,
            respiration_midpoint: 13.0,
        }
    }
}

impl GasPartitionParameters {
    pub fn validate(&self) -> SoilNResult<()> {
        check_finite("gas_partition.wfps_a", self.wfps_a)?;
        check_positive("gas_partition.wfps_b", self.wfps_b)?;
        check_finite("gas_partition.wfps_c", self.wfps_c)?;
        check_finite("gas_partition.wfps_d", self.wfps_d)?;
        check_finite("gas_partition.nitrate_midpoint", self.nitrate_midpoint)?;
        check_finite("gas_partition.nitrate_slope", self.nitrate_slope)?;
        check_finite("gas_partition.nitrate_scale", self.nitrate_scale)?;
        check_finite("gas_partition.respiration_base", self.respiration_base)?;
        check_finite(
            "gas_partition.respiration_amplitude",
            self.respiration_amplitude,
        )?;
        check_finite("gas_partition.respiration_slope", self.respiration_slope)?;
        check_finite(
            "gas_partition.respiration_midpoint",
            self.respiration_midpoint,
        )
    }
}
