//! Gas partition
//!
//! Splits denitrification into N2 and N2O using the Parton et al. (1996)
//! N2:N2O ratio, the product of a water-filled pore space factor and the
//! smaller of a nitrate factor and a respiration factor.

use crate::parameters::GasPartitionParameters;
use serde::{Deserialize, Serialize};
use soiln_core::constants::PI;
use soiln_core::FloatValue;

/// Denitrification split into its gaseous products
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GasFluxes {
    pub n2: FloatValue,
    pub n2o: FloatValue,
}

/// N2:N2O partition of denitrification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GasPartition {
    parameters: GasPartitionParameters,
}

impl GasPartition {
    pub fn new() -> Self {
        Self::from_parameters(GasPartitionParameters::default())
    }

    pub fn from_parameters(parameters: GasPartitionParameters) -> Self {
        Self { parameters }
    }

    /// Water-filled pore space factor
    ///
    /// $$F_{WFPS} = \frac{1.4}{13^{17 / 13^{2.2 \theta}}}$$
    pub fn wfps_factor(&self, theta: FloatValue) -> FloatValue {
        let p = &self.parameters;
        p.wfps_a / p.wfps_b.powf(p.wfps_c / p.wfps_b.powf(p.wfps_d * theta))
    }

    /// Nitrate factor, decreasing from 25 towards 0 as nitrate increases
    pub fn nitrate_factor(&self, nitrate_ratio: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let curve = (((nitrate_ratio - p.nitrate_midpoint) * p.nitrate_slope * PI).atan()) / PI;
        (1.0 - (curve + 0.5)) * p.nitrate_scale
    }

    /// Respiration factor, increasing with heterotrophic respiration
    pub fn respiration_factor(&self, heterotrophic_respiration: FloatValue) -> FloatValue {
        let p = &self.parameters;
        p.respiration_base
            + (p.respiration_amplitude
                * (PI * p.respiration_slope * (heterotrophic_respiration - p.respiration_midpoint))
                    .atan())
                / PI
    }

    /// N2:N2O ratio of denitrification products
    pub fn n2_n2o_ratio(
        &self,
        theta: FloatValue,
        nitrate_ratio: FloatValue,
        heterotrophic_respiration: FloatValue,
    ) -> FloatValue {
        let nitrate = self.nitrate_factor(nitrate_ratio);
        let respiration = self.respiration_factor(heterotrophic_respiration);
        nitrate.min(respiration) * self.wfps_factor(theta)
    }

    /// Split denitrification using an N2:N2O ratio.
    ///
    /// A ratio of zero would divide by zero in the N2 term. Any non-positive
    /// ratio is treated as its limit towards zero: everything is emitted as N2O.
    pub fn split(&self, denitrification: FloatValue, ratio: FloatValue) -> GasFluxes {
        if ratio > 0.0 {
            GasFluxes {
                n2o: denitrification / (1.0 + ratio),
                n2: denitrification / (1.0 + 1.0 / ratio),
            }
        } else {
            if denitrification > 0.0 {
                tracing::debug!(
                    ratio,
                    denitrification,
                    "Non-positive N2:N2O ratio; emitting all as N2O"
                );
            }
            GasFluxes {
                n2o: denitrification,
                n2: 0.0,
            }
        }
    }
}
