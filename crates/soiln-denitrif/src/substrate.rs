//! Substrate limits
//!
//! Two independent upper bounds on daily denitrification: one from nitrate
//! availability and one from labile carbon, using heterotrophic respiration as
//! a proxy.

use crate::parameters::{CarbonLimitParameters, NitrateLimitParameters};
use serde::{Deserialize, Serialize};
use soiln_core::constants::{PI, ZERO};
use soiln_core::errors::{SoilNError, SoilNResult};
use soiln_core::state::{SoilCarbonState, SoilNitrogenState};
use soiln_core::FloatValue;

/// Substrate bounds for one patch and day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubstrateLimits {
    /// Nitrate relative to total soil C+N (ppm)
    pub nitrate_ratio: FloatValue,
    /// Maximum denitrification supported by nitrate
    pub nitrate_limit: FloatValue,
    /// Maximum denitrification supported by carbon
    pub carbon_limit: FloatValue,
}

impl SubstrateLimits {
    /// The tighter of the two limits
    pub fn binding(&self) -> FloatValue {
        self.carbon_limit.min(self.nitrate_limit)
    }
}

/// Nitrate and carbon limits on denitrification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubstrateModel {
    nitrate: NitrateLimitParameters,
    carbon: CarbonLimitParameters,
}

impl SubstrateModel {
    pub fn new() -> Self {
        Self::from_parameters(
            NitrateLimitParameters::default(),
            CarbonLimitParameters::default(),
        )
    }

    pub fn from_parameters(nitrate: NitrateLimitParameters, carbon: CarbonLimitParameters) -> Self {
        Self { nitrate, carbon }
    }

    /// Nitrate as a ppm-like fraction of total soil carbon and nitrogen
    ///
    /// $$R = \frac{\text{NO}_3}{C_{tot} + N_{tot}} \times 10^6$$
    ///
    /// Fails if the total C+N mass is not positive.
    pub fn nitrate_ratio(
        &self,
        nitrate: FloatValue,
        total_carbon: FloatValue,
        total_nitrogen: FloatValue,
    ) -> SoilNResult<FloatValue> {
        let total_mass = total_carbon + total_nitrogen;
        if total_mass <= 0.0 {
            return Err(SoilNError::invalid_input(
                "total_carbon + total_nitrogen",
                format!(
                    "expected positive soil organic mass when nitrate is present, got {total_mass}"
                ),
            ));
        }
        Ok(nitrate / total_mass * self.nitrate.ratio_scale)
    }

    /// Maximum denitrification supported by nitrate
    ///
    /// $$f_{NO_3} = \arctan(\pi s (R - R_0)) \frac{A}{\pi} + f_0$$
    pub fn nitrate_limit(&self, nitrate_ratio: FloatValue) -> FloatValue {
        let p = &self.nitrate;
        (PI * p.slope * (nitrate_ratio - p.midpoint)).atan() * p.amplitude / PI + p.offset
    }

    /// Maximum denitrification supported by carbon
    ///
    /// $$f_{CO_2} = \frac{F_{max}}{1 + k / e^{r h S}} - f_0$$
    ///
    /// Zero when respiration is negligible.
    pub fn carbon_limit(&self, heterotrophic_respiration: FloatValue) -> FloatValue {
        if heterotrophic_respiration <= ZERO {
            return 0.0;
        }
        let p = &self.carbon;
        // exp overflows to infinity for large respiration, leaving the asymptote
        let growth = (p.steepness * heterotrophic_respiration * p.respiration_scale).exp();
        p.max_rate / (1.0 + p.shape / growth) - p.offset
    }

    /// Substrate limits for a patch, or `None` when there is no nitrate to denitrify.
    pub fn limits(
        &self,
        carbon: &SoilCarbonState,
        nitrogen: &SoilNitrogenState,
        heterotrophic_respiration: FloatValue,
    ) -> SoilNResult<Option<SubstrateLimits>> {
        if nitrogen.nitrate <= ZERO {
            return Ok(None);
        }

        let nitrate_ratio =
            self.nitrate_ratio(nitrogen.nitrate, carbon.total_carbon, nitrogen.total_nitrogen)?;

        Ok(Some(SubstrateLimits {
            nitrate_ratio,
            nitrate_limit: self.nitrate_limit(nitrate_ratio),
            carbon_limit: self.carbon_limit(heterotrophic_respiration),
        }))
    }
}
