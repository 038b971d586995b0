//! Denitrification Component
//!
//! Computes daily denitrification for a single soil patch and splits it into
//! N2 and N2O following Parton et al. (1996).
//!
//! # What This Component Does
//!
//! 1. Scales denitrification by soil moisture using a texture-specific
//!    double-exponential response, optionally averaged over sub-patch
//!    moisture variability
//!
//! 2. Bounds denitrification by nitrate availability (relative to total soil
//!    C+N) and by carbon availability (from heterotrophic respiration)
//!
//! 3. Resolves the flux, removes it from soil nitrate and adds it to the
//!    volatilised sink
//!
//! 4. Partitions the flux into N2 and N2O
//!
//! # Inputs
//!
//! - `SoilCarbonState` - total soil organic carbon
//! - `SoilNitrogenState` - nitrate and total nitrogen
//! - `CarbonDayFlux` - heterotrophic respiration of the four soil pools
//! - `SoilTexture` - sand and clay fractions
//! - `MoistureDrivers` - relative soil water content and its standard deviation
//!
//! # Outputs
//!
//! - `NitrogenDayFlux` - denitrification, its N2 and N2O parts, and the flux to
//!   the volatilised sink
//! - `NitrogenStateDelta` - change to soil nitrate and the volatilised sink
//!
//! # Not Modelled
//!
//! - Nitrification, excess ammonium and soil pH effects
//! - Soil temperature (it enters only through heterotrophic respiration)

use crate::flux::{resolve_denitrification, NitrogenStateDelta};
use crate::moisture::{MoistureResponse, TextureClass};
use crate::parameters::DenitrificationParameters;
use crate::partition::GasPartition;
use crate::substrate::{SubstrateLimits, SubstrateModel};
use serde::{Deserialize, Serialize};
use soiln_core::constants::ZERO;
use soiln_core::errors::SoilNResult;
use soiln_core::state::{
    CarbonDayFlux, MoistureDrivers, NitrogenDayFlux, SoilCarbonState, SoilNitrogenState,
    SoilTexture,
};
use soiln_core::FloatValue;
use std::path::Path;

/// Intermediate values from one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DenitrificationDiagnostics {
    pub texture_class: TextureClass,
    /// Moisture after clamping to (0, 1]
    pub theta: FloatValue,
    pub water_scalar: FloatValue,
    pub heterotrophic_respiration: FloatValue,
    /// Nitrate ratio used by the gas partition (0 when no nitrate is present)
    pub nitrate_ratio: FloatValue,
    /// `None` when no nitrate is present
    pub substrate: Option<SubstrateLimits>,
    pub n2_n2o_ratio: FloatValue,
}

/// Result of evaluating one patch for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DenitrificationOutcome {
    pub flux: NitrogenDayFlux,
    pub delta: NitrogenStateDelta,
    pub diagnostics: DenitrificationDiagnostics,
}

/// Parton et al. (1996) denitrification component
///
/// The component holds only its parameters. Every call is a pure function of
/// its arguments, so one instance can serve any number of patches, including
/// from several threads at once.
///
/// # Algorithm
///
/// 1. Clamp $\theta$ to 1 if it lies outside $(0, 1]$
/// 2. Moisture scalar $W$ from the texture's response curve
/// 3. If nitrate is present, substrate limits $f_{NO_3}$ and $f_{CO_2}$
/// 4. $D = \text{clamp}(\min(f_{CO_2}, f_{NO_3}) W, 0, \text{NO}_3)$, or 0 without nitrate
/// 5. $\text{N}_2\text{O} = D / (1 + r)$ and $\text{N}_2 = D / (1 + 1/r)$ with the N2:N2O ratio $r$
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DenitrificationModel {
    moisture: MoistureResponse,
    substrate: SubstrateModel,
    partition: GasPartition,
}

impl DenitrificationModel {
    /// Create a new denitrification component with default parameters
    pub fn new() -> Self {
        Self::from_parameters(DenitrificationParameters::default())
    }

    /// Create a new denitrification component from parameters
    ///
    /// The parameters are used as given. Use [`Self::try_from_parameters`] to
    /// validate them first.
    pub fn from_parameters(parameters: DenitrificationParameters) -> Self {
        let DenitrificationParameters {
            moisture,
            nitrate_limit,
            carbon_limit,
            gas_partition,
        } = parameters;

        Self {
            moisture: MoistureResponse::from_parameters(moisture),
            substrate: SubstrateModel::from_parameters(nitrate_limit, carbon_limit),
            partition: GasPartition::from_parameters(gas_partition),
        }
    }

    /// Create a new denitrification component from validated parameters
    pub fn try_from_parameters(parameters: DenitrificationParameters) -> SoilNResult<Self> {
        parameters.validate()?;
        Ok(Self::from_parameters(parameters))
    }

    /// Create a component from a TOML parameter file
    pub fn from_toml_file(path: impl AsRef<Path>) -> SoilNResult<Self> {
        Ok(Self::from_parameters(
            DenitrificationParameters::from_toml_file(path)?,
        ))
    }

    pub fn moisture(&self) -> &MoistureResponse {
        &self.moisture
    }

    pub fn substrate(&self) -> &SubstrateModel {
        &self.substrate
    }

    pub fn partition(&self) -> &GasPartition {
        &self.partition
    }

    /// Moisture values outside (0, 1] are treated as saturated.
    pub fn effective_theta(theta: FloatValue) -> FloatValue {
        if theta <= ZERO || theta > 1.0 {
            tracing::debug!(theta, "Soil moisture outside (0, 1]; using 1.0");
            1.0
        } else {
            theta
        }
    }

    /// Evaluate one patch for one day without modifying any state.
    ///
    /// Fails with `InvalidInput` for non-finite values, texture fractions
    /// outside [0, 1], a negative `theta_std`, or nitrate present with no soil
    /// organic mass.
    pub fn evaluate(
        &self,
        carbon: &SoilCarbonState,
        nitrogen: &SoilNitrogenState,
        carbon_flux: &CarbonDayFlux,
        texture: &SoilTexture,
        drivers: &MoistureDrivers,
    ) -> SoilNResult<DenitrificationOutcome> {
        carbon.validate()?;
        nitrogen.validate()?;
        carbon_flux.validate()?;
        texture.validate()?;
        drivers.validate()?;

        let theta = Self::effective_theta(drivers.theta);
        let texture_class = self.moisture.classify(texture);
        let water_scalar = self
            .moisture
            .water_scalar(texture_class, theta, drivers.theta_std);

        let heterotrophic_respiration = carbon_flux.heterotrophic_respiration();
        let substrate = self
            .substrate
            .limits(carbon, nitrogen, heterotrophic_respiration)?;
        if substrate.is_none() {
            tracing::debug!(
                nitrate = nitrogen.nitrate,
                "No nitrate available; skipping denitrification"
            );
        }

        let denitrification =
            resolve_denitrification(substrate.as_ref(), water_scalar, nitrogen.nitrate);

        let nitrate_ratio = substrate.map_or(0.0, |limits| limits.nitrate_ratio);
        let n2_n2o_ratio =
            self.partition
                .n2_n2o_ratio(theta, nitrate_ratio, heterotrophic_respiration);
        let gases = self.partition.split(denitrification, n2_n2o_ratio);

        Ok(DenitrificationOutcome {
            flux: NitrogenDayFlux {
                denitrification,
                denitrification_n2: gases.n2,
                denitrification_n2o: gases.n2o,
                sminn_to_volatilization: denitrification,
            },
            delta: NitrogenStateDelta::from_denitrification(denitrification),
            diagnostics: DenitrificationDiagnostics {
                texture_class,
                theta,
                water_scalar,
                heterotrophic_respiration,
                nitrate_ratio,
                substrate,
                n2_n2o_ratio,
            },
        })
    }

    /// Update a patch's nitrogen state and daily nitrogen flux in place.
    ///
    /// `nitrogen_flux` is overwritten. On error neither `nitrogen` nor
    /// `nitrogen_flux` is modified.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        &self,
        carbon: &SoilCarbonState,
        nitrogen: &mut SoilNitrogenState,
        carbon_flux: &CarbonDayFlux,
        nitrogen_flux: &mut NitrogenDayFlux,
        texture: &SoilTexture,
        theta: FloatValue,
        theta_std: FloatValue,
    ) -> SoilNResult<()> {
        let drivers = MoistureDrivers::new(theta, theta_std);
        let outcome = self.evaluate(carbon, nitrogen, carbon_flux, texture, &drivers)?;

        outcome.delta.apply(nitrogen);
        *nitrogen_flux = outcome.flux;
        Ok(())
    }
}
