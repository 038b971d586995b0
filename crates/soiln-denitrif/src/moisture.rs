//! Moisture response
//!
//! Converts relative soil water content into a dimensionless scalar in [0, 1]
//! limiting microbial denitrification. When the patch carries sub-patch moisture
//! variability, the response is averaged over a fixed normal quadrature.

use crate::parameters::{MoistureResponseParameters, TextureCoefficients};
use serde::{Deserialize, Serialize};
use soiln_core::constants::ZERO;
use soiln_core::state::SoilTexture;
use soiln_core::FloatValue;

/// Standard normal quantile offsets sampled around the patch mean moisture.
///
/// The centre point comes first, followed by four positive and four negative
/// offsets.
pub const QUADRATURE_OFFSETS: [FloatValue; 9] = [
    0.0, 0.253, 0.524, 0.842, 1.283, -0.253, -0.524, -0.842, -1.283,
];

/// Weight of each quadrature sample.
///
/// Ten equal weights are defined but only nine samples are taken, so the weights
/// sum to 0.9. Samples at zero moisture also add nothing and their weight is not
/// redistributed. Changing either would shift results away from previously
/// published runs.
pub const QUADRATURE_WEIGHT: FloatValue = 1.0 / 10.0;

/// Texture class selecting the moisture response curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureClass {
    Sand,
    Clay,
    Loam,
}

/// Moisture limitation on denitrification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoistureResponse {
    parameters: MoistureResponseParameters,
}

impl MoistureResponse {
    pub fn new() -> Self {
        Self::from_parameters(MoistureResponseParameters::default())
    }

    pub fn from_parameters(parameters: MoistureResponseParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &MoistureResponseParameters {
        &self.parameters
    }

    /// Classify a soil's texture.
    ///
    /// Sand dominance is checked before clay, so a (physically inconsistent)
    /// texture exceeding both thresholds is treated as sand.
    pub fn classify(&self, texture: &SoilTexture) -> TextureClass {
        let threshold = self.parameters.dominance_threshold;
        if texture.sand_fraction > threshold && texture.clay_fraction > threshold {
            tracing::warn!(
                sand = texture.sand_fraction,
                clay = texture.clay_fraction,
                "Sand and clay both exceed the dominance threshold; classifying as sand"
            );
        }

        if texture.sand_fraction > threshold {
            TextureClass::Sand
        } else if texture.clay_fraction > threshold {
            TextureClass::Clay
        } else {
            TextureClass::Loam
        }
    }

    pub fn coefficients(&self, class: TextureClass) -> &TextureCoefficients {
        match class {
            TextureClass::Sand => &self.parameters.sand,
            TextureClass::Clay => &self.parameters.clay,
            TextureClass::Loam => &self.parameters.loam,
        }
    }

    /// Response at a single moisture value
    ///
    /// $$f(\theta) = \min\left(1, \frac{a}{b^{c / b^{d \theta}}}\right)$$
    pub fn point_response(&self, class: TextureClass, theta: FloatValue) -> FloatValue {
        self.coefficients(class).response(theta)
    }

    /// Moisture scalar for a patch.
    ///
    /// With `theta_std == 0` this is the point response at `theta`. Otherwise
    /// each quadrature sample is `clamp(theta + theta_std * offset, 0, 1)` and
    /// contributes `QUADRATURE_WEIGHT * f(sample)` when the sample exceeds
    /// [`ZERO`], and nothing when it does not.
    ///
    /// `theta` is used as given; callers clamp it to (0, 1] beforehand.
    pub fn water_scalar(
        &self,
        class: TextureClass,
        theta: FloatValue,
        theta_std: FloatValue,
    ) -> FloatValue {
        let coefficients = self.coefficients(class);

        if theta_std > 0.0 {
            QUADRATURE_OFFSETS
                .iter()
                .map(|offset| (theta + theta_std * offset).clamp(0.0, 1.0))
                .filter(|&sample| sample > ZERO)
                .map(|sample| QUADRATURE_WEIGHT * coefficients.response(sample))
                .sum()
        } else {
            coefficients.response(theta)
        }
    }
}
