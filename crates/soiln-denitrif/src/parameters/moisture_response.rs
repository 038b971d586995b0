//! Moisture Response Parameters
//!
//! Coefficients of the double-exponential soil moisture response used to scale
//! denitrification by water-filled pore space.
//!
//! # Reference
//!
//! Parton et al. 1996. Generalized model of N2 and N2O production from
//! nitrification and denitrification. Global Biogeochemical Cycles, 10(3),
//! 401-412.

use super::{check_finite, check_non_negative, check_positive};
use serde::{Deserialize, Deserializer, Serialize};
use soiln_core::errors::{SoilNError, SoilNResult};
use soiln_core::FloatValue;

/// Coefficients of the moisture response curve for one texture class
///
/// $$f(\theta) = \min\left(1, \frac{a}{b^{c / b^{d \theta}}}\right)$$
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureCoefficients {
    pub a: FloatValue,
    pub b: FloatValue,
    pub c: FloatValue,
    pub d: FloatValue,
}

impl TextureCoefficients {
    pub const fn new(a: FloatValue, b: FloatValue, c: FloatValue, d: FloatValue) -> Self {
        Self { a, b, c, d }
    }

    /// Evaluate the response curve at a single moisture value.
    #[inline]
    pub fn response(&self, theta: FloatValue) -> FloatValue {
        (self.a / self.b.powf(self.c / self.b.powf(self.d * theta))).min(1.0)
    }

    /// The response stays within [0, 1] only for `a >= 0` and `b > 0`.
    fn validate(&self, class: &str) -> SoilNResult<()> {
        check_non_negative(&format!("{class}.a"), self.a)?;
        check_positive(&format!("{class}.b"), self.b)?;
        check_finite(&format!("{class}.c"), self.c)?;
        check_finite(&format!("{class}.d"), self.d)
    }
}

/// Sand-dominated soils
pub const SAND_COEFFICIENTS: TextureCoefficients =
    TextureCoefficients::new(1.56, 12.0, 16.0, 2.01);
/// Clay-dominated soils
pub const CLAY_COEFFICIENTS: TextureCoefficients =
    TextureCoefficients::new(60.0, 18.0, 22.0, 1.06);
/// Everything else (loams)
pub const LOAM_COEFFICIENTS: TextureCoefficients =
    TextureCoefficients::new(4.82, 14.0, 16.0, 1.39);

/// A texture table from a parameter file. Omitted coefficients keep the
/// texture's published value.
#[derive(Deserialize)]
struct CoefficientOverrides {
    a: Option<FloatValue>,
    b: Option<FloatValue>,
    c: Option<FloatValue>,
    d: Option<FloatValue>,
}

impl CoefficientOverrides {
    fn over(self, base: TextureCoefficients) -> TextureCoefficients {
        TextureCoefficients {
            a: self.a.unwrap_or(base.a),
            b: self.b.unwrap_or(base.b),
            c: self.c.unwrap_or(base.c),
            d: self.d.unwrap_or(base.d),
        }
    }
}

fn sand_table<'de, D>(deserializer: D) -> Result<TextureCoefficients, D::Error>
where
    D: Deserializer<'de>,
{
    CoefficientOverrides::deserialize(deserializer).map(|table| table.over(SAND_COEFFICIENTS))
}

fn clay_table<'de, D>(deserializer: D) -> Result<TextureCoefficients, D::Error>
where
    D: Deserializer<'de>,
{
    CoefficientOverrides::deserialize(deserializer).map(|table| table.over(CLAY_COEFFICIENTS))
}

fn loam_table<'de, D>(deserializer: D) -> Result<TextureCoefficients, D::Error>
where
    D: Deserializer<'de>,
{
    CoefficientOverrides::deserialize(deserializer).map(|table| table.over(LOAM_COEFFICIENTS))
}

/// Parameters for the moisture limitation on denitrification
///
/// Soils are classified as sand-dominated when the sand fraction exceeds
/// `dominance_threshold`, otherwise clay-dominated when the clay fraction
/// exceeds it, otherwise loam. Sand is checked first.
///
/// A texture table in a parameter file may set any of `a`, `b`, `c` and `d`;
/// the rest keep that texture's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoistureResponseParameters {
    /// Response curve for sand-dominated soils
    /// default: a=1.56, b=12.0, c=16.0, d=2.01
    #[serde(deserialize_with = "sand_table")]
    pub sand: TextureCoefficients,

    /// Response curve for clay-dominated soils
    /// default: a=60.0, b=18.0, c=22.0, d=1.06
    #[serde(deserialize_with = "clay_table")]
    pub clay: TextureCoefficients,

    /// Response curve for all other soils
    /// default: a=4.82, b=14.0, c=16.0, d=1.39
    #[serde(deserialize_with = "loam_table")]
    pub loam: TextureCoefficients,

    /// Fraction above which sand or clay dominates the texture
    /// unit: dimensionless
    /// default: 0.5
    pub dominance_threshold: FloatValue,
}

impl Default for MoistureResponseParameters {
    fn default() -> Self {
        Self {
            sand: SAND_COEFFICIENTS,
            clay: CLAY_COEFFICIENTS,
            loam: LOAM_COEFFICIENTS,
            dominance_threshold: 0.5,
        }
    }
}

impl MoistureResponseParameters {
    pub fn validate(&self) -> SoilNResult<()> {
        self.sand.validate("moisture.sand")?;
        self.clay.validate("moisture.clay")?;
        self.loam.validate("moisture.loam")?;
        check_finite("moisture.dominance_threshold", self.dominance_threshold)?;
        if !(0.0..=1.0).contains(&self.dominance_threshold) {
            return Err(SoilNError::invalid_parameter(
                "moisture.dominance_threshold",
                format!(
                    "expected a fraction in [0, 1], got {}",
                    self.dominance_threshold
                ),
            ));
        }
        Ok(())
    }
}
