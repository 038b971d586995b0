//! Denitrification Parameters
//!
//! Groups the parameters of every stage of the denitrification component.

use super::{
    CarbonLimitParameters, GasPartitionParameters, MoistureResponseParameters,
    NitrateLimitParameters,
};
use serde::{Deserialize, Serialize};
use soiln_core::config;
use soiln_core::errors::SoilNResult;
use std::path::Path;

/// Parameters for the denitrification component
///
/// Any table or value may be omitted from a parameter file, in which case it
/// takes its default value. For example, to recalibrate only the scale of the
/// clay moisture curve:
///
/// ```toml
/// [moisture.clay]
/// a = 55.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenitrificationParameters {
    pub moisture: MoistureResponseParameters,
    pub nitrate_limit: NitrateLimitParameters,
    pub carbon_limit: CarbonLimitParameters,
    pub gas_partition: GasPartitionParameters,
}

impl DenitrificationParameters {
    pub fn validate(&self) -> SoilNResult<()> {
        self.moisture.validate()?;
        self.nitrate_limit.validate()?;
        self.carbon_limit.validate()?;
        self.gas_partition.validate()
    }

    /// Parse and validate parameters from a TOML string
    pub fn from_toml_str(contents: &str) -> SoilNResult<Self> {
        let parameters: Self = config::from_toml_str(contents)?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Read and validate parameters from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> SoilNResult<Self> {
        let parameters: Self = config::from_toml_file(path)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn to_toml_string(&self) -> SoilNResult<String> {
        config::to_toml_string(self)
    }
}
