//! TOML parameter files
//!
//! Component parameter structs derive `Serialize`/`Deserialize`, so any of them
//! can be read from or written to TOML with these helpers.

use crate::errors::{SoilNError, SoilNResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Parse a value from a TOML string.
pub fn from_toml_str<T: DeserializeOwned>(contents: &str) -> SoilNResult<T> {
    Ok(toml::from_str(contents)?)
}

/// Read and parse a value from a TOML file.
pub fn from_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> SoilNResult<T> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SoilNError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Loading parameters");
    from_toml_str(&contents)
}

/// Serialise a value to a TOML string.
pub fn to_toml_string<T: Serialize>(value: &T) -> SoilNResult<String> {
    Ok(toml::to_string(value)?)
}
