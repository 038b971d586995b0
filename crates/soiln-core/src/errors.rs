use thiserror::Error;

/// Error type for soil nitrogen component operations.
#[derive(Error, Debug)]
pub enum SoilNError {
    #[error("Invalid input `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("Could not read parameter file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),
    #[error("Could not serialise parameters: {0}")]
    ParameterSerialise(#[from] toml::ser::Error),
}

impl SoilNError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type for `Result<T, SoilNError>`.
pub type SoilNResult<T> = Result<T, SoilNError>;

/// Fails with [`SoilNError::InvalidInput`] unless `value` is finite.
pub fn ensure_finite(field: &str, value: f64) -> SoilNResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SoilNError::invalid_input(
            field,
            format!("expected a finite value, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("nitrate", 1.0).is_ok());
        assert!(ensure_finite("nitrate", -3.5).is_ok());

        let err = ensure_finite("nitrate", f64::NAN).unwrap_err();
        assert!(matches!(err, SoilNError::InvalidInput { ref field, .. } if field == "nitrate"));
        assert!(ensure_finite("theta", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SoilNError::invalid_parameter("b", "must be positive");
        assert_eq!(err.to_string(), "Invalid parameter `b`: must be positive");

        let err = SoilNError::invalid_input("theta_std", "must not be negative");
        assert_eq!(err.to_string(), "Invalid input `theta_std`: must not be negative");
    }
}
