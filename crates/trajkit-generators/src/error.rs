//! Error types for the generators crate.
//!
//! Generators themselves never fail. These errors come from the optional
//! strict `validate()` methods on the parameter structs.

use thiserror::Error;

/// Errors related to generator parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter that must be strictly positive is zero or negative.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NotPositive { name: String, value: f64 },

    /// A parameter is NaN or infinite.
    #[error("Parameter '{name}' must be finite")]
    NotFinite { name: String },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// The parameters would produce an empty segment.
    #[error("Empty segment: {0}")]
    EmptySegment(String),
}

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

pub(crate) fn require_finite(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite {
            name: name.to_string(),
        })
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive {
            name: name.to_string(),
            value,
        })
    }
}

pub(crate) fn require_nonzero_count(name: &str, value: usize) -> ParameterResult<()> {
    if value == 0 {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "must be at least 1".to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::NotPositive {
            name: "diameter".to_string(),
            value: -0.5,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'diameter' must be positive, got -0.5"
        );

        let err = ParameterError::NotFinite {
            name: "height".to_string(),
        };
        assert_eq!(err.to_string(), "Parameter 'height' must be finite");

        let err = ParameterError::EmptySegment("circle has no points".to_string());
        assert_eq!(err.to_string(), "Empty segment: circle has no points");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("d", 0.001).is_ok());
        assert!(matches!(
            require_positive("d", 0.0),
            Err(ParameterError::NotPositive { .. })
        ));
        assert!(matches!(
            require_positive("d", f64::NAN),
            Err(ParameterError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_require_nonzero_count() {
        assert!(require_nonzero_count("layers", 4).is_ok());
        assert_eq!(
            require_nonzero_count("layers", 0),
            Err(ParameterError::InvalidValue {
                name: "layers".to_string(),
                reason: "must be at least 1".to_string(),
            })
        );
    }
}
