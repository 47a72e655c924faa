//! Error types for bridge geometry generation.
//!
//! Every operation in this crate returns `Result<T, GeometryError>`. Bad input
//! is reported through one of these variants instead of a panic, so callers can
//! assert on or recover from each failure mode.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    /// A scalar or list parameter is out of its valid domain
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// A span produced by the discretization is longer than the FEM max length
    #[error("Span {index} has length {length} which exceeds the max element length {max_length}")]
    SpanConstraintViolated {
        index: usize,
        length: f64,
        max_length: f64,
    },

    /// A pontoon arc position did not resolve to exactly one girder node
    #[error("Pontoon at arc position {position} matched {matches} girder nodes (expected exactly 1)")]
    PontoonPositionUnmatched { position: f64, matches: usize },

    /// Unknown textual shape code
    #[error("Unsupported shape mode: {0:?} (expected \"S\" or \"I\")")]
    UnsupportedShapeMode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GeometryError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create a SpanConstraintViolated error
    pub fn span_constraint_violated(index: usize, length: f64, max_length: f64) -> Self {
        Self::SpanConstraintViolated {
            index,
            length,
            max_length,
        }
    }

    /// Create a PontoonPositionUnmatched error
    pub fn pontoon_unmatched(position: f64, matches: usize) -> Self {
        Self::PontoonPositionUnmatched { position, matches }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Check that `value` is finite and strictly positive
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(GeometryError::invalid_parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(GeometryError::invalid_parameter(name, value, "must be greater than zero"));
    }
    Ok(value)
}

/// Check that `value` is finite and not negative
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(GeometryError::invalid_parameter(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(GeometryError::invalid_parameter(name, value, "must not be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("radius", 5000.0).is_ok());
        assert!(matches!(
            ensure_positive("radius", 0.0),
            Err(GeometryError::InvalidParameter { .. })
        ));
        assert!(matches!(
            ensure_positive("radius", f64::INFINITY),
            Err(GeometryError::InvalidParameter { .. })
        ));
        assert!(ensure_positive("radius", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("freeboard", 0.0).is_ok());
        assert!(ensure_non_negative("freeboard", -0.5).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = GeometryError::span_constraint_violated(3, 120.0, 100.0);
        assert_eq!(
            err.to_string(),
            "Span 3 has length 120 which exceeds the max element length 100"
        );

        let err = GeometryError::UnsupportedShapeMode("X".to_string());
        assert!(err.to_string().contains("\"X\""));
    }
}
