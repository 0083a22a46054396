//! Library error types
//!
//! Every fallible operation in this crate fails with [`CalcError`].

use serde::Serialize;
use thiserror::Error;

/// Calculation error types
///
/// Serializes with a tagged representation so hosts can transport errors
/// to their form layer and map them to localized messages.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error", content = "details")]
pub enum CalcError {
    /// A numeric input outside its documented range
    #[error("{field} must be between {min} and {max} {unit} (got {value})")]
    #[serde(rename = "out_of_range")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    /// An enum string not present in the vocabulary
    #[error("unknown {kind}: '{value}'")]
    #[serde(rename = "unknown_tag")]
    UnknownTag { kind: &'static str, value: String },

    /// A required onboarding answer was never filled in
    #[error("missing required field: {0}")]
    #[serde(rename = "missing_field")]
    MissingField(&'static str),
}

/// Result type for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = CalcError::OutOfRange {
            field: "weight",
            value: 25.0,
            min: 30.0,
            max: 300.0,
            unit: "kg",
        };
        assert_eq!(
            err.to_string(),
            "weight must be between 30 and 300 kg (got 25)"
        );
    }

    #[test]
    fn test_unknown_tag_message() {
        let err = CalcError::UnknownTag {
            kind: "goal",
            value: "bulk".to_string(),
        };
        assert_eq!(err.to_string(), "unknown goal: 'bulk'");
    }

    #[test]
    fn test_missing_field_message() {
        let err = CalcError::MissingField("birth_date");
        assert_eq!(err.to_string(), "missing required field: birth_date");
    }

    #[test]
    fn test_serializes_tagged() {
        let err = CalcError::UnknownTag {
            kind: "activity level",
            value: "couch".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "unknown_tag");
        assert_eq!(json["details"]["value"], "couch");
    }
}
