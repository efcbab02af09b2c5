//! # Error Types
//!
//! Structured error types for bscalc_core. A calculation either returns a
//! complete result or one of these errors; there are no partial results.
//!
//! Two categories matter to callers:
//!
//! - [`CalcError::DesignRuleViolation`] - the inputs are valid but the section
//!   falls outside the applicability of the formula (e.g. over-reinforced).
//!   Calling code can branch on the [`DesignRule`] and switch design path.
//! - [`CalcError::InvalidInput`] - zero, negative or non-finite geometry, or a
//!   degenerate section. These are caller bugs and would otherwise surface as
//!   NaN or infinite capacities.
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-300.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bscalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Code rules whose violation ends a singly-reinforced design check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignRule {
    /// Neutral axis deeper than 0.5d
    OverReinforced,
    /// K exceeds K' (0.156)
    CompressionReinforcementRequired,
}

impl DesignRule {
    /// Human-readable description of the failed check
    pub fn description(&self) -> &'static str {
        match self {
            DesignRule::OverReinforced => "Over-reinforced section",
            DesignRule::CompressionReinforcementRequired => "Requires compression reinforcement",
        }
    }
}

impl std::fmt::Display for DesignRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, degenerate section)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A design code check failed; the formula does not apply to this section
    #[error("Design rule violation: {rule} ({clause}) - {reason}")]
    DesignRuleViolation {
        rule: DesignRule,
        clause: String,
        reason: String,
    },

    /// Grade label not found in the material tables
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DesignRuleViolation error
    pub fn design_rule_violation(
        rule: DesignRule,
        clause: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::DesignRuleViolation {
            rule,
            clause: clause.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this is an expected design-rule failure rather than bad input
    pub fn is_design_rule_violation(&self) -> bool {
        matches!(self, CalcError::DesignRuleViolation { .. })
    }

    /// The violated rule, if any
    pub fn design_rule(&self) -> Option<DesignRule> {
        match self {
            CalcError::DesignRuleViolation { rule, .. } => Some(*rule),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DesignRuleViolation { rule, .. } => match rule {
                DesignRule::OverReinforced => "OVER_REINFORCED",
                DesignRule::CompressionReinforcementRequired => {
                    "COMPRESSION_REINFORCEMENT_REQUIRED"
                }
            },
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject zero, negative and non-finite values for a strictly positive input.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Like [`require_positive`] but zero is allowed.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(value)
}

/// Accept values in the half-open range (0, max].
pub(crate) fn require_fraction(field: &str, value: f64, max: f64) -> CalcResult<f64> {
    require_positive(field, value)?;
    if value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Value cannot exceed {}", max),
        ));
    }
    Ok(value)
}
