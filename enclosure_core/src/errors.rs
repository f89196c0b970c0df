//! # Error Types
//!
//! Structured error types for enclosure_core. These errors carry enough
//! context for a caller to explain the problem to a customer or to a
//! developer, without string matching.
//!
//! ## Example
//!
//! ```rust
//! use enclosure_core::errors::{EnclosureError, EnclosureResult};
//!
//! fn validate_thickness(thickness_mm: f64) -> EnclosureResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(EnclosureError::InvalidInput {
//!             field: "thickness_mm".to_string(),
//!             value: thickness_mm.to_string(),
//!             reason: "Glass thickness must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for enclosure_core operations
pub type EnclosureResult<T> = Result<T, EnclosureError>;

/// Structured error type for the dimensioning and quoting engine.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by UI and API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EnclosureError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Layout template not found in the library
    #[error("Template not found: {template_id}")]
    TemplateNotFound { template_id: String },

    /// A layout graph references a panel that does not exist
    #[error("Inconsistent layout: junction '{junction_id}' references unknown panel '{panel_id}'")]
    InconsistentLayout {
        junction_id: String,
        panel_id: String,
    },

    /// A static catalog is missing an entry the domain model produced.
    ///
    /// The hardware catalogs and price book are static and exhaustive for
    /// every key the domain model can produce, so this is a data-integrity
    /// violation (a programming error), never a user-input condition.
    #[error("Catalog integrity violation: no {catalog} entry for '{key}'")]
    CatalogIntegrity { catalog: String, key: String },

    /// Derivation failed (deductions, hardware selection, or pricing)
    #[error("Derivation failed: {stage} - {reason}")]
    DerivationFailed { stage: String, reason: String },
}

impl EnclosureError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EnclosureError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        EnclosureError::MissingField {
            field: field.into(),
        }
    }

    /// Create a TemplateNotFound error
    pub fn template_not_found(template_id: impl Into<String>) -> Self {
        EnclosureError::TemplateNotFound {
            template_id: template_id.into(),
        }
    }

    /// Create a CatalogIntegrity error
    pub fn catalog_integrity(catalog: impl Into<String>, key: impl Into<String>) -> Self {
        EnclosureError::CatalogIntegrity {
            catalog: catalog.into(),
            key: key.into(),
        }
    }

    /// Create a DerivationFailed error
    pub fn derivation_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        EnclosureError::DerivationFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error indicates broken static data rather than bad input
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            EnclosureError::CatalogIntegrity { .. } | EnclosureError::InconsistentLayout { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EnclosureError::InvalidInput { .. } => "INVALID_INPUT",
            EnclosureError::MissingField { .. } => "MISSING_FIELD",
            EnclosureError::TemplateNotFound { .. } => "TEMPLATE_NOT_FOUND",
            EnclosureError::InconsistentLayout { .. } => "INCONSISTENT_LAYOUT",
            EnclosureError::CatalogIntegrity { .. } => "CATALOG_INTEGRITY",
            EnclosureError::DerivationFailed { .. } => "DERIVATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EnclosureError::invalid_input("tight_width_mm", "-900", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EnclosureError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EnclosureError::missing_field("handle_type").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            EnclosureError::template_not_found("corner-900").error_code(),
            "TEMPLATE_NOT_FOUND"
        );
    }

    #[test]
    fn test_integrity_classification() {
        assert!(EnclosureError::catalog_integrity("hinges", "tier-9").is_integrity_violation());
        assert!(!EnclosureError::missing_field("x").is_integrity_violation());
    }
}
