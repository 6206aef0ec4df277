//! # Error Types
//!
//! Domain-specific error types for lumina-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lumina-core errors (this file)                                        │
//! │  ├── CoreError        - Supply/lookup failures                          │
//! │  └── ValidationError  - Catalog supply validation failures              │
//! │                                                                         │
//! │  storefront shell errors (apps/storefront)                             │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Can and Cannot Occur
//! The cart and the catalog filter have NO error conditions reachable from
//! valid input: unknown ids are silent no-ops, empty queries are "no filter",
//! empty results are results. Errors exist only at the supply boundary
//! (ingesting a catalog) and at the command boundary (adding a product id
//! that the catalog has never heard of).
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These surface only at the boundaries of the engine; the in-memory state
/// machines themselves are total functions over valid input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - The frontend asks to add or view a product id the catalog does not
    ///   contain (stale UI state, hand-typed URL, buggy caller)
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Catalog supply violated its contract.
    #[error("Invalid catalog supply: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog supply validation errors.
///
/// The engine assumes validated products everywhere past the boundary, so
/// the boundary has to earn that assumption: every supplied product is
/// checked once at ingest, and a bad one rejects the whole supply.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (two products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("p-404".to_string());
        assert_eq!(err.to_string(), "Product not found: p-404");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "p-1".to_string(),
        };
        assert_eq!(err.to_string(), "id 'p-1' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
