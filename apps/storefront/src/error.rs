//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Error Flow in the Storefront Shell                      │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  add_to_cart('p-404')                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function: Result<T, ApiError>                           │  │
//! │  │                                                                  │  │
//! │  │  Catalog lookup miss? ── CoreError::ProductNotFound ──┐          │  │
//! │  │  Query too long?      ── ValidationError::TooLong  ── ApiError ─►│  │
//! │  │  Success ────────────────────────────────────────────────────── ►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Product not found: p-404" }        │
//! │                                                                         │
//! │  NOTE: cart mutations on ids that are in the CATALOG but not in the    │
//! │  CART never error - those are accepted no-ops by design. Only ids      │
//! │  unknown to the catalog are rejected, at this boundary, before they    │
//! │  reach the store.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use lumina_core::{CoreError, ValidationError};

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: p-404"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (the catalog has no such product)
    NotFound,

    /// Input validation failed (oversized query, malformed supply)
    ValidationError,

    /// Catalog supply could not be ingested
    SupplyError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts catalog supply errors to API errors.
impl From<crate::state::CatalogSupplyError> for ApiError {
    fn from(err: crate::state::CatalogSupplyError) -> Self {
        ApiError::new(ErrorCode::SupplyError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
