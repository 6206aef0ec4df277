//! # Validation Module
//!
//! Catalog supply validation for the Lumina storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog supply (JSON, build pipeline)                         │
//! │  └── Authoring-time checks upstream of this workspace                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Ingest (Rust)                                                 │
//! │  └── THIS MODULE: one pass over the supplied products at startup        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine (cart, filter)                                         │
//! │  └── TRUSTS its input - no re-validation in the hot paths, by           │
//! │      contract. A negative price past ingest is a supply bug, not        │
//! │      something the cart re-checks on every total().                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lumina_core::validation::{validate_search_query, validate_product_id};
//!
//! validate_product_id("prod-7").unwrap();
//! let query = validate_search_query("leather tote").unwrap();
//! assert_eq!(query, "leather tote");
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;
use crate::MAX_SEARCH_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must be at most 64 characters
///
/// Ids are opaque to the engine; nothing here assumes a UUID or any other
/// scheme, only that the supply gave us something usable as a key.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (empty query means "no filter", not an error)
/// - Maximum [`MAX_SEARCH_QUERY_LEN`] characters
///
/// ## Returns
/// The query verbatim. The session must round-trip exactly what the user
/// typed - a controlled search box echoes this state back, so even
/// surrounding whitespace is kept.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    if query.len() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be strictly positive (> 0); this storefront has no free items
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer rating.
///
/// ## Rules
/// - Must be between 0.0 and 5.0 inclusive (the star row has five stars)
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Supply Validator
// =============================================================================

/// Validates a single product from the external supply.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_rating(product.rating)?;
    Ok(())
}

/// Validates an entire catalog supply in one pass.
///
/// ## Rules
/// - Every product passes [`validate_product`]
/// - Product ids are unique across the supply
///
/// An empty supply is valid; the grid simply renders its empty state.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(products.len());

    for product in products {
        validate_product(product)?;

        if !seen.insert(product.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
