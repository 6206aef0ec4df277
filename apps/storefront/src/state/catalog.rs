//! # Catalog State
//!
//! The ingested, validated, read-only product catalog.
//!
//! ## Supply Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Supply Flow                                  │
//! │                                                                         │
//! │  External supply (JSON document)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogState::from_json ── parse error? ──► CatalogSupplyError         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_catalog ── bad product / duplicate id? ──► CatalogSupplyError │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogState (read-only for the rest of the session)                   │
//! │                                                                         │
//! │  Everything downstream of this point TRUSTS the catalog: the cart and  │
//! │  the filter never re-validate product data.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The catalog is read-only after initialization, so no mutex is needed.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use lumina_core::validation::validate_catalog;
use lumina_core::{Catalog, CoreError, CoreResult, Product, ValidationError, CATEGORY_ALL};

// =============================================================================
// Supply Document
// =============================================================================

/// The wire shape of an externally supplied catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Errors raised while ingesting a catalog supply.
#[derive(Debug, Error)]
pub enum CatalogSupplyError {
    /// The supply document was not valid JSON for the expected shape.
    #[error("Catalog supply is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The supply parsed but violated the product contract.
    #[error("Catalog supply rejected: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Catalog State
// =============================================================================

/// The storefront's catalog, fixed for the session.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Ingests an already-parsed supply, validating it first.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogSupplyError> {
        validate_catalog(&doc.products)?;

        info!(
            products = doc.products.len(),
            categories = doc.categories.len(),
            "Catalog supply ingested"
        );

        Ok(CatalogState {
            catalog: Catalog::new(doc.products, doc.categories),
        })
    }

    /// Ingests a JSON supply document.
    pub fn from_json(json: &str) -> Result<Self, CatalogSupplyError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        CatalogState::from_document(doc)
    }

    /// The underlying catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The full product list, in supply order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Category labels for the nav: the "All" sentinel followed by the
    /// supplied labels, in supply order.
    pub fn nav_categories(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.catalog.categories().len() + 1);
        labels.push(CATEGORY_ALL.to_string());
        labels.extend(self.catalog.categories().iter().cloned());
        labels
    }

    /// Looks up a product, turning a miss into the boundary error.
    ///
    /// This is the guard of the permissive-cart policy: ids the catalog has
    /// never heard of stop here and never reach the store.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.catalog
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// The unmodified full-catalog reference for the shopping assistant.
    ///
    /// The assistant collaborator receives the whole catalog as read-only
    /// input; its behavior and output are its own business. Our only
    /// obligation is to hand over the list untouched.
    #[inline]
    pub fn assistant_feed(&self) -> &[Product] {
        self.catalog.products()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPLY: &str = r#"{
        "products": [
            {
                "id": "p-1",
                "name": "Blue Jacket",
                "description": "Water-resistant shell",
                "category": "Apparel",
                "priceCents": 18900,
                "imageUrl": "https://example.com/p-1.jpg",
                "rating": 4.6,
                "reviews": 210
            },
            {
                "id": "p-2",
                "name": "Red Scarf",
                "description": "Merino wool with soft blue trim",
                "category": "Apparel",
                "priceCents": 4900,
                "imageUrl": "https://example.com/p-2.jpg",
                "rating": 4.1,
                "reviews": 58
            }
        ],
        "categories": ["Apparel", "Home"]
    }"#;

    #[test]
    fn test_ingest_valid_supply() {
        let state = CatalogState::from_json(SUPPLY).unwrap();
        assert_eq!(state.products().len(), 2);
        assert_eq!(state.catalog().categories(), ["Apparel", "Home"]);
    }

    #[test]
    fn test_nav_categories_prepends_all() {
        let state = CatalogState::from_json(SUPPLY).unwrap();
        assert_eq!(state.nav_categories(), ["All", "Apparel", "Home"]);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CatalogState::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogSupplyError::Parse(_)));
    }

    #[test]
    fn test_rejects_invalid_product() {
        let bad = SUPPLY.replace("18900", "-1");
        let err = CatalogState::from_json(&bad).unwrap_err();
        assert!(matches!(err, CatalogSupplyError::Invalid(_)));
    }

    #[test]
    fn test_require_guards_unknown_ids() {
        let state = CatalogState::from_json(SUPPLY).unwrap();
        assert!(state.require("p-1").is_ok());
        assert!(matches!(
            state.require("p-404"),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_assistant_feed_is_the_whole_catalog() {
        let state = CatalogState::from_json(SUPPLY).unwrap();
        let feed = state.assistant_feed();
        assert_eq!(feed.len(), state.products().len());
        // Same slice, not a filtered or reordered copy
        assert!(std::ptr::eq(feed, state.products()));
    }
}
