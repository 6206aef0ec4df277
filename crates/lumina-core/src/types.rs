//! # Domain Types
//!
//! Core domain types used throughout the Lumina storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐                         │
//! │  │    Product      │   │   CategoryFilter    │                         │
//! │  │  ─────────────  │   │  ─────────────────  │                         │
//! │  │  id (unique)    │   │  All  ("All")       │                         │
//! │  │  name           │   │  Only("Apparel")    │                         │
//! │  │  description    │   └─────────────────────┘                         │
//! │  │  category       │                                                    │
//! │  │  price_cents    │   Products and category labels are supplied       │
//! │  │  image_url      │   externally, validated once at ingest, and       │
//! │  │  rating/reviews │   never mutated for the rest of the session.      │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::CATEGORY_ALL;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Products are immutable for the lifetime of the session: the catalog is a
/// static, read-only list supplied before the first query. Cart items take a
/// snapshot of these fields at the moment of adding (see [`crate::cart`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, opaque to this crate.
    pub id: String,

    /// Display name shown on the product card and detail overlay.
    pub name: String,

    /// Longer marketing copy; searched alongside the name.
    pub description: String,

    /// Category label, drawn from the supplied category list.
    pub category: String,

    /// Price in cents (smallest currency unit). Always > 0.
    pub price_cents: i64,

    /// Image URL; loading and layout are frontend concerns.
    pub image_url: String,

    /// Average customer rating, 0.0 to 5.0.
    pub rating: f32,

    /// Number of customer reviews behind the rating.
    pub reviews: u32,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Number of filled stars for the detail overlay's star row.
    ///
    /// A 4.5 rating shows 4 filled stars; the fractional part is not
    /// rendered as a half star.
    #[inline]
    pub fn full_stars(&self) -> u8 {
        self.rating.floor() as u8
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The active category selection for catalog queries.
///
/// ## The "All" Sentinel
/// The frontend's category nav shows the supplied category labels with
/// [`CATEGORY_ALL`] prepended. Selecting it means "no category filter", so
/// the filter carries that as an explicit variant rather than a magic string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "kind", content = "label")]
#[ts(export)]
pub enum CategoryFilter {
    /// No category filter; every product's category matches.
    All,
    /// Only products whose category equals this label match.
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a category label as sent by the frontend.
    ///
    /// `"All"` maps to [`CategoryFilter::All`]; anything else is taken as a
    /// literal category label. Unknown labels are not an error - they simply
    /// match no products, which the grid renders as an empty result.
    pub fn from_label(label: &str) -> Self {
        if label == CATEGORY_ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// The label this filter round-trips to.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => CATEGORY_ALL,
            CategoryFilter::Only(label) => label,
        }
    }

    /// Whether a product's category label passes this filter.
    #[inline]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(rating: f32) -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Aurora Desk Lamp".to_string(),
            description: "Sculptural ambient lighting".to_string(),
            category: "Home".to_string(),
            price_cents: 12900,
            image_url: "https://example.com/lamp.jpg".to_string(),
            rating,
            reviews: 87,
        }
    }

    #[test]
    fn test_product_price() {
        assert_eq!(product(4.5).price(), Money::from_cents(12900));
    }

    #[test]
    fn test_full_stars_floors_rating() {
        assert_eq!(product(4.5).full_stars(), 4);
        assert_eq!(product(5.0).full_stars(), 5);
        assert_eq!(product(0.9).full_stars(), 0);
    }

    #[test]
    fn test_category_filter_from_label() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Apparel"),
            CategoryFilter::Only("Apparel".to_string())
        );
    }

    #[test]
    fn test_category_filter_label_round_trip() {
        for label in ["All", "Apparel", "Tech"] {
            assert_eq!(CategoryFilter::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches("Apparel"));
        assert!(CategoryFilter::from_label("Apparel").matches("Apparel"));
        assert!(!CategoryFilter::from_label("Apparel").matches("Tech"));
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
