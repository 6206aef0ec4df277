//! # Catalog Module
//!
//! The immutable product index and its filter query.
//!
//! ## Filter Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Filter                                       │
//! │                                                                         │
//! │  keep(product) =                                                        │
//! │        (category is All  OR  product.category == category)              │
//! │    AND (query is empty   OR  query ⊆ name OR query ⊆ description)       │
//! │                                   (case-insensitive substring)          │
//! │                                                                         │
//! │  • Stable: output preserves the input's relative order                  │
//! │  • Pure: never mutates the product list                                 │
//! │  • Total: empty query is "no filter", empty result is not an error      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CategoryFilter, Product};

// =============================================================================
// Filter Query
// =============================================================================

/// Filters a product list by category and free-text search.
///
/// Both conditions are ANDed. The search matches when the query is a
/// case-insensitive substring of the product name OR its description. Only
/// the exactly-empty query means "no search filter"; any other string,
/// surrounding whitespace included, is matched literally. The result is a
/// stable subsequence of `products` - relative order is preserved, nothing
/// is cloned.
///
/// ## Example
/// ```rust
/// # use lumina_core::catalog::filter_products;
/// # use lumina_core::types::{CategoryFilter, Product};
/// # let products: Vec<Product> = Vec::new();
/// // "BLUE" and "blue" return the identical set
/// let a = filter_products(&products, &CategoryFilter::All, "BLUE");
/// let b = filter_products(&products, &CategoryFilter::All, "blue");
/// assert_eq!(a, b);
/// ```
pub fn filter_products<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|product| {
            if !category.matches(&product.category) {
                return false;
            }
            if needle.is_empty() {
                return true;
            }
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// The static product catalog plus its category labels.
///
/// Created once at session start from external supply and never mutated or
/// extended afterwards. All queries borrow from it; nothing here reorders
/// or filters in place.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// Creates a catalog from an already-validated supply.
    ///
    /// Validation (unique ids, positive prices, rating range) is the supply
    /// boundary's job - see [`crate::validation::validate_catalog`]. This
    /// constructor trusts its input per the supply contract.
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Catalog {
            products,
            categories,
        }
    }

    /// The full product list, in supply order.
    ///
    /// This is also the unmodified reference handed to the shopping
    /// assistant collaborator - it receives the whole catalog, untouched.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The supplied category labels (without the "All" sentinel).
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Runs the category/search filter over this catalog.
    ///
    /// Delegates to [`filter_products`]; see there for semantics.
    pub fn filter(&self, category: &CategoryFilter, query: &str) -> Vec<&Product> {
        filter_products(&self.products, category, query)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, description: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price_cents: 4900,
            image_url: format!("https://example.com/{}.jpg", id),
            rating: 4.2,
            reviews: 12,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                product("p-1", "Blue Jacket", "Water-resistant shell", "Apparel"),
                product("p-2", "Red Scarf", "Merino wool with soft blue trim", "Apparel"),
                product("p-3", "Walnut Desk Clock", "Silent quartz movement", "Home"),
            ],
            vec!["Apparel".to_string(), "Home".to_string()],
        )
    }

    #[test]
    fn test_filter_matches_name_or_description() {
        let catalog = sample_catalog();

        // "blue" matches Blue Jacket by name AND Red Scarf by description
        let hits = catalog.filter(&CategoryFilter::All, "blue");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-2"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = sample_catalog();

        let lower = catalog.filter(&CategoryFilter::All, "blue");
        let upper = catalog.filter(&CategoryFilter::All, "BLUE");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_by_category_only() {
        let catalog = sample_catalog();

        let apparel = catalog.filter(&CategoryFilter::from_label("Apparel"), "");
        assert_eq!(apparel.len(), 2);
        assert!(apparel.iter().all(|p| p.category == "Apparel"));
    }

    #[test]
    fn test_filter_conditions_are_anded() {
        let catalog = sample_catalog();

        // "blue" appears in two products but only one is in Home... none, actually:
        // both "blue" hits are Apparel, so Home + "blue" is empty
        let hits = catalog.filter(&CategoryFilter::from_label("Home"), "blue");
        assert!(hits.is_empty());

        let hits = catalog.filter(&CategoryFilter::from_label("Apparel"), "scarf");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-2"]);
    }

    #[test]
    fn test_empty_query_is_no_filter() {
        let catalog = sample_catalog();

        let all = catalog.filter(&CategoryFilter::All, "");
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn test_whitespace_in_query_matches_literally() {
        let catalog = sample_catalog();

        // " blue " appears only inside "Merino wool with soft blue trim";
        // "Blue Jacket" starts with "blue" and has no surrounding spaces
        let hits = catalog.filter(&CategoryFilter::All, " blue ");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-2"]);

        // Only the exactly-empty query is "no filter": a whitespace-only
        // query is a literal substring search like any other
        let hits = catalog.filter(&CategoryFilter::All, "   ");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let catalog = sample_catalog();
        let hits = catalog.filter(&CategoryFilter::All, "submarine");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let catalog = sample_catalog();

        // Every filtered view must be a subsequence of supply order
        let hits = catalog.filter(&CategoryFilter::All, "e");
        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| catalog.products().iter().position(|p| p.id == hit.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = sample_catalog();
        let hits = catalog.filter(&CategoryFilter::from_label("Garden"), "");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("p-3").map(|p| p.name.as_str()), Some("Walnut Desk Clock"));
        assert!(catalog.get("p-404").is_none());
    }
}
