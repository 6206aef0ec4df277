//! # Catalog Commands
//!
//! Commands for filtered browsing: the product grid, the search box, and
//! the category nav.
//!
//! ## Derived View Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 visible_products: never stale                           │
//! │                                                                         │
//! │  set_category("Apparel") ──┐                                            │
//! │  set_search_query("blue") ─┤  mutate session under its lock             │
//! │  clear_filters() ──────────┘                                            │
//! │                                                                         │
//! │  visible_products() ──► filter(catalog, category, query)                │
//! │                         recomputed from CURRENT session state on        │
//! │                         every call - there is no cached list to         │
//! │                         invalidate, so there is nothing to go stale     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{CatalogState, SessionState, SessionView};
use lumina_core::validation::validate_search_query;
use lumina_core::{CategoryFilter, Product};

/// Product DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples the internal domain model from the API contract
/// - Allows selective field exposure
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub image_url: String,
    pub rating: f32,
    /// Filled stars for the rating row (floor of rating).
    pub full_stars: u8,
    pub reviews: u32,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            price_cents: p.price_cents,
            image_url: p.image_url.clone(),
            rating: p.rating,
            full_stars: p.full_stars(),
            reviews: p.reviews,
        }
    }
}

/// Returns the products visible under the current filters.
///
/// Always recomputed from the current category + query: changing either
/// filter is immediately reflected in the next read. The result preserves
/// catalog supply order.
pub fn visible_products(catalog: &CatalogState, session: &SessionState) -> Vec<ProductDto> {
    let (category, query) = session.with_session(|s| {
        (s.active_category.clone(), s.search_query.clone())
    });

    let hits = catalog.catalog().filter(&category, &query);
    debug!(
        category = %category.label(),
        query = %query,
        count = hits.len(),
        "visible_products command"
    );

    hits.into_iter().map(ProductDto::from).collect()
}

/// Returns the category labels for the nav, "All" first.
pub fn list_categories(catalog: &CatalogState) -> Vec<String> {
    debug!("list_categories command");
    catalog.nav_categories()
}

/// Sets the active category from a nav label.
///
/// Unknown labels are accepted; they filter to an empty grid, and the
/// frontend offers "Clear all filters" from its empty state.
pub fn set_category(session: &SessionState, label: &str) -> SessionView {
    debug!(label = %label, "set_category command");

    session.with_session_mut(|s| {
        s.active_category = CategoryFilter::from_label(label);
        SessionView::from(&*s)
    })
}

/// Sets the search query.
///
/// The query is stored verbatim so the search box round-trips exactly what
/// the user typed; only the exactly-empty query means "no search filter".
/// Oversized input is rejected at this boundary.
pub fn set_search_query(session: &SessionState, query: &str) -> Result<SessionView, ApiError> {
    debug!(query = %query, "set_search_query command");

    let query = validate_search_query(query)?;
    Ok(session.with_session_mut(|s| {
        s.search_query = query;
        SessionView::from(&*s)
    }))
}

/// Clears both filters atomically: search to "" and category to "All".
///
/// Both resets happen under a single session lock acquisition, so no
/// derived-view read can observe one without the other.
pub fn clear_filters(session: &SessionState) -> SessionView {
    debug!("clear_filters command");

    session.with_session_mut(|s| {
        s.clear_filters();
        SessionView::from(&*s)
    })
}

/// Gets a single product by its id.
///
/// ## When To Use
/// - Deep links straight to a product page
/// - Refreshing a specific product card
pub fn get_product_by_id(catalog: &CatalogState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product_by_id command");
    let product = catalog.require(id)?;
    Ok(ProductDto::from(product))
}

/// Hands the shopping assistant its read-only catalog feed.
///
/// The assistant is an external collaborator; the engine's only obligation
/// is to supply the full, unmodified product list.
pub fn assistant_catalog(catalog: &CatalogState) -> &[Product] {
    debug!(count = catalog.products().len(), "assistant_catalog command");
    catalog.assistant_feed()
}

// =============================================================================
// Unit Tests
// =============================================================================
