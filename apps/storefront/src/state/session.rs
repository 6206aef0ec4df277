//! # Session State
//!
//! Transient view selections: the storefront's composition point.
//!
//! ## What Lives Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session State                                     │
//! │                                                                         │
//! │  active_category ──┐                                                    │
//! │                    ├──► filter(catalog, category, query) = visible      │
//! │  search_query ─────┘        products, recomputed on EVERY read -        │
//! │                             never cached, so never stale                │
//! │                                                                         │
//! │  selected_product ───► detail overlay (None = closed)                   │
//! │  cart_drawer_open ───► cart drawer                                      │
//! │                                                                         │
//! │  The two overlays are independent: opening one does not close the       │
//! │  other. Whether they may visually coexist is the frontend's policy.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Same story as the cart: `Mutex<Session>` for exclusive access, commands
//! arrive one at a time from the UI thread.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lumina_core::{CategoryFilter, Product};

// =============================================================================
// Session
// =============================================================================

/// The transient per-session view selections.
///
/// Holds no derived data: visible products and cart totals are always
/// recomputed from current state by the command layer.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Active category filter. Default: no filter ("All").
    pub active_category: CategoryFilter,

    /// Current search text. Default: empty (no filter).
    pub search_query: String,

    /// Product shown in the detail overlay, if any.
    pub selected_product: Option<Product>,

    /// Whether the cart drawer is open.
    pub cart_drawer_open: bool,
}

impl Session {
    /// Creates a fresh session: no filters, no overlays.
    pub fn new() -> Self {
        Session::default()
    }

    /// Resets both filters atomically: search to "" and category to All.
    ///
    /// The caller holds the session lock for the whole call, so no reader
    /// can ever observe one filter reset without the other.
    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.active_category = CategoryFilter::All;
    }
}

// =============================================================================
// Session View
// =============================================================================

/// Serializable snapshot of the session for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionView {
    /// Active category label ("All" when unfiltered).
    pub active_category: String,

    /// Current search text.
    pub search_query: String,

    /// Product in the detail overlay, if open.
    pub selected_product: Option<Product>,

    /// Whether the cart drawer is open.
    pub cart_drawer_open: bool,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        SessionView {
            active_category: session.active_category.label().to_string(),
            search_query: session.search_query.clone(),
            selected_product: session.selected_product.clone(),
            cart_drawer_open: session.cart_drawer_open,
        }
    }
}

// =============================================================================
// Session State
// =============================================================================

/// The shell-managed session state.
#[derive(Debug, Default)]
pub struct SessionState {
    session: Mutex<Session>,
}

impl SessionState {
    /// Creates a fresh session state.
    pub fn new() -> Self {
        SessionState {
            session: Mutex::new(Session::new()),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.active_category, CategoryFilter::All);
        assert_eq!(session.search_query, "");
        assert!(session.selected_product.is_none());
        assert!(!session.cart_drawer_open);
    }

    #[test]
    fn test_clear_filters_resets_both() {
        let mut session = Session::new();
        session.active_category = CategoryFilter::from_label("Apparel");
        session.search_query = "jacket".to_string();

        session.clear_filters();

        assert_eq!(session.active_category, CategoryFilter::All);
        assert_eq!(session.search_query, "");
    }

    #[test]
    fn test_overlays_are_independent() {
        let state = SessionState::new();

        state.with_session_mut(|s| {
            s.cart_drawer_open = true;
            s.selected_product = Some(Product {
                id: "p-1".to_string(),
                name: "Blue Jacket".to_string(),
                description: String::new(),
                category: "Apparel".to_string(),
                price_cents: 18900,
                image_url: String::new(),
                rating: 4.6,
                reviews: 210,
            });
        });

        // Both overlays open at once is a valid session state
        state.with_session(|s| {
            assert!(s.cart_drawer_open);
            assert!(s.selected_product.is_some());
        });
    }

    #[test]
    fn test_view_snapshot() {
        let state = SessionState::new();
        state.with_session_mut(|s| {
            s.active_category = CategoryFilter::from_label("Home");
            s.search_query = "lamp".to_string();
        });

        let view = state.with_session(|s| SessionView::from(s));
        assert_eq!(view.active_category, "Home");
        assert_eq!(view.search_query, "lamp");
        assert!(!view.cart_drawer_open);
    }
}
