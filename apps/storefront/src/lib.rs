//! # Lumina Storefront Shell
//!
//! Thin orchestration layer over `lumina-core`. This is what the web
//! frontend talks to.
//!
//! ## Module Organization
//! ```text
//! lumina_storefront/
//! ├── lib.rs          ◄─── You are here (composition root)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog ingestion + read-only catalog state
//! │   ├── cart.rs     ◄─── Cart state container
//! │   └── session.rs  ◄─── Filters and overlay selections
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Browsing/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── session.rs  ◄─── Overlay commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Data Flow (one direction per interaction)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  user gesture ──► command ──► store update ──► derived views            │
//! │                                                recomputed ──► render    │
//! │                                                                         │
//! │  CatalogState answers filter queries and never mutates.                 │
//! │  CartState / SessionState mutate only under their own locks.            │
//! │  Nothing in this workspace depends on presentation code.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CartState, CatalogState, CatalogSupplyError, SessionState};

/// The assembled storefront: one catalog, one cart, one session.
///
/// Commands take the individual states they need; this struct exists so an
/// embedder (or the demo binary) can stand the whole thing up in one call
/// and hand the pieces out.
#[derive(Debug)]
pub struct Storefront {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub session: SessionState,
}

impl Storefront {
    /// Assembles a storefront around an ingested catalog.
    pub fn new(catalog: CatalogState) -> Self {
        info!(products = catalog.products().len(), "Storefront assembled");

        Storefront {
            catalog,
            cart: CartState::new(),
            session: SessionState::new(),
        }
    }

    /// Ingests a JSON catalog supply and assembles a storefront around it.
    pub fn from_supply_json(json: &str) -> Result<Self, CatalogSupplyError> {
        Ok(Storefront::new(CatalogState::from_json(json)?))
    }
}

/// Initializes tracing with an env-filter.
///
/// Default level is INFO; override with `RUST_LOG` (e.g.
/// `RUST_LOG=lumina_storefront=debug` to see one event per command).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;

    const SUPPLY: &str = r#"{
        "products": [
            {
                "id": "p-1",
                "name": "Blue Jacket",
                "description": "Water-resistant shell",
                "category": "Apparel",
                "priceCents": 1000,
                "imageUrl": "https://example.com/p-1.jpg",
                "rating": 4.6,
                "reviews": 210
            },
            {
                "id": "p-2",
                "name": "Red Scarf",
                "description": "Merino wool with soft blue trim",
                "category": "Apparel",
                "priceCents": 2000,
                "imageUrl": "https://example.com/p-2.jpg",
                "rating": 4.1,
                "reviews": 58
            }
        ],
        "categories": ["Apparel"]
    }"#;

    /// End-to-end walk of the reference scenario through the command layer:
    /// add p-1 twice and p-2 once, clamp p-1 down, remove p-2.
    #[test]
    fn test_full_session_flow() {
        let store = Storefront::from_supply_json(SUPPLY).unwrap();

        commands::add_to_cart(&store.catalog, &store.cart, "p-1").unwrap();
        commands::add_to_cart(&store.catalog, &store.cart, "p-1").unwrap();
        let response = commands::add_to_cart(&store.catalog, &store.cart, "p-2").unwrap();
        assert_eq!(response.totals.total_cents, 4000);
        assert_eq!(response.totals.total_quantity, 3);

        let response = commands::adjust_cart_quantity(&store.cart, "p-1", -5);
        assert_eq!(response.items[0].quantity, 1);

        let response = commands::remove_from_cart(&store.cart, "p-2");
        assert_eq!(response.totals.total_cents, 1000);
        assert_eq!(response.totals.total_quantity, 1);

        // Browsing state was untouched by all of the above
        let visible = commands::visible_products(&store.catalog, &store.session);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_rejects_bad_supply() {
        assert!(Storefront::from_supply_json("[]").is_err());
    }
}
