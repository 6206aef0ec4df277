//! # Commands Module
//!
//! All commands exposed to the web frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Filtered browsing, search, categories
//! ├── cart.rs     ◄─── Cart manipulation
//! └── session.rs  ◄─── Overlays (detail modal, cart drawer)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const products = visibleProducts();                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Shell                                                             │
//! │  ──────────                                                             │
//! │  pub fn visible_products(                                               │
//! │      catalog: &CatalogState,   ◄── the state each command needs is      │
//! │      session: &SessionState,       passed explicitly - no globals       │
//! │  ) -> Vec<ProductDto>                                                   │
//! │         │                                                               │
//! │         ▼ (JSON-serializable DTOs, camelCase)                           │
//! │  Frontend receives: ProductDto[]                                        │
//! │                                                                         │
//! │  Ordering guarantee: commands run to completion in call order; every    │
//! │  derived view read reflects the most recently applied command.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! pub fn clear_filters(session: &SessionState) -> SessionView
//!
//! // Needs catalog + session (derived view)
//! pub fn visible_products(catalog: &CatalogState, session: &SessionState) -> Vec<ProductDto>
//!
//! // Needs catalog + cart (boundary lookup, then mutation)
//! pub fn add_to_cart(catalog: &CatalogState, cart: &CartState, product_id: &str) -> ...
//! ```

pub mod cart;
pub mod catalog;
pub mod session;

pub use cart::{add_to_cart, adjust_cart_quantity, get_cart, remove_from_cart};
pub use catalog::{
    assistant_catalog, clear_filters, get_product_by_id, list_categories, set_category,
    set_search_query, visible_products, ProductDto,
};
pub use session::{
    add_to_cart_from_details, close_cart_drawer, close_product_details, get_session,
    open_cart_drawer, view_product_details,
};
