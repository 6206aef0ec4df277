//! # lumina-core: Pure Business Logic for the Lumina Storefront
//!
//! This crate is the **heart** of the Lumina storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lumina Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web UI)                            │   │
//! │  │   Category Nav ──► Product Grid ──► Detail Modal ──► Cart      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process command calls               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  apps/storefront (shell)                        │   │
//! │  │    visible_products, add_to_cart, adjust_cart_quantity, etc.   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lumina-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   cart    │  │   │
//! │  │   │  Product  │  │   Money   │  │  filter   │  │   Cart    │  │   │
//! │  │   │  Category │  │           │  │  queries  │  │ CartItem  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO RENDERING • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CategoryFilter)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable product index and the category/search filter
//! - [`cart`] - The mutable cart and its derived aggregates
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog supply validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, rendering access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Permissive Mutations**: Cart commands against unknown ids are silent
//!    no-ops, never errors - the shell boundary guards ids before they get here
//!
//! ## Example Usage
//!
//! ```rust
//! use lumina_core::cart::Cart;
//! use lumina_core::catalog::filter_products;
//! use lumina_core::types::CategoryFilter;
//! # use lumina_core::types::Product;
//! # let catalog: Vec<Product> = Vec::new();
//!
//! // Filter the catalog: category AND case-insensitive search are combined
//! let visible = filter_products(&catalog, &CategoryFilter::All, "jacket");
//!
//! // Cart mutations never fail; unknown ids are no-ops
//! let mut cart = Cart::new();
//! cart.remove("not-in-cart");
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lumina_core::Money` instead of
// `use lumina_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::{filter_products, Catalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CategoryFilter, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel category label meaning "no category filter".
///
/// ## Why a constant?
/// The frontend renders the category nav from the supplied category labels
/// with this sentinel prepended, and sends the chosen label straight back.
/// Matching on one shared constant keeps both sides of that contract honest.
pub const CATEGORY_ALL: &str = "All";

/// Maximum accepted length of a search query, in characters.
///
/// ## Business Reason
/// The search box is free text typed by the user; anything longer than this
/// is garbage input (or a paste accident) and is rejected at the boundary
/// before it reaches the filter.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
