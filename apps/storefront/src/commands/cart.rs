//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐    add_to_cart     ┌──────────┐   session end             │
//! │  │  Empty   │───────────────────►│  Items   │──────────────► (gone)     │
//! │  │   Bag    │                    │  in Bag  │                           │
//! │  └──────────┘                    └──────────┘                           │
//! │       ▲                               │                                 │
//! │       │     remove_from_cart          │ adjust_cart_quantity            │
//! │       └──────(last item)──────────────┤ (clamped at 1, never            │
//! │                                       │  removes implicitly)            │
//! │                                       ▼                                 │
//! │  No checkout here: payment is outside this system's scope. The bag      │
//! │  lives and dies with the session.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartResponse, CartState, CatalogState};

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │  Your Bag (3)                                                   │
/// │  ─────────────────────────────────────────────────────────────  │
/// │  Blue Jacket          [- 2 +]                    $378.00        │
/// │  Red Scarf            [- 1 +]                     $49.00        │
/// │  ─────────────────────────────────────────────────────────────  │
/// │  Subtotal                                        $427.00        │
/// │  Shipping                                           FREE        │
/// │  Total                                           $427.00        │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Returns
/// Current cart with items (in first-add order) and derived totals.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by 1, position unchanged
/// - Product not in cart: appended with quantity 1
/// - Product id unknown to the catalog: rejected here, at the boundary -
///   the store itself never sees it
///
/// ## Arguments
/// * `product_id` - Catalog product id to add
///
/// ## Returns
/// Updated cart with all items and totals
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.require(product_id)?;

    Ok(cart.with_cart_mut(|c| {
        c.add(product);
        CartResponse::from(&*c)
    }))
}

/// Applies a quantity delta to a cart item (the "-"/"+" stepper).
///
/// ## Behavior
/// - New quantity = max(1, current + delta): the stepper can never push an
///   item below one unit; taking it out of the bag is only ever the trash
///   icon (`remove_from_cart`)
/// - Ids not currently in the cart are accepted no-ops
///
/// ## Arguments
/// * `product_id` - Product id in the cart
/// * `delta` - Signed quantity change (-1 and +1 from the stepper)
///
/// ## Returns
/// Updated cart
pub fn adjust_cart_quantity(cart: &CartState, product_id: &str, delta: i64) -> CartResponse {
    debug!(product_id = %product_id, delta = %delta, "adjust_cart_quantity command");

    cart.with_cart_mut(|c| {
        c.adjust_quantity(product_id, delta);
        CartResponse::from(&*c)
    })
}

/// Removes an item from the cart.
///
/// Ids not currently in the cart are accepted no-ops, not errors.
///
/// ## Arguments
/// * `product_id` - Product id to remove
///
/// ## Returns
/// Updated cart
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(product_id);
        CartResponse::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
