//! # Cart State
//!
//! The shell's container for the session cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Mutex<Cart>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. The container must be `Sync` even though the storefront issues
//!    commands strictly one at a time from the UI thread
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Command                  Cart State Change    │
//! │  ───────────────          ───────                  ─────────────────    │
//! │                                                                         │
//! │  "Add to Bag" ──────────► add_to_cart() ─────────► qty+1 or append     │
//! │                                                                         │
//! │  "+" / "-" stepper ─────► adjust_cart_quantity() ► qty=max(1,qty+Δ)    │
//! │                                                                         │
//! │  Trash icon ────────────► remove_from_cart() ────► item deleted        │
//! │                                                                         │
//! │  Drawer render ─────────► get_cart() ────────────► (read only)         │
//! │                                                                         │
//! │  All write operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lumina_core::{Cart, CartItem, CartTotals};

// =============================================================================
// Cart Response
// =============================================================================

/// Cart response including items and totals.
///
/// Totals are computed from the items at response time, so the response can
/// never disagree with itself.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The shell-managed cart state.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Mutex<Cart>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Mutex::new(Cart::new()),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let response = cart_state.with_cart_mut(|cart| {
    ///     cart.add(&product);
    ///     CartResponse::from(&*cart)
    /// });
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
