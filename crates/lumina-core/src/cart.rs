//! # Cart Module
//!
//! The session-local shopping cart and its derived aggregates.
//!
//! ## Per-Product State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Cart State Machine (per product id)                     │
//! │                                                                         │
//! │            add(product)              add(product) again                 │
//! │  absent ───────────────► present(1) ───────────────► present(qty+1)    │
//! │    ▲                         │                                          │
//! │    │   remove(id)            │  adjust_quantity(id, delta)             │
//! │    └─────────────────────────┤                                          │
//! │                              ▼                                          │
//! │                      present(max(1, qty + delta))                       │
//! │                                                                         │
//! │  • There is no state below qty=1 while present: a decrement that        │
//! │    would drop under 1 clamps to 1. Removal is only ever explicit.      │
//! │  • Unknown ids are silent no-ops, never errors.                         │
//! │  • Insertion order is preserved; mutations never reorder items.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Snapshot Pattern
/// A cart item does not reference the catalog; it carries a frozen copy of
/// the product fields taken at the moment of first add. The catalog is
/// immutable for the session, so the snapshot can never drift - but it keeps
/// the cart self-contained for display and serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product id this item was created from.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Category label at time of adding (frozen); shown under the name
    /// in the cart drawer.
    pub category: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Image URL for the cart drawer thumbnail (frozen).
    pub image_url: String,

    /// Quantity in cart. Invariant: always >= 1.
    pub quantity: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart item from a product, with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            unit_price_cents: product.price_cents,
            image_url: product.image_url.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of items, unique by product id.
///
/// ## Invariants
/// - No two items share a product id (re-adding merges into the quantity)
/// - Every item's quantity is >= 1
/// - Items keep first-add order; no mutation reorders the sequence
///
/// ## Error Policy
/// None of the mutations can fail on valid input. Commands against ids not
/// in the cart are accepted and do nothing - the boundary layer guards
/// against malformed ids before they reach this store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1, in place;
    ///   the item's position in the sequence does not change
    /// - Product not in cart: appended to the end with quantity 1
    ///
    /// There is no cap on quantity or on the number of distinct items, and
    /// no failure path.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Removes the item with the given product id.
    ///
    /// No-op if the id is not in the cart.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Applies a quantity delta to the item with the given product id.
    ///
    /// ## Behavior
    /// - New quantity = `max(1, current + delta)`: decrements clamp at 1
    ///   and never remove the item - removal is only via [`Cart::remove`]
    /// - `delta` may be negative or positive; there is no upper bound
    /// - No-op if the id is not in the cart
    pub fn adjust_quantity(&mut self, product_id: &str, delta: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = (item.quantity + delta).max(1);
        }
    }

    /// Clears the cart.
    ///
    /// Only the session lifecycle calls this; no storefront gesture empties
    /// the whole bag at once.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The items in first-add order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up an item by product id.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Whether a product id is currently in the cart.
    #[inline]
    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct products in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all items (the badge on the bag icon).
    pub fn count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals over all items.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart aggregate summary for API responses.
///
/// Derived on demand from the current items - never stored, so it can never
/// be stale with respect to the cart it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub item_count: usize,

    /// Total units across all items.
    pub total_quantity: i64,

    /// Grand total in cents (no tax, no shipping - shipping is free).
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.count(),
            total_cents: cart.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: format!("Description for {}", id),
            category: "Apparel".to_string(),
            price_cents,
            image_url: format!("https://example.com/{}.jpg", id),
            rating: 4.0,
            reviews: 10,
        }
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        let product = test_product("a", 999);

        cart.add(&product);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total().cents(), 999);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let product = test_product("a", 999);

        cart.add(&product);
        cart.add(&product);

        // Still one item, quantity merged
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("a").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_preserves_first_add_order() {
        let mut cart = Cart::new();
        let a = test_product("a", 1000);
        let b = test_product("b", 2000);
        let c = test_product("c", 3000);

        cart.add(&a);
        cart.add(&b);
        cart.add(&c);
        // Re-adding the first product must not move it
        cart.add(&a);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1000));
        cart.add(&test_product("b", 2000));

        cart.remove("a");

        assert!(!cart.contains("a"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total().cents(), 2000);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1000));

        cart.remove("ghost");

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_adjust_quantity_increments_and_decrements() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1000));

        cart.adjust_quantity("a", 4);
        assert_eq!(cart.get("a").unwrap().quantity, 5);

        cart.adjust_quantity("a", -3);
        assert_eq!(cart.get("a").unwrap().quantity, 2);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1000));

        // A decrement past the floor clamps to 1, never removes
        cart.adjust_quantity("a", -5);
        assert_eq!(cart.get("a").unwrap().quantity, 1);
        assert!(cart.contains("a"));

        cart.adjust_quantity("a", -1);
        assert_eq!(cart.get("a").unwrap().quantity, 1);
    }

    #[test]
    fn test_adjust_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1000));

        cart.adjust_quantity("ghost", 3);

        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_quantity_floor_under_any_delta_sequence() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 500));

        for delta in [-10, 3, -7, 0, -1, 100, -200] {
            cart.adjust_quantity("a", delta);
            assert!(cart.get("a").unwrap().quantity >= 1);
        }
    }

    #[test]
    fn test_aggregates_match_independent_recompute() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1250));
        cart.add(&test_product("b", 799));
        cart.add(&test_product("a", 1250));
        cart.adjust_quantity("b", 2);
        cart.remove("a");
        cart.add(&test_product("c", 4500));

        let expected_total: i64 = cart
            .items()
            .iter()
            .map(|i| i.unit_price_cents * i.quantity)
            .sum();
        let expected_count: i64 = cart.items().iter().map(|i| i.quantity).sum();

        assert_eq!(cart.total().cents(), expected_total);
        assert_eq!(cart.count(), expected_count);
    }

    /// The worked scenario from the storefront design review:
    /// A($10), A again, B($20) → [A×2, B×1], total $40, count 3;
    /// then a -5 delta on A clamps to 1; then removing B leaves [A×1].
    #[test]
    fn test_reference_scenario() {
        let a = test_product("a", 1000);
        let b = test_product("b", 2000);
        let mut cart = Cart::new();

        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(cart.get("a").unwrap().quantity, 2);
        assert_eq!(cart.get("b").unwrap().quantity, 1);
        assert_eq!(cart.total().cents(), 4000);
        assert_eq!(cart.count(), 3);

        cart.adjust_quantity("a", -5);
        assert_eq!(cart.get("a").unwrap().quantity, 1);

        cart.remove("b");
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total().cents(), 1000);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_snapshot_freezes_product_fields() {
        let mut cart = Cart::new();
        let product = test_product("a", 1000);
        cart.add(&product);

        let item = cart.get("a").unwrap();
        assert_eq!(item.name, product.name);
        assert_eq!(item.category, product.category);
        assert_eq!(item.unit_price_cents, product.price_cents);
        assert_eq!(item.image_url, product.image_url);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1000));
        cart.add(&test_product("b", 2000));
        cart.adjust_quantity("a", 1);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_cents, 4000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("a", 1000));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }
}
