//! # Session Commands
//!
//! Commands for the two overlays: the product detail modal and the cart
//! drawer.
//!
//! ## Overlay Independence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Overlay State                                      │
//! │                                                                         │
//! │  selected_product: Option<Product>     cart_drawer_open: bool           │
//! │         │                                      │                        │
//! │         ▼                                      ▼                        │
//! │   detail modal                            cart drawer                   │
//! │                                                                         │
//! │  The two are independent booleans/optionals: opening one does NOT       │
//! │  close the other. This is deliberate - whether they may visually        │
//! │  coexist is the frontend's layout policy, not an engine invariant.     │
//! │                                                                         │
//! │  One composite exists because the modal's CTA does all three at once:  │
//! │  add_to_cart_from_details = add + close modal + open drawer            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartResponse, CartState, CatalogState, SessionState, SessionView};

/// Gets the current session snapshot.
pub fn get_session(session: &SessionState) -> SessionView {
    debug!("get_session command");
    session.with_session(|s| SessionView::from(s))
}

/// Opens the detail overlay for a product.
///
/// The selection snapshots the product into the session, so the overlay
/// renders without another catalog lookup.
///
/// ## Arguments
/// * `id` - Catalog product id to show
pub fn view_product_details(
    catalog: &CatalogState,
    session: &SessionState,
    id: &str,
) -> Result<SessionView, ApiError> {
    debug!(id = %id, "view_product_details command");

    let product = catalog.require(id)?.clone();
    Ok(session.with_session_mut(|s| {
        s.selected_product = Some(product);
        SessionView::from(&*s)
    }))
}

/// Closes the detail overlay.
pub fn close_product_details(session: &SessionState) -> SessionView {
    debug!("close_product_details command");

    session.with_session_mut(|s| {
        s.selected_product = None;
        SessionView::from(&*s)
    })
}

/// Opens the cart drawer.
pub fn open_cart_drawer(session: &SessionState) -> SessionView {
    debug!("open_cart_drawer command");

    session.with_session_mut(|s| {
        s.cart_drawer_open = true;
        SessionView::from(&*s)
    })
}

/// Closes the cart drawer.
pub fn close_cart_drawer(session: &SessionState) -> SessionView {
    debug!("close_cart_drawer command");

    session.with_session_mut(|s| {
        s.cart_drawer_open = false;
        SessionView::from(&*s)
    })
}

/// The detail modal's "Add to Bag" CTA: adds the selected product, closes
/// the modal, and opens the cart drawer, in that order.
///
/// If no product is selected (the modal is not open), this is an accepted
/// no-op on all three states.
pub fn add_to_cart_from_details(cart: &CartState, session: &SessionState) -> CartResponse {
    debug!("add_to_cart_from_details command");

    // Take the selection and flip the drawer under one session lock, then
    // touch the cart. Session first, cart second is the only lock order in
    // the shell.
    let selected = session.with_session_mut(|s| {
        let selected = s.selected_product.take();
        if selected.is_some() {
            s.cart_drawer_open = true;
        }
        selected
    });

    cart.with_cart_mut(|c| {
        if let Some(product) = &selected {
            c.add(product);
        }
        CartResponse::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
