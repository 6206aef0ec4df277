//! # Storefront Demo Walk
//!
//! Developer tool: stands up the storefront around the bundled demo catalog
//! and walks the core flows, logging every derived view along the way.
//!
//! ## Usage
//! ```bash
//! # Walk the demo flows at INFO
//! cargo run -p lumina-storefront --bin storefront-demo
//!
//! # See one event per command
//! RUST_LOG=lumina_storefront=debug cargo run -p lumina-storefront --bin storefront-demo
//! ```
//!
//! There is no interactive UI here - presentation is the web frontend's
//! job. This binary exists so the engine's behavior can be eyeballed end to
//! end without standing the frontend up.

use tracing::info;

use lumina_core::Money;
use lumina_storefront::state::CatalogState;
use lumina_storefront::{commands, init_tracing, Storefront};

/// Bundled demo supply: the LUMINA lifestyle collection.
const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let catalog = CatalogState::from_json(DEMO_CATALOG)?;
    let store = Storefront::new(catalog);

    info!(
        categories = ?commands::list_categories(&store.catalog),
        "Demo storefront ready"
    );

    // Browse: full grid, then narrow by category, then by search
    let visible = commands::visible_products(&store.catalog, &store.session);
    info!(count = visible.len(), "Full grid");

    commands::set_category(&store.session, "Apparel");
    let visible = commands::visible_products(&store.catalog, &store.session);
    info!(count = visible.len(), "Apparel only");

    commands::set_search_query(&store.session, "blue")?;
    let visible = commands::visible_products(&store.catalog, &store.session);
    for product in &visible {
        info!(
            id = %product.id,
            name = %product.name,
            price = %Money::from_cents(product.price_cents),
            "Apparel + \"blue\""
        );
    }

    commands::clear_filters(&store.session);

    // Bag: add twice to merge, add a second product, clamp, remove
    commands::add_to_cart(&store.catalog, &store.cart, "lum-002")?;
    commands::add_to_cart(&store.catalog, &store.cart, "lum-002")?;
    commands::add_to_cart(&store.catalog, &store.cart, "lum-003")?;
    let bag = commands::get_cart(&store.cart);
    info!(
        items = bag.totals.item_count,
        units = bag.totals.total_quantity,
        total = %Money::from_cents(bag.totals.total_cents),
        "Bag after adds"
    );

    let bag = commands::adjust_cart_quantity(&store.cart, "lum-002", -5);
    info!(
        quantity = bag.items[0].quantity,
        "Stepper past the floor clamps at 1"
    );

    let bag = commands::remove_from_cart(&store.cart, "lum-003");
    info!(
        items = bag.totals.item_count,
        total = %Money::from_cents(bag.totals.total_cents),
        "Bag after removal"
    );

    // Detail overlay: open, then the composite "Add to Bag" CTA
    commands::view_product_details(&store.catalog, &store.session, "lum-004")?;
    let bag = commands::add_to_cart_from_details(&store.cart, &store.session);
    let session = commands::get_session(&store.session);
    info!(
        units = bag.totals.total_quantity,
        drawer_open = session.cart_drawer_open,
        "Added from detail overlay"
    );

    // Assistant collaborator gets the whole catalog, untouched
    let feed = commands::assistant_catalog(&store.catalog);
    info!(count = feed.len(), "Assistant catalog feed");

    Ok(())
}
