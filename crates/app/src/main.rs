//! Scripted storefront run: browse the builtin catalog, fill a cart, and
//! print the messaging handoff link a UI would open.

use petalcart_catalog::CategorySelector;
use petalcart_core::StoreConfig;
use petalcart_session::StorefrontSession;

fn main() -> anyhow::Result<()> {
    petalcart_observability::init();

    let mut config = StoreConfig::default();
    if let Ok(merchant) = std::env::var("PETALCART_MERCHANT") {
        config = config.with_merchant_id(merchant);
    } else {
        tracing::warn!("PETALCART_MERCHANT not set; using the default merchant id");
    }

    let mut session = StorefrontSession::builtin(config)?;
    tracing::info!(
        products = session.catalog().len(),
        "catalog loaded"
    );

    session.set_category(CategorySelector::only("Roses"));
    let view = session.browse();
    tracing::info!(
        matches = view.total_items,
        pages = view.total_pages,
        "filtered to roses"
    );

    for item in view.items.iter().take(2) {
        session.add_to_cart(item.id)?;
    }
    session.open_cart();
    tracing::info!(
        items = session.cart().item_count(),
        total = session.cart().total(),
        "cart ready"
    );

    let handoff = session.checkout()?;
    println!("{}", handoff.url);
    Ok(())
}
