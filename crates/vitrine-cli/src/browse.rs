//! The `browse` command: load the catalog, apply filters, print one page.

use vitrine_client::StorefrontClient;
use vitrine_core::{AppConfig, CollectionQuery, Product, SortKey};
use vitrine_session::{CatalogStore, CollectionController, CollectionSettings};

use crate::BrowseArgs;

/// Loads the catalog and prints the requested filtered, sorted page.
///
/// The `--category`/`--search` flags seed the controller exactly as the URL
/// query parameters would; the remaining flags are applied through the same
/// mutators a view would call, followed by a synchronous recompute since
/// there is no interactive burst to debounce.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded. Decoration failures are
/// logged and degrade per the client's best-effort policy.
pub(crate) async fn run_browse(
    config: &AppConfig,
    client: &StorefrontClient,
    args: &BrowseArgs,
) -> anyhow::Result<()> {
    let store = CatalogStore::load(client).await?;
    tracing::debug!(bounds = ?store.price_bounds(), "catalog loaded, applying filters");

    let query = CollectionQuery {
        category: args.category.clone(),
        search: args.search.clone(),
    };
    let mut controller =
        CollectionController::new(&store, &query, CollectionSettings::from_config(config));

    if args.sort != SortKey::Featured {
        controller.set_sort(args.sort);
    }
    if args.discount {
        controller.set_discount_only(true);
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let bounds = store.price_bounds();
        controller.set_price_range(
            args.min_price.unwrap_or(bounds.0),
            args.max_price.unwrap_or(bounds.1),
        );
    }
    controller.recompute_now();
    controller.set_page(args.page);

    let window = controller.page_window();
    println!(
        "{} products match ({} active filters) — page {}/{}",
        controller.results().len(),
        controller.active_filter_count(),
        window.page,
        window.total_pages,
    );

    let marks = match &args.user {
        Some(user) => {
            let cards = client
                .decorate_products(user, controller.visible().to_vec())
                .await;
            cards
                .iter()
                .map(|c| (c.in_cart, c.in_wishlist))
                .collect::<Vec<_>>()
        }
        None => vec![(false, false); controller.visible().len()],
    };

    for (product, (in_cart, in_wishlist)) in controller.visible().iter().zip(marks) {
        println!("{}", format_line(product, in_cart, in_wishlist));
    }

    let projected = controller.url_query().to_query_string();
    if !projected.is_empty() {
        println!("shareable link query: {projected}");
    }

    Ok(())
}

fn format_line(product: &Product, in_cart: bool, in_wishlist: bool) -> String {
    let price = product
        .price
        .map_or_else(|| "unpriced".to_string(), |p| format!("${p:.2}"));
    let mut line = format!(
        "#{:<6} {:<30} {:>10}  {} / {} / {}",
        product.id, product.name, price, product.category, product.material, product.grade
    );
    if let Some(discount) = product.discount_percentage.filter(|d| *d > 0.0) {
        line.push_str(&format!("  [{discount:.0}% off]"));
    }
    if in_cart {
        line.push_str("  [in cart]");
    }
    if in_wishlist {
        line.push_str("  [wishlisted]");
    }
    if let Some(image) = product.primary_image() {
        line.push_str(&format!("\n        {image}"));
    }
    line
}
