//! The pure filter/sort pipeline for the collection view.
//!
//! [`apply`] is a total function: it never panics and never errors for any
//! catalog or filter state. Malformed or missing product fields degrade to
//! "does not match" — an unresolvable facet label is excluded while that
//! facet has an active selection, and a product without a price never matches
//! the price stage.
//!
//! Stages run in a fixed order (search, category, material, grade, price,
//! discount). All predicates are independent AND-conditions, so the order
//! does not change the resulting set; it is fixed for predictability.

use crate::facets::{Catalog, LabelIndex};
use crate::filter::{FilterState, SortKey};
use crate::product::Product;

/// Filters and sorts the catalog per the given state, returning an owned
/// result list in display order.
#[must_use]
pub fn apply(catalog: &Catalog, state: &FilterState) -> Vec<Product> {
    let categories = catalog.category_index();
    let materials = catalog.material_index();
    let grades = catalog.grade_index();

    let query = state.search.trim().to_lowercase();

    let mut results: Vec<Product> = catalog
        .products
        .iter()
        .filter(|p| matches_search(p, &query))
        .filter(|p| matches_facet(&p.category, &state.categories, &categories))
        .filter(|p| matches_facet(&p.material, &state.materials, &materials))
        .filter(|p| matches_facet(&p.grade, &state.grades, &grades))
        .filter(|p| p.price.is_some_and(|price| state.price.contains(price)))
        .filter(|p| !state.discount_only || p.is_discounted())
        .cloned()
        .collect();

    sort(&mut results, state.sort);
    results
}

fn matches_search(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(query)
        || product.description.to_lowercase().contains(query)
}

/// A facet stage passes when no ids are selected, or when the product's label
/// resolves to one of the selected ids. An unresolvable label fails the stage
/// whenever the selection is non-empty.
fn matches_facet(
    label: &str,
    selected: &std::collections::BTreeSet<String>,
    index: &LabelIndex,
) -> bool {
    if selected.is_empty() {
        return true;
    }
    index.resolve(label).is_some_and(|id| selected.contains(id))
}

fn sort(results: &mut [Product], key: SortKey) {
    match key {
        // Backend insertion order; nothing to do. `Newest` is also a no-op:
        // the product model has no creation date to sort on.
        SortKey::Featured | SortKey::Newest => {}
        SortKey::PriceLow => {
            results.sort_by(|a, b| cmp_price(a, b));
        }
        SortKey::PriceHigh => {
            results.sort_by(|a, b| match (a.price, b.price) {
                (Some(pa), Some(pb)) => pb.total_cmp(&pa),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }
        SortKey::Discount => {
            results.sort_by(|a, b| {
                let da = a.discount_percentage.unwrap_or(0.0);
                let db = b.discount_percentage.unwrap_or(0.0);
                db.total_cmp(&da)
            });
        }
    }
}

/// Ascending price comparison; unpriced products order last.
fn cmp_price(a: &Product, b: &Product) -> std::cmp::Ordering {
    match (a.price, b.price) {
        (Some(pa), Some(pb)) => pa.total_cmp(&pb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
