//! Facet lookup tables and the immutable session catalog.
//!
//! Products store their category, material, and grade as human-readable
//! labels, while filter selections are made by facet **id**. A [`LabelIndex`]
//! bridges the two. A product label with no entry in its index fails
//! resolution silently, which excludes the product from results whenever that
//! facet dimension has an active filter — a latent gap carried over from the
//! backend contract, where labels and facet tables can drift independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// One selectable facet value: an `(id, label)` pair as served by the
/// backend's categories/materials/grades endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetEntry {
    pub id: String,
    pub label: String,
}

/// Label → facet-id lookup for one facet dimension.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    by_label: HashMap<String, String>,
}

impl LabelIndex {
    /// Builds an index from backend facet entries. If two entries share a
    /// label, the later one wins; the backend treats labels as unique.
    #[must_use]
    pub fn new(entries: &[FacetEntry]) -> Self {
        let by_label = entries
            .iter()
            .map(|e| (e.label.clone(), e.id.clone()))
            .collect();
        Self { by_label }
    }

    /// Resolves a product label to its facet id, or `None` if the label has
    /// no entry.
    #[must_use]
    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.by_label.get(label).map(String::as_str)
    }
}

/// The full, unfiltered catalog snapshot for a session: products in backend
/// order plus the three facet tables. Immutable after construction; a page
/// reload (a fresh load) is the only refresh path.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<FacetEntry>,
    pub materials: Vec<FacetEntry>,
    pub grades: Vec<FacetEntry>,
}

impl Catalog {
    /// Returns `(min, max)` over all priced products, used to seed the price
    /// slider bounds. Products without a price are ignored. An empty or
    /// priceless catalog yields `(0.0, 0.0)`.
    #[must_use]
    pub fn price_bounds(&self) -> (f64, f64) {
        let mut bounds: Option<(f64, f64)> = None;
        for price in self.products.iter().filter_map(|p| p.price) {
            bounds = Some(match bounds {
                None => (price, price),
                Some((min, max)) => (min.min(price), max.max(price)),
            });
        }
        bounds.unwrap_or((0.0, 0.0))
    }

    /// Label index for the category facet.
    #[must_use]
    pub fn category_index(&self) -> LabelIndex {
        LabelIndex::new(&self.categories)
    }

    /// Label index for the material facet.
    #[must_use]
    pub fn material_index(&self) -> LabelIndex {
        LabelIndex::new(&self.materials)
    }

    /// Label index for the grade facet.
    #[must_use]
    pub fn grade_index(&self) -> LabelIndex {
        LabelIndex::new(&self.grades)
    }
}
