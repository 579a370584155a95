use serde::{Deserialize, Serialize};

/// A storefront product as served by the catalog backend, held as a read-only
/// session snapshot by the filtering pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Backend numeric product ID.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Current sale price. Optional at the model level so the filter engine
    /// can apply a single documented policy to malformed feeds: a product
    /// without a price never matches the price stage.
    pub price: Option<f64>,
    /// Pre-discount price, if the product is on sale.
    pub original_price: Option<f64>,
    /// Discount as a percentage of `original_price`, e.g. `10.0` for 10% off.
    /// Absent or non-positive means "not discounted".
    pub discount_percentage: Option<f64>,
    /// Units in stock. `0` means sold out; sold-out products still appear in
    /// filtered results.
    pub stock: u32,
    /// Human-readable category label (e.g. `"Rings"`). Resolved to a facet id
    /// through the catalog's category lookup; labels with no lookup entry are
    /// excluded from category-filtered results.
    pub category: String,
    /// Human-readable material label (e.g. `"Sterling Silver"`).
    pub material: String,
    /// Human-readable grade label (e.g. `"AAA"`).
    pub grade: String,
    /// Image URLs in display order; the first is the card thumbnail.
    pub images: Vec<String>,
    pub gem: Option<String>,
    pub coating: Option<String>,
    pub size: Option<String>,
}

impl Product {
    /// Returns `true` if the product carries a positive discount percentage.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount_percentage.is_some_and(|d| d > 0.0)
    }

    /// Returns the primary image URL, if any images were provided.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
