//! Storefront REST API response types.
//!
//! ## Observed shape notes
//!
//! ### Prices
//! `price` is a JSON number. It may be `null` or absent on malformed feed
//! rows; we model it as `Option<f64>` and let the filter engine's
//! missing-price policy handle it rather than rejecting the row here.
//! `original_price` and `discount_percentage` are `null` unless the product
//! is on sale.
//!
//! ### Facet labels
//! `category`, `material`, and `grade` arrive as display labels, not ids.
//! The matching id lives in the corresponding facet endpoint's `(id, label)`
//! table; products whose label has no table entry cannot be facet-filtered.
//!
//! ### Optional attributes
//! `gem`, `coating`, and `size` may be absent, `null`, or the empty string.
//! Empty strings are normalized to `None` during conversion.
//!
//! ### Cart / wishlist membership
//! Both endpoints return flat arrays of entries keyed by `product_id`. Cart
//! entries additionally carry a `quantity`; the decoration layer only needs
//! the id set.

use serde::Deserialize;

use vitrine_core::{FacetEntry, Product};

/// One product row from `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ApiProduct {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub gem: Option<String>,
    #[serde(default)]
    pub coating: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl ApiProduct {
    /// Converts the wire row into the domain [`Product`], normalizing empty
    /// optional strings to `None`.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            price: self.price,
            original_price: self.original_price,
            discount_percentage: self.discount_percentage,
            stock: self.stock,
            category: self.category,
            material: self.material,
            grade: self.grade,
            images: self.images,
            gem: self.gem.filter(|s| !s.is_empty()),
            coating: self.coating.filter(|s| !s.is_empty()),
            size: self.size.filter(|s| !s.is_empty()),
        }
    }
}

/// One `(id, label)` row from the categories, materials, or grades endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiFacetEntry {
    pub id: String,
    pub label: String,
}

impl ApiFacetEntry {
    #[must_use]
    pub fn into_entry(self) -> FacetEntry {
        FacetEntry {
            id: self.id,
            label: self.label,
        }
    }
}

/// One cart line from `GET /users/{user_id}/cart`.
#[derive(Debug, Deserialize)]
pub struct ApiCartItem {
    pub product_id: u64,
    #[serde(default)]
    pub quantity: u32,
}

/// One wishlist entry from `GET /users/{user_id}/wishlist`.
#[derive(Debug, Deserialize)]
pub struct ApiWishlistItem {
    pub product_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_product_row() {
        let row: ApiProduct =
            serde_json::from_str(r#"{"id": 7, "name": "Aurora Ring"}"#).expect("valid row");
        assert_eq!(row.id, 7);
        assert!(row.price.is_none());
        assert!(row.images.is_empty());
        assert_eq!(row.stock, 0);
    }

    #[test]
    fn null_price_is_none() {
        let row: ApiProduct =
            serde_json::from_str(r#"{"id": 7, "name": "Aurora Ring", "price": null}"#)
                .expect("valid row");
        assert!(row.price.is_none());
    }

    #[test]
    fn empty_optional_attributes_normalize_to_none() {
        let row: ApiProduct = serde_json::from_str(
            r#"{"id": 7, "name": "Aurora Ring", "gem": "", "coating": "Rhodium", "size": ""}"#,
        )
        .expect("valid row");
        let product = row.into_product();
        assert!(product.gem.is_none());
        assert_eq!(product.coating.as_deref(), Some("Rhodium"));
        assert!(product.size.is_none());
    }

    #[test]
    fn missing_description_becomes_empty_string() {
        let row: ApiProduct =
            serde_json::from_str(r#"{"id": 7, "name": "Aurora Ring"}"#).expect("valid row");
        assert_eq!(row.into_product().description, "");
    }

    #[test]
    fn deserializes_facet_entry() {
        let row: ApiFacetEntry =
            serde_json::from_str(r#"{"id": "cat-rings", "label": "Rings"}"#).expect("valid row");
        let entry = row.into_entry();
        assert_eq!(entry.id, "cat-rings");
        assert_eq!(entry.label, "Rings");
    }

    #[test]
    fn cart_item_quantity_defaults_to_zero() {
        let row: ApiCartItem =
            serde_json::from_str(r#"{"product_id": 9}"#).expect("valid row");
        assert_eq!(row.product_id, 9);
        assert_eq!(row.quantity, 0);
    }
}
