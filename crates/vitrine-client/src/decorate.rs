//! Best-effort cart/wishlist decoration for product cards.
//!
//! Membership fetches are isolated per service: a failing cart or wishlist
//! endpoint is logged and degrades to the empty set, so affected products
//! simply show as "not in cart/wishlist" instead of blanking the grid.

use std::collections::HashSet;

use vitrine_core::Product;

use crate::client::StorefrontClient;
use crate::error::ClientError;
use crate::types::{ApiCartItem, ApiWishlistItem};

/// A product annotated with the session user's cart and wishlist membership.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub product: Product,
    pub in_cart: bool,
    pub in_wishlist: bool,
}

impl StorefrontClient {
    /// Fetches the set of product ids in the user's cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for network failures, non-2xx statuses, or an
    /// unparseable response body.
    pub async fn fetch_cart_ids(&self, user_id: &str) -> Result<HashSet<u64>, ClientError> {
        let url = self.endpoint_url(&format!("users/{user_id}/cart"))?;
        let rows: Vec<ApiCartItem> = self.get_json(url.as_str(), "cart membership").await?;
        Ok(rows.into_iter().map(|r| r.product_id).collect())
    }

    /// Fetches the set of product ids on the user's wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for network failures, non-2xx statuses, or an
    /// unparseable response body.
    pub async fn fetch_wishlist_ids(&self, user_id: &str) -> Result<HashSet<u64>, ClientError> {
        let url = self.endpoint_url(&format!("users/{user_id}/wishlist"))?;
        let rows: Vec<ApiWishlistItem> =
            self.get_json(url.as_str(), "wishlist membership").await?;
        Ok(rows.into_iter().map(|r| r.product_id).collect())
    }

    /// Annotates `products` with the user's cart and wishlist membership.
    ///
    /// The two membership fetches run concurrently and individually degrade:
    /// a failure is logged and treated as an empty set rather than
    /// propagated, so decoration never fails catalog rendering.
    pub async fn decorate_products(
        &self,
        user_id: &str,
        products: Vec<Product>,
    ) -> Vec<ProductCard> {
        let (cart, wishlist) = tokio::join!(
            self.fetch_cart_ids(user_id),
            self.fetch_wishlist_ids(user_id),
        );

        let cart = cart.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "cart membership fetch failed — decorating as empty");
            HashSet::new()
        });
        let wishlist = wishlist.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "wishlist membership fetch failed — decorating as empty");
            HashSet::new()
        });

        products
            .into_iter()
            .map(|product| {
                let in_cart = cart.contains(&product.id);
                let in_wishlist = wishlist.contains(&product.id);
                ProductCard {
                    product,
                    in_cart,
                    in_wishlist,
                }
            })
            .collect()
    }
}
