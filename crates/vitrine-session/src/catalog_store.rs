//! The immutable per-session catalog snapshot.

use std::sync::Arc;

use vitrine_client::StorefrontClient;
use vitrine_core::Catalog;

use crate::error::SessionError;

/// Read-only session cache of the full catalog plus its derived price bounds.
///
/// Loaded once at session start; many view fragments read it concurrently
/// through the shared `Arc` and nothing mutates it afterward, so no locking
/// discipline is needed. There is no automatic refresh: the catalog is small
/// and changes infrequently, so a fresh [`CatalogStore::load`] (the page
/// reload path) is the only way to pick up new data, and also serves as the
/// retry affordance after a failed load.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Arc<Catalog>,
    price_bounds: (f64, f64),
}

impl CatalogStore {
    /// Fetches the catalog via [`StorefrontClient::load_catalog`] and derives
    /// the price bounds that seed the filter state's price slider.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CatalogLoad`] if any of the four backend
    /// collections fails to load; no partial catalog is kept.
    pub async fn load(client: &StorefrontClient) -> Result<Self, SessionError> {
        let catalog = client.load_catalog().await?;
        let store = Self::from_catalog(catalog);
        tracing::info!(
            products = store.catalog.products.len(),
            min_price = store.price_bounds.0,
            max_price = store.price_bounds.1,
            "session catalog ready"
        );
        Ok(store)
    }

    /// Wraps an already-fetched catalog; used in tests and by callers that
    /// manage fetching themselves.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let price_bounds = catalog.price_bounds();
        Self {
            catalog: Arc::new(catalog),
            price_bounds,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// `(min, max)` over all priced products, derived once at load.
    #[must_use]
    pub fn price_bounds(&self) -> (f64, f64) {
        self.price_bounds
    }
}
