//! Whole-catalog load for session startup.

use vitrine_core::Catalog;

use crate::error::ClientError;

use super::StorefrontClient;

impl StorefrontClient {
    /// Fetches products and all three facet tables concurrently and
    /// assembles the session [`Catalog`].
    ///
    /// **All-or-nothing semantics**: if any of the four requests fails, the
    /// whole load fails and nothing is returned. A partial catalog would
    /// render a product grid whose facet filters silently cannot resolve,
    /// so the caller surfaces one blocking error with a retry affordance
    /// instead.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ClientError`] from any of the four requests.
    pub async fn load_catalog(&self) -> Result<Catalog, ClientError> {
        let (products, categories, materials, grades) = futures::try_join!(
            self.fetch_products(None),
            self.fetch_categories(),
            self.fetch_materials(),
            self.fetch_grades(),
        )?;

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            materials = materials.len(),
            grades = grades.len(),
            "catalog loaded"
        );

        Ok(Catalog {
            products,
            categories,
            materials,
            grades,
        })
    }
}
