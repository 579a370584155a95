use thiserror::Error;

use vitrine_client::ClientError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The whole-catalog load failed; no partial catalog is kept. Retrying
    /// means calling [`crate::CatalogStore::load`] again.
    #[error("catalog load failed: {0}")]
    CatalogLoad(#[from] ClientError),
}
