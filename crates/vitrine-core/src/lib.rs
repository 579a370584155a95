//! Domain types and the pure filter/sort/paginate pipeline for the vitrine
//! storefront client. No I/O lives in this crate; everything here is
//! synchronous and deterministic.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod engine;
pub mod facets;
pub mod filter;
pub mod page;
pub mod product;
pub mod query;

pub use app_config::{AppConfig, Environment};
pub use facets::{Catalog, FacetEntry, LabelIndex};
pub use filter::{FilterState, PriceRange, SortKey};
pub use page::{page_slice, page_window, PageWindow, PAGE_SIZE};
pub use product::Product;
pub use query::CollectionQuery;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
