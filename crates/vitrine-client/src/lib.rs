pub mod client;
pub mod decorate;
pub mod error;
mod retry;
pub mod types;

pub use client::StorefrontClient;
pub use decorate::ProductCard;
pub use error::ClientError;
pub use types::{ApiFacetEntry, ApiProduct};
