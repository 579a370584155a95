//! Session-scoped orchestration for the storefront collection view: the
//! immutable catalog snapshot, the debounced filter controller, and the
//! search submission bus.

pub mod catalog_store;
pub mod collection;
pub mod debounce;
pub mod error;
pub mod search_bus;

pub use catalog_store::CatalogStore;
pub use collection::{CollectionController, CollectionSettings};
pub use debounce::Debouncer;
pub use error::SessionError;
pub use search_bus::{SearchBus, SearchQueryUpdated, SearchSubmit, View};
