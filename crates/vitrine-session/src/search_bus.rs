//! In-process search submission channel.
//!
//! The search box lives in a persistent header while the collection view
//! mounts and unmounts with navigation. Submissions are delivered over an
//! explicit broadcast channel instead of a process-global event target, so
//! an already-mounted collection view re-applies the query in place without
//! a full navigation.

use tokio::sync::broadcast;

use vitrine_core::CollectionQuery;

/// The view currently on screen, from the submitting component's viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Collection,
    Other,
}

/// A search submitted while the collection view was already mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueryUpdated {
    pub query: String,
}

/// Outcome of a search submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSubmit {
    /// Not on the collection view: navigate to this query string, pushing a
    /// history entry.
    Navigate(String),
    /// Already on the collection view: the URL was projected with replace
    /// semantics (no new history entry) and the query was published on the
    /// bus; the mounted view applies it without remounting.
    UpdatedInPlace(String),
}

/// Broadcast bus connecting the header's search box to collection views.
#[derive(Debug, Clone)]
pub struct SearchBus {
    tx: broadcast::Sender<SearchQueryUpdated>,
}

impl Default for SearchBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Subscribes a collection view to in-place search updates.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SearchQueryUpdated> {
        self.tx.subscribe()
    }

    /// Submits a search from the header.
    ///
    /// The query is trimmed before use; clearing amounts to submitting an
    /// empty query, which removes the `search` parameter from the projected
    /// URL. Returns where the caller should take the browser-side routing.
    pub fn submit_search(&self, current_view: View, query: &str) -> SearchSubmit {
        let trimmed = query.trim();
        let projected = CollectionQuery {
            category: None,
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
        .to_query_string();

        match current_view {
            View::Other => SearchSubmit::Navigate(projected),
            View::Collection => {
                // No subscriber just means no collection view is listening
                // yet; the URL projection still happens.
                let _ = self.tx.send(SearchQueryUpdated {
                    query: trimmed.to_string(),
                });
                SearchSubmit::UpdatedInPlace(projected)
            }
        }
    }
}
