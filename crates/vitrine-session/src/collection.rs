//! The collection view's state machine: filter state, debounced
//! recomputation, and page windowing over the filtered results.
//!
//! Derived values (visible slice, page window, active filter count, URL
//! projection) are recomputed on demand from the current state; nothing is
//! cached where it could drift. The only held result is the filtered list
//! itself, which is swapped wholesale by [`CollectionController::commit`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use vitrine_core::{
    engine, page_slice, page_window, AppConfig, Catalog, CollectionQuery, FilterState, PageWindow,
    Product, SortKey, PAGE_SIZE,
};

use crate::catalog_store::CatalogStore;
use crate::debounce::Debouncer;
use crate::search_bus::SearchQueryUpdated;

/// Tunables for a collection session.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSettings {
    pub page_size: usize,
    /// Quiet window after the last filter change before recomputing.
    pub debounce: Duration,
    /// Delay before recomputed results are swapped in; drives the
    /// loading-indicator transition and has no semantic effect.
    pub reveal_delay: Duration,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            debounce: Duration::from_millis(250),
            reveal_delay: Duration::from_millis(100),
        }
    }
}

impl CollectionSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            debounce: Duration::from_millis(config.debounce_ms),
            reveal_delay: Duration::from_millis(config.reveal_delay_ms),
        }
    }
}

/// Owns the collection view's filter state and filtered results.
///
/// Every filter mutator resets the current page to 1 and restarts the
/// debounce window; only the final state after a burst of changes is
/// recomputed. The catalog itself is immutable shared state and is never
/// touched by the controller.
#[derive(Debug)]
pub struct CollectionController {
    catalog: Arc<Catalog>,
    bounds: (f64, f64),
    state: FilterState,
    page: usize,
    results: Vec<Product>,
    refreshing: bool,
    debouncer: Debouncer,
    wake: mpsc::UnboundedReceiver<()>,
    settings: CollectionSettings,
}

impl CollectionController {
    /// Builds a controller over the loaded catalog, seeding the filter state
    /// from the URL query and computing the initial results synchronously so
    /// a deep-linked `search`/`category` is applied on first paint.
    #[must_use]
    pub fn new(store: &CatalogStore, query: &CollectionQuery, settings: CollectionSettings) -> Self {
        let bounds = store.price_bounds();
        let state = query.seed_filter_state(bounds);
        let (debouncer, wake) = Debouncer::new(settings.debounce);
        let mut controller = Self {
            catalog: store.catalog(),
            bounds,
            state,
            page: 1,
            results: Vec::new(),
            refreshing: false,
            debouncer,
            wake,
            settings,
        };
        controller.recompute_now();
        controller
    }

    // --- filter mutators -------------------------------------------------

    pub fn set_search(&mut self, query: &str) {
        self.state.search = query.to_string();
        self.on_filter_change();
    }

    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.state.categories, id);
        self.on_filter_change();
    }

    pub fn toggle_material(&mut self, id: &str) {
        toggle(&mut self.state.materials, id);
        self.on_filter_change();
    }

    pub fn toggle_grade(&mut self, id: &str) {
        toggle(&mut self.state.grades, id);
        self.on_filter_change();
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.state.price.min = min;
        self.state.price.max = max;
        self.on_filter_change();
    }

    pub fn set_discount_only(&mut self, enabled: bool) {
        self.state.discount_only = enabled;
        self.on_filter_change();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort = key;
        self.on_filter_change();
    }

    /// Clears every constraint back to the unconstrained state over the
    /// catalog's price bounds.
    pub fn clear_filters(&mut self) {
        self.state = FilterState::unconstrained(self.bounds);
        self.on_filter_change();
    }

    fn on_filter_change(&mut self) {
        // Viewing page 5 of a result set that now has 1 page is the bug this
        // reset prevents.
        self.page = 1;
        self.refreshing = true;
        self.debouncer.schedule();
    }

    // --- recomputation ---------------------------------------------------

    /// Waits out the debounce window, then recomputes and swaps the results
    /// after the reveal delay. Intended as the driver's steady-state await.
    pub async fn refresh(&mut self) {
        if self.wake.recv().await.is_some() {
            self.commit().await;
        }
    }

    /// Recomputes from the current state and swaps the results in after the
    /// reveal delay.
    pub async fn commit(&mut self) {
        let results = engine::apply(&self.catalog, &self.state);
        tokio::time::sleep(self.settings.reveal_delay).await;
        self.results = results;
        self.refreshing = false;
    }

    /// Synchronous recompute used at initialization and for search-bus
    /// updates, where the result must be visible without a debounce cycle.
    /// Cancels and drains any pending debounced wake so the burst does not
    /// recompute a second time.
    pub fn recompute_now(&mut self) {
        self.debouncer.cancel();
        while self.wake.try_recv().is_ok() {}
        self.results = engine::apply(&self.catalog, &self.state);
        self.refreshing = false;
    }

    /// Applies an in-place search update from the bus (a submission made
    /// while this view was already mounted) without a navigation.
    pub fn apply_search_update(&mut self, update: &SearchQueryUpdated) {
        self.state.search.clone_from(&update.query);
        self.page = 1;
        self.recompute_now();
    }

    // --- derived views ---------------------------------------------------

    /// Requests a page, clamped into the valid range for the current
    /// results. Paging does not trigger recomputation.
    pub fn set_page(&mut self, requested: usize) {
        self.page = self
            .page_window_for(requested)
            .page;
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// The window actually shown for the current page and result count.
    #[must_use]
    pub fn page_window(&self) -> PageWindow {
        self.page_window_for(self.page)
    }

    fn page_window_for(&self, requested: usize) -> PageWindow {
        page_window(self.results.len(), self.settings.page_size, requested)
    }

    /// The visible slice of the filtered results for the current page.
    #[must_use]
    pub fn visible(&self) -> &[Product] {
        page_slice(&self.results, self.settings.page_size, self.page)
    }

    /// The full filtered, sorted result list.
    #[must_use]
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    /// `true` between a filter change and the commit of its recomputation;
    /// drives the loading indicator.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    #[must_use]
    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.state.active_filter_count()
    }

    /// One-way URL projection of the shareable state subset, written by the
    /// caller after category or search changes.
    #[must_use]
    pub fn url_query(&self) -> CollectionQuery {
        CollectionQuery::from_filter_state(&self.state)
    }
}

fn toggle(set: &mut std::collections::BTreeSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod tests;
