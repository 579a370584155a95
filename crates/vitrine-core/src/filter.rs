//! User-owned filter state for the collection view.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Backend insertion order; no reordering is applied.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Discount,
    /// Accepted on the wire but currently a no-op: the product model carries
    /// no creation date to sort on. Kept so stored sort selections still
    /// parse; pending a backend field.
    Newest,
}

impl SortKey {
    /// The wire spelling used in query strings and stored preferences.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Discount => "discount",
            SortKey::Newest => "newest",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "discount" => Ok(SortKey::Discount),
            "newest" => Ok(SortKey::Newest),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Inclusive price range, both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Returns `true` if `price` falls within `[min, max]`.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The active filter constraints for the collection view.
///
/// Seeded from the URL query at initial load, mutated by user interaction,
/// and partially projected back to the URL (category and search only; see
/// [`crate::query::CollectionQuery`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected category facet ids.
    pub categories: BTreeSet<String>,
    /// Selected material facet ids.
    pub materials: BTreeSet<String>,
    /// Selected grade facet ids.
    pub grades: BTreeSet<String>,
    pub price: PriceRange,
    /// When set, only products with a positive discount percentage match.
    pub discount_only: bool,
    /// Free-text query matched case-insensitively against name and
    /// description. Empty means no search filter.
    pub search: String,
    pub sort: SortKey,
}

impl FilterState {
    /// An unconstrained state whose price range spans the given catalog
    /// bounds, so the price stage passes every priced product.
    #[must_use]
    pub fn unconstrained(bounds: (f64, f64)) -> Self {
        Self {
            categories: BTreeSet::new(),
            materials: BTreeSet::new(),
            grades: BTreeSet::new(),
            price: PriceRange {
                min: bounds.0,
                max: bounds.1,
            },
            discount_only: false,
            search: String::new(),
            sort: SortKey::Featured,
        }
    }

    /// Number of filter dimensions currently away from their defaults.
    ///
    /// Each dimension counts at most once regardless of how many values are
    /// selected within it: search, categories, materials, grades, discount.
    /// The price range and the sort key do not count; the slider always
    /// holds some range and the sort is an ordering, not a filter.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if !self.categories.is_empty() {
            count += 1;
        }
        if !self.materials.is_empty() {
            count += 1;
        }
        if !self.grades.is_empty() {
            count += 1;
        }
        if self.discount_only {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_roundtrips_wire_spelling() {
        for key in [
            SortKey::Featured,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Discount,
            SortKey::Newest,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn sort_key_rejects_unknown_spelling() {
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn price_range_is_inclusive_both_ends() {
        let range = PriceRange { min: 10.0, max: 20.0 };
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(9.0));
        assert!(!range.contains(21.0));
    }

    #[test]
    fn unconstrained_state_has_no_active_filters() {
        let state = FilterState::unconstrained((0.0, 1000.0));
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn each_dimension_counts_at_most_once() {
        let mut state = FilterState::unconstrained((0.0, 1000.0));
        state.categories.insert("cat-1".to_string());
        state.categories.insert("cat-2".to_string());
        state.search = "moonstone".to_string();
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn narrowed_price_range_does_not_count() {
        // The slider always holds a range; narrowing it filters results but
        // is not a toggleable dimension for the badge count.
        let mut state = FilterState::unconstrained((0.0, 1000.0));
        state.price.max = 500.0;
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn whitespace_only_search_is_not_active() {
        let mut state = FilterState::unconstrained((0.0, 1000.0));
        state.search = "   ".to_string();
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn sort_key_never_counts_as_a_filter() {
        let mut state = FilterState::unconstrained((0.0, 1000.0));
        state.sort = SortKey::PriceHigh;
        assert_eq!(state.active_filter_count(), 0);
    }
}
