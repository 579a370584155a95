//! Query-string projection of the collection view's shareable filter state.
//!
//! The URL carries only the `category` and `search` parameters; material,
//! grade, price, and discount selections are session-local and never
//! serialized. The query string is read once at initial load to seed a
//! [`FilterState`](crate::filter::FilterState) and written back as a one-way
//! projection after category or search changes. It is not the source of
//! truth at any other time.

use std::collections::BTreeSet;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::filter::FilterState;

/// Everything except unreserved characters is percent-encoded in parameter
/// values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The deep-linkable subset of filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    /// A single preselected category facet id.
    pub category: Option<String>,
    /// A preapplied free-text search query, already decoded.
    pub search: Option<String>,
}

impl CollectionQuery {
    /// Parses a query string (with or without the leading `?`), reading the
    /// `category` and `search` parameters and ignoring everything else.
    ///
    /// Empty and undecodable values are treated as absent; this function
    /// never fails.
    #[must_use]
    pub fn parse(query_string: &str) -> Self {
        let raw = query_string.strip_prefix('?').unwrap_or(query_string);
        let mut parsed = Self::default();
        for pair in raw.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let Some(value) = decode_value(value) else {
                continue;
            };
            match key {
                "category" => parsed.category = Some(value),
                "search" => parsed.search = Some(value),
                _ => {}
            }
        }
        parsed
    }

    /// Projects a [`FilterState`] onto the URL-visible subset.
    ///
    /// Known limitation: the `category` parameter holds a single id, so only
    /// the first selected category survives serialization. Multi-category
    /// selections cannot round-trip through the URL.
    #[must_use]
    pub fn from_filter_state(state: &FilterState) -> Self {
        let search = state.search.trim();
        Self {
            category: state.categories.iter().next().cloned(),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Serializes to a query string, `?` included, with percent-encoded
    /// values. Returns an empty string when no parameter is set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(format!(
                "category={}",
                utf8_percent_encode(category, QUERY_VALUE)
            ));
        }
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", utf8_percent_encode(search, QUERY_VALUE)));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    /// Seeds a fresh filter state from this query, with the price range
    /// spanning the given catalog bounds. A `category` value becomes the
    /// single selected category id; a `search` value seeds the free-text
    /// query so the initial recompute applies it immediately.
    #[must_use]
    pub fn seed_filter_state(&self, bounds: (f64, f64)) -> FilterState {
        let mut state = FilterState::unconstrained(bounds);
        if let Some(category) = &self.category {
            state.categories = BTreeSet::from([category.clone()]);
        }
        if let Some(search) = &self.search {
            state.search.clone_from(search);
        }
        state
    }
}

fn decode_value(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_and_search() {
        let query = CollectionQuery::parse("?category=cat-rings&search=moonstone");
        assert_eq!(query.category.as_deref(), Some("cat-rings"));
        assert_eq!(query.search.as_deref(), Some("moonstone"));
    }

    #[test]
    fn parses_without_leading_question_mark() {
        let query = CollectionQuery::parse("search=moonstone");
        assert_eq!(query.search.as_deref(), Some("moonstone"));
    }

    #[test]
    fn decodes_percent_encoded_search() {
        let query = CollectionQuery::parse("?search=rose%20gold%20ring");
        assert_eq!(query.search.as_deref(), Some("rose gold ring"));
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let query = CollectionQuery::parse("?utm_source=mail&category=cat-1");
        assert_eq!(query.category.as_deref(), Some("cat-1"));
        assert!(query.search.is_none());
    }

    #[test]
    fn empty_values_are_absent() {
        let query = CollectionQuery::parse("?category=&search=");
        assert!(query.category.is_none());
        assert!(query.search.is_none());
    }

    #[test]
    fn empty_string_parses_to_default() {
        assert_eq!(CollectionQuery::parse(""), CollectionQuery::default());
        assert_eq!(CollectionQuery::parse("?"), CollectionQuery::default());
    }

    #[test]
    fn serializes_with_percent_encoding() {
        let query = CollectionQuery {
            category: Some("cat-rings".to_string()),
            search: Some("rose gold".to_string()),
        };
        assert_eq!(
            query.to_query_string(),
            "?category=cat-rings&search=rose%20gold"
        );
    }

    #[test]
    fn serializes_empty_query_to_empty_string() {
        assert_eq!(CollectionQuery::default().to_query_string(), "");
    }

    #[test]
    fn single_category_and_search_round_trip() {
        let raw = "?category=cat-rings&search=moonstone";
        let query = CollectionQuery::parse(raw);
        let state = query.seed_filter_state((0.0, 1000.0));
        let back = CollectionQuery::from_filter_state(&state);
        assert_eq!(back.to_query_string(), raw);
    }

    #[test]
    fn only_first_selected_category_survives_serialization() {
        let mut state = FilterState::unconstrained((0.0, 1000.0));
        state.categories.insert("cat-earrings".to_string());
        state.categories.insert("cat-rings".to_string());
        let query = CollectionQuery::from_filter_state(&state);
        // BTreeSet iteration order; the documented limitation is that only
        // one id can be represented at all.
        assert_eq!(query.category.as_deref(), Some("cat-earrings"));
    }

    #[test]
    fn search_is_trimmed_on_projection() {
        let mut state = FilterState::unconstrained((0.0, 1000.0));
        state.search = "  moonstone  ".to_string();
        let query = CollectionQuery::from_filter_state(&state);
        assert_eq!(query.search.as_deref(), Some("moonstone"));
    }

    #[test]
    fn clearing_search_removes_the_parameter() {
        let mut state = FilterState::unconstrained((0.0, 1000.0));
        state.search = "moonstone".to_string();
        state.categories.insert("cat-1".to_string());
        state.search.clear();
        let query = CollectionQuery::from_filter_state(&state);
        assert_eq!(query.to_query_string(), "?category=cat-1");
    }

    #[test]
    fn seed_applies_price_bounds() {
        let query = CollectionQuery::parse("?category=cat-1");
        let state = query.seed_filter_state((10.0, 90.0));
        assert_eq!(state.price.min, 10.0);
        assert_eq!(state.price.max, 90.0);
        assert!(state.categories.contains("cat-1"));
    }
}
