//! Search and region filtering over the loaded country list.
//!
//! Everything here is a pure function of the item list, the query and the
//! region filter. Nothing is memoized; callers re-run [`execute_search`]
//! on every render.

use crate::model::Country;
use serde::Deserialize;
use std::collections::HashSet;

// ===== SearchScope =====

/// Which fields the free-text query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Every field name that appears in any loaded record.
    #[default]
    All,
    /// The declared [`Country::CORE_FIELDS`] only.
    Core,
}

impl SearchScope {
    /// Parse a config/CLI value. Case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(SearchScope::All),
            "core" => Some(SearchScope::Core),
            _ => None,
        }
    }
}

// ===== SearchFields =====

/// Explicit, ordered list of field names the query is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFields(Vec<String>);

impl SearchFields {
    /// Union of every record's keys, de-duplicated in first-seen order.
    ///
    /// A record may lack fields its peers have; lookups of those fields
    /// simply don't match (see [`matches`]).
    pub fn from_records(items: &[Country]) -> Self {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for item in items {
            for name in item.field_names() {
                if seen.insert(name) {
                    names.push(name.to_string());
                }
            }
        }
        Self(names)
    }

    /// The declared core field list.
    pub fn core() -> Self {
        Self(Country::CORE_FIELDS.iter().map(|s| s.to_string()).collect())
    }

    /// Resolve the field list for a scope.
    pub fn for_scope(scope: SearchScope, items: &[Country]) -> Self {
        match scope {
            SearchScope::All => Self::from_records(items),
            SearchScope::Core => Self::core(),
        }
    }

    /// Field names in match order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field is searchable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ===== Regions =====

/// Distinct region values in first-seen order.
///
/// Records with no region (or an empty one) contribute nothing: selecting
/// an empty region is the same as "all regions".
pub fn distinct_regions(items: &[Country]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(Country::region)
        .filter(|region| !region.is_empty())
        .filter(|region| seen.insert(*region))
        .map(str::to_string)
        .collect()
}

// ===== Predicate =====

/// Whether a single record passes the region filter and the query.
///
/// - Region: the record's region must contain `region_filter` as a
///   substring. An empty filter admits everything, including records with
///   no region at all.
/// - Query: some field in `fields` must have a text form that contains the
///   lowercased query. An empty query admits everything. Missing and
///   `null` fields never match.
///
/// `query_lower` must already be lowercased.
pub fn matches(item: &Country, fields: &SearchFields, query_lower: &str, region_filter: &str) -> bool {
    let region_ok = region_filter.is_empty()
        || item
            .region()
            .is_some_and(|region| region.contains(region_filter));
    if !region_ok {
        return false;
    }

    if query_lower.is_empty() {
        return true;
    }

    fields.iter().any(|field| {
        item.search_text(field)
            .is_some_and(|text| text.contains(query_lower))
    })
}

// ===== Search Execution =====

/// Filter `items` by region and free-text query, preserving order.
pub fn execute_search<'a>(
    items: &'a [Country],
    fields: &SearchFields,
    query: &str,
    region_filter: &str,
) -> Vec<&'a Country> {
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, fields, &query_lower, region_filter))
        .collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
