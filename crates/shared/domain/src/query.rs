//! Filter and sort descriptors for dataset queries.

use crate::country::Country;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Column a query can be sorted by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortBy {
    Label,
    Code,
    Phone,
    Continent,
}

/// Sort direction.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// A sort request: which column and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub by: SortBy,
    pub order: SortOrder,
}

impl SortSpec {
    #[must_use]
    pub const fn new(by: SortBy, order: SortOrder) -> Self {
        Self { by, order }
    }

    #[must_use]
    pub const fn asc(by: SortBy) -> Self {
        Self::new(by, SortOrder::Asc)
    }

    #[must_use]
    pub const fn desc(by: SortBy) -> Self {
        Self::new(by, SortOrder::Desc)
    }
}

/// String comparison used when sorting.
///
/// * `Natural` compares accent-stripped, case-folded text first and falls back to code-point
///   order on ties, which gives the same result on every host.
/// * `Ordinal` is plain Unicode code-point order.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Collation {
    #[default]
    Natural,
    Ordinal,
}

/// A shared predicate over [`Country`] records.
///
/// Cloning a `Filter` shares the same predicate. Two filters are the *same* filter only when
/// they share the predicate allocation ([`Filter::ptr_eq`]); two separately built filters
/// wrapping identical closures are different filters.
#[derive(Clone)]
pub struct Filter(Arc<dyn Fn(&Country) -> bool + Send + Sync>);

impl Filter {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Country) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Evaluates the predicate.
    #[must_use]
    pub fn matches(&self, country: &Country) -> bool {
        (self.0)(country)
    }

    /// Returns `true` when both filters share the same predicate allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter").field(&Arc::as_ptr(&self.0).cast::<()>()).finish()
    }
}

/// Options accepted by the query engine.
///
/// The default keeps every record, preserves dataset order and compares with
/// [`Collation::Natural`].
///
/// ```rust
/// use geodex_domain::{FilterSortOptions, SortBy, SortOrder};
///
/// let options = FilterSortOptions::new()
///     .filter(|c| c.continent == "Europe")
///     .sort(SortBy::Label, SortOrder::Desc);
/// assert!(options.filter.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterSortOptions {
    pub filter: Option<Filter>,
    pub sort: Option<SortSpec>,
    pub collation: Collation,
}

impl FilterSortOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the records for which `predicate` returns `true`.
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&Country) -> bool + Send + Sync + 'static,
    {
        self.with_filter(Filter::new(predicate))
    }

    /// Uses an existing (possibly shared) filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn sort(mut self, by: SortBy, order: SortOrder) -> Self {
        self.sort = Some(SortSpec::new(by, order));
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    /// Returns `true` when the filter (if any) accepts `country`.
    #[must_use]
    pub fn accepts(&self, country: &Country) -> bool {
        self.filter.as_ref().is_none_or(|f| f.matches(country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn sort_by_parses_case_insensitively() {
        assert_eq!(SortBy::from_str("label").ok(), Some(SortBy::Label));
        assert_eq!(SortBy::from_str("CONTINENT").ok(), Some(SortBy::Continent));
        assert!(SortBy::from_str("capital").is_err());
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }

    #[test]
    fn every_variant_round_trips_through_its_name() {
        for by in SortBy::iter() {
            let name: &'static str = by.into();
            assert_eq!(SortBy::from_str(name).ok(), Some(by));
        }
        let names: Vec<&'static str> = Collation::iter().map(Into::into).collect();
        assert_eq!(names, ["natural", "ordinal"]);
    }

    #[test]
    fn cloned_filter_shares_identity() {
        let a = Filter::new(|c| c.code == "FR");
        let b = a.clone();
        let c = Filter::new(|c| c.code == "FR");
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn default_options_accept_everything() {
        let options = FilterSortOptions::default();
        assert!(options.filter.is_none());
        assert!(options.sort.is_none());
        assert_eq!(options.collation, Collation::Natural);
    }
}
