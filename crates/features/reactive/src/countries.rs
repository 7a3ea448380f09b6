use crate::memo::Memo;
use geodex_domain::{Country, CountryWithFlags, FilterSortOptions};
use geodex_query::{get_all_countries, get_all_countries_with_flags};
use std::rc::Rc;
use tracing::debug;

/// Inputs of [`use_countries`].
///
/// Equality is input identity: `include_flags`, `sort` and `collation` compare by value, the
/// filter by [`Filter::ptr_eq`](geodex_domain::Filter::ptr_eq). Two separately built filters
/// are never equal even when they wrap the same closure.
#[derive(Debug, Clone, Default)]
pub struct UseCountriesOptions {
    pub include_flags: bool,
    pub query: FilterSortOptions,
}

impl UseCountriesOptions {
    #[must_use]
    pub fn new(query: FilterSortOptions) -> Self {
        Self { include_flags: false, query }
    }

    #[must_use]
    pub const fn include_flags(mut self, include_flags: bool) -> Self {
        self.include_flags = include_flags;
        self
    }
}

impl PartialEq for UseCountriesOptions {
    fn eq(&self, other: &Self) -> bool {
        let same_filter = match (&self.query.filter, &other.query.filter) {
            (None, None) => true,
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false,
        };
        self.include_flags == other.include_flags
            && same_filter
            && self.query.sort == other.query.sort
            && self.query.collation == other.query.collation
    }
}

/// Result of [`use_countries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesView {
    Plain(Vec<&'static Country>),
    WithFlags(Vec<CountryWithFlags>),
}

impl CountriesView {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(v) => v.len(),
            Self::WithFlags(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying country records, whichever variant this is.
    #[must_use]
    pub fn countries(&self) -> impl Iterator<Item = &Country> + '_ {
        let plain: &[&Country] = self.as_plain().unwrap_or_default();
        let flagged = self.as_with_flags().unwrap_or_default();
        plain.iter().copied().chain(flagged.iter().map(|c| &c.country))
    }

    #[must_use]
    pub fn as_plain(&self) -> Option<&[&'static Country]> {
        match self {
            Self::Plain(v) => Some(v),
            Self::WithFlags(_) => None,
        }
    }

    #[must_use]
    pub fn as_with_flags(&self) -> Option<&[CountryWithFlags]> {
        match self {
            Self::WithFlags(v) => Some(v),
            Self::Plain(_) => None,
        }
    }
}

/// Memoized [`get_all_countries`] / [`get_all_countries_with_flags`].
///
/// With inputs equal to the previous call (see [`UseCountriesOptions`]) the previously
/// computed view is returned without recomputation: the returned `Rc` points at the same
/// allocation. Any change recomputes and replaces the cached view.
#[must_use]
pub fn use_countries(
    memo: &Memo<UseCountriesOptions, CountriesView>,
    options: &UseCountriesOptions,
) -> Rc<CountriesView> {
    memo.get_or_compute(options, || {
        debug!(
            include_flags = options.include_flags,
            sort = ?options.query.sort,
            collation = %options.query.collation,
            "Recomputing countries view"
        );
        if options.include_flags {
            CountriesView::WithFlags(get_all_countries_with_flags(&options.query))
        } else {
            CountriesView::Plain(get_all_countries(&options.query))
        }
    })
}
