//! # Query Engine
//!
//! Filtering, sorting and lookups over the static country dataset.
//!
//! Every operation is total: a missing record is `None` or an empty `Vec`, never an error.
//! Results are freshly allocated per call; the dataset itself is never touched.
//!
//! ```rust
//! use geodex_query::{FilterSortOptions, SortBy, SortOrder, get_all_countries};
//!
//! let europe = get_all_countries(
//!     &FilterSortOptions::new()
//!         .filter(|c| c.continent == "Europe")
//!         .sort(SortBy::Label, SortOrder::Asc),
//! );
//! assert!(europe.iter().all(|c| c.continent == "Europe"));
//! ```

use geodex_dataset::dataset;
use geodex_flags::FlagDeriver;
use geodex_kernel::collation;
use std::cmp::Ordering;
use tracing::trace;

pub use geodex_domain::{
    Collation, Country, CountryWithFlags, Filter, FilterSortOptions, SortBy, SortOrder, SortSpec,
};

/// Returns every record accepted by `options.filter`, ordered by `options.sort`.
///
/// Without a sort the dataset order (ascending code) is kept. The sort is stable: records with
/// equal keys stay in dataset order in both directions, so `desc` is the exact reverse of
/// `asc` only when the keys are unique (as labels and codes are).
#[must_use]
pub fn get_all_countries(options: &FilterSortOptions) -> Vec<&'static Country> {
    let mut countries: Vec<&'static Country> =
        dataset().iter().filter(|c| options.accepts(c)).collect();

    if let Some(sort) = options.sort {
        sort_countries(&mut countries, sort, options.collation);
    }

    trace!(count = countries.len(), sort = ?options.sort, "get_all_countries");
    countries
}

/// [`get_all_countries`] with every record extended by its flag metadata.
#[must_use]
pub fn get_all_countries_with_flags(options: &FilterSortOptions) -> Vec<CountryWithFlags> {
    get_all_countries_with_flags_using(&FlagDeriver::default(), options)
}

/// [`get_all_countries_with_flags`] with URLs formatted by `deriver`.
#[must_use]
pub fn get_all_countries_with_flags_using(
    deriver: &FlagDeriver,
    options: &FilterSortOptions,
) -> Vec<CountryWithFlags> {
    get_all_countries(options).into_iter().map(|c| deriver.with_flags(c)).collect()
}

/// Case-insensitive lookup by ISO alpha-2 code.
#[must_use]
pub fn get_country_by_code(code: &str) -> Option<&'static Country> {
    dataset().get(code)
}

/// Case-insensitive lookup by ISO alpha-3 code.
#[must_use]
pub fn get_country_by_alpha3(alpha3: &str) -> Option<&'static Country> {
    dataset().iter().find(|c| c.alpha3.eq_ignore_ascii_case(alpha3))
}

/// Every record whose dialing prefix equals `phone` exactly, in dataset order.
///
/// `"1"` matches only the records carrying the bare prefix, not `"1-242"` and friends.
#[must_use]
pub fn get_country_by_phone(phone: &str) -> Vec<&'static Country> {
    let matches: Vec<_> = dataset().iter().filter(|c| c.phone == phone).collect();
    trace!(phone, count = matches.len(), "get_country_by_phone");
    matches
}

fn sort_countries(countries: &mut [&'static Country], sort: SortSpec, collation: Collation) {
    countries.sort_by(|a, b| compare_countries(a, b, sort, collation));
}

/// Orders two records the way [`get_all_countries`] does for `sort`.
#[must_use]
pub fn compare_countries(
    a: &Country,
    b: &Country,
    sort: SortSpec,
    collation: Collation,
) -> Ordering {
    let ord = collation::compare(collation, a.field(sort.by), b.field(sort.by));
    match sort.order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}
