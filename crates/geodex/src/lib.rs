//! Facade crate for the geodex country dataset and its helpers.
//! Re-exports domain/kernel primitives and the feature crates behind one import path.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - `geodex::prelude::*` brings in the types and the query/flag functions.
//! - The `reactive` feature (default) adds [`reactive`] for memoized views.
//!
//! ```rust
//! use geodex::prelude::*;
//!
//! let us = get_country_by_code("us").map(with_flags);
//! assert_eq!(us.map(|c| c.flag_emoji), Some("\u{1F1FA}\u{1F1F8}".to_owned()));
//! ```

pub use geodex_dataset as dataset;
pub use geodex_domain as domain;
pub use geodex_flags as flags;
pub use geodex_kernel as kernel;
pub use geodex_query as query;
#[cfg(feature = "reactive")]
pub use geodex_reactive as reactive;

pub use geodex_domain::{
    Collation, Country, CountryWithFlags, Currency, Filter, FilterSortOptions, SortBy, SortOrder,
    SortSpec,
};
pub use geodex_flags::{FlagDeriver, FlagUrls, to_flag_emoji, to_flag_urls, with_flags};
pub use geodex_query::{
    get_all_countries, get_all_countries_with_flags, get_all_countries_with_flags_using,
    get_country_by_alpha3, get_country_by_code, get_country_by_phone,
};

/// Build-time enabled features (by Cargo feature).
pub const ENABLED: &[&str] = &[
    #[cfg(feature = "reactive")]
    "reactive",
];

#[must_use]
pub fn is_enabled(name: &str) -> bool {
    ENABLED.contains(&name)
}

pub mod prelude {
    pub use crate::{
        Collation, Country, CountryWithFlags, Currency, Filter, FilterSortOptions, FlagDeriver,
        FlagUrls, SortBy, SortOrder, SortSpec, get_all_countries, get_all_countries_with_flags,
        get_country_by_alpha3, get_country_by_code, get_country_by_phone, to_flag_emoji,
        to_flag_urls, with_flags,
    };
    #[cfg(feature = "reactive")]
    pub use geodex_reactive::{
        CountriesHook, CountriesView, Memo, RenderHost, UseCountriesOptions, use_countries,
    };
}
