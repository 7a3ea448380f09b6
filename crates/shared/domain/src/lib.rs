//! # Domain Models
//!
//! This crate contains the pure country types shared by every other crate in the workspace,
//! with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or heavy logic, just data and simple helpers.
//!
//! * [`country`]: [`Country`], [`Currency`] and the derived [`CountryWithFlags`].
//! * [`query`]: filter/sort descriptors consumed by the query engine.
//! * [`config`]: deserializable runtime settings.

pub mod config;
pub mod country;
pub mod query;

pub use country::{Country, CountryWithFlags, Currency};
pub use query::{Collation, Filter, FilterSortOptions, SortBy, SortOrder, SortSpec};
