//! # Reactive Accessor
//!
//! Adapts the query engine to a host that re-renders: the same inputs give back the very
//! same result allocation, so the host can compare results by pointer and skip work.
//!
//! * [`Memo`]: a single-slot cache keyed by the latest inputs.
//! * [`use_countries`]: the memoized query.
//! * [`CountriesHook`]: owns the options and the memo slot, and asks a [`RenderHost`] to
//!   re-render when the options change.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); a memo belongs to one render context.

mod countries;
mod hook;
mod memo;

pub use countries::{CountriesView, UseCountriesOptions, use_countries};
pub use hook::{CountriesHook, RenderHost};
pub use memo::Memo;
