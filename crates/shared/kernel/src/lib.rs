//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it provides the string collation used for sorting and the
//! layered configuration loader.
//!
//! ## Collation
//! ```rust
//! use geodex_kernel::collation::compare;
//! use geodex_kernel::domain::Collation;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare(Collation::Natural, "Åland Islands", "Albania"), Ordering::Less);
//! assert_eq!(compare(Collation::Ordinal, "Åland Islands", "Albania"), Ordering::Greater);
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use geodex_kernel::config::load_config;
//! use geodex_kernel::domain::config::GeodexConfig;
//!
//! let cfg: GeodexConfig = load_config(Some("geodex.toml")).unwrap();
//! ```

pub mod collation;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use geodex_domain as domain;
