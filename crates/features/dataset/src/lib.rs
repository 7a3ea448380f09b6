//! # Country Dataset
//!
//! A fixed, read-only table of the ISO 3166-1 alpha-2 assignments. The table itself is a
//! `static` slice compiled into the binary; a hash index from code to position is built on
//! first access and kept for the lifetime of the process.
//!
//! Enumeration order is ascending by code and never changes between runs.
//!
//! ```rust
//! use geodex_dataset::dataset;
//!
//! let fr = dataset().get("fr").map(|c| c.label);
//! assert_eq!(fr, Some("France"));
//! assert!(dataset().get("ZZ").is_none());
//! ```

pub mod continent;
mod data;

use fxhash::FxHashMap;
use geodex_domain::Country;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

static DATASET: LazyLock<Dataset> = LazyLock::new(|| Dataset::new(data::COUNTRIES));

/// Returns the process-wide dataset, building its index on first use.
#[must_use]
pub fn dataset() -> &'static Dataset {
    &DATASET
}

/// Read-only mapping from alpha-2 code to [`Country`].
pub struct Dataset {
    records: &'static [Country],
    index: FxHashMap<&'static str, usize>,
}

impl Dataset {
    fn new(records: &'static [Country]) -> Self {
        let index: FxHashMap<_, _> =
            records.iter().enumerate().map(|(i, c)| (c.code, i)).collect();
        debug!(records = records.len(), "Country index built");
        Self { records, index }
    }

    /// Looks up a record by alpha-2 code. The code is matched case-insensitively.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&'static Country> {
        let records = self.records;
        if let Some(&i) = self.index.get(code) {
            return records.get(i);
        }
        if code.len() != 2 || !code.is_ascii() {
            return None;
        }
        let upper = code.to_ascii_uppercase();
        self.index.get(upper.as_str()).and_then(|&i| records.get(i))
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Iterates over every record in ascending code order.
    pub fn iter(&self) -> std::slice::Iter<'static, Country> {
        self.records.iter()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &'static [Country] {
        self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset").field("len", &self.records.len()).finish_non_exhaustive()
    }
}

impl IntoIterator for &Dataset {
    type Item = &'static Country;
    type IntoIter = std::slice::Iter<'static, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let ds = dataset();
        assert_eq!(ds.get("de").map(|c| c.alpha3), Some("DEU"));
        assert_eq!(ds.get("De").map(|c| c.alpha3), Some("DEU"));
        assert!(ds.contains("JP"));
    }

    #[test]
    fn unknown_codes_are_absent() {
        let ds = dataset();
        assert!(ds.get("ZZ").is_none());
        assert!(ds.get("").is_none());
        assert!(ds.get("USA").is_none());
        assert!(ds.get("éé").is_none());
    }

    #[test]
    fn index_covers_every_record() {
        let ds = dataset();
        assert_eq!(ds.index.len(), ds.len());
        assert!(!ds.is_empty());
    }
}
