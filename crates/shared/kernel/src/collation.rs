//! # String Collation
//!
//! Sorting compares strings under one of two pinned collations, so results never depend on
//! the host locale:
//!
//! - [`Collation::Ordinal`]: Unicode code-point order.
//! - [`Collation::Natural`]: strings are decomposed (NFD), combining marks are dropped and
//!   the remaining characters are lowercased. These primary keys are compared first; when
//!   they are equal the original strings are compared by code point. `"Curaçao"` therefore
//!   sorts between `"Cuba"` and `"Cyprus"` and `"Åland Islands"` before `"Albania"`.
//!
//! Both collations are total orders: `compare(a, b) == Equal` only when `a == b`.

use crate::domain::Collation;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares two strings under the given collation.
#[must_use]
pub fn compare(collation: Collation, a: &str, b: &str) -> Ordering {
    match collation {
        Collation::Ordinal => a.cmp(b),
        Collation::Natural => primary(a).cmp(primary(b)).then_with(|| a.cmp(b)),
    }
}

/// Characters that take part in the primary (accent- and case-insensitive) comparison.
fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn natural_ignores_accents_and_case_first() {
        assert_eq!(compare(Collation::Natural, "Curaçao", "Cuba"), Ordering::Greater);
        assert_eq!(compare(Collation::Natural, "Curaçao", "Cyprus"), Ordering::Less);
        assert_eq!(compare(Collation::Natural, "côte", "cote"), Ordering::Greater);
        assert_eq!(compare(Collation::Natural, "france", "Germany"), Ordering::Less);
    }

    #[test]
    fn ordinal_is_code_point_order() {
        assert_eq!(compare(Collation::Ordinal, "france", "Germany"), Ordering::Greater);
        assert_eq!(compare(Collation::Ordinal, "Zambia", "Åland Islands"), Ordering::Less);
    }

    proptest! {
        #[test]
        fn natural_is_antisymmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(
                compare(Collation::Natural, &a, &b),
                compare(Collation::Natural, &b, &a).reverse()
            );
        }

        #[test]
        fn equal_only_for_identical_strings(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            let equal = compare(Collation::Natural, &a, &b) == Ordering::Equal;
            prop_assert_eq!(equal, a == b);
        }
    }
}
