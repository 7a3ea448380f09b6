use crate::query::SortBy;
use serde::Serialize;
use std::ops::Deref;

/// Currency in use by a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    /// ISO 4217 alphabetic code (e.g. `EUR`).
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// A single record of the static country dataset.
///
/// Records are `'static` and `Copy`: the dataset hands out references into a table that lives
/// for the whole process, and copying a record only copies a handful of string slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, uppercase. Unique key of the dataset.
    pub code: &'static str,
    /// ISO 3166-1 alpha-3 code, uppercase. Unique.
    pub alpha3: &'static str,
    /// English short name.
    pub label: &'static str,
    /// International dialing prefix without the leading `+` (e.g. `"44"`, `"1-242"`).
    pub phone: &'static str,
    pub capital: &'static str,
    pub continent: &'static str,
    pub currency: Currency,
    /// IANA time zone identifiers, primary zone first.
    pub timezones: &'static [&'static str],
}

impl Country {
    /// Returns the value of the field selected by `by`.
    #[must_use]
    pub const fn field(&self, by: SortBy) -> &'static str {
        match by {
            SortBy::Label => self.label,
            SortBy::Code => self.code,
            SortBy::Phone => self.phone,
            SortBy::Continent => self.continent,
        }
    }
}

/// A [`Country`] extended with flag metadata derived from its code.
///
/// Never stored: built on demand by the flag deriver. Serializes flat, i.e. the flag fields sit
/// next to the country fields (`flagEmoji`, `flagPng20`, `flagPng40`, `flagSvg`, `srcSet`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryWithFlags {
    #[serde(flatten)]
    pub country: Country,
    /// Two regional-indicator symbols.
    pub flag_emoji: String,
    /// 20px wide PNG.
    pub flag_png20: String,
    /// 40px wide PNG.
    pub flag_png40: String,
    pub flag_svg: String,
    /// `srcset` attribute value for 2x-density displays.
    pub src_set: String,
}

impl Deref for CountryWithFlags {
    type Target = Country;

    fn deref(&self) -> &Self::Target {
        &self.country
    }
}

impl AsRef<Country> for CountryWithFlags {
    fn as_ref(&self) -> &Country {
        &self.country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Country = Country {
        code: "FR",
        alpha3: "FRA",
        label: "France",
        phone: "33",
        capital: "Paris",
        continent: "Europe",
        currency: Currency { code: "EUR", symbol: "€", name: "Euro" },
        timezones: &["Europe/Paris"],
    };

    #[test]
    fn field_selects_sort_column() {
        assert_eq!(SAMPLE.field(SortBy::Label), "France");
        assert_eq!(SAMPLE.field(SortBy::Code), "FR");
        assert_eq!(SAMPLE.field(SortBy::Phone), "33");
        assert_eq!(SAMPLE.field(SortBy::Continent), "Europe");
    }

    #[test]
    fn with_flags_derefs_to_country() {
        let with_flags = CountryWithFlags {
            country: SAMPLE,
            flag_emoji: "🇫🇷".to_owned(),
            flag_png20: String::new(),
            flag_png40: String::new(),
            flag_svg: String::new(),
            src_set: String::new(),
        };
        assert_eq!(with_flags.label, "France");
        assert_eq!(with_flags.as_ref(), &SAMPLE);
    }
}
