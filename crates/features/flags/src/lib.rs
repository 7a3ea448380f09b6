//! # Flag Deriver
//!
//! Pure functions that turn a two-letter country code into flag metadata:
//!
//! * an emoji made of two Unicode regional-indicator symbols ([`to_flag_emoji`]),
//! * image URLs on the flag CDN ([`to_flag_urls`]),
//! * a [`CountryWithFlags`] record combining both with a [`Country`] ([`with_flags`]).
//!
//! URLs are only formatted, never fetched. [`FlagDeriver`] lets a host point the URLs at a
//! mirror; the free functions use the public CDN.
//!
//! ```rust
//! use geodex_flags::{to_flag_emoji, to_flag_urls};
//!
//! assert_eq!(to_flag_emoji("us"), "\u{1F1FA}\u{1F1F8}");
//! assert_eq!(to_flag_urls("FR").svg, "https://flagcdn.com/fr.svg");
//! ```

use geodex_domain::config::{DEFAULT_CDN_BASE_URL, FlagsConfig};
use geodex_domain::{Country, CountryWithFlags};

/// Distance from an ASCII uppercase letter to its regional-indicator symbol
/// (`'A'` = U+0041 maps to U+1F1E6).
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 0x41;

/// Image URLs for one flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagUrls {
    /// 20px wide PNG.
    pub png20: String,
    /// 40px wide PNG.
    pub png40: String,
    pub svg: String,
    /// `srcset` value pointing at the 40px PNG for 2x displays.
    pub src_set: String,
}

/// Formats flag URLs against a configurable CDN base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDeriver {
    base: String,
}

impl Default for FlagDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_CDN_BASE_URL)
    }
}

impl From<&FlagsConfig> for FlagDeriver {
    fn from(config: &FlagsConfig) -> Self {
        Self::new(&config.cdn_base_url)
    }
}

impl FlagDeriver {
    /// Creates a deriver for `base`. Trailing slashes are trimmed.
    #[must_use]
    pub fn new(base: impl AsRef<str>) -> Self {
        Self { base: base.as_ref().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Flag URLs for `code`. The code is lowercased; no other validation happens.
    #[must_use]
    pub fn urls(&self, code: &str) -> FlagUrls {
        let lower = code.to_lowercase();
        let base = &self.base;
        let png40 = format!("{base}/w40/{lower}.png");
        FlagUrls {
            png20: format!("{base}/w20/{lower}.png"),
            src_set: format!("{png40} 2x"),
            png40,
            svg: format!("{base}/{lower}.svg"),
        }
    }

    /// Extends `country` with its flag emoji and URLs. `country` is left untouched.
    #[must_use]
    pub fn with_flags(&self, country: &Country) -> CountryWithFlags {
        let FlagUrls { png20, png40, svg, src_set } = self.urls(country.code);
        CountryWithFlags {
            country: *country,
            flag_emoji: to_flag_emoji(country.code),
            flag_png20: png20,
            flag_png40: png40,
            flag_svg: svg,
            src_set,
        }
    }
}

/// Converts a two-letter code to its flag emoji.
///
/// The input is uppercased and every character is shifted into the regional-indicator block.
/// Only `A`–`Z` produce meaningful symbols; anything else yields an unspecified string
/// (characters landing outside the Unicode scalar range become U+FFFD). Never panics.
#[must_use]
pub fn to_flag_emoji(code: &str) -> String {
    code.to_uppercase()
        .chars()
        .map(|c| {
            u32::from(c)
                .checked_add(REGIONAL_INDICATOR_OFFSET)
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

/// Flag URLs on the public CDN (`https://flagcdn.com`).
#[must_use]
pub fn to_flag_urls(code: &str) -> FlagUrls {
    FlagDeriver::default().urls(code)
}

/// [`FlagDeriver::with_flags`] on the public CDN.
#[must_use]
pub fn with_flags(country: &Country) -> CountryWithFlags {
    FlagDeriver::default().with_flags(country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_uses_regional_indicators() {
        assert_eq!(to_flag_emoji("US"), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(to_flag_emoji("us"), to_flag_emoji("US"));
        assert_eq!(to_flag_emoji("AZ"), "\u{1F1E6}\u{1F1FF}");
    }

    #[test]
    fn malformed_input_does_not_panic() {
        assert_eq!(to_flag_emoji(""), "");
        // Shifted past the last scalar value.
        assert_eq!(to_flag_emoji("\u{10FFFF}"), "\u{FFFD}");
        assert_eq!(to_flag_emoji("1").chars().count(), 1);
    }

    #[test]
    fn urls_are_lowercased() {
        let urls = to_flag_urls("FR");
        assert_eq!(urls.png20, "https://flagcdn.com/w20/fr.png");
        assert_eq!(urls.png40, "https://flagcdn.com/w40/fr.png");
        assert_eq!(urls.svg, "https://flagcdn.com/fr.svg");
        assert_eq!(urls.src_set, "https://flagcdn.com/w40/fr.png 2x");
    }

    #[test]
    fn custom_base_trims_trailing_slashes() {
        let deriver = FlagDeriver::new("https://cdn.example.org/flags//");
        assert_eq!(deriver.base_url(), "https://cdn.example.org/flags");
        assert_eq!(deriver.urls("de").svg, "https://cdn.example.org/flags/de.svg");
    }
}
