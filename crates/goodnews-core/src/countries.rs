//! Static ISO country code table used for query construction and display.

use serde::Serialize;

/// Country used when a request carries no usable code.
pub const DEFAULT_COUNTRY: &str = "us";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "us", name: "United States" },
    Country { code: "gb", name: "United Kingdom" },
    Country { code: "ca", name: "Canada" },
    Country { code: "au", name: "Australia" },
    Country { code: "de", name: "Germany" },
    Country { code: "fr", name: "France" },
    Country { code: "it", name: "Italy" },
    Country { code: "es", name: "Spain" },
    Country { code: "nl", name: "Netherlands" },
    Country { code: "se", name: "Sweden" },
    Country { code: "no", name: "Norway" },
    Country { code: "jp", name: "Japan" },
    Country { code: "kr", name: "South Korea" },
    Country { code: "sg", name: "Singapore" },
    Country { code: "bg", name: "Bulgaria" },
];

/// Resolve a country code to its display name.
///
/// Lookup ignores case and surrounding whitespace. Codes missing from
/// [`COUNTRIES`] are returned unchanged.
#[must_use]
pub fn resolve_country(code: &str) -> String {
    let needle = code.trim();
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(needle))
        .map_or_else(|| code.to_string(), |c| c.name.to_string())
}
