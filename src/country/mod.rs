//! Country code lookup
//!
//! Turns the ISO 3166-1 codes NamSor returns for `countryOrigin` into
//! short display names (`US` -> `United States`).

mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Display name used for codes with no table entry
pub const NOT_FOUND: &str = "not found";

/// Uppercased alpha-2 and alpha-3 codes -> short name
static BY_CODE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(table::COUNTRIES.len() * 2);
    for &(alpha2, alpha3, name) in table::COUNTRIES {
        map.insert(alpha2, name);
        map.insert(alpha3, name);
    }
    map
});

/// Lookup from a country code to its short display name
pub trait CountryNames {
    /// Short display name for `code`
    fn short_name(&self, code: &str) -> String;
}

/// Built-in ISO 3166-1 lookup table
#[derive(Debug, Clone)]
pub struct CountryTable {
    unknown: String,
}

impl Default for CountryTable {
    fn default() -> Self {
        Self {
            unknown: NOT_FOUND.to_string(),
        }
    }
}

impl CountryTable {
    /// Create a lookup that reports unknown codes as `"not found"`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name reported for unknown codes
    #[must_use]
    pub fn with_unknown(mut self, unknown: impl Into<String>) -> Self {
        self.unknown = unknown.into();
        self
    }

    /// Look up a code, returning `None` when it is not in the table
    pub fn get(&self, code: &str) -> Option<&'static str> {
        let code = code.trim().to_ascii_uppercase();
        BY_CODE.get(code.as_str()).copied()
    }

    /// Number of countries in the table
    pub fn len(&self) -> usize {
        table::COUNTRIES.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        table::COUNTRIES.is_empty()
    }
}

impl CountryNames for CountryTable {
    fn short_name(&self, code: &str) -> String {
        self.get(code)
            .map_or_else(|| self.unknown.clone(), str::to_string)
    }
}

impl<F> CountryNames for F
where
    F: Fn(&str) -> String,
{
    fn short_name(&self, code: &str) -> String {
        self(code)
    }
}
