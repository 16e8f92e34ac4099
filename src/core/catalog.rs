//! Static country catalog.
//!
//! The catalog is embedded at compile time and parsed once on first use.
//! Lookups are a linear scan; the list holds under two hundred entries.

use std::sync::LazyLock;

use crate::config::COUNTRY_CATALOG;
use crate::core::error::SelectionError;
use crate::models::Country;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(COUNTRY_CATALOG).unwrap_or_else(|e| {
        log::error!("embedded country catalog is invalid: {e}");
        Catalog::default()
    })
});

/// Immutable list of countries.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Find the country whose id matches a boundary feature id.
    pub fn find(&self, id: &str) -> Result<&Country, SelectionError> {
        self.countries
            .iter()
            .find(|country| country.id == id)
            .ok_or_else(|| SelectionError::NotFound(id.to_string()))
    }
}

/// The application-wide catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Resolve a clicked feature id against the application catalog.
pub fn find_country(id: &str) -> Result<&'static Country, SelectionError> {
    catalog().find(id)
}

/// Resolve a clicked feature id, logging a warning when it is unknown.
///
/// Unknown ids leave the selection untouched.
pub fn resolve_feature(id: &str) -> Option<&'static Country> {
    match find_country(id) {
        Ok(country) => Some(country),
        Err(e) => {
            log::warn!("ignoring selection: {e}");
            None
        }
    }
}
