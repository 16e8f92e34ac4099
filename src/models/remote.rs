//! Records returned by the external data services, and the per-section
//! fetch state used by the detail panel.

use serde::{Deserialize, Serialize};

/// Encyclopedia page summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub source: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Basic country statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryStatistics {
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    /// Surface area in km².
    #[serde(default)]
    pub area: Option<f64>,
}

/// State of one independently fetched panel section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// No request issued (no selection).
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Terminal failure; the message is developer-facing.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tolerates_missing_thumbnail() {
        let json = r#"{"title":"France","extract":"France is a country."}"#;
        let summary: CountrySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.title, "France");
        assert!(summary.thumbnail.is_none());
    }

    #[test]
    fn test_statistics_ignores_unknown_fields() {
        let json = r#"{"name":"France","capital":"Paris","population":67000000,"area":551695.0,"region":"Europe"}"#;
        let stats: CountryStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.capital.as_deref(), Some("Paris"));
        assert_eq!(stats.population, Some(67_000_000));
        assert_eq!(stats.area, Some(551_695.0));
    }

    #[test]
    fn test_fetch_state_accessors() {
        let state: FetchState<u32> = FetchState::Loaded(7);
        assert_eq!(state.loaded(), Some(&7));
        assert!(!state.is_loading());
        assert!(FetchState::<u32>::Loading.is_loading());
        assert_eq!(FetchState::<u32>::Failed("x".into()).loaded(), None);
    }
}
