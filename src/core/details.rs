//! Detail panel state.
//!
//! Each selection starts a new request generation. Responses carry the
//! [`RequestTicket`] they were issued under and are dropped unless that ticket
//! still matches the panel's current one, so a slow response for an earlier
//! selection can never overwrite the data of the current one.

use crate::core::error::FetchError;
use crate::models::{Country, CountryStatistics, CountrySummary, DataTab, FetchState};
use crate::utils::format::format_statistic;

/// Identifies the selection a request was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    country_id: String,
    generation: u64,
}

impl RequestTicket {
    pub fn country_id(&self) -> &str {
        &self.country_id
    }
}

/// Which data tab is expanded. At most one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabState {
    active: Option<DataTab>,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            active: Some(DataTab::Statistics),
        }
    }
}

impl TabState {
    pub fn is_open(&self, tab: DataTab) -> bool {
        self.active == Some(tab)
    }

    /// Expand `tab`, collapsing the other one.
    pub fn open(&mut self, tab: DataTab) {
        self.active = Some(tab);
    }

    /// Collapse whichever tab is expanded.
    pub fn close(&mut self) {
        self.active = None;
    }
}

/// Everything the detail panel renders for the current selection.
#[derive(Clone, Debug, Default)]
pub struct DetailsState {
    generation: u64,
    ticket: Option<RequestTicket>,
    pub summary: FetchState<CountrySummary>,
    pub statistics: FetchState<CountryStatistics>,
    pub tabs: TabState,
}

impl DetailsState {
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.ticket.as_ref() == Some(ticket)
    }

    /// Start loading data for `country`; invalidates all earlier tickets.
    ///
    /// A country without an alpha code cannot be looked up, so its statistics
    /// section fails immediately.
    pub fn begin(&mut self, country: &Country) -> RequestTicket {
        self.generation += 1;
        let ticket = RequestTicket {
            country_id: country.id.clone(),
            generation: self.generation,
        };
        self.ticket = Some(ticket.clone());
        self.summary = FetchState::Loading;
        self.statistics = if country.alpha.is_some() {
            FetchState::Loading
        } else {
            FetchState::Failed(format!("no alpha code for '{}'", country.id))
        };
        ticket
    }

    /// Drop the selection and reset the view state, including tabs.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.ticket = None;
        self.summary = FetchState::Idle;
        self.statistics = FetchState::Idle;
        self.tabs = TabState::default();
    }

    /// Apply a summary response. Returns `false` if it was stale.
    pub fn resolve_summary(
        &mut self,
        ticket: &RequestTicket,
        result: Result<CountrySummary, FetchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.summary = settle(result);
        true
    }

    /// Apply a statistics response. Returns `false` if it was stale.
    pub fn resolve_statistics(
        &mut self,
        ticket: &RequestTicket,
        result: Result<CountryStatistics, FetchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.statistics = settle(result);
        true
    }
}

/// Labelled rows of the statistics tab.
pub fn statistics_rows(stats: &CountryStatistics) -> [(&'static str, String); 3] {
    let area = match stats.area {
        Some(area) => format!("{} km²", format_statistic(Some(area))),
        None => format_statistic(None),
    };
    [
        (
            "Capital",
            stats.capital.clone().unwrap_or_else(|| format_statistic(None)),
        ),
        (
            "Population",
            format_statistic(stats.population.map(|p| p as f64)),
        ),
        ("Area", area),
    ]
}

fn settle<T>(result: Result<T, FetchError>) -> FetchState<T> {
    match result {
        Ok(value) => FetchState::Loaded(value),
        Err(e) => FetchState::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(id: &str, name: &str, alpha: Option<&str>) -> Country {
        Country {
            id: id.to_string(),
            name: name.to_string(),
            alpha: alpha.map(String::from),
            rotation: None,
            article: None,
        }
    }

    fn paris() -> CountryStatistics {
        CountryStatistics {
            capital: Some("Paris".into()),
            population: Some(67_000_000),
            area: Some(551_695.0),
        }
    }

    #[test]
    fn test_begin_marks_both_sections_loading() {
        let mut state = DetailsState::default();
        let ticket = state.begin(&country("1", "France", Some("FRA")));
        assert_eq!(ticket.country_id(), "1");
        assert!(state.summary.is_loading());
        assert!(state.statistics.is_loading());
        assert!(state.is_current(&ticket));
    }

    #[test]
    fn test_sections_resolve_independently_in_any_order() {
        let mut state = DetailsState::default();
        let ticket = state.begin(&country("1", "France", Some("FRA")));

        assert!(state.resolve_statistics(&ticket, Ok(paris())));
        assert_eq!(state.statistics.loaded(), Some(&paris()));
        assert!(state.summary.is_loading());

        assert!(state.resolve_summary(&ticket, Err(FetchError::HttpError(404))));
        assert_eq!(state.summary, FetchState::Failed("HTTP error: 404".into()));
        assert_eq!(state.statistics.loaded(), Some(&paris()));
    }

    #[test]
    fn test_stale_responses_are_discarded() {
        let mut state = DetailsState::default();
        let france = state.begin(&country("1", "France", Some("FRA")));
        let spain = state.begin(&country("2", "Spain", Some("ESP")));

        assert!(!state.resolve_statistics(&france, Ok(paris())));
        assert!(!state.resolve_summary(&france, Ok(CountrySummary::default())));
        assert!(state.statistics.is_loading());
        assert!(state.summary.is_loading());

        let madrid = CountryStatistics {
            capital: Some("Madrid".into()),
            ..Default::default()
        };
        assert!(state.resolve_statistics(&spain, Ok(madrid.clone())));
        assert_eq!(state.statistics.loaded(), Some(&madrid));
    }

    #[test]
    fn test_reselecting_same_country_invalidates_old_ticket() {
        let mut state = DetailsState::default();
        let first = state.begin(&country("1", "France", Some("FRA")));
        let second = state.begin(&country("1", "France", Some("FRA")));
        assert_ne!(first, second);
        assert!(!state.resolve_statistics(&first, Ok(paris())));
        assert!(state.resolve_statistics(&second, Ok(paris())));
    }

    #[test]
    fn test_clear_discards_in_flight_and_resets_tabs() {
        let mut state = DetailsState::default();
        let ticket = state.begin(&country("1", "France", Some("FRA")));
        state.tabs.open(DataTab::Summary);

        state.clear();
        assert!(!state.resolve_summary(&ticket, Ok(CountrySummary::default())));
        assert_eq!(state.summary, FetchState::Idle);
        assert!(state.tabs.is_open(DataTab::Statistics));
        assert!(!state.is_current(&ticket));
    }

    #[test]
    fn test_missing_alpha_fails_statistics() {
        let mut state = DetailsState::default();
        state.begin(&country("-99", "Somaliland", None));
        assert!(state.summary.is_loading());
        assert!(matches!(state.statistics, FetchState::Failed(_)));
    }

    #[test]
    fn test_statistics_rows_use_separators() {
        let rows = statistics_rows(&paris());
        let lines: Vec<String> = rows.iter().map(|(label, value)| format!("{label}: {value}")).collect();
        assert_eq!(lines[0], "Capital: Paris");
        assert_eq!(lines[1], "Population: 67,000,000");
        assert!(lines[2].starts_with("Area: 551,695"));
    }

    #[test]
    fn test_statistics_rows_missing_values() {
        let rows = statistics_rows(&CountryStatistics::default());
        assert!(rows.iter().all(|(_, value)| value == "—"));
    }

    #[test]
    fn test_tab_semantics() {
        let mut tabs = TabState::default();
        assert!(tabs.is_open(DataTab::Statistics));
        tabs.open(DataTab::Summary);
        assert!(tabs.is_open(DataTab::Summary));
        assert!(!tabs.is_open(DataTab::Statistics));
        tabs.close();
        assert!(!tabs.is_open(DataTab::Summary));
        assert!(!tabs.is_open(DataTab::Statistics));
        tabs.open(DataTab::Statistics);
        assert!(tabs.is_open(DataTab::Statistics));
    }
}
