//! Point lookups over the dataset store

use std::collections::BTreeSet;

use crate::services::DatasetStore;
use crate::types::{CountryStats, CupError, Result, TournamentResult};

/// Read-only query service borrowing a [`DatasetStore`]
#[derive(Debug, Clone, Copy)]
pub struct QueryService<'a> {
    store: &'a DatasetStore,
}

impl<'a> QueryService<'a> {
    pub fn new(store: &'a DatasetStore) -> Self {
        Self { store }
    }

    /// Finals history of one country (exact match on the canonical name).
    /// Unknown countries yield an empty result rather than an error.
    pub fn stats_for_country(&self, country: &str) -> CountryStats {
        let mut stats = CountryStats::default();

        for record in self.store.records() {
            if record.winner == country {
                stats.win_years.push(record.year);
            }
            if record.runner_up == country {
                stats.runner_up_years.push(record.year);
            }
        }

        stats.win_years.sort_unstable();
        stats.runner_up_years.sort_unstable();
        stats.win_count = stats.win_years.len() as u32;
        stats.runner_up_count = stats.runner_up_years.len() as u32;
        stats.total_finals = stats.win_count + stats.runner_up_count;
        stats
    }

    /// The final played in `year`
    pub fn result_for_year(&self, year: u16) -> Result<TournamentResult> {
        self.store
            .records()
            .iter()
            .find(|r| r.year == year)
            .map(TournamentResult::from)
            .ok_or_else(|| {
                tracing::debug!("No edition in {}", year);
                CupError::NotFound(year)
            })
    }

    /// Distinct winners, sorted by name
    pub fn list_winners(&self) -> Vec<String> {
        self.store
            .records()
            .iter()
            .map(|r| r.winner.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// All edition years, newest first
    pub fn list_years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.store.records().iter().map(|r| r.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DatasetStore {
        DatasetStore::builtin().unwrap()
    }

    // ========== stats_for_country() ==========

    #[test]
    fn test_germany_includes_west_germany_titles() {
        let store = store();
        let stats = QueryService::new(&store).stats_for_country("Germany");

        assert_eq!(stats.win_count, 4);
        assert_eq!(stats.win_years, vec![1954, 1974, 1990, 2014]);
        assert_eq!(stats.runner_up_years, vec![1966, 1982, 1986, 2002]);
        assert_eq!(stats.total_finals, 8);
    }

    #[test]
    fn test_czech_republic_runner_up_from_czechoslovakia() {
        let store = store();
        let stats = QueryService::new(&store).stats_for_country("Czech Republic");

        assert_eq!(stats.win_count, 0);
        assert_eq!(stats.runner_up_years, vec![1934, 1962]);
        assert_eq!(stats.runner_up_count, 2);
    }

    #[test]
    fn test_unknown_country_is_empty() {
        let store = store();
        let stats = QueryService::new(&store).stats_for_country("Atlantis");
        assert_eq!(stats, CountryStats::default());
    }

    #[test]
    fn test_country_match_is_case_sensitive() {
        let store = store();
        let stats = QueryService::new(&store).stats_for_country("brazil");
        assert_eq!(stats.win_count, 0);
    }

    #[test]
    fn test_historical_name_is_not_a_key() {
        let store = store();
        let stats = QueryService::new(&store).stats_for_country("West Germany");
        assert_eq!(stats.total_finals, 0);
    }

    #[test]
    fn test_win_count_matches_records_for_every_country() {
        let store = store();
        let query = QueryService::new(&store);

        for record in store.records() {
            for country in [&record.winner, &record.runner_up] {
                let expected_wins =
                    store.records().iter().filter(|r| &r.winner == country).count() as u32;
                let expected_runner_ups = store
                    .records()
                    .iter()
                    .filter(|r| &r.runner_up == country)
                    .count() as u32;
                let stats = query.stats_for_country(country);
                assert_eq!(stats.win_count, expected_wins, "{}", country);
                assert_eq!(stats.runner_up_count, expected_runner_ups, "{}", country);
            }
        }
    }

    // ========== result_for_year() ==========

    #[test]
    fn test_result_for_1930() {
        let store = store();
        let result = QueryService::new(&store).result_for_year(1930).unwrap();

        assert_eq!(
            result,
            TournamentResult {
                year: 1930,
                host: "Uruguay".into(),
                winner: "Uruguay".into(),
                runner_up: "Argentina".into(),
                score: "4-2".into(),
            }
        );
    }

    #[test]
    fn test_result_score_is_opaque() {
        let store = store();
        let result = QueryService::new(&store).result_for_year(2022).unwrap();
        assert_eq!(result.score, "3-3 (a.e.t.) (4-2 p)");
    }

    #[test]
    fn test_result_for_missing_year() {
        let store = store();
        let query = QueryService::new(&store);

        assert!(matches!(
            query.result_for_year(1999),
            Err(CupError::NotFound(1999))
        ));
        assert!(matches!(
            query.result_for_year(1942),
            Err(CupError::NotFound(1942))
        ));
    }

    // ========== listings ==========

    #[test]
    fn test_list_winners_sorted_distinct() {
        let store = store();
        let winners = QueryService::new(&store).list_winners();

        assert_eq!(
            winners,
            vec![
                "Argentina", "Brazil", "England", "France", "Germany", "Italy", "Spain",
                "Uruguay"
            ]
        );
    }

    #[test]
    fn test_list_years_descending() {
        let store = store();
        let years = QueryService::new(&store).list_years();

        assert_eq!(years.len(), 22);
        assert_eq!(years[0], 2022);
        assert_eq!(years[21], 1930);
        assert!(years.windows(2).all(|w| w[0] > w[1]));
    }
}
