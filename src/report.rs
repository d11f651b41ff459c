//! Text formatting shared by the TUI views and the CLI reports

use crate::types::{CountryStats, TournamentResult};

/// Shown by the Winners view before a country is picked
pub const COUNTRY_PLACEHOLDER: &str = "Select a country to see its World Cup winning statistics.";

/// Shown by the Year Selection view before a year is picked
pub const YEAR_PLACEHOLDER: &str = "Select a year to see the World Cup results for that year.";

/// Neutral message for a year without a final
pub fn no_final_message(year: u16) -> String {
    format!("No World Cup final was played in {}.", year)
}

/// "1958, 1962, 1970", or "None" when empty
pub fn join_years(years: &[u16]) -> String {
    if years.is_empty() {
        return "None".to_string();
    }
    years
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lines of the country statistics list
pub fn country_stat_items(stats: &CountryStats) -> Vec<String> {
    vec![
        format!("Total Wins: {}", stats.win_count),
        format!("Years Won: {}", join_years(&stats.win_years)),
        format!("Total Runner-ups: {}", stats.runner_up_count),
        format!("Years as Runner-up: {}", join_years(&stats.runner_up_years)),
        format!("Total Finals: {}", stats.total_finals),
    ]
}

/// Lines of the single-year result list
pub fn year_result_items(result: &TournamentResult) -> Vec<String> {
    let host_label = if result.is_co_hosted() {
        "Host Countries"
    } else {
        "Host Country"
    };
    vec![
        format!("Year: {}", result.year),
        format!("{}: {}", host_label, result.host),
        format!("Winner: {}", result.winner),
        format!("Runner-up: {}", result.runner_up),
        format!("Final Score: {}", result.score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_years() {
        assert_eq!(join_years(&[1958, 1962, 1970]), "1958, 1962, 1970");
        assert_eq!(join_years(&[2010]), "2010");
        assert_eq!(join_years(&[]), "None");
    }

    #[test]
    fn test_country_stat_items() {
        let stats = CountryStats {
            win_years: vec![2010],
            runner_up_years: vec![],
            win_count: 1,
            runner_up_count: 0,
            total_finals: 1,
        };

        let items = country_stat_items(&stats);

        assert_eq!(
            items,
            vec![
                "Total Wins: 1",
                "Years Won: 2010",
                "Total Runner-ups: 0",
                "Years as Runner-up: None",
                "Total Finals: 1",
            ]
        );
    }

    #[test]
    fn test_year_result_items_co_hosted() {
        let result = TournamentResult {
            year: 2002,
            host: "South Korea/Japan".into(),
            winner: "Brazil".into(),
            runner_up: "Germany".into(),
            score: "2-0".into(),
        };

        let items = year_result_items(&result);

        assert_eq!(items[0], "Year: 2002");
        assert_eq!(items[1], "Host Countries: South Korea/Japan");
        assert_eq!(items[4], "Final Score: 2-0");
    }

    #[test]
    fn test_year_result_items_single_host() {
        let result = TournamentResult {
            year: 1930,
            host: "Uruguay".into(),
            winner: "Uruguay".into(),
            runner_up: "Argentina".into(),
            score: "4-2".into(),
        };
        assert_eq!(year_result_items(&result)[1], "Host Country: Uruguay");
    }

    #[test]
    fn test_no_final_message() {
        assert_eq!(no_final_message(1942), "No World Cup final was played in 1942.");
    }
}
