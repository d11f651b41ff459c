//! Aggregator service for computing per-country finals statistics

use crate::types::{CountryAggregate, TimelineEntry, TournamentRecord};
use std::collections::BTreeMap;

/// Aggregator for computing finals statistics
pub struct Aggregator;

impl Aggregator {
    /// Wins, runner-ups and total finals per country (sorted by country name).
    ///
    /// Winner and runner-up counts are tallied separately and then outer
    /// joined on the country name; a country missing from one side counts 0
    /// there.
    pub fn compute_aggregates(records: &[TournamentRecord]) -> Vec<CountryAggregate> {
        if records.is_empty() {
            return Vec::new();
        }

        let mut wins: BTreeMap<&str, u32> = BTreeMap::new();
        let mut runner_ups: BTreeMap<&str, u32> = BTreeMap::new();

        for record in records {
            *wins.entry(record.winner.as_str()).or_insert(0) += 1;
            *runner_ups.entry(record.runner_up.as_str()).or_insert(0) += 1;
        }

        // Outer join
        let mut joined: BTreeMap<&str, CountryAggregate> = BTreeMap::new();
        for (country, count) in wins {
            joined.entry(country).or_default().wins = count;
        }
        for (country, count) in runner_ups {
            joined.entry(country).or_default().runner_ups = count;
        }

        let result: Vec<CountryAggregate> = joined
            .into_iter()
            .map(|(country, agg)| CountryAggregate {
                country: country.to_string(),
                total_finals: agg.wins + agg.runner_ups,
                ..agg
            })
            .collect();

        tracing::debug!(
            "Aggregated {} records into {} countries",
            records.len(),
            result.len()
        );
        result
    }

    /// Winner of each edition, in record order
    pub fn timeline(records: &[TournamentRecord]) -> Vec<TimelineEntry> {
        records
            .iter()
            .map(|r| TimelineEntry {
                year: r.year,
                winner: r.winner.clone(),
            })
            .collect()
    }
}
