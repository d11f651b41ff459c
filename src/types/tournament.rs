//! Tournament records and the derived per-country views

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CupError;

/// Which side of a final a country name was recorded on.
/// Normalization rules are keyed by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Winner,
    RunnerUp,
}

/// One edition of the tournament, with canonical country names
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TournamentRecord {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    /// Co-hosts share one value, separated by `/`
    pub host: String,
    /// Display text only, e.g. "3-3 (a.e.t.) (4-2 p)"
    pub score: String,
}

impl TournamentRecord {
    /// Individual host countries ("South Korea/Japan" → ["South Korea", "Japan"])
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.host.split('/').map(str::trim).filter(|h| !h.is_empty())
    }
}

/// Result of a single-year lookup
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TournamentResult {
    pub year: u16,
    pub host: String,
    pub winner: String,
    pub runner_up: String,
    pub score: String,
}

impl TournamentResult {
    pub fn is_co_hosted(&self) -> bool {
        self.host.contains('/')
    }
}

impl From<&TournamentRecord> for TournamentResult {
    fn from(record: &TournamentRecord) -> Self {
        Self {
            year: record.year,
            host: record.host.clone(),
            winner: record.winner.clone(),
            runner_up: record.runner_up.clone(),
            score: record.score.clone(),
        }
    }
}

/// Finals appearances of one country
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct CountryAggregate {
    pub country: String,
    pub wins: u32,
    pub runner_ups: u32,
    pub total_finals: u32,
}

impl CountryAggregate {
    /// Value of the selected metric
    pub fn value(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Wins => self.wins,
            Metric::RunnerUps => self.runner_ups,
            Metric::TotalFinals => self.total_finals,
        }
    }
}

/// Per-country detail for the Winners view.
/// A country that never reached a final yields the default (all empty).
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct CountryStats {
    /// Ascending
    pub win_years: Vec<u16>,
    /// Ascending
    pub runner_up_years: Vec<u16>,
    pub win_count: u32,
    pub runner_up_count: u32,
    pub total_finals: u32,
}

/// One bar of the winners timeline
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: u16,
    pub winner: String,
}

/// Country/value pair fed to the map view
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChoroplethPoint {
    pub country: String,
    pub value: u32,
}

/// Field of [`CountryAggregate`] the map is colored by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Metric {
    #[default]
    Wins,
    RunnerUps,
    TotalFinals,
}

impl Metric {
    /// All metrics in selector order
    pub fn all() -> &'static [Metric] {
        &[Metric::Wins, Metric::RunnerUps, Metric::TotalFinals]
    }

    /// Selector label
    pub fn label(self) -> &'static str {
        match self {
            Self::Wins => "Total Wins",
            Self::RunnerUps => "Total Runner-ups",
            Self::TotalFinals => "Total Finals Appearances",
        }
    }

    /// Column header / map title fragment
    pub fn column(self) -> &'static str {
        match self {
            Self::Wins => "Wins",
            Self::RunnerUps => "Runner-ups",
            Self::TotalFinals => "Total Finals",
        }
    }

    /// Canonical key accepted by [`Metric::from_str`]
    pub fn key(self) -> &'static str {
        match self {
            Self::Wins => "wins",
            Self::RunnerUps => "runner-ups",
            Self::TotalFinals => "total-finals",
        }
    }

    /// Next metric (wrapping)
    pub fn next(self) -> Self {
        match self {
            Self::Wins => Self::RunnerUps,
            Self::RunnerUps => Self::TotalFinals,
            Self::TotalFinals => Self::Wins,
        }
    }

    /// Previous metric (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Self::Wins => Self::TotalFinals,
            Self::RunnerUps => Self::Wins,
            Self::TotalFinals => Self::RunnerUps,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = CupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "wins" => Ok(Self::Wins),
            "runnerups" => Ok(Self::RunnerUps),
            "totalfinals" => Ok(Self::TotalFinals),
            _ => Err(CupError::InvalidArgument(format!(
                "unknown metric '{}' (expected wins, runner-ups or total-finals)",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Metric {
    type Error = CupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
