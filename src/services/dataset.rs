//! Dataset store holding the immutable list of World Cup finals
//!
//! Country names are normalized once, during construction. After that the
//! store exposes read-only access and is shared by reference.

use std::collections::HashSet;

use crate::services::normalizer::normalize_country;
use crate::types::{CupError, Result, Role, TournamentRecord};

/// A row as recorded at the source, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub year: u16,
    pub winner: &'a str,
    pub runner_up: &'a str,
    pub score: &'a str,
    pub host: &'a str,
}

const fn raw<'a>(
    year: u16,
    winner: &'a str,
    runner_up: &'a str,
    score: &'a str,
    host: &'a str,
) -> RawRecord<'a> {
    RawRecord {
        year,
        winner,
        runner_up,
        score,
        host,
    }
}

/// Every final from 1930 to 2022, with names as recorded at the time
pub const WORLD_CUP_FINALS: &[RawRecord<'static>] = &[
    raw(1930, "Uruguay", "Argentina", "4-2", "Uruguay"),
    raw(1934, "Italy", "Czechoslovakia", "2-1 (a.e.t.)", "Italy"),
    raw(1938, "Italy", "Hungary", "4-2", "France"),
    raw(1950, "Uruguay", "Brazil", "2-1", "Brazil"),
    raw(1954, "West Germany", "Hungary", "3-2", "Switzerland"),
    raw(1958, "Brazil", "Sweden", "5-2", "Sweden"),
    raw(1962, "Brazil", "Czechoslovakia", "3-1", "Chile"),
    raw(1966, "England", "West Germany", "4-2 (a.e.t.)", "England"),
    raw(1970, "Brazil", "Italy", "4-1", "Mexico"),
    raw(1974, "West Germany", "Netherlands", "2-1", "West Germany"),
    raw(1978, "Argentina", "Netherlands", "3-1 (a.e.t.)", "Argentina"),
    raw(1982, "Italy", "West Germany", "3-1", "Spain"),
    raw(1986, "Argentina", "West Germany", "3-2", "Mexico"),
    raw(1990, "West Germany", "Argentina", "1-0", "Italy"),
    raw(1994, "Brazil", "Italy", "0-0 (a.e.t.) (3-2 p)", "United States"),
    raw(1998, "France", "Brazil", "3-0", "France"),
    raw(2002, "Brazil", "Germany", "2-0", "South Korea/Japan"),
    raw(2006, "Italy", "France", "1-1 (a.e.t.) (5-3 p)", "Germany"),
    raw(2010, "Spain", "Netherlands", "1-0 (a.e.t.)", "South Africa"),
    raw(2014, "Germany", "Argentina", "1-0 (a.e.t.)", "Brazil"),
    raw(2018, "France", "Croatia", "4-2", "Russia"),
    raw(2022, "Argentina", "France", "3-3 (a.e.t.) (4-2 p)", "Qatar"),
];

/// Immutable, normalized tournament records in input (chronological) order
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<TournamentRecord>,
}

impl DatasetStore {
    /// Build the store from the embedded finals table
    pub fn builtin() -> Result<Self> {
        Self::new(WORLD_CUP_FINALS)
    }

    /// Validate and normalize raw rows.
    ///
    /// Fails with [`CupError::Configuration`] on a duplicate year or a row
    /// with an empty field.
    pub fn new(rows: &[RawRecord<'_>]) -> Result<Self> {
        let mut seen: HashSet<u16> = HashSet::with_capacity(rows.len());
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            if !seen.insert(row.year) {
                return Err(CupError::Configuration(format!(
                    "duplicate year {}",
                    row.year
                )));
            }

            for (field, value) in [
                ("winner", row.winner),
                ("runner_up", row.runner_up),
                ("score", row.score),
                ("host", row.host),
            ] {
                if value.trim().is_empty() {
                    return Err(CupError::Configuration(format!(
                        "{}: missing {}",
                        row.year, field
                    )));
                }
            }

            records.push(TournamentRecord {
                year: row.year,
                winner: normalize_country(row.winner, Role::Winner),
                runner_up: normalize_country(row.runner_up, Role::RunnerUp),
                host: row.host.trim().to_string(),
                score: row.score.trim().to_string(),
            });
        }

        tracing::debug!("Loaded {} editions", records.len());
        Ok(Self { records })
    }

    /// All records, in input order
    pub fn records(&self) -> &[TournamentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
