//! Plain-text and JSON renderings of the report commands

use std::io::Write;

use serde::Serialize;

use crate::report::{country_stat_items, no_final_message, year_result_items};
use crate::types::{
    ChoroplethPoint, CountryAggregate, CountryStats, CupError, Metric, Result, TimelineEntry,
    TournamentResult,
};

fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn winners(out: &mut impl Write, winners: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, &winners);
    }
    for country in winners {
        writeln!(out, "{}", country)?;
    }
    Ok(())
}

pub fn years(out: &mut impl Write, years: &[u16], json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, &years);
    }
    for year in years {
        writeln!(out, "{}", year)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CountryReport<'a> {
    country: &'a str,
    #[serde(flatten)]
    stats: &'a CountryStats,
}

pub fn country(
    out: &mut impl Write,
    name: &str,
    stats: &CountryStats,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        return write_json(
            out,
            &CountryReport {
                country: name,
                stats,
            },
        );
    }
    writeln!(out, "{}", name)?;
    for item in country_stat_items(stats) {
        writeln!(out, "  {}", item)?;
    }
    Ok(())
}

/// A missing year prints a neutral message (`null` in JSON); other errors propagate
pub fn year(
    out: &mut impl Write,
    year: u16,
    result: Result<TournamentResult>,
    json: bool,
) -> anyhow::Result<()> {
    let result = match result {
        Ok(result) => Some(result),
        Err(CupError::NotFound(_)) => None,
        Err(e) => return Err(e.into()),
    };

    if json {
        return write_json(out, &result);
    }
    match result {
        Some(result) => {
            for item in year_result_items(&result) {
                writeln!(out, "{}", item)?;
            }
        }
        None => writeln!(out, "{}", no_final_message(year))?,
    }
    Ok(())
}

#[derive(Serialize)]
struct MapReport<'a> {
    metric: Metric,
    points: &'a [ChoroplethPoint],
    aggregates: &'a [CountryAggregate],
}

pub fn map(
    out: &mut impl Write,
    metric: Metric,
    points: &[ChoroplethPoint],
    aggregates: &[CountryAggregate],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        return write_json(
            out,
            &MapReport {
                metric,
                points,
                aggregates,
            },
        );
    }

    writeln!(out, "World Cup {} by Country", metric.column())?;
    writeln!(
        out,
        "{:<20}{:>6}{:>12}{:>14}",
        "Country", "Wins", "Runner-ups", "Total Finals"
    )?;
    for point in points {
        let Some(agg) = aggregates.iter().find(|a| a.country == point.country) else {
            continue;
        };
        writeln!(
            out,
            "{:<20}{:>6}{:>12}{:>14}",
            agg.country, agg.wins, agg.runner_ups, agg.total_finals
        )?;
    }
    Ok(())
}

pub fn timeline(out: &mut impl Write, entries: &[TimelineEntry], json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, &entries);
    }
    for entry in entries {
        writeln!(out, "{}  {}", entry.year, entry.winner)?;
    }
    Ok(())
}
