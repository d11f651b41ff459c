mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Settings, ThemeChoice};
use crate::logging::{self, LogSink};
use crate::services::{project_for_metric, Aggregator, DatasetStore, QueryService};
use crate::tui::{self, Theme};
use crate::types::Metric;

/// FIFA World Cup finals dashboard
#[derive(Parser)]
#[command(name = "cupfinals")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (default: ~/.cupfinals/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Color scheme for the dashboard
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeChoice>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive dashboard (default)
    Tui,

    /// List every country that has won the cup
    Winners {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every edition year, newest first
    Years {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show finals statistics for one country
    Country {
        /// Canonical country name, e.g. "Germany"
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the final of one edition
    Year {
        year: u16,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank countries by wins, runner-ups or total finals
    Map {
        /// wins, runner-ups or total-finals (default from settings)
        #[arg(long)]
        metric: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Winner of every edition in chronological order
    Timeline {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let settings = Settings::load(self.config.as_deref())?;

        let sink = match self.command {
            None | Some(Commands::Tui) => LogSink::File,
            Some(_) => LogSink::Stderr,
        };
        logging::init(&settings, sink)?;

        let store = DatasetStore::builtin().inspect_err(|e| {
            tracing::error!("Dataset rejected: {}", e);
        })?;

        match self.command {
            None | Some(Commands::Tui) => {
                let theme = Theme::resolve(self.theme.unwrap_or(settings.theme));
                tui::run(&store, theme, settings.default_metric)
            }
            Some(command) => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                run_report(command, &store, &settings, &mut out)?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

/// Execute a non-interactive command, writing to `out`
fn run_report(
    command: Commands,
    store: &DatasetStore,
    settings: &Settings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let query = QueryService::new(store);

    match command {
        Commands::Tui => unreachable!("handled by Cli::run"),
        Commands::Winners { json } => output::winners(out, &query.list_winners(), json),
        Commands::Years { json } => output::years(out, &query.list_years(), json),
        Commands::Country { name, json } => {
            output::country(out, &name, &query.stats_for_country(&name), json)
        }
        Commands::Year { year, json } => output::year(out, year, query.result_for_year(year), json),
        Commands::Map { metric, json } => {
            let metric: Metric = match metric {
                Some(key) => key.parse()?,
                None => settings.default_metric,
            };
            let aggregates = Aggregator::compute_aggregates(store.records());
            let points = project_for_metric(&aggregates, metric);
            output::map(out, metric, &points, &aggregates, json)
        }
        Commands::Timeline { json } => {
            output::timeline(out, &Aggregator::timeline(store.records()), json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CupError;

    fn report(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        let store = DatasetStore::builtin().unwrap();
        let mut out = Vec::new();
        run_report(cli.command.unwrap(), &store, &Settings::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    // ========== Parsing ==========

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["cupfinals"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_cli_parse_year_json() {
        let cli = Cli::try_parse_from(["cupfinals", "year", "1930", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Year {
                year: 1930,
                json: true
            })
        ));
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::try_parse_from(["cupfinals", "winners", "--theme", "light"]).unwrap();
        assert_eq!(cli.theme, Some(ThemeChoice::Light));
    }

    #[test]
    fn test_cli_rejects_bad_year() {
        assert!(Cli::try_parse_from(["cupfinals", "year", "nineteen"]).is_err());
    }

    // ========== Reports ==========

    #[test]
    fn test_report_winners() {
        let text = report(&["cupfinals", "winners"]).unwrap();
        assert_eq!(text.lines().next(), Some("Argentina"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_report_year_found() {
        let text = report(&["cupfinals", "year", "1930"]).unwrap();
        assert!(text.contains("Host Country: Uruguay"));
        assert!(text.contains("Runner-up: Argentina"));
        assert!(text.contains("Final Score: 4-2"));
    }

    #[test]
    fn test_report_year_not_found_is_neutral() {
        let text = report(&["cupfinals", "year", "1999"]).unwrap();
        assert_eq!(text.trim(), "No World Cup final was played in 1999.");

        let json = report(&["cupfinals", "year", "1999", "--json"]).unwrap();
        assert_eq!(json.trim(), "null");
    }

    #[test]
    fn test_report_country_json() {
        let json = report(&["cupfinals", "country", "Germany", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["country"], "Germany");
        assert_eq!(value["win_count"], 4);
        assert_eq!(value["win_years"][0], 1954);
    }

    #[test]
    fn test_report_map_default_metric() {
        let json = report(&["cupfinals", "map", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metric"], "wins");
        assert_eq!(value["points"].as_array().unwrap().len(), 8);
        assert_eq!(value["points"][0]["country"], "Brazil");
    }

    #[test]
    fn test_report_map_unknown_metric() {
        let err = report(&["cupfinals", "map", "--metric", "goals"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CupError>(),
            Some(CupError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_report_timeline() {
        let text = report(&["cupfinals", "timeline"]).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("1930"));
        assert!(first.ends_with("Uruguay"));
        assert_eq!(text.lines().count(), 22);
    }
}
