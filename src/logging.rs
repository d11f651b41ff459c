//! tracing subscriber setup

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "CUPFINALS_LOG";

/// Log file name inside `~/.cupfinals`
pub const LOG_FILE: &str = "cupfinals.log";

const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Report commands
    Stderr,
    /// The TUI owns the terminal, so logs go to `~/.cupfinals/cupfinals.log`
    File,
}

/// Pick the filter directive: env var, then settings, then the default
pub fn filter_directive(env: Option<String>, settings: Option<&str>) -> String {
    env.filter(|s| !s.trim().is_empty())
        .or_else(|| settings.map(String::from))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber
pub fn init(settings: &Settings, sink: LogSink) -> anyhow::Result<()> {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), settings.log_filter.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("[cupfinals] Warning: invalid log filter '{}': {}", directive, e);
        EnvFilter::new(DEFAULT_FILTER)
    });

    let result = match sink {
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogSink::File => {
            let Some(dir) = Settings::app_dir() else {
                // No home directory: nowhere to log without breaking the screen
                return Ok(());
            };
            fs::create_dir_all(&dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_default() {
        assert_eq!(filter_directive(None, None), "warn");
    }

    #[test]
    fn test_filter_from_settings() {
        assert_eq!(filter_directive(None, Some("info")), "info");
    }

    #[test]
    fn test_filter_env_wins() {
        assert_eq!(
            filter_directive(Some("cupfinals=debug".into()), Some("info")),
            "cupfinals=debug"
        );
    }

    #[test]
    fn test_filter_blank_env_ignored() {
        assert_eq!(filter_directive(Some("  ".into()), Some("info")), "info");
    }
}
