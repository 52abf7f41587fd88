//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{
    error::Result,
    stopwatch::{SetsTemplate, StopwatchSettings},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "workout-stopwatch")]
#[command(about = "A state-managed HTTP stopwatch for timing workout sets")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Delay between two timer refreshes, in milliseconds
    #[arg(short, long, default_value = "100")]
    pub refresh_ms: u64,

    /// Label template for the set count; "{}" is replaced by the count
    #[arg(long, default_value = "Sets: {}")]
    pub sets_template: String,

    /// Draw the stopwatch on the terminal
    #[arg(short, long)]
    pub show: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Validated stopwatch settings
    pub fn stopwatch_settings(&self) -> Result<StopwatchSettings> {
        StopwatchSettings::new(
            Duration::from_millis(self.refresh_ms),
            SetsTemplate::new(self.sets_template.clone())?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StopwatchError;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_a_100ms_stopwatch() {
        let config = Config::try_parse_from(["workout-stopwatch"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.stopwatch_settings().unwrap(), StopwatchSettings::default());
    }

    #[test]
    fn custom_template_and_refresh() {
        let config = Config::try_parse_from([
            "workout-stopwatch",
            "--refresh-ms",
            "250",
            "--sets-template",
            "Séries : {}",
            "-v",
        ])
        .unwrap();

        let settings = config.stopwatch_settings().unwrap();
        assert_eq!(settings.refresh_delay, Duration::from_millis(250));
        assert_eq!(settings.sets_template.render(2), "Séries : 2");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let zero = Config::try_parse_from(["workout-stopwatch", "-r", "0"]).unwrap();
        assert!(matches!(
            zero.stopwatch_settings(),
            Err(StopwatchError::InvalidRefreshDelay)
        ));

        let no_placeholder =
            Config::try_parse_from(["workout-stopwatch", "--sets-template", "Sets"]).unwrap();
        assert!(matches!(
            no_placeholder.stopwatch_settings(),
            Err(StopwatchError::InvalidTemplate(_))
        ));
    }
}
