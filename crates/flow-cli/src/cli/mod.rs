use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod global;

pub use commands::{CalendarArgs, Commands, ForecastArgs, RunArgs};
pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `flowcast` binary.
#[derive(Debug, Parser)]
#[command(
    name = "flowcast",
    version,
    about = "Two-stage traffic flow forecast: weather → visitors/vehicles → traffic"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered over flowcast.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["flowcast", "--format", "json", "--verbose", "models"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Models));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["flowcast", "models", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["flowcast", "models"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["flowcast", "--format", "xml", "models"]).is_err());
    }

    #[test]
    fn run_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "flowcast",
            "run",
            "--output-dir",
            "/tmp/dash",
            "--days",
            "5",
            "--forecast-json",
            "fixture.json",
        ])
        .expect("cli should parse");

        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.output_dir.as_deref(), Some(Path::new("/tmp/dash")));
        assert_eq!(args.days, Some(5));
        assert_eq!(args.forecast_json.as_deref(), Some(Path::new("fixture.json")));
    }

    #[test]
    fn days_outside_provider_range_are_rejected() {
        assert!(Cli::try_parse_from(["flowcast", "run", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["flowcast", "forecast", "--days", "17"]).is_err());
    }

    #[test]
    fn calendar_parses_start_date() {
        let cli = Cli::try_parse_from(["flowcast", "calendar", "--from", "2026-12-21"])
            .expect("cli should parse");
        let Commands::Calendar(args) = cli.command else {
            panic!("expected calendar");
        };
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2026, 12, 21));
        assert_eq!(args.days, 7);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["flowcast", "forecast", "--config", "ops.toml"])
            .expect("cli should parse");
        assert_eq!(
            cli.global_flags().config.as_deref(),
            Some(Path::new("ops.toml"))
        );
    }
}
