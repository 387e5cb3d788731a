//! CLI argument definitions for the Hevy workout importer.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hevy-import",
    version,
    about = "Convert scanned workout logs into Hevy routine payloads",
    long_about = "Convert already-decoded workout log text into Hevy routine payloads.\n\n\
                  Parses Workout/Date/Exercise/Sets/Reps/Weight lines, maps exercise\n\
                  names to Hevy exercise templates, and prints the request body."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON lookup table to use instead of the built-in one.
    #[arg(long = "table", value_name = "PATH", global = true)]
    pub table: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a workout log and print the structured workout.
    Parse(InputArgs),

    /// Parse and map exercise names, then print a summary.
    Map(MapArgs),

    /// Run the full pipeline and print the Hevy payload.
    Payload(PayloadArgs),

    /// Print the outbound request (headers and body) without sending it.
    Request(RequestArgs),

    /// List the exercise lookup table in match-priority order.
    Exercises,
}

#[derive(Args)]
pub struct InputArgs {
    /// Path to the decoded workout text.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Routine name used when the log has no `Workout:` line.
    #[arg(long = "default-name", value_name = "NAME")]
    pub default_name: Option<String>,

    /// Date used when the log has no `Date:` line (default: today, UTC).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the mapping report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Fail when any exercise could not be mapped.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Args)]
pub struct RequestArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,

    /// Hevy API key.
    #[arg(long = "api-key", env = "HEVY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn payload_args_parse() {
        let cli = Cli::try_parse_from([
            "hevy-import",
            "payload",
            "log.txt",
            "--strict",
            "--date",
            "2024-01-15",
        ])
        .expect("parse args");
        let Command::Payload(args) = cli.command else {
            panic!("expected payload command");
        };
        assert!(args.strict);
        assert_eq!(args.input.date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let result = Cli::try_parse_from(["hevy-import", "parse", "log.txt", "--date", "15/01/2024"]);
        assert!(result.is_err());
    }
}
