use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::solver::constants::DEFAULT_MAX_ATTEMPTS;
use crate::solver::{ExpressionSolver, SearchConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// numbers-round - combine every number once with + - * / to reach the target
#[derive(Parser, Debug)]
#[command(name = "numbers-round")]
#[command(
    about = "Find the arithmetic expression over the given numbers whose value is closest to the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Numbers to combine, each used exactly once
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Attempt budget: how many fully-evaluated candidates to try
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_attempts: u64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<i64>,
    pub target: i64,
    pub max_attempts: u64,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    Ok(CliConfig {
        numbers: args.numbers,
        target: args.target,
        max_attempts: args.max_attempts,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::with_config(SearchConfig {
        max_attempts: config.max_attempts,
        ..SearchConfig::default()
    });

    info!(
        "Searching for expressions over {:?} closest to {}",
        config.numbers, config.target
    );

    let report = solver.search(&config.numbers, config.target)?;

    if report.candidates.is_empty() {
        warn!("No valid candidate evaluated (stop reason: {:?})", report.stop);
        println!(
            "No possible way to get close to the target number {} with the given numbers.",
            config.target
        );
        return Ok(());
    }

    for candidate in &report.candidates {
        println!("{} = {}", candidate.expr, candidate.value);
        println!("In words: {}", candidate.expr.in_words());
    }

    match report.distance {
        Some(0) => println!("Spot on: exactly {}.", config.target),
        Some(distance) => {
            let unit = if distance == 1 { "point" } else { "points" };
            println!("Closest value found, off by {} {}.", distance, unit);
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["numbers-round", "24", "1", "2", "3", "4", "5", "6"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, 24);
            assert_eq!(args.numbers, vec![1, 2, 3, 4, 5, 6]);
            assert_eq!(args.max_attempts, DEFAULT_MAX_ATTEMPTS);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_requires_numbers() {
        let args = CliArgs::try_parse_from(["numbers-round", "24"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_cli_rejects_zero_budget() {
        let args = CliArgs::try_parse_from(["numbers-round", "24", "1", "2", "--max-attempts", "0"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
