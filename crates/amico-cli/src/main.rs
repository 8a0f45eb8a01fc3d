//! amico: compare dataset metadata between two catalog search patterns.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

use amico_cli::clock::RunClock;
use amico_cli::commands::run_compare;
use amico_cli::logging::{LogConfig, LogFormat, init_logging};
use amico_cli::report::{LOGO, print_comparison};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

const NAME: &str = "amico";
const RULE: &str = "--------------------------------------------------------------------------------";

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = cli.compare_config();
    let mut clock = RunClock::start("program run time");
    engage(&cli, &clock, config.username.as_deref());

    let exit_code = match run_compare(&config, &mut clock) {
        Ok(comparison) => {
            print_comparison(&comparison);
            0
        }
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            1
        }
    };

    terminate(&mut clock);
    std::process::exit(exit_code);
}

/// Start-of-run banner and bookkeeping.
fn engage(cli: &Cli, clock: &RunClock, username: Option<&str>) {
    info!("{RULE}");
    if !cli.no_logo {
        info!("\n{LOGO}");
        info!("{RULE}");
    }
    info!("initiate {NAME}");
    info!("version: {}", env!("CARGO_PKG_VERSION"));
    if let Some(user) = username {
        info!(user = %user, "user");
    }
    info!("initiation time: {}", clock.started_at().to_rfc3339());
}

fn terminate(clock: &mut RunClock) {
    let stopped = clock.stop();
    info!("termination time: {}", stopped.to_rfc3339());
    for stage in clock.stages() {
        info!(
            stage = stage.name,
            calls = stage.calls,
            duration_ms = stage.total.as_millis(),
            "stage timing"
        );
    }
    info!("time statistics report:\n{}", clock.report());
    info!("terminate {NAME}");
    info!("{RULE}");
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
