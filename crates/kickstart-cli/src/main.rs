//! `kickstart`: scaffold FastAPI projects, wire middleware into them and
//! write onboarding reports.
//!
//! Exit codes: 0 success, 1 internal error, 2 bad input, 3 project not
//! found, 4 configuration problem. Argument errors from clap also exit 2.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use kickstart_core::domain::Addon;

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // a missing .env is normal
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here with use_stderr() == false
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    let verbose = cli.global.verbose > 0;
    match start(cli) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, verbose),
    }
}

fn start(cli: Cli) -> CliResult<()> {
    // config-init may target a --config file that does not exist yet
    if let Commands::ConfigInit(args) = cli.command {
        let output = OutputManager::new(&cli.global, &AppConfig::default());
        return commands::config_init::execute(args, cli.global, output);
    }

    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;
    debug!(
        path = %cli.global.path.display(),
        format = ?cli.global.output_format,
        python = %config.checker.python,
        "Configuration loaded"
    );

    let output = OutputManager::new(&cli.global, &config);
    dispatch(cli.command, cli.global, config, output)
}

#[instrument(skip_all)]
fn dispatch(
    command: Commands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    use commands::{addon, inspect, setup};

    match command {
        Commands::Init(args) => commands::init::execute(args, global, config, output),
        Commands::EnvCheck => inspect::env_check(global, config, output),
        Commands::AsyncCheck => inspect::async_check(global, config, output),
        Commands::AddErrorMiddleware => addon::execute(Addon::ErrorMiddleware, global, config, output),
        Commands::AddRateLimiting => addon::execute(Addon::RateLimiting, global, config, output),
        Commands::AddMonitoring => addon::execute(Addon::Monitoring, global, config, output),
        Commands::TestInit => setup::test_init(global, config, output),
        Commands::SetupDatabase => setup::setup_database(global, config, output),
        Commands::DockerSetup => setup::docker_setup(global, config, output),
        Commands::OnboardingReport => commands::report::execute(global, output),
        Commands::Templates(args) => commands::templates::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
        Commands::ConfigInit(args) => commands::config_init::execute(args, global, output),
    }
}

/// Log the failure, print it on stderr and pick the exit code.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
