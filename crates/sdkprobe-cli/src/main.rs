//! CLI entry point - the composition root.
//!
//! This is the ONLY place where the process environment, the PATH locator
//! and stdout are wired into the handlers.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sdkprobe_cli::{Cli, CliError, Commands, config, handlers};
use sdkprobe_runtime::{PathToolLocator, snapshot_process_env};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Probe(args) => {
            let settings = config::resolve_settings(cli.config.as_deref(), &args)?;
            let env = snapshot_process_env();
            handlers::probe::execute(&settings, &env, args.format, args.require, &mut stdout)?;
            Ok(true)
        }
        Commands::Exists { tool } => {
            let locator = PathToolLocator::new();
            handlers::exists::execute(&locator, &tool, &mut stdout)
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables (JAVA_HOME, SDKPROBE_CONFIG) from .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
