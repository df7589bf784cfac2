//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Detect SDK installations and print build configuration for them.
#[derive(Parser, Debug)]
#[command(name = "sdkprobe")]
#[command(about = "Detect an SDK from the environment and print build flags for it")]
#[command(version)]
pub struct Cli {
    /// JSON settings file (SDK name, home variable, directory layout)
    #[arg(long = "config", env = "SDKPROBE_CONFIG", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "sdkprobe",
            "--verbose",
            "--config",
            "/tmp/probe.json",
            "exists",
            "java",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/probe.json")));
        assert!(matches!(cli.command, Commands::Exists { ref tool } if tool == "java"));
    }

    #[test]
    fn test_probe_defaults() {
        let cli = Cli::parse_from(["sdkprobe", "probe"]);
        let Commands::Probe(args) = cli.command else {
            panic!("expected probe command");
        };
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.var.is_none());
        assert!(!args.require);
    }

    #[test]
    fn test_platform_flags_must_come_together() {
        let parsed = Cli::try_parse_from(["sdkprobe", "probe", "--platform-lib", "amd64"]);
        assert!(parsed.is_err());

        let cli = Cli::parse_from([
            "sdkprobe",
            "probe",
            "--platform-include",
            "linux",
            "--platform-lib",
            "amd64",
            "--format",
            "cargo",
        ]);
        let Commands::Probe(args) = cli.command else {
            panic!("expected probe command");
        };
        assert_eq!(args.platform_include.as_deref(), Some("linux"));
        assert_eq!(args.platform_lib.as_deref(), Some("amd64"));
        assert_eq!(args.format, OutputFormat::Cargo);
    }
}
