//! Subcommands and their arguments.

use clap::{Args, Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the environment for an SDK and print its build configuration
    Probe(ProbeArgs),

    /// Check whether an executable is on PATH
    Exists {
        /// Executable name (e.g., "java")
        tool: String,
    },
}

/// Arguments for `sdkprobe probe`.
#[derive(Args, Debug, Clone, Default)]
pub struct ProbeArgs {
    /// Environment variable holding the SDK root (default: JAVA_HOME)
    #[arg(long = "var", value_name = "NAME")]
    pub var: Option<String>,

    /// SDK name used in diagnostics (default: Java)
    #[arg(long = "sdk", value_name = "NAME")]
    pub sdk: Option<String>,

    /// Platform directory under include/ (e.g., "linux")
    #[arg(long = "platform-include", value_name = "DIR", requires = "platform_lib")]
    pub platform_include: Option<String>,

    /// Platform directory under jre/lib/ (e.g., "amd64")
    #[arg(long = "platform-lib", value_name = "DIR", requires = "platform_include")]
    pub platform_lib: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail with a non-zero exit code when the SDK is not detected
    #[arg(long = "require")]
    pub require: bool,
}

/// How `probe` prints its result.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Serialized probe result
    Json,
    /// Compiler flags on the first line, linker flags on the second
    Flags,
    /// Cargo build-script directives
    Cargo,
}
