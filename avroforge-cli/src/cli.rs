//! Command line arguments.

use avroforge_core::DEFAULT_DRIVER;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Typed Rust code generation for Avro schemas.
#[derive(Debug, Parser)]
#[command(name = "avroforge", version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(
        short = 'l',
        long,
        value_enum,
        default_value_t = LogLevel::Info,
        env = "AVROFORGE_LOG_LEVEL",
        ignore_case = true,
        global = true
    )]
    pub log_level: LogLevel,

    /// Log format
    #[arg(
        short = 'L',
        long,
        value_enum,
        default_value_t = LogFormat::Plain,
        env = "AVROFORGE_LOG_FORMAT",
        ignore_case = true,
        global = true
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in Avro drivers
    ListDrivers,
    /// Compile Avro schema files into a typed Rust module tree
    Compile(CompileArgs),
}

/// Options of the `compile` command.
#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Schema file or directory of `*.avsc` files
    #[arg(short = 'a', long, env = "AVROFORGE_COMPILE_SOURCE_DIRECTORY")]
    pub avro_source_directory: PathBuf,

    /// Base directory to write the generated tree to
    #[arg(
        short = 'p',
        long,
        default_value = "./build",
        env = "AVROFORGE_COMPILE_TARGET_DIRECTORY"
    )]
    pub rust_target_directory: PathBuf,

    /// Driver the generated code loads by default
    #[arg(
        short = 'D',
        long,
        default_value = DEFAULT_DRIVER,
        env = "AVROFORGE_COMPILE_DRIVER"
    )]
    pub avro_driver: String,

    /// Generate code without writing files to disk
    #[arg(short = 'd', long, env = "AVROFORGE_COMPILE_DRY_RUN")]
    pub dry_run: bool,

    /// Replace an existing target directory
    #[arg(short = 'f', long, env = "AVROFORGE_COMPILE_FORCE")]
    pub force: bool,

    /// Depend on the avroforge-core crate instead of copying it into the tree
    #[arg(long, env = "AVROFORGE_COMPILE_NO_RUNTIME")]
    pub no_runtime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Filter directive for the level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Critical | Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_defaults() {
        let cli = Cli::try_parse_from(["avroforge", "compile", "-a", "schemas"])
            .expect("Failed to parse arguments");
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.log_format, LogFormat::Plain);
        let Command::Compile(args) = cli.command else {
            panic!("expected compile command");
        };
        assert_eq!(args.avro_source_directory, PathBuf::from("schemas"));
        assert_eq!(args.rust_target_directory, PathBuf::from("./build"));
        assert_eq!(args.avro_driver, "apache_avro_binary_driver");
        assert!(!args.dry_run && !args.force && !args.no_runtime);
    }

    #[test]
    fn test_compile_flags() {
        let cli = Cli::try_parse_from([
            "avroforge", "-l", "WARNING", "-L", "json", "compile", "-a", "in", "-p", "out", "-D",
            "json_driver", "-d", "-f", "--no-runtime",
        ])
        .expect("Failed to parse arguments");
        assert_eq!(cli.log_level, LogLevel::Warning);
        assert_eq!(cli.log_format, LogFormat::Json);
        let Command::Compile(args) = cli.command else {
            panic!("expected compile command");
        };
        assert_eq!(args.avro_driver, "json_driver");
        assert!(args.dry_run && args.force && args.no_runtime);
    }

    #[test]
    fn test_source_is_required() {
        assert!(Cli::try_parse_from(["avroforge", "compile"]).is_err());
    }

    #[test]
    fn test_level_directives() {
        assert_eq!(LogLevel::Critical.directive(), "error");
        assert_eq!(LogLevel::Warning.directive(), "warn");
        assert_eq!(LogLevel::Debug.directive(), "debug");
    }
}
