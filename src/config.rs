//! Configuration management for the README generator.
//!
//! Handles:
//! - Command-line argument parsing
//! - The fixed source and destination locations

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Documentation file the README is generated from
pub const SOURCE_PATH: &str = "src/lib.md";

/// Generated README
pub const DESTINATION_PATH: &str = "README.md";

/// Command-line arguments for the README generator
#[derive(Debug, Parser)]
#[command(name = "readme-gen")]
#[command(about = "Generate README.md from src/lib.md")]
#[command(version)]
pub struct Args {
    /// Compare instead of writing; fail when README.md is out of date
    #[arg(long, help = "Check that README.md is up to date without writing it")]
    pub check: bool,

    /// Log level for the generator
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Document to read
    pub source: PathBuf,
    /// Document to overwrite
    pub destination: PathBuf,
    /// Only compare, never write
    pub check: bool,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            destination: PathBuf::from(DESTINATION_PATH),
            check: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            check: args.check,
            log_level: args.log_level,
            ..Config::default()
        })
    }

    /// Same fixed layout, rooted in `root` instead of the working directory
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Config {
            source: root.join(SOURCE_PATH),
            destination: root.join(DESTINATION_PATH),
            ..Config::default()
        }
    }
}
