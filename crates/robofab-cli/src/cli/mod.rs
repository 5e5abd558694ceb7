//! CLI command definitions for the `robofab` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod build;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use robofab_types::kind::RobotKind;

/// Build robots from their blueprints and print what got installed.
#[derive(Parser)]
#[command(name = "robofab", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed log output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit tracing filter; overrides -v/--quiet.
    #[arg(long, env = "RUST_LOG", global = true, hide_env_values = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Tracing filter directive derived from the flags.
    pub fn log_filter(&self) -> String {
        if let Some(filter) = &self.log_filter {
            return filter.clone();
        }
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,robofab=debug",
            _ => "trace",
        }
        .to_string()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the named robot kinds, in the order given.
    Build {
        /// Kinds to build (android, autonomous-car, flying-battle-bot).
        #[arg(required = true)]
        kinds: Vec<RobotKind>,
    },

    /// List the registered robot kinds.
    #[command(alias = "ls")]
    List,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
