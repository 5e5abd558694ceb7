//! robofab entry point.
//!
//! Binary name: `robofab`
//!
//! Parses CLI arguments, sets up tracing, then builds and prints robots.
//! With no subcommand every registered kind is built in canonical order.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use robofab_core::director::Director;
use robofab_core::registry::BuilderRegistry;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only rendered robots.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(cli.log_filter())?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let registry = BuilderRegistry::with_defaults();
    let director = Director::new();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        None => {
            let kinds = registry.kinds();
            cli::build::build_robots(&registry, &director, &kinds, &mut stdout)?;
        }

        Some(Commands::Build { kinds }) => {
            cli::build::build_robots(&registry, &director, &kinds, &mut stdout)?;
        }

        Some(Commands::List) => {
            cli::build::list_kinds(&registry, &mut stdout)?;
        }

        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "robofab", &mut stdout);
        }
    }

    Ok(())
}
