//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load()?;

    // Flags and MIAB_* variables win over the config file
    let ctx = commands::Context {
        url: cli.url.or_else(|| config.url.clone()),
        email: cli.email.or_else(|| config.email.clone()),
        password: cli.password.or_else(|| config.password.clone()),
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or(OutputFormat::Pretty),
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Dns(args) => commands::dns::execute(ctx, args).await,
        Commands::Mail(args) => commands::mail::execute(ctx, args).await,
        Commands::System(args) => commands::system::execute(ctx, args).await,
        Commands::Login => commands::session::login(ctx).await,
        Commands::Logout => commands::session::logout(ctx).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

/// Log to stderr so structured output on stdout stays parseable.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` enables debug logs for
/// the client crates and the default is warnings only.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,mailinabox_client=debug,mailinabox_cli=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A second init (tests driving `run` twice) is harmless
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbose))
        .with(filter)
        .try_init();
}
