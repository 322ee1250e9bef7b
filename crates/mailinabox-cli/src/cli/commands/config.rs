//! `miab config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::emit;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?.masked();

    emit(ctx.output_format, &config, |config| {
        let unset = || "(not set)".dimmed().to_string();

        println!("{}", "Current Configuration:".bold());
        println!();
        println!("  {} {}", "url:".bold(), config.url.clone().unwrap_or_else(unset));
        println!("  {} {}", "email:".bold(), config.email.clone().unwrap_or_else(unset));
        println!(
            "  {} {}",
            "password:".bold(),
            config.password.clone().unwrap_or_else(unset)
        );
        println!(
            "  {} {}",
            "output_format:".bold(),
            config.output_format.unwrap_or_default()
        );
    })
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let shown = if key == "password" { "********" } else { value };
    println!("{} {} set to {}.", "Success:".green().bold(), key, shown.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
