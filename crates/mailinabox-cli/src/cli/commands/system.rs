//! `miab system` - status checks, updates, reboot and backups.

use anyhow::Result;
use colored::Colorize;
use mailinabox::{BackupConfig, BackupConfigUpdate, BackupStatus, PackageUpdate, SystemStatus};

use super::Context;
use crate::cli::args::{PrivacySetting, SystemArgs, SystemCommands};
use crate::output::{emit, emit_message};

pub async fn execute(ctx: Context, args: SystemArgs) -> Result<()> {
    let format = ctx.output_format;

    // Refuse before touching the network
    if let SystemCommands::Reboot { yes: false } = args.command {
        anyhow::bail!("Refusing to reboot without --yes");
    }

    let client = ctx.client()?;
    let system = client.system();

    match args.command {
        SystemCommands::Status => {
            let checks = system.status().await?;
            emit(format, &checks, |checks| print_status(checks))
        }
        SystemCommands::Version => emit_message(format, &system.version().await?),
        SystemCommands::UpstreamVersion => {
            emit_message(format, &system.upstream_version().await?)
        }
        SystemCommands::Updates => {
            let updates = system.updates().await?;
            emit(format, &updates, |updates| print_updates(updates))
        }
        SystemCommands::UpdatePackages => emit_message(format, &system.update_packages().await?),
        SystemCommands::Privacy { set: None } => {
            let private = system.privacy().await?;
            emit(format, &private, |private| {
                let label = if *private { "private" } else { "off" };
                println!("{} {}", "privacy:".bold(), label.cyan());
            })
        }
        SystemCommands::Privacy { set: Some(setting) } => {
            let resp = system
                .set_privacy(setting == PrivacySetting::Private)
                .await?;
            emit_message(format, &resp)
        }
        SystemCommands::RebootStatus => {
            let required = system.reboot_required().await?;
            emit(format, &required, |required| {
                if *required {
                    println!("{}", "A reboot is required.".yellow());
                } else {
                    println!("{}", "No reboot is required.".green());
                }
            })
        }
        SystemCommands::Reboot { .. } => emit_message(format, &system.reboot().await?),
        SystemCommands::BackupStatus => {
            let status = system.backup_status().await?;
            emit(format, &status, print_backups)
        }
        SystemCommands::BackupConfig => {
            let config = system.backup_config().await?;
            emit(format, &config, print_backup_config)
        }
        SystemCommands::SetBackupConfig {
            target,
            target_user,
            target_pass,
            min_age,
        } => {
            let update = BackupConfigUpdate::new(target, target_user, target_pass, min_age);
            emit_message(format, &system.set_backup_config(&update).await?)
        }
    }
}

fn print_status(checks: &[SystemStatus]) {
    for check in checks {
        if check.is_heading() {
            println!();
            println!("{}", check.text.bold().underline());
            continue;
        }

        let mark = if check.is_ok() {
            "✓".green()
        } else if check.is_warning() {
            "?".yellow()
        } else {
            "✖".red()
        };
        println!("{mark} {}", check.text);

        for extra in &check.extra {
            if extra.monospace {
                println!("      {}", extra.text.dimmed());
            } else {
                println!("    {}", extra.text);
            }
        }
    }
}

fn print_updates(updates: &[PackageUpdate]) {
    if updates.is_empty() {
        println!("{}", "System is up to date.".green());
        return;
    }
    println!("{}", format!("{} package(s) can be upgraded:", updates.len()).bold());
    for update in updates {
        println!("  {:30} {}", update.name.cyan(), update.version);
    }
}

fn print_backups(status: &BackupStatus) {
    if let Some(error) = &status.error {
        println!("{} {}", "Error:".red().bold(), error);
    }
    if status.backups.is_empty() {
        println!("{}", "No backups yet.".dimmed());
        return;
    }

    for backup in &status.backups {
        let kind = if backup.full { "full".yellow() } else { "increment".normal() };
        println!(
            "  {:25} {:10} {:>12} bytes  ({} ago, deleted in {})",
            backup.date_str, kind, backup.size, backup.date_delta, backup.deleted_in
        );
    }
    println!("{} {} bytes", "Total:".bold(), status.total_size());
    if status.unmatched_file_size > 0 {
        println!(
            "{} {} bytes",
            "Unmatched files:".bold(),
            status.unmatched_file_size
        );
    }
}

fn print_backup_config(config: &BackupConfig) {
    println!("  {} {}", "target:".bold(), config.target.cyan());
    println!("  {} {}", "target_user:".bold(), config.target_user);
    println!(
        "  {} {}",
        "target_pass:".bold(),
        if config.target_pass.is_empty() { "(not set)" } else { "********" }
    );
    println!("  {} {}", "min_age_in_days:".bold(), config.min_age_in_days);
    println!("  {} {}", "encryption key:".bold(), config.enc_pw_file);
    println!("  {} {}", "local directory:".bold(), config.file_target_directory);
    println!("  {} {}", "ssh public key:".bold(), config.ssh_pub_key.trim());
}
