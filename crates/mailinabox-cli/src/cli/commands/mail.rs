//! `miab mail` - users, privileges and aliases.

use anyhow::Result;
use colored::Colorize;
use mailinabox::{MailAliases, MailUsers};

use super::Context;
use crate::cli::args::{MailArgs, MailCommands};
use crate::output::{emit, emit_message};

pub async fn execute(ctx: Context, args: MailArgs) -> Result<()> {
    let client = ctx.client()?;
    let mail = client.mail();
    let format = ctx.output_format;

    match args.command {
        MailCommands::Users => {
            let users = mail.users().await?;
            emit(format, &users, |users| print_users(users))
        }
        MailCommands::AddUser {
            mailbox,
            user_password,
            privileges,
        } => {
            let resp = mail.add_user(&mailbox, &user_password, &privileges).await?;
            emit_message(format, &resp)
        }
        MailCommands::RemoveUser { mailbox } => {
            let resp = mail.remove_user(&mailbox).await?;
            emit_message(format, &resp)
        }
        MailCommands::AddPrivilege { mailbox, privilege } => {
            let resp = mail.add_user_privilege(&mailbox, &privilege).await?;
            emit_message(format, &resp)
        }
        MailCommands::RemovePrivilege { mailbox, privilege } => {
            let resp = mail.remove_user_privilege(&mailbox, &privilege).await?;
            emit_message(format, &resp)
        }
        MailCommands::SetPassword {
            mailbox,
            user_password,
        } => {
            let resp = mail.set_user_password(&mailbox, &user_password).await?;
            emit_message(format, &resp)
        }
        MailCommands::Privileges { mailbox } => {
            let privileges = mail.user_privileges(&mailbox).await?;
            emit_message(format, &privileges)
        }
        MailCommands::Domains => {
            let domains = mail.domains().await?;
            emit(format, &domains, |domains| {
                for domain in domains {
                    println!("{domain}");
                }
            })
        }
        MailCommands::Aliases => {
            let aliases = mail.aliases().await?;
            emit(format, &aliases, |aliases| print_aliases(aliases))
        }
        MailCommands::UpsertAlias {
            address,
            forwards_to,
            permitted_senders,
            no_update,
        } => {
            let resp = mail
                .upsert_alias(!no_update, &address, &forwards_to, &permitted_senders)
                .await?;
            emit_message(format, &resp)
        }
        MailCommands::RemoveAlias { address } => {
            let resp = mail.remove_alias(&address).await?;
            emit_message(format, &resp)
        }
    }
}

fn print_users(domains: &[MailUsers]) {
    for domain in domains {
        println!("{}", domain.domain.bold().underline());
        for user in &domain.users {
            let status = if user.is_active() {
                user.status.green()
            } else {
                user.status.red()
            };
            let admin = if user.is_admin() { "admin".yellow() } else { "".normal() };
            println!("  {:40} {:10} {}", user.email, status, admin);
        }
        println!();
    }
}

fn print_aliases(domains: &[MailAliases]) {
    for domain in domains {
        println!("{}", domain.domain.bold().underline());
        for alias in &domain.aliases {
            let marker = if alias.required { " (required)".dimmed() } else { "".normal() };
            println!(
                "  {}{} -> {}",
                alias.address_display.cyan(),
                marker,
                alias.forwards_to.join(", ")
            );
            if !alias.permitted_senders.is_empty() {
                println!(
                    "      {} {}",
                    "senders:".dimmed(),
                    alias.permitted_senders.join(", ")
                );
            }
        }
        println!();
    }
}
