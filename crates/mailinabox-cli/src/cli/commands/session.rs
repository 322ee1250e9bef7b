//! `miab login` / `miab logout`.

use anyhow::Result;
use colored::Colorize;
use mailinabox::Session;

use super::Context;
use crate::output::emit;

pub async fn login(ctx: Context) -> Result<()> {
    let session = ctx.client()?.user().login().await?;
    emit(ctx.output_format, &session, print_session)
}

pub async fn logout(ctx: Context) -> Result<()> {
    let session = ctx.client()?.user().logout().await?;
    emit(ctx.output_format, &session, |_| {
        println!("{}", "Logged out.".green());
    })
}

fn print_session(session: &Session) {
    println!("{} {}", "Logged in as".bold(), session.email.cyan());
    if !session.privileges.is_empty() {
        println!("  {} {}", "privileges:".bold(), session.privileges.join(", "));
    }
    if !session.api_key.is_empty() {
        println!("  {} {}", "api_key:".bold(), session.api_key);
    }
}
