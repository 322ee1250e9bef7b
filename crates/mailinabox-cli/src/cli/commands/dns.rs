//! `miab dns` - custom records, nameservers and zones.

use anyhow::Result;
use colored::Colorize;
use mailinabox::{Record, Zone};
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::{DnsArgs, DnsCommands};
use crate::output::{emit, emit_message};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    record_type: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub async fn execute(ctx: Context, args: DnsArgs) -> Result<()> {
    let client = ctx.client()?;
    let dns = client.dns();
    let format = ctx.output_format;

    match args.command {
        DnsCommands::Nameservers => {
            let names = dns.secondary_nameservers().await?;
            emit(format, &names, |names| {
                if names.is_empty() {
                    println!("{}", "No secondary nameservers.".dimmed());
                }
                for name in names {
                    println!("{}", name.cyan());
                }
            })
        }
        DnsCommands::SetNameservers { hostnames } => {
            let resp = dns.set_secondary_nameservers(&hostnames).await?;
            emit_message(format, &resp)
        }
        DnsCommands::Zones => {
            let zones = dns.zones().await?;
            emit(format, &zones, |zones| {
                for zone in zones {
                    println!("{zone}");
                }
            })
        }
        DnsCommands::ZoneFile { zone } => {
            let text = dns.zone_file(&zone).await?;
            emit_message(format, &text)
        }
        DnsCommands::Records { name, record_type } => {
            let records = match (name, record_type) {
                (Some(name), Some(rtype)) => dns.records(&name, &rtype).await?,
                (Some(name), None) => dns.a_records(&name).await?,
                (None, _) => dns.all_records().await?,
            };
            emit(format, &records, |records| print_records(records))
        }
        DnsCommands::Add {
            name,
            value,
            record_type,
        } => {
            let resp = match record_type {
                Some(rtype) => dns.add_record(&Record::new(name, rtype, value)).await?,
                None => dns.add_a_record(&name, &value).await?,
            };
            emit_message(format, &resp)
        }
        DnsCommands::Update {
            name,
            value,
            record_type,
        } => {
            let resp = match record_type {
                Some(rtype) => dns.update_record(&Record::new(name, rtype, ""), &value).await?,
                None => dns.update_a_record(&name, &value).await?,
            };
            emit_message(format, &resp)
        }
        DnsCommands::Remove {
            name,
            value,
            record_type,
        } => {
            let resp = match record_type {
                Some(rtype) => dns.remove_record(&Record::new(name, rtype, value)).await?,
                None => dns.remove_a_record(&name, &value).await?,
            };
            emit_message(format, &resp)
        }
        DnsCommands::Dump => {
            let zones = dns.dump().await?;
            emit(format, &zones, |zones| print_dump(zones, ctx.verbose))
        }
        DnsCommands::UpdateDns { force } => {
            let resp = dns.update_dns(force).await?;
            emit_message(format, &resp)
        }
    }
}

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("{}", "No custom records.".dimmed());
        return;
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            name: r.name.clone(),
            record_type: r.record_type.clone(),
            value: r.value.clone(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

fn print_dump(zones: &[Zone], explain: bool) {
    for zone in zones {
        println!("{}", zone.zone.bold().underline());
        if zone.is_empty() {
            println!("  {}", "(no records)".dimmed());
        }
        for record in &zone.records {
            println!(
                "  {:6} {:40} {}",
                record.record_type.yellow(),
                record.name,
                record.value
            );
            if explain {
                if let Some(why) = &record.explanation {
                    println!("         {}", why.dimmed());
                }
            }
        }
        println!();
    }
}
