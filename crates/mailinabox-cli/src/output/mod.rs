//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Print `value` as JSON or YAML, or hand it to `pretty` for text output.
pub fn emit<T, F>(format: OutputFormat, value: &T, pretty: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Pretty => pretty(value),
    }
    Ok(())
}

/// Print the acknowledgement text of a mutation.
///
/// Structured formats wrap it as `{"message": ...}` so scripts always get
/// a document back.
pub fn emit_message(format: OutputFormat, message: &str) -> Result<()> {
    #[derive(Serialize)]
    struct Message<'a> {
        message: &'a str,
    }

    emit(format, &Message { message }, |m| {
        if m.message.is_empty() {
            println!("{}", "Done.".green());
        } else {
            println!("{}", m.message);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for format in [OutputFormat::Pretty, OutputFormat::Json, OutputFormat::Yaml] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
