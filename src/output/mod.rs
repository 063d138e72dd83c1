//! Output formatting for a computed subnet.
//!
//! - [`terminal`] - labelled report lines
//! - [`csv`] - CSV header and row
//! - [`json`] - pretty printed JSON

mod csv;
mod json;
mod terminal;

use crate::models::Ipv4Subnet;
use clap::ValueEnum;
use std::error::Error;
use std::str::FromStr;

pub use csv::{csv_header, csv_row};
pub use json::to_json;
pub use terminal::{format_field, print_report, report_fields, report_lines, LABELS};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

/// Render a subnet in the given format, without colors.
pub fn render(subnet: &Ipv4Subnet, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let rendered = match format {
        OutputFormat::Text => report_lines(subnet).join("\n"),
        OutputFormat::Csv => format!("{}\n{}", csv_header(), csv_row(subnet)),
        OutputFormat::Json => to_json(subnet)?,
    };
    Ok(rendered)
}
