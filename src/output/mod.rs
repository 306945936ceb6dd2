//! Output formatting for subnet results.
//!
//! This module handles formatting and outputting a [`SubnetResult`]:
//! - [`format`] - Dotted, binary and count helpers
//! - [`terminal`] - Aligned text output with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output

mod csv;
mod format;
mod json;
mod terminal;

use crate::models::SubnetResult;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::str::FromStr;

pub use csv::{csv_header, csv_row, render_csv};
pub use format::{addr_or_na, binary_block, format_count, mask_to_dotted, to_binary_string};
pub use json::render_json;
pub use terminal::{format_field, render_text, result_rows};

/// How a result is written to stdout.
#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
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

/// Render a result in the requested format.
pub fn render(result: &SubnetResult, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    log::debug!("render({}, {format:?})", result.cidr());
    let out = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Csv => render_csv(result),
        OutputFormat::Json => render_json(result)?,
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" CSV ".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_each_format() {
        let r = calculate("172.20.5.5", "30").unwrap();
        assert!(render(&r, OutputFormat::Text).unwrap().contains("172.20.5.4"));
        assert!(render(&r, OutputFormat::Csv).unwrap().contains("\"172.20.5.7\""));
        assert!(render(&r, OutputFormat::Json)
            .unwrap()
            .contains("\"broadcast\": \"172.20.5.7\""));
    }
}
