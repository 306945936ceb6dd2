//! Terminal output utilities.
//!
//! Provides the aligned text view of a result and field formatting helpers.

use super::format::{addr_or_na, binary_block, format_count};
use crate::models::SubnetResult;
use colored::Colorize;

const LABEL_WIDTH: usize = 16;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Labelled rows for every field of a result, in display order.
pub fn result_rows(result: &SubnetResult) -> Vec<(&'static str, String)> {
    vec![
        ("Address", format!("{}/{}", result.address, result.prefix)),
        ("Network", result.network.to_string()),
        ("Broadcast", result.broadcast.to_string()),
        ("First usable", addr_or_na(result.first_usable)),
        ("Last usable", addr_or_na(result.last_usable)),
        ("Total hosts", format_count(result.total_addresses)),
        ("Usable hosts", format_count(result.usable_hosts)),
        ("Subnet mask", result.mask.to_string()),
        ("Wildcard mask", result.wildcard.to_string()),
        ("IP class", result.class.to_string()),
        ("IP type", result.address_type.to_string()),
    ]
}

/// Render a result as an aligned two column table plus the binary panel.
pub fn render_text(result: &SubnetResult) -> String {
    let mut out = String::new();
    for (label, value) in result_rows(result) {
        let label = format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH);
        out.push_str(&format!("{}{value}\n", label.bold()));
    }
    out.push('\n');
    out.push_str(&binary_block(result.address, result.mask).cyan().to_string());
    out.push('\n');
    out
}
