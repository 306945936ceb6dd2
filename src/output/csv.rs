//! CSV output formatting for a subnet result.

use super::format::addr_or_na;
use super::terminal::format_field;
use crate::models::SubnetResult;

const COLUMNS: [(&str, usize); 14] = [
    ("address", 17),
    ("prefix", 8),
    ("network", 17),
    ("broadcast", 17),
    ("first_usable", 17),
    ("last_usable", 17),
    ("total_addresses", 12),
    ("usable_hosts", 12),
    ("mask", 17),
    ("wildcard", 17),
    ("class", 7),
    ("type", 14),
    ("binary_address", 37),
    ("binary_mask", 37),
];

/// Quoted CSV header line.
pub fn csv_header() -> String {
    COLUMNS
        .iter()
        .map(|(name, width)| format_field(name, *width))
        .collect::<Vec<String>>()
        .join(",")
}

/// Quoted CSV value line for one result, columns as in [`csv_header`].
pub fn csv_row(result: &SubnetResult) -> String {
    let values = [
        result.address.to_string(),
        result.prefix.to_string(),
        result.network.to_string(),
        result.broadcast.to_string(),
        addr_or_na(result.first_usable),
        addr_or_na(result.last_usable),
        result.total_addresses.to_string(),
        result.usable_hosts.to_string(),
        result.mask.to_string(),
        result.wildcard.to_string(),
        result.class.letter().to_string(),
        result.address_type.to_string(),
        result.binary_address.clone(),
        result.binary_mask.clone(),
    ];
    log::trace!("csv_row() {} columns", values.len());

    values
        .iter()
        .zip(COLUMNS.iter())
        .map(|(value, (_, width))| format_field(value, *width))
        .collect::<Vec<String>>()
        .join(",")
}

/// Header and value line.
pub fn render_csv(result: &SubnetResult) -> String {
    format!("{}\n{}\n", csv_header(), csv_row(result))
}
