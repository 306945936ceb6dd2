//! Subnet calculation logic.
//!
//! This module contains the request pipeline:
//! - [`parse`] - Validation of raw address and prefix input
//! - [`classify`] - Address class and type
//! - [`calculate`] - Range and count derivation, the [`calculate()`] entry point

mod calculate;
mod classify;
mod parse;

// Re-export public functions
pub use calculate::{
    calculate, calculate_cidr, first_usable, last_usable, subnet_result, total_addresses,
    usable_hosts,
};
pub use classify::{address_class, address_type};
pub use parse::{
    dotted_to_octets, parse_cidr, parse_ipv4, validate_prefix, validate_prefix_number,
};
