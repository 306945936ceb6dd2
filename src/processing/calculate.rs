//! Subnet range and count derivation.
//!
//! Ties parsing, the bit arithmetic in [`crate::models`] and classification
//! together into a single [`SubnetResult`].

use super::classify::{address_class, address_type};
use super::parse::{parse_ipv4, validate_prefix};
use crate::error::Result;
use crate::models::{
    broadcast_address, mask_from_prefix, network_address, to_address, to_int,
    wildcard_from_prefix, Ipv4, SubnetResult, MAX_LENGTH,
};
use crate::output::to_binary_string;
use std::net::Ipv4Addr;

/// Number of addresses in a subnet of the given prefix length.
///
/// Returned as u64 so that /0 (2^32) fits.
pub fn total_addresses(len: u8) -> u64 {
    if len >= MAX_LENGTH {
        1
    } else {
        1u64 << (MAX_LENGTH - len)
    }
}

/// Addresses left after removing network and broadcast.
///
/// /31 and /32 have no usable range.
pub fn usable_hosts(len: u8, total: u64) -> u64 {
    if len >= MAX_LENGTH - 1 {
        0
    } else {
        total.saturating_sub(2)
    }
}

/// Address after the network address, None for /31 and /32.
pub fn first_usable(network: u32, len: u8) -> Option<Ipv4Addr> {
    (len < MAX_LENGTH - 1).then(|| to_address(network.wrapping_add(1)))
}

/// Address before the broadcast address, None for /31 and /32.
pub fn last_usable(broadcast: u32, len: u8) -> Option<Ipv4Addr> {
    (len < MAX_LENGTH - 1).then(|| to_address(broadcast.wrapping_sub(1)))
}

/// Calculate every subnet property for an address and prefix given as text.
///
/// # Errors
/// * [`crate::CalcError::InvalidAddress`] - address is not dotted-decimal IPv4
/// * [`crate::CalcError::InvalidPrefix`] - prefix is not an integer in [0,32]
pub fn calculate(address: &str, prefix: &str) -> Result<SubnetResult> {
    log::debug!("calculate({address}, {prefix})");
    let addr = parse_ipv4(address)?;
    let len = validate_prefix(prefix)?;
    subnet_result(Ipv4::with_prefix(addr, len)?)
}

/// Same as [`calculate`] for a single `a.b.c.d/p` string.
pub fn calculate_cidr(cidr: &str) -> Result<SubnetResult> {
    log::debug!("calculate_cidr({cidr})");
    subnet_result(cidr.parse::<Ipv4>()?)
}

/// Derive the result for an already validated [`Ipv4`].
pub fn subnet_result(ipv4: Ipv4) -> Result<SubnetResult> {
    let addr = ipv4.addr();
    let bits = to_int(addr);
    let len = ipv4.prefix();

    let mask = mask_from_prefix(len)?;
    let wildcard = wildcard_from_prefix(len)?;
    let network = network_address(bits, len)?;
    let broadcast = broadcast_address(bits, len)?;
    log::trace!(
        "{ipv4}: mask={mask:#010x} network={network:#010x} broadcast={broadcast:#010x}"
    );

    let total = total_addresses(len);
    Ok(SubnetResult {
        address: addr,
        prefix: len,
        network: to_address(network),
        broadcast: to_address(broadcast),
        first_usable: first_usable(network, len),
        last_usable: last_usable(broadcast, len),
        total_addresses: total,
        usable_hosts: usable_hosts(len, total),
        mask: to_address(mask),
        wildcard: to_address(wildcard),
        class: address_class(addr.octets()[0]),
        address_type: address_type(addr),
        binary_address: to_binary_string(bits),
        binary_mask: to_binary_string(mask),
    })
}
