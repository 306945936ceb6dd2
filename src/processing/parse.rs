//! Parsing and validation of user supplied addresses and prefixes.

use crate::error::{CalcError, Result};
use crate::models::MAX_LENGTH;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

static OCTET_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_octet_regex() -> &'static Regex {
    OCTET_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^/?([0-9]+)$").expect("Invalid Regex"))
}

/// Split a dotted-decimal string into its four octets.
///
/// Each component must be ASCII digits only with a value in [0,255]; leading
/// zeros are allowed.
pub fn dotted_to_octets(input: &str) -> Result<[u8; 4]> {
    let input = input.trim();
    let invalid = || CalcError::InvalidAddress(input.to_string());

    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != 4 {
        log::trace!("dotted_to_octets({input}) got {} parts", parts.len());
        return Err(invalid());
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts.iter()) {
        if !get_octet_regex().is_match(part) {
            return Err(invalid());
        }
        let value: u32 = part.parse().map_err(|_| invalid())?;
        *octet = u8::try_from(value).map_err(|_| invalid())?;
    }
    Ok(octets)
}

/// Parse a dotted-decimal IPv4 address.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr> {
    let [a, b, c, d] = dotted_to_octets(input)?;
    Ok(Ipv4Addr::new(a, b, c, d))
}

/// Validate a prefix length given as text, e.g. `24` or `/24`.
pub fn validate_prefix(input: &str) -> Result<u8> {
    let input = input.trim();
    let invalid = || CalcError::InvalidPrefix(input.to_string());

    let caps = get_prefix_regex().captures(input).ok_or_else(invalid)?;
    let len: u32 = caps[1].parse().map_err(|_| invalid())?;
    if len > MAX_LENGTH as u32 {
        return Err(invalid());
    }
    Ok(len as u8)
}

/// Validate a prefix length given as a number.
pub fn validate_prefix_number(len: i64) -> Result<u8> {
    if (0..=MAX_LENGTH as i64).contains(&len) {
        Ok(len as u8)
    } else {
        Err(CalcError::InvalidPrefix(len.to_string()))
    }
}

/// Parse `a.b.c.d/p` into its address and prefix length.
pub fn parse_cidr(input: &str) -> Result<(Ipv4Addr, u8)> {
    let input = input.trim();
    let (addr, len) = input
        .split_once('/')
        .ok_or_else(|| CalcError::InvalidPrefix(input.to_string()))?;
    if len.contains('/') {
        return Err(CalcError::InvalidPrefix(len.to_string()));
    }
    let addr = parse_ipv4(addr)?;
    let len = validate_prefix(len)?;
    Ok((addr, len))
}
