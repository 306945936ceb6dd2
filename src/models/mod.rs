//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and bit arithmetic:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetResult`] - Everything derived from one address/prefix pair
//! - [`AddressClass`] and [`AddressType`] - Classification of an address

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_address, mask_from_prefix, network_address, to_address, to_int,
    wildcard_from_prefix, Ipv4, MAX_LENGTH,
};
pub use subnet::{AddressClass, AddressType, SubnetResult};
