//! Subnet calculation result model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Classful address band, taken from the first octet.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// 224-239, multicast.
    D,
    /// 240-255, experimental.
    E,
}

impl AddressClass {
    /// Single letter for the class.
    pub fn letter(&self) -> char {
        match self {
            AddressClass::A => 'A',
            AddressClass::B => 'B',
            AddressClass::C => 'C',
            AddressClass::D => 'D',
            AddressClass::E => 'E',
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressClass::D => write!(f, "D (Multicast)"),
            AddressClass::E => write!(f, "E (Experimental)"),
            other => write!(f, "{}", other.letter()),
        }
    }
}

/// Coarse address usage category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Private,
    Loopback,
    #[serde(rename = "Public/Other")]
    PublicOther,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            AddressType::Private => "Private",
            AddressType::Loopback => "Loopback",
            AddressType::PublicOther => "Public/Other",
        };
        write!(f, "{s}")
    }
}

/// Everything derived from one (address, prefix) pair.
///
/// Built fresh by [`crate::calculate`]; never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Address as entered.
    pub address: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// None for /31 and /32.
    pub first_usable: Option<Ipv4Addr>,
    /// None for /31 and /32.
    pub last_usable: Option<Ipv4Addr>,
    /// Addresses in the subnet, 2^32 for /0.
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub class: AddressClass,
    pub address_type: AddressType,
    /// Address as four dotted 8-bit groups.
    pub binary_address: String,
    /// Mask as four dotted 8-bit groups.
    pub binary_mask: String,
}

impl SubnetResult {
    /// Subnet in CIDR notation, e.g. `192.168.1.0/24`.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix)
    }
}
