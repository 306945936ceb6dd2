//! Address class and type lookup.

use crate::models::{AddressClass, AddressType};
use std::net::Ipv4Addr;

/// Classful band of an address from its first octet.
pub fn address_class(first_octet: u8) -> AddressClass {
    match first_octet {
        0..=127 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=255 => AddressClass::E,
    }
}

/// RFC 1918 private, loopback, or anything else.
pub fn address_type(addr: Ipv4Addr) -> AddressType {
    match addr.octets() {
        [10, ..] => AddressType::Private,
        [172, 16..=31, ..] => AddressType::Private,
        [192, 168, ..] => AddressType::Private,
        [127, ..] => AddressType::Loopback,
        _ => AddressType::PublicOther,
    }
}
