//! IPv4 address and CIDR arithmetic.
//!
//! Provides [`Ipv4`] for a validated address and prefix length pair, along
//! with the unsigned 32-bit helpers used for every subnet calculation.

use crate::error::{CalcError, Result};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Pack an address into a u32, most significant octet first.
pub fn to_int(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Inverse of [`to_int`].
pub fn to_address(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(mask_from_prefix(0).unwrap(), 0);
/// ```
pub fn mask_from_prefix(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefix(len.to_string()))
    } else if len == 0 {
        // u32 << 32 overflows
        Ok(0)
    } else {
        Ok(u32::MAX << (MAX_LENGTH - len))
    }
}

/// Host bits of the subnet, the complement of the mask.
pub fn wildcard_from_prefix(len: u8) -> Result<u32> {
    Ok(!mask_from_prefix(len)?)
}

/// Network address (host bits cleared) as u32.
pub fn network_address(bits: u32, len: u8) -> Result<u32> {
    Ok(bits & mask_from_prefix(len)?)
}

/// Broadcast address (host bits set) as u32.
pub fn broadcast_address(bits: u32, len: u8) -> Result<u32> {
    let mask = mask_from_prefix(len)?;
    Ok((bits & mask) | !mask)
}

/// IPv4 address paired with a range checked prefix length.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Pair an address with a prefix, rejecting prefixes above 32.
    pub fn with_prefix(addr: Ipv4Addr, mask: u8) -> Result<Ipv4> {
        if mask > MAX_LENGTH {
            return Err(CalcError::InvalidPrefix(mask.to_string()));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The address as entered, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.mask
    }
}

impl FromStr for Ipv4 {
    type Err = CalcError;

    /// Parse CIDR notation, e.g. "10.0.0.0/24".
    fn from_str(s: &str) -> Result<Self> {
        let (addr, mask) = crate::processing::parse_cidr(s)?;
        Ipv4::with_prefix(addr, mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(mask_from_prefix(0).unwrap(), 0x00000000);
        assert_eq!(mask_from_prefix(1).unwrap(), 0x80000000);
        assert_eq!(mask_from_prefix(8).unwrap(), 0xFF000000);
        assert_eq!(mask_from_prefix(16).unwrap(), 0xFFFF0000);
        assert_eq!(mask_from_prefix(24).unwrap(), 0xFFFFFF00);
        assert_eq!(mask_from_prefix(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(mask_from_prefix(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(
            mask_from_prefix(33),
            Err(CalcError::InvalidPrefix("33".to_string()))
        );
    }

    #[test]
    fn test_wildcard_from_prefix() {
        assert_eq!(wildcard_from_prefix(0).unwrap(), 0xFFFFFFFF);
        assert_eq!(wildcard_from_prefix(24).unwrap(), 0x000000FF);
        assert_eq!(wildcard_from_prefix(32).unwrap(), 0);
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(Ipv4Addr::new(192, 168, 1, 10)), 0xC0A8010A);
        assert_eq!(to_int(Ipv4Addr::new(0, 0, 0, 0)), 0);
        assert_eq!(to_int(Ipv4Addr::new(255, 255, 255, 255)), u32::MAX);
        assert_eq!(to_address(0x0A000001), Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn test_to_int_round_trip() {
        // walk the whole u32 range in coarse steps, plus both ends
        let mut n: u64 = 0;
        while n <= u32::MAX as u64 {
            let bits = n as u32;
            assert_eq!(to_int(to_address(bits)), bits);
            n += 65_521;
        }
        assert_eq!(to_int(to_address(u32::MAX)), u32::MAX);
    }

    #[test]
    fn test_network_address() {
        let ip = to_int(Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(network_address(ip, 24).unwrap(), to_int(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(network_address(ip, 16).unwrap(), to_int(Ipv4Addr::new(192, 168, 0, 0)));
        assert_eq!(network_address(ip, 8).unwrap(), to_int(Ipv4Addr::new(192, 0, 0, 0)));
        assert_eq!(network_address(ip, 32).unwrap(), ip);
        assert_eq!(network_address(ip, 0).unwrap(), 0);
        assert!(network_address(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_address() {
        let ip = to_int(Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(
            broadcast_address(ip, 24).unwrap(),
            to_int(Ipv4Addr::new(192, 168, 1, 255))
        );
        assert_eq!(
            broadcast_address(ip, 16).unwrap(),
            to_int(Ipv4Addr::new(192, 168, 255, 255))
        );
        assert_eq!(broadcast_address(ip, 32).unwrap(), ip);
        assert_eq!(broadcast_address(ip, 0).unwrap(), u32::MAX);
        assert_eq!(broadcast_address(u32::MAX, 24).unwrap(), u32::MAX);
    }

    #[test]
    fn test_network_and_broadcast_share_network_bits() {
        let samples = [0u32, 1, 0x0A000001, 0xAC140505, 0xC0A8010A, 0xDEADBEEF, u32::MAX];
        for &ip in samples.iter() {
            for len in 0..=MAX_LENGTH {
                let mask = mask_from_prefix(len).unwrap();
                let wildcard = wildcard_from_prefix(len).unwrap();
                let net = network_address(ip, len).unwrap();
                let bcast = broadcast_address(ip, len).unwrap();
                assert_eq!(net & wildcard, 0, "ip={ip:#x} len={len}");
                assert_eq!(bcast & mask, net & mask, "ip={ip:#x} len={len}");
                assert_eq!(bcast & wildcard, wildcard, "ip={ip:#x} len={len}");
            }
        }
    }

    #[test]
    fn test_ipv4_from_str() {
        let ip: Ipv4 = "10.0.10.70/26".parse().unwrap();
        assert_eq!(ip.addr(), Ipv4Addr::new(10, 0, 10, 70));
        assert_eq!(ip.prefix(), 26);
        assert_eq!(ip.to_string(), "10.0.10.70/26");

        assert!(matches!(
            "10.0.10/26".parse::<Ipv4>(),
            Err(CalcError::InvalidAddress(_))
        ));
        assert!(matches!(
            "10.0.10.1/40".parse::<Ipv4>(),
            Err(CalcError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_ipv4_with_prefix_range() {
        let addr = Ipv4Addr::new(1, 1, 1, 1);
        assert_eq!(Ipv4::with_prefix(addr, 0).unwrap().prefix(), 0);
        assert_eq!(Ipv4::with_prefix(addr, 32).unwrap().prefix(), 32);
        assert_eq!(
            Ipv4::with_prefix(addr, 33),
            Err(CalcError::InvalidPrefix("33".to_string()))
        );
    }
}
