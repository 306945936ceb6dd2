//! Dotted, binary and count formatting helpers.

use crate::models::to_address;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// u32 mask as dotted-decimal.
pub fn mask_to_dotted(mask: u32) -> String {
    to_address(mask).to_string()
}

/// Four zero-padded 8-bit groups joined by '.'.
///
/// ```
/// use subnet_calc::output::to_binary_string;
/// assert_eq!(to_binary_string(0xFFFFFF00), "11111111.11111111.11111111.00000000");
/// ```
pub fn to_binary_string(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// The two line binary panel for an address and its mask.
pub fn binary_block(addr: Ipv4Addr, mask: Ipv4Addr) -> String {
    format!(
        "IP:      {}\nMASK:    {}",
        to_binary_string(u32::from(addr)),
        to_binary_string(u32::from(mask))
    )
}

/// Count with ',' thousands separators, e.g. `4,294,967,296`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let len = digits.len();
    digits
        .chars()
        .enumerate()
        .fold(String::with_capacity(len + len / 3), |mut acc, (i, c)| {
            if i > 0 && (len - i) % 3 == 0 {
                acc.push(',');
            }
            acc.push(c);
            acc
        })
}

/// Optional address, "N/A" when absent.
pub fn addr_or_na(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string()).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_to_dotted() {
        assert_eq!(mask_to_dotted(0), "0.0.0.0");
        assert_eq!(mask_to_dotted(0xFFFFFF00), "255.255.255.0");
        assert_eq!(mask_to_dotted(0xFFFFFFFC), "255.255.255.252");
        assert_eq!(mask_to_dotted(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_to_binary_string() {
        assert_eq!(to_binary_string(0), "00000000.00000000.00000000.00000000");
        assert_eq!(to_binary_string(0x0A000001), "00001010.00000000.00000000.00000001");
        assert_eq!(to_binary_string(u32::MAX).len(), 35);
    }

    #[test]
    fn test_binary_block() {
        let block = binary_block(Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(255, 0, 0, 0));
        assert_eq!(
            block,
            "IP:      00001010.00000000.00000000.00000001\nMASK:    11111111.00000000.00000000.00000000"
        );
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(254), "254");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(65_536), "65,536");
        assert_eq!(format_count(16_777_214), "16,777,214");
        assert_eq!(format_count(4_294_967_296), "4,294,967,296");
    }

    #[test]
    fn test_addr_or_na() {
        assert_eq!(addr_or_na(None), "N/A");
        assert_eq!(addr_or_na(Some(Ipv4Addr::new(1, 2, 3, 4))), "1.2.3.4");
    }
}
