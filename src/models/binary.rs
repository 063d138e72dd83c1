//! Conversion between dotted quads and 32 character binary strings.

use crate::error::{Result, SubnetError};
use crate::models::validate::{parse_dotted_quad, Field};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Width of the binary form of an IPv4 address.
const BINARY_WIDTH: usize = 32;

/// Convert a dotted quad to its 32 character binary form.
///
/// Each octet becomes 8 zero-padded bits, concatenated in order.
/// Octets above 255 are rejected rather than overflowing into the next octet.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::ip_to_binary;
/// assert_eq!(
///     ip_to_binary("192.168.0.1").unwrap(),
///     "11000000101010000000000000000001"
/// );
/// ```
pub fn ip_to_binary(dotted_quad: &str) -> Result<String> {
    let addr = parse_dotted_quad(dotted_quad, Field::Address)?;
    Ok(bits_to_binary(addr))
}

/// The 32 character binary form of an address.
pub fn bits_to_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).collect()
}

/// Convert a 32 character binary string back to a dotted quad.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::binary_to_ip;
/// assert_eq!(
///     binary_to_ip("11111111111111111111111100000000").unwrap(),
///     "255.255.255.0"
/// );
/// ```
pub fn binary_to_ip(bits: &str) -> Result<String> {
    if bits.len() != BINARY_WIDTH || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(SubnetError::InvalidBinary(bits.to_string()));
    }

    let dotted_quad = bits
        .as_bytes()
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, b| (acc << 1) | (b - b'0')))
        .join(".");
    Ok(dotted_quad)
}
