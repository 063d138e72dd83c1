//! Turning textual and JSON input into an [`Ipv4Subnet`].

use crate::error::{Result, SubnetError};
use crate::models::{Ipv4Subnet, MaskOrPrefix, Validation};
use serde_json::Value;
use std::num::{IntErrorKind, ParseIntError};

/// Parse a prefix length given as text.
///
/// Only integers are accepted. Range is checked when the subnet is built,
/// except for integers too wide for i64 which are out of range already.
pub fn parse_prefix(prefix: &str) -> Result<i64> {
    let trimmed = prefix.trim();
    trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => SubnetError::PrefixTooLarge(trimmed.to_string()),
        IntErrorKind::NegOverflow => SubnetError::NegativePrefix(trimmed.to_string()),
        _ => SubnetError::InvalidPrefixType(prefix.to_string()),
    })
}

/// Build a subnet from CIDR notation, e.g. "10.0.0.5/30".
pub fn parse_cidr(addr_cidr: &str, validation: Validation) -> Result<Ipv4Subnet> {
    let addr_cidr = addr_cidr.trim();
    let (address, prefix) = addr_cidr
        .split_once('/')
        .ok_or(SubnetError::MissingMaskOrPrefix)?;
    let prefix = parse_prefix(prefix)?;
    Ipv4Subnet::with_validation(address, MaskOrPrefix::Prefix(prefix), validation)
}

/// Build a subnet from command line style arguments.
///
/// `address` may carry its own "/prefix", in which case neither `mask` nor
/// `prefix` may be given.
pub fn from_args(
    address: &str,
    mask: Option<&str>,
    prefix: Option<&str>,
    validation: Validation,
) -> Result<Ipv4Subnet> {
    if address.contains('/') {
        if mask.is_some() || prefix.is_some() {
            return Err(SubnetError::MaskAndPrefix);
        }
        return parse_cidr(address, validation);
    }
    let prefix = prefix.map(parse_prefix).transpose()?;
    Ipv4Subnet::from_parts(address, mask, prefix, validation)
}

/// Build a subnet from a JSON object with `address` and one of `mask`/`prefix`.
///
/// ```
/// use ipv4_subnet_calc::input::from_json;
/// use ipv4_subnet_calc::models::Validation;
/// let value = serde_json::json!({"address": "10.0.0.5", "prefix": 30});
/// let subnet = from_json(&value, Validation::Loose).unwrap();
/// assert_eq!(subnet.network(), "10.0.0.4");
/// ```
pub fn from_json(value: &Value, validation: Validation) -> Result<Ipv4Subnet> {
    let address = match value.get("address") {
        Some(Value::String(address)) => address.as_str(),
        Some(other) => return Err(SubnetError::InvalidAddress(other.to_string())),
        None => return Err(SubnetError::InvalidAddress(value.to_string())),
    };
    let mask = match value.get("mask") {
        None | Some(Value::Null) => None,
        Some(Value::String(mask)) => Some(mask.as_str()),
        Some(other) => return Err(SubnetError::InvalidMask(other.to_string())),
    };
    let prefix = match value.get("prefix") {
        None | Some(Value::Null) => None,
        Some(prefix) => Some(json_prefix(prefix)?),
    };
    Ipv4Subnet::from_parts(address, mask, prefix, validation)
}

/// Integer JSON numbers above i64::MAX are only representable as u64.
fn json_prefix(prefix: &Value) -> Result<i64> {
    match prefix.as_i64() {
        Some(prefix) => Ok(prefix),
        None if prefix.is_u64() => Err(SubnetError::PrefixTooLarge(prefix.to_string())),
        None => Err(SubnetError::InvalidPrefixType(prefix.to_string())),
    }
}
