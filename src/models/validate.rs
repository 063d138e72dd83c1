//! Validation stages for textual dotted-quad input.
//!
//! Stages run in order:
//! 1. [`check_syntax`] - four groups of 1-3 ASCII digits separated by dots
//! 2. [`check_octets`] - each group must fit in 0-255
//! 3. [`check_contiguous`] - masks only, and only under strict validation

use crate::error::{Result, SubnetError};
use crate::models::bits::is_contiguous;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Regex for the dotted-quad syntax check. Segments are not range checked here.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

/// Which input a dotted quad was supplied as, so errors name the right field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Address,
    Mask,
}

impl Field {
    fn invalid(self, value: &str) -> SubnetError {
        match self {
            Field::Address => SubnetError::InvalidAddress(value.to_string()),
            Field::Mask => SubnetError::InvalidMask(value.to_string()),
        }
    }
}

/// Syntax stage: returns the four digit groups.
///
/// Accepts "999.1.1.1" but not "abc.1.1.1" or "1.1.1".
pub fn check_syntax(value: &str, field: Field) -> Result<[&str; 4]> {
    let caps = get_dotted_quad_regex().captures(value).ok_or_else(|| {
        log::debug!("{field:?} failed dotted-quad syntax: {value:?}");
        field.invalid(value)
    })?;
    Ok([1, 2, 3, 4].map(|i| caps.get(i).map_or("", |m| m.as_str())))
}

/// Octet range stage: each digit group from [`check_syntax`] must fit in a u8.
pub fn check_octets(value: &str, segments: [&str; 4]) -> Result<Ipv4Addr> {
    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(segments) {
        *octet = segment
            .parse()
            .map_err(|_| SubnetError::OctetOutOfRange {
                value: value.to_string(),
                octet: segment.to_string(),
            })?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Run the syntax and octet range stages.
pub fn parse_dotted_quad(value: &str, field: Field) -> Result<Ipv4Addr> {
    let segments = check_syntax(value, field)?;
    check_octets(value, segments)
}

/// Contiguity stage: the mask's set bits must be one leading run.
pub fn check_contiguous(mask: Ipv4Addr) -> Result<()> {
    if is_contiguous(mask) {
        Ok(())
    } else {
        Err(SubnetError::NonContiguousMask(mask.to_string()))
    }
}
