//! IPv4 subnet built from an address and either a mask or a prefix length.

use crate::error::{Result, SubnetError};
use crate::models::binary::bits_to_binary;
use crate::models::bits::{
    broadcast_addr, cut_addr, get_cidr_mask, is_contiguous, prefix_from_mask, MAX_LENGTH,
};
use crate::models::validate::{check_contiguous, parse_dotted_quad, Field};
use serde::ser::SerializeStruct;
use serde::Serialize;
use std::net::Ipv4Addr;

/// The one of mask/prefix that was supplied; the other is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskOrPrefix {
    /// Dotted-quad subnet mask, e.g. "255.255.255.0".
    Mask(String),
    /// CIDR prefix length. Signed so out-of-range input can be reported.
    Prefix(i64),
}

/// How strictly a supplied mask is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Syntax and octet range only. A non-contiguous mask is accepted and
    /// its prefix is the count of its set bits.
    #[default]
    Loose,
    /// Also require the mask to be a contiguous run of leading ones.
    Strict,
}

/// IPv4 address with its mask, prefix, network and broadcast addresses.
///
/// Everything except the host count is computed once in the constructor.
/// There are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Subnet {
    address: Ipv4Addr,
    mask: Ipv4Addr,
    prefix: u8,
    network: Ipv4Addr,
    broadcast: Ipv4Addr,
}

impl Ipv4Subnet {
    /// Build a subnet with [`Validation::Loose`].
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::{Ipv4Subnet, MaskOrPrefix};
    /// let subnet = Ipv4Subnet::new("10.0.0.5", MaskOrPrefix::Prefix(30)).unwrap();
    /// assert_eq!(subnet.mask(), "255.255.255.252");
    /// assert_eq!(subnet.network(), "10.0.0.4");
    /// assert_eq!(subnet.broadcast(), "10.0.0.7");
    /// assert_eq!(subnet.host_count(), 4);
    /// ```
    pub fn new(address: &str, input: MaskOrPrefix) -> Result<Ipv4Subnet> {
        Self::with_validation(address, input, Validation::default())
    }

    /// Build a subnet, validating the inputs at the given strictness.
    pub fn with_validation(
        address: &str,
        input: MaskOrPrefix,
        validation: Validation,
    ) -> Result<Ipv4Subnet> {
        log::debug!("Ipv4Subnet::with_validation({address}, {input:?}, {validation:?})");

        let address = parse_dotted_quad(address, Field::Address)?;
        let (mask, prefix) = resolve_mask_prefix(input, validation)?;
        let network = cut_addr(address, prefix)?;
        let broadcast = broadcast_addr(address, prefix)?;

        log::trace!("{address}/{prefix} mask={mask} network={network} broadcast={broadcast}");
        Ok(Ipv4Subnet {
            address,
            mask,
            prefix,
            network,
            broadcast,
        })
    }

    /// Build from separately optional mask and prefix.
    ///
    /// Exactly one of the two must be given.
    pub fn from_parts(
        address: &str,
        mask: Option<&str>,
        prefix: Option<i64>,
        validation: Validation,
    ) -> Result<Ipv4Subnet> {
        let input = match (mask, prefix) {
            (Some(mask), None) => MaskOrPrefix::Mask(mask.to_string()),
            (None, Some(prefix)) => MaskOrPrefix::Prefix(prefix),
            (Some(_), Some(_)) => return Err(SubnetError::MaskAndPrefix),
            (None, None) => return Err(SubnetError::MissingMaskOrPrefix),
        };
        Self::with_validation(address, input, validation)
    }

    pub fn address(&self) -> String {
        self.address.to_string()
    }

    pub fn mask(&self) -> String {
        self.mask.to_string()
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Address with all host bits cleared.
    pub fn network(&self) -> String {
        self.network.to_string()
    }

    /// Address with all host bits set.
    pub fn broadcast(&self) -> String {
        self.broadcast.to_string()
    }

    /// Number of addresses in the subnet, 2^(32 - prefix).
    ///
    /// u64 since a /0 holds 2^32 addresses.
    pub fn host_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    pub fn address_ipv4(&self) -> Ipv4Addr {
        self.address
    }

    pub fn mask_ipv4(&self) -> Ipv4Addr {
        self.mask
    }

    pub fn network_ipv4(&self) -> Ipv4Addr {
        self.network
    }

    pub fn broadcast_ipv4(&self) -> Ipv4Addr {
        self.broadcast
    }

    pub fn address_binary(&self) -> String {
        bits_to_binary(self.address)
    }

    pub fn mask_binary(&self) -> String {
        bits_to_binary(self.mask)
    }

    pub fn network_binary(&self) -> String {
        bits_to_binary(self.network)
    }

    pub fn broadcast_binary(&self) -> String {
        bits_to_binary(self.broadcast)
    }
}

/// Derive whichever of mask/prefix was not supplied from the one that was.
fn resolve_mask_prefix(input: MaskOrPrefix, validation: Validation) -> Result<(Ipv4Addr, u8)> {
    match input {
        MaskOrPrefix::Mask(mask) => {
            let mask = parse_dotted_quad(&mask, Field::Mask)?;
            match validation {
                Validation::Strict => check_contiguous(mask)?,
                Validation::Loose => {
                    if !is_contiguous(mask) {
                        log::warn!(
                            "Mask {mask} is not contiguous, using its set bit count {} as prefix",
                            prefix_from_mask(mask)
                        );
                    }
                }
            }
            Ok((mask, prefix_from_mask(mask)))
        }
        MaskOrPrefix::Prefix(prefix) => {
            let prefix = check_prefix(prefix)?;
            let mask = Ipv4Addr::from(get_cidr_mask(prefix)?);
            Ok((mask, prefix))
        }
    }
}

fn check_prefix(prefix: i64) -> Result<u8> {
    if prefix < 0 {
        Err(SubnetError::NegativePrefix(prefix.to_string()))
    } else if prefix > i64::from(MAX_LENGTH) {
        Err(SubnetError::PrefixTooLarge(prefix.to_string()))
    } else {
        Ok(prefix as u8)
    }
}

impl std::fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl Serialize for Ipv4Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut state = serializer.serialize_struct("Ipv4Subnet", 6)?;
        state.serialize_field("address", &self.address())?;
        state.serialize_field("mask", &self.mask())?;
        state.serialize_field("network", &self.network())?;
        state.serialize_field("broadcast", &self.broadcast())?;
        state.serialize_field("prefix", &self.prefix)?;
        state.serialize_field("host_count", &self.host_count())?;
        state.end()
    }
}
