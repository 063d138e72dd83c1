//! Domain models for IPv4 subnet calculation.
//!
//! - [`Ipv4Subnet`] - address, mask and prefix with the derived network/broadcast
//! - [`binary`] - dotted-quad <-> 32 character binary string conversion
//! - [`bits`] - u32 CIDR arithmetic
//! - [`validate`] - the named validation stages applied to textual input

pub mod binary;
pub mod bits;
mod subnet;
pub mod validate;

// Re-export public types
pub use binary::{binary_to_ip, bits_to_binary, ip_to_binary};
pub use bits::{
    broadcast_addr, cut_addr, get_cidr_mask, is_contiguous, prefix_from_mask, MAX_LENGTH,
};
pub use subnet::{Ipv4Subnet, MaskOrPrefix, Validation};
pub use validate::Field;
