//! IPv4 subnet calculator.
//!
//! Computes mask, prefix, network, broadcast and host count from an address
//! and either a subnet mask or a CIDR prefix length.
//!
//! ```
//! use ipv4_subnet_calc::{Ipv4Subnet, MaskOrPrefix};
//! let subnet = Ipv4Subnet::new(
//!     "192.168.0.1",
//!     MaskOrPrefix::Mask("255.255.255.0".to_string()),
//! )
//! .unwrap();
//! assert_eq!(subnet.network(), "192.168.0.0");
//! assert_eq!(subnet.broadcast(), "192.168.0.255");
//! assert_eq!(subnet.prefix(), 24);
//! assert_eq!(subnet.host_count(), 256);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::SubnetError;
pub use models::{binary_to_ip, ip_to_binary, Ipv4Subnet, MaskOrPrefix, Validation};
