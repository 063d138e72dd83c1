//! Error taxonomy for subnet construction.

use thiserror::Error;

/// Every way building an [`Ipv4Subnet`](crate::models::Ipv4Subnet) can fail.
///
/// All errors are raised at construction; there is no partially built subnet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid mask: {0}")]
    InvalidMask(String),

    #[error("Prefix must be an integer, got: {0}")]
    InvalidPrefixType(String),

    #[error("Prefix {0} is too large (must be 32 or less)")]
    PrefixTooLarge(String),

    #[error("Prefix {0} is negative")]
    NegativePrefix(String),

    #[error("Octet {octet} out of range 0-255 in {value}")]
    OctetOutOfRange { value: String, octet: String },

    #[error("Invalid binary address: {0}")]
    InvalidBinary(String),

    #[error("Mask {0} is not a contiguous run of leading ones")]
    NonContiguousMask(String),

    #[error("Give either a mask or a prefix, not both")]
    MaskAndPrefix,

    #[error("A mask or a prefix is required")]
    MissingMaskOrPrefix,
}

pub type Result<T> = std::result::Result<T, SubnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubnetError::PrefixTooLarge("33".to_string()).to_string(),
            "Prefix 33 is too large (must be 32 or less)"
        );
        assert_eq!(
            SubnetError::InvalidAddress("abc.1.1.1".to_string()).to_string(),
            "Invalid address: abc.1.1.1"
        );
        assert_eq!(
            SubnetError::OctetOutOfRange {
                value: "10.0.0.999".to_string(),
                octet: "999".to_string()
            }
            .to_string(),
            "Octet 999 out of range 0-255 in 10.0.0.999"
        );
    }

    #[test]
    fn test_boxed_error_shows_message() {
        let boxed: Box<dyn std::error::Error> =
            SubnetError::PrefixTooLarge("33".to_string()).into();
        assert_eq!(
            format!("Error: {boxed}"),
            "Error: Prefix 33 is too large (must be 32 or less)"
        );
    }
}
