//! JSON output.

use crate::models::Ipv4Subnet;

/// Pretty printed JSON object with the six report fields.
pub fn to_json(subnet: &Ipv4Subnet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(subnet)
}
