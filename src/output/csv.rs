//! CSV output formatting for a subnet.

use super::terminal::{format_field, report_fields, LABELS};
use crate::models::Ipv4Subnet;

/// Column widths, matching [`LABELS`] order.
const WIDTHS: [usize; 6] = [18, 18, 18, 18, 8, 13];

/// CSV header row.
pub fn csv_header() -> String {
    LABELS
        .iter()
        .zip(WIDTHS)
        .map(|(label, width)| format_field(label, width))
        .collect::<Vec<String>>()
        .join(",")
}

/// One CSV row with the subnet's six report fields.
pub fn csv_row(subnet: &Ipv4Subnet) -> String {
    report_fields(subnet)
        .iter()
        .zip(WIDTHS)
        .map(|((_, value), width)| format_field(value, width))
        .collect::<Vec<String>>()
        .join(",")
}
