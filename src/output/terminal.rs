//! Terminal output utilities.
//!
//! Provides the labelled report and field formatting helpers.

use crate::models::Ipv4Subnet;
use colored::Colorize;

/// Report labels, in print order.
pub const LABELS: [&str; 6] = ["IP", "Mask", "Network", "Broadcast", "Prefix", "Host count"];

/// The six report values paired with their labels.
pub fn report_fields(subnet: &Ipv4Subnet) -> [(&'static str, String); 6] {
    [
        (LABELS[0], subnet.address()),
        (LABELS[1], subnet.mask()),
        (LABELS[2], subnet.network()),
        (LABELS[3], subnet.broadcast()),
        (LABELS[4], subnet.prefix().to_string()),
        (LABELS[5], subnet.host_count().to_string()),
    ]
}

/// Plain "Label: value" lines.
pub fn report_lines(subnet: &Ipv4Subnet) -> Vec<String> {
    report_fields(subnet)
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect()
}

/// Print the report to stdout with bold labels.
pub fn print_report(subnet: &Ipv4Subnet) {
    log::info!("#Start print_report() {subnet}");
    for (label, value) in report_fields(subnet) {
        println!("{}: {}", label.bold(), value.as_str().green());
    }
}

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}
