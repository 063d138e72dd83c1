//! Integration tests for ipv4-subnet-calc
//!
//! These tests go through the public API the way a caller would: textual
//! input in, the six report fields out.

use ipv4_subnet_calc::input::{from_args, from_json, parse_cidr};
use ipv4_subnet_calc::models::get_cidr_mask;
use ipv4_subnet_calc::output::{render, report_lines, OutputFormat};
use ipv4_subnet_calc::{
    binary_to_ip, ip_to_binary, Ipv4Subnet, MaskOrPrefix, SubnetError, Validation,
};
use std::net::Ipv4Addr;

#[test]
fn test_mask_given() {
    let subnet =
        Ipv4Subnet::new("192.168.0.1", MaskOrPrefix::Mask("255.255.255.0".to_string()))
            .expect("valid subnet");

    assert_eq!(subnet.network(), "192.168.0.0");
    assert_eq!(subnet.broadcast(), "192.168.0.255");
    assert_eq!(subnet.prefix(), 24);
    assert_eq!(subnet.host_count(), 256);
}

#[test]
fn test_prefix_given() {
    let subnet = Ipv4Subnet::new("10.0.0.5", MaskOrPrefix::Prefix(30)).expect("valid subnet");

    assert_eq!(subnet.mask(), "255.255.255.252");
    assert_eq!(subnet.network(), "10.0.0.4");
    assert_eq!(subnet.broadcast(), "10.0.0.7");
    assert_eq!(subnet.host_count(), 4);
}

#[test]
fn test_validation_errors() {
    assert!(matches!(
        Ipv4Subnet::new("abc.1.1.1", MaskOrPrefix::Prefix(24)),
        Err(SubnetError::InvalidAddress(_))
    ));
    assert!(matches!(
        Ipv4Subnet::new("10.0.0.1", MaskOrPrefix::Mask("255.255.255".to_string())),
        Err(SubnetError::InvalidMask(_))
    ));
    assert_eq!(
        Ipv4Subnet::new("10.0.0.1", MaskOrPrefix::Prefix(33)),
        Err(SubnetError::PrefixTooLarge("33".to_string()))
    );
    assert!(matches!(
        from_json(
            &serde_json::json!({"address": "10.0.0.1", "prefix": "24"}),
            Validation::Loose
        ),
        Err(SubnetError::InvalidPrefixType(_))
    ));
}

#[test]
fn test_non_contiguous_mask_loose_and_strict() {
    let loose = from_args("10.20.30.40", Some("255.0.255.0"), None, Validation::Loose)
        .expect("loose validation accepts non-contiguous masks");
    assert_eq!(loose.prefix(), 16);

    assert_eq!(
        from_args("10.20.30.40", Some("255.0.255.0"), None, Validation::Strict),
        Err(SubnetError::NonContiguousMask("255.0.255.0".to_string()))
    );
}

#[test]
fn test_prefix_mask_prefix() {
    for prefix in 0..=32i64 {
        let from_prefix = Ipv4Subnet::new("198.51.100.7", MaskOrPrefix::Prefix(prefix))
            .expect("prefix in range");
        let from_mask = Ipv4Subnet::new("198.51.100.7", MaskOrPrefix::Mask(from_prefix.mask()))
            .expect("derived mask is valid");

        assert_eq!(i64::from(from_mask.prefix()), prefix);
        assert_eq!(from_mask, from_prefix);
        assert_eq!(from_prefix.host_count(), 2u64.pow(32 - prefix as u32));
        assert_eq!(
            u32::from(from_prefix.mask_ipv4()),
            get_cidr_mask(prefix as u8).unwrap()
        );
    }
}

#[test]
fn test_network_contains_address() {
    let subnet = parse_cidr("172.16.200.9/20", Validation::Strict).expect("valid cidr");
    assert_eq!(subnet.network(), "172.16.192.0");
    assert_eq!(subnet.broadcast(), "172.16.207.255");
    assert!(subnet.network_ipv4() <= subnet.address_ipv4());
    assert!(subnet.address_ipv4() <= subnet.broadcast_ipv4());
    assert_eq!(
        u32::from(subnet.broadcast_ipv4()) - u32::from(subnet.network_ipv4()) + 1,
        subnet.host_count() as u32
    );
}

#[test]
fn test_binary_helpers() {
    for ip in ["192.168.0.1", "10.0.0.5", "0.0.0.0", "255.255.255.255"] {
        let bits = ip_to_binary(ip).expect("valid ip");
        assert_eq!(bits.len(), 32);
        assert_eq!(binary_to_ip(&bits).expect("valid binary"), ip);
        assert_eq!(
            u32::from_str_radix(&bits, 2).unwrap(),
            u32::from(ip.parse::<Ipv4Addr>().unwrap())
        );
    }
}

#[test]
fn test_report() {
    let subnet = from_args("192.168.0.1", None, Some("24"), Validation::Loose).expect("valid");
    let lines = report_lines(&subnet);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "IP: 192.168.0.1");
    assert_eq!(lines[5], "Host count: 256");

    let json = render(&subnet, OutputFormat::Json).expect("json output");
    assert!(json.contains("\"network\": \"192.168.0.0\""));
}
