// SPDX-License-Identifier: Apache-2.0

use crate::{strip_vlan, vlan_id_of_name};

#[test]
fn test_strip_vlan() {
    assert_eq!(strip_vlan("eth0.100"), "eth0");
    assert_eq!(strip_vlan("bond0.4094"), "bond0");
    assert_eq!(strip_vlan("eth0"), "eth0");
}

#[test]
fn test_strip_vlan_non_numeric_suffix() {
    assert_eq!(strip_vlan("br.ext"), "br.ext");
    assert_eq!(strip_vlan("eth0."), "eth0.");
    assert_eq!(strip_vlan("eth0.1a"), "eth0.1a");
    assert_eq!(vlan_id_of_name("eth0.1a"), None);
}

#[test]
fn test_strip_vlan_without_base() {
    assert_eq!(strip_vlan(".100"), ".100");
    assert_eq!(vlan_id_of_name(".100"), None);
}

#[test]
fn test_strip_vlan_only_last_tag() {
    assert_eq!(strip_vlan("eth0.100.200"), "eth0.100");
}

#[test]
fn test_vlan_id_of_name() {
    assert_eq!(vlan_id_of_name("eth1.50"), Some(50));
    assert_eq!(vlan_id_of_name("eth1.0"), Some(0));
    assert_eq!(vlan_id_of_name("eth1"), None);
    assert_eq!(vlan_id_of_name("eth1.4095"), None);
    assert_eq!(vlan_id_of_name("eth1.99999999"), None);
}
