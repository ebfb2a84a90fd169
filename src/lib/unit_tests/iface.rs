// SPDX-License-Identifier: Apache-2.0

use crate::{
    unit_tests::testlib::{new_bond, new_nic, new_port},
    BootProtocol, HostInterface, InterfaceRole,
};

#[test]
fn test_iface_from_yaml() {
    let iface: HostInterface = serde_yaml::from_str(
        r#"---
name: eth0.100
network-name: storage
vlan-id: "0x64"
mtu: "9000"
mac-address: 00:01:02:03:04:05
boot-protocol: static
address: 192.0.2.10
subnet: 255.255.255.0
gateway: 192.0.2.1
"#,
    )
    .unwrap();

    assert_eq!(iface.name(), "eth0.100");
    assert_eq!(iface.base_name(), "eth0");
    assert_eq!(iface.vlan_id, Some(100));
    assert_eq!(iface.mtu, Some(9000));
    assert_eq!(iface.boot_protocol, Some(BootProtocol::Static));
    assert_eq!(iface.network_name(), Some("storage"));
    assert_eq!(iface.role(), InterfaceRole::Nic { bond_name: None });
}

#[test]
fn test_iface_unknown_property() {
    let result = serde_yaml::from_str::<HostInterface>(
        r#"---
name: eth0
speed: 1000
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_iface_vlan_id_out_of_range() {
    let result = serde_yaml::from_str::<HostInterface>(
        r#"---
name: eth0.10
vlan-id: 70000
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_iface_role() {
    assert_eq!(new_bond("bond0").role(), InterfaceRole::Bond);
    assert_eq!(
        new_port("eth1", "bond0").role(),
        InterfaceRole::Nic {
            bond_name: Some("bond0")
        }
    );
    assert_eq!(
        new_port("eth1", "  ").role(),
        InterfaceRole::Nic { bond_name: None }
    );
}

#[test]
fn test_iface_vlan_id_from_name() {
    assert_eq!(new_nic("eth0.30").vlan_id(), Some(30));
    let mut iface = new_nic("eth0.30");
    iface.vlan_id = Some(31);
    assert_eq!(iface.vlan_id(), Some(31));
    assert_eq!(new_nic("eth0").vlan_id(), None);
}

#[test]
fn test_iface_equality_covers_all_properties() {
    let eth0 = new_nic("eth0");
    let mut changed = eth0.clone();
    changed.gateway = Some("192.0.2.1".to_string());
    assert_ne!(eth0, changed);

    let mut changed = eth0.clone();
    changed.boot_protocol = Some(BootProtocol::Dhcp);
    assert_ne!(eth0, changed);

    assert_eq!(eth0, new_nic("eth0"));
}

#[test]
fn test_iface_serialize_skip_empty() {
    let mut iface = new_port("eth1", "bond0");
    iface.network_name = Some(String::new());

    let yaml = serde_yaml::to_string(&iface).unwrap();

    assert_eq!(yaml, "name: eth1\nbond-name: bond0\n");
}
