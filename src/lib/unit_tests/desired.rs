// SPDX-License-Identifier: Apache-2.0

use crate::{
    unit_tests::testlib::{new_nic, new_port, new_snapshot, violation_kinds},
    DesiredTopology, ErrorKind, ViolationKind,
};

#[test]
fn test_desired_from_yaml_keeps_order() {
    let desired = DesiredTopology::new_from_yaml(
        r#"---
interfaces:
- name: bond0
  bonded: true
  bond-options: mode=4 miimon=100
- name: eth2
  bond-name: bond0
- name: eth1
  bond-name: bond0
"#,
    )
    .unwrap();

    let names: Vec<&str> =
        desired.interfaces.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["bond0", "eth2", "eth1"]);
    assert!(desired.interfaces[0].is_bond());
}

#[test]
fn test_desired_invalid_yaml() {
    let result = DesiredTopology::new_from_yaml("interfaces: foo");
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_desired_from_json() {
    let desired = DesiredTopology::new_from_json(
        r#"{"interfaces": [{"name": "eth0", "mtu": 1500}]}"#,
    )
    .unwrap();

    assert_eq!(desired.interfaces[0].mtu, Some(1500));
}

#[test]
fn test_desired_reconcile_snapshot() {
    let current = new_snapshot(&[new_nic("eth1"), new_nic("eth2")], &[]);
    let mut desired = DesiredTopology::new();
    desired.append_interface(new_port("eth1", "bond0"));

    let report = desired.reconcile_snapshot(&current);

    assert_eq!(
        violation_kinds(&report),
        vec![ViolationKind::InvalidBondParameters]
    );
}
