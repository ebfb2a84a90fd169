// SPDX-License-Identifier: Apache-2.0

use uuid::Uuid;

use crate::{
    unit_tests::testlib::{new_nic, with_network},
    ClusterNetwork, ErrorKind, Inventory, TopologySnapshot, TopologyStore,
};

const HOST_ID: &str = "6f1c8f6e-0c1f-4d3c-9a55-4d0c3c1f6a11";
const CLUSTER_ID: &str = "0b9e1f1a-7d52-4c54-8f41-0b6f3a5f2e22";

fn new_test_inventory() -> Inventory {
    Inventory::new_from_yaml(
        r#"---
hosts:
- id: 6f1c8f6e-0c1f-4d3c-9a55-4d0c3c1f6a11
  cluster: 0b9e1f1a-7d52-4c54-8f41-0b6f3a5f2e22
  interfaces:
  - name: eth0
    network-name: mgmt
  - name: eth1
clusters:
- id: 0b9e1f1a-7d52-4c54-8f41-0b6f3a5f2e22
  networks:
  - name: mgmt
    mtu: 1500
  - name: vm
    stp: true
    vm-network: false
"#,
    )
    .unwrap()
}

#[test]
fn test_inventory_lookup() {
    let inventory = new_test_inventory();
    let host_id: Uuid = HOST_ID.parse().unwrap();
    let cluster_id: Uuid = CLUSTER_ID.parse().unwrap();

    assert_eq!(inventory.cluster_of(&host_id).unwrap(), cluster_id);
    let ifaces = inventory.host_interfaces(&host_id).unwrap();
    assert_eq!(ifaces.len(), 2);
    assert_eq!(ifaces[0], with_network(new_nic("eth0"), "mgmt"));

    let networks = inventory.cluster_networks(&cluster_id).unwrap();
    assert_eq!(networks[0].mtu, Some(1500));
    assert!(networks[0].vm_network);
    assert!(networks[1].stp);
    assert!(!networks[1].vm_network);
}

#[test]
fn test_inventory_unknown_host() {
    let inventory = new_test_inventory();
    let result = inventory.host_interfaces(&Uuid::new_v4());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::LookupFailure);
    }
    assert!(inventory.cluster_of(&Uuid::new_v4()).is_err());
}

#[test]
fn test_inventory_add_host_replaces() {
    let mut inventory = new_test_inventory();
    let host_id: Uuid = HOST_ID.parse().unwrap();
    let cluster_id: Uuid = CLUSTER_ID.parse().unwrap();

    inventory.add_host(host_id, cluster_id, vec![new_nic("eth5")]);

    assert_eq!(inventory.hosts.len(), 1);
    assert_eq!(
        inventory.host_interfaces(&host_id).unwrap(),
        vec![new_nic("eth5")]
    );
}

#[test]
fn test_inventory_from_json() {
    let inventory = Inventory::new_from_json(
        r#"{
  "clusters": [
    {"id": "0b9e1f1a-7d52-4c54-8f41-0b6f3a5f2e22",
     "networks": [{"name": "mgmt", "vlan-id": 10}]}
  ]
}"#,
    )
    .unwrap();
    let cluster_id: Uuid = CLUSTER_ID.parse().unwrap();

    let networks = inventory.cluster_networks(&cluster_id).unwrap();

    assert_eq!(networks[0].vlan_id, Some(10));
    assert!(inventory.hosts.is_empty());
}

#[test]
fn test_snapshot_fetch() {
    let inventory = new_test_inventory();
    let host_id: Uuid = HOST_ID.parse().unwrap();
    let cluster_id: Uuid = CLUSTER_ID.parse().unwrap();

    let snapshot =
        TopologySnapshot::fetch(&inventory, &host_id, &cluster_id).unwrap();

    assert!(snapshot.has_iface("eth1"));
    assert!(snapshot.get_network("vm").is_some());
    assert!(snapshot.is_iface_changed(&new_nic("eth0")));
    assert!(!snapshot.is_iface_changed(&new_nic("eth1")));
    assert!(snapshot.is_iface_changed(&new_nic("eth2")));
}

#[test]
fn test_snapshot_later_duplicate_wins() {
    let snapshot = TopologySnapshot::new(
        vec![new_nic("eth0"), with_network(new_nic("eth0"), "mgmt")],
        vec![ClusterNetwork::new("mgmt")],
    );

    assert_eq!(snapshot.ifaces().len(), 1);
    assert_eq!(
        snapshot.get_iface("eth0").and_then(|i| i.network_name()),
        Some("mgmt")
    );
}
