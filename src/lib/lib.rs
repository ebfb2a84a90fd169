// SPDX-License-Identifier: Apache-2.0

//! Validation and diff computation for host network setup.
//!
//! Given the desired interfaces of a host (NICs, bonds, VLAN sub-interfaces
//! and their logical network attachments), [reconcile()] checks them
//! against the bonding, VLAN naming and cluster network rules and computes
//! which networks and bonds have to be changed or removed on the host.
//!
//! ```
//! use netsetup::{
//!     reconcile_snapshot, ClusterNetwork, HostInterface, TopologySnapshot,
//! };
//!
//! let mut eth0 = HostInterface::new("eth0");
//! let current = TopologySnapshot::new(
//!     vec![eth0.clone()],
//!     vec![ClusterNetwork::new("mgmt")],
//! );
//! eth0.network_name = Some("mgmt".to_string());
//!
//! let report = reconcile_snapshot(&[eth0], &current);
//! assert!(report.is_valid());
//! assert_eq!(report.diff().modified_networks[0].name(), "mgmt");
//! ```

mod deserializer;
mod desired;
mod diff;
mod error;
mod iface;
mod network;
mod reconcile;
mod serializer;
mod snapshot;
mod store;
mod violation;
mod vlan;

#[cfg(test)]
mod unit_tests;

pub use crate::desired::DesiredTopology;
pub use crate::diff::{SetupReport, TopologyDiff};
pub use crate::error::{ErrorKind, NetsetupError};
pub use crate::iface::{BootProtocol, HostInterface, InterfaceRole};
pub use crate::network::ClusterNetwork;
pub use crate::reconcile::{reconcile, reconcile_snapshot};
pub use crate::snapshot::TopologySnapshot;
pub use crate::store::{
    ClusterId, HostId, Inventory, InventoryCluster, InventoryHost,
    TopologyStore,
};
pub use crate::violation::{Violation, ViolationKind};
pub use crate::vlan::{strip_vlan, vlan_id_of_name};
