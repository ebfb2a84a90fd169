// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, HashSet};

use log::{debug, info, warn};

use crate::{
    ClusterId, ClusterNetwork, HostId, HostInterface, InterfaceRole,
    NetsetupError, SetupReport, TopologyDiff, TopologySnapshot, TopologyStore,
    Violation, ViolationKind,
};

const BOND_MIN_PORT_COUNT: usize = 2;

/// Validate the desired interfaces of a host and compute the changes
/// needed against its current topology.
///
/// Both snapshots are fetched before any validation. A failing store aborts
/// the reconciliation with [crate::ErrorKind::LookupFailure]; validation
/// problems are reported as [Violation] in the returned [SetupReport].
pub fn reconcile<S>(
    desired: &[HostInterface],
    host_id: &HostId,
    cluster_id: &ClusterId,
    store: &S,
) -> Result<SetupReport, NetsetupError>
where
    S: TopologyStore + ?Sized,
{
    let current = TopologySnapshot::fetch(store, host_id, cluster_id)?;
    Ok(reconcile_snapshot(desired, &current))
}

/// Same as [reconcile()] but against an already fetched snapshot.
pub fn reconcile_snapshot(
    desired: &[HostInterface],
    current: &TopologySnapshot,
) -> SetupReport {
    let mut setup = SetupNetworks::new(current);
    for iface in desired {
        setup.process_iface(iface);
    }
    setup.validate_bond_ports_count();
    setup.detect_port_changes();
    setup.extract_removed_networks();
    setup.extract_removed_bonds();
    setup.into_report()
}

// State of a single reconciliation run.
struct SetupNetworks<'a> {
    current: &'a TopologySnapshot,
    violations: Vec<Violation>,
    iface_names: HashSet<&'a str>,
    // Bond name to its ports. Bonds only referenced by ports are included.
    bonds: BTreeMap<&'a str, Vec<&'a HostInterface>>,
    // Networks claimed by desired interfaces, including unmanaged ones.
    attached_networks: HashSet<&'a str>,
    modified_networks: Vec<&'a ClusterNetwork>,
    unmanaged_networks: Vec<&'a str>,
    modified_bonds: BTreeMap<&'a str, &'a HostInterface>,
    removed_networks: Vec<&'a str>,
    removed_bonds: Vec<&'a HostInterface>,
}

impl<'a> SetupNetworks<'a> {
    fn new(current: &'a TopologySnapshot) -> Self {
        Self {
            current,
            violations: Vec::new(),
            iface_names: HashSet::new(),
            bonds: BTreeMap::new(),
            attached_networks: HashSet::new(),
            modified_networks: Vec::new(),
            unmanaged_networks: Vec::new(),
            modified_bonds: BTreeMap::new(),
            removed_networks: Vec::new(),
            removed_bonds: Vec::new(),
        }
    }

    fn add_violation(&mut self, kind: ViolationKind, name: &str) {
        let violation = Violation::new(kind, name);
        debug!("{}", violation);
        self.violations.push(violation);
    }

    fn process_iface(&mut self, iface: &'a HostInterface) {
        if !self.add_iface_to_processed(iface) {
            return;
        }

        match iface.role() {
            InterfaceRole::Bond => self.extract_bond_if_modified(iface),
            InterfaceRole::Nic { bond_name } => {
                if let Some(bond_name) = bond_name {
                    self.extract_bond_port(bond_name, iface);
                }
                if !self.current.has_iface(iface.base_name()) {
                    self.add_violation(
                        ViolationKind::InterfaceNotFound,
                        iface.name(),
                    );
                }
            }
        }

        // Any earlier violation, even from another interface, stops
        // network extraction for every following interface.
        if self.violations.is_empty() {
            if let Some(network_name) = iface.network_name() {
                self.extract_network(iface, network_name);
            }
        }
    }

    // Return false if the interface name was already processed.
    fn add_iface_to_processed(&mut self, iface: &'a HostInterface) -> bool {
        if self.iface_names.insert(iface.name()) {
            true
        } else {
            let kind = if iface.is_bond() {
                ViolationKind::DuplicateBondName
            } else {
                ViolationKind::DuplicateInterfaceName
            };
            self.add_violation(kind, iface.name());
            false
        }
    }

    fn extract_bond_if_modified(&mut self, iface: &'a HostInterface) {
        self.bonds.entry(iface.name()).or_default();
        if self.current.is_iface_changed(iface) {
            debug!("Bond {} is new or changed", iface.name());
            self.modified_bonds.insert(iface.name(), iface);
        }
    }

    fn extract_bond_port(
        &mut self,
        bond_name: &'a str,
        iface: &'a HostInterface,
    ) {
        self.bonds.entry(bond_name).or_default().push(iface);
    }

    fn extract_network(
        &mut self,
        iface: &'a HostInterface,
        network_name: &'a str,
    ) {
        let current = self.current;
        if !self.attached_networks.insert(network_name) {
            self.add_violation(
                ViolationKind::NetworkAlreadyAttached,
                network_name,
            );
            return;
        }

        if let Some(network) = current.get_network(network_name) {
            if current.is_iface_changed(iface) {
                debug!(
                    "Network {} on interface {} is new or changed",
                    network_name,
                    iface.name()
                );
                self.modified_networks.push(network);
            }
        } else if current
            .get_iface(iface.name())
            .and_then(|cur_iface| cur_iface.network_name())
            == Some(network_name)
        {
            debug!(
                "Network {} on interface {} is not managed by cluster",
                network_name,
                iface.name()
            );
            self.unmanaged_networks.push(network_name);
        } else {
            self.add_violation(
                ViolationKind::NetworkNotInCluster,
                network_name,
            );
        }
    }

    fn validate_bond_ports_count(&mut self) {
        let mut invalid_bonds = Vec::new();
        for (bond_name, ports) in self.bonds.iter() {
            if ports.len() < BOND_MIN_PORT_COUNT {
                invalid_bonds.push(*bond_name);
            }
        }
        for bond_name in invalid_bonds {
            self.add_violation(
                ViolationKind::InvalidBondParameters,
                bond_name,
            );
        }
    }

    // A bond whose own settings are unchanged still has to be re-applied
    // when any of its ports changed.
    fn detect_port_changes(&mut self) {
        let current = self.current;
        for (bond_name, ports) in self.bonds.iter() {
            if self.modified_bonds.contains_key(bond_name) {
                continue;
            }
            if let Some(port) =
                ports.iter().find(|port| current.is_iface_changed(port))
            {
                match current.get_iface(bond_name) {
                    Some(cur_bond) => {
                        debug!(
                            "Bond {} changed due to its port {}",
                            bond_name,
                            port.name()
                        );
                        self.modified_bonds.insert(*bond_name, cur_bond);
                    }
                    None => {
                        warn!(
                            "Port {} changed but bond {} is neither desired \
                            nor found on host",
                            port.name(),
                            bond_name
                        );
                    }
                }
            }
        }
    }

    fn extract_removed_networks(&mut self) {
        let current = self.current;
        for cur_iface in current.ifaces() {
            if let Some(network_name) = cur_iface.network_name() {
                if !self.attached_networks.contains(network_name)
                    && !self.removed_networks.contains(&network_name)
                {
                    debug!(
                        "Network {} detached from interface {}",
                        network_name,
                        cur_iface.name()
                    );
                    self.removed_networks.push(network_name);
                }
            }
        }
    }

    // Only bonds which used to have ports are considered. A bond without
    // ports on host is left untouched.
    fn extract_removed_bonds(&mut self) {
        let current = self.current;
        for cur_iface in current.ifaces() {
            let bond_name = match cur_iface.bond_name() {
                Some(b) => b,
                None => continue,
            };
            if self.bonds.contains_key(bond_name)
                || self.removed_bonds.iter().any(|b| b.name() == bond_name)
            {
                continue;
            }
            match current.get_iface(bond_name) {
                Some(cur_bond) => {
                    debug!("Bond {} is removed", bond_name);
                    self.removed_bonds.push(cur_bond);
                }
                None => {
                    warn!(
                        "Interface {} is port of bond {} which is not \
                        found on host",
                        cur_iface.name(),
                        bond_name
                    );
                }
            }
        }
    }

    fn into_report(self) -> SetupReport {
        let mut modified_bonds: Vec<HostInterface> = Vec::new();
        for bond in self.modified_bonds.values() {
            if !modified_bonds.contains(*bond) {
                modified_bonds.push((*bond).clone());
            }
        }
        let diff = TopologyDiff {
            modified_networks: self
                .modified_networks
                .into_iter()
                .cloned()
                .collect(),
            removed_networks: self
                .removed_networks
                .into_iter()
                .map(|n| n.to_string())
                .collect(),
            modified_bonds,
            removed_bonds: self.removed_bonds.into_iter().cloned().collect(),
        };
        info!(
            "Setup networks: {} violation(s), {} network(s) modified, {} \
            network(s) removed, {} bond(s) modified, {} bond(s) removed",
            self.violations.len(),
            diff.modified_networks.len(),
            diff.removed_networks.len(),
            diff.modified_bonds.len(),
            diff.removed_bonds.len()
        );
        SetupReport {
            violations: self.violations,
            diff,
            unmanaged_networks: self
                .unmanaged_networks
                .into_iter()
                .map(|n| n.to_string())
                .collect(),
        }
    }
}
