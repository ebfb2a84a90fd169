// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use log::debug;

use crate::{
    ClusterId, ClusterNetwork, HostId, HostInterface, NetsetupError,
    TopologyStore,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Current topology of one host and its cluster, fetched once per
/// reconciliation and never refreshed.
pub struct TopologySnapshot {
    pub(crate) interfaces: HashMap<String, HostInterface>,
    pub(crate) networks: HashMap<String, ClusterNetwork>,
}

impl TopologySnapshot {
    /// Later entries win when the same name is listed twice.
    pub fn new(
        interfaces: Vec<HostInterface>,
        networks: Vec<ClusterNetwork>,
    ) -> Self {
        Self {
            interfaces: interfaces
                .into_iter()
                .map(|iface| (iface.name.clone(), iface))
                .collect(),
            networks: networks
                .into_iter()
                .map(|net| (net.name.clone(), net))
                .collect(),
        }
    }

    pub fn fetch<S>(
        store: &S,
        host_id: &HostId,
        cluster_id: &ClusterId,
    ) -> Result<Self, NetsetupError>
    where
        S: TopologyStore + ?Sized,
    {
        let interfaces = store.host_interfaces(host_id)?;
        let networks = store.cluster_networks(cluster_id)?;
        debug!(
            "Fetched {} interfaces of host {host_id} and {} networks of \
            cluster {cluster_id}",
            interfaces.len(),
            networks.len()
        );
        Ok(Self::new(interfaces, networks))
    }

    pub fn get_iface(&self, name: &str) -> Option<&HostInterface> {
        self.interfaces.get(name)
    }

    pub fn get_network(&self, name: &str) -> Option<&ClusterNetwork> {
        self.networks.get(name)
    }

    pub fn has_iface(&self, name: &str) -> bool {
        self.interfaces.contains_key(name)
    }

    /// Whether the interface is new or differs from the current one.
    pub fn is_iface_changed(&self, iface: &HostInterface) -> bool {
        self.interfaces.get(iface.name()) != Some(iface)
    }

    /// Current interfaces sorted by name.
    pub fn ifaces(&self) -> Vec<&HostInterface> {
        let mut ifaces: Vec<&HostInterface> =
            self.interfaces.values().collect();
        ifaces.sort_unstable_by_key(|iface| iface.name());
        ifaces
    }
}
