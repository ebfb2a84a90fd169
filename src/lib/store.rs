// SPDX-License-Identifier: Apache-2.0

use log::error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ClusterNetwork, ErrorKind, HostInterface, NetsetupError};

pub type HostId = Uuid;
pub type ClusterId = Uuid;

/// Read-only access to the current topology. Implementations must return
/// complete snapshots and must not have side effects.
pub trait TopologyStore {
    /// All interfaces currently known for the host.
    fn host_interfaces(
        &self,
        host_id: &HostId,
    ) -> Result<Vec<HostInterface>, NetsetupError>;

    /// All logical networks defined in the cluster.
    fn cluster_networks(
        &self,
        cluster_id: &ClusterId,
    ) -> Result<Vec<ClusterNetwork>, NetsetupError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct InventoryHost {
    pub id: HostId,
    pub cluster: ClusterId,
    #[serde(default)]
    pub interfaces: Vec<HostInterface>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct InventoryCluster {
    pub id: ClusterId,
    #[serde(default)]
    pub networks: Vec<ClusterNetwork>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
/// In-memory [TopologyStore] holding hosts and clusters, loadable from
/// YAML or JSON.
pub struct Inventory {
    #[serde(default)]
    pub hosts: Vec<InventoryHost>,
    #[serde(default)]
    pub clusters: Vec<InventoryCluster>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_from_yaml(content: &str) -> Result<Self, NetsetupError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn new_from_json(content: &str) -> Result<Self, NetsetupError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn add_host(
        &mut self,
        id: HostId,
        cluster: ClusterId,
        interfaces: Vec<HostInterface>,
    ) {
        self.hosts.retain(|h| h.id != id);
        self.hosts.push(InventoryHost {
            id,
            cluster,
            interfaces,
        });
    }

    pub fn add_cluster(
        &mut self,
        id: ClusterId,
        networks: Vec<ClusterNetwork>,
    ) {
        self.clusters.retain(|c| c.id != id);
        self.clusters.push(InventoryCluster { id, networks });
    }

    pub fn host(
        &self,
        host_id: &HostId,
    ) -> Result<&InventoryHost, NetsetupError> {
        self.hosts.iter().find(|h| &h.id == host_id).ok_or_else(|| {
            let e = NetsetupError::new(
                ErrorKind::LookupFailure,
                format!("Host {host_id} not found in inventory"),
            );
            error!("{}", e);
            e
        })
    }

    /// Cluster the host belongs to.
    pub fn cluster_of(
        &self,
        host_id: &HostId,
    ) -> Result<ClusterId, NetsetupError> {
        Ok(self.host(host_id)?.cluster)
    }
}

impl TopologyStore for Inventory {
    fn host_interfaces(
        &self,
        host_id: &HostId,
    ) -> Result<Vec<HostInterface>, NetsetupError> {
        Ok(self.host(host_id)?.interfaces.clone())
    }

    fn cluster_networks(
        &self,
        cluster_id: &ClusterId,
    ) -> Result<Vec<ClusterNetwork>, NetsetupError> {
        match self.clusters.iter().find(|c| &c.id == cluster_id) {
            Some(cluster) => Ok(cluster.networks.clone()),
            None => {
                let e = NetsetupError::new(
                    ErrorKind::LookupFailure,
                    format!("Cluster {cluster_id} not found in inventory"),
                );
                error!("{}", e);
                Err(e)
            }
        }
    }
}
