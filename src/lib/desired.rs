// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    reconcile::reconcile_snapshot, ClusterId, HostId, HostInterface,
    NetsetupError, SetupReport, TopologySnapshot, TopologyStore,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
/// Desired interfaces of a host. The order of `interfaces` is significant
/// for which entry is reported as duplicate.
pub struct DesiredTopology {
    #[serde(default)]
    pub interfaces: Vec<HostInterface>,
}

impl DesiredTopology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_from_yaml(content: &str) -> Result<Self, NetsetupError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn new_from_json(content: &str) -> Result<Self, NetsetupError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn append_interface(&mut self, iface: HostInterface) {
        self.interfaces.push(iface);
    }

    /// Fetch the current topology from `store` and reconcile against it.
    pub fn reconcile<S>(
        &self,
        store: &S,
        host_id: &HostId,
        cluster_id: &ClusterId,
    ) -> Result<SetupReport, NetsetupError>
    where
        S: TopologyStore + ?Sized,
    {
        crate::reconcile(&self.interfaces, host_id, cluster_id, store)
    }

    pub fn reconcile_snapshot(
        &self,
        snapshot: &TopologySnapshot,
    ) -> SetupReport {
        reconcile_snapshot(&self.interfaces, snapshot)
    }
}
