// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    ClusterNetwork, ErrorKind, HostInterface, NetsetupError, Violation,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// Changes required to move the host from its current topology to the
/// desired one. Every list could be applied independently.
pub struct TopologyDiff {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Networks to attach or re-apply, as defined in cluster.
    pub modified_networks: Vec<ClusterNetwork>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Names of networks to detach from the host.
    pub removed_networks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modified_bonds: Vec<HostInterface>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed_bonds: Vec<HostInterface>,
}

impl TopologyDiff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.modified_networks.is_empty()
            && self.removed_networks.is_empty()
            && self.modified_bonds.is_empty()
            && self.removed_bonds.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// Outcome of one reconciliation: the diff is always computed, even when
/// violations were found. Callers should not apply it unless
/// [SetupReport::is_valid()].
pub struct SetupReport {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    #[serde(default)]
    pub diff: TopologyDiff,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Networks found on host but not managed by cluster, passed through
    /// untouched.
    pub unmanaged_networks: Vec<String>,
}

impl SetupReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        self.violations.as_slice()
    }

    pub fn diff(&self) -> &TopologyDiff {
        &self.diff
    }

    pub fn into_diff(self) -> Result<TopologyDiff, NetsetupError> {
        if self.is_valid() {
            Ok(self.diff)
        } else {
            let msgs: Vec<String> =
                self.violations.iter().map(|v| v.to_string()).collect();
            Err(NetsetupError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Desired network setup has {} violation(s): {}",
                    msgs.len(),
                    msgs.join("; ")
                ),
            ))
        }
    }
}
