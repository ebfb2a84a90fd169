// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

fn default_vm_network() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
/// Logical network defined on cluster level. Interfaces attach to it by
/// name, the rest of the configuration is owned by the cluster.
pub struct ClusterNetwork {
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "crate::serializer::is_option_string_empty"
    )]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_u16_or_string"
    )]
    pub vlan_id: Option<u16>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_u64_or_string"
    )]
    pub mtu: Option<u64>,
    #[serde(default, skip_serializing_if = "crate::serializer::is_false")]
    /// Spanning tree protocol on the network bridge.
    pub stp: bool,
    #[serde(
        default = "default_vm_network",
        skip_serializing_if = "crate::serializer::is_true"
    )]
    /// Whether virtual machines could use this network.
    pub vm_network: bool,
}

impl Default for ClusterNetwork {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            vlan_id: None,
            mtu: None,
            stp: false,
            vm_network: default_vm_network(),
        }
    }
}

impl ClusterNetwork {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
