// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::vlan::{strip_vlan, vlan_id_of_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BootProtocol {
    None,
    Dhcp,
    Static,
}

impl Default for BootProtocol {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for BootProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::None => "none",
                Self::Dhcp => "dhcp",
                Self::Static => "static",
            }
        )
    }
}

/// What an interface is in the bonding topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceRole<'a> {
    Bond,
    /// NIC or VLAN sub-interface, optionally enslaved to `bond_name`.
    Nic { bond_name: Option<&'a str> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
/// One network interface of a host, either as currently known or as
/// desired. Two interfaces are considered unchanged only when every
/// property is equal.
pub struct HostInterface {
    /// Interface name. VLAN sub-interfaces use the `<base>.<tag>` form.
    pub name: String,
    #[serde(default, skip_serializing_if = "crate::serializer::is_false")]
    /// Whether this interface is a bond.
    pub bonded: bool,
    #[serde(
        default,
        skip_serializing_if = "crate::serializer::is_option_string_empty"
    )]
    /// Bond this interface is enslaved to.
    pub bond_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "crate::serializer::is_option_string_empty"
    )]
    /// Logical network carried by this interface.
    pub network_name: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_protocol: Option<BootProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Kernel bonding options, e.g. `mode=4 miimon=100`.
    pub bond_options: Option<String>,
}

impl HostInterface {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn new_bond(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bonded: true,
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn role(&self) -> InterfaceRole<'_> {
        if self.bonded {
            InterfaceRole::Bond
        } else {
            InterfaceRole::Nic {
                bond_name: self.bond_name(),
            }
        }
    }

    pub fn is_bond(&self) -> bool {
        self.bonded
    }

    pub fn bond_name(&self) -> Option<&str> {
        non_blank(self.bond_name.as_deref())
    }

    pub fn network_name(&self) -> Option<&str> {
        non_blank(self.network_name.as_deref())
    }

    /// Name of the physical interface, with the VLAN tag stripped.
    pub fn base_name(&self) -> &str {
        strip_vlan(self.name.as_str())
    }

    /// VLAN tag from the `vlan-id` property, falling back to the tag
    /// encoded in the interface name.
    pub fn vlan_id(&self) -> Option<u16> {
        self.vlan_id.or_else(|| vlan_id_of_name(self.name.as_str()))
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
