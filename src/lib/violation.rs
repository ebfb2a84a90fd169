// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ViolationKind {
    /// A non-bond interface name repeats in the desired list.
    DuplicateInterfaceName,
    /// A bond name repeats in the desired list.
    DuplicateBondName,
    /// The physical interface is not found on host.
    InterfaceNotFound,
    /// Two interfaces claim the same logical network.
    NetworkAlreadyAttached,
    /// Network is neither defined in cluster nor already on the interface.
    NetworkNotInCluster,
    /// Bond has fewer than two ports.
    InvalidBondParameters,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::DuplicateInterfaceName => "DUPLICATE_INTERFACE_NAME",
                Self::DuplicateBondName => "DUPLICATE_BOND_NAME",
                Self::InterfaceNotFound => "INTERFACE_NOT_FOUND",
                Self::NetworkAlreadyAttached => "NETWORK_ALREADY_ATTACHED",
                Self::NetworkNotInCluster => "NETWORK_NOT_IN_CLUSTER",
                Self::InvalidBondParameters => "INVALID_BOND_PARAMETERS",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Violation {
    pub kind: ViolationKind,
    /// Interface, bond or network the violation refers to.
    pub name: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = &self.name;
        match self.kind {
            ViolationKind::DuplicateInterfaceName => write!(
                f,
                "{}: interface {name} is defined more than once",
                self.kind
            ),
            ViolationKind::DuplicateBondName => write!(
                f,
                "{}: bond {name} is defined more than once",
                self.kind
            ),
            ViolationKind::InterfaceNotFound => write!(
                f,
                "{}: interface {name} does not exist on host",
                self.kind
            ),
            ViolationKind::NetworkAlreadyAttached => write!(
                f,
                "{}: network {name} is already attached to another interface",
                self.kind
            ),
            ViolationKind::NetworkNotInCluster => write!(
                f,
                "{}: network {name} does not exist in the host cluster",
                self.kind
            ),
            ViolationKind::InvalidBondParameters => write!(
                f,
                "{}: bond {name} requires at least two ports",
                self.kind
            ),
        }
    }
}
