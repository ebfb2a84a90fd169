// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidArgument,
    /// The host or cluster store failed to provide a snapshot.
    LookupFailure,
    Bug,
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::Bug
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::fmt::Display for NetsetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for NetsetupError {}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NetsetupError {
    kind: ErrorKind,
    msg: String,
}

impl NetsetupError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl From<serde_json::Error> for NetsetupError {
    fn from(e: serde_json::Error) -> Self {
        NetsetupError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid propriety: {e}"),
        )
    }
}

impl From<serde_yaml::Error> for NetsetupError {
    fn from(e: serde_yaml::Error) -> Self {
        NetsetupError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid YAML string: {e}"),
        )
    }
}
