use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::internal::common::Set;
use crate::internal::common::ids::RequestId;
use crate::internal::pool::identity::PlatformIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformStatus {
    Available,
    Allocated,
}

impl Display for PlatformStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PlatformStatus::Available => "AVAILABLE",
            PlatformStatus::Allocated => "ALLOCATED",
        })
    }
}

// The owner lives inside the state, so an allocated platform always has one
// and an available one never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlatformState {
    Available,
    Allocated { owner: RequestId },
}

/// One entry of the discovery snapshot a pool is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    pub identity: PlatformIdentity,
    pub capabilities: Vec<String>,
}

impl PlatformDescriptor {
    pub fn new<S: Into<String>>(
        identity: PlatformIdentity,
        capabilities: impl IntoIterator<Item = S>,
    ) -> Self {
        PlatformDescriptor {
            identity,
            capabilities: capabilities.into_iter().map(|c| c.into()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Platform {
    identity: PlatformIdentity,
    capabilities: Set<String>,
    state: PlatformState,
}

impl Platform {
    pub(crate) fn new(descriptor: PlatformDescriptor) -> Self {
        Platform {
            identity: descriptor.identity,
            capabilities: descriptor.capabilities.into_iter().collect(),
            state: PlatformState::Available,
        }
    }

    #[inline]
    pub fn identity(&self) -> &PlatformIdentity {
        &self.identity
    }

    #[inline]
    pub fn capabilities(&self) -> &Set<String> {
        &self.capabilities
    }

    #[inline]
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn status(&self) -> PlatformStatus {
        match self.state {
            PlatformState::Available => PlatformStatus::Available,
            PlatformState::Allocated { .. } => PlatformStatus::Allocated,
        }
    }

    pub fn owner(&self) -> Option<RequestId> {
        match self.state {
            PlatformState::Available => None,
            PlatformState::Allocated { owner } => Some(owner),
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.state == PlatformState::Available
    }

    pub(crate) fn set_allocated(&mut self, owner: RequestId) {
        debug_assert!(self.is_available());
        self.state = PlatformState::Allocated { owner };
    }

    /// Returns the previous owner, `None` if the platform was already available.
    pub(crate) fn set_available(&mut self) -> Option<RequestId> {
        let owner = self.owner();
        self.state = PlatformState::Available;
        owner
    }

    pub(crate) fn to_known(&self) -> KnownPlatform {
        let mut capabilities: Vec<String> = self.capabilities.iter().cloned().collect();
        capabilities.sort_unstable();
        KnownPlatform {
            identity: self.identity.clone(),
            capabilities,
            status: self.status(),
            owner: self.owner(),
        }
    }
}

/// Serializable view of a platform, as published to pool observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownPlatform {
    pub identity: PlatformIdentity,
    pub capabilities: Vec<String>,
    pub status: PlatformStatus,
    pub owner: Option<RequestId>,
}

impl Display for KnownPlatform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} [{}]", self.identity, self.status, self.capabilities.join(", "))?;
        if let Some(owner) = &self.owner {
            write!(f, " owner={owner}")?;
        }
        Ok(())
    }
}
