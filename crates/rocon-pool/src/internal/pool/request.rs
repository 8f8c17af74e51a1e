use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::internal::common::ids::RequestId;
use crate::internal::pool::identity::PlatformIdentity;

/// One line item of a scheduler request: a capability (exact name) that has
/// to run on a platform whose identity matches `pattern`.
///
/// The pattern is kept as raw text; a malformed pattern is not an error here,
/// it simply never matches any platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityRequest {
    pub capability: String,
    pub pattern: String,
}

impl CapabilityRequest {
    pub fn new(capability: impl Into<String>, pattern: impl Into<String>) -> Self {
        CapabilityRequest {
            capability: capability.into(),
            pattern: pattern.into(),
        }
    }
}

impl Display for CapabilityRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.capability, self.pattern)
    }
}

/// Capability requests granted or rejected together on behalf of one request.
#[derive(Debug, Clone)]
pub struct AllocationBatch {
    request_id: RequestId,
    items: Vec<CapabilityRequest>,
}

impl AllocationBatch {
    pub fn new(request_id: RequestId, items: Vec<CapabilityRequest>) -> Self {
        AllocationBatch { request_id, items }
    }

    #[inline]
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    #[inline]
    pub fn items(&self) -> &[CapabilityRequest] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Capability together with the concrete platform it was granted on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub capability: String,
    pub identity: PlatformIdentity,
}

impl Assignment {
    pub fn new(capability: impl Into<String>, identity: PlatformIdentity) -> Self {
        Assignment {
            capability: capability.into(),
            identity,
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.capability, self.identity)
    }
}

/// A batch could not be granted with the currently available platforms.
///
/// This is a regular outcome, the caller decides whether to wait and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No available platform provides '{capability}' matching '{pattern}' (item {index})")]
pub struct AllocationFailure {
    pub index: usize,
    pub capability: String,
    pub pattern: String,
}

impl AllocationFailure {
    pub(crate) fn new(index: usize, request: &CapabilityRequest) -> Self {
        AllocationFailure {
            index,
            capability: request.capability.clone(),
            pattern: request.pattern.clone(),
        }
    }
}
