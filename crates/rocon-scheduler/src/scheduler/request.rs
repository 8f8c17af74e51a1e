use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use rocon_pool::RequestId;
use rocon_pool::pool::{AllocationBatch, Assignment, CapabilityRequest, GrantedRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Waiting,
    Granted,
    Released,
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RequestStatus::Waiting => "WAITING",
            RequestStatus::Granted => "GRANTED",
            RequestStatus::Released => "RELEASED",
        })
    }
}

/// Scheduler side view of a resource request.
#[derive(Debug, Clone)]
pub struct SchedulerRequest {
    id: RequestId,
    resources: Vec<CapabilityRequest>,
    status: RequestStatus,
    allocations: Vec<Assignment>,
}

impl SchedulerRequest {
    pub fn new(id: RequestId, resources: Vec<CapabilityRequest>) -> Self {
        SchedulerRequest {
            id,
            resources,
            status: RequestStatus::Waiting,
            allocations: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[inline]
    pub fn resources(&self) -> &[CapabilityRequest] {
        &self.resources
    }

    #[inline]
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub(crate) fn batch(&self) -> AllocationBatch {
        AllocationBatch::new(self.id, self.resources.clone())
    }

    pub(crate) fn grant(&mut self, allocations: Vec<Assignment>) {
        debug_assert_eq!(self.status, RequestStatus::Waiting);
        self.allocations = allocations;
        self.status = RequestStatus::Granted;
    }

    pub(crate) fn close(&mut self) {
        self.status = RequestStatus::Released;
    }
}

impl GrantedRequest for SchedulerRequest {
    fn request_id(&self) -> RequestId {
        self.id
    }

    fn allocations(&self) -> &[Assignment] {
        &self.allocations
    }
}
