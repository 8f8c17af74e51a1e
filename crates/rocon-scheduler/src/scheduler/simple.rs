use serde::Serialize;

use rocon_pool::RequestId;
use rocon_pool::pool::{Assignment, SharedResourcePool};

use crate::RequesterId;
use crate::common::error::SchedulerError;
use crate::scheduler::queue::{QueueElement, RequestQueue};
use crate::scheduler::request::{RequestStatus, SchedulerRequest};

/// Notification that a request was granted, to be delivered to its requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    pub request_id: RequestId,
    pub requester_id: RequesterId,
    pub allocations: Vec<Assignment>,
}

/// Grants requests in arrival order, a waiting request is skipped (not
/// blocking the ones behind it) while its resources are not available.
pub struct SimpleScheduler {
    pool: SharedResourcePool,
    ready_queue: RequestQueue,
    granted: Vec<QueueElement>,
    /// Canceled requests, in the order they were closed
    released: Vec<QueueElement>,
}

impl SimpleScheduler {
    pub fn new(pool: SharedResourcePool) -> Self {
        SimpleScheduler {
            pool,
            ready_queue: RequestQueue::default(),
            granted: Vec::new(),
            released: Vec::new(),
        }
    }

    #[inline]
    pub fn pool(&self) -> &SharedResourcePool {
        &self.pool
    }

    /// Makes `request` wait for resources and tries to grant waiting requests.
    pub fn submit(
        &mut self,
        requester_id: RequesterId,
        request: SchedulerRequest,
    ) -> crate::Result<Vec<Grant>> {
        let request_id = request.id();
        if self.ready_queue.contains(request_id)
            || self.find_granted(request_id).is_some()
            || self.find_released(request_id).is_some()
        {
            return Err(SchedulerError::DuplicateRequest(request_id));
        }
        self.ready_queue.enqueue(request, requester_id);
        log::info!("Request queued: {request_id}");
        Ok(self.dispatch())
    }

    /// Releases or dequeues a request and grants whatever became satisfiable.
    pub fn cancel(&mut self, request_id: RequestId) -> Vec<Grant> {
        if let Some(position) = self.find_granted(request_id) {
            let mut element = self.granted.remove(position);
            self.pool.release_request(&element.request);
            element.request.close();
            log::info!("Request released: {request_id}");
            self.released.push(element);
        } else if let Some(mut element) = self.ready_queue.remove(request_id) {
            element.request.close();
            log::info!("Request canceled while waiting: {request_id}");
            self.released.push(element);
        } else if self.find_released(request_id).is_some() {
            log::debug!("Request {request_id} is already released");
            return Vec::new();
        } else {
            log::debug!("Cannot cancel unknown request {request_id}");
            return Vec::new();
        }
        self.dispatch()
    }

    /// Tries every waiting request once, in queue order.
    pub fn dispatch(&mut self) -> Vec<Grant> {
        let mut grants = Vec::new();
        for _ in 0..self.ready_queue.len() {
            let Some(mut element) = self.ready_queue.pop_front() else {
                break;
            };
            match self.pool.allocate(&element.request.batch()) {
                Ok(allocations) => {
                    log::info!("Request granted: {}", element.request.id());
                    grants.push(Grant {
                        request_id: element.request.id(),
                        requester_id: element.requester_id,
                        allocations: allocations.clone(),
                    });
                    element.request.grant(allocations);
                    self.granted.push(element);
                }
                Err(failure) => {
                    log::debug!("Request {} keeps waiting: {failure}", element.request.id());
                    self.ready_queue.push_back(element);
                }
            }
        }
        grants
    }

    pub fn waiting(&self) -> impl Iterator<Item = &QueueElement> {
        self.ready_queue.iter()
    }

    pub fn granted(&self) -> impl Iterator<Item = &QueueElement> {
        self.granted.iter()
    }

    pub fn released(&self) -> impl Iterator<Item = &QueueElement> {
        self.released.iter()
    }

    pub fn request_status(&self, request_id: RequestId) -> Option<RequestStatus> {
        self.find_granted(request_id)
            .map(|position| &self.granted[position])
            .or_else(|| {
                self.ready_queue
                    .iter()
                    .find(|e| e.request.id() == request_id)
            })
            .or_else(|| {
                self.find_released(request_id)
                    .map(|position| &self.released[position])
            })
            .map(|e| e.request.status())
    }

    fn find_granted(&self, request_id: RequestId) -> Option<usize> {
        self.granted
            .iter()
            .position(|e| e.request.id() == request_id)
    }

    fn find_released(&self, request_id: RequestId) -> Option<usize> {
        self.released
            .iter()
            .position(|e| e.request.id() == request_id)
    }
}
