use std::collections::VecDeque;

use rocon_pool::RequestId;

use crate::RequesterId;
use crate::scheduler::request::SchedulerRequest;

/// Request waiting in a [`RequestQueue`].
///
/// Two elements are equal when they carry the same request, regardless of
/// their requester or position in the queue.
#[derive(Debug)]
pub struct QueueElement {
    pub request: SchedulerRequest,
    pub requester_id: RequesterId,
    /// Order in which the element was first enqueued
    pub sequence: u64,
}

impl PartialEq for QueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.request.id() == other.request.id()
    }
}

impl Eq for QueueElement {}

/// FIFO queue of waiting requests.
#[derive(Debug, Default)]
pub struct RequestQueue {
    queue: VecDeque<QueueElement>,
    next_sequence: u64,
}

impl RequestQueue {
    /// Wraps `request` into a new element at the tail of the queue.
    pub fn enqueue(&mut self, request: SchedulerRequest, requester_id: RequesterId) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push_back(QueueElement {
            request,
            requester_id,
            sequence,
        });
        sequence
    }

    pub fn push_back(&mut self, element: QueueElement) {
        self.queue.push_back(element);
    }

    pub fn push_front(&mut self, element: QueueElement) {
        self.queue.push_front(element);
    }

    pub fn pop_front(&mut self) -> Option<QueueElement> {
        self.queue.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<QueueElement> {
        self.queue.pop_back()
    }

    pub fn remove(&mut self, request_id: RequestId) -> Option<QueueElement> {
        let position = self
            .queue
            .iter()
            .position(|e| e.request.id() == request_id)?;
        self.queue.remove(position)
    }

    pub fn contains(&self, request_id: RequestId) -> bool {
        self.queue.iter().any(|e| e.request.id() == request_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueueElement> {
        self.queue.iter()
    }
}
