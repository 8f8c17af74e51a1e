use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::internal::pool::identity::PlatformIdentity;
use crate::internal::pool::platform::KnownPlatform;
use crate::internal::pool::registry::ResourcePool;
use crate::internal::pool::release::GrantedRequest;
use crate::internal::pool::request::{AllocationBatch, AllocationFailure, Assignment};

/// Thread-safe handle to a [`ResourcePool`].
///
/// Each operation runs under one lock, so an allocation including its
/// rollback is never interleaved with another allocation or release.
/// Cloning the handle shares the same pool.
#[derive(Debug, Default, Clone)]
pub struct SharedResourcePool {
    inner: Arc<Mutex<ResourcePool>>,
}

impl SharedResourcePool {
    pub fn wrap(pool: ResourcePool) -> Self {
        SharedResourcePool {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Locks the pool for a sequence of operations that have to be atomic together.
    pub fn lock(&self) -> MutexGuard<'_, ResourcePool> {
        // Pool methods do not panic halfway through a mutation, so the data
        // behind a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn allocate(&self, batch: &AllocationBatch) -> Result<Vec<Assignment>, AllocationFailure> {
        self.lock().allocate(batch)
    }

    pub fn release_assignments(&self, assignments: &[Assignment]) {
        self.lock().release_assignments(assignments)
    }

    pub fn release_identities(&self, identities: &[PlatformIdentity]) {
        self.lock().release_identities(identities)
    }

    pub fn release_request(&self, request: &impl GrantedRequest) {
        self.lock().release_request(request)
    }

    pub fn known_resources(&self) -> Vec<KnownPlatform> {
        self.lock().known_resources()
    }
}
