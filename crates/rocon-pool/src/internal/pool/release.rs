use crate::internal::common::ids::RequestId;
use crate::internal::pool::identity::PlatformIdentity;
use crate::internal::pool::registry::ResourcePool;
use crate::internal::pool::request::Assignment;

/// A request that was granted platforms by [`ResourcePool::allocate`].
///
/// Implemented by whatever tracks the request lifecycle outside the pool.
pub trait GrantedRequest {
    fn request_id(&self) -> RequestId;
    fn allocations(&self) -> &[Assignment];
}

impl ResourcePool {
    /// Returns every platform of `assignments` to the pool.
    pub fn release_assignments<'a>(&mut self, assignments: impl IntoIterator<Item = &'a Assignment>) {
        self.release_identities(assignments.into_iter().map(|a| &a.identity));
    }

    /// Returns the given platforms to the pool.
    ///
    /// Platforms that are already available are left alone and identities
    /// unknown to the pool are ignored.
    pub fn release_identities<'a>(
        &mut self,
        identities: impl IntoIterator<Item = &'a PlatformIdentity>,
    ) {
        for identity in identities {
            self.release_platform(identity, None);
        }
    }

    /// Returns all platforms granted to `request`.
    pub fn release_request(&mut self, request: &impl GrantedRequest) {
        let request_id = request.request_id();
        for assignment in request.allocations() {
            self.release_platform(&assignment.identity, Some(request_id));
        }
        log::debug!("Request {request_id} released");
    }

    fn release_platform(&mut self, identity: &PlatformIdentity, expected_owner: Option<RequestId>) {
        let Some(platform) = self.get_mut(identity.as_str()) else {
            log::warn!("Cannot release unknown platform {identity}");
            return;
        };
        match (platform.set_available(), expected_owner) {
            (None, _) => {
                log::debug!("Platform {identity} is already available");
            }
            (Some(owner), Some(expected)) if owner != expected => {
                log::warn!("Platform {identity} was owned by {owner}, released by {expected}");
            }
            (Some(owner), _) => {
                log::debug!("Platform {identity} released from {owner}");
            }
        }
    }
}
