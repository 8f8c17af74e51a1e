use crate::internal::common::ids::RequestId;
use crate::internal::pool::identity::PlatformIdentity;
use crate::internal::pool::platform::{PlatformDescriptor, PlatformStatus};
use crate::internal::pool::registry::ResourcePool;
use crate::internal::pool::request::{AllocationBatch, CapabilityRequest};

pub const TELEOP_RAPP: &str = "rocon_apps/teleop";
pub const EXAMPLE_RAPP: &str = "tests/example_rapp";

pub const ANY_NAME: &str = "rocon:///*/*/*/*/*";
pub const ANY_TURTLEBOT: &str = "rocon:///linux/precise/ros/turtlebot/*";
pub const MARVIN_NAME: &str = "rocon:///linux/precise/ros/turtlebot/marvin";
pub const ROBERTO_NAME: &str = "rocon:///linux/precise/ros/turtlebot/roberto";

pub fn identity(uri: &str) -> PlatformIdentity {
    PlatformIdentity::parse(uri).unwrap()
}

pub fn descriptor(uri: &str, capabilities: &[&str]) -> PlatformDescriptor {
    PlatformDescriptor::new(identity(uri), capabilities.iter().copied())
}

pub fn pool_from(platforms: &[(&str, &[&str])]) -> ResourcePool {
    ResourcePool::new(
        platforms
            .iter()
            .map(|(uri, capabilities)| descriptor(uri, capabilities)),
    )
    .unwrap()
}

pub fn singleton_pool() -> ResourcePool {
    pool_from(&[(ROBERTO_NAME, &[TELEOP_RAPP, EXAMPLE_RAPP])])
}

pub fn doubleton_pool() -> ResourcePool {
    pool_from(&[
        (MARVIN_NAME, &[TELEOP_RAPP, EXAMPLE_RAPP]),
        (ROBERTO_NAME, &[TELEOP_RAPP, EXAMPLE_RAPP]),
    ])
}

pub fn request_id() -> RequestId {
    "01234567-89ab-cdef-0123-456789abcdef".parse().unwrap()
}

pub fn batch(request_id: RequestId, items: &[(&str, &str)]) -> AllocationBatch {
    AllocationBatch::new(
        request_id,
        items
            .iter()
            .map(|(capability, pattern)| CapabilityRequest::new(*capability, *pattern))
            .collect(),
    )
}

pub fn assert_available(pool: &ResourcePool, uri: &str) {
    let platform = pool.get(uri).unwrap();
    assert_eq!(platform.status(), PlatformStatus::Available);
    assert_eq!(platform.owner(), None);
}

pub fn assert_allocated(pool: &ResourcePool, uri: &str, owner: RequestId) {
    let platform = pool.get(uri).unwrap();
    assert_eq!(platform.status(), PlatformStatus::Allocated);
    assert_eq!(platform.owner(), Some(owner));
}

pub fn set_of(uris: &[&str]) -> crate::Set<PlatformIdentity> {
    uris.iter().map(|uri| identity(uri)).collect()
}
