pub(crate) mod internal;

pub use crate::internal::common::ids::RequestId;
pub use crate::internal::common::{Map, Set};

pub type Error = internal::common::error::PoolError;
pub type Result<T> = std::result::Result<T, Error>;

pub mod identity {
    pub use crate::internal::pool::identity::{
        IdentityError, IdentityPattern, PatternSegment, PlatformIdentity, WILDCARD, matches,
    };
}

pub mod pool {
    pub use crate::internal::pool::allocate::MAX_PERMUTED_ITEMS;
    pub use crate::internal::pool::platform::{
        KnownPlatform, Platform, PlatformDescriptor, PlatformStatus,
    };
    pub use crate::internal::pool::registry::{MatchList, ResourcePool};
    pub use crate::internal::pool::release::GrantedRequest;
    pub use crate::internal::pool::request::{
        AllocationBatch, AllocationFailure, Assignment, CapabilityRequest,
    };
    pub use crate::internal::pool::shared::SharedResourcePool;
}
