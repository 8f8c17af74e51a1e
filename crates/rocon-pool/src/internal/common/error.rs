use thiserror::Error;

use crate::internal::pool::identity::{IdentityError, PlatformIdentity};

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Resource {0} is defined more than once")]
    DuplicateResource(PlatformIdentity),
    #[error("Invalid platform identity: {0}")]
    InvalidIdentity(#[from] IdentityError),
}
