use thiserror::Error;

use rocon_pool::RequestId;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Resource pool error: {0}")]
    PoolError(#[from] rocon_pool::Error),
    #[error("Request {0} was already submitted")]
    DuplicateRequest(RequestId),
}

impl From<toml::de::Error> for SchedulerError {
    fn from(error: toml::de::Error) -> Self {
        Self::DeserializationError(error.to_string())
    }
}
