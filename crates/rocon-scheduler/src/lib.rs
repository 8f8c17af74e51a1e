pub mod client;
pub mod common;
pub mod scheduler;

pub type Error = crate::common::error::SchedulerError;
pub type Result<T> = std::result::Result<T, Error>;

// Identifies whoever submitted a request, replies are routed back to it.
rocon_pool::define_uuid_type!(RequesterId);

// Reexports
pub use rocon_pool;
pub use rocon_pool::RequestId;

pub const SCHEDULER_VERSION: &str = env!("CARGO_PKG_VERSION");
