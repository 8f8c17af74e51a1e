pub mod allocate;
pub mod identity;
pub mod platform;
pub mod registry;
pub mod release;
pub mod request;
pub mod shared;
