pub mod queue;
pub mod request;
pub mod simple;
