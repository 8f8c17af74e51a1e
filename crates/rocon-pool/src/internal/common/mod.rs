#[macro_use]
pub(crate) mod ids;

pub(crate) mod data_structures;
pub(crate) mod error;

pub use data_structures::{Map, Set};
