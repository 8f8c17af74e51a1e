#[macro_use]
pub(crate) mod common;
pub(crate) mod pool;

#[cfg(test)]
mod tests;
