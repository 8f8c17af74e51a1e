mod utils;

mod test_registry;
mod test_release;
