use rocon_pool::pool::KnownPlatform;

use crate::scheduler::queue::QueueElement;
use crate::scheduler::simple::Grant;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Outputs {
    Cli,
    Json,
}

pub trait Output {
    fn print_pool(&self, platforms: &[KnownPlatform]);
    fn print_grants(&self, grants: &[Grant]);
    fn print_waiting(&self, waiting: &[&QueueElement]);

    fn print_error(&self, error: anyhow::Error);
}
