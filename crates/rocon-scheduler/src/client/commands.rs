use std::path::Path;

use rocon_pool::pool::SharedResourcePool;

use crate::RequesterId;
use crate::client::output::outputs::Output;
use crate::common::cli::{PoolOpts, RunOpts};
use crate::common::config::SchedulerConfig;
use crate::scheduler::simple::SimpleScheduler;

fn load_pool(path: &Path) -> crate::Result<(SchedulerConfig, SharedResourcePool)> {
    let config = SchedulerConfig::load(path)?;
    let pool = SharedResourcePool::wrap(config.create_pool()?);
    log::debug!(
        "Loaded {} platform(s) and {} request(s) from {}",
        config.platforms.len(),
        config.requests.len(),
        path.display()
    );
    Ok((config, pool))
}

pub fn command_pool(output: &dyn Output, opts: PoolOpts) -> crate::Result<()> {
    let (_, pool) = load_pool(&opts.config.config)?;
    output.print_pool(&pool.known_resources());
    Ok(())
}

/// Submits all configured requests on behalf of a single requester.
pub fn command_run(output: &dyn Output, opts: RunOpts) -> crate::Result<()> {
    let (config, pool) = load_pool(&opts.config.config)?;
    let mut scheduler = SimpleScheduler::new(pool);
    let requester_id = RequesterId::new_random();

    let mut grants = Vec::new();
    for request in config.create_requests() {
        grants.extend(scheduler.submit(requester_id, request)?);
    }
    output.print_grants(&grants);

    let waiting: Vec<_> = scheduler.waiting().collect();
    if !waiting.is_empty() {
        log::warn!("{} request(s) could not be granted", waiting.len());
        output.print_waiting(&waiting);
    }
    output.print_pool(&scheduler.pool().known_resources());

    if opts.release {
        let granted: Vec<_> = scheduler.granted().map(|e| e.request.id()).collect();
        for request_id in granted {
            let late_grants = scheduler.cancel(request_id);
            if !late_grants.is_empty() {
                output.print_grants(&late_grants);
            }
        }
        output.print_pool(&scheduler.pool().known_resources());
    }
    Ok(())
}
