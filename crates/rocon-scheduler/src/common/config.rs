use serde::Deserialize;
use std::path::Path;

use rocon_pool::RequestId;
use rocon_pool::identity::PlatformIdentity;
use rocon_pool::pool::{CapabilityRequest, PlatformDescriptor, ResourcePool};

use crate::scheduler::request::SchedulerRequest;

/// A platform known to the scheduler and the rapps installed on it.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct PlatformDef {
    pub uri: PlatformIdentity,
    #[serde(default)]
    pub rapps: Vec<String>,
}

/// One requested rapp, `uri` may contain `*` segments.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ResourceDef {
    pub rapp: String,
    pub uri: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RequestDef {
    /// Random identifier when not given
    pub id: Option<RequestId>,
    pub resources: Vec<ResourceDef>,
}

impl RequestDef {
    pub fn to_request(&self) -> SchedulerRequest {
        SchedulerRequest::new(
            self.id.unwrap_or_else(RequestId::new_random),
            self.resources
                .iter()
                .map(|r| CapabilityRequest::new(r.rapp.clone(), r.uri.clone()))
                .collect(),
        )
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    #[serde(default, rename = "platform")]
    pub platforms: Vec<PlatformDef>,
    #[serde(default, rename = "request")]
    pub requests: Vec<RequestDef>,
}

impl SchedulerConfig {
    pub fn parse(str: &str) -> crate::Result<SchedulerConfig> {
        let config: SchedulerConfig = toml::from_str(str)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> crate::Result<SchedulerConfig> {
        log::debug!("Loading scheduler configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn snapshot(&self) -> Vec<PlatformDescriptor> {
        self.platforms
            .iter()
            .map(|p| PlatformDescriptor::new(p.uri.clone(), p.rapps.iter().cloned()))
            .collect()
    }

    pub fn create_pool(&self) -> crate::Result<ResourcePool> {
        Ok(ResourcePool::new(self.snapshot())?)
    }

    pub fn create_requests(&self) -> Vec<SchedulerRequest> {
        self.requests.iter().map(|r| r.to_request()).collect()
    }
}
