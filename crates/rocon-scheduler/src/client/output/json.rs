use serde_json::json;

use rocon_pool::pool::KnownPlatform;

use crate::client::output::outputs::Output;
use crate::scheduler::queue::QueueElement;
use crate::scheduler::simple::Grant;

#[derive(Default)]
pub struct JsonOutput;

impl JsonOutput {
    fn print(&self, data: serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string())
        );
    }
}

impl Output for JsonOutput {
    fn print_pool(&self, platforms: &[KnownPlatform]) {
        self.print(json!(platforms));
    }

    fn print_grants(&self, grants: &[Grant]) {
        self.print(json!(grants));
    }

    fn print_waiting(&self, waiting: &[&QueueElement]) {
        let data: Vec<_> = waiting
            .iter()
            .map(|element| {
                json!({
                    "request_id": element.request.id(),
                    "requester_id": element.requester_id,
                    "sequence": element.sequence,
                    "status": element.request.status(),
                    "resources": element.request.resources(),
                })
            })
            .collect();
        self.print(json!(data));
    }

    fn print_error(&self, error: anyhow::Error) {
        self.print(json!({ "error": format!("{error:?}") }));
    }
}
