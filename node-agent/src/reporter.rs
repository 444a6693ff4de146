use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use domain_resource::{
    model::vo::{NodeAdvertisement, NodeIdentity},
    service::ResourceManagerService,
};
use tokio::time::sleep;
use typed_builder::TypedBuilder;

/// Periodically logs what this node can still take.
#[derive(TypedBuilder)]
pub struct ResourceReporter {
    resource_manager: Arc<dyn ResourceManagerService>,
    identity: NodeIdentity,
    /// the period for reporting
    period: Duration,
}

impl ResourceReporter {
    pub async fn run(&self) {
        loop {
            if let Err(e) = self.report() {
                tracing::error!("Failed to report node capacity: {e}");
            }
            sleep(self.period).await;
        }
    }

    pub fn report(&self) -> anyhow::Result<NodeAdvertisement> {
        let advertisement = self.resource_manager.advertisement(&self.identity);
        let payload =
            serde_json::to_string(&advertisement).context("Failed to encode advertisement")?;
        if advertisement.is_oversubscribed() {
            tracing::warn!(
                available_memory = advertisement.available_memory,
                available_disk = advertisement.available_disk,
                "Node is oversubscribed"
            );
        }
        tracing::info!(
            memory_ratio = self.resource_manager.available_memory_ratio(),
            disk_ratio = self.resource_manager.available_disk_ratio(),
            "Reporting capacity: {payload}"
        );
        Ok(advertisement)
    }
}
