mod config;
mod reporter;
mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use domain_resource::{
    model::vo::{ResourceAccounting, ResourceCapacity},
    repository::SharedRegistries,
    service::ResourceManagerService,
};
use service_resource::ResourceManagerServiceImpl;

use crate::reporter::ResourceReporter;

#[tokio::main]
async fn main() {
    let config = match config::build_config().and_then(config::load) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Failed to build config".red());
            return;
        }
    };

    if let Err(e) = telemetry::initialize_telemetry(&config.telemetry) {
        eprintln!("{}: {e}", "Failed to initialize logger".red());
        return;
    }

    let capacity = match ResourceCapacity::try_from(&config.resources) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Invalid resource configuration".red());
            return;
        }
    };

    // The lifecycle owners register workloads through clones of this handle.
    let registries = SharedRegistries::new();
    let resource_manager: Arc<dyn ResourceManagerService> = Arc::new(
        ResourceManagerServiceImpl::builder()
            .registries(registries)
            .capacity(capacity)
            .accounting(ResourceAccounting::from(&config.resources))
            .build(),
    );
    tracing::info!(
        node_id = %config.agent.node_id,
        nominal_memory = resource_manager.nominal_memory_capacity(),
        nominal_disk = resource_manager.nominal_disk_capacity(),
        "Node agent started"
    );

    let reporter = ResourceReporter::builder()
        .resource_manager(resource_manager)
        .identity(config.agent.identity())
        .period(Duration::from_secs(config.agent.report_interval))
        .build();

    tokio::select! {
        _ = reporter.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Node agent stopped");
        }
    }
}
