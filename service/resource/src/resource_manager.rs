use std::collections::HashMap;

use domain_resource::{
    model::{
        entity::instance::ApplicationId,
        vo::{
            NodeAdvertisement, NodeIdentity, PlacementProperties, ResourceAccounting,
            ResourceCapacity, ResourceKind, ResourceUsage,
        },
    },
    repository::{NodeRegistries, SharedRegistries},
    service::ResourceManagerService,
};
use typed_builder::TypedBuilder;

/// Read-side aggregator over the node registries.
///
/// Holds no counters of its own. Each query takes the registries' read lock
/// once and recomputes consumption from what is registered right now.
#[derive(TypedBuilder)]
pub struct ResourceManagerServiceImpl {
    registries: SharedRegistries,
    capacity: ResourceCapacity,
    #[builder(default)]
    accounting: ResourceAccounting,
}

impl ResourceManagerServiceImpl {
    fn measure(&self, registries: &NodeRegistries) -> ResourceUsage {
        let mut usage = ResourceUsage::default();
        for instance in registries.instances.iter() {
            let limits = instance.limits();
            if self.accounting.consumes_memory(instance.state()) {
                usage.consumed_memory = usage.consumed_memory.saturating_add(limits.memory);
            }
            if self.accounting.consumes_disk(instance.state()) {
                usage.consumed_disk = usage.consumed_disk.saturating_add(limits.disk);
            }
        }
        for task in registries.staging_tasks.iter() {
            usage.consumed_memory = usage.consumed_memory.saturating_add(task.reserved_memory());
            usage.consumed_disk = usage.consumed_disk.saturating_add(task.reserved_disk());
        }
        usage
    }

    fn snapshot(&self) -> ResourceUsage {
        let registries = self.registries.read();
        self.measure(&registries)
    }

    fn remaining(&self, usage: &ResourceUsage, resource: ResourceKind) -> i64 {
        let consumed = i64::try_from(usage.consumed(resource)).unwrap_or(i64::MAX);
        self.capacity.nominal(resource).saturating_sub(consumed)
    }

    fn ratio(&self, usage: &ResourceUsage, resource: ResourceKind) -> f64 {
        let nominal = self.capacity.nominal(resource);
        if nominal == 0 {
            return 0.0;
        }
        1.0 - usage.consumed(resource) as f64 / nominal as f64
    }

    fn count_by_application(registries: &NodeRegistries) -> HashMap<ApplicationId, usize> {
        let mut counts = HashMap::new();
        for instance in registries.instances.iter() {
            *counts.entry(instance.application_id().to_owned()).or_insert(0) += 1;
        }
        counts
    }

    fn reservable(remaining: i64, wanted: u64) -> u64 {
        u64::try_from(remaining).map_or(0, |remaining| remaining / wanted)
    }

    fn fits(remaining: i64, wanted: u64) -> bool {
        i64::try_from(wanted).is_ok_and(|wanted| wanted < remaining)
    }
}

impl ResourceManagerService for ResourceManagerServiceImpl {
    fn nominal_memory_capacity(&self) -> i64 {
        self.capacity.nominal_memory()
    }

    fn nominal_disk_capacity(&self) -> i64 {
        self.capacity.nominal_disk()
    }

    fn usage(&self) -> ResourceUsage {
        self.snapshot()
    }

    fn remaining_memory(&self) -> i64 {
        self.remaining(&self.snapshot(), ResourceKind::Memory)
    }

    fn remaining_disk(&self) -> i64 {
        self.remaining(&self.snapshot(), ResourceKind::Disk)
    }

    fn app_id_to_count(&self) -> HashMap<ApplicationId, usize> {
        Self::count_by_application(&self.registries.read())
    }

    fn number_reservable(&self, memory_wanted: u64, disk_wanted: u64) -> u64 {
        if memory_wanted == 0 || disk_wanted == 0 {
            return 0;
        }
        let usage = self.snapshot();
        let by_memory = Self::reservable(self.remaining(&usage, ResourceKind::Memory), memory_wanted);
        let by_disk = Self::reservable(self.remaining(&usage, ResourceKind::Disk), disk_wanted);
        by_memory.min(by_disk)
    }

    fn available_memory_ratio(&self) -> f64 {
        self.ratio(&self.snapshot(), ResourceKind::Memory)
    }

    fn available_disk_ratio(&self) -> f64 {
        self.ratio(&self.snapshot(), ResourceKind::Disk)
    }

    fn could_reserve(&self, memory_wanted: u64, disk_wanted: u64) -> bool {
        let usage = self.snapshot();
        let remaining_memory = self.remaining(&usage, ResourceKind::Memory);
        let remaining_disk = self.remaining(&usage, ResourceKind::Disk);
        let admitted =
            Self::fits(remaining_memory, memory_wanted) && Self::fits(remaining_disk, disk_wanted);
        tracing::debug!(
            memory_wanted,
            disk_wanted,
            remaining_memory,
            remaining_disk,
            admitted,
            "admission check"
        );
        admitted
    }

    fn advertisement(&self, node: &NodeIdentity) -> NodeAdvertisement {
        let registries = self.registries.read();
        let usage = self.measure(&registries);
        NodeAdvertisement {
            id: node.id,
            stacks: node.stacks.clone(),
            available_memory: self.remaining(&usage, ResourceKind::Memory),
            available_disk: self.remaining(&usage, ResourceKind::Disk),
            app_id_to_count: Self::count_by_application(&registries),
            placement_properties: PlacementProperties {
                zone: node.zone.clone(),
            },
        }
    }
}
