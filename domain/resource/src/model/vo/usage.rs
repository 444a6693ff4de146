use serde::Serialize;

use super::ResourceKind;

/// Resources held by registered workloads at one point in time, in MB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    pub consumed_memory: u64,
    pub consumed_disk: u64,
}

impl ResourceUsage {
    pub fn consumed(&self, resource: ResourceKind) -> u64 {
        match resource {
            ResourceKind::Memory => self.consumed_memory,
            ResourceKind::Disk => self.consumed_disk,
        }
    }
}
