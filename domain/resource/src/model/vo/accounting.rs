//! Which lifecycle states hold node resources.

use std::collections::HashSet;

use crate::model::entity::InstanceState;

use super::{ResourceConfig, ResourceKind};

pub const DEFAULT_MEMORY_ACTIVE_STATES: [InstanceState; 4] = [
    InstanceState::Born,
    InstanceState::Starting,
    InstanceState::Running,
    InstanceState::Stopping,
];

/// A crashed instance has no process left, but its sandbox is still on disk.
pub const DEFAULT_DISK_ACTIVE_STATES: [InstanceState; 5] = [
    InstanceState::Born,
    InstanceState::Starting,
    InstanceState::Running,
    InstanceState::Stopping,
    InstanceState::Crashed,
];

/// State classification table shared by the memory and disk paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceAccounting {
    memory_active_states: HashSet<InstanceState>,
    disk_active_states: HashSet<InstanceState>,
}

impl ResourceAccounting {
    pub fn new(
        memory_active_states: impl IntoIterator<Item = InstanceState>,
        disk_active_states: impl IntoIterator<Item = InstanceState>,
    ) -> Self {
        Self {
            memory_active_states: memory_active_states.into_iter().collect(),
            disk_active_states: disk_active_states.into_iter().collect(),
        }
    }

    pub fn consumes(&self, resource: ResourceKind, state: InstanceState) -> bool {
        match resource {
            ResourceKind::Memory => self.memory_active_states.contains(&state),
            ResourceKind::Disk => self.disk_active_states.contains(&state),
        }
    }

    pub fn consumes_memory(&self, state: InstanceState) -> bool {
        self.consumes(ResourceKind::Memory, state)
    }

    pub fn consumes_disk(&self, state: InstanceState) -> bool {
        self.consumes(ResourceKind::Disk, state)
    }
}

impl Default for ResourceAccounting {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_ACTIVE_STATES, DEFAULT_DISK_ACTIVE_STATES)
    }
}

impl From<&ResourceConfig> for ResourceAccounting {
    fn from(config: &ResourceConfig) -> Self {
        Self::new(
            config.memory_active_states.iter().copied(),
            config.disk_active_states.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InstanceState::*;

    #[test]
    fn default_table() {
        let accounting = ResourceAccounting::default();
        let memory: Vec<_> =
            InstanceState::ALL.into_iter().filter(|s| accounting.consumes_memory(*s)).collect();
        let disk: Vec<_> =
            InstanceState::ALL.into_iter().filter(|s| accounting.consumes_disk(*s)).collect();
        assert_eq!(memory, vec![Born, Starting, Running, Stopping]);
        assert_eq!(disk, vec![Born, Starting, Running, Stopping, Crashed]);
    }

    #[test]
    fn dimensions_are_independent() {
        let accounting = ResourceAccounting::new([Running], [Stopped]);
        assert!(accounting.consumes_memory(Running));
        assert!(!accounting.consumes_disk(Running));
        assert!(accounting.consumes_disk(Stopped));
        assert!(!accounting.consumes_memory(Stopped));
    }
}
