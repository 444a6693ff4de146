use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::entity::{
    instance::InstanceId, staging_task::StagingTaskId, Instance, InstanceState, StagingTask,
};

use super::{InstanceRegistry, StagingTaskRegistry};

/// Both workload registries of a node.
#[derive(Debug, Default)]
pub struct NodeRegistries {
    pub instances: InstanceRegistry,
    pub staging_tasks: StagingTaskRegistry,
}

/// Handle to the node registries behind a single lock.
///
/// A reader holding [`SharedRegistries::read`] sees one point-in-time view of
/// both registries; a write that touches both lands atomically.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistries {
    inner: Arc<RwLock<NodeRegistries>>,
}

impl SharedRegistries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, NodeRegistries> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, NodeRegistries> {
        self.inner.write()
    }

    pub fn register_instance(&self, instance: Instance) -> Option<Instance> {
        self.write().instances.register(instance)
    }

    pub fn unregister_instance(&self, id: &InstanceId) -> Option<Instance> {
        self.write().instances.unregister(id)
    }

    pub fn set_instance_state(
        &self,
        id: &InstanceId,
        state: InstanceState,
    ) -> Option<InstanceState> {
        self.write().instances.set_state(id, state)
    }

    pub fn register_staging_task(&self, task: StagingTask) -> Option<StagingTask> {
        self.write().staging_tasks.register(task)
    }

    pub fn unregister_staging_task(&self, id: &StagingTaskId) -> Option<StagingTask> {
        self.write().staging_tasks.unregister(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let registries = SharedRegistries::new();
        let other = registries.clone();
        let task = StagingTask::new();

        registries.register_staging_task(task.clone());
        other.register_instance(Instance::builder().build());
        {
            let view = registries.read();
            assert_eq!(view.instances.len(), 1);
            assert_eq!(view.staging_tasks.len(), 1);
        }

        other.unregister_staging_task(&task.id());
        assert!(registries.read().staging_tasks.is_empty());
    }
}
