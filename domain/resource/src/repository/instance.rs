use std::collections::HashMap;

use crate::model::entity::{instance::InstanceId, Instance, InstanceState};

/// Owns every instance registered on this node, live or not.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    instances: HashMap<InstanceId, Instance>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `instance`, returning the entry it replaced.
    pub fn register(&mut self, instance: Instance) -> Option<Instance> {
        tracing::debug!(
            instance_id = %instance.id(),
            application_id = instance.application_id(),
            state = %instance.state(),
            "register instance"
        );
        self.instances.insert(instance.id(), instance)
    }

    pub fn unregister(&mut self, id: &InstanceId) -> Option<Instance> {
        let removed = self.instances.remove(id);
        if removed.is_some() {
            tracing::debug!(instance_id = %id, "unregister instance");
        }
        removed
    }

    /// Applies a lifecycle transition, returning the previous state or `None`
    /// when the instance is not registered.
    pub fn set_state(&mut self, id: &InstanceId, state: InstanceState) -> Option<InstanceState> {
        let instance = self.instances.get_mut(id)?;
        let previous = instance.set_state(state);
        tracing::debug!(instance_id = %id, from = %previous, to = %state, "instance state changed");
        Some(previous)
    }

    pub fn get(&self, id: &InstanceId) -> Option<&Instance> {
        self.instances.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.instances.values()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::model::entity::instance::Limits;

    #[test]
    fn register_overwrites_same_id() {
        let mut registry = InstanceRegistry::new();
        let id = Uuid::new_v4();
        let first = Instance::builder().id(id).application_id("a").build();
        let second = Instance::builder()
            .id(id)
            .application_id("a")
            .limits(Limits { memory: 256, disk: 0 })
            .build();

        assert!(registry.register(first).is_none());
        let replaced = registry.register(second).unwrap();
        assert_eq!(replaced.limits().memory, 0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().limits().memory, 256);
    }

    #[test]
    fn unregister_missing_is_noop() {
        let mut registry = InstanceRegistry::new();
        registry.register(Instance::builder().build());
        assert!(registry.unregister(&Uuid::new_v4()).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn set_state() {
        let mut registry = InstanceRegistry::new();
        let instance = Instance::builder().state(InstanceState::Starting).build();
        let id = instance.id();
        registry.register(instance);

        assert_eq!(registry.set_state(&id, InstanceState::Running), Some(InstanceState::Starting));
        assert_eq!(registry.get(&id).unwrap().state(), InstanceState::Running);
        assert_eq!(registry.set_state(&Uuid::new_v4(), InstanceState::Running), None);
    }
}
