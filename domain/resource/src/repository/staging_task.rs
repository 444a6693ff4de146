use std::collections::HashMap;

use crate::model::entity::{staging_task::StagingTaskId, StagingTask};

#[derive(Debug, Default)]
pub struct StagingTaskRegistry {
    tasks: HashMap<StagingTaskId, StagingTask>,
}

impl StagingTaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `task`, returning the entry it replaced.
    pub fn register(&mut self, task: StagingTask) -> Option<StagingTask> {
        tracing::debug!(task_id = %task.id(), "register staging task");
        self.tasks.insert(task.id(), task)
    }

    pub fn unregister(&mut self, id: &StagingTaskId) -> Option<StagingTask> {
        let removed = self.tasks.remove(id);
        if removed.is_some() {
            tracing::debug!(task_id = %id, "unregister staging task");
        }
        removed
    }

    pub fn get(&self, id: &StagingTaskId) -> Option<&StagingTask> {
        self.tasks.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StagingTask> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_idempotent_per_id() {
        let mut registry = StagingTaskRegistry::new();
        let task = StagingTask::new();
        registry.register(task.clone());
        assert_eq!(registry.register(task.clone()), Some(task.clone()));
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.unregister(&task.id()), Some(task.clone()));
        assert!(registry.unregister(&task.id()).is_none());
        assert!(registry.is_empty());
    }
}
