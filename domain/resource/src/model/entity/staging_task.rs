use uuid::Uuid;

/// Memory every staging task reserves, in MB.
pub const DEFAULT_STAGING_MEMORY_MB: u64 = 1024;
/// Disk every staging task reserves, in MB.
pub const DEFAULT_STAGING_DISK_MB: u64 = 2048;

pub type StagingTaskId = Uuid;

/// A build task on this node. Callers cannot size it; it always holds the
/// default staging slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagingTask {
    id: StagingTaskId,
}

impl StagingTask {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: StagingTaskId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> StagingTaskId {
        self.id
    }

    pub fn reserved_memory(&self) -> u64 {
        DEFAULT_STAGING_MEMORY_MB
    }

    pub fn reserved_disk(&self) -> u64 {
        DEFAULT_STAGING_DISK_MB
    }
}

impl Default for StagingTask {
    fn default() -> Self {
        Self::new()
    }
}
