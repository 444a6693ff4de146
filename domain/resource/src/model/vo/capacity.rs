use std::fmt;

use serde::{Deserialize, Serialize};

use crate::exception::{ResourceException, ResourceResult};
use crate::model::entity::InstanceState;

use super::accounting::{DEFAULT_DISK_ACTIVE_STATES, DEFAULT_MEMORY_ACTIVE_STATES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Memory,
    Disk,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Disk => f.write_str("disk"),
        }
    }
}

/// Node capacity settings as they come from the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceConfig {
    pub memory_mb: u64,
    pub memory_overcommit_factor: f64,
    pub disk_mb: u64,
    pub disk_overcommit_factor: f64,
    #[serde(default = "ResourceConfig::default_memory_active_states")]
    pub memory_active_states: Vec<InstanceState>,
    #[serde(default = "ResourceConfig::default_disk_active_states")]
    pub disk_active_states: Vec<InstanceState>,
}

impl ResourceConfig {
    pub fn default_memory_active_states() -> Vec<InstanceState> {
        DEFAULT_MEMORY_ACTIVE_STATES.to_vec()
    }
    pub fn default_disk_active_states() -> Vec<InstanceState> {
        DEFAULT_DISK_ACTIVE_STATES.to_vec()
    }
}

/// Validated, immutable node capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceCapacity {
    memory_mb: u64,
    memory_overcommit_factor: f64,
    disk_mb: u64,
    disk_overcommit_factor: f64,
}

impl ResourceCapacity {
    pub fn new(
        memory_mb: u64,
        memory_overcommit_factor: f64,
        disk_mb: u64,
        disk_overcommit_factor: f64,
    ) -> ResourceResult<Self> {
        Self::validate(ResourceKind::Memory, memory_mb, memory_overcommit_factor)?;
        Self::validate(ResourceKind::Disk, disk_mb, disk_overcommit_factor)?;
        Ok(Self {
            memory_mb,
            memory_overcommit_factor,
            disk_mb,
            disk_overcommit_factor,
        })
    }

    fn validate(resource: ResourceKind, base_mb: u64, factor: f64) -> ResourceResult<()> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ResourceException::InvalidOvercommitFactor { resource, factor });
        }
        if base_mb as f64 * factor >= i64::MAX as f64 {
            return Err(ResourceException::CapacityOverflow {
                resource,
                base_mb,
                factor,
            });
        }
        Ok(())
    }

    fn scaled(base_mb: u64, factor: f64) -> i64 {
        // Bounded by `validate`.
        (base_mb as f64 * factor).floor() as i64
    }

    pub fn nominal_memory(&self) -> i64 {
        Self::scaled(self.memory_mb, self.memory_overcommit_factor)
    }

    pub fn nominal_disk(&self) -> i64 {
        Self::scaled(self.disk_mb, self.disk_overcommit_factor)
    }

    pub fn nominal(&self, resource: ResourceKind) -> i64 {
        match resource {
            ResourceKind::Memory => self.nominal_memory(),
            ResourceKind::Disk => self.nominal_disk(),
        }
    }
}

impl TryFrom<&ResourceConfig> for ResourceCapacity {
    type Error = ResourceException;

    fn try_from(config: &ResourceConfig) -> Result<Self, Self::Error> {
        Self::new(
            config.memory_mb,
            config.memory_overcommit_factor,
            config.disk_mb,
            config.disk_overcommit_factor,
        )
    }
}
