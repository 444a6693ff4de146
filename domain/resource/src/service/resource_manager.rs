//! Resource manager service.

use std::collections::HashMap;

use crate::model::{
    entity::instance::ApplicationId,
    vo::{NodeAdvertisement, NodeIdentity, ResourceUsage},
};

/// Capacity queries over the node registries.
///
/// Every call is a fresh scan; nothing is cached between calls. All sizes
/// are in MB.
pub trait ResourceManagerService: Send + Sync {
    /// Base memory times memory overcommit factor.
    fn nominal_memory_capacity(&self) -> i64;

    /// Base disk times disk overcommit factor.
    fn nominal_disk_capacity(&self) -> i64;

    /// Memory and disk held by registered workloads.
    fn usage(&self) -> ResourceUsage;

    /// Nominal memory minus consumed memory. Negative when oversubscribed.
    fn remaining_memory(&self) -> i64;

    /// Nominal disk minus consumed disk. Negative when oversubscribed.
    fn remaining_disk(&self) -> i64;

    /// Registered instances per application, in any state.
    fn app_id_to_count(&self) -> HashMap<ApplicationId, usize>;

    /// How many more workloads of this size fit. Zero for a zero-sized request.
    fn number_reservable(&self, memory_wanted: u64, disk_wanted: u64) -> u64;

    /// Fraction of nominal memory still free.
    fn available_memory_ratio(&self) -> f64;

    /// Fraction of nominal disk still free.
    fn available_disk_ratio(&self) -> f64;

    /// Admission check. Both dimensions need strictly more room than requested.
    fn could_reserve(&self, memory_wanted: u64, disk_wanted: u64) -> bool;

    /// Builds the capacity advertisement for this node from one snapshot.
    fn advertisement(&self, node: &NodeIdentity) -> NodeAdvertisement;
}
