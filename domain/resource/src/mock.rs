use std::collections::HashMap;

use mockall::mock;

use crate::{
    model::{
        entity::instance::ApplicationId,
        vo::{NodeAdvertisement, NodeIdentity, ResourceUsage},
    },
    service::ResourceManagerService,
};

mock! {
    pub ResourceManagerService {}
    impl ResourceManagerService for ResourceManagerService {
        fn nominal_memory_capacity(&self) -> i64;
        fn nominal_disk_capacity(&self) -> i64;
        fn usage(&self) -> ResourceUsage;
        fn remaining_memory(&self) -> i64;
        fn remaining_disk(&self) -> i64;
        fn app_id_to_count(&self) -> HashMap<ApplicationId, usize>;
        fn number_reservable(&self, memory_wanted: u64, disk_wanted: u64) -> u64;
        fn available_memory_ratio(&self) -> f64;
        fn available_disk_ratio(&self) -> f64;
        fn could_reserve(&self, memory_wanted: u64, disk_wanted: u64) -> bool;
        fn advertisement(&self, node: &NodeIdentity) -> NodeAdvertisement;
    }
}
