use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::instance::ApplicationId;

/// Static facts about this node that go into every advertisement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    pub id: Uuid,
    pub stacks: Vec<String>,
    pub zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementProperties {
    pub zone: String,
}

/// Capacity the node offers to the cluster scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAdvertisement {
    pub id: Uuid,
    pub stacks: Vec<String>,
    /// Remaining memory in MB, negative when oversubscribed.
    pub available_memory: i64,
    /// Remaining disk in MB, negative when oversubscribed.
    pub available_disk: i64,
    pub app_id_to_count: HashMap<ApplicationId, usize>,
    pub placement_properties: PlacementProperties,
}

impl NodeAdvertisement {
    pub fn is_oversubscribed(&self) -> bool {
        self.available_memory < 0 || self.available_disk < 0
    }
}
