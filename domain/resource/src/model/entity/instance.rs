use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::exception::ResourceException;

pub type InstanceId = Uuid;
pub type ApplicationId = String;

/// Declared footprint of an instance, in MB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(rename = "mem", default)]
    pub memory: u64,
    #[serde(default)]
    pub disk: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceState {
    /// Placed on the node, container not created yet.
    #[default]
    Born,
    Starting,
    Running,
    Stopping,
    Stopped,
    Crashed,
    Deleted,
}

impl InstanceState {
    pub const ALL: [Self; 7] = [
        Self::Born,
        Self::Starting,
        Self::Running,
        Self::Stopping,
        Self::Stopped,
        Self::Crashed,
        Self::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Born => "BORN",
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Crashed => "CRASHED",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceState {
    type Err = ResourceException;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ResourceException::UnknownInstanceState {
                state: s.to_owned(),
            })
    }
}

/// An application instance placed on this node.
///
/// Identity and limits are fixed at construction, a resize is an
/// unregister followed by a register. Only the lifecycle state moves.
#[derive(Clone, Debug, TypedBuilder)]
pub struct Instance {
    #[builder(default = Uuid::new_v4())]
    id: InstanceId,
    #[builder(default, setter(into))]
    application_id: ApplicationId,
    #[builder(default)]
    limits: Limits,
    #[builder(default)]
    state: InstanceState,
}

impl Instance {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn state(&self) -> InstanceState {
        self.state
    }

    /// Moves the instance to `state`, returning the state it left.
    pub fn set_state(&mut self, state: InstanceState) -> InstanceState {
        std::mem::replace(&mut self.state, state)
    }
}
