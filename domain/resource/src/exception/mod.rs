use thiserror::Error;

use crate::model::vo::ResourceKind;

pub type ResourceResult<T> = Result<T, ResourceException>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceException {
    #[error("The {resource} overcommit factor must be a finite non-negative number, got: {factor}.")]
    InvalidOvercommitFactor { resource: ResourceKind, factor: f64 },

    #[error("The nominal {resource} capacity of {base_mb} MB with overcommit factor {factor} overflows.")]
    CapacityOverflow {
        resource: ResourceKind,
        base_mb: u64,
        factor: f64,
    },

    #[error("Unknown instance state: {state}.")]
    UnknownInstanceState { state: String },
}
