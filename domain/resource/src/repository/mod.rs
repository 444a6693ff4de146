mod instance;
mod shared;
mod staging_task;

#[rustfmt::skip]
pub use {
    instance::InstanceRegistry,
    shared::NodeRegistries,
    shared::SharedRegistries,
    staging_task::StagingTaskRegistry,
};
