pub mod instance;
pub mod staging_task;

#[rustfmt::skip]
pub use {
    instance::Instance,
    instance::InstanceState,
    staging_task::StagingTask,
};
