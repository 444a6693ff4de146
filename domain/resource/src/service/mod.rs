mod resource_manager;

#[rustfmt::skip]
pub use {
    resource_manager::ResourceManagerService,
};
