pub mod accounting;
pub mod advertisement;
pub mod capacity;
pub mod usage;

#[rustfmt::skip]
pub use {
    accounting::ResourceAccounting,
    advertisement::NodeAdvertisement,
    advertisement::NodeIdentity,
    advertisement::PlacementProperties,
    capacity::ResourceCapacity,
    capacity::ResourceConfig,
    capacity::ResourceKind,
    usage::ResourceUsage,
};
