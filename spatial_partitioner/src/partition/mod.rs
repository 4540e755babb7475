//! Spatial partitioning module
//!
//! Provides the AABB record, the dense bounding-volume store, and the
//! handle-addressed registry of independent stores.

mod aabb;
mod store;
mod registry;

pub use aabb::Aabb;
pub use store::SpatialPartitioner;
pub use registry::PartitionerRegistry;
