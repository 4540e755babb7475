/*!
# Spatial Partitioner

Dense bounding-volume store for interactive 3D spatial queries.

This crate keeps a flat, cache-friendly collection of axis-aligned bounding
boxes (AABBs) keyed by integer item ids, and answers "which registered items
overlap / lie inside this region?" with a linear scan whose predicates run on
one hardware vector register per box corner. There is deliberately no tree:
insertion, in-place update and removal are all O(1), and queries stay simple
enough to vectorize.

## Architecture

- **Aabb**: one item's spatial footprint, one 4-lane register per corner
- **SpatialPartitioner**: dense box array + id index, CRUD and bounded queries
- **PartitionerRegistry**: handle-addressed arena of independent partitioners

Host applications (editors, tools) own a `PartitionerRegistry` and address
everything through integer handles and item ids.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod partition;

// Main spatial3d namespace module
pub mod spatial3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade (global logging sink)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: partition_* macros are NOT re-exported here - they are internal only
    }

    // Partition sub-module
    pub mod partition {
        pub use crate::partition::*;
    }
}

// Re-export math library at crate root
pub use glam;
