/// PartitionerRegistry — handle-addressed arena of independent stores.
///
/// Hosts that keep several spatial collections alive at once (one per
/// open document, say) own a registry and address each store through an
/// opaque integer handle. The registry is an ordinary caller-owned
/// value, not process-global state; drop it and every store goes with it.
///
/// Handles are monotonically increasing and never reused within a
/// registry's lifetime, so a stale handle can never silently alias a
/// newer store - it fails with `Error::UnknownPartitioner` instead.

use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::{partition_error, partition_info};
use super::store::SpatialPartitioner;

/// Log source tag for registry diagnostics
const SOURCE: &str = "spatial3d::Registry";

/// A collection of independent SpatialPartitioners addressed by handle.
///
/// Stores share no state with each other; operations on one handle never
/// affect another. The registry itself has no internal locking -
/// concurrent access must be serialized by the caller.
pub struct PartitionerRegistry {
    /// Live stores by handle
    partitioners: FxHashMap<i32, SpatialPartitioner>,
    /// Next handle to hand out; never decremented
    next_handle: i32,
}

impl PartitionerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            partitioners: FxHashMap::default(),
            next_handle: 0,
        }
    }

    // ===== STORE LIFECYCLE =====

    /// Allocate a fresh empty partitioner and return its handle.
    ///
    /// Handles increase monotonically and are never reused, even after
    /// `release`.
    pub fn create(&mut self) -> i32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.partitioners.insert(handle, SpatialPartitioner::new());
        partition_info!(SOURCE, "partitioner {} created", handle);
        handle
    }

    /// Destroy a partitioner; its items and id mapping are dropped together.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownPartitioner` if the handle is not live.
    pub fn release(&mut self, handle: i32) -> Result<()> {
        match self.partitioners.remove(&handle) {
            Some(_) => {
                partition_info!(SOURCE, "partitioner {} released", handle);
                Ok(())
            }
            None => Err(Self::unknown(handle)),
        }
    }

    /// Borrow a partitioner by handle.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownPartitioner` if the handle is not live.
    pub fn get(&self, handle: i32) -> Result<&SpatialPartitioner> {
        self.partitioners
            .get(&handle)
            .ok_or_else(|| Self::unknown(handle))
    }

    /// Mutably borrow a partitioner by handle.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownPartitioner` if the handle is not live.
    pub fn get_mut(&mut self, handle: i32) -> Result<&mut SpatialPartitioner> {
        self.partitioners
            .get_mut(&handle)
            .ok_or_else(|| Self::unknown(handle))
    }

    /// Number of live partitioners
    pub fn len(&self) -> usize {
        self.partitioners.len()
    }

    /// Whether the registry holds no partitioners
    pub fn is_empty(&self) -> bool {
        self.partitioners.is_empty()
    }

    // ===== ADDRESSED STORE OPERATIONS =====
    //
    // The flat (handle, ...) surface a plugin boundary exposes. Each call
    // resolves the handle strictly - an invalid handle is an error, never
    // a silently materialized empty store.

    /// Register an item in the addressed partitioner
    pub fn add_item(
        &mut self,
        handle: i32,
        id: i32,
        center: Vec3,
        extents: Vec3,
    ) -> Result<()> {
        self.get_mut(handle)?.add_item(id, center, extents)
    }

    /// Replace an item's bounds in the addressed partitioner
    pub fn update_item(
        &mut self,
        handle: i32,
        id: i32,
        center: Vec3,
        extents: Vec3,
    ) -> Result<()> {
        self.get_mut(handle)?.update_item(id, center, extents)
    }

    /// Remove an item from the addressed partitioner
    pub fn remove_item(&mut self, handle: i32, id: i32) -> Result<()> {
        self.get_mut(handle)?.remove_item(id)
    }

    /// Test item membership in the addressed partitioner.
    ///
    /// `Ok(false)` is the normal absent outcome; only a bad handle is an
    /// error.
    pub fn has_item(&self, handle: i32, id: i32) -> Result<bool> {
        Ok(self.get(handle)?.has_item(id))
    }

    /// Intersection query against the addressed partitioner
    pub fn intersected_by(
        &self,
        handle: i32,
        center: Vec3,
        extents: Vec3,
        results: &mut [i32],
    ) -> Result<usize> {
        self.get(handle)?.intersected_by(center, extents, results)
    }

    /// Containment query against the addressed partitioner
    pub fn contained_by(
        &self,
        handle: i32,
        center: Vec3,
        extents: Vec3,
        results: &mut [i32],
    ) -> Result<usize> {
        self.get(handle)?.contained_by(center, extents, results)
    }

    // ===== INTERNAL =====

    /// Build (and log) the invalid-handle error
    fn unknown(handle: i32) -> Error {
        partition_error!(SOURCE, "unknown partitioner handle {}", handle);
        Error::UnknownPartitioner(handle)
    }
}

impl Default for PartitionerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
