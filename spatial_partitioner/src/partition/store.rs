/// SpatialPartitioner — dense bounding-volume store with bounded queries.
///
/// Boxes live in a flat array that queries scan in storage order; a
/// parallel id array and an id → slot map give O(1) membership, update
/// and removal. Removal is swap-with-last, so storage order (and query
/// result order) is not stable across mutations.
///
/// No internal locking: concurrent mutation of one partitioner must be
/// serialized by the caller. Distinct partitioners share no state and
/// may be driven from different threads independently.

use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use super::aabb::Aabb;

/// A dense, order-irrelevant collection of AABBs keyed by item id.
///
/// All four CRUD operations are O(1) (amortized for add); the two
/// spatial queries are a straight linear scan with an early stop once
/// the caller's result buffer is full.
pub struct SpatialPartitioner {
    /// Dense box array, scanned in storage order by queries
    boxes: Vec<Aabb>,
    /// Item ids in lockstep with `boxes` (same slot, same item)
    ids: Vec<i32>,
    /// id → current slot index in the dense arrays
    id_to_slot: FxHashMap<i32, usize>,
}

impl SpatialPartitioner {
    /// Create a new empty partitioner
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            ids: Vec::new(),
            id_to_slot: FxHashMap::default(),
        }
    }

    /// Create an empty partitioner with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
            ids: Vec::with_capacity(capacity),
            id_to_slot: FxHashMap::default(),
        }
    }

    // ===== CRUD =====

    /// Register an item with the given bounds.
    ///
    /// Appends to the dense array and records the id → slot mapping.
    ///
    /// # Errors
    ///
    /// - `Error::DuplicateItem` if `id` is already registered
    /// - `Error::InvalidExtents` if any extent component is negative
    pub fn add_item(&mut self, id: i32, center: Vec3, extents: Vec3) -> Result<()> {
        if self.id_to_slot.contains_key(&id) {
            return Err(Error::DuplicateItem(id));
        }
        let aabb = Aabb::from_center_extents(center, extents)?;
        self.id_to_slot.insert(id, self.boxes.len());
        self.boxes.push(aabb);
        self.ids.push(id);
        Ok(())
    }

    /// Replace an item's bounds wholesale; the id stays fixed.
    ///
    /// # Errors
    ///
    /// - `Error::ItemNotFound` if `id` is not registered
    /// - `Error::InvalidExtents` if any extent component is negative
    pub fn update_item(&mut self, id: i32, center: Vec3, extents: Vec3) -> Result<()> {
        let slot = *self.id_to_slot.get(&id).ok_or(Error::ItemNotFound(id))?;
        self.boxes[slot] = Aabb::from_center_extents(center, extents)?;
        Ok(())
    }

    /// Remove an item, keeping the array dense.
    ///
    /// Swap-with-last: the vacated slot is filled by the tail element,
    /// whose mapping entry is re-pointed at its new slot (its id comes
    /// from the parallel id array). The zero/one-item cases go through
    /// the same path and leave both arrays and the map empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::ItemNotFound` if `id` is not registered.
    pub fn remove_item(&mut self, id: i32) -> Result<()> {
        let slot = self.id_to_slot.remove(&id).ok_or(Error::ItemNotFound(id))?;
        self.boxes.swap_remove(slot);
        self.ids.swap_remove(slot);
        if slot < self.ids.len() {
            // A tail element moved into the vacated slot
            self.id_to_slot.insert(self.ids[slot], slot);
        }
        debug_assert_eq!(self.boxes.len(), self.ids.len());
        Ok(())
    }

    /// Test whether an item with this id is registered. O(1), no side effects.
    pub fn has_item(&self, id: i32) -> bool {
        self.id_to_slot.contains_key(&id)
    }

    /// Current bounds of an item, if registered
    pub fn item(&self, id: i32) -> Option<&Aabb> {
        self.id_to_slot.get(&id).map(|&slot| &self.boxes[slot])
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the partitioner holds no items
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Drop all items and mapping entries together
    pub fn clear(&mut self) {
        self.boxes.clear();
        self.ids.clear();
        self.id_to_slot.clear();
    }

    // ===== QUERIES =====

    /// Collect ids of all items whose bounds intersect the query box.
    ///
    /// The query box is built from `center`/`extents` like any stored box
    /// but never enters the store. Matching ids are written into `results`
    /// in current storage order; the scan stops as soon as the buffer is
    /// full, silently truncating any further matches. Returns the number
    /// of ids written. A zero-length buffer returns 0 immediately.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidExtents` if any extent component is negative.
    pub fn intersected_by(
        &self,
        center: Vec3,
        extents: Vec3,
        results: &mut [i32],
    ) -> Result<usize> {
        let query = Aabb::from_center_extents(center, extents)?;
        Ok(self.query_into(&query, Aabb::intersects, results))
    }

    /// Reference-path variant of `intersected_by` using the scalar
    /// per-axis predicate. Results are identical to the vectorized path;
    /// kept as a cross-check for it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidExtents` if any extent component is negative.
    pub fn intersected_by_scalar(
        &self,
        center: Vec3,
        extents: Vec3,
        results: &mut [i32],
    ) -> Result<usize> {
        let query = Aabb::from_center_extents(center, extents)?;
        Ok(self.query_into(&query, Aabb::intersects_scalar, results))
    }

    /// Collect ids of all items whose bounds lie fully inside the query box.
    ///
    /// Same buffer contract as `intersected_by`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidExtents` if any extent component is negative.
    pub fn contained_by(
        &self,
        center: Vec3,
        extents: Vec3,
        results: &mut [i32],
    ) -> Result<usize> {
        let query = Aabb::from_center_extents(center, extents)?;
        Ok(self.query_into(&query, Aabb::contains, results))
    }

    /// Linear scan applying `predicate(query, stored)` to every slot,
    /// writing matching ids until the buffer is full.
    ///
    /// Never allocates and never writes past `results.len()`.
    fn query_into(
        &self,
        query: &Aabb,
        predicate: fn(&Aabb, &Aabb) -> bool,
        results: &mut [i32],
    ) -> usize {
        if results.is_empty() {
            return 0;
        }
        let mut count = 0;
        for (slot, aabb) in self.boxes.iter().enumerate() {
            if predicate(query, aabb) {
                results[count] = self.ids[slot];
                count += 1;
                if count == results.len() {
                    break;
                }
            }
        }
        count
    }
}

impl Default for SpatialPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
