//! Error types for the spatial partitioner
//!
//! This module defines the error types used throughout the crate,
//! covering item management, registry handles, and AABB validation.
//! Nothing here is fatal to the process; every error is local and
//! recoverable by the caller.

use std::fmt;

/// Result type for spatial partitioner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Spatial partitioner errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An item with this id is already registered in the partitioner
    DuplicateItem(i32),

    /// No item with this id exists in the partitioner
    ItemNotFound(i32),

    /// The handle does not address a live partitioner (never allocated,
    /// or already released)
    UnknownPartitioner(i32),

    /// Malformed AABB input (negative extents, or min corner past max)
    InvalidExtents(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateItem(id) => write!(f, "Duplicate item id: {}", id),
            Error::ItemNotFound(id) => write!(f, "Item not found: {}", id),
            Error::UnknownPartitioner(handle) => {
                write!(f, "Unknown partitioner handle: {}", handle)
            }
            Error::InvalidExtents(msg) => write!(f, "Invalid extents: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
