use super::*;
use glam::Vec3;

fn extents() -> Vec3 {
    Vec3::splat(0.5)
}

// ============================================================================
// Handle lifecycle tests
// ============================================================================

#[test]
fn test_new_registry_is_empty() {
    let registry = PartitionerRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_create_returns_monotonic_handles() {
    let mut registry = PartitionerRegistry::new();
    assert_eq!(registry.create(), 0);
    assert_eq!(registry.create(), 1);
    assert_eq!(registry.create(), 2);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_handles_are_never_reused_after_release() {
    let mut registry = PartitionerRegistry::new();
    let a = registry.create(); // 0
    let b = registry.create(); // 1
    registry.release(a).unwrap();
    registry.release(b).unwrap();

    // Fresh handles continue the sequence instead of recycling 0/1
    assert_eq!(registry.create(), 2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_release_destroys_the_store() {
    let mut registry = PartitionerRegistry::new();
    let handle = registry.create();
    registry.add_item(handle, 1, Vec3::ZERO, extents()).unwrap();

    registry.release(handle).unwrap();

    assert!(registry.is_empty());
    // The handle is dead for every operation afterwards
    assert_eq!(
        registry.has_item(handle, 1),
        Err(Error::UnknownPartitioner(handle))
    );
}

#[test]
fn test_double_release_is_rejected() {
    let mut registry = PartitionerRegistry::new();
    let handle = registry.create();
    registry.release(handle).unwrap();

    assert_eq!(
        registry.release(handle),
        Err(Error::UnknownPartitioner(handle))
    );
}

// ============================================================================
// Strict handle validation tests
// ============================================================================

#[test]
fn test_unknown_handle_is_an_error_for_every_operation() {
    let mut registry = PartitionerRegistry::new();
    let bogus = 99;
    let mut results = [0i32; 4];

    assert!(registry.get(bogus).is_err());
    assert!(registry.get_mut(bogus).is_err());
    assert_eq!(
        registry.add_item(bogus, 1, Vec3::ZERO, extents()),
        Err(Error::UnknownPartitioner(bogus))
    );
    assert_eq!(
        registry.update_item(bogus, 1, Vec3::ZERO, extents()),
        Err(Error::UnknownPartitioner(bogus))
    );
    assert_eq!(
        registry.remove_item(bogus, 1),
        Err(Error::UnknownPartitioner(bogus))
    );
    assert_eq!(
        registry.has_item(bogus, 1),
        Err(Error::UnknownPartitioner(bogus))
    );
    assert_eq!(
        registry.intersected_by(bogus, Vec3::ZERO, extents(), &mut results),
        Err(Error::UnknownPartitioner(bogus))
    );
    assert_eq!(
        registry.contained_by(bogus, Vec3::ZERO, extents(), &mut results),
        Err(Error::UnknownPartitioner(bogus))
    );

    // And no store was silently materialized along the way
    assert!(registry.is_empty());
}

// ============================================================================
// Addressed operation tests
// ============================================================================

#[test]
fn test_addressed_operations_round_trip() {
    let mut registry = PartitionerRegistry::new();
    let handle = registry.create();

    registry.add_item(handle, 7, Vec3::ZERO, extents()).unwrap();
    assert_eq!(registry.has_item(handle, 7), Ok(true));
    assert_eq!(registry.has_item(handle, 8), Ok(false));

    let mut results = [0i32; 4];
    let count = registry
        .intersected_by(handle, Vec3::ZERO, extents(), &mut results)
        .unwrap();
    assert_eq!(results[..count], [7]);

    registry
        .update_item(handle, 7, Vec3::splat(30.0), extents())
        .unwrap();
    let count = registry
        .intersected_by(handle, Vec3::ZERO, extents(), &mut results)
        .unwrap();
    assert_eq!(count, 0);

    registry.remove_item(handle, 7).unwrap();
    assert_eq!(registry.has_item(handle, 7), Ok(false));
}

#[test]
fn test_item_errors_pass_through_the_registry() {
    let mut registry = PartitionerRegistry::new();
    let handle = registry.create();
    registry.add_item(handle, 1, Vec3::ZERO, extents()).unwrap();

    assert_eq!(
        registry.add_item(handle, 1, Vec3::ZERO, extents()),
        Err(Error::DuplicateItem(1))
    );
    assert_eq!(
        registry.remove_item(handle, 2),
        Err(Error::ItemNotFound(2))
    );
}

#[test]
fn test_stores_are_independent() {
    let mut registry = PartitionerRegistry::new();
    let a = registry.create();
    let b = registry.create();

    // Same item id in both stores, different bounds
    registry.add_item(a, 1, Vec3::ZERO, extents()).unwrap();
    registry
        .add_item(b, 1, Vec3::splat(10.0), extents())
        .unwrap();

    // Mutating one store leaves the other untouched
    registry.remove_item(a, 1).unwrap();
    assert_eq!(registry.has_item(a, 1), Ok(false));
    assert_eq!(registry.has_item(b, 1), Ok(true));

    let mut results = [0i32; 4];
    let count = registry
        .intersected_by(b, Vec3::splat(10.0), extents(), &mut results)
        .unwrap();
    assert_eq!(results[..count], [1]);
}
