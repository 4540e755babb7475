//! Demo host for the spatial partitioner
//!
//! Drives the public API the way a 3-D editor would: one registry owned
//! by the application, a scene store populated with object bounds, and
//! region queries against a moving selection box. All output goes through
//! the crate's logging sink.

use glam::Vec3;
use spatial_partitioner::spatial3d::log::LogSeverity;
use spatial_partitioner::spatial3d::partition::PartitionerRegistry;
use spatial_partitioner::spatial3d::{Engine, Result};

const SOURCE: &str = "spatial3d::Demo";

fn info(message: String) {
    Engine::log(LogSeverity::Info, SOURCE, message);
}

fn main() -> Result<()> {
    let mut registry = PartitionerRegistry::new();
    let scene = registry.create();

    // Scatter a 5x5 floor of unit crates plus a few tall props
    let mut id = 0;
    for i in 0..5 {
        for j in 0..5 {
            let center = Vec3::new(i as f32 * 2.0, 0.0, j as f32 * 2.0);
            registry.add_item(scene, id, center, Vec3::splat(0.5))?;
            id += 1;
        }
    }
    for k in 0..3 {
        let center = Vec3::new(k as f32 * 4.0, 2.0, 4.0);
        registry.add_item(scene, id, center, Vec3::new(0.5, 2.0, 0.5))?;
        id += 1;
    }
    info(format!("scene populated with {} items", registry.get(scene)?.len()));

    // Sweep a selection box across the floor and report what it touches
    let mut selection = [0i32; 16];
    for step in 0..4 {
        let center = Vec3::new(step as f32 * 2.5, 0.5, 4.0);
        let touched = registry.intersected_by(scene, center, Vec3::splat(1.5), &mut selection)?;
        let inside = registry.contained_by(scene, center, Vec3::splat(1.5), &mut selection)?;
        info(format!(
            "selection at x={:.1}: {} intersected, {} fully inside",
            center.x, touched, inside
        ));
    }

    // Move a prop and show the queries tracking it
    registry.update_item(scene, 25, Vec3::new(20.0, 2.0, 4.0), Vec3::new(0.5, 2.0, 0.5))?;
    let count = registry.intersected_by(
        scene,
        Vec3::new(20.0, 2.0, 4.0),
        Vec3::splat(1.0),
        &mut selection,
    )?;
    info(format!("after moving prop 25: {} item(s) at its new spot", count));

    // Delete the floor row nearest the camera
    for id in 0..5 {
        registry.remove_item(scene, id)?;
    }
    info(format!(
        "removed front row, {} items remain",
        registry.get(scene)?.len()
    ));

    registry.release(scene)?;
    Ok(())
}
