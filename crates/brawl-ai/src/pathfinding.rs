//! Path construction.

use glam::Vec2;

pub trait Pathfinder {
    /// Build an ordered waypoint sequence from `from` to `to`.
    fn build_path(&self, from: Vec2, to: Vec2) -> Vec<Vec2>;
}

/// Straight-line pathfinder: the path is the destination itself. Exists
/// so a navmesh or grid pathfinder can be substituted without touching
/// `MovementService`.
#[derive(Debug, Default)]
pub struct DirectPathfinder;

impl Pathfinder for DirectPathfinder {
    fn build_path(&self, _from: Vec2, to: Vec2) -> Vec<Vec2> {
        vec![to]
    }
}
