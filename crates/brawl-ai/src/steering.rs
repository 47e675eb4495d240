//! Local avoidance between allies.

use std::collections::HashMap;

use glam::Vec2;

pub trait SteeringService {
    /// Unit-length separation offset pushing `self_position` away from
    /// nearby neighbors, or zero when nothing repels.
    fn separation_offset(
        &self,
        self_position: Vec2,
        neighbor_positions: &[Vec2],
        steering_radius: f32,
    ) -> Vec2;
}

/// Separation via a uniform spatial hash (cell size = steering radius):
/// only the 3×3 block of cells around self is scanned, so the cost
/// tracks local density rather than total ally count. Repulsion per
/// neighbor falls off linearly with distance.
#[derive(Debug, Default)]
pub struct SpatialHashSteering;

impl SteeringService for SpatialHashSteering {
    fn separation_offset(
        &self,
        self_position: Vec2,
        neighbor_positions: &[Vec2],
        steering_radius: f32,
    ) -> Vec2 {
        if steering_radius <= 0.0 || neighbor_positions.is_empty() {
            return Vec2::ZERO;
        }

        let cell_size = steering_radius;
        let grid = build_grid(neighbor_positions, cell_size);
        let (self_cx, self_cz) = to_cell(self_position, cell_size);
        let radius_sq = steering_radius * steering_radius;

        let mut cumulative = Vec2::ZERO;
        let mut has_repulsion = false;

        for dx in -1..=1 {
            for dz in -1..=1 {
                let Some(bucket) = grid.get(&(self_cx + dx, self_cz + dz)) else {
                    continue;
                };
                for &neighbor in bucket {
                    let dist_sq = self_position.distance_squared(neighbor);
                    // Coincident neighbors give no usable direction.
                    if dist_sq <= 0.0 || dist_sq > radius_sq {
                        continue;
                    }

                    let distance = dist_sq.sqrt();
                    let strength = (steering_radius - distance) / steering_radius;
                    let away = (self_position - neighbor) / distance;
                    cumulative += away * strength;
                    has_repulsion = true;
                }
            }
        }

        if has_repulsion {
            cumulative.normalize_or_zero()
        } else {
            Vec2::ZERO
        }
    }
}

fn build_grid(positions: &[Vec2], cell_size: f32) -> HashMap<(i32, i32), Vec<Vec2>> {
    let mut grid: HashMap<(i32, i32), Vec<Vec2>> = HashMap::new();
    for &position in positions {
        grid.entry(to_cell(position, cell_size))
            .or_default()
            .push(position);
    }
    grid
}

fn to_cell(point: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (point.x / cell_size).floor() as i32,
        (point.y / cell_size).floor() as i32,
    )
}
