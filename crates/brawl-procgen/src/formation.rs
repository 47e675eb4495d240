//! Spawn formations: pure placement rules from army index to arena point.
//!
//! Every strategy guarantees unique positions for all indices in
//! `[0, total)`. Left spawns at negative X facing right, Right mirrored.

use glam::Vec2;

use brawl_core::constants::{
    GRID_COLUMNS, GRID_COLUMN_SPACING, GRID_ROW_SPACING, LINE_SPACING, WEDGE_DEPTH_SPACING,
    WEDGE_WIDTH_SPACING,
};
use brawl_core::enums::{FormationKind, Side};

pub trait FormationStrategy {
    fn position(&self, side: Side, index: usize, total_units: usize, spawn_offset_x: f32) -> Vec2;
}

fn front_x(side: Side, spawn_offset_x: f32) -> f32 {
    match side {
        Side::Left => -spawn_offset_x,
        Side::Right => spawn_offset_x,
    }
}

/// Depth increases away from the enemy.
fn depth_sign(side: Side) -> f32 {
    match side {
        Side::Left => -1.0,
        Side::Right => 1.0,
    }
}

/// Single row centered on Z = 0.
#[derive(Debug, Clone)]
pub struct LineFormation {
    pub spacing: f32,
}

impl Default for LineFormation {
    fn default() -> Self {
        Self {
            spacing: LINE_SPACING,
        }
    }
}

impl FormationStrategy for LineFormation {
    fn position(&self, side: Side, index: usize, total_units: usize, spawn_offset_x: f32) -> Vec2 {
        let center_offset = (total_units.saturating_sub(1)) as f32 * 0.5;
        let z = (index as f32 - center_offset) * self.spacing;
        Vec2::new(front_x(side, spawn_offset_x), z)
    }
}

/// Rows of `columns` units; row 0 is nearest the enemy, later rows
/// extend away from it.
#[derive(Debug, Clone)]
pub struct GridFormation {
    pub columns: usize,
    pub row_spacing: f32,
    pub column_spacing: f32,
    /// Shift odd rows by half a column spacing in Z.
    pub staggered: bool,
}

impl GridFormation {
    /// # Panics
    /// Panics if `columns` is zero.
    pub fn new(columns: usize, row_spacing: f32, column_spacing: f32, staggered: bool) -> Self {
        assert!(columns >= 1, "columns must be >= 1");
        Self {
            columns,
            row_spacing,
            column_spacing,
            staggered,
        }
    }

    pub fn standard() -> Self {
        Self::new(GRID_COLUMNS, GRID_ROW_SPACING, GRID_COLUMN_SPACING, false)
    }

    pub fn staggered() -> Self {
        Self::new(GRID_COLUMNS, GRID_ROW_SPACING, GRID_COLUMN_SPACING, true)
    }
}

impl FormationStrategy for GridFormation {
    fn position(&self, side: Side, index: usize, total_units: usize, spawn_offset_x: f32) -> Vec2 {
        let row = index / self.columns;
        let col = index % self.columns;
        let total_rows = total_units.div_ceil(self.columns);
        let cols_in_this_row = if row + 1 < total_rows {
            self.columns
        } else {
            total_units - row * self.columns
        };

        let col_center = (cols_in_this_row.saturating_sub(1)) as f32 * 0.5;
        let stagger = if self.staggered && row % 2 == 1 {
            self.column_spacing * 0.5
        } else {
            0.0
        };
        let z = (col as f32 - col_center) * self.column_spacing + stagger;

        let row_center = (total_rows.saturating_sub(1)) as f32 * 0.5;
        let x = front_x(side, spawn_offset_x)
            + (row as f32 - row_center) * self.row_spacing * depth_sign(side);

        Vec2::new(x, z)
    }
}

/// Index 0 is the tip; later units alternate left/right of it, each
/// pair one row deeper.
#[derive(Debug, Clone)]
pub struct WedgeFormation {
    pub depth_spacing: f32,
    pub width_spacing: f32,
}

impl Default for WedgeFormation {
    fn default() -> Self {
        Self {
            depth_spacing: WEDGE_DEPTH_SPACING,
            width_spacing: WEDGE_WIDTH_SPACING,
        }
    }
}

impl FormationStrategy for WedgeFormation {
    fn position(&self, side: Side, index: usize, _total_units: usize, spawn_offset_x: f32) -> Vec2 {
        let base_x = front_x(side, spawn_offset_x);
        if index == 0 {
            return Vec2::new(base_x, 0.0);
        }

        let row_from_tip = (index + 1) / 2;
        let z_sign = if index % 2 == 1 { -1.0 } else { 1.0 };
        let x = base_x + row_from_tip as f32 * self.depth_spacing * depth_sign(side);
        let z = row_from_tip as f32 * self.width_spacing * z_sign;
        Vec2::new(x, z)
    }
}

/// Build a strategy by kind with stock spacing.
pub fn create_strategy(kind: FormationKind) -> Box<dyn FormationStrategy + Send + Sync> {
    match kind {
        FormationKind::Line => Box::new(LineFormation::default()),
        FormationKind::Grid => Box::new(GridFormation::standard()),
        FormationKind::Wedge => Box::new(WedgeFormation::default()),
        FormationKind::Staggered => Box::new(GridFormation::staggered()),
    }
}

/// Seeded pick among the non-line formations, for variety between battles.
pub fn pick_random(seed: u64) -> Box<dyn FormationStrategy + Send + Sync> {
    const NON_LINE: [FormationKind; 3] = [
        FormationKind::Grid,
        FormationKind::Wedge,
        FormationKind::Staggered,
    ];
    create_strategy(NON_LINE[(seed % NON_LINE.len() as u64) as usize])
}
