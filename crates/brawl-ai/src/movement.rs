//! Per-unit movement decision for one tick.

use glam::Vec2;

use brawl_core::config::MovementConfig;
use brawl_core::state::MovementAgentState;
use brawl_core::types::move_towards;

use crate::pathfinding::Pathfinder;
use crate::slots::SlotAllocator;
use crate::steering::SteeringService;
use crate::targeting::{TargetSelector, TargetableUnit};

/// Everything one unit's movement tick needs to see of the battle.
pub struct MovementTickContext<'a> {
    pub delta_time: f32,
    pub allies: &'a [MovementAgentState],
    pub enemies: &'a [TargetableUnit],
    pub config: MovementConfig,
}

/// Combines the four movement strategies into a single per-tick state
/// transition. Holds no per-unit state of its own.
pub struct MovementService {
    target_selector: Box<dyn TargetSelector + Send + Sync>,
    pathfinder: Box<dyn Pathfinder + Send + Sync>,
    steering: Box<dyn SteeringService + Send + Sync>,
    slot_allocator: Box<dyn SlotAllocator + Send + Sync>,
}

impl MovementService {
    pub fn new(
        target_selector: Box<dyn TargetSelector + Send + Sync>,
        pathfinder: Box<dyn Pathfinder + Send + Sync>,
        steering: Box<dyn SteeringService + Send + Sync>,
        slot_allocator: Box<dyn SlotAllocator + Send + Sync>,
    ) -> Self {
        Self {
            target_selector,
            pathfinder,
            steering,
            slot_allocator,
        }
    }

    /// Default strategy wiring: sticky nearest targeting, straight-line
    /// paths, spatial-hash separation, ring slots.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(crate::targeting::NearestTargetSelector),
            Box::new(crate::pathfinding::DirectPathfinder),
            Box::new(crate::steering::SpatialHashSteering),
            Box::new(crate::slots::RingSlotAllocator),
        )
    }

    /// Advance one unit's movement by one tick, returning its new state.
    pub fn tick(&self, state: &MovementAgentState, ctx: &MovementTickContext<'_>) -> MovementAgentState {
        if !state.is_alive || state.speed <= 0.0 {
            return state.clone();
        }

        let self_view = TargetableUnit::new(state.unit_id, state.position, state.is_alive);
        let target_id =
            self.target_selector
                .select_target(&self_view, ctx.enemies, state.target_id);

        let Some(target_id) = target_id else {
            return cleared(state);
        };
        let Some(target) = alive_enemy_by_id(ctx.enemies, target_id) else {
            return cleared(state);
        };

        let attacker_ids = attacker_ids_for(ctx.allies, target_id, state.unit_id);
        let slot_destination = self.slot_allocator.slot_position(
            target.position,
            state.unit_id,
            &attacker_ids,
            ctx.config.slot_radius,
        );

        // In melee range: hold position, attack resolution takes over.
        if state.position.distance(target.position) <= ctx.config.melee_range {
            return MovementAgentState::new(
                state.unit_id,
                state.is_alive,
                state.speed,
                state.position,
                Some(target_id),
                state.current_path.clone(),
                state.last_path_target_position,
            );
        }

        let mut path = state.current_path.clone();
        let mut last_path_target = state.last_path_target_position;
        if should_repath(
            &path,
            last_path_target,
            target.position,
            ctx.config.repath_distance_threshold,
        ) {
            path = self.pathfinder.build_path(state.position, slot_destination);
            last_path_target = Some(target.position);
        }

        let waypoint = path.first().copied().unwrap_or(slot_destination);
        let neighbors = neighbor_positions(ctx.allies, state.unit_id);
        let separation =
            self.steering
                .separation_offset(state.position, &neighbors, ctx.config.steering_radius);
        let move_target = waypoint + separation;
        let position = move_towards(state.position, move_target, state.speed * ctx.delta_time);

        MovementAgentState::new(
            state.unit_id,
            state.is_alive,
            state.speed,
            position,
            Some(target_id),
            path,
            last_path_target,
        )
    }
}

/// No living target: stop where we are and drop path state.
fn cleared(state: &MovementAgentState) -> MovementAgentState {
    MovementAgentState::new(
        state.unit_id,
        state.is_alive,
        state.speed,
        state.position,
        None,
        Vec::new(),
        None,
    )
}

/// Repath only when there is no usable path, or the target has drifted
/// beyond the threshold since the path was built. Avoids per-tick churn.
fn should_repath(
    path: &[Vec2],
    last_path_target: Option<Vec2>,
    target_position: Vec2,
    repath_threshold: f32,
) -> bool {
    if path.is_empty() {
        return true;
    }
    let Some(last) = last_path_target else {
        return true;
    };
    last.distance_squared(target_position) > repath_threshold * repath_threshold
}

fn alive_enemy_by_id(enemies: &[TargetableUnit], target_id: u32) -> Option<&TargetableUnit> {
    enemies
        .iter()
        .find(|e| e.unit_id == target_id && e.is_alive)
}

fn attacker_ids_for(allies: &[MovementAgentState], target_id: u32, self_id: u32) -> Vec<u32> {
    let mut ids: Vec<u32> = allies
        .iter()
        .filter(|a| a.is_alive && a.target_id == Some(target_id))
        .map(|a| a.unit_id)
        .collect();
    if !ids.contains(&self_id) {
        ids.push(self_id);
    }
    ids
}

fn neighbor_positions(allies: &[MovementAgentState], self_id: u32) -> Vec<Vec2> {
    allies
        .iter()
        .filter(|a| a.is_alive && a.unit_id != self_id)
        .map(|a| a.position)
        .collect()
}
