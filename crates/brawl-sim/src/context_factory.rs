//! Builds the initial battle snapshot from two generated armies.

use brawl_core::config::WrathConfig;
use brawl_core::constants::DEFAULT_SPAWN_OFFSET_X;
use brawl_core::state::{
    BattleContext, BattleUnitRuntime, CombatUnitState, KnockbackState, MovementAgentState, PerSide,
    WrathMeter,
};
use brawl_procgen::army::{Army, ArmyPair};
use brawl_procgen::formation::{FormationStrategy, LineFormation};

/// Turns rolled armies into the tick-zero `BattleContext`: positions from
/// the per-side formation, unit ids assigned 1..N across Left then Right,
/// every unit alive with its cooldown ready immediately.
pub struct BattleContextFactory {
    formations: PerSide<Box<dyn FormationStrategy + Send + Sync>>,
    spawn_offset_x: f32,
}

impl BattleContextFactory {
    pub fn new(
        left_formation: Box<dyn FormationStrategy + Send + Sync>,
        right_formation: Box<dyn FormationStrategy + Send + Sync>,
        spawn_offset_x: f32,
    ) -> Self {
        Self {
            formations: PerSide::new(left_formation, right_formation),
            spawn_offset_x,
        }
    }

    /// Two facing lines at the stock spawn offset.
    pub fn with_default_layout() -> Self {
        Self::new(
            Box::new(LineFormation::default()),
            Box::new(LineFormation::default()),
            DEFAULT_SPAWN_OFFSET_X,
        )
    }

    pub fn create(&self, armies: &ArmyPair, wrath: &WrathConfig) -> BattleContext {
        let mut units = Vec::with_capacity(armies.left.units.len() + armies.right.units.len());
        let mut next_unit_id = 1;
        self.spawn_army(&armies.left, &mut next_unit_id, &mut units);
        self.spawn_army(&armies.right, &mut next_unit_id, &mut units);

        let fresh_meter = WrathMeter::new(0, wrath.max_charge);
        BattleContext::new(units, 0.0, None, PerSide::new(fresh_meter, fresh_meter))
    }

    fn spawn_army(&self, army: &Army, next_unit_id: &mut u32, out: &mut Vec<BattleUnitRuntime>) {
        let formation = self.formations.get(army.side);
        let total = army.units.len();

        for (index, rolled) in army.units.iter().enumerate() {
            let unit_id = *next_unit_id;
            *next_unit_id += 1;

            let position = formation.position(army.side, index, total, self.spawn_offset_x);
            // Catalog clamping already guarantees this, but a hand-built
            // army must not be able to panic the state constructors.
            let stats = rolled.stats.clamp_min(0);

            let movement = MovementAgentState::new(
                unit_id,
                stats.hp > 0,
                stats.speed as f32,
                position,
                None,
                Vec::new(),
                None,
            );
            let combat = CombatUnitState::new(unit_id, position, stats.hp, stats.atk, stats.atkspd, 0.0);

            out.push(BattleUnitRuntime {
                unit_id,
                side: army.side,
                shape: rolled.shape,
                size: rolled.size,
                color: rolled.color,
                movement,
                combat,
                knockback: KnockbackState::default(),
            });
        }
    }
}
