//! Simulation engine for BRAWL.
//!
//! Resolves melee combat, knockback, and the wrath ability over immutable
//! per-tick snapshots, and drives the battle through its phase machine.
//! Completely headless, enabling deterministic testing.

pub mod context_factory;
pub mod loop_service;
pub mod state_machine;
pub mod step;
pub mod systems;

pub use brawl_core as core;
pub use context_factory::BattleContextFactory;
pub use loop_service::BattleLoopService;
pub use state_machine::BattleStateMachine;
pub use step::{AutoBattleStepProcessor, BattleStepInput, BattleStepProcessor};
