//! Movement AI for the BRAWL simulation.
//!
//! Targeting, pathfinding, steering separation, and attack-slot
//! allocation are small strategy traits so a real pathfinder or a
//! smarter selector can replace the defaults without touching the
//! orchestrator. `MovementService` combines the four into the per-unit
//! per-tick movement decision.

pub mod movement;
pub mod pathfinding;
pub mod slots;
pub mod steering;
pub mod targeting;

pub use movement::{MovementService, MovementTickContext};
pub use pathfinding::{DirectPathfinder, Pathfinder};
pub use slots::{RingSlotAllocator, SlotAllocator};
pub use steering::{SpatialHashSteering, SteeringService};
pub use targeting::{NearestTargetSelector, TargetSelector, TargetableUnit};
