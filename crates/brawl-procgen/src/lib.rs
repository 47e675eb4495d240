//! Seeded army generation for the BRAWL simulation.
//!
//! Weighted cosmetic-trait rolls, stat derivation, and spawn formations.
//! Identical `(seed, unit count, base stats, catalogs)` always produce
//! the identical army pair.

pub mod army;
pub mod catalog;
pub mod formation;
pub mod rng;

pub use army::{Army, ArmyFactory, ArmyPair, ArmyUnit};
pub use catalog::{UnitTraitCatalog, UnitTraitWeightCatalog};
pub use formation::FormationStrategy;
pub use rng::{ChaChaRandomProvider, RandomProvider};

#[cfg(test)]
mod tests;
