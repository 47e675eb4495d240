//! Army generation: weighted trait rolls and stat derivation.

use brawl_core::constants::DEFAULT_BASE_STATS;
use brawl_core::enums::{Side, UnitColor, UnitShape, UnitSize};
use brawl_core::stats::{StatBlock, StatModifier};

use crate::catalog::{UnitTraitCatalog, UnitTraitWeightCatalog};
use crate::rng::RandomProvider;

/// One rolled unit: cosmetics plus final stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmyUnit {
    pub shape: UnitShape,
    pub size: UnitSize,
    pub color: UnitColor,
    pub stats: StatBlock,
}

/// A generated army for one side.
#[derive(Debug, Clone)]
pub struct Army {
    pub side: Side,
    pub units: Vec<ArmyUnit>,
}

/// Both generated armies.
#[derive(Debug, Clone)]
pub struct ArmyPair {
    pub left: Army,
    pub right: Army,
}

/// Final stats = base + shape/size/color modifiers, clamped to >= 0.
pub fn compute_stats(
    catalog: &dyn UnitTraitCatalog,
    base: StatBlock,
    shape: UnitShape,
    size: UnitSize,
    color: UnitColor,
) -> StatBlock {
    let modifier = StatModifier::combine([
        catalog.shape_modifier(shape),
        catalog.size_modifier(size),
        catalog.color_modifier(color),
    ]);
    (base + modifier).clamp_min(0)
}

/// Rolls armies from validated catalogs. Each unit rolls shape, then
/// size, then color; the fixed roll order is what makes identical seeds
/// reproduce identical armies.
pub struct ArmyFactory<'a> {
    traits: &'a dyn UnitTraitCatalog,
    weights: &'a dyn UnitTraitWeightCatalog,
}

impl<'a> ArmyFactory<'a> {
    pub fn new(traits: &'a dyn UnitTraitCatalog, weights: &'a dyn UnitTraitWeightCatalog) -> Self {
        Self { traits, weights }
    }

    pub fn create(
        &self,
        side: Side,
        unit_count: usize,
        base_stats: StatBlock,
        provider: &mut dyn RandomProvider,
    ) -> Army {
        let mut units = Vec::with_capacity(unit_count);
        for _ in 0..unit_count {
            let shape = pick_weighted(&UnitShape::ALL, |s| self.weights.shape_weight(s), provider);
            let size = pick_weighted(&UnitSize::ALL, |s| self.weights.size_weight(s), provider);
            let color = pick_weighted(&UnitColor::ALL, |c| self.weights.color_weight(c), provider);
            let stats = compute_stats(self.traits, base_stats, shape, size, color);
            units.push(ArmyUnit {
                shape,
                size,
                color,
                stats,
            });
        }
        Army { side, units }
    }

    /// Roll both armies from one seed: the provider is reset once, then
    /// Left is rolled before Right.
    pub fn randomize_both(
        &self,
        seed: u64,
        units_per_army: usize,
        provider: &mut dyn RandomProvider,
    ) -> ArmyPair {
        provider.reset(seed);
        let left = self.create(Side::Left, units_per_army, DEFAULT_BASE_STATS, provider);
        let right = self.create(Side::Right, units_per_army, DEFAULT_BASE_STATS, provider);
        ArmyPair { left, right }
    }
}

/// Cumulative-weight selection: roll in `[0, total)` and walk the
/// cumulative sums. Weight validity is guaranteed by catalog validation;
/// the totals are asserted again here as a precondition.
fn pick_weighted<T: Copy>(
    values: &[T],
    weight_of: impl Fn(T) -> i32,
    provider: &mut dyn RandomProvider,
) -> T {
    let mut total = 0;
    for &value in values {
        let weight = weight_of(value);
        assert!(weight >= 0, "trait weight must be >= 0");
        total += weight;
    }
    assert!(total > 0, "trait weight total must be > 0");

    let roll = provider.next_int(0, total);
    let mut cumulative = 0;
    for &value in values {
        cumulative += weight_of(value);
        if roll < cumulative {
            return value;
        }
    }
    values[values.len() - 1]
}
