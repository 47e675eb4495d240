//! Trait catalogs: stat modifiers and selection weights per cosmetic trait.
//!
//! Catalogs come from config assets, so they are validated up front:
//! every enum value must appear exactly once, weights must be
//! non-negative, and each weight section must sum to more than zero.
//! A violation is a fatal configuration error, not a runtime condition.

use std::fmt::Debug;

use thiserror::Error;

use brawl_core::enums::{UnitColor, UnitShape, UnitSize};
use brawl_core::stats::StatModifier;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{section} catalog is missing an entry for {value}")]
    MissingEntry { section: &'static str, value: String },
    #[error("{section} catalog has a duplicate entry for {value}")]
    DuplicateEntry { section: &'static str, value: String },
    #[error("{section} weight for {value} is negative ({weight})")]
    NegativeWeight {
        section: &'static str,
        value: String,
        weight: i32,
    },
    #[error("{section} weights sum to zero")]
    ZeroTotalWeight { section: &'static str },
}

/// Lookup of stat modifiers per cosmetic trait.
pub trait UnitTraitCatalog {
    fn shape_modifier(&self, shape: UnitShape) -> StatModifier;
    fn size_modifier(&self, size: UnitSize) -> StatModifier;
    fn color_modifier(&self, color: UnitColor) -> StatModifier;
}

/// Lookup of selection weights per cosmetic trait.
pub trait UnitTraitWeightCatalog {
    fn shape_weight(&self, shape: UnitShape) -> i32;
    fn size_weight(&self, size: UnitSize) -> i32;
    fn color_weight(&self, color: UnitColor) -> i32;
}

/// Validated table-backed modifier catalog.
#[derive(Debug, Clone)]
pub struct TraitCatalogTable {
    shapes: Vec<(UnitShape, StatModifier)>,
    sizes: Vec<(UnitSize, StatModifier)>,
    colors: Vec<(UnitColor, StatModifier)>,
}

impl TraitCatalogTable {
    pub fn from_entries(
        shapes: Vec<(UnitShape, StatModifier)>,
        sizes: Vec<(UnitSize, StatModifier)>,
        colors: Vec<(UnitColor, StatModifier)>,
    ) -> Result<Self, CatalogError> {
        validate_coverage("shape", &shapes, &UnitShape::ALL)?;
        validate_coverage("size", &sizes, &UnitSize::ALL)?;
        validate_coverage("color", &colors, &UnitColor::ALL)?;
        Ok(Self {
            shapes,
            sizes,
            colors,
        })
    }
}

impl UnitTraitCatalog for TraitCatalogTable {
    fn shape_modifier(&self, shape: UnitShape) -> StatModifier {
        lookup(&self.shapes, shape)
    }

    fn size_modifier(&self, size: UnitSize) -> StatModifier {
        lookup(&self.sizes, size)
    }

    fn color_modifier(&self, color: UnitColor) -> StatModifier {
        lookup(&self.colors, color)
    }
}

/// Validated table-backed weight catalog.
#[derive(Debug, Clone)]
pub struct TraitWeightTable {
    shapes: Vec<(UnitShape, i32)>,
    sizes: Vec<(UnitSize, i32)>,
    colors: Vec<(UnitColor, i32)>,
}

impl TraitWeightTable {
    pub fn from_entries(
        shapes: Vec<(UnitShape, i32)>,
        sizes: Vec<(UnitSize, i32)>,
        colors: Vec<(UnitColor, i32)>,
    ) -> Result<Self, CatalogError> {
        validate_coverage("shape", &shapes, &UnitShape::ALL)?;
        validate_coverage("size", &sizes, &UnitSize::ALL)?;
        validate_coverage("color", &colors, &UnitColor::ALL)?;
        validate_weights("shape", &shapes)?;
        validate_weights("size", &sizes)?;
        validate_weights("color", &colors)?;
        Ok(Self {
            shapes,
            sizes,
            colors,
        })
    }
}

impl UnitTraitWeightCatalog for TraitWeightTable {
    fn shape_weight(&self, shape: UnitShape) -> i32 {
        lookup(&self.shapes, shape)
    }

    fn size_weight(&self, size: UnitSize) -> i32 {
        lookup(&self.sizes, size)
    }

    fn color_weight(&self, color: UnitColor) -> i32 {
        lookup(&self.colors, color)
    }
}

fn lookup<K: PartialEq + Copy, V: Copy>(entries: &[(K, V)], key: K) -> V {
    entries
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .expect("catalog validated to cover every value")
}

fn validate_coverage<K, V>(
    section: &'static str,
    entries: &[(K, V)],
    required: &[K],
) -> Result<(), CatalogError>
where
    K: PartialEq + Copy + Debug,
{
    for value in required {
        let count = entries.iter().filter(|(k, _)| k == value).count();
        if count == 0 {
            return Err(CatalogError::MissingEntry {
                section,
                value: format!("{value:?}"),
            });
        }
        if count > 1 {
            return Err(CatalogError::DuplicateEntry {
                section,
                value: format!("{value:?}"),
            });
        }
    }
    Ok(())
}

fn validate_weights<K>(section: &'static str, entries: &[(K, i32)]) -> Result<(), CatalogError>
where
    K: Copy + Debug,
{
    let mut total = 0;
    for (key, weight) in entries {
        if *weight < 0 {
            return Err(CatalogError::NegativeWeight {
                section,
                value: format!("{key:?}"),
                weight: *weight,
            });
        }
        total += weight;
    }
    if total <= 0 {
        return Err(CatalogError::ZeroTotalWeight { section });
    }
    Ok(())
}

/// Stock modifier catalog.
pub fn default_trait_catalog() -> TraitCatalogTable {
    TraitCatalogTable::from_entries(
        vec![
            (UnitShape::Cube, StatModifier::new(100, 10, 0, 0)),
            (UnitShape::Sphere, StatModifier::new(50, 20, 0, 0)),
        ],
        vec![
            (UnitSize::Big, StatModifier::new(50, 0, 0, 0)),
            (UnitSize::Small, StatModifier::new(-50, 0, 0, 0)),
        ],
        vec![
            (UnitColor::Blue, StatModifier::new(0, -15, 10, 4)),
            (UnitColor::Green, StatModifier::new(-100, 20, -5, 0)),
            (UnitColor::Red, StatModifier::new(200, 40, -9, 0)),
        ],
    )
    .expect("stock catalog covers every trait")
}

/// Stock weight catalog.
pub fn default_weight_catalog() -> TraitWeightTable {
    TraitWeightTable::from_entries(
        vec![(UnitShape::Cube, 50), (UnitShape::Sphere, 50)],
        vec![(UnitSize::Small, 60), (UnitSize::Big, 40)],
        vec![
            (UnitColor::Red, 40),
            (UnitColor::Green, 35),
            (UnitColor::Blue, 25),
        ],
    )
    .expect("stock weights cover every trait")
}
