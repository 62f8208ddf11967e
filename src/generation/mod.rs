//! # Generation Module
//!
//! Procedural item generation: stats, value, footprint, naming and container contents.
//!
//! This module provides the pipeline that turns an [`ItemRequest`] into a
//! [`GeneratedItem`]. Every lookup goes through [`GenerationTables`], and every
//! random draw goes through a caller-supplied [`RandomSource`], so a generation
//! can be replayed exactly in tests. Item ids are the one exception: every
//! item gets a fresh v4 UUID.

pub mod currency;
pub mod dimensions;
pub mod distribution;
pub mod filler;
pub mod formulas;
pub mod items;
pub mod naming;
pub mod placement;
pub mod tables;
pub mod value;

pub use currency::*;
pub use dimensions::*;
pub use distribution::*;
pub use filler::*;
pub use formulas::*;
pub use items::*;
pub use naming::*;
pub use placement::*;
pub use tables::*;
pub use value::*;

use crate::config::DEFAULT_POWER_SCALE;
use crate::utils::RandomSource;
use crate::{ContainerSize, FillLevel, GeneratedItem, ItemCategory, ItemSubtype, LootResult, Quality};
use serde::{Deserialize, Serialize};

/// Container-only options of a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOptions {
    pub size: ContainerSize,
    pub fill_level: FillLevel,
    pub include_currency: bool,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            size: ContainerSize::Medium,
            fill_level: FillLevel::FewItems,
            include_currency: true,
        }
    }
}

/// Everything needed to generate one item.
///
/// # Examples
///
/// ```
/// use lootsmith::{ItemCategory, ItemRequest, Quality};
///
/// let request = ItemRequest::new(ItemCategory::Weapon, Quality::Rare).with_power_scale(1.5);
/// assert_eq!(request.power_scale, 1.5);
/// assert!(request.subtype.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub category: ItemCategory,
    /// Desired subtype; `None`, or a subtype of another category, picks one at random
    pub subtype: Option<ItemSubtype>,
    pub quality: Quality,
    pub power_scale: f64,
    pub container: ContainerOptions,
    /// Item being regenerated; its id and container configuration are kept
    pub previous: Option<GeneratedItem>,
}

impl ItemRequest {
    pub fn new(category: ItemCategory, quality: Quality) -> Self {
        Self {
            category,
            subtype: None,
            quality,
            power_scale: DEFAULT_POWER_SCALE,
            container: ContainerOptions::default(),
            previous: None,
        }
    }

    /// Request for a specific subtype; the category follows the subtype.
    pub fn for_subtype(subtype: ItemSubtype, quality: Quality) -> Self {
        Self::new(subtype.category(), quality).with_subtype(subtype)
    }

    /// Request for a container.
    pub fn container(quality: Quality, options: ContainerOptions) -> Self {
        Self::new(ItemCategory::Container, quality).with_container(options)
    }

    pub fn with_subtype(mut self, subtype: ItemSubtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    pub fn with_power_scale(mut self, power_scale: f64) -> Self {
        self.power_scale = power_scale;
        self
    }

    pub fn with_container(mut self, options: ContainerOptions) -> Self {
        self.container = options;
        self
    }

    /// Regenerates `previous` instead of creating a new item.
    pub fn editing(mut self, previous: GeneratedItem) -> Self {
        self.previous = Some(previous);
        self
    }

    /// Container parameters as seen by the filler.
    pub fn container_spec(&self) -> ContainerSpec {
        ContainerSpec {
            quality: self.quality,
            size: self.container.size,
            fill_level: self.container.fill_level,
            include_currency: self.container.include_currency,
            power_scale: self.power_scale,
        }
    }
}

/// Trait for procedural generators.
///
/// All generators take a request and a random source, and can check their own
/// output against the invariants the rest of the system relies on.
pub trait Generator<T> {
    /// Generates content for `request`, drawing randomness from `rng`.
    fn generate(&self, request: &ItemRequest, rng: &mut dyn RandomSource) -> LootResult<T>;

    /// Validates that generated content meets requirements.
    fn validate(&self, content: &T, request: &ItemRequest) -> LootResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}
