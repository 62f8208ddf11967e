//! # Items Module
//!
//! The generated item record and the value types it is built from.
//!
//! This module contains the plain data that leaves the engine:
//! - Quality tiers and item categories
//! - Currency values, grid footprints and grid positions
//! - Per-category item details (see [`ItemDetails`])
//! - Container grids, fill levels and lock configuration

pub mod container;
pub mod item;
pub mod stats;
pub mod subtypes;

pub use container::*;
pub use item::*;
pub use stats::*;
pub use subtypes::*;

use crate::LootError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered rarity classification driving stat and value scaling.
///
/// # Examples
///
/// ```
/// use lootsmith::Quality;
///
/// assert!(Quality::Rare > Quality::Uncommon);
/// assert_eq!("epic".parse::<Quality>().unwrap(), Quality::Epic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Artifact,
}

impl Quality {
    /// All tiers from lowest to highest.
    pub const ALL: [Quality; 7] = [
        Quality::Poor,
        Quality::Common,
        Quality::Uncommon,
        Quality::Rare,
        Quality::Epic,
        Quality::Legendary,
        Quality::Artifact,
    ];

    /// Lowercase identifier used in tables and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Quality::Poor => "poor",
            Quality::Common => "common",
            Quality::Uncommon => "uncommon",
            Quality::Rare => "rare",
            Quality::Epic => "epic",
            Quality::Legendary => "legendary",
            Quality::Artifact => "artifact",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Quality {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Quality::ALL
            .into_iter()
            .find(|quality| quality.key() == wanted)
            .ok_or_else(|| LootError::InvalidRequest(format!("unknown quality '{}'", s)))
    }
}

/// Broad item category. Each category has its own set of subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Accessory,
    Consumable,
    Miscellaneous,
    Currency,
    Container,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 7] = [
        ItemCategory::Weapon,
        ItemCategory::Armor,
        ItemCategory::Accessory,
        ItemCategory::Consumable,
        ItemCategory::Miscellaneous,
        ItemCategory::Currency,
        ItemCategory::Container,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ItemCategory::Weapon => "weapon",
            ItemCategory::Armor => "armor",
            ItemCategory::Accessory => "accessory",
            ItemCategory::Consumable => "consumable",
            ItemCategory::Miscellaneous => "miscellaneous",
            ItemCategory::Currency => "currency",
            ItemCategory::Container => "container",
        }
    }

    /// Name used when an item has no more specific subtype name.
    pub fn display_name(self) -> &'static str {
        match self {
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
            ItemCategory::Accessory => "Accessory",
            ItemCategory::Consumable => "Consumable",
            ItemCategory::Miscellaneous => "Miscellaneous",
            ItemCategory::Currency => "Currency",
            ItemCategory::Container => "Container",
        }
    }

    /// Whether items of this category stack in an inventory slot.
    pub fn is_stackable(self) -> bool {
        matches!(self, ItemCategory::Consumable | ItemCategory::Miscellaneous)
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ItemCategory {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ItemCategory::ALL
            .into_iter()
            .find(|category| category.key() == wanted)
            .ok_or_else(|| LootError::InvalidRequest(format!("unknown category '{}'", s)))
    }
}

/// Monetary value split into three denominations.
///
/// One gold is 100 copper and one silver is 10 copper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyValue {
    pub gold: u32,
    pub silver: u32,
    pub copper: u32,
}

impl CurrencyValue {
    pub fn new(gold: u32, silver: u32, copper: u32) -> Self {
        Self {
            gold,
            silver,
            copper,
        }
    }

    /// Splits a copper amount into gold, silver and copper.
    ///
    /// # Examples
    ///
    /// ```
    /// use lootsmith::CurrencyValue;
    ///
    /// assert_eq!(CurrencyValue::from_copper(1234), CurrencyValue::new(12, 3, 4));
    /// ```
    pub fn from_copper(total: u32) -> Self {
        let gold = total / 100;
        let remainder = total - gold * 100;
        Self::new(gold, remainder / 10, remainder % 10)
    }

    /// Total worth expressed in copper.
    pub fn total_copper(&self) -> u64 {
        self.gold as u64 * 100 + self.silver as u64 * 10 + self.copper as u64
    }

    pub fn is_zero(&self) -> bool {
        self.gold == 0 && self.silver == 0 && self.copper == 0
    }
}

/// Width and height of an item on a container grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const UNIT: Dimensions = Dimensions {
        width: 1,
        height: 1,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells covered.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Footprint after applying a rotation.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Upright => *self,
            Rotation::Sideways => Self::new(self.height, self.width),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Zero-indexed cell of a container grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u32,
    pub col: u32,
}

impl GridPosition {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns the top-left cell (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
}

/// Orientation of an item inside a grid. Sideways swaps width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    Upright,
    Sideways,
}
