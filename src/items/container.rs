//! # Container Types
//!
//! Size classes, fill levels and the lock configuration stored on a container.

use super::GeneratedItem;
use crate::LootError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size class of a container. Each class maps to a fixed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl ContainerSize {
    pub const ALL: [ContainerSize; 4] = [
        ContainerSize::Small,
        ContainerSize::Medium,
        ContainerSize::Large,
        ContainerSize::ExtraLarge,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContainerSize::Small => "small",
            ContainerSize::Medium => "medium",
            ContainerSize::Large => "large",
            ContainerSize::ExtraLarge => "extra_large",
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContainerSize {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        ContainerSize::ALL
            .into_iter()
            .find(|size| size.key() == wanted)
            .ok_or_else(|| LootError::InvalidRequest(format!("unknown container size '{}'", s)))
    }
}

/// Target share of a container's cells to fill with generated contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillLevel {
    Empty,
    FewItems,
    HalfFull,
    MostlyFull,
    Full,
}

impl FillLevel {
    pub const ALL: [FillLevel; 5] = [
        FillLevel::Empty,
        FillLevel::FewItems,
        FillLevel::HalfFull,
        FillLevel::MostlyFull,
        FillLevel::Full,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FillLevel::Empty => "empty",
            FillLevel::FewItems => "few",
            FillLevel::HalfFull => "half",
            FillLevel::MostlyFull => "mostly_full",
            FillLevel::Full => "full",
        }
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FillLevel {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        FillLevel::ALL
            .into_iter()
            .find(|level| level.key() == wanted)
            .ok_or_else(|| LootError::InvalidRequest(format!("unknown fill level '{}'", s)))
    }
}

/// Rows and columns of a container grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total cell count, saturating at `u32::MAX`.
    pub fn cells(&self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }
}

/// Kind of lock fitted to a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockType {
    #[default]
    None,
    Code,
    Numeric,
    Thievery,
}

/// What happens when the final unlock attempt fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureAction {
    #[default]
    None,
    RemoveItems,
    Destroy,
    Trap,
    Transform,
}

/// Parameters for the configured failure action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureActionDetails {
    pub remove_items: bool,
    pub remove_percentage: u32,
    pub destroy_container: bool,
    pub trigger_trap: bool,
    pub trap_details: String,
    pub transform_into_creature: bool,
    pub creature_type: String,
}

impl Default for FailureActionDetails {
    fn default() -> Self {
        Self {
            remove_items: false,
            remove_percentage: 50,
            destroy_container: false,
            trigger_trap: false,
            trap_details: String::new(),
            transform_into_creature: false,
            creature_type: String::new(),
        }
    }
}

/// Container payload: lock state, grid and nested contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProperties {
    pub is_locked: bool,
    pub lock_type: LockType,
    #[serde(rename = "lockDC")]
    pub lock_dc: u32,
    pub lock_code: String,
    pub grid_size: GridSize,
    pub items: Vec<GeneratedItem>,
    pub flavor_text: String,
    pub max_attempts: u32,
    pub failure_action: FailureAction,
    pub failure_action_details: FailureActionDetails,
    pub has_had_items: bool,
}

impl ContainerProperties {
    /// Unlocked container with default lock metadata holding `items`.
    pub fn unlocked(grid_size: GridSize, items: Vec<GeneratedItem>) -> Self {
        let has_had_items = !items.is_empty();
        Self {
            is_locked: false,
            lock_type: LockType::None,
            lock_dc: 10,
            lock_code: String::new(),
            grid_size,
            items,
            flavor_text: String::new(),
            max_attempts: 3,
            failure_action: FailureAction::None,
            failure_action_details: FailureActionDetails::default(),
            has_had_items,
        }
    }

    /// Copies lock, failure and flavor configuration from `previous`, keeping
    /// this container's grid and contents.
    pub fn preserve_configuration(&mut self, previous: &ContainerProperties) {
        self.is_locked = previous.is_locked;
        self.lock_type = previous.lock_type;
        self.lock_dc = previous.lock_dc;
        self.lock_code = previous.lock_code.clone();
        self.flavor_text = previous.flavor_text.clone();
        self.max_attempts = previous.max_attempts;
        self.failure_action = previous.failure_action;
        self.failure_action_details = previous.failure_action_details.clone();
    }
}
