//! # Lootsmith
//!
//! Procedural item and container generation for tabletop-style inventories.
//!
//! ## Architecture Overview
//!
//! Lootsmith turns a small request (category, subtype, quality, power scale) into a
//! fully specified item record. The core pieces are:
//!
//! - **Items**: the generated item record, modelled as one variant per item kind
//! - **Generation Tables**: immutable configuration for every lookup the engine makes
//! - **Item Factory**: the per-category pipeline that assembles stats, value, footprint and icon
//! - **Container Filler**: best-effort grid packing of generated contents into a container
//! - **Random Sources**: an injectable source of randomness so tests can replay a generation
//!
//! The engine is synchronous and holds no state between calls. Every call builds its
//! own grid model and returns plain data.

pub mod generation;
pub mod items;
pub mod utils;

// Core module re-exports
pub use generation::*;
pub use items::*;
pub use utils::*;

/// Core error type for the Lootsmith engine.
#[derive(thiserror::Error, Debug)]
pub enum LootError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A configuration table has no entry for a key the engine needs
    #[error("Missing {table} entry for {key}")]
    MissingTableEntry { table: &'static str, key: String },

    /// Request could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generation produced content that violates an item invariant
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

impl LootError {
    /// Shorthand for a table lookup miss.
    pub fn missing(table: &'static str, key: impl std::fmt::Display) -> Self {
        LootError::MissingTableEntry {
            table,
            key: key.to_string(),
        }
    }
}

/// Result type used throughout the Lootsmith codebase.
pub type LootResult<T> = Result<T, LootError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Upper bound on item attempts while filling one container
    pub const MAX_FILL_ATTEMPTS: u32 = 100;

    /// Power scale used when the caller does not pick one
    pub const DEFAULT_POWER_SCALE: f64 = 1.0;

    /// Stack size given to every stackable item
    pub const DEFAULT_MAX_STACK_SIZE: u32 = 5;

    /// Lower and upper bound of the random base used by the value calculator
    pub const VALUE_BASE_RANGE: (u32, u32) = (10, 100);

    /// Largest row or column count a container grid may declare
    pub const MAX_GRID_SIDE: u32 = 64;

    /// Base URL joined with an icon id to form an image URL
    pub const ICON_BASE_URL: &str = "https://wow.zamimg.com/images/wow/icons/large/";
}
