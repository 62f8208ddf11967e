//! # Utilities Module
//!
//! Randomness sources and the small numeric helpers shared by the generators.

pub mod math;
pub mod random;

pub use math::*;
pub use random::*;
