//! # Value Calculator
//!
//! Turns a quality tier and power scale into a three-denomination price.

use super::GenerationTables;
use crate::utils::{scaled_floor, RandomSource};
use crate::{CurrencyValue, LootResult, Quality};

/// Rolls the monetary value of an item.
///
/// A base amount is drawn from the table's base range, scaled by the tier's
/// value multiplier and the power scale, then split into gold, silver and
/// copper. The result is never zero: an item worth less than one copper is
/// worth one copper.
///
/// # Examples
///
/// ```
/// use lootsmith::{calculate_item_value, GenerationTables, Quality, SequenceSource};
///
/// let tables = GenerationTables::default();
/// let mut rng = SequenceSource::constant(0.0);
/// let value = calculate_item_value(&tables, Quality::Poor, 0.25, &mut rng).unwrap();
/// assert_eq!((value.gold, value.silver, value.copper), (0, 0, 1));
/// ```
pub fn calculate_item_value(
    tables: &GenerationTables,
    quality: Quality,
    power_scale: f64,
    rng: &mut dyn RandomSource,
) -> LootResult<CurrencyValue> {
    let weights = tables.quality_weights(quality)?;
    let (min, max) = tables.value_base_range;
    let base = rng.random_int(min, max) as f64;
    let total = scaled_floor(base * weights.value_multiplier * power_scale);

    let mut value = CurrencyValue::from_copper(total);
    if value.gold == 0 && value.silver == 0 && value.copper == 0 {
        value.copper = 1;
    }
    Ok(value)
}
