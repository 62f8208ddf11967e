//! # Quality Distribution Sampler
//!
//! Draws the quality of an item found inside a container from a discrete
//! weighted table keyed by the container's own quality.

use super::{GenerationTables, QualityWeight};
use crate::utils::RandomSource;
use crate::Quality;

/// Draws one quality from a weighted table.
///
/// A uniform `r` in `[0, 100)` is compared against the running total of the
/// weights in table order; the first entry whose cumulative weight reaches
/// `r` wins. Tables that do not cover `r` (weights summing below 100) fall
/// back to [`Quality::Common`].
///
/// # Examples
///
/// ```
/// use lootsmith::{select_quality_from_distribution, Quality, QualityWeight, SequenceSource};
///
/// let table = [QualityWeight::new(Quality::Common, 60), QualityWeight::new(Quality::Rare, 40)];
/// let mut rng = SequenceSource::constant(0.75);
/// assert_eq!(select_quality_from_distribution(&table, &mut rng), Quality::Rare);
/// ```
pub fn select_quality_from_distribution(
    distribution: &[QualityWeight],
    rng: &mut dyn RandomSource,
) -> Quality {
    let roll = rng.next_f64() * 100.0;
    let mut cumulative = 0.0;

    for entry in distribution {
        cumulative += entry.weight as f64;
        if roll <= cumulative {
            return entry.quality;
        }
    }

    Quality::Common
}

/// Draws the quality of an item found in a container of `container_quality`.
pub fn sample_item_quality(
    tables: &GenerationTables,
    container_quality: Quality,
    rng: &mut dyn RandomSource,
) -> Quality {
    select_quality_from_distribution(tables.distribution_for(container_quality), rng)
}
