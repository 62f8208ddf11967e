//! # Random Sources
//!
//! Every generator draws its randomness through [`RandomSource`], a single
//! `next_f64` method returning a float in `[0, 1)`. Production code passes a
//! [`StdRng`] or [`ThreadRng`]; tests pass a seeded `StdRng` or a
//! [`SequenceSource`] that replays fixed values.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns an integer in the inclusive range `min..=max`.
    ///
    /// A reversed range collapses to `min`.
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let width = max - min;
        let span = (u64::from(width) + 1) as f64;
        let offset = (self.next_f64() * span).floor() as u32;
        min + offset.min(width)
    }

    /// Returns true with probability `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Returns an index in `0..len`, or `None` for an empty collection.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = (self.next_f64() * len as f64).floor() as usize;
        Some(index.min(len - 1))
    }
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl RandomSource for ThreadRng {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Picks one element of `items` uniformly.
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    rng.pick_index(items.len()).map(|index| &items[index])
}

/// Replays a fixed list of floats, wrapping around at the end.
///
/// Values are clamped into `[0, 1)` so a script cannot push a draw out of range.
///
/// # Examples
///
/// ```
/// use lootsmith::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new(vec![0.0, 0.5]);
/// assert_eq!(source.next_f64(), 0.0);
/// assert_eq!(source.next_f64(), 0.5);
/// assert_eq!(source.next_f64(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Creates a source that cycles through `values`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Creates a source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        if value.is_nan() || value < 0.0 {
            0.0
        } else if value >= 1.0 {
            1.0 - f64::EPSILON
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_int_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = rng.random_int(1, 3);
            assert!((1..=3).contains(&value));
        }
    }

    #[test]
    fn test_random_int_hits_both_ends() {
        let mut low = SequenceSource::constant(0.0);
        let mut high = SequenceSource::constant(0.9999);
        assert_eq!(low.random_int(10, 100), 10);
        assert_eq!(high.random_int(10, 100), 100);
    }

    #[test]
    fn test_full_u32_range_does_not_overflow() {
        let mut low = SequenceSource::constant(0.0);
        let mut high = SequenceSource::constant(0.9999);
        assert_eq!(low.random_int(0, u32::MAX), 0);
        assert!(high.random_int(0, u32::MAX) > u32::MAX / 2);
        assert_eq!(high.random_int(u32::MAX - 1, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_reversed_range_collapses() {
        let mut source = SequenceSource::constant(0.7);
        assert_eq!(source.random_int(5, 2), 5);
    }

    #[test]
    fn test_sequence_clamps_out_of_range_values() {
        let mut source = SequenceSource::new(vec![-1.0, 1.5]);
        assert_eq!(source.next_f64(), 0.0);
        assert!(source.next_f64() < 1.0);
        assert_eq!(source.draws(), 2);
    }

    #[test]
    fn test_pick_from_empty_slice() {
        let mut source = SequenceSource::constant(0.3);
        let empty: [u8; 0] = [];
        assert!(pick(&mut source, &empty).is_none());
        assert_eq!(pick(&mut source, &[1, 2, 3, 4]), Some(&2));
    }

    #[test]
    fn test_chance_threshold() {
        let mut source = SequenceSource::new(vec![0.49, 0.5]);
        assert!(source.chance(0.5));
        assert!(!source.chance(0.5));
    }
}
