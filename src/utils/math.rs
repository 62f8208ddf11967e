//! # Scaling Math
//!
//! Floor helpers used when a scaled stat is converted back to whole numbers.

/// Floors a scaled magnitude, clamping negatives to zero.
///
/// # Examples
///
/// ```
/// use lootsmith::scaled_floor;
///
/// assert_eq!(scaled_floor(2.5 * 3.0), 7);
/// assert_eq!(scaled_floor(-4.0), 0);
/// ```
pub fn scaled_floor(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.floor() as u32
    }
}

/// Floors a scaled magnitude but never returns less than one.
///
/// Used wherever a stat is present at all, so it cannot collapse to zero.
///
/// # Examples
///
/// ```
/// use lootsmith::at_least_one;
///
/// assert_eq!(at_least_one(0.5 * 1.0), 1);
/// assert_eq!(at_least_one(4.0 * 2.0), 8);
/// ```
pub fn at_least_one(value: f64) -> u32 {
    scaled_floor(value).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_floor_truncates() {
        assert_eq!(scaled_floor(0.0), 0);
        assert_eq!(scaled_floor(0.99), 0);
        assert_eq!(scaled_floor(1.0), 1);
        assert_eq!(scaled_floor(12.7), 12);
        assert_eq!(scaled_floor(f64::NAN), 0);
    }

    #[test]
    fn test_at_least_one_floor() {
        assert_eq!(at_least_one(0.0), 1);
        assert_eq!(at_least_one(-3.0), 1);
        assert_eq!(at_least_one(3.9), 3);
    }
}
