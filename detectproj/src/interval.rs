use serde::{Deserialize, Serialize};

/// Minimal latitude, degrees.
pub const MIN_LAT: f64 = -90.0;
/// Maximal latitude, degrees.
pub const MAX_LAT: f64 = 90.0;
/// Minimal longitude, degrees.
pub const MIN_LON: f64 = -180.0;
/// Maximal longitude, degrees.
pub const MAX_LON: f64 = 180.0;
/// Largest absolute latitude that makes sense as a true parallel, degrees.
pub const MAX_LAT0: f64 = 80.0;

/// Closed numeric range `[min, max]`.
///
/// Projection families use intervals to declare which values of the pole position and the true
/// parallel are legal. A search procedure reads them to bound its perturbations; nothing in this
/// crate rejects values outside of them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Full latitude domain.
    pub const LATITUDE: Self = Self::new(MIN_LAT, MAX_LAT);
    /// Full longitude domain.
    pub const LONGITUDE: Self = Self::new(MIN_LON, MAX_LON);
    /// Standard parallels usable by conic projections.
    pub const CONIC_PARALLEL: Self = Self::new(-MAX_LAT0, MAX_LAT0);
    /// Non-negative true parallels.
    pub const POSITIVE_PARALLEL: Self = Self::new(0.0, MAX_LAT0);
    /// Degenerate interval for parameters a family doesn't use.
    pub const ZERO: Self = Self::point(0.0);

    /// Creates a new interval. Bounds given in the wrong order are not swapped.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate interval containing only `value`.
    pub const fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Length of the interval.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if both bounds are equal.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns true if `value` lies in the interval, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true if `value` lies in the interval, bounds excluded.
    pub fn contains_strictly(&self, value: f64) -> bool {
        self.min < value && value < self.max
    }

    /// Moves `value` to the nearest point of the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_bounds() {
        let interval = Interval::new(-10.0, 10.0);
        assert!(interval.contains(-10.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(10.5));
        assert!(!interval.contains_strictly(10.0));
        assert!(interval.contains_strictly(0.0));
        assert_eq!(interval.width(), 20.0);
    }

    #[test]
    fn degenerate() {
        assert!(Interval::ZERO.is_degenerate());
        assert!(Interval::ZERO.contains(0.0));
        assert!(!Interval::ZERO.contains_strictly(0.0));
        assert!(Interval::point(MAX_LAT).contains(90.0));
        assert!(!Interval::LATITUDE.is_degenerate());
    }

    #[test]
    fn clamp() {
        let interval = Interval::POSITIVE_PARALLEL;
        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(85.0), MAX_LAT0);
        assert_eq!(interval.clamp(45.0), 45.0);
    }

    #[test]
    fn conic_parallels_are_narrower_than_latitude() {
        assert!(Interval::CONIC_PARALLEL.min() > Interval::LATITUDE.min());
        assert!(Interval::CONIC_PARALLEL.max() < Interval::LATITUDE.max());
    }
}
