//! Whole-unit differences between two values of the same type.

use crate::{options::Unit, DateTimeResult};

/// A value that can count the whole units between itself and another value.
///
/// Counts are truncated toward zero and are negative when `other` is earlier
/// than `self`.
pub trait Difference {
    /// Returns the whole `unit`s from `self` until `other`.
    fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64>;

    /// Returns the whole `unit`s from `other` until `self`.
    fn since(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        other.until(self, unit)
    }
}

impl Unit {
    /// Returns the whole units between `start` and `end`.
    ///
    /// ```rust
    /// use datespan::{options::Unit, PlainDateTime};
    ///
    /// let start = PlainDateTime::try_new(2024, 1, 17, 15, 50, 30).unwrap();
    /// let end = PlainDateTime::try_new(2024, 6, 3, 10, 20, 55).unwrap();
    ///
    /// assert_eq!(Unit::Week.between(&start, &end).unwrap(), 19);
    /// assert_eq!(Unit::Day.between(&end, &start).unwrap(), -137);
    /// ```
    pub fn between<T: Difference>(self, start: &T, end: &T) -> DateTimeResult<i64> {
        start.until(end, self)
    }
}
