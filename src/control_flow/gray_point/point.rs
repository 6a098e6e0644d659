//! 2D point returned by every mapper variant.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A corner of the unit square, or a running sum of corners.
///
/// `#[repr(C)]` because the C variants return it by value.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl AddAssign for Point {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Point) {
        // Sums are only printed, never checked, so wrapping is fine.
        self.x = self.x.wrapping_add(rhs.x);
        self.y = self.y.wrapping_add(rhs.y);
    }
}

impl Add for Point {
    type Output = Point;

    #[inline(always)]
    fn add(mut self, rhs: Point) -> Point {
        self += rhs;
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_add() {
        let mut p = Point::new(1, 0);
        p += Point::new(1, 1);
        assert_eq!(p, Point::new(2, 1));
        assert_eq!(p + Point::new(0, 1), Point::new(2, 2));
    }

    #[test]
    fn test_add_wraps() {
        let p = Point::new(usize::MAX, 0) + Point::new(1, 1);
        assert_eq!(p, Point::new(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(15, 7).to_string(), "(15,7)");
        assert_eq!(Point::ORIGIN.to_string(), "(0,0)");
    }
}
