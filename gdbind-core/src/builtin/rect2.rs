/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdbind_ffi as sys;
use sys::{ffi_methods, GodotFfi};

use super::{real, Vector2};

/// 2D axis-aligned bounding box.
///
/// `Rect2` consists of a position, a size, and several utility functions. It is typically used for fast overlap tests.
/// Negative sizes are not normalized; use [`abs()`](Self::abs) first if that matters.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rect2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect2 {
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    /// Create a new `Rect2` from four reals representing position `(x,y)` and size `(width,height)`.
    pub const fn from_components(x: real, y: real, width: real, height: real) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(width, height))
    }

    /// Create a new `Rect2` from two corners.
    pub fn from_corners(position: Vector2, end: Vector2) -> Self {
        Self::new(position, end - position)
    }

    /// Ending corner. This is calculated as `position + size`.
    pub fn end(self) -> Vector2 {
        self.position + self.size
    }

    /// Center of the rectangle.
    pub fn center(self) -> Vector2 {
        self.position + self.size / 2.0
    }

    pub fn area(self) -> real {
        self.size.x * self.size.y
    }

    /// Equivalent rectangle with non-negative size.
    #[must_use]
    pub fn abs(self) -> Self {
        let end = self.end();
        let min = Vector2::new(self.position.x.min(end.x), self.position.y.min(end.y));

        Self::new(min, self.size.abs())
    }

    /// Whether `point` lies inside; the end edges are exclusive.
    pub fn contains_point(self, point: Vector2) -> bool {
        let end = self.end();

        point.x >= self.position.x && point.y >= self.position.y && point.x < end.x && point.y < end.y
    }

    /// Whether `self` overlaps `other`. Touching edges do not count as overlap.
    pub fn intersects(self, other: Self) -> bool {
        let (a_end, b_end) = (self.end(), other.end());

        self.position.x < b_end.x
            && other.position.x < a_end.x
            && self.position.y < b_end.y
            && other.position.y < a_end.y
    }

    /// Smallest rectangle that contains both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let (a_end, b_end) = (self.end(), other.end());
        let position = Vector2::new(self.position.x.min(other.position.x), self.position.y.min(other.position.y));
        let end = Vector2::new(a_end.x.max(b_end.x), a_end.y.max(b_end.y));

        Self::from_corners(position, end)
    }
}

impl fmt::Display for Rect2 {
    /// Formats `Rect2` to match Godot's string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[P: {}, S: {}]", self.position, self.size)
    }
}

// SAFETY: laid out like the engine's `Rect2` (position followed by size).
unsafe impl GodotFfi for Rect2 {
    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

sys::static_assert_eq_size_align!(Rect2, [real; 4]);

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_center_area() {
        let rect = Rect2::from_components(1.0, 2.0, 4.0, 6.0);

        assert_eq!(rect.end(), Vector2::new(5.0, 8.0));
        assert_eq!(rect.center(), Vector2::new(3.0, 5.0));
        assert_eq!(rect.area(), 24.0);
    }

    #[test]
    fn abs_normalizes_negative_size() {
        let rect = Rect2::from_components(4.0, 4.0, -2.0, -3.0);
        assert_eq!(rect.abs(), Rect2::from_components(2.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn contains_and_intersects() {
        let a = Rect2::from_components(0.0, 0.0, 10.0, 10.0);
        let b = Rect2::from_components(10.0, 0.0, 5.0, 5.0);

        assert!(a.contains_point(Vector2::ZERO));
        assert!(!a.contains_point(Vector2::new(10.0, 5.0)));
        assert!(!a.intersects(b), "touching edges");
        assert!(a.intersects(Rect2::from_components(9.0, 9.0, 5.0, 5.0)));
        assert_eq!(a.merge(b), Rect2::from_components(0.0, 0.0, 15.0, 10.0));
    }

    #[test]
    fn display() {
        let rect = Rect2::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.to_string(), "[P: (1, 2), S: (3, 4)]");
    }
}
