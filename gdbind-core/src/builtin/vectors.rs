/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use gdbind_ffi as sys;
use sys::{ffi_methods, GodotFfi};

use super::{real, RVec2, RVec3};

/// Implements component-wise arithmetic, scalar multiplication and the glam round trip for a float vector.
macro_rules! impl_vector_ops {
    ($Vector:ty, $Glam:ty, ($($comp:ident),*)) => {
        impl $Vector {
            /// Converts the corresponding `glam` type to `Self`.
            pub fn from_glam(v: $Glam) -> Self {
                Self::new($( v.$comp ),*)
            }

            /// Converts `self` to the corresponding `glam` type.
            pub fn to_glam(self) -> $Glam {
                <$Glam>::new($( self.$comp ),*)
            }

            pub fn length(self) -> real {
                self.to_glam().length()
            }

            pub fn length_squared(self) -> real {
                self.to_glam().length_squared()
            }

            pub fn dot(self, with: Self) -> real {
                self.to_glam().dot(with.to_glam())
            }

            pub fn distance_to(self, to: Self) -> real {
                (to - self).length()
            }

            /// Returns the vector scaled to unit length, or zero if the vector is zero.
            pub fn normalized_or_zero(self) -> Self {
                Self::from_glam(self.to_glam().normalize_or_zero())
            }

            pub fn lerp(self, to: Self, weight: real) -> Self {
                Self::from_glam(self.to_glam().lerp(to.to_glam(), weight))
            }

            pub fn abs(self) -> Self {
                Self::new($( self.$comp.abs() ),*)
            }

            /// Whether all components are approximately equal to the ones of `other`.
            pub fn is_equal_approx(self, other: Self) -> bool {
                self.to_glam().abs_diff_eq(other.to_glam(), 1e-5)
            }
        }

        impl Add for $Vector {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::new($( self.$comp + rhs.$comp ),*)
            }
        }

        impl AddAssign for $Vector {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $Vector {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self::new($( self.$comp - rhs.$comp ),*)
            }
        }

        impl SubAssign for $Vector {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Mul<real> for $Vector {
            type Output = Self;

            fn mul(self, rhs: real) -> Self {
                Self::new($( self.$comp * rhs ),*)
            }
        }

        impl Div<real> for $Vector {
            type Output = Self;

            fn div(self, rhs: real) -> Self {
                Self::new($( self.$comp / rhs ),*)
            }
        }

        impl Neg for $Vector {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new($( -self.$comp ),*)
            }
        }

        impl From<$Glam> for $Vector {
            fn from(v: $Glam) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$Vector> for $Glam {
            fn from(v: $Vector) -> Self {
                v.to_glam()
            }
        }

        // SAFETY: laid out like the engine's vector of `real_t`.
        unsafe impl GodotFfi for $Vector {
            ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Vector used for 2D math using floating point coordinates.
///
/// Components are [`real`], i.e. `f32` unless the `double-precision` feature is enabled.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    pub x: real,
    pub y: real,
}

impl Vector2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    /// Unit vector in -Y direction (up in 2D coordinate system).
    pub const UP: Self = Self::new(0.0, -1.0);

    /// Unit vector in +Y direction (down in 2D coordinate system).
    pub const DOWN: Self = Self::new(0.0, 1.0);

    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    pub const fn new(x: real, y: real) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: real) -> Self {
        Self::new(v, v)
    }

    /// Angle of the vector relative to the positive X axis, in radians.
    pub fn angle(self) -> real {
        self.y.atan2(self.x)
    }

    /// Ratio of width to height.
    pub fn aspect(self) -> real {
        self.x / self.y
    }
}

impl_vector_ops!(Vector2, RVec2, (x, y));

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Vector used for 3D math using floating point coordinates.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    pub x: real,
    pub y: real,
    pub z: real,
}

impl Vector3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Forward direction in Godot's coordinate system, i.e. -Z.
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: real, y: real, z: real) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: real) -> Self {
        Self::new(v, v, v)
    }

    pub fn cross(self, with: Self) -> Self {
        Self::from_glam(self.to_glam().cross(with.to_glam()))
    }
}

impl_vector_ops!(Vector3, RVec3, (x, y, z));

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

sys::static_assert_eq_size_align!(Vector2, [real; 2]);
sys::static_assert_eq_size_align!(Vector3, [real; 3]);

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);

        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn length_and_normalize() {
        let v = Vector3::new(0.0, 3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert!(v.normalized_or_zero().is_equal_approx(Vector3::new(0.0, 0.6, 0.8)));
        assert_eq!(Vector3::ZERO.normalized_or_zero(), Vector3::ZERO);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::UP;
        assert_eq!(x.cross(y), Vector3::BACK);
    }

    #[test]
    fn components_are_real() {
        let v = Vector2::new(0.25, 0.5);
        let x: crate::builtin::real = v.x;

        #[cfg(not(feature = "double-precision"))]
        assert_eq!(std::mem::size_of::<crate::builtin::real>(), 4);
        #[cfg(feature = "double-precision")]
        assert_eq!(std::mem::size_of::<crate::builtin::real>(), 8);

        assert_eq!(x, 0.25);
        assert_eq!(std::mem::size_of::<Vector3>(), 3 * std::mem::size_of::<real>());
    }

    #[test]
    fn display() {
        assert_eq!(Vector2::new(1.5, -2.0).to_string(), "(1.5, -2)");
        assert_eq!(Vector3::ONE.to_string(), "(1, 1, 1)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let v = Vector2::new(7.0, 9.0);
        let json = serde_json::to_string(&v).expect("serialize");
        assert_eq!(json, r#"{"x":7.0,"y":9.0}"#);

        let back: Vector2 = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, v);
    }
}
