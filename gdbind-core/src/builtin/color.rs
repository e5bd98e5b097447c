/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdbind_ffi as sys;
use sys::{ffi_methods, GodotFfi};

/// Color built-in type, in floating-point RGBA format.
///
/// Channel values are _typically_ in the range of 0 to 1, but this is not a requirement, and values outside this range are
/// explicitly allowed for e.g. High Dynamic Range (HDR).
///
/// Unlike vectors, channels are always `f32`, independent of the `double-precision` feature.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// The color's red component.
    pub r: f32,
    /// The color's green component.
    pub g: f32,
    /// The color's blue component.
    pub b: f32,
    /// The color's alpha component. A value of 0 means that the color is fully transparent. A
    /// value of 1 means that the color is fully opaque.
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT_BLACK: Color = Self::from_rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Self::from_rgb(0.0, 0.0, 1.0);

    /// Constructs a new `Color` with the given components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a new opaque `Color` with the given red, green and blue components.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Constructs a new `Color` from 8-bit channel values, where 255 maps to 1.0.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(from_u8(r), from_u8(g), from_u8(b), from_u8(a))
    }

    /// Returns the color as 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Returns a copy with alpha set to `a`.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between `self` and `to`, for all four channels.
    #[must_use]
    pub fn lerp(self, to: Self, weight: f64) -> Self {
        let weight = weight as f32;
        let lerp = |from: f32, to: f32| from + (to - from) * weight;

        Self::from_rgba(lerp(self.r, to.r), lerp(self.g, to.g), lerp(self.b, to.b), lerp(self.a, to.a))
    }

    /// Relative luminance, following the Rec. 709 coefficients.
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Whether all channels are approximately equal to the ones of `other`.
    pub fn is_equal_approx(self, other: Self) -> bool {
        glam::Vec4::from(self).abs_diff_eq(glam::Vec4::from(other), 1e-5)
    }
}

/// Constructs a default `Color` which is opaque black.
impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for glam::Vec4 {
    fn from(c: Color) -> Self {
        glam::Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<glam::Vec4> for Color {
    fn from(v: glam::Vec4) -> Self {
        Self::from_rgba(v.x, v.y, v.z, v.w)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// SAFETY: laid out like the engine's `Color` (four 32-bit floats).
unsafe impl GodotFfi for Color {
    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

sys::static_assert_eq_size_align!(Color, [f32; 4]);

fn from_u8(channel: u8) -> f32 {
    channel as f32 / 255.0
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::from_rgba(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn rgba8_roundtrip_clamps() {
        let c = Color::from_rgba8(255, 0, 51, 255);
        assert!(c.is_equal_approx(Color::from_rgba(1.0, 0.0, 0.2, 1.0)));

        let hdr = Color::from_rgba(2.0, -1.0, 0.5, 1.0);
        assert_eq!(hdr.to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn lerp_halfway() {
        let mid = Color::BLACK.lerp(Color::WHITE.with_alpha(0.0), 0.5);
        assert!(mid.is_equal_approx(Color::from_rgba(0.5, 0.5, 0.5, 0.5)));
    }

    #[test]
    fn display() {
        assert_eq!(Color::RED.to_string(), "(1, 0, 0, 1)");
    }
}
