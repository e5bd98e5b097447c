/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use real_mod::*;

#[cfg(not(feature = "double-precision"))]
mod real_mod {
    /// Floating-point type used throughout the engine. This is the equivalent of `real_t` in the engine's C++ code.
    ///
    /// This is `f32` by default. With the feature `double-precision`, it becomes `f64`, matching an engine compiled with
    /// `precision=double`.
    #[allow(non_camel_case_types)]
    pub type real = f32;

    pub(crate) type RVec2 = glam::f32::Vec2;
    pub(crate) type RVec3 = glam::f32::Vec3;
}

#[cfg(feature = "double-precision")]
mod real_mod {
    /// Floating-point type used throughout the engine. This is the equivalent of `real_t` in the engine's C++ code.
    ///
    /// This is `f64`, because the feature `double-precision` is enabled.
    #[allow(non_camel_case_types)]
    pub type real = f64;

    pub(crate) type RVec2 = glam::f64::DVec2;
    pub(crate) type RVec3 = glam::f64::DVec3;
}
