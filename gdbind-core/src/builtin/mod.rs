/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in types like `Vector2`, `Color` and `GString`.
//!
//! The value types (vectors, colors, rectangles) are plain `#[repr(C)]` structs laid out exactly like their engine
//! counterparts, so they cross the FFI boundary by bitwise copy. The string types are opaque: their contents live in
//! engine memory and are only accessed through the builtin lifecycle table and the string conversion functions.

mod color;
#[path = "real.rs"]
mod real_inner;
mod rect2;
mod string;
mod vectors;

pub use color::Color;
pub use real_inner::real;
pub use rect2::Rect2;
pub use string::{GString, StringName};
pub use vectors::{Vector2, Vector3};

pub(crate) use real_inner::{RVec2, RVec3};
