/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Often-imported symbols.

pub use super::builtin::{real, Color, GString, Rect2, StringName, Vector2, Vector3};
pub use super::classes::{Node, Object, RefCounted, Resource};
pub use super::global::{godot_error, godot_script_error, godot_warn};
pub use super::init::{gdextension, ExtensionLibrary, InitLevel};
pub use super::meta::ConvertError;
pub use super::obj::{Gd, GodotClass, Inherits, InstanceId};

// Make trait methods available.
#[rustfmt::skip] // One per line.
mod trait_reexports {
    pub use crate::obj::EngineBitfield as _;
    pub use crate::obj::EngineEnum as _;
    pub use crate::obj::NewAlloc as _;
    pub use crate::obj::NewGd as _;
}

pub use trait_reexports::*;
