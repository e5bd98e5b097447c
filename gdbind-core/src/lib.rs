/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**gdbind**](https://docs.rs/gdbind)
//!
//! Safe layer on top of `gdbind-ffi`: builtin types, argument marshaling, the object model and the generated engine classes.
//! Do not depend on this crate directly, instead use the `gdbind` crate.
//! No SemVer or other guarantees are provided.

// Output of generated code. Mimics the file structure, symbols are re-exported.
#[rustfmt::skip]
#[allow(unused_imports, dead_code, non_upper_case_globals, non_snake_case)]
#[allow(clippy::too_many_arguments, clippy::let_and_return, clippy::new_ret_no_self)]
#[allow(clippy::wrong_self_convention)]
#[allow(clippy::upper_case_acronyms)]
mod gen;

pub mod builtin;
pub mod global;
pub mod init;
pub mod meta;
pub mod obj;

/// Maps the Godot class API to Rust.
///
/// Every engine class is a struct (`Label`, `BoxMesh`, ...). Its enums, constants and default-parameter builders
/// live in a sidecar module named after the class in snake_case (`label`, `box_mesh`, ...).
pub mod classes {
    pub use crate::gen::classes::*;
}

#[doc(hidden)]
pub mod private;

pub use gdbind_ffi as sys;
#[doc(hidden)]
pub use gdbind_ffi::out;
