/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Rust bindings for Godot 4 engine classes
//!
//! Exposes a curated part of the Godot class hierarchy (UI controls, primitive meshes, materials and the `Object`,
//! `RefCounted`, `Resource` and `Node` bases) as Rust types. The bindings are generated at build time from the engine's
//! class database (`extension_api.json`).
//!
//! ## Layout
//!
//! * [`classes`]: one struct per engine class, with the engine methods and property accessors. Enums, constants and
//!   default-parameter builders live in a sidecar module per class.
//! * [`obj`]: the [`Gd<T>`](obj::Gd) smart pointer, casts and instance IDs.
//! * [`builtin`]: value types such as [`GString`](builtin::GString), [`Vector2`](builtin::Vector2) or [`Color`](builtin::Color).
//! * [`meta`]: argument passing and conversion errors.
//! * [`init`]: the library entry point, see [`ExtensionLibrary`](init::ExtensionLibrary).
//!
//! ## Cargo features
//!
//! * **`double-precision`**: uses `f64` instead of `f32` for [`real`](builtin::real). Must match the engine build.
//! * **`api-custom-json`**: generates bindings from the file named by the `GDBIND_EXTENSION_JSON` environment variable instead of
//!   the bundled class database.
//! * **`codegen-rustfmt`**: formats the generated code with `rustfmt`, which helps when reading it.
//! * **`serde`**: implements `Serialize`/`Deserialize` for the math builtins.

#[doc(inline)]
pub use gdbind_core::{builtin, classes, global, meta, obj};

#[doc(hidden)]
pub use gdbind_core::sys;

/// Entry point and initialization levels.
pub mod init {
    pub use gdbind_core::init::*;

    // Re-exports
    pub use gdbind_macros::gdextension;
}

#[doc(hidden)]
pub use gdbind_core::private;

pub mod prelude;
