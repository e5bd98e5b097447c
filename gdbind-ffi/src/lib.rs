/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**gdbind**](https://docs.rs/gdbind)
//!
//! Low level bindings to the GDExtension C API: interface loading, global binding storage and the generated method-bind
//! table of all engine classes. Do not depend on this crate directly, instead use the `gdbind` crate.
//! No SemVer or other guarantees are provided.

#![cfg_attr(test, allow(unused))]

// Output of generated code. Mimics the file structure, symbols are re-exported.
#[rustfmt::skip]
#[allow(
    non_camel_case_types,
    non_upper_case_globals,
    non_snake_case,
    clippy::redundant_static_lifetimes,
    clippy::too_many_arguments
)]
mod gen {
    pub mod central;
    pub mod table_classes;
}

#[macro_use]
mod toolbox;

mod binding;
mod godot_ffi;
mod init_level;
mod interface;
mod opaque;
mod string_cache;

pub use binding::{
    builtin_lifecycle_api, class_method_table, get_interface, get_library, initialize, is_initialized,
    load_class_method_table, runtime_version, BuiltinLifecycleTable, RuntimeVersion,
};
pub use gen::central::*;
pub use gen::table_classes::*;
pub use godot_ffi::GodotFfi;
pub use init_level::InitLevel;
pub use interface::*;
pub use opaque::Opaque;
pub use string_cache::StringCache;
pub use toolbox::{
    c_str, load_class_method, ptr_then, read_version_string, ClassMethodBind,
};

// The impls only compile if those are different types, which keeps the pointer typedefs honest.
trait Distinct {}
impl Distinct for GDExtensionTypePtr {}
impl Distinct for GDExtensionConstTypePtr {}
