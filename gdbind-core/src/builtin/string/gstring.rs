/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdbind_ffi as sys;
use sys::types::OpaqueString;
use sys::{ffi_methods, interface_fn, GodotFfi};

use super::StringName;

/// Godot's reference counted string type.
///
/// This is the Rust binding of GDScript's `String` type. It represents the native string class used within the Godot engine,
/// and as such has different memory layout and characteristics than `std::string::String`.
///
/// Engine methods take string parameters as `impl AsArg<GString>`, so `&str`, `String` and `GString` can all be passed.
/// Getters return `GString`; the property accessors of the generated classes convert to `String` right away.
///
/// All operations, including construction and `Display`, call into the engine. A `GString` cannot be created in unit tests
/// that run without an engine.
#[doc(alias = "String")]
#[repr(transparent)]
pub struct GString {
    opaque: OpaqueString,
}

impl GString {
    /// Construct a new empty GString.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_opaque(opaque: OpaqueString) -> Self {
        Self { opaque }
    }

    pub fn is_empty(&self) -> bool {
        self.to_string().is_empty()
    }

    /// Number of UTF-8 bytes; equivalent to `self.to_string().len()`.
    pub fn len_utf8(&self) -> usize {
        self.to_string().len()
    }
}

// SAFETY: `opaque` is exactly the engine's `String`; construction and destruction go through the engine.
unsafe impl GodotFfi for GString {
    ffi_methods! { type sys::GDExtensionStringPtr = *mut Opaque; }
}

impl Default for GString {
    fn default() -> Self {
        let ctor = sys::builtin_lifecycle_api().string_construct_default;

        // SAFETY: default constructor fully initializes the uninitialized slot and takes no arguments.
        unsafe { Self::new_with_uninit(|self_ptr| ctor(self_ptr, std::ptr::null())) }
    }
}

impl Clone for GString {
    fn clone(&self) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_construct_copy;
        let args = [self.sys()];

        // SAFETY: copy constructor with a single `String` argument.
        unsafe { Self::new_with_uninit(|self_ptr| ctor(self_ptr, args.as_ptr())) }
    }
}

impl Drop for GString {
    fn drop(&mut self) {
        let dtor = sys::builtin_lifecycle_api().string_destroy;

        // SAFETY: `self` is a live engine string and is destroyed exactly once.
        unsafe { dtor(self.sys_mut()) }
    }
}

impl PartialEq for GString {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for GString {}

impl PartialEq<&str> for GString {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: `self` is a live engine string.
        let s = unsafe { super::read_utf8(self.sys()) };
        f.write_str(&s)
    }
}

/// Uses literal syntax from GDScript: `"string"`
impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion from/into Rust string-types

impl From<&str> for GString {
    fn from(s: &str) -> Self {
        let bytes = s.as_bytes();

        // SAFETY: the engine copies `len` bytes of UTF-8 into the uninitialized string.
        unsafe {
            Self::new_with_uninit(|string_ptr| {
                interface_fn!(string_new_with_utf8_chars_and_len)(
                    string_ptr,
                    bytes.as_ptr() as *const std::ffi::c_char,
                    bytes.len() as sys::GDExtensionInt,
                );
            })
        }
    }
}

impl From<String> for GString {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&String> for GString {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

impl From<&GString> for String {
    fn from(string: &GString) -> Self {
        string.to_string()
    }
}

impl From<GString> for String {
    fn from(string: GString) -> Self {
        string.to_string()
    }
}

impl From<&StringName> for GString {
    fn from(string: &StringName) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_from_string_name;
        let args = [string.sys()];

        // SAFETY: converting constructor `String(StringName)`.
        unsafe { Self::new_with_uninit(|self_ptr| ctor(self_ptr, args.as_ptr())) }
    }
}

impl From<StringName> for GString {
    fn from(string: StringName) -> Self {
        Self::from(&string)
    }
}

impl std::str::FromStr for GString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
