/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdbind_ffi as sys;
use sys::types::OpaqueStringName;
use sys::{ffi_methods, interface_fn, GodotFfi};

use super::GString;

/// A string optimized for unique names.
///
/// StringNames are immutable strings designed for representing unique names. StringName ensures that only
/// one instance of a given name exists. Method names, class names and node names are typically `StringName`s.
///
/// Like [`GString`], every operation calls into the engine.
#[repr(transparent)]
pub struct StringName {
    opaque: OpaqueStringName,
}

impl StringName {
    fn from_opaque(opaque: OpaqueStringName) -> Self {
        Self { opaque }
    }

    pub fn is_empty(&self) -> bool {
        self.to_string().is_empty()
    }
}

// SAFETY: `opaque` is exactly the engine's `StringName`; construction and destruction go through the engine.
unsafe impl GodotFfi for StringName {
    ffi_methods! { type sys::GDExtensionStringNamePtr = *mut Opaque; }
}

impl Default for StringName {
    fn default() -> Self {
        let ctor = sys::builtin_lifecycle_api().string_name_construct_default;

        // SAFETY: default constructor without arguments.
        unsafe { Self::new_with_uninit(|self_ptr| ctor(self_ptr, std::ptr::null())) }
    }
}

impl Clone for StringName {
    fn clone(&self) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_name_construct_copy;
        let args = [self.sys()];

        // SAFETY: copy constructor with a single `StringName` argument.
        unsafe { Self::new_with_uninit(|self_ptr| ctor(self_ptr, args.as_ptr())) }
    }
}

impl Drop for StringName {
    fn drop(&mut self) {
        let dtor = sys::builtin_lifecycle_api().string_name_destroy;

        // SAFETY: `self` is a live engine string name and is destroyed exactly once.
        unsafe { dtor(self.sys_mut()) }
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for StringName {}

impl PartialEq<&str> for StringName {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = GString::from(self);
        fmt::Display::fmt(&s, f)
    }
}

/// Uses literal syntax from GDScript: `&"string_name"`
impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&\"{self}\"")
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion from/into other string-types

impl From<&str> for StringName {
    fn from(string: &str) -> Self {
        let bytes = string.as_bytes();

        // SAFETY: the engine copies `len` bytes of UTF-8 into the uninitialized string name.
        unsafe {
            Self::new_with_uninit(|ptr| {
                interface_fn!(string_name_new_with_utf8_chars_and_len)(
                    ptr,
                    bytes.as_ptr() as *const std::ffi::c_char,
                    bytes.len() as sys::GDExtensionInt,
                );
            })
        }
    }
}

impl From<String> for StringName {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&String> for StringName {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

impl From<&GString> for StringName {
    fn from(string: &GString) -> Self {
        let ctor = sys::builtin_lifecycle_api().string_name_from_string;
        let args = [string.sys()];

        // SAFETY: converting constructor `StringName(String)`.
        unsafe { Self::new_with_uninit(|self_ptr| ctor(self_ptr, args.as_ptr())) }
    }
}

impl From<GString> for StringName {
    fn from(string: GString) -> Self {
        Self::from(&string)
    }
}

impl From<&StringName> for String {
    fn from(string: &StringName) -> Self {
        string.to_string()
    }
}

impl From<StringName> for String {
    fn from(string: StringName) -> Self {
        string.to_string()
    }
}
