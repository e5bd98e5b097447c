/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Godot-types that are Strings.

mod gstring;
mod string_name;

pub use gstring::GString;
pub use string_name::StringName;

use gdbind_ffi as sys;

/// Copies the UTF-8 contents of an engine `String` into a Rust `String`.
///
/// # Safety
/// `string_ptr` must point to a live engine `String`.
unsafe fn read_utf8(string_ptr: sys::GDExtensionConstStringPtr) -> String {
    let to_utf8 = sys::interface_fn!(string_to_utf8_chars);

    // A first call without buffer reports the required length in bytes.
    let len = to_utf8(string_ptr, std::ptr::null_mut(), 0);
    let Ok(len) = usize::try_from(len) else {
        return String::new();
    };

    let mut buf = vec![0u8; len];
    to_utf8(string_ptr, buf.as_mut_ptr() as *mut std::ffi::c_char, len as sys::GDExtensionInt);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
