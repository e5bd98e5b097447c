/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Functions and macros that are not very specific to gdbind, but come in handy.

use crate as sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

/// Verifies a condition at compile time.
#[macro_export]
macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal) => {
        const _: () = assert!($cond, $msg);
    };
}

/// Verifies at compile time that two types `T` and `U` have the same size and alignment.
#[macro_export]
macro_rules! static_assert_eq_size_align {
    ($T:ty, $U:ty) => {
        $crate::static_assert!(
            std::mem::size_of::<$T>() == std::mem::size_of::<$U>()
                && std::mem::align_of::<$T>() == std::mem::align_of::<$U>()
        );
    };
    ($T:ty, $U:ty, $msg:literal) => {
        $crate::static_assert!(
            std::mem::size_of::<$T>() == std::mem::size_of::<$U>()
                && std::mem::align_of::<$T>() == std::mem::align_of::<$U>(),
            $msg
        );
    };
}

/// Trace output.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! out {
    ()                          => (eprintln!());
    ($fmt:literal)              => (eprintln!($fmt));
    ($fmt:literal, $($arg:tt)*) => (eprintln!($fmt, $($arg)*));
}

/// Trace output.
#[cfg(not(feature = "trace"))]
// Sink-writing keeps the arguments "used" without evaluating into output.
#[macro_export]
macro_rules! out {
    ()                          => ({});
    ($fmt:literal)              => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt); });
    ($fmt:literal, $($arg:tt)*) => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt, $($arg)*); });
}

/// Fetches a function from the loaded [`GDExtensionInterface`](crate::GDExtensionInterface).
///
/// All functions are verified to be present when the interface is loaded, so this is infallible afterwards.
#[macro_export]
#[doc(hidden)]
macro_rules! interface_fn {
    ($name:ident) => {{
        unsafe { $crate::get_interface().$name.unwrap_unchecked() }
    }};
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

/// If `ptr` is not null, returns `Some(mapper(ptr))`; otherwise `None`.
#[inline]
pub fn ptr_then<T, R, F>(ptr: *mut T, mapper: F) -> Option<R>
where
    F: FnOnce(*mut T) -> R,
{
    if ptr.is_null() {
        None
    } else {
        Some(mapper(ptr))
    }
}

/// Returns a C `const char*` for a null-terminated byte string.
#[inline]
pub fn c_str(s: &[u8]) -> *const std::ffi::c_char {
    debug_assert!(!s.is_empty() && s[s.len() - 1] == 0);

    s.as_ptr() as *const std::ffi::c_char
}

/// Reads the version string that the engine reports, falling back to a placeholder for null or non-UTF-8 input.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated C string that outlives the call.
pub unsafe fn read_version_string(ptr: *const std::ffi::c_char) -> String {
    if ptr.is_null() {
        return String::from("(unknown)");
    }

    std::ffi::CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_owned)
        .unwrap_or_else(|_| String::from("(invalid UTF-8 in version string)"))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Method binds

/// Opaque handle of one engine method, as resolved by `classdb_get_method_bind`.
#[derive(Copy, Clone, Debug)]
pub struct ClassMethodBind(pub sys::GDExtensionMethodBindPtr);

// SAFETY: method binds are immutable engine-side singletons; the pointer is never dereferenced on the Rust side.
unsafe impl Sync for ClassMethodBind {}
// SAFETY: see above.
unsafe impl Send for ClassMethodBind {}

impl ClassMethodBind {
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

/// Resolves a single method bind; used by the generated `ClassMethodTable`.
///
/// # Panics
/// If the engine returns null, e.g. because the hash does not match the method's signature in the running engine.
pub fn load_class_method(
    get_method_bind: unsafe extern "C" fn(
        sys::GDExtensionConstStringNamePtr,
        sys::GDExtensionConstStringNamePtr,
        sys::GDExtensionInt,
    ) -> sys::GDExtensionMethodBindPtr,
    string_names: &mut sys::StringCache,
    class_sname: sys::GDExtensionStringNamePtr,
    class_name: &'static str,
    method_name: &'static str,
    hash: i64,
) -> ClassMethodBind {
    let method_sname = string_names.fetch(method_name);

    let method_bind = unsafe { get_method_bind(class_sname, method_sname, hash) };

    if method_bind.is_null() {
        panic!("Failed to load class method {class_name}::{method_name} (hash {hash}).");
    }

    ClassMethodBind(method_bind)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptr_then_maps_non_null() {
        let mut value = 5;
        let ptr: *mut i32 = &mut value;

        assert_eq!(ptr_then(ptr, |p| unsafe { *p * 2 }), Some(10));
        assert_eq!(ptr_then(std::ptr::null_mut::<i32>(), |_| 1), None);
    }

    #[test]
    fn version_string_fallbacks() {
        let text = unsafe { read_version_string(c_str(b"Godot Engine v4.3.stable\0")) };
        assert_eq!(text, "Godot Engine v4.3.stable");

        let missing = unsafe { read_version_string(std::ptr::null()) };
        assert_eq!(missing, "(unknown)");
    }

    #[test]
    fn null_method_bind() {
        let bind = ClassMethodBind(std::ptr::null());
        assert!(bind.is_null());
    }

    static_assert!(std::mem::size_of::<ClassMethodBind>() == std::mem::size_of::<usize>());
}
