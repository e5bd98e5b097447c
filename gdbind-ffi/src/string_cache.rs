/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::mem::MaybeUninit;
use std::ptr;

use crate as sys;

/// Temporary `StringName` instances used while resolving method binds.
///
/// Every distinct key is constructed once. All instances are destroyed together when the cache is dropped.
pub struct StringCache<'a> {
    // Boxed so that handed-out pointers stay valid while the map grows.
    names: HashMap<&'static str, Box<sys::types::OpaqueStringName>>,
    interface: &'a sys::GDExtensionInterface,
    builtin_lifecycle: &'a sys::BuiltinLifecycleTable,
}

impl<'a> StringCache<'a> {
    pub fn new(
        interface: &'a sys::GDExtensionInterface,
        builtin_lifecycle: &'a sys::BuiltinLifecycleTable,
    ) -> Self {
        Self {
            names: HashMap::new(),
            interface,
            builtin_lifecycle,
        }
    }

    /// Pointer to the `StringName` for `key`, constructing it on first use.
    ///
    /// The pointer is valid until the cache is dropped.
    pub fn fetch(&mut self, key: &'static str) -> sys::GDExtensionStringNamePtr {
        assert!(key.is_ascii(), "method-bind lookup key is not ASCII: {key}");

        let interface = self.interface;
        let boxed = self
            .names
            .entry(key)
            .or_insert_with(|| Box::new(construct_string_name(interface, key)));

        ptr::addr_of_mut!(**boxed) as sys::GDExtensionStringNamePtr
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Drop for StringCache<'_> {
    fn drop(&mut self) {
        let destroy = self.builtin_lifecycle.string_name_destroy;

        for boxed in self.names.values_mut() {
            // SAFETY: constructed by the engine in `fetch()`, destroyed exactly once here.
            unsafe { destroy(ptr::addr_of_mut!(**boxed) as sys::GDExtensionTypePtr) };
        }
    }
}

fn construct_string_name(interface: &sys::GDExtensionInterface, key: &str) -> sys::types::OpaqueStringName {
    let mut sname = MaybeUninit::<sys::types::OpaqueStringName>::uninit();

    // SAFETY: the constructor was checked for presence when the interface was loaded. It fully initializes `sname`.
    unsafe {
        let construct = interface.string_name_new_with_utf8_chars_and_len.unwrap_unchecked();
        construct(
            sname.as_mut_ptr() as sys::GDExtensionUninitializedStringNamePtr,
            key.as_ptr() as *const std::ffi::c_char,
            key.len() as sys::GDExtensionInt,
        );

        sname.assume_init()
    }
}
