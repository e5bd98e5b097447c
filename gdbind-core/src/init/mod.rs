/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_void;

use crate::out;
use crate::sys;

/// Stage of the Godot initialization process.
///
/// Engine classes can be called from [`InitLevel::Scene`] on, because their method binds are resolved at that level.
pub type InitLevel = sys::InitLevel;

/// Body of the C entry point emitted by `#[gdextension]`.
///
/// Returns `GDEXTENSION_FALSE` if loading failed. The panic is logged and does not unwind into the engine.
#[doc(hidden)]
pub unsafe fn __gdbind_load_library<E: ExtensionLibrary>(
    get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    library: sys::GDExtensionClassLibraryPtr,
    init: *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool {
    let load = || {
        sys::initialize(get_proc_address, library);

        let callbacks = sys::GDExtensionInitialization {
            minimum_initialization_level: E::min_level().to_sys(),
            userdata: std::ptr::null_mut(),
            initialize: Some(ffi_initialize_layer::<E>),
            deinitialize: Some(ffi_deinitialize_layer::<E>),
        };
        init.write(callbacks);

        sys::GDEXTENSION_TRUE
    };

    crate::private::handle_panic(|| "error when loading GDExtension library", load)
        .unwrap_or(sys::GDEXTENSION_FALSE)
}

unsafe extern "C" fn ffi_initialize_layer<E: ExtensionLibrary>(
    _userdata: *mut c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);

    // The engine ignores the outcome of a level callback, so a panic is only logged.
    let _ = crate::private::handle_panic(
        || format!("failed to initialize level `{level:?}`"),
        || {
            out!("Initialize level {level:?}...");
            sys::load_class_method_table(level);

            E::on_level_init(level);
        },
    );
}

unsafe extern "C" fn ffi_deinitialize_layer<E: ExtensionLibrary>(
    _userdata: *mut c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);

    let _ = crate::private::handle_panic(
        || format!("failed to deinitialize level `{level:?}`"),
        || {
            E::on_level_deinit(level);
            out!("Deinitialized level {level:?}.");
        },
    );
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Hooks of a library that uses the generated engine classes.
///
/// A library has exactly one implementation, annotated with [`#[gdextension]`][gdextension]. The type itself carries no
/// data.
///
/// ```ignore
/// use gdbind::init::*;
///
/// struct UiTools;
///
/// #[gdextension]
/// unsafe impl ExtensionLibrary for UiTools {}
/// ```
///
/// # Safety
/// Engine objects can be reached from outside Rust (scripts, other extensions). The bindings cannot check what happens
/// to them there, so the implementor vouches for that code as well.
///
/// [gdextension]: ../../gdbind_macros/attr.gdextension.html
pub unsafe trait ExtensionLibrary {
    /// First level the engine reports to this library. `Scene` by default.
    fn min_level() -> InitLevel {
        InitLevel::Scene
    }

    /// Called for each level from [`Self::min_level()`] upwards, after the bindings of that level are loaded.
    #[allow(unused_variables)]
    fn on_level_init(level: InitLevel) {}

    /// Called for each level in reverse order when the library is unloaded.
    #[allow(unused_variables)]
    fn on_level_deinit(level: InitLevel) {}
}
