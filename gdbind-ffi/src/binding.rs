/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Process-wide storage of everything loaded from the engine: interface, library pointer and method tables.

use std::sync::OnceLock;

use crate as sys;
use crate::{
    ClassMethodTable, GDExtensionClassLibraryPtr, GDExtensionInterface, InitLevel, StringCache,
};

static BINDING: OnceLock<GodotBinding> = OnceLock::new();

struct GodotBinding {
    interface: GDExtensionInterface,
    library: ClassLibraryPtr,
    builtin_lifecycle: BuiltinLifecycleTable,
    class_method_table: OnceLock<ClassMethodTable>,
    runtime_version: RuntimeVersion,
}

/// Newtype around `GDExtensionClassLibraryPtr` so we can implement `Sync` and `Send` manually for this.
struct ClassLibraryPtr(GDExtensionClassLibraryPtr);

// SAFETY: This does not guarantee that reading from or writing to the pointer is thread safe. It merely means we can
// send/share the pointer itself between threads. Any place that dereferences it must ensure thread-safe usage.
unsafe impl Sync for ClassLibraryPtr {}
// SAFETY: See `Sync` impl safety doc.
unsafe impl Send for ClassLibraryPtr {}

/// Engine version reported by `get_godot_version` at load time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub string: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Builtin lifecycle

type PtrConstructor = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);
type PtrDestructor = unsafe extern "C" fn(sys::GDExtensionTypePtr);

/// Constructors and destructors of the opaque builtins `String` and `StringName`.
#[derive(Copy, Clone)]
pub struct BuiltinLifecycleTable {
    pub string_construct_default: PtrConstructor,
    pub string_construct_copy: PtrConstructor,
    pub string_from_string_name: PtrConstructor,
    pub string_destroy: PtrDestructor,
    pub string_name_construct_default: PtrConstructor,
    pub string_name_construct_copy: PtrConstructor,
    pub string_name_from_string: PtrConstructor,
    pub string_name_destroy: PtrDestructor,
}

impl BuiltinLifecycleTable {
    // Constructor indices of `String` and `StringName` in the engine: 0 = default, 1 = copy, 2 = from the other string type.
    const CTOR_DEFAULT: i32 = 0;
    const CTOR_COPY: i32 = 1;
    const CTOR_CONVERT: i32 = 2;

    /// # Safety
    /// `interface` must have been loaded from a live engine.
    unsafe fn load(interface: &GDExtensionInterface) -> Self {
        let get_ctor = interface
            .variant_get_ptr_constructor
            .unwrap_unchecked();
        let get_dtor = interface.variant_get_ptr_destructor.unwrap_unchecked();

        let ctor = |variant_type: sys::GDExtensionVariantType, index: i32, what: &str| -> PtrConstructor {
            get_ctor(variant_type, index)
                .unwrap_or_else(|| panic!("failed to load builtin lifecycle function {what}"))
        };

        let dtor = |variant_type: sys::GDExtensionVariantType, what: &str| -> PtrDestructor {
            get_dtor(variant_type)
                .unwrap_or_else(|| panic!("failed to load builtin lifecycle function {what}"))
        };

        use sys::{GDEXTENSION_VARIANT_TYPE_STRING as STRING, GDEXTENSION_VARIANT_TYPE_STRING_NAME as STRING_NAME};

        Self {
            string_construct_default: ctor(STRING, Self::CTOR_DEFAULT, "String()"),
            string_construct_copy: ctor(STRING, Self::CTOR_COPY, "String(String)"),
            string_from_string_name: ctor(STRING, Self::CTOR_CONVERT, "String(StringName)"),
            string_destroy: dtor(STRING, "~String"),
            string_name_construct_default: ctor(STRING_NAME, Self::CTOR_DEFAULT, "StringName()"),
            string_name_construct_copy: ctor(STRING_NAME, Self::CTOR_COPY, "StringName(StringName)"),
            string_name_from_string: ctor(STRING_NAME, Self::CTOR_CONVERT, "StringName(String)"),
            string_name_destroy: dtor(STRING_NAME, "~StringName"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Initialization

/// Loads the GDExtension interface and stores it for the rest of the process.
///
/// # Panics
/// If called more than once, or if the engine lacks a required function.
///
/// # Safety
/// - `get_proc_address` must be the pointer the engine passed to the entry point.
/// - `library` must be the library pointer the engine passed to the entry point.
pub unsafe fn initialize(
    get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    library: GDExtensionClassLibraryPtr,
) {
    out!("Initialize gdbind...");

    assert!(
        !is_initialized(),
        "gdbind is already initialized; initialize() must only be called once per process"
    );

    let get_proc_address = get_proc_address.expect("get_proc_address unexpectedly null");
    let interface = GDExtensionInterface::load(get_proc_address);
    out!("Loaded interface.");

    let runtime_version = read_runtime_version(&interface);
    out!("Godot version of GDExtension API at runtime: {}", runtime_version.string);

    let builtin_lifecycle = BuiltinLifecycleTable::load(&interface);
    out!("Loaded builtin lifecycle table.");

    let binding = GodotBinding {
        interface,
        library: ClassLibraryPtr(library),
        builtin_lifecycle,
        class_method_table: OnceLock::new(),
        runtime_version,
    };

    if BINDING.set(binding).is_err() {
        panic!("gdbind was initialized concurrently from two threads");
    }

    out!("Assigned binding.");
}

unsafe fn read_runtime_version(interface: &GDExtensionInterface) -> RuntimeVersion {
    let get_godot_version = interface.get_godot_version.unwrap_unchecked();

    let mut raw = std::mem::MaybeUninit::<sys::GDExtensionGodotVersion>::zeroed();
    get_godot_version(raw.as_mut_ptr());
    let raw = raw.assume_init();

    RuntimeVersion {
        major: raw.major,
        minor: raw.minor,
        patch: raw.patch,
        string: sys::read_version_string(raw.string),
    }
}

/// Resolves the method binds that become available at `level`.
///
/// All engine classes covered by the bindings are loaded together at [`InitLevel::Scene`]; other levels have nothing to load.
///
/// # Panics
/// If a method bind cannot be resolved. The message names class, method and hash.
pub fn load_class_method_table(level: InitLevel) {
    if level != InitLevel::Scene {
        out!("Skip class method table for level {level:?}.");
        return;
    }

    let binding = get_binding();
    if binding.class_method_table.get().is_some() {
        out!("Class method table already loaded.");
        return;
    }

    let mut string_names = StringCache::new(&binding.interface, &binding.builtin_lifecycle);
    let table = ClassMethodTable::load(&mut string_names);
    let string_count = string_names.len();
    drop(string_names);

    let _ = binding.class_method_table.set(table);

    out!(
        "Loaded {} classes with {} methods at level {level:?} ({string_count} string names).",
        ClassMethodTable::CLASS_COUNT,
        ClassMethodTable::METHOD_COUNT,
    );
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public API

/// Whether [`initialize()`] has completed.
pub fn is_initialized() -> bool {
    BINDING.get().is_some()
}

#[inline(always)]
pub fn get_interface() -> &'static GDExtensionInterface {
    &get_binding().interface
}

#[inline(always)]
pub fn get_library() -> GDExtensionClassLibraryPtr {
    get_binding().library.0
}

#[inline(always)]
pub fn builtin_lifecycle_api() -> &'static BuiltinLifecycleTable {
    &get_binding().builtin_lifecycle
}

/// Method binds of all engine classes.
///
/// # Panics
/// If init level `Scene` has not been loaded yet.
#[inline]
pub fn class_method_table() -> &'static ClassMethodTable {
    get_binding()
        .class_method_table
        .get()
        .expect("cannot fetch classes; init level 'Scene' not yet loaded")
}

pub fn runtime_version() -> &'static RuntimeVersion {
    &get_binding().runtime_version
}

fn get_binding() -> &'static GodotBinding {
    BINDING
        .get()
        .expect("Godot engine not available; make sure you are not calling it from unit/doc tests")
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Godot engine not available")]
    fn interface_before_initialize() {
        let _ = get_interface();
    }

    #[test]
    fn not_initialized_in_unit_tests() {
        assert!(!is_initialized());
    }

    #[test]
    fn table_not_loaded_for_other_levels() {
        // No engine access happens for levels other than Scene.
        load_class_method_table(InitLevel::Core);
        load_class_method_table(InitLevel::Servers);
        load_class_method_table(InitLevel::Editor);
    }
}
