/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Declarations of the GDExtension C ABI subset used by gdbind.
//!
//! Names and signatures follow `gdextension_interface.h`. Interface functions are resolved by name through
//! `get_proc_address` when the library is loaded.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_void};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalar and pointer types

pub type GDExtensionBool = u8;
pub type GDExtensionInt = i64;
pub type GDObjectInstanceID = u64;

pub type GDExtensionTypePtr = *mut c_void;
pub type GDExtensionConstTypePtr = *const c_void;
pub type GDExtensionUninitializedTypePtr = *mut c_void;
pub type GDExtensionStringPtr = *mut c_void;
pub type GDExtensionConstStringPtr = *const c_void;
pub type GDExtensionUninitializedStringPtr = *mut c_void;
pub type GDExtensionStringNamePtr = *mut c_void;
pub type GDExtensionConstStringNamePtr = *const c_void;
pub type GDExtensionUninitializedStringNamePtr = *mut c_void;
pub type GDExtensionObjectPtr = *mut c_void;
pub type GDExtensionConstObjectPtr = *const c_void;
pub type GDExtensionMethodBindPtr = *const c_void;
pub type GDExtensionClassLibraryPtr = *mut c_void;

pub const GDEXTENSION_TRUE: GDExtensionBool = 1;
pub const GDEXTENSION_FALSE: GDExtensionBool = 0;

pub type GDExtensionVariantType = u32;
pub const GDEXTENSION_VARIANT_TYPE_STRING: GDExtensionVariantType = 4;
pub const GDEXTENSION_VARIANT_TYPE_STRING_NAME: GDExtensionVariantType = 21;

pub type GDExtensionInitializationLevel = u32;
pub const GDEXTENSION_INITIALIZATION_CORE: GDExtensionInitializationLevel = 0;
pub const GDEXTENSION_INITIALIZATION_SERVERS: GDExtensionInitializationLevel = 1;
pub const GDEXTENSION_INITIALIZATION_SCENE: GDExtensionInitializationLevel = 2;
pub const GDEXTENSION_INITIALIZATION_EDITOR: GDExtensionInitializationLevel = 3;
pub const GDEXTENSION_MAX_INITIALIZATION_LEVEL: GDExtensionInitializationLevel = 4;

pub type GDExtensionPtrConstructor =
    Option<unsafe extern "C" fn(p_base: GDExtensionUninitializedTypePtr, p_args: *const GDExtensionConstTypePtr)>;
pub type GDExtensionPtrDestructor = Option<unsafe extern "C" fn(p_base: GDExtensionTypePtr)>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Structs

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionGodotVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub string: *const c_char,
}

pub type GDExtensionInitializeCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>;
pub type GDExtensionDeinitializeCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionInitialization {
    pub minimum_initialization_level: GDExtensionInitializationLevel,
    pub userdata: *mut c_void,
    pub initialize: GDExtensionInitializeCallback,
    pub deinitialize: GDExtensionDeinitializeCallback,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Entry point

pub type GDExtensionInterfaceFunctionPtr = Option<unsafe extern "C" fn()>;

pub type GDExtensionInterfaceGetProcAddress =
    Option<unsafe extern "C" fn(p_function_name: *const c_char) -> GDExtensionInterfaceFunctionPtr>;

pub type GDExtensionInitializationFunction = Option<
    unsafe extern "C" fn(
        p_get_proc_address: GDExtensionInterfaceGetProcAddress,
        p_library: GDExtensionClassLibraryPtr,
        r_initialization: *mut GDExtensionInitialization,
    ) -> GDExtensionBool,
>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions

pub type GDExtensionInterfaceGetGodotVersion =
    Option<unsafe extern "C" fn(r_godot_version: *mut GDExtensionGodotVersion)>;

pub type GDExtensionInterfacePrintError = Option<
    unsafe extern "C" fn(
        p_description: *const c_char,
        p_function: *const c_char,
        p_file: *const c_char,
        p_line: i32,
        p_editor_notify: GDExtensionBool,
    ),
>;
pub type GDExtensionInterfacePrintWarning = GDExtensionInterfacePrintError;
pub type GDExtensionInterfacePrintScriptError = GDExtensionInterfacePrintError;

pub type GDExtensionInterfaceClassdbConstructObject =
    Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr>;

pub type GDExtensionInterfaceClassdbGetMethodBind = Option<
    unsafe extern "C" fn(
        p_classname: GDExtensionConstStringNamePtr,
        p_methodname: GDExtensionConstStringNamePtr,
        p_hash: GDExtensionInt,
    ) -> GDExtensionMethodBindPtr,
>;

pub type GDExtensionInterfaceClassdbGetClassTag =
    Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> *mut c_void>;

pub type GDExtensionInterfaceObjectMethodBindPtrcall = Option<
    unsafe extern "C" fn(
        p_method_bind: GDExtensionMethodBindPtr,
        p_instance: GDExtensionObjectPtr,
        p_args: *const GDExtensionConstTypePtr,
        r_ret: GDExtensionTypePtr,
    ),
>;

pub type GDExtensionInterfaceObjectDestroy = Option<unsafe extern "C" fn(p_o: GDExtensionObjectPtr)>;

pub type GDExtensionInterfaceObjectGetInstanceId =
    Option<unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr) -> GDObjectInstanceID>;

pub type GDExtensionInterfaceObjectGetInstanceFromId =
    Option<unsafe extern "C" fn(p_instance_id: GDObjectInstanceID) -> GDExtensionObjectPtr>;

pub type GDExtensionInterfaceObjectCastTo = Option<
    unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr, p_class_tag: *mut c_void) -> GDExtensionObjectPtr,
>;

pub type GDExtensionInterfaceObjectGetClassName = Option<
    unsafe extern "C" fn(
        p_object: GDExtensionConstObjectPtr,
        p_library: GDExtensionClassLibraryPtr,
        r_class_name: GDExtensionUninitializedStringNamePtr,
    ) -> GDExtensionBool,
>;

pub type GDExtensionInterfaceStringNewWithUtf8CharsAndLen = Option<
    unsafe extern "C" fn(
        r_dest: GDExtensionUninitializedStringPtr,
        p_contents: *const c_char,
        p_size: GDExtensionInt,
    ),
>;

pub type GDExtensionInterfaceStringToUtf8Chars = Option<
    unsafe extern "C" fn(
        p_self: GDExtensionConstStringPtr,
        r_text: *mut c_char,
        p_max_write_length: GDExtensionInt,
    ) -> GDExtensionInt,
>;

pub type GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen = Option<
    unsafe extern "C" fn(
        r_dest: GDExtensionUninitializedStringNamePtr,
        p_contents: *const c_char,
        p_size: GDExtensionInt,
    ),
>;

pub type GDExtensionInterfaceVariantGetPtrConstructor = Option<
    unsafe extern "C" fn(p_type: GDExtensionVariantType, p_constructor: i32) -> GDExtensionPtrConstructor,
>;

pub type GDExtensionInterfaceVariantGetPtrDestructor =
    Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionPtrDestructor>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Function table

macro_rules! interface_functions {
    ( $( $name:ident: $FnTy:ty, )* ) => {
        /// Function pointers of the GDExtension interface, resolved by name.
        ///
        /// All fields are `Some` after [`GDExtensionInterface::load()`] returned.
        #[derive(Copy, Clone)]
        pub struct GDExtensionInterface {
            $( pub $name: $FnTy, )*
        }

        impl GDExtensionInterface {
            /// Names under which the functions are looked up, in declaration order.
            pub const FUNCTION_NAMES: &'static [&'static str] = &[ $( stringify!($name), )* ];

            /// Resolves all functions through `get_proc_address`.
            ///
            /// # Panics
            /// If the engine does not provide one or more of the functions. The message lists all missing names.
            ///
            /// # Safety
            /// `get_proc_address` must return either null or a pointer to a function with the signature
            /// declared for the requested name.
            pub unsafe fn load(
                get_proc_address: unsafe extern "C" fn(*const c_char) -> GDExtensionInterfaceFunctionPtr,
            ) -> Self {
                let mut missing: Vec<&'static str> = Vec::new();

                $(
                    let $name = {
                        let fptr = get_proc_address(concat!(stringify!($name), "\0").as_ptr() as *const c_char);
                        if fptr.is_none() {
                            missing.push(stringify!($name));
                        }

                        // SAFETY: same layout (nullable function pointer); signature guaranteed by caller.
                        std::mem::transmute::<GDExtensionInterfaceFunctionPtr, $FnTy>(fptr)
                    };
                )*

                assert!(
                    missing.is_empty(),
                    "GDExtension interface is missing functions: {}",
                    missing.join(", ")
                );

                Self { $( $name, )* }
            }
        }
    };
}

interface_functions! {
    get_godot_version: GDExtensionInterfaceGetGodotVersion,
    print_error: GDExtensionInterfacePrintError,
    print_warning: GDExtensionInterfacePrintWarning,
    print_script_error: GDExtensionInterfacePrintScriptError,
    classdb_construct_object: GDExtensionInterfaceClassdbConstructObject,
    classdb_get_method_bind: GDExtensionInterfaceClassdbGetMethodBind,
    classdb_get_class_tag: GDExtensionInterfaceClassdbGetClassTag,
    object_method_bind_ptrcall: GDExtensionInterfaceObjectMethodBindPtrcall,
    object_destroy: GDExtensionInterfaceObjectDestroy,
    object_get_instance_id: GDExtensionInterfaceObjectGetInstanceId,
    object_get_instance_from_id: GDExtensionInterfaceObjectGetInstanceFromId,
    object_cast_to: GDExtensionInterfaceObjectCastTo,
    object_get_class_name: GDExtensionInterfaceObjectGetClassName,
    string_new_with_utf8_chars_and_len: GDExtensionInterfaceStringNewWithUtf8CharsAndLen,
    string_to_utf8_chars: GDExtensionInterfaceStringToUtf8Chars,
    string_name_new_with_utf8_chars_and_len: GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen,
    variant_get_ptr_constructor: GDExtensionInterfaceVariantGetPtrConstructor,
    variant_get_ptr_destructor: GDExtensionInterfaceVariantGetPtrDestructor,
}
