/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The `extern "C"` functions handed out through `get_proc_address`.

use std::ffi::{c_char, c_void, CStr};
use std::ptr;

use gdbind::sys;

use super::class_db::{ClassDb, ClassInfo, MethodInfo};
use super::values::{self, id_to_object_ptr, object_ptr_to_id, Value};
use super::{dispatch, engine, LogEntry, LogKind};

macro_rules! interface_table {
    ( $( $name:ident: $FnTy:ident, )* ) => {
        // Each function must match the signature the bindings declare for its name.
        $( const _: sys::$FnTy = Some($name); )*

        fn lookup(name: &str) -> Option<*const ()> {
            match name {
                $( stringify!($name) => Some($name as *const ()), )*
                _ => None,
            }
        }
    };
}

interface_table! {
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

pub(super) unsafe extern "C" fn get_proc_address(name: *const c_char) -> sys::GDExtensionInterfaceFunctionPtr {
    let name = CStr::from_ptr(name).to_string_lossy();

    // SAFETY: all entries are `unsafe extern "C"` functions; the caller casts back to the signature of `name`.
    lookup(&name).map(|fptr| std::mem::transmute::<*const (), unsafe extern "C" fn()>(fptr))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Version and logging

const VERSION_STRING: &CStr = c"Godot Engine v4.3.stable.official";

unsafe extern "C" fn get_godot_version(r_godot_version: *mut sys::GDExtensionGodotVersion) {
    *r_godot_version = sys::GDExtensionGodotVersion {
        major: 4,
        minor: 3,
        patch: 0,
        string: VERSION_STRING.as_ptr(),
    };
}

unsafe fn push_log(kind: LogKind, description: *const c_char, function: *const c_char) {
    let message = CStr::from_ptr(description).to_string_lossy().into_owned();
    let function = CStr::from_ptr(function).to_string_lossy().into_owned();

    engine().log.push(LogEntry {
        kind,
        message,
        function,
    });
}

unsafe extern "C" fn print_error(
    p_description: *const c_char,
    p_function: *const c_char,
    _p_file: *const c_char,
    _p_line: i32,
    _p_editor_notify: sys::GDExtensionBool,
) {
    push_log(LogKind::Error, p_description, p_function);
}

unsafe extern "C" fn print_warning(
    p_description: *const c_char,
    p_function: *const c_char,
    _p_file: *const c_char,
    _p_line: i32,
    _p_editor_notify: sys::GDExtensionBool,
) {
    push_log(LogKind::Warning, p_description, p_function);
}

unsafe extern "C" fn print_script_error(
    p_description: *const c_char,
    p_function: *const c_char,
    _p_file: *const c_char,
    _p_line: i32,
    _p_editor_notify: sys::GDExtensionBool,
) {
    push_log(LogKind::ScriptError, p_description, p_function);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class DB

unsafe extern "C" fn classdb_construct_object(p_classname: sys::GDExtensionConstStringNamePtr) -> sys::GDExtensionObjectPtr {
    let class_name = values::read_string(p_classname);
    let mut engine = engine();

    match ClassDb::get().class(&class_name) {
        Some(class) if class.is_instantiable => id_to_object_ptr(engine.construct(class)),
        _ => {
            engine.error(format!("Class '{class_name}' cannot be instantiated"));
            ptr::null_mut()
        }
    }
}

unsafe extern "C" fn classdb_get_method_bind(
    p_classname: sys::GDExtensionConstStringNamePtr,
    p_methodname: sys::GDExtensionConstStringNamePtr,
    p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionMethodBindPtr {
    let class_name = values::read_string(p_classname);
    let method_name = values::read_string(p_methodname);

    let Some(method) = ClassDb::get().find_method(&class_name, &method_name) else {
        engine().error(format!("Method '{class_name}::{method_name}' not found"));
        return ptr::null();
    };

    if method.hash != Some(p_hash) {
        engine().error(format!(
            "Method '{class_name}::{method_name}' has hash {:?}, but {p_hash} was requested",
            method.hash
        ));
        return ptr::null();
    }

    method as *const MethodInfo as sys::GDExtensionMethodBindPtr
}

unsafe extern "C" fn classdb_get_class_tag(p_classname: sys::GDExtensionConstStringNamePtr) -> *mut c_void {
    let class_name = values::read_string(p_classname);

    match ClassDb::get().class(&class_name) {
        Some(class) => class as *const ClassInfo as *mut c_void,
        None => ptr::null_mut(),
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Objects

unsafe extern "C" fn object_method_bind_ptrcall(
    p_method_bind: sys::GDExtensionMethodBindPtr,
    p_instance: sys::GDExtensionObjectPtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    r_ret: sys::GDExtensionTypePtr,
) {
    let method: &'static MethodInfo = &*(p_method_bind as *const MethodInfo);
    let mut engine = engine();

    if method.is_static {
        if !p_instance.is_null() {
            engine.error(format!("{}::{}: static method called on an instance", method.class, method.name));
            return;
        }

        let args = read_args(method, p_args);
        let ret = dispatch::call_static(&mut engine, method, args);
        drop(engine);

        if let (Some(ty), Some(value)) = (&method.ret, ret) {
            values::write(ty, r_ret, value);
        }
        return;
    }

    let object_class: Option<&'static ClassInfo> = object_ptr_to_id(p_instance)
        .and_then(|id| engine.objects.get(&id))
        .map(|data| data.class);

    let Some(object_class) = object_class else {
        engine.error(format!("{}::{}: instance is null or freed", method.class, method.name));
        return;
    };

    if !ClassDb::get().inherits(&object_class.name, &method.class) {
        engine.error(format!(
            "{}::{}: called on object of class {}",
            method.class, method.name, object_class.name
        ));
        return;
    }

    let args = read_args(method, p_args);
    let this = object_ptr_to_id(p_instance).unwrap_or_default();
    let ret = dispatch::call(&mut engine, this, method, args);
    drop(engine);

    if let (Some(ty), Some(value)) = (&method.ret, ret) {
        values::write(ty, r_ret, value);
    }
}

unsafe fn read_args(method: &MethodInfo, p_args: *const sys::GDExtensionConstTypePtr) -> Vec<Value> {
    method
        .params
        .iter()
        .enumerate()
        .map(|(i, ty)| values::read(ty, *p_args.add(i)))
        .collect()
}

unsafe extern "C" fn object_destroy(p_o: sys::GDExtensionObjectPtr) {
    match object_ptr_to_id(p_o) {
        Some(id) => engine().destroy(id),
        None => engine().error(String::from("object_destroy(): null object")),
    }
}

unsafe extern "C" fn object_get_instance_id(p_object: sys::GDExtensionConstObjectPtr) -> sys::GDObjectInstanceID {
    object_ptr_to_id(p_object).unwrap_or(0)
}

unsafe extern "C" fn object_get_instance_from_id(p_instance_id: sys::GDObjectInstanceID) -> sys::GDExtensionObjectPtr {
    if engine().is_alive(p_instance_id) {
        id_to_object_ptr(p_instance_id)
    } else {
        ptr::null_mut()
    }
}

unsafe extern "C" fn object_cast_to(
    p_object: sys::GDExtensionConstObjectPtr,
    p_class_tag: *mut c_void,
) -> sys::GDExtensionObjectPtr {
    if p_class_tag.is_null() {
        return ptr::null_mut();
    }

    let target: &ClassInfo = &*(p_class_tag as *const ClassInfo);
    let engine = engine();

    let matches = object_ptr_to_id(p_object)
        .and_then(|id| engine.objects.get(&id))
        .is_some_and(|data| ClassDb::get().inherits(&data.class.name, &target.name));

    if matches {
        p_object as sys::GDExtensionObjectPtr
    } else {
        ptr::null_mut()
    }
}

unsafe extern "C" fn object_get_class_name(
    p_object: sys::GDExtensionConstObjectPtr,
    _p_library: sys::GDExtensionClassLibraryPtr,
    r_class_name: sys::GDExtensionUninitializedStringNamePtr,
) -> sys::GDExtensionBool {
    let class_name = object_ptr_to_id(p_object)
        .and_then(|id| engine().objects.get(&id).map(|data| data.class.name.clone()));

    match class_name {
        Some(name) => {
            values::init_string(r_class_name, name);
            sys::GDEXTENSION_TRUE
        }
        None => sys::GDEXTENSION_FALSE,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Strings

unsafe fn utf8_arg(p_contents: *const c_char, p_size: sys::GDExtensionInt) -> String {
    if p_contents.is_null() || p_size <= 0 {
        return String::new();
    }

    let bytes = std::slice::from_raw_parts(p_contents as *const u8, p_size as usize);
    String::from_utf8_lossy(bytes).into_owned()
}

unsafe extern "C" fn string_new_with_utf8_chars_and_len(
    r_dest: sys::GDExtensionUninitializedStringPtr,
    p_contents: *const c_char,
    p_size: sys::GDExtensionInt,
) {
    values::init_string(r_dest, utf8_arg(p_contents, p_size));
}

unsafe extern "C" fn string_name_new_with_utf8_chars_and_len(
    r_dest: sys::GDExtensionUninitializedStringNamePtr,
    p_contents: *const c_char,
    p_size: sys::GDExtensionInt,
) {
    values::init_string(r_dest, utf8_arg(p_contents, p_size));
}

/// Returns the UTF-8 length; copies at most `p_max_write_length` bytes if `r_text` is non-null.
unsafe extern "C" fn string_to_utf8_chars(
    p_self: sys::GDExtensionConstStringPtr,
    r_text: *mut c_char,
    p_max_write_length: sys::GDExtensionInt,
) -> sys::GDExtensionInt {
    let text = values::read_string(p_self);

    if !r_text.is_null() {
        let count = text.len().min(p_max_write_length.max(0) as usize);
        ptr::copy_nonoverlapping(text.as_ptr(), r_text as *mut u8, count);
    }

    text.len() as sys::GDExtensionInt
}

// Both string types share one representation, so copy and conversion constructors coincide.

type StringCtor = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);

unsafe extern "C" fn string_construct_default(
    p_base: sys::GDExtensionUninitializedTypePtr,
    _p_args: *const sys::GDExtensionConstTypePtr,
) {
    values::init_string(p_base, String::new());
}

unsafe extern "C" fn string_construct_copy(
    p_base: sys::GDExtensionUninitializedTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
) {
    let source = values::read_string(*p_args);
    values::init_string(p_base, source);
}

unsafe extern "C" fn string_destroy(p_base: sys::GDExtensionTypePtr) {
    values::destroy_string(p_base);
}

unsafe extern "C" fn variant_get_ptr_constructor(
    p_type: sys::GDExtensionVariantType,
    p_constructor: i32,
) -> sys::GDExtensionPtrConstructor {
    if !is_string_type(p_type) {
        return None;
    }

    let ctor: StringCtor = match p_constructor {
        0 => string_construct_default,
        1 | 2 => string_construct_copy,
        _ => return None,
    };

    Some(ctor)
}

unsafe extern "C" fn variant_get_ptr_destructor(p_type: sys::GDExtensionVariantType) -> sys::GDExtensionPtrDestructor {
    if is_string_type(p_type) {
        Some(string_destroy)
    } else {
        None
    }
}

fn is_string_type(variant_type: sys::GDExtensionVariantType) -> bool {
    variant_type == sys::GDEXTENSION_VARIANT_TYPE_STRING || variant_type == sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME
}
