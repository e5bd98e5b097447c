/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Values as the engine sees them, and their memory representation in ptrcall slots.

use std::ffi::c_void;
use std::ptr;

use gdbind::builtin::{Color, GString, Rect2, StringName, Vector2, Vector3};
use gdbind::sys;

use super::class_db::ValueType;

/// A decoded ptrcall argument, or a stored property.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    StringName(String),
    Vector2(Vector2),
    Vector3(Vector3),
    Color(Color),
    Rect2(Rect2),
    /// Instance ID of the referenced object, `None` for null.
    Object(Option<u64>),
}

impl Value {
    pub fn default_for(ty: &ValueType) -> Self {
        match ty {
            ValueType::Bool => Self::Bool(false),
            ValueType::Int => Self::Int(0),
            ValueType::Float => Self::Float(0.0),
            ValueType::String => Self::String(String::new()),
            ValueType::StringName => Self::StringName(String::new()),
            ValueType::Vector2 => Self::Vector2(Vector2::ZERO),
            ValueType::Vector3 => Self::Vector3(Vector3::ZERO),
            ValueType::Color => Self::Color(Color::BLACK),
            ValueType::Rect2 => Self::Rect2(Rect2::default()),
            ValueType::Object(_) => Self::Object(None),
            ValueType::Unsupported(_) => Self::Nil,
        }
    }

    /// Text of a `String` or `StringName`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::StringName(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<u64> {
        match self {
            Self::Object(id) => *id,
            _ => None,
        }
    }

    /// Whether `self` can be written into a slot of type `ty`.
    fn fits(&self, ty: &ValueType) -> bool {
        matches!(
            (self, ty),
            (Self::Bool(_), ValueType::Bool)
                | (Self::Int(_), ValueType::Int)
                | (Self::Float(_), ValueType::Float)
                | (Self::String(_) | Self::StringName(_), ValueType::String | ValueType::StringName)
                | (Self::Vector2(_), ValueType::Vector2)
                | (Self::Vector3(_), ValueType::Vector3)
                | (Self::Color(_), ValueType::Color)
                | (Self::Rect2(_), ValueType::Rect2)
                | (Self::Object(_), ValueType::Object(_))
        )
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Strings
//
// The engine's `String` and `StringName` are both modeled as one pointer to a boxed Rust `String`, null for the empty string.

// The opaque storage reserved by the bindings must be able to hold that pointer.
const _: () = {
    assert!(std::mem::size_of::<GString>() >= std::mem::size_of::<*mut String>());
    assert!(std::mem::size_of::<StringName>() >= std::mem::size_of::<*mut String>());
};

/// # Safety
/// `slot` must point to an initialized engine string.
pub unsafe fn read_string(slot: *const c_void) -> String {
    let boxed = *(slot as *const *mut String);

    if boxed.is_null() {
        String::new()
    } else {
        (*boxed).clone()
    }
}

/// Initializes an uninitialized string slot.
///
/// # Safety
/// `slot` must be valid for writes and hold no live string.
pub unsafe fn init_string(slot: *mut c_void, text: String) {
    let boxed = if text.is_empty() {
        ptr::null_mut()
    } else {
        Box::into_raw(Box::new(text))
    };

    *(slot as *mut *mut String) = boxed;
}

/// Destroys the string in `slot`, leaving it empty.
///
/// # Safety
/// `slot` must point to an initialized engine string.
pub unsafe fn destroy_string(slot: *mut c_void) {
    let boxed = std::mem::replace(&mut *(slot as *mut *mut String), ptr::null_mut());

    if !boxed.is_null() {
        drop(Box::from_raw(boxed));
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Objects
//
// An object pointer is the instance ID itself. Nothing ever dereferences it.

const _: () = assert!(std::mem::size_of::<usize>() == std::mem::size_of::<u64>());

pub fn id_to_object_ptr(id: u64) -> sys::GDExtensionObjectPtr {
    id as usize as sys::GDExtensionObjectPtr
}

pub fn object_ptr_to_id(obj: sys::GDExtensionConstObjectPtr) -> Option<u64> {
    if obj.is_null() {
        None
    } else {
        Some(obj as usize as u64)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Slots

/// Decodes one entry of a ptrcall argument array.
///
/// # Safety
/// `arg` must point to a value with the FFI representation of `ty`.
pub unsafe fn read(ty: &ValueType, arg: sys::GDExtensionConstTypePtr) -> Value {
    match ty {
        ValueType::Bool => Value::Bool(*(arg as *const bool)),
        ValueType::Int => Value::Int(*(arg as *const i64)),
        ValueType::Float => Value::Float(*(arg as *const f64)),
        ValueType::String => Value::String(read_string(arg)),
        ValueType::StringName => Value::StringName(read_string(arg)),
        ValueType::Vector2 => Value::Vector2(*(arg as *const Vector2)),
        ValueType::Vector3 => Value::Vector3(*(arg as *const Vector3)),
        ValueType::Color => Value::Color(*(arg as *const Color)),
        ValueType::Rect2 => Value::Rect2(*(arg as *const Rect2)),
        ValueType::Object(_) => Value::Object(object_ptr_to_id(*(arg as *const sys::GDExtensionConstObjectPtr))),
        ValueType::Unsupported(_) => Value::Nil,
    }
}

/// Writes `value` into an initialized return slot of type `ty`.
///
/// Values of a different type are replaced by the default of `ty`, so a misconfigured test cannot corrupt memory.
///
/// # Safety
/// `ret` must point to an initialized value with the FFI representation of `ty`.
pub unsafe fn write(ty: &ValueType, ret: sys::GDExtensionTypePtr, value: Value) {
    let value = if value.fits(ty) {
        value
    } else {
        Value::default_for(ty)
    };

    match value {
        Value::Nil => {}
        Value::Bool(b) => *(ret as *mut bool) = b,
        Value::Int(i) => *(ret as *mut i64) = i,
        Value::Float(f) => *(ret as *mut f64) = f,
        Value::String(s) | Value::StringName(s) => {
            destroy_string(ret);
            init_string(ret, s);
        }
        Value::Vector2(v) => *(ret as *mut Vector2) = v,
        Value::Vector3(v) => *(ret as *mut Vector3) = v,
        Value::Color(c) => *(ret as *mut Color) = c,
        Value::Rect2(r) => *(ret as *mut Rect2) = r,
        Value::Object(id) => {
            *(ret as *mut sys::GDExtensionObjectPtr) = id.map_or(ptr::null_mut(), id_to_object_ptr);
        }
    }
}
