/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::init::InitLevel;
use crate::meta::ClassName;
use crate::obj::{bounds, Bounds, Gd};
use crate::sys;
use sys::GodotFfi as _;

/// Engine class that can be held in a [`Gd<T>`][crate::obj::Gd].
///
/// Every generated class implements it; user code never does.
pub trait GodotClass: Bounds + 'static
where
    Self: Sized,
{
    /// Direct base class in the engine hierarchy. [`NoBase`] for `Object`.
    type Base: GodotClass;

    /// Engine-side class name, used for construction, casts and method-bind lookup.
    fn class_name() -> ClassName;

    /// Level from which the class can be used.
    const INIT_LEVEL: InitLevel;

    /// Whether `U` is `Self` or one of its bases, walking the static hierarchy.
    fn inherits<U: GodotClass>() -> bool {
        Self::class_name() == U::class_name()
            || (Self::Base::class_name() != NoBase::class_name() && Self::Base::inherits::<U>())
    }
}

/// Base of `Object`, the root of the hierarchy. Uninhabited.
pub enum NoBase {}

impl GodotClass for NoBase {
    type Base = NoBase;

    fn class_name() -> ClassName {
        ClassName::new_static("(no base)")
    }

    const INIT_LEVEL: InitLevel = InitLevel::Core; // arbitrary; never read.
}

unsafe impl Bounds for NoBase {
    type Memory = bounds::MemManual;
    type DynMemory = bounds::MemManual;
}

/// `Self` is `Base` or one of its (transitive) subclasses.
///
/// Generated for every class and each of its bases. Enables [`Gd::upcast()`] and object parameters that accept
/// derived classes.
///
/// # Safety
/// Only for actual subclasses: the handle of `Self` is reinterpreted as a handle of `Base`.
pub unsafe trait Inherits<Base: GodotClass>: GodotClass {}

// SAFETY: every class is a subclass of itself.
unsafe impl<T: GodotClass> Inherits<T> for T {}

pub trait EngineClass: GodotClass {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr;
}

/// Generated engine enum: a newtype over the engine's `i32` ordinal.
pub trait EngineEnum: Copy {
    fn try_from_ord(ord: i32) -> Option<Self>;

    /// Engine ordinal. Several enumerators may share one.
    fn ord(self) -> i32;

    fn from_ord(ord: i32) -> Self {
        Self::try_from_ord(ord)
            .unwrap_or_else(|| panic!("ordinal {ord} does not map to any enumerator"))
    }

    /// Rust name of the enumerator, or `""` for an unknown ordinal.
    fn as_str(&self) -> &'static str;

    /// Distinct enumerators in declaration order, without trailing `MAX` counters.
    fn values() -> &'static [Self];
}

/// Generated engine bitfield: a newtype over `u64` flags. Unknown bits are kept.
pub trait EngineBitfield: Copy {
    fn try_from_ord(ord: u64) -> Option<Self>;

    fn ord(self) -> u64;

    fn from_ord(ord: u64) -> Self {
        Self::try_from_ord(ord)
            .unwrap_or_else(|| panic!("ordinal {ord} does not map to any valid bit flag"))
    }

    fn is_set(self, flag: Self) -> bool {
        self.ord() & flag.ord() != 0
    }
}

/// Construction of instantiable ref-counted classes.
///
/// ```no_run
/// use gdbind_core::classes::BoxMesh;
/// use gdbind_core::obj::{Gd, NewGd};
///
/// let mesh: Gd<BoxMesh> = BoxMesh::new_gd();
/// ```
pub trait NewGd: GodotClass {
    /// New object holding one reference.
    fn new_gd() -> Gd<Self>;
}

impl<T> NewGd for T
where
    T: cap::GodotDefault + Bounds<Memory = bounds::MemRefCounted>,
{
    fn new_gd() -> Gd<Self> {
        Gd::default()
    }
}

/// Construction of instantiable manually managed classes.
///
/// The object lives until [`Gd::free()`] is called, or until an owner such as a parent node frees it.
pub trait NewAlloc: GodotClass {
    #[must_use]
    fn new_alloc() -> Gd<Self>;
}

impl<T> NewAlloc for T
where
    T: cap::GodotDefault + Bounds<Memory = bounds::MemManual>,
{
    fn new_alloc() -> Gd<Self> {
        T::__godot_default()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Capabilities

pub mod cap {
    use super::*;

    /// Instantiable class (`is_instantiable` in the class database). Used through [`NewGd`] or [`NewAlloc`].
    pub trait GodotDefault: GodotClass {
        #[doc(hidden)]
        fn __godot_default() -> Gd<Self>;
    }
}

/// Creates a new instance of engine class `T` through `classdb_construct_object`.
///
/// A ref-counted object gets its first reference here.
///
/// # Panics
/// If the engine does not know the class or refuses to construct it.
#[doc(hidden)]
pub fn construct_engine_object<T>() -> Gd<T>
where
    T: GodotClass,
{
    let class_name = T::class_name();
    let class_sname = class_name.to_string_name();

    // SAFETY: the engine returns a fresh object pointer of class `T`, or null.
    let object_ptr = unsafe { sys::interface_fn!(classdb_construct_object)(class_sname.sys()) };
    assert!(
        !object_ptr.is_null(),
        "classdb_construct_object() returned null for class `{class_name}`"
    );

    // SAFETY: the object was just constructed and is valid.
    unsafe { Gd::from_obj_sys(object_ptr) }
}
