/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Memory strategies of engine classes.
//!
//! Two associated types of [`Bounds`](crate::obj::Bounds) describe how a class is managed:
//!
//! 1. [`Memory`] is the strategy of the **static** type, relevant for associated functions such as construction.
//!    - [`MemRefCounted`] for `RefCounted` and derived classes.
//!    - [`MemManual`] for all other classes, `Object` included.<br><br>
//!
//! 2. [`DynMemory`] is the strategy of the **dynamic** type, relevant for instances.
//!    - [`MemRefCounted`] and [`MemManual`] as above, except that `Object` is excluded.
//!    - [`MemDynamic`] for `Object` itself: a `Gd<Object>` may point to either kind of object, so the instance ID decides.
//!
//! ```
//! use gdbind_core::obj::{bounds, Bounds, Gd, GodotClass};
//!
//! // Accepts only classes that are never reference-counted.
//! struct Owned<T>
//! where
//!     T: GodotClass + Bounds<Memory = bounds::MemManual>,
//! {
//!     inner: Gd<T>,
//! }
//! ```

use crate::obj::{GodotClass, RawGd};
use crate::out;
use private::Sealed;

pub(super) mod private {
    use super::{DynMemory, Memory};

    /// Library-implemented trait to check bounds on `GodotClass` types.
    ///
    /// See also the [`bounds`](crate::obj::bounds) module documentation.
    ///
    /// # Safety
    /// Internal. Implemented by generated code only; the memory strategy must match the engine's view of the class.
    pub unsafe trait Bounds {
        type Memory: Memory;

        /// Memory strategy of the instance, at runtime.
        type DynMemory: DynMemory;
    }

    pub trait Sealed {}
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Memory bounds

/// Specifies the memory strategy of the static type.
pub trait Memory: Sealed {}

/// Specifies the memory strategy of the dynamic type.
pub trait DynMemory: Sealed {
    /// Takes the first reference of a freshly constructed or engine-returned object.
    #[doc(hidden)]
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>);

    /// If ref-counted, increments the count.
    #[doc(hidden)]
    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>);

    /// If ref-counted, decrements the count. Returns `true` if the count hit 0 and the object must be destroyed.
    ///
    /// # Safety
    /// Must be called at most once per reference held by `obj`.
    #[doc(hidden)]
    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool;

    /// Whether the instance is ref-counted; `None` if that is unknown (null object).
    #[doc(hidden)]
    fn is_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> Option<bool>;
}

/// Reference-counted memory: `RefCounted` and its descendants.
///
/// Every `Gd` holds one strong reference. The engine object is destroyed when the last one is dropped.
pub struct MemRefCounted {}
impl Sealed for MemRefCounted {}
impl Memory for MemRefCounted {}
impl DynMemory for MemRefCounted {
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>) {
        trace_ref::<T>("init");
        with_non_null(obj, |refc| assert!(refc.init_ref(), "RefCounted::init_ref() failed"));
    }

    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>) {
        trace_ref::<T>("inc");
        with_non_null(obj, |refc| assert!(refc.reference(), "RefCounted::reference() failed"));
    }

    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool {
        trace_ref::<T>("dec");
        with_non_null(obj, |refc| refc.unreference()).unwrap_or(false)
    }

    fn is_ref_counted<T: GodotClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(true)
    }
}

fn with_non_null<T, R>(obj: &RawGd<T>, f: impl FnOnce(&mut crate::classes::RefCounted) -> R) -> Option<R>
where
    T: GodotClass,
{
    if obj.is_null() {
        None
    } else {
        Some(obj.with_ref_counted(f))
    }
}

fn trace_ref<T: GodotClass>(_op: &str) {
    out!("  refcount {_op:<4} <{}>", T::class_name());
}

/// Memory of `Object` itself: decided per instance by the ref-counted bit of the instance ID.
pub struct MemDynamic {}
impl MemDynamic {
    fn is_dyn_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> bool {
        Self::is_ref_counted(obj) == Some(true)
    }
}
impl Sealed for MemDynamic {}
impl DynMemory for MemDynamic {
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>) {
        if Self::is_dyn_ref_counted(obj) {
            MemRefCounted::maybe_init_ref(obj)
        }
    }

    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>) {
        if Self::is_dyn_ref_counted(obj) {
            MemRefCounted::maybe_inc_ref(obj)
        }
    }

    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool {
        Self::is_dyn_ref_counted(obj) && MemRefCounted::maybe_dec_ref(obj)
    }

    fn is_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> Option<bool> {
        obj.instance_id_unchecked().map(|id| id.is_ref_counted())
    }
}

/// Manually managed memory: every other `Object` descendant. Only [`Gd::free()`](crate::obj::Gd::free) destroys it.
pub struct MemManual {}
impl Sealed for MemManual {}
impl Memory for MemManual {}
impl DynMemory for MemManual {
    fn maybe_init_ref<T: GodotClass>(_obj: &RawGd<T>) {}
    fn maybe_inc_ref<T: GodotClass>(_obj: &RawGd<T>) {}
    unsafe fn maybe_dec_ref<T: GodotClass>(_obj: &RawGd<T>) -> bool {
        false
    }
    fn is_ref_counted<T: GodotClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(false)
    }
}
