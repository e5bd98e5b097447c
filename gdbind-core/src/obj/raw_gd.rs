/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr;

use sys::GodotFfi;

use crate::classes;
use crate::obj::bounds::DynMemory as _;
use crate::obj::{Bounds, GodotClass, InstanceId};
use crate::{out, sys};

/// Nullable object pointer, as it crosses the FFI boundary.
///
/// Holds one reference of a ref-counted object for as long as it lives. Its layout is identical to every generated class
/// struct, which is what allows `&Gd<T>` to be viewed as `&T`.
#[repr(C)]
pub struct RawGd<T: GodotClass> {
    obj: sys::GDExtensionObjectPtr,

    // Cached on construction. Stays `Some` after the object dies, so stale handles can be detected.
    instance_id: Option<InstanceId>,

    _marker: PhantomData<*const T>,
}

impl<T: GodotClass> RawGd<T> {
    /// Initializes this `RawGd<T>` from the object pointer as a **weak ref**, meaning it does not
    /// initialize/increment the reference counter.
    ///
    /// # Safety
    /// `obj` must be a valid object pointer or a null pointer.
    pub(super) unsafe fn from_obj_sys_weak(obj: sys::GDExtensionObjectPtr) -> Self {
        let instance_id = if obj.is_null() {
            None
        } else {
            let id = sys::interface_fn!(object_get_instance_id)(obj);
            InstanceId::try_from_u64(id)
        };

        Self {
            obj,
            instance_id,
            _marker: PhantomData,
        }
    }

    /// Initializes this `RawGd<T>` from the object pointer as a **strong ref**, meaning it initializes
    /// or increments the reference counter and keeps the object alive.
    ///
    /// This is the default for most initializations from FFI. In cases where reference counter should explicitly **not** be updated,
    /// [`Self::from_obj_sys_weak`] is available.
    ///
    /// # Safety
    /// `obj` must be a valid object pointer or a null pointer.
    pub(super) unsafe fn from_obj_sys(obj: sys::GDExtensionObjectPtr) -> Self {
        let raw = Self::from_obj_sys_weak(obj);
        <T as Bounds>::DynMemory::maybe_init_ref(&raw);
        raw
    }

    pub(crate) fn null() -> Self {
        Self {
            obj: ptr::null_mut(),
            instance_id: None,
            _marker: PhantomData,
        }
    }

    pub(crate) fn is_null(&self) -> bool {
        self.obj.is_null()
    }

    /// Instance ID cached at construction, without checking whether the object is still alive.
    pub(crate) fn instance_id_unchecked(&self) -> Option<InstanceId> {
        self.instance_id
    }

    /// Whether the engine still knows the object under the cached instance ID.
    pub(crate) fn is_instance_valid(&self) -> bool {
        match self.instance_id {
            // SAFETY: lookup by ID is valid for any integer; dead IDs yield null.
            Some(id) => unsafe { !sys::interface_fn!(object_get_instance_from_id)(id.to_u64()).is_null() },
            None => false,
        }
    }

    pub(crate) fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.obj
    }

    /// Reinterprets the pointer as another class, without touching the reference count.
    ///
    /// The caller takes over the reference held by `self`.
    pub(super) fn transfer_to<U: GodotClass>(self) -> RawGd<U> {
        let this = ManuallyDrop::new(self);

        RawGd {
            obj: this.obj,
            instance_id: this.instance_id,
            _marker: PhantomData,
        }
    }

    /// Runs `apply` with a `RefCounted` view of this object.
    ///
    /// # Panics
    /// In debug builds, if the object is null or not ref-counted.
    pub(super) fn with_ref_counted<R>(&self, apply: impl FnOnce(&mut classes::RefCounted) -> R) -> R {
        debug_assert!(!self.is_null(), "with_ref_counted() on null object");
        debug_assert!(
            self.instance_id.is_some_and(|id| id.is_ref_counted()),
            "with_ref_counted() on object that is not ref-counted"
        );

        // Weak alias: ManuallyDrop ensures the reference held by `self` is not released twice.
        let mut alias = ManuallyDrop::new(RawGd::<classes::RefCounted> {
            obj: self.obj,
            instance_id: self.instance_id,
            _marker: PhantomData,
        });

        // SAFETY: `RawGd<RefCounted>` has the same layout as `RefCounted` (both `repr(C)` pointer + ID).
        let refc = unsafe { &mut *(ptr::addr_of_mut!(*alias) as *mut classes::RefCounted) };
        apply(refc)
    }
}

// SAFETY: an object is passed to and returned from ptrcalls as `ObjectPtr`, which is what `sys()` points to.
unsafe impl<T: GodotClass> GodotFfi for RawGd<T> {
    unsafe fn new_from_sys(ptr: sys::GDExtensionConstTypePtr) -> Self {
        let obj_ptr = *(ptr as *const sys::GDExtensionObjectPtr);
        Self::from_obj_sys_weak(obj_ptr)
    }

    unsafe fn new_with_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        Self::new_with_init(init_fn)
    }

    /// Return slot for objects. The engine writes an object pointer, or leaves null.
    ///
    /// Returned ref-counted objects are borrowed from the engine, so the new `RawGd` takes its own reference.
    unsafe fn new_with_init(init_fn: impl FnOnce(sys::GDExtensionTypePtr)) -> Self {
        let mut obj_ptr: sys::GDExtensionObjectPtr = ptr::null_mut();
        init_fn(ptr::addr_of_mut!(obj_ptr) as sys::GDExtensionTypePtr);

        Self::from_obj_sys(obj_ptr)
    }

    fn sys(&self) -> sys::GDExtensionConstTypePtr {
        ptr::addr_of!(self.obj) as sys::GDExtensionConstTypePtr
    }

    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr {
        ptr::addr_of_mut!(self.obj) as sys::GDExtensionTypePtr
    }
}

impl<T: GodotClass> Clone for RawGd<T> {
    fn clone(&self) -> Self {
        out!("RawGd::clone");

        if self.is_null() {
            return Self::null();
        }

        let copy = Self {
            obj: self.obj,
            instance_id: self.instance_id,
            _marker: PhantomData,
        };
        <T as Bounds>::DynMemory::maybe_inc_ref(&copy);
        copy
    }
}

impl<T: GodotClass> Drop for RawGd<T> {
    fn drop(&mut self) {
        // No-op for manually managed objects.

        out!("RawGd::drop <{}>", std::any::type_name::<T>());

        // SAFETY: this `RawGd` holds exactly one reference, released here.
        let is_last = unsafe { <T as Bounds>::DynMemory::maybe_dec_ref(self) };
        if is_last {
            out!("  +-- destroy object {:?}", self.instance_id);

            // SAFETY: the count reached zero, no one else references the object.
            unsafe { sys::interface_fn!(object_destroy)(self.obj) };
        }
    }
}

impl<T: GodotClass> fmt::Debug for RawGd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "{} {{ null obj }}", std::any::type_name::<T>());
        }

        f.debug_struct("RawGd")
            .field("class", &T::class_name())
            .field("id", &self.instance_id)
            .finish()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{Label, Resource};

    sys::static_assert_eq_size_align!(RawGd<Label>, Label);
    sys::static_assert_eq_size_align!(RawGd<Resource>, Resource);

    #[test]
    fn null_raw_gd() {
        // Null objects never touch the engine, so this runs without one.
        let raw = RawGd::<Resource>::null();

        assert!(raw.is_null());
        assert!(!raw.is_instance_valid());
        assert_eq!(raw.instance_id_unchecked(), None);
        assert!(format!("{raw:?}").contains("null obj"));

        let copy = raw.clone();
        assert!(copy.is_null());
    }

    #[test]
    fn sys_points_to_object_pointer() {
        let raw = RawGd::<Label>::null();
        let slot = raw.sys() as *const sys::GDExtensionObjectPtr;

        assert!(unsafe { *slot }.is_null());
    }
}
