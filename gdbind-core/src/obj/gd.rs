/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Deref, DerefMut};

use sys::GodotFfi as _;

use crate::builtin::{GString, StringName};
use crate::meta::{ConvertError, ErrorKind};
use crate::obj::bounds::{self, DynMemory as _};
use crate::obj::{cap, Bounds, GodotClass, Inherits, InstanceId, RawGd};
use crate::sys;

/// Smart pointer to objects owned by the Godot engine.
///
/// This smart pointer can only hold _objects_ in the Godot sense: instances of engine classes such as `Node`, `Label`
/// or `BoxMesh`. The engine owns the native object; `Gd<T>` is a handle to it.
///
/// Memory management depends on the class, see [`bounds`](crate::obj::bounds):
/// - Objects of type [`RefCounted`][crate::classes::RefCounted] or inherited from it are **reference-counted**. Every `Gd`
///   holds one strong reference; the object is destroyed when the last `Gd` is dropped.
/// - Objects inheriting from [`Object`][crate::classes::Object] that are not `RefCounted` are **manually managed**.
///   Dropping a `Gd` does not destroy them; use [`Gd::free()`] or hand them to an owner (such as the scene tree).
///
/// Method calls go through `Deref`/`DerefMut` to the class itself, and from there along the inheritance chain.
/// In debug builds, every such call verifies that the object is still alive.
#[repr(C)] // must be layout-compatible with engine classes
pub struct Gd<T: GodotClass> {
    // Note: `raw` must be the only field, so `&Gd<T>` can be reinterpreted as `&T`.
    pub(crate) raw: RawGd<T>,
}

// Sanity check: a generated class has exactly the layout of `Gd<T>`.
sys::static_assert_eq_size_align!(Gd<crate::classes::Object>, crate::classes::Object);

impl<T> Gd<T>
where
    T: GodotClass,
{
    /// Wraps an engine object pointer, taking a reference if the object is ref-counted.
    ///
    /// # Safety
    /// `obj` must be a valid, non-null object pointer of class `T` (or a subclass).
    pub(crate) unsafe fn from_obj_sys(obj: sys::GDExtensionObjectPtr) -> Self {
        debug_assert!(!obj.is_null(), "Gd::from_obj_sys() with null pointer");

        Self {
            raw: RawGd::from_obj_sys(obj),
        }
    }

    /// Looks up the given instance ID and returns the associated object, if possible.
    ///
    /// # Errors
    /// - [`ErrorKind::DeadObject`] if no object with that ID exists (anymore).
    /// - [`ErrorKind::WrongClass`] if the object exists, but is not of class `T` or a subclass.
    pub fn try_from_instance_id(instance_id: InstanceId) -> Result<Self, ConvertError> {
        // SAFETY: lookup by ID is valid for any integer; dead IDs yield null.
        let obj_ptr = unsafe { sys::interface_fn!(object_get_instance_from_id)(instance_id.to_u64()) };

        if obj_ptr.is_null() {
            return Err(ConvertError::with_kind_value(
                ErrorKind::DeadObject,
                instance_id,
            ));
        }

        // SAFETY: obj_ptr is a live object returned by the engine.
        let cast_ptr = unsafe { cast_object_ptr::<T>(obj_ptr) };

        if cast_ptr.is_null() {
            // SAFETY: see above.
            let actual = unsafe { dynamic_class_name(obj_ptr) };

            return Err(ConvertError::with_kind(ErrorKind::WrongClass {
                expected: T::class_name().as_str(),
                actual,
            }));
        }

        // SAFETY: the engine confirmed class `T`.
        Ok(unsafe { Self::from_obj_sys(cast_ptr) })
    }

    /// ⚠️ Looks up the given instance ID and returns the associated object.
    ///
    /// # Panics
    /// If no such instance ID is registered, or if the object is not of class `T` (or a subclass).
    pub fn from_instance_id(instance_id: InstanceId) -> Self {
        Self::try_from_instance_id(instance_id).unwrap_or_else(|err| {
            panic!("Gd::from_instance_id({instance_id}): {err}")
        })
    }

    /// ⚠️ Returns the instance ID of this object.
    ///
    /// # Panics
    /// If the object has been destroyed. Use [`instance_id_unchecked()`][Self::instance_id_unchecked] to obtain the
    /// cached ID anyway.
    pub fn instance_id(&self) -> InstanceId {
        let id = self.instance_id_unchecked();
        assert!(
            self.is_instance_valid(),
            "accessed instance ID of freed object {id}"
        );

        id
    }

    /// Returns the last known, possibly invalid instance ID of this object.
    ///
    /// This function does not check that the returned instance ID points to a valid instance.
    pub fn instance_id_unchecked(&self) -> InstanceId {
        // A non-null object always got an ID from the engine.
        match self.raw.instance_id_unchecked() {
            Some(id) => id,
            None => unreachable!("Gd<T> without instance ID"),
        }
    }

    /// Checks if this smart pointer points to a live object (read description!).
    ///
    /// Using this method is often indicative of bad design -- you should dispose of your pointers once an object is
    /// destroyed. However, this method exists because GDScript offers it and there may be **rare** use cases.
    pub fn is_instance_valid(&self) -> bool {
        self.raw.is_instance_valid()
    }

    /// Returns the dynamic class name of the object, as registered in the engine.
    ///
    /// This may be a subclass of `T`: for a `Gd<Control>`, this may return `"Button"`.
    ///
    /// # Panics
    /// If the object has been destroyed.
    pub fn dynamic_class_string(&self) -> String {
        assert!(
            self.is_instance_valid(),
            "dynamic_class_string() called on freed object {}",
            self.instance_id_unchecked()
        );

        // SAFETY: the object is alive.
        unsafe { dynamic_class_name(self.raw.obj_sys()) }
    }

    /// **Upcast:** convert into a smart pointer to a base class. Always succeeds.
    ///
    /// Moves out of this value. If you want to create _another_ smart pointer instance,
    /// use this idiom:
    /// ```no_run
    /// # use gdbind_core::obj::{Gd, NewAlloc};
    /// # use gdbind_core::classes::{Label, Node};
    /// let label: Gd<Label> = Label::new_alloc();
    /// let node: Gd<Node> = label.clone().upcast();
    /// ```
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        Gd {
            raw: self.raw.transfer_to::<Base>(),
        }
    }

    /// **Downcast:** try to convert into a smart pointer to a derived class.
    ///
    /// If `T`'s dynamic type is not `Derived` or one of its subclasses, `Err(self)` is returned, meaning you can reuse the original
    /// object for further casts.
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Self>
    where
        Derived: GodotClass + Inherits<T>,
    {
        if !self.is_instance_valid() {
            return Err(self);
        }

        // SAFETY: the object is alive.
        let cast_ptr = unsafe { cast_object_ptr::<Derived>(self.raw.obj_sys()) };

        if cast_ptr.is_null() {
            Err(self)
        } else {
            // Same object, same reference: ownership moves into the new `Gd`.
            Ok(Gd {
                raw: self.raw.transfer_to::<Derived>(),
            })
        }
    }

    /// ⚠️ **Downcast:** convert into a smart pointer to a derived class. Panics on error.
    ///
    /// # Panics
    /// If the class' dynamic type is not `Derived` or one of its subclasses. Use [`Self::try_cast()`] if you want to check the result.
    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: GodotClass + Inherits<T>,
    {
        self.try_cast().unwrap_or_else(|from_obj| {
            panic!(
                "downcast from {from} to {to} failed; instance {from_obj:?}",
                from = T::class_name(),
                to = Derived::class_name(),
            )
        })
    }

    fn as_class_ref(&self) -> &T {
        // SAFETY: `Gd<T>` and `T` share the layout `{ object_ptr, instance_id }`, see `RawGd`.
        unsafe { &*(std::ptr::addr_of!(self.raw) as *const T) }
    }

    fn as_class_mut(&mut self) -> &mut T {
        // SAFETY: see `as_class_ref()`.
        unsafe { &mut *(std::ptr::addr_of_mut!(self.raw) as *mut T) }
    }
}

impl<T> Gd<T>
where
    T: GodotClass + Bounds<Memory = bounds::MemManual>,
{
    /// Destroy the manually-managed Godot object.
    ///
    /// Consumes this smart pointer and renders all other `Gd` smart pointers (as well as any GDScript references) to the same object
    /// immediately invalid. Using those `Gd` instances will lead to panics, but not undefined behavior.
    ///
    /// # Panics
    /// - When the referred-to object has already been destroyed.
    /// - When this is invoked on an upcast `Gd<Object>` that dynamically points to a reference-counted type (i.e. operation not supported).
    pub fn free(self) {
        // Runtime check in case of T=Object, no-op otherwise.
        let ref_counted = <T as Bounds>::DynMemory::is_ref_counted(&self.raw);
        assert_ne!(
            ref_counted,
            Some(true),
            "called free() on Gd<Object> which points to a RefCounted dynamic type; free() only supported for manually managed types\n\
            object: {self:?}"
        );

        assert!(
            self.is_instance_valid(),
            "called free() on already destroyed object {}",
            self.instance_id_unchecked()
        );

        // SAFETY: object is alive and manually managed, so nobody else destroys it.
        unsafe { sys::interface_fn!(object_destroy)(self.raw.obj_sys()) };

        // Dropping `self` afterwards is a no-op for manually managed objects.
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Trait impls

/// `Gd::default()` is only available for ref-counted classes; manually managed ones use `new_alloc()` to make the allocation visible.
impl<T> Default for Gd<T>
where
    T: cap::GodotDefault + Bounds<Memory = bounds::MemRefCounted>,
{
    fn default() -> Self {
        T::__godot_default()
    }
}

impl<T: GodotClass> Deref for Gd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.as_class_ref()
    }
}

impl<T: GodotClass> DerefMut for Gd<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.as_class_mut()
    }
}

impl<T: GodotClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
        }
    }
}

impl<T: GodotClass> PartialEq for Gd<T> {
    /// ⚠️ Returns whether two `Gd` pointers point to the same object.
    fn eq(&self, other: &Self) -> bool {
        self.instance_id_unchecked() == other.instance_id_unchecked()
    }
}

impl<T: GodotClass> Eq for Gd<T> {}

impl<T: GodotClass> fmt::Display for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_string(self, f)
    }
}

impl<T: GodotClass> fmt::Debug for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_string(self, f)
    }
}

fn display_string<T: GodotClass>(gd: &Gd<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let id = gd.instance_id_unchecked();

    if gd.is_instance_valid() {
        let class = gd.dynamic_class_string();
        write!(f, "Gd {{ id: {id}, class: {class} }}")
    } else {
        write!(f, "Gd {{ id: {id}, class: {} (freed) }}", T::class_name())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Engine helpers

/// Returns `obj` if it is an instance of `T` (or a subclass), null otherwise.
///
/// # Safety
/// `obj` must point to a live object.
unsafe fn cast_object_ptr<T: GodotClass>(obj: sys::GDExtensionObjectPtr) -> sys::GDExtensionObjectPtr {
    let class_sname = T::class_name().to_string_name();
    let class_tag = sys::interface_fn!(classdb_get_class_tag)(class_sname.sys());

    sys::interface_fn!(object_cast_to)(obj, class_tag)
}

/// # Safety
/// `obj` must point to a live object.
unsafe fn dynamic_class_name(obj: sys::GDExtensionObjectPtr) -> String {
    // A default StringName is the null string; the engine overwrites it in place.
    let mut class_name = StringName::default();
    let found = sys::interface_fn!(object_get_class_name)(obj, sys::get_library(), class_name.sys_mut());

    if found == sys::GDEXTENSION_FALSE {
        return String::from("(unknown)");
    }

    GString::from(&class_name).to_string()
}
