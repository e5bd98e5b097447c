/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use crate::obj::{Gd, GodotClass, Inherits, RawGd};
use crate::sys;

/// Objects that can be passed as arguments to Godot engine functions.
///
/// This trait is implemented for the following types:
/// - `&Gd<T>`, to pass objects. Subclasses of `T` are explicitly supported.
/// - `Option<&Gd<T>>` and `&Option<Gd<T>>`, to pass optional objects. `None` is mapped to a null argument.
/// - [`Gd::null_arg()`], to pass `null` without naming a concrete object.
///
/// <div class="warning">
/// The class database does not provide information about nullability of parameters. It is up to you to verify that the
/// arguments you pass are only null when this is allowed.
/// </div>
#[diagnostic::on_unimplemented(
    message = "Argument of type `{Self}` cannot be passed to an `impl AsObjectArg<{T}>` parameter",
    note = "if you pass by value, consider borrowing instead",
    note = "the object class must inherit `{T}`"
)]
pub trait AsObjectArg<T>
where
    T: GodotClass,
{
    #[doc(hidden)]
    fn into_object_arg<'r>(self) -> ObjectArg<'r, T>
    where
        Self: 'r;
}

impl<'a, T, U> AsObjectArg<T> for &'a Gd<U>
where
    T: GodotClass,
    U: Inherits<T>,
{
    fn into_object_arg<'r>(self) -> ObjectArg<'r, T>
    where
        Self: 'r,
    {
        ObjectArg::from_raw_gd(&self.raw)
    }
}

impl<'a, T, U> AsObjectArg<T> for Option<&'a Gd<U>>
where
    T: GodotClass,
    U: Inherits<T>,
{
    fn into_object_arg<'r>(self) -> ObjectArg<'r, T>
    where
        Self: 'r,
    {
        match self {
            Some(gd) => gd.into_object_arg(),
            None => ObjectArg::null(),
        }
    }
}

impl<'a, T, U> AsObjectArg<T> for &'a Option<Gd<U>>
where
    T: GodotClass,
    U: Inherits<T>,
{
    fn into_object_arg<'r>(self) -> ObjectArg<'r, T>
    where
        Self: 'r,
    {
        self.as_ref().into_object_arg()
    }
}

impl<T> AsObjectArg<T> for ObjectNullArg<T>
where
    T: GodotClass,
{
    fn into_object_arg<'r>(self) -> ObjectArg<'r, T>
    where
        Self: 'r,
    {
        ObjectArg::null()
    }
}

/// Forwarding of already converted arguments.
impl<T> AsObjectArg<T> for ObjectArg<'_, T>
where
    T: GodotClass,
{
    fn into_object_arg<'r>(self) -> ObjectArg<'r, T>
    where
        Self: 'r,
    {
        self
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Typed `null` argument, created by [`Gd::null_arg()`].
pub struct ObjectNullArg<T> {
    _marker: PhantomData<*mut T>,
}

impl<T: GodotClass> Gd<T> {
    /// Returns an argument that passes `null` to an object parameter of class `T`.
    ///
    /// ```no_run
    /// # use gdbind_core::obj::Gd;
    /// # use gdbind_core::classes::{Material, Control};
    /// # fn demo(mut control: Gd<Control>) {
    /// control.set_material(Gd::<Material>::null_arg());
    /// # }
    /// ```
    pub fn null_arg() -> ObjectNullArg<T> {
        ObjectNullArg {
            _marker: PhantomData,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// View for object arguments passed to the Godot engine. Never owning; must be null or backed by a `Gd<T>` that outlives `'r`.
///
/// In a ptrcall, the argument slot points to the object pointer stored in this struct.
#[doc(hidden)]
pub struct ObjectArg<'r, T> {
    object_ptr: sys::GDExtensionObjectPtr,
    _marker: PhantomData<&'r T>,
}

impl<'r, T> ObjectArg<'r, T>
where
    T: GodotClass,
{
    /// # Panics
    /// In debug builds, if the object has been freed.
    fn from_raw_gd<U: GodotClass>(raw: &'r RawGd<U>) -> Self {
        #[cfg(debug_assertions)]
        if !raw.is_null() && !raw.is_instance_valid() {
            panic!(
                "cannot pass freed object of class {} (ID {:?}) as argument",
                U::class_name(),
                raw.instance_id_unchecked()
            );
        }

        Self {
            object_ptr: raw.obj_sys(),
            _marker: PhantomData,
        }
    }
}

impl<T> ObjectArg<'_, T> {
    pub fn null() -> Self {
        Self {
            object_ptr: ptr::null_mut(),
            _marker: PhantomData,
        }
    }

    pub fn is_null(&self) -> bool {
        self.object_ptr.is_null()
    }

    pub(crate) fn arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        // Godot's ptrcall convention for objects: the argument is a pointer to the object pointer.
        ptr::addr_of!(self.object_ptr) as sys::GDExtensionConstTypePtr
    }
}

impl<T> fmt::Debug for ObjectArg<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectArg({:?})", self.object_ptr)
    }
}
