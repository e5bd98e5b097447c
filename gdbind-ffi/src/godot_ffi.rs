/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Types that can directly and fully represent some Godot type in a ptrcall.
///
/// Adds methods to convert from and to Godot FFI pointers.
/// See [crate::ffi_methods] for ergonomic implementation.
///
/// # Safety
///
/// The pointer returned by [`sys()`](GodotFfi::sys) must point to a value laid out the way the engine expects
/// for this type. [`new_with_init()`](GodotFfi::new_with_init) must hand out a pointer to an *initialized* value.
#[doc(hidden)] // shows up in implementors otherwise
pub unsafe trait GodotFfi {
    /// Construct from Godot opaque pointer, by bitwise copy.
    ///
    /// # Safety
    /// `ptr` must be a valid _type ptr_: it must follow Godot's convention to encode `Self`.
    /// The value behind `ptr` is not cleaned up; ownership semantics are up to the caller.
    unsafe fn new_from_sys(ptr: sys::GDExtensionConstTypePtr) -> Self;

    /// Construct uninitialized opaque data, then initialize it with `init_fn` function.
    ///
    /// # Safety
    /// `init_fn` must fully initialize the value behind the (uninitialized) _type ptr_.
    unsafe fn new_with_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self;

    /// Like [`Self::new_with_uninit`], but starts from a default-constructed value that `init_fn` assigns to.
    ///
    /// Ptrcall return slots are such pre-initialized values: the engine assigns into them instead of constructing.
    ///
    /// # Safety
    /// `init_fn` must leave a valid value behind the _type ptr_.
    unsafe fn new_with_init(init_fn: impl FnOnce(sys::GDExtensionTypePtr)) -> Self;

    /// Return Godot opaque pointer, for an immutable operation.
    fn sys(&self) -> sys::GDExtensionConstTypePtr;

    /// Return Godot opaque pointer, for a mutable operation.
    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr;

    /// Pointer passed in the argument array of a ptrcall.
    fn as_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        self.sys()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros to choose a certain implementation of `GodotFfi` trait for GDExtensionTypePtr.

/// Provides "sys" style methods for FFI and ptrcall integration with Godot.
///
/// The generated implementations follow one of two patterns:
///
/// * `*mut Self`<br>
///   Implements FFI methods for a type whose Rust layout is exactly the engine layout (e.g. `i64`, `Vector2`).
///   The address of `self` is used as the sys pointer. Requires `Default`.
///
/// * `*mut Opaque`<br>
///   Implements FFI methods for a type with `Opaque` data that the engine manages (e.g. `GString`).
///   The address of the `Opaque` field is used as the sys pointer.
///   Expects a `from_opaque()` constructor, an `opaque` field and a `Default` impl.
#[macro_export]
macro_rules! ffi_methods {
    (type $Ptr:ty = *mut Self;) => {
        unsafe fn new_from_sys(ptr: $crate::GDExtensionConstTypePtr) -> Self {
            std::ptr::read(ptr as *const Self)
        }

        unsafe fn new_with_uninit(init_fn: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::<Self>::uninit();
            init_fn(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            raw.assume_init()
        }

        unsafe fn new_with_init(init_fn: impl FnOnce($crate::GDExtensionTypePtr)) -> Self {
            let mut value = <Self as Default>::default();
            init_fn(&mut value as *mut Self as $Ptr);

            value
        }

        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            self as *const Self as $crate::GDExtensionConstTypePtr
        }

        fn sys_mut(&mut self) -> $crate::GDExtensionTypePtr {
            self as *mut Self as $Ptr
        }
    };

    (type $Ptr:ty = *mut Opaque;) => {
        unsafe fn new_from_sys(ptr: $crate::GDExtensionConstTypePtr) -> Self {
            let opaque = std::ptr::read(ptr as *const _);
            Self::from_opaque(opaque)
        }

        unsafe fn new_with_uninit(init_fn: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::uninit();
            init_fn(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            Self::from_opaque(raw.assume_init())
        }

        unsafe fn new_with_init(init_fn: impl FnOnce($crate::GDExtensionTypePtr)) -> Self {
            let mut value = <Self as Default>::default();
            init_fn(std::ptr::addr_of_mut!(value.opaque) as $Ptr);

            value
        }

        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            std::ptr::addr_of!(self.opaque) as $crate::GDExtensionConstTypePtr
        }

        fn sys_mut(&mut self) -> $crate::GDExtensionTypePtr {
            std::ptr::addr_of_mut!(self.opaque) as $Ptr
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementations for common types (for now, just primitive types)

macro_rules! impl_godot_as_self {
    ($($T:ty),* $(,)?) => {
        $(
            // SAFETY: these types are laid out in ptrcalls exactly as in Rust.
            unsafe impl GodotFfi for $T {
                ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
            }
        )*
    };
}

// Engine ptrcalls encode every integer as int64_t, every float as double and bool as a 1-byte value.
// `()` stands for void returns; the engine does not touch the return pointer.
impl_godot_as_self!(i64, f64, bool, ());

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_initialized_through_pointer() {
        let value = unsafe {
            i64::new_with_init(|ptr| {
                *(ptr as *mut i64) = -77;
            })
        };

        assert_eq!(value, -77);
    }

    #[test]
    fn init_starts_from_default() {
        let value = unsafe { f64::new_with_init(|_ptr| {}) };
        assert_eq!(value, 0.0);

        let flag = unsafe { bool::new_with_init(|_ptr| {}) };
        assert!(!flag);
    }

    #[test]
    fn sys_points_to_value() {
        let mut value: i64 = 12;
        let ptr = value.sys_mut();

        unsafe {
            *(ptr as *mut i64) += 30;
        }
        assert_eq!(value, 42);

        let copy = unsafe { i64::new_from_sys(value.sys()) };
        assert_eq!(copy, 42);
        assert_eq!(value.as_arg_ptr(), value.sys());
    }
}
