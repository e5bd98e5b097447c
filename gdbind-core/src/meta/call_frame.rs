/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use gdbind_ffi::GodotFfi;

use crate::builtin::{Color, Rect2, Vector2, Vector3};
use crate::meta::{ConvertError, CowArg, GodotType, ObjectArg};
use crate::obj::InstanceId;
use crate::{out, sys};

/// Names the engine method being called, for error messages and tracing.
///
/// Displayed as `Class::method`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[doc(hidden)]
pub struct CallContext {
    class_name: &'static str,
    function_name: &'static str,
}

impl CallContext {
    pub const fn new(class_name: &'static str, function_name: &'static str) -> Self {
        Self {
            class_name,
            function_name,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn function_name(&self) -> &'static str {
        self.function_name
    }
}

impl fmt::Display for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class_name, self.function_name)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Arguments

/// A value that can sit in the argument array of a ptrcall.
#[doc(hidden)]
pub trait FfiArg {
    /// Pointer stored in the argument array. Valid as long as `self` is not moved or dropped.
    fn ffi_arg_ptr(&self) -> sys::GDExtensionConstTypePtr;
}

macro_rules! impl_ffi_arg_via_godot_ffi {
    ($( $T:ty ),* $(,)?) => {
        $(
            impl FfiArg for $T {
                fn ffi_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
                    self.as_arg_ptr()
                }
            }
        )*
    };
}

impl_ffi_arg_via_godot_ffi!(i64, f64, bool, Vector2, Vector3, Color, Rect2);

impl<T: GodotFfi> FfiArg for CowArg<'_, T> {
    fn ffi_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        self.cow_as_ref().as_arg_ptr()
    }
}

impl<T> FfiArg for ObjectArg<'_, T> {
    fn ffi_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        self.arg_ptr()
    }
}

/// Tuple of [`FfiArg`] values, the explicit arguments of one call.
#[doc(hidden)]
pub trait PtrcallArgs {
    /// Number of arguments.
    const LEN: usize;

    /// Calls `f` with the array of argument pointers. The pointers are only valid inside `f`.
    fn with_arg_ptrs<R>(&self, f: impl FnOnce(&[sys::GDExtensionConstTypePtr]) -> R) -> R;
}

macro_rules! impl_ptrcall_args {
    ($len:literal; $( $P:ident : $p:ident ),*) => {
        impl<$( $P: FfiArg ),*> PtrcallArgs for ($( $P, )*) {
            const LEN: usize = $len;

            #[allow(unused_variables)]
            fn with_arg_ptrs<R>(&self, f: impl FnOnce(&[sys::GDExtensionConstTypePtr]) -> R) -> R {
                let ($( $p, )*) = self;
                let arg_ptrs: [sys::GDExtensionConstTypePtr; $len] = [$( $p.ffi_arg_ptr() ),*];

                f(&arg_ptrs)
            }
        }
    };
}

impl_ptrcall_args!(0;);
impl_ptrcall_args!(1; P0: p0);
impl_ptrcall_args!(2; P0: p0, P1: p1);
impl_ptrcall_args!(3; P0: p0, P1: p1, P2: p2);
impl_ptrcall_args!(4; P0: p0, P1: p1, P2: p2, P3: p3);
impl_ptrcall_args!(5; P0: p0, P1: p1, P2: p2, P3: p3, P4: p4);
impl_ptrcall_args!(6; P0: p0, P1: p1, P2: p2, P3: p3, P4: p4, P5: p5);
impl_ptrcall_args!(7; P0: p0, P1: p1, P2: p2, P3: p3, P4: p4, P5: p5, P6: p6);
impl_ptrcall_args!(8; P0: p0, P1: p1, P2: p2, P3: p3, P4: p4, P5: p5, P6: p6, P7: p7);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Call frame

/// Transient state of one outbound engine call.
///
/// Owns the FFI-ready argument tuple for the duration of the call. Strings converted from Rust types (`CowArg::Owned`) are
/// destroyed when the frame is consumed, after the return value has been read.
#[doc(hidden)]
pub struct CallFrame<P> {
    ctx: CallContext,
    args: P,
}

impl<P: PtrcallArgs> CallFrame<P> {
    pub fn new(ctx: CallContext, args: P) -> Self {
        Self { ctx, args }
    }

    pub fn context(&self) -> &CallContext {
        &self.ctx
    }

    /// Invokes `method_bind` on `object_ptr` and converts the result into `R`.
    ///
    /// # Panics
    /// - In debug builds, if the object has been freed.
    /// - If the returned value does not fit `R`, e.g. an out-of-range integer or an unknown enum ordinal.
    ///
    /// # Safety
    /// `method_bind` must belong to the class of `object_ptr` (or a base), and expect exactly the arguments `P` and the return
    /// type `R` in their FFI representation.
    pub unsafe fn out_ptrcall<R: GodotType>(
        self,
        method_bind: sys::ClassMethodBind,
        object_ptr: sys::GDExtensionObjectPtr,
        instance_id: Option<InstanceId>,
    ) -> R {
        #[cfg(debug_assertions)]
        check_alive(&self.ctx, object_ptr, instance_id);
        #[cfg(not(debug_assertions))]
        let _ = instance_id;

        out!("ptrcall {} with {} args", self.ctx, P::LEN);

        let ptrcall = sys::interface_fn!(object_method_bind_ptrcall);
        let ffi = self.args.with_arg_ptrs(|arg_ptrs| {
            <R::Ffi as GodotFfi>::new_with_init(|return_ptr| {
                ptrcall(method_bind.0, object_ptr, arg_ptrs.as_ptr(), return_ptr);
            })
        });

        R::try_from_ffi(ffi).unwrap_or_else(|err| return_error::<R>(&self.ctx, err))
    }

    /// Calls a static method: same as [`out_ptrcall()`](Self::out_ptrcall), with a null instance and no liveness check.
    ///
    /// # Safety
    /// `method_bind` must be a static method expecting exactly the arguments `P` and the return type `R`.
    pub unsafe fn out_static_ptrcall<R: GodotType>(self, method_bind: sys::ClassMethodBind) -> R {
        out!("static ptrcall {} with {} args", self.ctx, P::LEN);

        let ptrcall = sys::interface_fn!(object_method_bind_ptrcall);
        let ffi = self.args.with_arg_ptrs(|arg_ptrs| {
            <R::Ffi as GodotFfi>::new_with_init(|return_ptr| {
                ptrcall(method_bind.0, std::ptr::null_mut(), arg_ptrs.as_ptr(), return_ptr);
            })
        });

        R::try_from_ffi(ffi).unwrap_or_else(|err| return_error::<R>(&self.ctx, err))
    }
}

fn return_error<R>(call_ctx: &CallContext, err: ConvertError) -> ! {
    let return_ty = std::any::type_name::<R>();
    panic!("in function `{call_ctx}` at return type {return_ty}: {err}");
}

/// Verifies that the object is still alive before calling into it.
#[cfg(debug_assertions)]
fn check_alive(
    call_ctx: &CallContext,
    object_ptr: sys::GDExtensionObjectPtr,
    instance_id: Option<InstanceId>,
) {
    let Some(instance_id) = instance_id else {
        assert!(
            !object_ptr.is_null(),
            "in function `{call_ctx}`: called on null object"
        );
        return;
    };

    // SAFETY: lookup by ID is valid for any ID, including ones of freed objects.
    let live_ptr = unsafe { sys::interface_fn!(object_get_instance_from_id)(instance_id.to_u64()) };

    assert!(
        !live_ptr.is_null(),
        "in function `{call_ctx}`: object with ID {instance_id} has been freed"
    );
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_display() {
        let ctx = CallContext::new("Label", "set_text");

        assert_eq!(ctx.to_string(), "Label::set_text");
        assert_eq!(ctx.class_name(), "Label");
        assert_eq!(ctx.function_name(), "set_text");
    }

    #[test]
    fn arg_pointers_in_order() {
        let args = (5_i64, true, 2.5_f64);

        let values = args.with_arg_ptrs(|ptrs| unsafe {
            assert_eq!(ptrs.len(), 3);
            (
                *(ptrs[0] as *const i64),
                *(ptrs[1] as *const bool),
                *(ptrs[2] as *const f64),
            )
        });

        assert_eq!(values, (5, true, 2.5));
        assert_eq!(<(i64, bool, f64) as PtrcallArgs>::LEN, 3);
    }

    #[test]
    fn empty_args() {
        let count = ().with_arg_ptrs(|ptrs| ptrs.len());
        assert_eq!(count, 0);
    }

    #[test]
    fn null_object_arg_points_to_null() {
        let arg = ObjectArg::<crate::classes::Node>::null();

        let inner = (arg,).with_arg_ptrs(|ptrs| unsafe { *(ptrs[0] as *const sys::GDExtensionObjectPtr) });
        assert!(inner.is_null());
    }

    #[test]
    fn vector_arg_is_bitwise() {
        let args = (Vector2::new(1.0, 2.0), Color::WHITE);

        let (v, c) = args.with_arg_ptrs(|ptrs| unsafe {
            (*(ptrs[0] as *const Vector2), *(ptrs[1] as *const Color))
        });

        assert_eq!(v, Vector2::new(1.0, 2.0));
        assert_eq!(c, Color::WHITE);
    }
}
