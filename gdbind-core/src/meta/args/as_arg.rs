/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{GString, StringName};
use crate::meta::CowArg;

/// Implicit conversions for arguments passed to Godot APIs.
///
/// An `impl AsArg<T>` parameter allows values to be passed which can be represented in the target type `T`. For string
/// parameters, all of the following work:
///
/// ```no_run
/// # use gdbind_core::builtin::GString;
/// # use gdbind_core::classes::Label;
/// # fn demo(label: &mut Label, owned: String, gstring: GString) {
/// label.set_text("literal");
/// label.set_text(&owned);
/// label.set_text(owned);
/// label.set_text(&gstring);
/// label.set_text(gstring);
/// # }
/// ```
///
/// Engine types are passed by reference without copy; Rust strings are converted once, right before the call.
#[diagnostic::on_unimplemented(
    message = "Argument of type `{Self}` cannot be passed to an `impl AsArg<{T}>` parameter",
    note = "if you pass by value, consider borrowing instead",
    note = "see also `AsArg` docs: https://docs.rs/gdbind/latest/gdbind/meta/trait.AsArg.html"
)]
pub trait AsArg<T>
where
    Self: Sized,
{
    #[doc(hidden)]
    fn into_arg<'r>(self) -> CowArg<'r, T>
    where
        Self: 'r;
}

/// Allows forwarding of `impl AsArg<T>` arguments, e.g. from extender setters.
impl<T> AsArg<T> for CowArg<'_, T> {
    fn into_arg<'r>(self) -> CowArg<'r, T>
    where
        Self: 'r,
    {
        self
    }
}

macro_rules! impl_asarg_by_value {
    ($T:ty) => {
        impl AsArg<$T> for $T {
            fn into_arg<'r>(self) -> CowArg<'r, $T> {
                CowArg::Owned(self)
            }
        }
    };
}

macro_rules! impl_asarg_by_ref {
    ($T:ty) => {
        impl<'a> AsArg<$T> for &'a $T {
            fn into_arg<'r>(self) -> CowArg<'r, $T>
            where
                Self: 'r,
            {
                CowArg::Borrowed(self)
            }
        }
    };
}

/// Converting impls: the argument is turned into an owned engine string.
macro_rules! impl_asarg_converted {
    ($T:ty: $( $From:ty ),+) => {
        $(
            impl AsArg<$T> for $From {
                fn into_arg<'r>(self) -> CowArg<'r, $T>
                where
                    Self: 'r,
                {
                    CowArg::Owned(<$T>::from(self))
                }
            }
        )+
    };
}

impl_asarg_by_value!(GString);
impl_asarg_by_ref!(GString);
impl_asarg_converted!(GString: &str, String, &String, &StringName);

impl_asarg_by_value!(StringName);
impl_asarg_by_ref!(StringName);
impl_asarg_converted!(StringName: &str, String, &String, &GString);
