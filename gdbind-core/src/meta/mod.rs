/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Meta-information about types and calls: conversions across the FFI boundary, argument passing and call frames.
//!
//! Each engine call goes through three steps:
//! 1. Parameters are converted into their FFI form: scalars through [`GodotType::into_ffi()`], strings through
//!    [`AsArg`] into a [`CowArg`], objects through [`AsObjectArg`] into an [`ObjectArg`].
//! 2. A [`CallFrame`] lays out pointers to these values and a default-initialized return slot, then invokes the method bind.
//! 3. The return slot is converted back with [`GodotType::try_from_ffi()`].

mod args;
mod call_frame;
mod class_name;
mod error;
mod godot_type;

pub use args::{AsArg, AsObjectArg, CowArg, ObjectArg, ObjectNullArg};
pub use call_frame::{CallContext, CallFrame, FfiArg, PtrcallArgs};
pub use class_name::ClassName;
pub use error::{ConvertError, ErrorKind};
pub use godot_type::GodotType;
