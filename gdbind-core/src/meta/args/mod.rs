/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Argument types accepted by generated engine methods.

mod as_arg;
mod cow_arg;
mod object_arg;

pub use as_arg::AsArg;
pub use cow_arg::CowArg;
pub use object_arg::{AsObjectArg, ObjectArg, ObjectNullArg};
