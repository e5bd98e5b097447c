/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Types and traits related to objects.
//!
//! The most important symbol in this module is [`Gd`], which is the smart pointer through which engine objects are accessed.

mod gd;
mod instance_id;
mod raw_gd;
mod traits;

pub mod bounds;

pub use gd::*;
pub use instance_id::*;
pub use raw_gd::*;
pub use traits::*;

pub use bounds::private::Bounds;
