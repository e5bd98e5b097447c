/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Godot global enums and logging macros.
//!
//! Enums in this module are not tied to a class, e.g. [`Side`] or [`HorizontalAlignment`].

mod print;

pub use crate::gen::central::global_enums::*;
pub use crate::{godot_error, godot_script_error, godot_warn};
