/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Per-class and per-method exceptions to the generic mapping rules.

/// Methods that are generated, but only visible inside the crate.
///
/// Reference counting is driven by `Gd<T>`; calling these manually would break its bookkeeping.
#[rustfmt::skip]
pub fn is_class_method_private(class_name: &str, method_name: &str) -> bool {
    matches!(
        (class_name, method_name),
        | ("RefCounted", "init_ref")
        | ("RefCounted", "reference")
        | ("RefCounted", "unreference")
    )
}
