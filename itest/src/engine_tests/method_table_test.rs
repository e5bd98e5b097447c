/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::sys;

use crate::framework::{engine, expect_panic, init};

fn load(class: &'static str, method: &'static str, hash: i64) -> sys::ClassMethodBind {
    let get_method_bind = sys::interface_fn!(classdb_get_method_bind);
    let mut string_names = sys::StringCache::new(sys::get_interface(), sys::builtin_lifecycle_api());
    let class_sname = string_names.fetch(class);

    sys::load_class_method(get_method_bind, &mut string_names, class_sname, class, method, hash)
}

#[test]
fn method_table_loaded() {
    init();

    let table = sys::class_method_table();

    assert!(!table.label__set_text.is_null());
    assert!(!table.node__add_child.is_null());
    assert!(!table.ref_counted__init_ref.is_null());
    assert!(!table.placeholder_texture_2d__set_size.is_null());
    assert!(sys::ClassMethodTable::METHOD_COUNT > sys::ClassMethodTable::CLASS_COUNT);
}

#[test]
fn method_table_resolves_with_matching_hash() {
    init();

    let bind = load("Label", "set_text", 83702148);
    assert!(!bind.is_null());
}

#[test]
fn method_table_hash_mismatch_panics() {
    init();

    let msg = expect_panic("wrong hash", || {
        load("Label", "set_text", 12345);
    });

    assert_eq!(msg, "Failed to load class method Label::set_text (hash 12345).");
    assert!(engine::log_contains("but 12345 was requested"));
}

#[test]
fn method_table_unknown_method_panics() {
    init();

    let msg = expect_panic("unknown method", || {
        load("Label", "set_marquee", 1);
    });

    assert_eq!(msg, "Failed to load class method Label::set_marquee (hash 1).");
    assert!(engine::log_contains("Method 'Label::set_marquee' not found"));
}
