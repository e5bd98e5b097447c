/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::prelude::*;
use proptest::prelude::*;

use crate::framework::init;

#[test]
fn string_default_is_empty() {
    init();

    let string = GString::new();
    assert!(string.is_empty());
    assert_eq!(string.len_utf8(), 0);
    assert_eq!(string, GString::default());
}

#[test]
fn string_conversions() {
    init();

    let string = String::from("some string");
    let second = GString::from(&string);
    let back = String::from(&second);

    assert_eq!(string, back);
    assert_eq!(second, "some string");
    assert_eq!(second.len_utf8(), 11);

    let parsed: GString = "parsed".parse().expect("infallible");
    assert_eq!(parsed.to_string(), "parsed");
}

#[test]
fn string_clone_is_independent() {
    init();

    let original = GString::from("first");
    let copy = original.clone();
    drop(original);

    assert_eq!(copy, "first");
}

#[test]
fn string_name_conversions() {
    init();

    let name = StringName::from("node_name");
    let as_string = GString::from(&name);
    let back = StringName::from(&as_string);

    assert_eq!(as_string, "node_name");
    assert_eq!(back, name);
    assert_eq!(String::from(back), "node_name");
    assert!(StringName::default().is_empty());
}

#[test]
fn string_debug_display() {
    init();

    let string = GString::from("text");
    let name = StringName::from("text");

    assert_eq!(format!("{string}"), "text");
    assert_eq!(format!("{string:?}"), "\"text\"");
    assert_eq!(format!("{name}"), "text");
    assert_eq!(format!("{name:?}"), "&\"text\"");
}

#[test]
fn string_unicode() {
    init();

    let text = "Ünïcödé ✓ 日本語 🦀";
    let string = GString::from(text);

    assert_eq!(string.to_string(), text);
    assert_eq!(string.len_utf8(), text.len());
}

proptest! {
    #[test]
    fn string_roundtrip_any_text(text in any::<String>()) {
        init();

        let string = GString::from(text.as_str());
        prop_assert_eq!(string.to_string(), text.clone());

        let name = StringName::from(&string);
        prop_assert_eq!(name.to_string(), text);
    }
}
