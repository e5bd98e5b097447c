/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::{Button, Control, Label};
use gdbind::meta::ErrorKind;
use gdbind::prelude::*;

use crate::framework::{engine, expect_panic, init};

#[test]
fn object_new_alloc_free() {
    init();

    let label = Label::new_alloc();
    let id = label.instance_id();

    assert!(label.is_instance_valid());
    assert!(engine::is_alive(id));
    assert!(!id.is_ref_counted());

    label.free();

    assert!(!engine::is_alive(id));
    assert_eq!(engine::destroy_count(id), 1);
}

#[test]
fn object_drop_does_not_free_manual() {
    init();

    let node = Node::new_alloc();
    let id = node.instance_id();
    let copy = node.clone();

    drop(node);
    assert!(engine::is_alive(id));
    assert!(copy.is_instance_valid());

    copy.free();
    assert_eq!(engine::destroy_count(id), 1);
}

#[test]
fn object_double_free_panics() {
    init();

    let node = Node::new_alloc();
    let stale = node.clone();
    let id = node.instance_id();

    node.free();

    let msg = expect_panic("free() on destroyed object", move || stale.free());
    assert_eq!(msg, format!("called free() on already destroyed object {id}"));
    assert_eq!(engine::destroy_count(id), 1);
}

#[cfg(debug_assertions)]
#[test]
fn object_call_after_free_panics() {
    init();

    let label = Label::new_alloc();
    let mut stale = label.clone();
    let id = label.instance_id();
    label.free();

    let msg = expect_panic("set_text() on freed object", || stale.set_text("too late"));
    assert_eq!(
        msg,
        format!("in function `Label::set_text`: object with ID {id} has been freed")
    );
}

#[cfg(debug_assertions)]
#[test]
fn object_freed_argument_panics() {
    init();

    let mut parent = Node::new_alloc();
    let child = Node::new_alloc();
    let stale = child.clone();
    child.free();

    let msg = expect_panic("add_child() with freed argument", || parent.add_child(&stale));
    assert!(msg.starts_with("cannot pass freed object of class Node"), "{msg}");
    assert_eq!(parent.get_child_count(), 0);

    parent.free();
}

#[test]
fn object_instance_id_of_freed() {
    init();

    let node = Node::new_alloc();
    let stale = node.clone();
    let id = node.instance_id();
    node.free();

    assert!(!stale.is_instance_valid());
    assert_eq!(stale.instance_id_unchecked(), id);

    let msg = expect_panic("instance_id() on freed object", || {
        stale.instance_id();
    });
    assert_eq!(msg, format!("accessed instance ID of freed object {id}"));
}

#[test]
fn object_display_debug() {
    init();

    let label = Label::new_alloc();
    let id = label.instance_id();
    let node: Gd<Node> = label.clone().upcast();

    let expected = format!("Gd {{ id: {id}, class: Label }}");
    assert_eq!(label.to_string(), expected);
    assert_eq!(format!("{node:?}"), expected);

    label.free();
    assert_eq!(format!("{node}"), format!("Gd {{ id: {id}, class: Node (freed) }}"));
}

#[test]
fn object_equality() {
    init();

    let a = Node::new_alloc();
    let b = a.clone();
    let c = Node::new_alloc();

    assert_eq!(a, b);
    assert_ne!(a, c);

    a.free();
    c.free();

    // Identity is by instance ID, also after destruction.
    assert_eq!(b, b.clone());
}

#[test]
fn object_dynamic_class() {
    init();

    let obj: Gd<Object> = Button::new_alloc().upcast();

    assert_eq!(obj.dynamic_class_string(), "Button");
    assert_eq!(obj.get_class(), "Button");
    assert!(obj.is_class("Control"));
    assert!(!obj.is_class("Label"));
    assert!(obj.has_method("set_flat"));
    assert!(!obj.has_method("set_uppercase"));

    obj.free();
}

#[test]
fn object_from_instance_id() {
    init();

    let label = Label::new_alloc();
    let id = label.instance_id();

    let same = Gd::<Label>::from_instance_id(id);
    assert_eq!(same, label);

    let as_base = Gd::<Control>::try_from_instance_id(id).expect("Label is a Control");
    assert_eq!(as_base.instance_id(), id);

    let err = Gd::<Resource>::try_from_instance_id(id).expect_err("Label is not a Resource");
    assert_eq!(
        err.kind(),
        &ErrorKind::WrongClass {
            expected: "Resource",
            actual: String::from("Label"),
        }
    );

    label.free();

    let err = Gd::<Label>::try_from_instance_id(id).expect_err("object is dead");
    assert_eq!(err.kind(), &ErrorKind::DeadObject);
    assert_eq!(err.value(), Some(format!("{id:?}").as_str()));

    let msg = expect_panic("from_instance_id() on dead object", || {
        Gd::<Label>::from_instance_id(id);
    });
    assert!(msg.starts_with(&format!("Gd::from_instance_id({id})")), "{msg}");
}

#[test]
fn object_instance_id_matches_engine() {
    init();

    let node = Node::new_alloc();
    let id = node.instance_id();

    assert_eq!(node.get_instance_id() as i64, id.to_i64());
    assert_eq!(InstanceId::try_from_i64(id.to_i64()), Some(id));

    node.free();
}
