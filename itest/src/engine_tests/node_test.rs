/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::{Button, HBoxContainer, Label, VBoxContainer};
use gdbind::prelude::*;

use crate::framework::engine;
use crate::framework::init;

#[test]
fn node_add_get_remove_child() {
    init();

    let mut root = VBoxContainer::new_alloc();
    let mut row = HBoxContainer::new_alloc();
    let label = Label::new_alloc();
    let button = Button::new_alloc();

    row.add_child(&label);
    row.add_child(&button);
    root.add_child(&row);

    assert_eq!(row.get_child_count(), 2);
    assert_eq!(row.get_child(1), Some(button.clone().upcast::<Node>()));
    assert_eq!(row.get_child(-2), Some(label.clone().upcast::<Node>()));
    assert_eq!(label.get_parent(), Some(row.clone().upcast::<Node>()));
    assert_eq!(button.get_index(), 1);

    row.remove_child(&label);
    assert_eq!(row.get_child_count(), 1);
    assert_eq!(label.get_parent(), None);
    assert_eq!(label.get_index(), -1);
    assert_eq!(button.get_index(), 0);

    root.free();
    assert!(!row.is_instance_valid());
    assert!(!button.is_instance_valid());
    assert!(label.is_instance_valid(), "removed child survives");

    label.free();
}

#[test]
fn node_get_child_out_of_bounds() {
    init();

    let mut parent = Node::new_alloc();
    let child = Node::new_alloc();
    parent.add_child(&child);

    assert_eq!(parent.get_child(7), None);
    assert!(engine::log_contains(
        "Index p_index = 7 is out of bounds (child count = 1)"
    ));

    parent.free();
}

#[test]
fn node_add_child_errors_reported_by_engine() {
    init();

    let mut parent = Node::new_alloc();
    let mut other = Node::new_alloc();
    let child = Node::new_alloc();
    parent.add_child(&child);

    // Re-parenting without removal is rejected; the child stays where it was.
    other.add_child(&child);
    assert_eq!(other.get_child_count(), 0);
    assert_eq!(child.get_parent(), Some(parent.clone()));
    assert!(engine::log_contains(&format!(
        "already has a parent {}",
        parent.instance_id()
    )));

    let self_ref = parent.clone();
    parent.add_child(&self_ref);
    assert_eq!(parent.get_child_count(), 1);

    parent.add_child(Gd::<Node>::null_arg());
    assert!(engine::log_contains("parameter \"p_child\" is null"));

    parent.free();
    other.free();
}

#[test]
fn node_free_parent_frees_children() {
    init();

    let mut parent = Node::new_alloc();
    let mut middle = Node::new_alloc();
    let leaf = Label::new_alloc();

    middle.add_child(&leaf);
    parent.add_child(&middle);

    let ids = [middle.instance_id(), leaf.instance_id()];
    parent.free();

    for id in ids {
        assert!(!engine::is_alive(id));
        assert_eq!(engine::destroy_count(id), 1);
    }
}

#[test]
fn node_free_child_detaches() {
    init();

    let mut parent = Node::new_alloc();
    let child = Node::new_alloc();
    parent.add_child(&child);

    child.free();

    assert_eq!(parent.get_child_count(), 0);
    parent.free();
}
