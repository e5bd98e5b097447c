/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::{
    BaseButton, Button, CanvasItem, CheckBox, Control, Label, Mesh, PlaceholderTexture2D, Texture2D,
};
use gdbind::prelude::*;

use crate::framework::{engine, expect_panic, init};

#[test]
fn object_upcast() {
    init();

    let button = CheckBox::new_alloc();
    let id = button.instance_id();

    let base: Gd<BaseButton> = button.upcast();
    let node: Gd<Node> = base.clone().upcast();
    let object: Gd<Object> = node.upcast();

    assert_eq!(object.instance_id(), id);
    assert_eq!(object.dynamic_class_string(), "CheckBox");

    base.free();
    assert!(!engine::is_alive(id));
}

#[test]
fn object_try_cast() {
    init();

    let node: Gd<Node> = Button::new_alloc().upcast();
    let id = node.instance_id();

    let node = match node.try_cast::<Label>() {
        Ok(label) => panic!("Button cast to Label: {label}"),
        Err(node) => node,
    };
    assert_eq!(node.instance_id(), id, "failed cast returns the original object");

    let control = node.try_cast::<Control>().expect("Button is a Control");
    let button = control.try_cast::<Button>().expect("dynamic class is Button");
    assert_eq!(button.instance_id(), id);

    button.free();
}

#[test]
fn object_try_cast_freed() {
    init();

    let node: Gd<Node> = Button::new_alloc().upcast();
    let stale = node.clone();
    node.free();

    assert!(stale.try_cast::<Button>().is_err());
}

#[test]
fn object_cast_panics() {
    init();

    let node: Gd<Node> = Node::new_alloc();
    let keep = node.clone();

    let msg = expect_panic("cast Node to Button", || {
        node.cast::<Button>();
    });
    assert!(msg.starts_with("downcast from Node to Button failed"), "{msg}");

    keep.free();
}

#[test]
fn refcounted_cast() {
    init();

    let texture: Gd<Resource> = PlaceholderTexture2D::new_gd().upcast();
    let id = texture.instance_id();

    let texture = match texture.try_cast::<Mesh>() {
        Ok(mesh) => panic!("texture cast to Mesh: {mesh}"),
        Err(texture) => texture,
    };
    assert_eq!(engine::reference_count(id), Some(1));

    let texture = texture.cast::<Texture2D>();
    assert_eq!(engine::reference_count(id), Some(1), "casting keeps the single reference");

    drop(texture);
    assert!(!engine::is_alive(id));
}

#[test]
fn object_deref_to_base_methods() {
    init();

    let mut button = Button::new_alloc();
    let id = button.instance_id();

    button.set_flat(true); // Button
    button.set_disabled(true); // BaseButton
    button.set_tooltip_text("tip"); // Control
    button.set_z_index(3); // CanvasItem
    button.set_name("Confirm"); // Node

    let classes: Vec<String> = engine::calls(id).into_iter().map(|call| call.class).collect();
    assert_eq!(classes, ["Button", "BaseButton", "Control", "CanvasItem", "Node"]);

    assert!(button.is_flat());
    assert!(button.is_disabled());
    assert_eq!(button.get_tooltip_text(), "tip");
    assert_eq!(button.get_z_index(), 3);
    assert_eq!(button.get_name(), "Confirm");

    // Explicit base views reach the same object.
    let canvas: &CanvasItem = &button;
    assert_eq!(canvas.get_z_index(), 3);

    button.free();
}
