/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::{BoxMesh, Button, PlaceholderTexture2D, ShaderMaterial, Texture2D};
use gdbind::prelude::*;

use crate::framework::{engine, expect_panic, init};

#[test]
fn refcounted_new_gd() {
    init();

    let texture = PlaceholderTexture2D::new_gd();
    let id = texture.instance_id();

    assert!(id.is_ref_counted());
    assert_eq!(engine::reference_count(id), Some(1));
    assert_eq!(texture.get_reference_count(), 1);
}

#[test]
fn refcounted_clone_drop() {
    init();

    let mesh = BoxMesh::new_gd();
    let id = mesh.instance_id();

    let copy = mesh.clone();
    let second = copy.clone();
    assert_eq!(engine::reference_count(id), Some(3));

    drop(copy);
    assert_eq!(engine::reference_count(id), Some(2));

    drop(second);
    assert_eq!(engine::reference_count(id), Some(1));
    assert!(engine::is_alive(id));

    drop(mesh);
    assert!(!engine::is_alive(id));
    assert_eq!(engine::destroy_count(id), 1);
}

#[test]
fn refcounted_default() {
    init();

    let material: Gd<ShaderMaterial> = Gd::default();
    let id = material.instance_id();

    assert_eq!(engine::reference_count(id), Some(1));
    drop(material);
    assert_eq!(engine::destroy_count(id), 1);
}

#[test]
fn refcounted_upcast_keeps_count() {
    init();

    let texture = PlaceholderTexture2D::new_gd();
    let id = texture.instance_id();

    let as_object: Gd<Object> = texture.upcast();
    assert_eq!(engine::reference_count(id), Some(1));

    // Dynamic memory: `Gd<Object>` still releases the reference.
    let copy = as_object.clone();
    assert_eq!(engine::reference_count(id), Some(2));
    drop(copy);
    drop(as_object);

    assert!(!engine::is_alive(id));
}

#[test]
fn refcounted_returned_from_engine() {
    init();

    let mut button = Button::new_alloc();
    let icon = PlaceholderTexture2D::new_gd();
    let id = icon.instance_id();

    button.set_button_icon(&icon);
    assert_eq!(engine::reference_count(id), Some(2), "engine holds a reference");

    let fetched: Gd<Texture2D> = button.get_button_icon().expect("icon was set");
    assert_eq!(fetched.instance_id(), id);
    assert_eq!(engine::reference_count(id), Some(3), "returned Gd holds its own reference");

    drop(fetched);
    drop(icon);
    assert_eq!(engine::reference_count(id), Some(1));

    // Destroying the owner releases the last reference.
    button.free();
    assert!(!engine::is_alive(id));
    assert_eq!(engine::destroy_count(id), 1);
}

#[test]
fn refcounted_replaced_in_engine() {
    init();

    let mut button = Button::new_alloc();
    let first = PlaceholderTexture2D::new_gd();
    let first_id = first.instance_id();

    button.set_button_icon(&first);
    drop(first);
    assert!(engine::is_alive(first_id));

    button.set_button_icon(Gd::<Texture2D>::null_arg());
    assert!(!engine::is_alive(first_id));
    assert!(button.get_button_icon().is_none());

    button.free();
}

#[test]
fn refcounted_free_via_object_panics() {
    init();

    let object: Gd<Object> = PlaceholderTexture2D::new_gd().upcast();
    let id = object.instance_id();

    let msg = expect_panic("free() on ref-counted object", || object.clone().free());
    assert!(
        msg.contains("called free() on Gd<Object> which points to a RefCounted dynamic type"),
        "{msg}"
    );

    // The panicking clone released its reference during unwinding.
    assert_eq!(engine::reference_count(id), Some(1));
    drop(object);
    assert!(!engine::is_alive(id));
}

#[test]
fn manual_object_free_via_object() {
    init();

    let object: Gd<Object> = Node::new_alloc().upcast();
    let id = object.instance_id();

    object.free();
    assert!(!engine::is_alive(id));
}
