/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::{Button, Label, LineEdit, PlaceholderTexture2D, ProgressBar, Shader, ShaderMaterial};
use gdbind::global::HorizontalAlignment;
use gdbind::prelude::*;

use crate::framework::engine;
use crate::framework::init;

#[test]
fn property_string_as_host_string() {
    init();

    let mut label = Label::new_alloc();
    label.set_text("hello");

    let text: String = label.text();
    assert_eq!(text, "hello");

    let mut node = Node::new_alloc();
    node.set_name("Root");

    let name: String = node.name();
    assert_eq!(name, "Root");

    label.free();
    node.free();
}

#[test]
fn property_primitive_values() {
    init();

    let mut bar = ProgressBar::new_alloc();

    assert_eq!(bar.max_value(), 100.0);
    assert_eq!(bar.step(), 1.0);
    assert!(bar.visible());
    assert!(!bar.show_percentage());

    bar.set_value(42.5);
    bar.set_show_percentage(true);
    bar.hide();

    assert_eq!(bar.value(), 42.5);
    assert!(bar.show_percentage());
    assert!(!bar.visible());

    bar.set_value_no_signal(7.0);
    assert_eq!(bar.value(), 7.0);

    bar.free();
}

#[test]
fn property_defaults_from_engine() {
    init();

    let label = Label::new_alloc();

    assert_eq!(label.visible_characters(), -1);
    assert_eq!(label.max_lines_visible(), -1);
    assert_eq!(label.visible_ratio(), 1.0);
    assert_eq!(label.modulate(), Color::WHITE);
    assert_eq!(label.horizontal_alignment(), HorizontalAlignment::LEFT);

    label.free();
}

#[test]
fn property_enum_value() {
    init();

    let mut edit = LineEdit::new_alloc();
    edit.set_horizontal_alignment(HorizontalAlignment::CENTER);

    assert_eq!(edit.alignment(), HorizontalAlignment::CENTER);
    assert_eq!(edit.get_horizontal_alignment(), HorizontalAlignment::CENTER);

    edit.free();
}

#[test]
fn property_object_value() {
    init();

    let mut material = ShaderMaterial::new_gd();
    assert_eq!(material.shader(), None);

    let mut shader = Shader::new_gd();
    shader.set_code("shader_type canvas_item;");
    material.set_shader(&shader);

    let fetched = material.shader().expect("shader was set");
    assert_eq!(fetched, shader);
    assert_eq!(fetched.code(), "shader_type canvas_item;");
}

#[test]
fn property_inherited_getter() {
    init();

    let mut texture = PlaceholderTexture2D::new_gd();
    texture.set_size(Vector2::new(64.0, 32.0));

    // `size` is declared by PlaceholderTexture2D, but read through Texture2D's getter.
    assert_eq!(texture.size(), Vector2::new(64.0, 32.0));
    assert_eq!(texture.get_width(), 64);
    assert_eq!(texture.get_height(), 32);

    let call = engine::last_call(texture.instance_id(), "get_size").expect("get_size() called");
    assert_eq!(call.class, "Texture2D");
}

#[test]
fn property_same_name_in_subclass() {
    init();

    let mut button = Button::new_alloc();
    button.set_text_alignment(HorizontalAlignment::RIGHT);
    button.set_text("OK");

    // Button's `alignment` is about text, unrelated to e.g. BoxContainer's.
    assert_eq!(button.alignment(), HorizontalAlignment::RIGHT);
    assert_eq!(button.text(), "OK");
    assert!(button.icon().is_none());

    button.free();
}
