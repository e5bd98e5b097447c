/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Checks what generated methods send across the FFI boundary, and how they convert results.

use gdbind::classes::{
    BoxMesh, Button, ColorRect, Control, Label, LineEdit, PlaceholderTexture2D, Range, Resource,
    StandardMaterial3D, Texture2D, TextureRect,
};
use gdbind::prelude::*;

use crate::framework::engine::{self, Value};
use crate::framework::{expect_panic, init};

fn last_args(id: InstanceId, method: &str) -> Vec<Value> {
    engine::last_call(id, method)
        .unwrap_or_else(|| panic!("no call to {method}()"))
        .args
}

#[test]
fn codegen_string_arg_forms() {
    init();

    let mut label = Label::new_alloc();
    let id = label.instance_id();

    let owned = String::from("owned");
    let gstring = GString::from("gstring");
    let sname = StringName::from("sname");

    label.set_text("literal");
    assert_eq!(last_args(id, "set_text"), [Value::String("literal".into())]);

    label.set_text(&owned);
    assert_eq!(label.get_text(), "owned");

    label.set_text(owned);
    assert_eq!(label.get_text(), "owned");

    label.set_text(&gstring);
    assert_eq!(label.get_text(), "gstring");

    label.set_text(gstring);
    assert_eq!(label.get_text(), "gstring");

    label.set_text(&sname);
    assert_eq!(label.get_text(), "sname");

    label.set_text("");
    assert_eq!(last_args(id, "set_text"), [Value::String(String::new())]);
    assert!(label.get_text().is_empty());

    label.free();
}

#[test]
fn codegen_string_name_arg() {
    init();

    let mut node = Node::new_alloc();
    let id = node.instance_id();

    node.set_name("Player");
    assert_eq!(last_args(id, "set_name"), [Value::StringName("Player".into())]);

    let name: StringName = node.get_name();
    assert_eq!(name, "Player");

    // GString is accepted for StringName parameters.
    node.set_name(&GString::from("Enemy"));
    assert_eq!(node.get_name(), "Enemy");

    node.free();
}

#[test]
fn codegen_unicode_roundtrip() {
    init();

    let mut label = Label::new_alloc();
    let text = "Grüße, 世界! 🦀";

    label.set_text(text);
    assert_eq!(label.get_text().to_string(), text);
    assert_eq!(label.text(), text);

    label.free();
}

#[test]
fn codegen_int_widths() {
    init();

    let mut label = Label::new_alloc();
    let id = label.instance_id();

    label.set_visible_characters(-7);
    assert_eq!(last_args(id, "set_visible_characters"), [Value::Int(-7)]);
    assert_eq!(label.get_visible_characters(), -7);

    let mut mesh = BoxMesh::new_gd();
    mesh.set_subdivide_width(i32::MAX);
    assert_eq!(mesh.get_subdivide_width(), i32::MAX);

    label.free();
}

#[test]
fn codegen_int_return_out_of_range() {
    init();

    let label = Label::new_alloc();
    let id = label.instance_id();
    engine::set_property(id, "get_visible_characters", Value::Int(5_000_000_000));

    let msg = expect_panic("i32 return out of range", || {
        label.get_visible_characters();
    });
    assert_eq!(
        msg,
        "in function `Label::get_visible_characters` at return type i32: \
        integer not in range of `i32`: 5000000000"
    );

    label.free();
}

#[test]
fn codegen_instance_id_is_bitcast() {
    init();

    let texture = PlaceholderTexture2D::new_gd();
    let id = texture.instance_id();

    // Bit 63 is set for ref-counted objects; the u64 must survive the i64 wire format.
    let raw: u64 = texture.get_instance_id();
    assert_eq!(raw, id.to_i64() as u64);
    assert!(raw > i64::MAX as u64);
}

#[test]
fn codegen_floats() {
    init();

    let mut range = Range::new_alloc();
    let id = range.instance_id();

    range.set_value(0.1);
    assert_eq!(last_args(id, "set_value"), [Value::Float(0.1)]);
    assert_eq!(range.get_value(), 0.1);

    let mut label = Label::new_alloc();
    label.set_visible_ratio(0.25);
    assert_eq!(label.get_visible_ratio(), 0.25f32);

    range.free();
    label.free();
}

#[test]
fn codegen_vectors_colors_rects() {
    init();

    let mut control = Control::new_alloc();
    let id = control.instance_id();

    control.set_position(Vector2::new(3.0, 4.0));
    control.set_size(Vector2::new(10.0, 20.0));
    assert_eq!(
        last_args(id, "set_position"),
        [Value::Vector2(Vector2::new(3.0, 4.0)), Value::Bool(false)]
    );

    let rect: Rect2 = control.get_rect();
    assert_eq!(rect, Rect2::from_components(3.0, 4.0, 10.0, 20.0));

    let color = Color::from_rgba(0.5, 0.25, 1.0, 0.75);
    control.set_modulate(color);
    assert_eq!(control.get_modulate(), color);

    let mut material = StandardMaterial3D::new_gd();
    let scale = Vector3::new(1.0, 2.0, 3.0);
    material.set_uv1_scale(scale);
    assert_eq!(material.get_uv1_scale(), scale);

    control.free();
}

#[test]
fn codegen_object_args() {
    init();

    let mut rect = TextureRect::new_alloc();
    let id = rect.instance_id();
    let texture = PlaceholderTexture2D::new_gd();
    let texture_id = texture.instance_id();

    rect.set_texture(&texture);
    assert_eq!(
        last_args(id, "set_texture"),
        [Value::Object(Some(texture_id.to_i64() as u64))]
    );

    let upcast: Gd<Texture2D> = texture.clone().upcast();
    rect.set_texture(Some(&upcast));
    assert_eq!(rect.get_texture(), Some(upcast));

    rect.set_texture(Gd::<Texture2D>::null_arg());
    assert_eq!(last_args(id, "set_texture"), [Value::Object(None)]);
    assert_eq!(rect.get_texture(), None);

    let optional: Option<Gd<PlaceholderTexture2D>> = None;
    rect.set_texture(&optional);
    assert_eq!(rect.get_texture(), None);

    rect.free();
}

#[test]
fn codegen_null_object_return() {
    init();

    let button = Button::new_alloc();

    assert!(button.get_button_group().is_none());
    assert!(button.get_parent().is_none());

    button.free();
}

#[test]
fn codegen_returned_object_has_dynamic_class() {
    init();

    let mut parent = Node::new_alloc();
    let child = ColorRect::new_alloc();
    parent.add_child(&child);

    let fetched: Gd<Node> = parent.get_child(0).expect("child exists");
    assert_eq!(fetched.dynamic_class_string(), "ColorRect");

    let rect = fetched.cast::<ColorRect>();
    assert_eq!(rect, child);
    assert_eq!(rect.get_color(), Color::WHITE);

    parent.free();
    assert!(!child.is_instance_valid());
}

#[test]
fn codegen_const_and_mut_receivers() {
    init();

    let mut edit = LineEdit::new_alloc();

    // Getters only need shared access.
    let shared: &Gd<LineEdit> = &edit;
    assert!(shared.is_editable());
    assert_eq!(shared.get_max_length(), 0);

    edit.set_max_length(12);
    edit.insert_text_at_caret("unused");
    edit.clear();
    assert!(edit.get_text().is_empty());
    assert_eq!(edit.get_max_length(), 12);

    edit.free();
}

#[test]
fn codegen_static_method_without_instance() {
    init();

    let first = Resource::generate_scene_unique_id();
    let second = Resource::generate_scene_unique_id();

    assert_eq!(first.len_utf8(), 5);
    assert_ne!(first, second);

    let calls: Vec<_> = engine::static_calls()
        .into_iter()
        .filter(|call| call.method == "generate_scene_unique_id")
        .collect();

    assert!(calls.len() >= 2);
    assert!(calls.iter().all(|call| call.class == "Resource" && call.args.is_empty()));
    assert!(!engine::log_contains("static method called on an instance"));
}
