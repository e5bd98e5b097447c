/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::node::InternalMode;
use gdbind::classes::{Control, LineEdit, PlaceholderTexture2D};
use gdbind::global::Side;
use gdbind::prelude::*;

use crate::framework::engine::{self, Value};
use crate::framework::init;

fn object_value<T: GodotClass>(node: &Gd<T>) -> Value {
    Value::Object(Some(node.instance_id().to_i64() as u64))
}

#[test]
fn default_param_simple_call() {
    init();

    let mut parent = Node::new_alloc();
    let child = Node::new_alloc();

    parent.add_child(&child);

    let call = engine::last_call(parent.instance_id(), "add_child").expect("add_child() called");
    assert_eq!(
        call.args,
        [object_value(&child), Value::Bool(false), Value::Int(0)]
    );

    parent.free();
}

#[test]
fn default_param_extender() {
    init();

    let mut parent = Node::new_alloc();
    let child = Node::new_alloc();

    parent
        .add_child_ex(&child)
        .force_readable_name(true)
        .internal(InternalMode::FRONT)
        .done();

    let call = engine::last_call(parent.instance_id(), "add_child").expect("add_child() called");
    assert_eq!(
        call.args,
        [object_value(&child), Value::Bool(true), Value::Int(1)]
    );

    parent.free();
}

#[test]
fn default_param_extender_partial() {
    init();

    let mut edit = LineEdit::new_alloc();
    let id = edit.instance_id();

    edit.select();
    assert_eq!(
        engine::last_call(id, "select").map(|c| c.args),
        Some(vec![Value::Int(0), Value::Int(-1)])
    );

    edit.select_ex().to(5).done();
    assert_eq!(
        engine::last_call(id, "select").map(|c| c.args),
        Some(vec![Value::Int(0), Value::Int(5)])
    );

    edit.select_ex().from(2).done();
    assert_eq!(
        engine::last_call(id, "select").map(|c| c.args),
        Some(vec![Value::Int(2), Value::Int(-1)])
    );

    edit.free();
}

#[test]
fn default_param_with_return_value() {
    init();

    let mut parent = Node::new_alloc();
    let first = Node::new_alloc();
    let second = Node::new_alloc();
    parent.add_child(&first);
    parent.add_child(&second);

    assert_eq!(parent.get_child_count(), 2);
    assert_eq!(parent.get_child_count_ex().include_internal(true).done(), 2);

    assert_eq!(second.get_index(), 1);
    assert_eq!(parent.get_child_ex(-1).include_internal(true).done(), Some(second));

    parent.free();
}

#[test]
fn default_param_string_name() {
    init();

    let mut control = Control::new_alloc();
    let id = control.instance_id();

    control.add_theme_color_override("font_color", Color::RED);
    assert_eq!(control.get_theme_color("font_color"), Color::RED);

    let call = engine::last_call(id, "get_theme_color").expect("get_theme_color() called");
    assert_eq!(
        call.args,
        [
            Value::StringName("font_color".into()),
            Value::StringName(String::new())
        ]
    );

    control.get_theme_color_ex("font_color").theme_type("Button").done();
    let call = engine::last_call(id, "get_theme_color").expect("get_theme_color() called");
    assert_eq!(call.args[1], Value::StringName("Button".into()));

    control.free();
}

#[test]
fn default_param_mixed_required() {
    init();

    let mut control = Control::new_alloc();
    let id = control.instance_id();

    control.set_anchor(Side::RIGHT, 0.5);
    assert_eq!(
        engine::last_call(id, "set_anchor").map(|c| c.args),
        Some(vec![
            Value::Int(2),
            Value::Float(0.5),
            Value::Bool(false),
            Value::Bool(true)
        ])
    );
    assert_eq!(control.get_anchor(Side::RIGHT), 0.5);
    assert_eq!(control.get_anchor(Side::LEFT), 0.0);

    control
        .set_anchor_ex(Side::TOP, 1.0)
        .push_opposite_anchor(false)
        .done();
    assert_eq!(
        engine::last_call(id, "set_anchor").map(|c| c.args),
        Some(vec![
            Value::Int(1),
            Value::Float(1.0),
            Value::Bool(false),
            Value::Bool(false)
        ])
    );

    control.free();
}

#[test]
fn default_param_color_and_float() {
    init();

    let mut control = Control::new_alloc();
    let id = control.instance_id();
    let texture = PlaceholderTexture2D::new_gd();

    control.draw_texture(&texture, Vector2::new(1.0, 2.0));
    let call = engine::last_call(id, "draw_texture").expect("draw_texture() called");
    assert_eq!(call.args[2], Value::Color(Color::WHITE));

    control.draw_line(Vector2::ZERO, Vector2::ONE, Color::BLUE);
    let call = engine::last_call(id, "draw_line").expect("draw_line() called");
    assert_eq!(call.args[3..], [Value::Float(-1.0), Value::Bool(false)]);

    control
        .draw_rect_ex(Rect2::from_components(0.0, 0.0, 4.0, 4.0), Color::GREEN)
        .filled(false)
        .width(2.5)
        .done();
    let call = engine::last_call(id, "draw_rect").expect("draw_rect() called");
    assert_eq!(
        call.args[2..],
        [Value::Bool(false), Value::Float(2.5), Value::Bool(false)]
    );

    control.free();
}
