/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Behavior of engine methods.

use gdbind::builtin::{Color, Rect2, Vector2};

use super::class_db::{ClassDb, MethodInfo};
use super::values::Value;
use super::{CallRecord, Engine};

/// Executes `method` on the live object `this`. Returns `None` for methods without return value.
pub(super) fn call(engine: &mut Engine, this: u64, method: &'static MethodInfo, args: Vec<Value>) -> Option<Value> {
    if let Some(data) = engine.objects.get_mut(&this) {
        data.calls.push(CallRecord {
            class: method.class.clone(),
            method: method.name.clone(),
            args: args.clone(),
        });
    }

    let result = match call_special(engine, this, method, &args) {
        Some(special) => special,
        None => call_accessor(engine, this, method, &args),
    };

    method.ret.as_ref().map(|ty| result.unwrap_or_else(|| Value::default_for(ty)))
}

/// Executes the static `method`. Unknown methods return the default of their return type.
pub(super) fn call_static(engine: &mut Engine, method: &'static MethodInfo, args: Vec<Value>) -> Option<Value> {
    engine.static_calls.push(CallRecord {
        class: method.class.clone(),
        method: method.name.clone(),
        args,
    });

    let result = match (method.class.as_str(), method.name.as_str()) {
        ("Resource", "generate_scene_unique_id") => {
            engine.next_scene_id += 1;
            Some(Value::String(format!("{:0>5}", to_base36(engine.next_scene_id))))
        }
        _ => None,
    };

    method.ret.as_ref().map(|ty| result.unwrap_or_else(|| Value::default_for(ty)))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();

    String::from_utf8_lossy(&digits).into_owned()
}

type CallResult = Option<Option<Value>>;

/// Methods with dedicated behavior. Returns `None` if `method` is not one of them.
fn call_special(engine: &mut Engine, this: u64, method: &MethodInfo, args: &[Value]) -> CallResult {
    let db = ClassDb::get();
    let arg = |i: usize| args.get(i).cloned().unwrap_or(Value::Nil);

    let result = match (method.class.as_str(), method.name.as_str()) {
        // Object
        ("Object", "get_class") => Some(Value::String(engine.objects[&this].class.name.clone())),
        ("Object", "is_class") => {
            let class = &engine.objects[&this].class.name;
            let queried = arg(0);
            Some(Value::Bool(db.inherits(class, queried.as_text().unwrap_or(""))))
        }
        ("Object", "get_instance_id") => Some(Value::Int(this as i64)),
        ("Object", "has_method") => {
            let class = &engine.objects[&this].class.name;
            let queried = arg(0);
            Some(Value::Bool(db.find_method(class, queried.as_text().unwrap_or("")).is_some()))
        }
        ("Object", "is_queued_for_deletion") => Some(Value::Bool(false)),

        // RefCounted
        ("RefCounted", "init_ref") => {
            let data = engine.objects.get_mut(&this)?;
            if data.ref_init_pending {
                data.ref_init_pending = false;
            } else {
                data.refcount += 1;
            }
            Some(Value::Bool(true))
        }
        ("RefCounted", "reference") => {
            let data = engine.objects.get_mut(&this)?;
            data.refcount += 1;
            Some(Value::Bool(true))
        }
        ("RefCounted", "unreference") => {
            // Destruction is up to the caller, like in the engine.
            let data = engine.objects.get_mut(&this)?;
            data.refcount -= 1;
            Some(Value::Bool(data.refcount == 0))
        }
        ("RefCounted", "get_reference_count") => Some(Value::Int(engine.objects[&this].refcount)),

        // Node
        ("Node", "add_child") => {
            add_child(engine, this, arg(0).as_object());
            None
        }
        ("Node", "remove_child") => {
            remove_child(engine, this, arg(0).as_object());
            None
        }
        ("Node", "get_child_count") => Some(Value::Int(engine.objects[&this].children.len() as i64)),
        ("Node", "get_child") => {
            let children = &engine.objects[&this].children;
            let count = children.len() as i64;
            let requested = arg(0).as_int().unwrap_or(0);
            let index = if requested < 0 { requested + count } else { requested };

            if (0..count).contains(&index) {
                Some(Value::Object(Some(children[index as usize])))
            } else {
                engine.error(format!(
                    "Index p_index = {requested} is out of bounds (child count = {count})"
                ));
                Some(Value::Object(None))
            }
        }
        ("Node", "get_parent") => Some(Value::Object(engine.objects[&this].parent)),
        ("Node", "get_index") => {
            let index = engine.objects[&this]
                .parent
                .and_then(|parent| engine.objects.get(&parent))
                .and_then(|parent| parent.children.iter().position(|&child| child == this))
                .map_or(-1, |pos| pos as i64);
            Some(Value::Int(index))
        }
        ("Node", "is_inside_tree") => Some(Value::Bool(false)),

        // CanvasItem
        ("CanvasItem", "show") => {
            store(engine, this, "is_visible", Value::Bool(true));
            None
        }
        ("CanvasItem", "hide") => {
            store(engine, this, "is_visible", Value::Bool(false));
            None
        }

        // Control
        ("Control", "get_rect") => {
            let position = vector_property(engine, this, "get_position");
            let size = vector_property(engine, this, "get_size");
            Some(Value::Rect2(Rect2::new(position, size)))
        }
        ("Control", "add_theme_color_override") => {
            let name = arg(0).as_text().unwrap_or("").to_string();
            let data = engine.objects.get_mut(&this)?;
            data.theme_colors.insert(name, arg(1));
            None
        }
        ("Control", "remove_theme_color_override") => {
            let data = engine.objects.get_mut(&this)?;
            data.theme_colors.remove(arg(0).as_text().unwrap_or(""));
            None
        }
        ("Control", "has_theme_color_override") => {
            let name = arg(0);
            let has = engine.objects[&this].theme_colors.contains_key(name.as_text().unwrap_or(""));
            Some(Value::Bool(has))
        }
        ("Control", "get_theme_color") => {
            let name = arg(0);
            let color = engine.objects[&this]
                .theme_colors
                .get(name.as_text().unwrap_or(""))
                .cloned()
                .unwrap_or(Value::Color(Color::BLACK));
            Some(color)
        }

        // Texture2D
        ("Texture2D", "get_width") => Some(Value::Int(vector_property(engine, this, "get_size").x as i64)),
        ("Texture2D", "get_height") => Some(Value::Int(vector_property(engine, this, "get_size").y as i64)),

        // Range
        ("Range", "set_value_no_signal") => {
            store(engine, this, "get_value", arg(0));
            None
        }

        // LineEdit
        ("LineEdit", "clear") => {
            store(engine, this, "get_text", Value::String(String::new()));
            None
        }
        ("LineEdit", "get_selected_text") => Some(Value::String(String::new())),
        ("LineEdit", "has_selection") => Some(Value::Bool(false)),

        _ => return None,
    };

    Some(result)
}

/// Generic behavior: `set_*` stores the value under its getter, getters read it back.
fn call_accessor(engine: &mut Engine, this: u64, method: &MethodInfo, args: &[Value]) -> Option<Value> {
    let db = ClassDb::get();
    let class = engine.objects[&this].class.name.clone();

    if method.ret.is_some() {
        let key = property_key(&method.name, args);
        return Some(read_property(engine, this, &key));
    }

    if !method.name.starts_with("set_") {
        return None;
    }

    // Leading parameters of the getter select the slot (e.g. the side in `set_offset(side, offset)`), the next one is the value.
    let (getter_name, arity) = match db.getter_for_setter(&class, &method.name) {
        Some(getter) => (getter.name.as_str(), getter.params.len()),
        None => (method.name.as_str(), 0),
    };

    let key_args = &args[..arity.min(args.len())];
    let value = args.get(arity).cloned().unwrap_or(Value::Nil);

    store(engine, this, &property_key(getter_name, key_args), value);
    None
}

fn property_key(getter: &str, key_args: &[Value]) -> String {
    if key_args.is_empty() {
        getter.to_string()
    } else {
        format!("{getter}{key_args:?}")
    }
}

fn read_property(engine: &Engine, this: u64, key: &str) -> Value {
    let stored = engine.objects[&this].properties.get(key).cloned();

    match stored {
        // Manually managed objects may have been freed in the meantime.
        Some(Value::Object(Some(id))) if !engine.is_alive(id) => Value::Object(None),
        Some(value) => value,
        None => default_property(key).unwrap_or(Value::Nil),
    }
}

/// Stores a property, moving the engine-side reference from the old to the new object.
fn store(engine: &mut Engine, this: u64, key: &str, value: Value) {
    if let Some(new_id) = value.as_object() {
        engine.acquire(new_id);
    }

    let Some(data) = engine.objects.get_mut(&this) else {
        return;
    };

    let previous = data.properties.insert(key.to_string(), value);
    if let Some(old_id) = previous.as_ref().and_then(Value::as_object) {
        engine.release(old_id);
    }
}

fn vector_property(engine: &Engine, this: u64, key: &str) -> Vector2 {
    match read_property(engine, this, key) {
        Value::Vector2(v) => v,
        _ => Vector2::ZERO,
    }
}

/// Engine defaults that differ from the zero value of the type.
fn default_property(getter: &str) -> Option<Value> {
    let value = match getter {
        "is_visible" | "is_editable" => Value::Bool(true),
        "get_modulate" | "get_self_modulate" | "get_color" | "get_albedo" => Value::Color(Color::WHITE),
        "get_max" => Value::Float(100.0),
        "get_step" => Value::Float(1.0),
        "get_visible_ratio" => Value::Float(1.0),
        "get_visible_characters" | "get_max_lines_visible" => Value::Int(-1),
        _ => return None,
    };

    Some(value)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Node tree

fn add_child(engine: &mut Engine, this: u64, child: Option<u64>) {
    let Some(child) = child else {
        engine.error(String::from("add_child(): parameter \"p_child\" is null"));
        return;
    };

    if child == this {
        engine.error(String::from("add_child(): can't add child to itself"));
        return;
    }

    let Some(existing_parent) = engine.objects.get(&child).map(|data| data.parent) else {
        engine.error(format!("add_child(): child {child} is not a live object"));
        return;
    };

    if let Some(parent) = existing_parent {
        engine.error(format!(
            "add_child(): can't add child {child}, already has a parent {parent}"
        ));
        return;
    }

    if let Some(child_data) = engine.objects.get_mut(&child) {
        child_data.parent = Some(this);
    }
    if let Some(data) = engine.objects.get_mut(&this) {
        data.children.push(child);
    }
}

fn remove_child(engine: &mut Engine, this: u64, child: Option<u64>) {
    let is_child = child.is_some_and(|c| engine.objects[&this].children.contains(&c));

    let Some(child) = child.filter(|_| is_child) else {
        engine.error(format!(
            "remove_child(): cannot remove child node {child:?} as it is not a child of this node"
        ));
        return;
    };

    if let Some(data) = engine.objects.get_mut(&this) {
        data.children.retain(|&c| c != child);
    }
    if let Some(child_data) = engine.objects.get_mut(&child) {
        child_data.parent = None;
    }
}
