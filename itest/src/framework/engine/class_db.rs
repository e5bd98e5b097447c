/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Class database of the in-process engine, read from the same JSON that the bindings are generated from.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// JSON model (only the parts the engine needs; unknown keys are ignored)

#[derive(Deserialize)]
struct JsonApi {
    classes: Vec<JsonClass>,
}

#[derive(Deserialize)]
struct JsonClass {
    name: String,
    inherits: Option<String>,
    is_refcounted: bool,
    is_instantiable: bool,
    #[serde(default)]
    methods: Vec<JsonMethod>,
    #[serde(default)]
    properties: Vec<JsonProperty>,
}

#[derive(Deserialize)]
struct JsonMethod {
    name: String,
    is_const: bool,
    #[serde(default)]
    is_vararg: bool,
    #[serde(default)]
    is_virtual: bool,
    #[serde(default)]
    is_static: bool,
    hash: Option<i64>,
    #[serde(default)]
    arguments: Vec<JsonArgument>,
    return_value: Option<JsonReturn>,
}

#[derive(Deserialize)]
struct JsonArgument {
    #[serde(rename = "type")]
    type_: String,
}

#[derive(Deserialize)]
struct JsonReturn {
    #[serde(rename = "type")]
    type_: String,
}

#[derive(Deserialize)]
struct JsonProperty {
    setter: Option<String>,
    getter: Option<String>,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Domain model

/// Representation of a value in the argument array or return slot of a ptrcall.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValueType {
    Bool,
    /// All integers, enums and bitfields travel as `i64`.
    Int,
    /// All floats travel as `f64`.
    Float,
    String,
    StringName,
    Vector2,
    Vector3,
    Color,
    Rect2,
    Object(String),
    Unsupported(String),
}

#[derive(Debug)]
pub struct ClassInfo {
    pub name: String,
    pub inherits: Option<String>,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    methods: HashMap<String, MethodInfo>,
    properties: Vec<PropertyInfo>,
}

/// One bindable method. Its address is handed out as method bind.
#[derive(Debug)]
pub struct MethodInfo {
    pub class: String,
    pub name: String,
    pub hash: Option<i64>,
    pub is_const: bool,
    pub is_static: bool,
    pub params: Vec<ValueType>,
    pub ret: Option<ValueType>,
}

#[derive(Debug)]
struct PropertyInfo {
    setter: Option<String>,
    getter: Option<String>,
}

pub struct ClassDb {
    classes: HashMap<String, ClassInfo>,
}

impl ClassDb {
    /// The process-wide database. Addresses of classes and methods are stable for the rest of the process.
    pub fn get() -> &'static ClassDb {
        static DB: OnceLock<ClassDb> = OnceLock::new();

        DB.get_or_init(|| Self::parse(gdbind_bindings::bundled_gdextension_json()))
    }

    fn parse(json: &str) -> Self {
        let api: JsonApi =
            serde_json::from_str(json).unwrap_or_else(|e| panic!("invalid class database JSON: {e}"));

        let class_names: Vec<String> = api.classes.iter().map(|c| c.name.clone()).collect();
        let to_value_type = |ty: &str| -> ValueType {
            match ty {
                "bool" => ValueType::Bool,
                "int" => ValueType::Int,
                "float" => ValueType::Float,
                "String" => ValueType::String,
                "StringName" => ValueType::StringName,
                "Vector2" => ValueType::Vector2,
                "Vector3" => ValueType::Vector3,
                "Color" => ValueType::Color,
                "Rect2" => ValueType::Rect2,
                _ if ty.starts_with("enum::") || ty.starts_with("bitfield::") => ValueType::Int,
                _ if class_names.iter().any(|c| c == ty) => ValueType::Object(ty.to_string()),
                _ => ValueType::Unsupported(ty.to_string()),
            }
        };

        let classes = api
            .classes
            .into_iter()
            .map(|class| {
                let methods = class
                    .methods
                    .into_iter()
                    .filter(|m| !m.is_virtual && !m.is_vararg)
                    .map(|m| {
                        let info = MethodInfo {
                            class: class.name.clone(),
                            name: m.name.clone(),
                            hash: m.hash,
                            is_const: m.is_const,
                            is_static: m.is_static,
                            params: m.arguments.iter().map(|a| to_value_type(&a.type_)).collect(),
                            ret: m.return_value.as_ref().map(|r| to_value_type(&r.type_)),
                        };
                        (m.name, info)
                    })
                    .collect();

                let properties = class
                    .properties
                    .into_iter()
                    .map(|p| PropertyInfo {
                        setter: p.setter,
                        getter: p.getter,
                    })
                    .collect();

                let info = ClassInfo {
                    name: class.name.clone(),
                    inherits: class.inherits,
                    is_refcounted: class.is_refcounted,
                    is_instantiable: class.is_instantiable,
                    methods,
                    properties,
                };
                (class.name, info)
            })
            .collect();

        Self { classes }
    }

    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    /// Whether `derived` is `base` or one of its subclasses.
    pub fn inherits(&self, derived: &str, base: &str) -> bool {
        self.ancestry(derived).any(|class| class.name == base)
    }

    /// Looks up `method` in `class` and its base classes, most derived first.
    pub fn find_method(&self, class: &str, method: &str) -> Option<&MethodInfo> {
        self.ancestry(class).find_map(|c| c.methods.get(method))
    }

    /// Getter that reads back what `setter` stores, if any.
    ///
    /// Property declarations win; otherwise the `set_` prefix is replaced by `get_` or `is_`.
    pub fn getter_for_setter(&self, class: &str, setter: &str) -> Option<&MethodInfo> {
        let declared = self.ancestry(class).find_map(|c| {
            c.properties
                .iter()
                .find(|p| p.setter.as_deref() == Some(setter))
                .and_then(|p| p.getter.as_deref())
        });

        if let Some(getter) = declared {
            return self.find_method(class, getter);
        }

        let stem = setter.strip_prefix("set_")?;
        self.find_method(class, &format!("get_{stem}"))
            .or_else(|| self.find_method(class, &format!("is_{stem}")))
    }

    fn ancestry<'a>(&'a self, class: &str) -> impl Iterator<Item = &'a ClassInfo> + 'a {
        std::iter::successors(self.classes.get(class), move |c| {
            c.inherits.as_deref().and_then(|base| self.classes.get(base))
        })
    }
}
