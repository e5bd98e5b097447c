/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::models::json::JsonExtensionApi;
use std::collections::{HashMap, HashSet};

/// Lookup tables built once from the class database, before domain mapping.
#[derive(Default)]
pub struct Context {
    engine_classes: HashSet<String>,
    refcounted_classes: HashSet<String>,
    global_enums: HashSet<String>,
    inheritance_tree: InheritanceTree,

    /// Every method name declared by a class, including virtual and vararg ones.
    declared_methods: HashMap<String, HashSet<String>>,
}

impl Context {
    pub fn build_from_api(api: &JsonExtensionApi) -> Self {
        let mut ctx = Context::default();

        for class in api.classes.iter() {
            let class_name = class.name.clone();

            if class.is_refcounted {
                ctx.refcounted_classes.insert(class_name.clone());
            }

            if let Some(base) = class.inherits.as_ref() {
                ctx.inheritance_tree.insert(class_name.clone(), base.clone());
            }

            let methods = class
                .methods
                .iter()
                .flatten()
                .map(|m| m.name.clone())
                .collect();
            ctx.declared_methods.insert(class_name.clone(), methods);

            ctx.engine_classes.insert(class_name);
        }

        for enum_ in api.global_enums.iter() {
            ctx.global_enums.insert(enum_.name.clone());
        }

        ctx
    }

    pub fn is_engine_class(&self, class_name: &str) -> bool {
        self.engine_classes.contains(class_name)
    }

    pub fn is_refcounted(&self, class_name: &str) -> bool {
        self.refcounted_classes.contains(class_name)
    }

    pub fn is_global_enum(&self, enum_name: &str) -> bool {
        self.global_enums.contains(enum_name)
    }

    pub fn inheritance_tree(&self) -> &InheritanceTree {
        &self.inheritance_tree
    }

    /// Whether `class_name` or one of its bases declares a method called `method_name`.
    pub fn has_method_in_hierarchy(&self, class_name: &str, method_name: &str) -> bool {
        self.find_method_owner(class_name, method_name).is_some()
    }

    /// Returns the nearest class in the hierarchy (starting at `class_name` itself) that declares `method_name`.
    pub fn find_method_owner(&self, class_name: &str, method_name: &str) -> Option<String> {
        let mut current = Some(class_name.to_string());

        while let Some(class) = current {
            let declares = self
                .declared_methods
                .get(&class)
                .is_some_and(|methods| methods.contains(method_name));

            if declares {
                return Some(class);
            }

            current = self.inheritance_tree.direct_base(&class);
        }

        None
    }
}

#[derive(Default)]
pub struct InheritanceTree {
    derived_to_base: HashMap<String, String>,
}

impl InheritanceTree {
    pub fn insert(&mut self, derived: String, base: String) {
        let existing = self.derived_to_base.insert(derived, base);
        assert!(existing.is_none(), "Duplicate inheritance insert");
    }

    pub fn direct_base(&self, derived: &str) -> Option<String> {
        self.derived_to_base.get(derived).cloned()
    }

    /// All bases of `derived`, nearest first.
    pub fn collect_all_bases(&self, derived: &str) -> Vec<String> {
        let mut maybe_base = derived;
        let mut result = vec![];

        while let Some(base) = self.derived_to_base.get(maybe_base) {
            result.push(base.clone());
            maybe_base = base;
        }

        result
    }
}
