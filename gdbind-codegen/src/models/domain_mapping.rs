/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::context::Context;
use crate::models::domain::{
    BuildConfig, BuiltinSize, Class, ClassCodegenLevel, ClassConstant, ClassConstantValue,
    ClassMethod, Enum, Enumerator, EnumeratorValue, ExtensionApi, FnParam, FnQualifier, FnReturn,
    GodotApiVersion, HostConversion, ModName, PropertyAccessor, TyName,
};
use crate::models::json::{
    JsonClass, JsonClassConstant, JsonClassMethod, JsonEnum, JsonExtensionApi, JsonMethodArg,
    JsonProperty,
};
use crate::util::{ident, safe_ident};
use crate::{conv, special_cases};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Top-level

impl ExtensionApi {
    pub fn from_json(json: &JsonExtensionApi, build_config: BuildConfig, ctx: &Context) -> Self {
        let header = &json.header;

        let builtin_sizes = json
            .builtin_class_sizes
            .iter()
            .filter_map(|config_sizes| {
                let config = parse_build_config(&config_sizes.build_configuration)?;
                Some(config_sizes.sizes.iter().map(move |s| BuiltinSize {
                    builtin_original_name: s.name.clone(),
                    config,
                    size: s.size,
                }))
            })
            .flatten()
            .collect();

        let mut classes: Vec<Class> = json
            .classes
            .iter()
            .filter_map(|class| Class::from_json(class, ctx))
            .collect();

        // Properties may resolve their getter in a base class, so they need all classes mapped first.
        let properties: Vec<Vec<PropertyAccessor>> = json
            .classes
            .iter()
            .filter(|class| ClassCodegenLevel::with_api_type(&class.api_type).is_some())
            .map(|class| PropertyAccessor::all_from_json(class, &classes, ctx))
            .collect();

        for (class, props) in classes.iter_mut().zip(properties) {
            class.properties = props;
        }

        Self {
            godot_version: GodotApiVersion {
                major: header.version_major,
                minor: header.version_minor,
                patch: header.version_patch,
                version_string: header.version_full_name.clone(),
            },
            build_config,
            builtin_sizes,
            classes,
            global_enums: json
                .global_enums
                .iter()
                .map(|e| Enum::from_json(e, None))
                .collect(),
        }
    }
}

fn parse_build_config(key: &str) -> Option<BuildConfig> {
    let config = match key {
        "float_32" => BuildConfig::Float32,
        "float_64" => BuildConfig::Float64,
        "double_32" => BuildConfig::Double32,
        "double_64" => BuildConfig::Double64,
        _ => return None,
    };

    Some(config)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes

impl Class {
    /// Returns `None` for classes of an unknown API type.
    pub fn from_json(json: &JsonClass, ctx: &Context) -> Option<Self> {
        let init_level = ClassCodegenLevel::with_api_type(&json.api_type)?;
        let ty_name = TyName::from_godot(&json.name);

        let all_bases = ctx
            .inheritance_tree()
            .collect_all_bases(&json.name)
            .iter()
            .map(|base| TyName::from_godot(base))
            .collect();

        let methods = json
            .methods
            .iter()
            .flatten()
            .filter_map(|m| ClassMethod::from_json(m, &ty_name, ctx))
            .collect();

        let enums = json
            .enums
            .iter()
            .flatten()
            .map(|e| Enum::from_json(e, Some(&ty_name)))
            .collect();

        let constants = json
            .constants
            .iter()
            .flatten()
            .map(ClassConstant::from_json)
            .collect();

        Some(Self {
            mod_name: ModName::from_godot(&json.name),
            base_class: json.inherits.as_deref().map(TyName::from_godot),
            all_bases,
            is_refcounted: json.is_refcounted,
            is_instantiable: json.is_instantiable,
            init_level,
            constants,
            enums,
            methods,
            properties: vec![],
            name: ty_name,
        })
    }

    pub fn find_method(&self, godot_name: &str) -> Option<&ClassMethod> {
        self.methods.iter().find(|m| m.godot_name == godot_name)
    }
}

impl ClassConstant {
    pub fn from_json(json: &JsonClassConstant) -> Self {
        let value = match i32::try_from(json.value) {
            Ok(i32_value) => ClassConstantValue::I32(i32_value),
            Err(_) => ClassConstantValue::I64(json.value),
        };

        Self {
            name: ident(&json.name),
            value,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Methods

impl ClassMethod {
    /// Maps a class-database method, or returns `None` if it cannot be expressed as a ptrcall with supported types.
    pub fn from_json(method: &JsonClassMethod, class_name: &TyName, ctx: &Context) -> Option<Self> {
        if method.is_virtual || method.is_vararg {
            return None;
        }

        let hash = method.hash?;

        let params = method
            .arguments
            .iter()
            .flatten()
            .map(|arg| FnParam::from_json(arg, class_name, &method.name, ctx))
            .collect::<Option<Vec<_>>>()?;

        let return_value = match &method.return_value {
            Some(ret) => FnReturn::with_type(Some(conv::to_rust_type(
                &ret.type_,
                ret.meta.as_ref(),
                ctx,
            )?)),
            None => FnReturn::with_type(None),
        };

        Some(Self {
            name: safe_ident(&method.name),
            godot_name: method.name.clone(),
            surrounding_class: class_name.clone(),
            qualifier: FnQualifier::from_json(method.is_const, method.is_static),
            is_private: special_cases::is_class_method_private(&class_name.godot_ty, &method.name),
            params,
            return_value,
            hash,
        })
    }
}

impl FnParam {
    fn from_json(
        arg: &JsonMethodArg,
        class_name: &TyName,
        method_name: &str,
        ctx: &Context,
    ) -> Option<Self> {
        let type_ = conv::to_rust_type(&arg.type_, arg.meta.as_ref(), ctx)?;

        let default_value = arg.default_value.as_ref().map(|expr| {
            conv::to_rust_expr(expr, &type_).unwrap_or_else(|err| {
                panic!(
                    "{}::{}, parameter `{}`: {err}",
                    class_name.godot_ty, method_name, arg.name
                )
            })
        });

        Some(Self {
            name: safe_ident(&arg.name),
            type_,
            default_value,
        })
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Properties

impl PropertyAccessor {
    fn all_from_json(json_class: &JsonClass, classes: &[Class], ctx: &Context) -> Vec<Self> {
        json_class
            .properties
            .iter()
            .flatten()
            .filter_map(|prop| Self::from_json(prop, &json_class.name, classes, ctx))
            .collect()
    }

    /// Returns `None` if no plain getter exists, or if the accessor would clash with an engine method.
    fn from_json(
        prop: &JsonProperty,
        class_name: &str,
        classes: &[Class],
        ctx: &Context,
    ) -> Option<Self> {
        // Indexed properties (e.g. `offset_left` -> `get_offset(SIDE_LEFT)`) need an argument.
        if prop.index.is_some() {
            return None;
        }

        if ctx.has_method_in_hierarchy(class_name, &prop.name) {
            return None;
        }

        let getter_name = prop.getter.as_deref()?;
        let owner = ctx.find_method_owner(class_name, getter_name)?;
        let getter = classes
            .iter()
            .find(|c| c.name.godot_ty == owner)?
            .find_method(getter_name)?;

        let has_required_params = getter.params.iter().any(|p| p.default_value.is_none());
        if getter.is_private || getter.qualifier != FnQualifier::Const || has_required_params {
            return None;
        }

        let return_type = getter.return_value.type_.clone()?;
        let conversion = if return_type.is_engine_string() {
            HostConversion::ToRustString
        } else {
            HostConversion::Identity
        };

        Some(Self {
            name: safe_ident(&prop.name),
            godot_name: prop.name.clone(),
            getter: getter.name.clone(),
            return_type,
            conversion,
        })
    }

    /// Rust return type of the accessor.
    pub fn host_return_tokens(&self) -> proc_macro2::TokenStream {
        match self.conversion {
            HostConversion::ToRustString => quote::quote! { String },
            HostConversion::Identity => self.return_type.return_tokens(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enums

impl Enum {
    pub fn from_json(json_enum: &JsonEnum, surrounding_class: Option<&TyName>) -> Self {
        let godot_names: Vec<&str> = json_enum.values.iter().map(|v| v.name.as_str()).collect();
        let rust_names = conv::make_enumerator_names(&godot_names);

        let enumerators = json_enum
            .values
            .iter()
            .zip(rust_names)
            .map(|(json_value, rust_name)| {
                let value = if json_enum.is_bitfield {
                    let ord = u64::try_from(json_value.value).unwrap_or_else(|_| {
                        panic!("bitfield value {} = {} is negative", json_value.name, json_value.value)
                    });
                    EnumeratorValue::Bitfield(ord)
                } else {
                    EnumeratorValue::Enum(json_value.to_enum_ord())
                };

                Enumerator {
                    name: ident(&rust_name),
                    godot_name: json_value.name.clone(),
                    value,
                }
            })
            .collect();

        Self {
            name: conv::make_enum_name(&json_enum.name),
            godot_name: json_enum.name.clone(),
            surrounding_class: surrounding_class.cloned(),
            is_bitfield: json_enum.is_bitfield,
            enumerators,
        }
    }
}
