/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Mapping of class-database types and default values to Rust.

use std::sync::LazyLock;

use crate::context::Context;
use crate::conv;
use crate::models::domain::{ArgPassing, ModName, RustTy};
use crate::util::{float_lit, ident, int_lit};
use proc_macro2::TokenStream;
use quote::quote;
use regex::Regex;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Types

/// Resolves a class-database type (with optional `meta`) to a Rust type.
///
/// Returns `None` for types that the bindings do not support, such as `Variant` or `Array`. Methods mentioning those are skipped.
pub fn to_rust_type(ty: &str, meta: Option<&String>, ctx: &Context) -> Option<RustTy> {
    let meta = meta.map(String::as_str);

    let builtin = match (ty, meta) {
        ("bool", None) => Some("bool"),

        ("int", Some("int32")) => Some("i32"),
        ("int", Some("int64") | None) => Some("i64"),
        ("int", Some("uint32")) => Some("u32"),
        ("int", Some("uint64")) => Some("u64"),
        ("int", Some(_)) => return None,

        ("float", Some("float")) => Some("f32"),
        ("float", Some("double") | None) => Some("f64"),
        ("float", Some(_)) => return None,

        ("Vector2" | "Vector3" | "Color" | "Rect2", None) => Some(ty),
        _ => None,
    };

    if let Some(rust_ty) = builtin {
        return Some(RustTy::BuiltinIdent {
            ty: ident(rust_ty),
            arg_passing: ArgPassing::ByValue,
        });
    }

    match ty {
        "String" => {
            return Some(RustTy::BuiltinIdent {
                ty: ident("GString"),
                arg_passing: ArgPassing::ImplAsArg,
            })
        }
        "StringName" => {
            return Some(RustTy::BuiltinIdent {
                ty: ident("StringName"),
                arg_passing: ArgPassing::ImplAsArg,
            })
        }
        _ => {}
    }

    if let Some(qualified) = ty.strip_prefix("enum::") {
        return to_enum_type(qualified, false, ctx);
    }

    if let Some(qualified) = ty.strip_prefix("bitfield::") {
        return to_enum_type(qualified, true, ctx);
    }

    if ctx.is_engine_class(ty) {
        let class = ident(&conv::to_pascal_case(ty));

        return Some(RustTy::EngineClass {
            gd_tokens: quote! { Gd<crate::classes::#class> },
            inner_class: class,
        });
    }

    None
}

fn to_enum_type(qualified: &str, is_bitfield: bool, ctx: &Context) -> Option<RustTy> {
    match qualified.split_once('.') {
        Some((class, enum_)) => {
            if !ctx.is_engine_class(class) {
                return None;
            }

            let module = ModName::from_godot(class);
            let enum_ident = conv::make_enum_name(enum_);

            Some(RustTy::EngineEnum {
                tokens: quote! { crate::classes::#module::#enum_ident },
                surrounding_class: Some(class.to_string()),
                is_bitfield,
            })
        }
        None => {
            if !ctx.is_global_enum(qualified) {
                return None;
            }

            let enum_ident = conv::make_enum_name(qualified);

            Some(RustTy::EngineEnum {
                tokens: quote! { crate::global::#enum_ident },
                surrounding_class: None,
                is_bitfield,
            })
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Default values

/// Converts a default-value expression of the class database into a Rust expression of the *internal* argument form.
///
/// Strings become `CowArg::Owned`, `null` objects become `ObjectArg::null()`, enums go through `from_ord()`.
pub fn to_rust_expr(expr: &str, ty: &RustTy) -> Result<TokenStream, String> {
    let unsupported = || format!("unsupported default value `{expr}` for type `{ty}`");

    match ty {
        RustTy::BuiltinIdent { ty: builtin, .. } => {
            let builtin = builtin.to_string();

            match builtin.as_str() {
                "bool" => match expr {
                    "true" => Ok(quote! { true }),
                    "false" => Ok(quote! { false }),
                    _ => Err(unsupported()),
                },
                "i32" | "i64" | "u32" | "u64" => {
                    let value: i64 = expr.parse().map_err(|_| unsupported())?;
                    Ok(int_lit(value))
                }
                "f32" | "f64" => {
                    let value = parse_finite_float(expr).ok_or_else(unsupported)?;
                    Ok(float_lit(value))
                }
                "GString" => {
                    let text = parse_string_literal(expr).ok_or_else(unsupported)?;
                    Ok(quote! { CowArg::Owned(GString::from(#text)) })
                }
                "StringName" => {
                    let text = expr
                        .strip_prefix('&')
                        .and_then(parse_string_literal)
                        .ok_or_else(unsupported)?;
                    Ok(quote! { CowArg::Owned(StringName::from(#text)) })
                }
                "Vector2" | "Vector3" | "Color" | "Rect2" => {
                    to_builtin_constructor_expr(expr, &builtin).ok_or_else(unsupported)
                }
                _ => Err(unsupported()),
            }
        }

        RustTy::EngineEnum {
            tokens,
            is_bitfield,
            ..
        } => {
            let value: i64 = expr.parse().map_err(|_| unsupported())?;
            if *is_bitfield && value < 0 {
                return Err(unsupported());
            }

            let lit = int_lit(value);
            Ok(quote! { #tokens::from_ord(#lit) })
        }

        RustTy::EngineClass { .. } => match expr {
            "null" => Ok(quote! { ObjectArg::null() }),
            _ => Err(unsupported()),
        },
    }
}

/// `inf` and `nan` parse as `f64`, but have no Rust literal.
fn parse_finite_float(expr: &str) -> Option<f64> {
    expr.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_string_literal(expr: &str) -> Option<String> {
    let inner = expr.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.replace("\\\"", "\"").replace("\\\\", "\\"))
}

/// `Vector2(1, 2)` -> `Vector2::new(1.0, 2.0)`, `Color(1, 1, 1, 1)` -> `Color::from_rgba(1.0, 1.0, 1.0, 1.0)`.
fn to_builtin_constructor_expr(expr: &str, builtin: &str) -> Option<TokenStream> {
    // ASCII class: the workspace builds `regex` without `unicode-perl`, so `\w` is unavailable.
    static CONSTRUCTOR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)\(([^()]*)\)$").expect("valid regex"));

    let caps = CONSTRUCTOR.captures(expr)?;

    if &caps[1] != builtin {
        return None;
    }

    let components = caps[2]
        .split(',')
        .map(|c| parse_finite_float(c).map(float_lit))
        .collect::<Option<Vec<_>>>()?;

    let (ctor, arity) = match builtin {
        "Vector2" => (quote! { Vector2::new }, 2),
        "Vector3" => (quote! { Vector3::new }, 3),
        "Color" => (quote! { Color::from_rgba }, 4),
        "Rect2" => (quote! { Rect2::from_components }, 4),
        _ => return None,
    };

    if components.len() != arity {
        return None;
    }

    Some(quote! { #ctor( #(#components),* ) })
}
