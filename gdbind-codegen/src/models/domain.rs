/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Domain models, resolved from the JSON models and used by the generators.
//!
//! Unlike the JSON layer, everything here is already mapped to Rust: identifiers are valid, types are resolved to
//! token streams, unsupported methods are filtered out.

use crate::conv;
use crate::util::ident;
use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use std::fmt;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Top-level API

pub struct ExtensionApi {
    pub godot_version: GodotApiVersion,
    pub build_config: BuildConfig,
    pub builtin_sizes: Vec<BuiltinSize>,
    pub classes: Vec<Class>,
    pub global_enums: Vec<Enum>,
}

impl ExtensionApi {
    pub fn find_class(&self, godot_name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name.godot_ty == godot_name)
    }
}

pub struct GodotApiVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub version_string: String,
}

/// Float precision and pointer width, which together select the size table of opaque builtins.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BuildConfig {
    Float32,
    Float64,
    Double32,
    Double64,
}

impl BuildConfig {
    /// Reads the configuration of the crate currently being built.
    ///
    /// Inside a build script, `CARGO_CFG_TARGET_POINTER_WIDTH` describes the *target*, not the host running the script.
    pub fn from_env() -> Self {
        let is_64bit = match std::env::var("CARGO_CFG_TARGET_POINTER_WIDTH") {
            Ok(width) => width == "64",
            Err(_) => cfg!(target_pointer_width = "64"),
        };

        Self::new(cfg!(feature = "double-precision"), is_64bit)
    }

    pub fn new(is_double: bool, is_64bit: bool) -> Self {
        match (is_double, is_64bit) {
            (false, false) => Self::Float32,
            (false, true) => Self::Float64,
            (true, false) => Self::Double32,
            (true, true) => Self::Double64,
        }
    }

    pub fn is_double(self) -> bool {
        matches!(self, Self::Double32 | Self::Double64)
    }

    pub fn json_key(self) -> &'static str {
        match self {
            Self::Float32 => "float_32",
            Self::Float64 => "float_64",
            Self::Double32 => "double_32",
            Self::Double64 => "double_64",
        }
    }
}

pub struct BuiltinSize {
    pub builtin_original_name: String,
    pub config: BuildConfig,
    pub size: usize,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes

pub struct Class {
    pub name: TyName,
    pub mod_name: ModName,

    /// Direct base; `None` only for `Object`.
    pub base_class: Option<TyName>,

    /// All bases, nearest first.
    pub all_bases: Vec<TyName>,

    pub is_refcounted: bool,
    pub is_instantiable: bool,
    pub init_level: ClassCodegenLevel,
    pub constants: Vec<ClassConstant>,
    pub enums: Vec<Enum>,
    pub methods: Vec<ClassMethod>,
    pub properties: Vec<PropertyAccessor>,
}

impl Class {
    /// Whether the class or its sidecar module have anything to declare besides the class itself.
    pub fn has_sidecar_items(&self) -> bool {
        !self.enums.is_empty() || !self.constants.is_empty()
    }
}

/// Init level at which a class' method binds become available.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClassCodegenLevel {
    Servers,
    Scene,
    Editor,
}

impl ClassCodegenLevel {
    pub fn with_api_type(api_type: &str) -> Option<Self> {
        match api_type {
            "core" => Some(Self::Scene),
            "servers" => Some(Self::Servers),
            "editor" => Some(Self::Editor),
            _ => None,
        }
    }

    pub fn to_init_level(self) -> TokenStream {
        match self {
            Self::Servers => quote! { crate::init::InitLevel::Servers },
            Self::Scene => quote! { crate::init::InitLevel::Scene },
            Self::Editor => quote! { crate::init::InitLevel::Editor },
        }
    }
}

pub struct ClassConstant {
    pub name: Ident,
    pub value: ClassConstantValue,
}

pub enum ClassConstantValue {
    I32(i32),
    I64(i64),
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Methods

pub struct ClassMethod {
    /// Rust name, e.g. `set_text`. Keyword-safe.
    pub name: Ident,
    pub godot_name: String,
    pub surrounding_class: TyName,
    pub qualifier: FnQualifier,

    /// Methods exposed by the class database but not meant for direct use, such as `RefCounted::reference()`.
    pub is_private: bool,

    pub params: Vec<FnParam>,
    pub return_value: FnReturn,
    pub hash: i64,
}

impl ClassMethod {
    pub fn uses_default_params(&self) -> bool {
        self.params.iter().any(|p| p.default_value.is_some())
    }

    /// Field name in the generated `ClassMethodTable`, e.g. `label__set_text`.
    pub fn table_field(&self) -> Ident {
        crate::generator::method_tables::make_table_field(&self.surrounding_class, &self.godot_name)
    }
}

impl fmt::Display for ClassMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.surrounding_class.godot_ty, self.godot_name)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FnQualifier {
    /// `&mut self`
    Mut,

    /// `&self`
    Const,

    /// No receiver; the engine is called with a null instance.
    Static,
}

impl FnQualifier {
    pub fn from_json(is_const: bool, is_static: bool) -> FnQualifier {
        if is_static {
            Self::Static
        } else if is_const {
            Self::Const
        } else {
            Self::Mut
        }
    }

    pub fn is_static(self) -> bool {
        self == Self::Static
    }
}

pub struct FnParam {
    pub name: Ident,
    pub type_: RustTy,
    pub default_value: Option<TokenStream>,
}

pub struct FnReturn {
    /// `-> T` or empty.
    pub decl: TokenStream,
    pub type_: Option<RustTy>,
}

impl FnReturn {
    pub fn with_type(type_: Option<RustTy>) -> Self {
        let decl = match &type_ {
            Some(ty) => ty.return_decl(),
            None => TokenStream::new(),
        };

        Self { decl, type_ }
    }

    /// Type argument of `CallFrame::out_ptrcall::<R>()`.
    pub fn type_tokens(&self) -> TokenStream {
        match &self.type_ {
            Some(ty) => ty.return_tokens(),
            None => quote! { () },
        }
    }
}

/// Host-typed accessor for a class-database property.
pub struct PropertyAccessor {
    pub name: Ident,
    pub godot_name: String,
    pub getter: Ident,
    pub return_type: RustTy,
    pub conversion: HostConversion,
}

/// How an accessor turns the getter's engine type into a host type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum HostConversion {
    /// Getter result is already a host type (numbers, bools, enums, vectors, objects).
    Identity,

    /// `GString` or `StringName` to `String`.
    ToRustString,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enums

pub struct Enum {
    pub name: Ident,
    pub godot_name: String,
    pub surrounding_class: Option<TyName>,
    pub is_bitfield: bool,
    pub enumerators: Vec<Enumerator>,
}

pub struct Enumerator {
    pub name: Ident,
    pub godot_name: String,
    pub value: EnumeratorValue,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EnumeratorValue {
    Enum(i32),
    Bitfield(u64),
}

impl EnumeratorValue {
    /// Tokens of the ordinal as it appears in the `ord` field.
    pub fn to_ord_tokens(self) -> TokenStream {
        match self {
            EnumeratorValue::Enum(i) => i.to_token_stream(),
            EnumeratorValue::Bitfield(i) => {
                let hex = format!("0x{i:016X}");
                hex.parse().unwrap_or_else(|_| panic!("invalid hex literal {hex}"))
            }
        }
    }

    pub fn unsuffixed_lit(self) -> proc_macro2::Literal {
        match self {
            EnumeratorValue::Enum(i) => proc_macro2::Literal::i32_unsuffixed(i),
            EnumeratorValue::Bitfield(i) => proc_macro2::Literal::u64_unsuffixed(i),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Rust types

#[derive(Clone, Debug)]
pub enum RustTy {
    /// `bool`, `i32`, `f64`, `Vector2`, `GString`
    BuiltinIdent { ty: Ident, arg_passing: ArgPassing },

    /// `crate::classes::node::ProcessMode` or `crate::global::Side`
    EngineEnum {
        tokens: TokenStream,

        /// `None` for globals.
        surrounding_class: Option<String>,

        is_bitfield: bool,
    },

    /// `Gd<Node>`
    EngineClass {
        /// Tokens with full `Gd<T>`, never `Option<Gd<T>>`.
        gd_tokens: TokenStream,

        /// Only inner `Node`.
        inner_class: Ident,
    },
}

/// How a builtin parameter is passed from user code.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArgPassing {
    /// Copied, e.g. `i32` or `Vector2`.
    ByValue,

    /// `impl AsArg<GString>`, stored as `CowArg`.
    ImplAsArg,
}

impl RustTy {
    /// Public parameter declaration, e.g. `i32`, `impl AsArg<GString>`, `impl AsObjectArg<Node>`.
    pub fn param_decl(&self) -> TokenStream {
        match self {
            RustTy::BuiltinIdent {
                ty,
                arg_passing: ArgPassing::ImplAsArg,
            } => quote! { impl AsArg<#ty> },
            RustTy::EngineClass { inner_class, .. } => {
                quote! { impl AsObjectArg<crate::classes::#inner_class> }
            }
            other => other.to_token_stream(),
        }
    }

    /// Like [`param_decl()`](Self::param_decl), but bounded by lifetime `'a` (extender methods).
    pub fn param_decl_lifetimed(&self) -> TokenStream {
        if self.is_by_ref_arg() {
            let decl = self.param_decl();
            quote! { #decl + 'a }
        } else {
            self.param_decl()
        }
    }

    /// Declaration of a parameter in `*_full()` functions, which receive already converted arguments.
    pub fn full_param_decl(&self) -> TokenStream {
        match self {
            RustTy::BuiltinIdent {
                ty,
                arg_passing: ArgPassing::ImplAsArg,
            } => quote! { CowArg<'_, #ty> },
            RustTy::EngineClass { inner_class, .. } => {
                quote! { ObjectArg<'_, crate::classes::#inner_class> }
            }
            other => other.to_token_stream(),
        }
    }

    /// Field type in an extender struct with lifetime `'a`.
    pub fn private_field_decl(&self) -> TokenStream {
        match self {
            RustTy::BuiltinIdent {
                ty,
                arg_passing: ArgPassing::ImplAsArg,
            } => quote! { CowArg<'a, #ty> },
            RustTy::EngineClass { inner_class, .. } => {
                quote! { ObjectArg<'a, crate::classes::#inner_class> }
            }
            other => other.to_token_stream(),
        }
    }

    /// Expression turning a public parameter into its stored/internal form.
    pub fn into_internal(&self, expr: TokenStream) -> TokenStream {
        match self {
            RustTy::BuiltinIdent {
                arg_passing: ArgPassing::ImplAsArg,
                ..
            } => quote! { #expr.into_arg() },
            RustTy::EngineClass { .. } => quote! { #expr.into_object_arg() },
            _ => expr,
        }
    }

    /// Expression turning an internal-form argument into the value that lives in the call frame.
    pub fn internal_to_ffi(&self, expr: TokenStream) -> TokenStream {
        if self.is_by_ref_arg() {
            expr
        } else {
            quote! { #expr.into_ffi() }
        }
    }

    /// Whether the public parameter is a conversion trait (`AsArg`, `AsObjectArg`) rather than a plain value.
    pub fn is_by_ref_arg(&self) -> bool {
        matches!(
            self,
            RustTy::BuiltinIdent {
                arg_passing: ArgPassing::ImplAsArg,
                ..
            } | RustTy::EngineClass { .. }
        )
    }

    pub fn return_decl(&self) -> TokenStream {
        let ty = self.return_tokens();
        quote! { -> #ty }
    }

    /// Return type; objects are always nullable on return.
    pub fn return_tokens(&self) -> TokenStream {
        match self {
            RustTy::EngineClass { gd_tokens, .. } => quote! { Option<#gd_tokens> },
            other => other.to_token_stream(),
        }
    }

    /// Whether this is `GString` or `StringName`.
    pub fn is_engine_string(&self) -> bool {
        matches!(
            self,
            RustTy::BuiltinIdent {
                arg_passing: ArgPassing::ImplAsArg,
                ..
            }
        )
    }
}

impl ToTokens for RustTy {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            RustTy::BuiltinIdent { ty: ident, .. } => ident.to_tokens(tokens),
            RustTy::EngineEnum {
                tokens: path,
                ..
            } => path.to_tokens(tokens),
            RustTy::EngineClass { gd_tokens: path, .. } => path.to_tokens(tokens),
        }
    }
}

impl fmt::Display for RustTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_token_stream().to_string().replace(' ', ""))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Names

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TyName {
    pub godot_ty: String,
    pub rust_ty: Ident,
}

impl TyName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            godot_ty: godot_ty.to_owned(),
            rust_ty: ident(&conv::to_pascal_case(godot_ty)),
        }
    }

    pub fn description(&self) -> String {
        if self.rust_ty == self.godot_ty {
            self.godot_ty.clone()
        } else {
            format!("{}  [renamed {}]", self.godot_ty, self.rust_ty)
        }
    }
}

impl ToTokens for TyName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_ty.to_tokens(tokens)
    }
}

/// Contains naming conventions for modules.
#[derive(Clone, Debug)]
pub struct ModName {
    pub rust_mod: Ident,
}

impl ModName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            rust_mod: ident(&conv::to_snake_case(godot_ty)),
        }
    }
}

impl ToTokens for ModName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_mod.to_tokens(tokens)
    }
}
