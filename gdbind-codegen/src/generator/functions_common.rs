/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::generator::default_parameters;
use crate::models::domain::{ClassMethod, FnParam, FnQualifier};
use crate::util::strlit;

pub struct FnReceiver {
    /// `&self`, `&mut self`, or empty for static methods.
    pub param: TokenStream,

    /// `&'a self`, `&'a mut self`, or empty.
    pub param_lifetime_a: TokenStream,

    /// `&'a re_export::Class`, `&'a mut re_export::Class`; `None` for static methods, whose builders hold no object.
    pub extender_ty: Option<TokenStream>,

    /// `self.` or `Self::`, to call sibling functions.
    pub self_prefix: TokenStream,
}

pub struct FnDefinition {
    pub functions: TokenStream,
    pub builders: TokenStream,
}

pub struct FnDefinitions {
    pub functions: TokenStream,
    pub builders: TokenStream,
}

impl FnDefinitions {
    /// Combines separate code from multiple function definitions into one, split by functions and builders.
    pub fn expand(definitions: impl Iterator<Item = FnDefinition>) -> FnDefinitions {
        // Collect needed because borrowed by 2 closures
        let definitions: Vec<_> = definitions.collect();
        let functions = definitions.iter().map(|def| &def.functions);
        let builder_structs = definitions.iter().map(|def| &def.builders);

        FnDefinitions {
            functions: quote! { #( #functions )* },
            builders: quote! { #( #builder_structs )* },
        }
    }
}

/// How the parameters of a generated function are declared and forwarded.
#[derive(Copy, Clone)]
pub(crate) enum FnKind {
    /// Most methods: public parameters, converted in the body.
    Regular,

    /// For default args, the crate-private `some_func_full()` variant receiving converted arguments.
    DefaultFull,
}

pub fn make_method_definition(method: &ClassMethod) -> FnDefinition {
    let has_default_params = method.uses_default_params();
    let receiver = make_receiver(method.qualifier, &method.surrounding_class.rust_ty);

    let (vis, kind, primary_fn_name) = if has_default_params {
        // Public API mapped by separate function.
        // Needs to be crate-public because default-arg builder lives outside the module.
        (quote! { pub(crate) }, FnKind::DefaultFull, format_ident!("{}_full", method.name))
    } else {
        (make_vis(method.is_private), FnKind::Regular, method.name.clone())
    };

    let params = make_param_decls(method.params.iter(), kind);
    let arg_exprs = make_ffi_arg_exprs(method.params.iter(), kind);

    let ptrcall_invocation = make_ptrcall_invocation(method);
    let return_decl = &method.return_value.decl;
    let receiver_param = &receiver.param;

    let primary_function = quote! {
        #vis fn #primary_fn_name(
            #receiver_param
            #( #params, )*
        ) #return_decl {
            let args = (#( #arg_exprs, )*);

            unsafe {
                #ptrcall_invocation
            }
        }
    };

    let (default_fn_code, builders) = if has_default_params {
        default_parameters::make_function_definition_with_defaults(method, &receiver, &primary_fn_name)
    } else {
        (TokenStream::new(), TokenStream::new())
    };

    FnDefinition {
        functions: quote! {
            #primary_function
            #default_fn_code
        },
        builders,
    }
}

pub fn make_receiver(qualifier: FnQualifier, class: &Ident) -> FnReceiver {
    let (param, param_lifetime_a, extender_ty) = match qualifier {
        FnQualifier::Const => (
            quote! { &self, },
            quote! { &'a self, },
            Some(quote! { &'a re_export::#class }),
        ),
        FnQualifier::Mut => (
            quote! { &mut self, },
            quote! { &'a mut self, },
            Some(quote! { &'a mut re_export::#class }),
        ),
        FnQualifier::Static => (TokenStream::new(), TokenStream::new(), None),
    };

    let self_prefix = if qualifier.is_static() {
        quote! { Self:: }
    } else {
        quote! { self. }
    };

    FnReceiver {
        param,
        param_lifetime_a,
        extender_ty,
        self_prefix,
    }
}

pub fn make_vis(is_private: bool) -> TokenStream {
    if is_private {
        quote! { pub(crate) }
    } else {
        quote! { pub }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

/// Looks up the method bind and sends the argument tuple `args` through a call frame.
fn make_ptrcall_invocation(method: &ClassMethod) -> TokenStream {
    let table_field = method.table_field();
    let class_str = strlit(&method.surrounding_class.godot_ty);
    let method_str = strlit(&method.godot_name);
    let return_ty = method.return_value.type_tokens();

    let call = if method.qualifier.is_static() {
        quote! { .out_static_ptrcall::<#return_ty>(method_bind) }
    } else {
        quote! { .out_ptrcall::<#return_ty>(method_bind, self.object_ptr, self.__checked_id()) }
    };

    quote! {
        let method_bind = sys::class_method_table().#table_field;

        CallFrame::new(CallContext::new(#class_str, #method_str), args)
            #call
    }
}

pub(crate) fn make_param_decls<'p>(
    params: impl Iterator<Item = &'p FnParam>,
    kind: FnKind,
) -> Vec<TokenStream> {
    params
        .map(|param| {
            let name = &param.name;
            let ty = match kind {
                FnKind::Regular => param.type_.param_decl(),
                FnKind::DefaultFull => param.type_.full_param_decl(),
            };

            quote! { #name: #ty }
        })
        .collect()
}

/// Expressions placed into the argument tuple, i.e. values implementing `FfiArg`.
fn make_ffi_arg_exprs<'p>(
    params: impl Iterator<Item = &'p FnParam>,
    kind: FnKind,
) -> Vec<TokenStream> {
    params
        .map(|param| {
            let name = &param.name;
            let internal = match kind {
                FnKind::Regular => param.type_.into_internal(quote! { #name }),
                FnKind::DefaultFull => quote! { #name },
            };

            param.type_.internal_to_ffi(internal)
        })
        .collect()
}
