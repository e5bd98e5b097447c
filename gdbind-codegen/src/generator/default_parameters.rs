/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use heck::ToUpperCamelCase;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::generator::functions_common::{self, FnKind, FnReceiver};
use crate::models::domain::{ClassMethod, FnParam};

/// Generates the public `foo()` and `foo_ex()` functions plus the `ExFoo` builder for a method with default parameters.
///
/// Returns `(functions, builder)`. Functions go into the class' `impl` block, the builder into the sidecar module.
pub fn make_function_definition_with_defaults(
    method: &ClassMethod,
    receiver: &FnReceiver,
    full_fn_name: &Ident,
) -> (TokenStream, TokenStream) {
    let (required_params, default_params) = split_params(&method.params);

    let simple_fn_name = &method.name;
    let extended_fn_name = format_ident!("{}_ex", simple_fn_name);
    let builder_ty = format_ident!("Ex{}", simple_fn_name.to_string().to_upper_camel_case());
    let builder_doc = format!(
        "Default-param extender for [`{class}::{method}`][super::{class}::{method}].",
        class = method.surrounding_class.rust_ty,
        method = simple_fn_name,
    );

    let return_decl = &method.return_value.decl;
    let vis = functions_common::make_vis(method.is_private);
    let receiver_param = &receiver.param;
    let receiver_param_a = &receiver.param_lifetime_a;
    let self_prefix = &receiver.self_prefix;
    let class_name = &method.surrounding_class.rust_ty;

    let required_decls = functions_common::make_param_decls(required_params.iter().copied(), FnKind::Regular);
    let required_decls_lifetimed: Vec<TokenStream> = required_params
        .iter()
        .map(|param| {
            let name = &param.name;
            let ty = param.type_.param_decl_lifetimed();
            quote! { #name: #ty }
        })
        .collect();
    let required_names: Vec<&Ident> = required_params.iter().map(|p| &p.name).collect();
    let required_internal_args = required_params
        .iter()
        .map(|param| {
            let name = &param.name;
            param.type_.into_internal(quote! { #name })
        });

    let field_decls = method.params.iter().map(|param| {
        let name = &param.name;
        let ty = param.type_.private_field_decl();
        quote! { #name: #ty }
    });

    let required_field_params = required_params.iter().map(|param| {
        let name = &param.name;
        let ty = param.type_.private_field_decl();
        quote! { #name: #ty }
    });

    let default_field_inits = default_params.iter().map(|param| {
        let name = &param.name;
        let value = &param.default_value;
        quote! { #name: #value }
    });

    let setters = default_params.iter().copied().map(make_setter);
    let all_field_names = method.params.iter().map(|p| &p.name);

    // Builders of static methods hold no object, only the lifetime of their borrowed arguments.
    let (object_field, object_param, object_init, object_ctor_arg, object_call_arg) = match &receiver.extender_ty {
        Some(receiver_ty) => (
            quote! { surround_object: #receiver_ty, },
            quote! { surround_object: #receiver_ty, },
            quote! { surround_object, },
            quote! { self, },
            quote! { self.surround_object, },
        ),
        None => (
            quote! { _lifetime: std::marker::PhantomData<&'a ()>, },
            TokenStream::new(),
            quote! { _lifetime: std::marker::PhantomData, },
            TokenStream::new(),
            TokenStream::new(),
        ),
    };

    let functions = quote! {
        #[inline]
        #vis fn #simple_fn_name(#receiver_param #( #required_decls, )*) #return_decl {
            #self_prefix #extended_fn_name(#( #required_names, )*).done()
        }

        #[inline]
        #vis fn #extended_fn_name<'a>(#receiver_param_a #( #required_decls_lifetimed, )*) -> #builder_ty<'a> {
            #builder_ty::new(#object_ctor_arg #( #required_internal_args, )*)
        }
    };

    let builder = quote! {
        #[doc = #builder_doc]
        #[must_use]
        pub struct #builder_ty<'a> {
            #object_field
            #( #field_decls, )*
        }

        #[allow(clippy::wrong_self_convention, clippy::redundant_field_names, clippy::needless_update)]
        impl<'a> #builder_ty<'a> {
            fn new(#object_param #( #required_field_params, )*) -> Self {
                Self {
                    #object_init
                    #( #required_names, )*
                    #( #default_field_inits, )*
                }
            }

            #( #setters )*

            #[inline]
            pub fn done(self) #return_decl {
                re_export::#class_name::#full_fn_name(
                    #object_call_arg
                    #( self.#all_field_names, )*
                )
            }
        }
    };

    (functions, builder)
}

/// Splits parameters into required ones and trailing ones with defaults.
fn split_params(params: &[FnParam]) -> (Vec<&FnParam>, Vec<&FnParam>) {
    params.iter().partition(|p| p.default_value.is_none())
}

fn make_setter(param: &FnParam) -> TokenStream {
    let name = &param.name;
    let ty = param.type_.param_decl_lifetimed();
    let value = param.type_.into_internal(quote! { value });

    quote! {
        #[inline]
        pub fn #name(self, value: #ty) -> Self {
            Self {
                #name: #value,
                ..self
            }
        }
    }
}
