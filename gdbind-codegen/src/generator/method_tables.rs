/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The `ClassMethodTable` holding one method bind per generated engine method.

use crate::conv;
use crate::models::domain::{Class, ExtensionApi, TyName};
use crate::util::strlit;
use crate::SubmitFn;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use std::path::Path;

pub fn generate_sys_classes_file(api: &ExtensionApi, sys_gen_path: &Path, submit_fn: &mut SubmitFn) {
    let code = make_class_method_table(api);
    submit_fn(sys_gen_path.join("table_classes.rs"), code);
}

/// Field name of a method bind in the table, e.g. `label__set_text` or `texture_2d__get_width`.
pub fn make_table_field(class: &TyName, godot_method_name: &str) -> Ident {
    format_ident!(
        "{}__{}",
        conv::to_snake_case(&class.godot_ty),
        godot_method_name
    )
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

struct ClassMethodInits {
    class_sname_var: Ident,
    class_sname_init: TokenStream,
    method_decls: Vec<TokenStream>,
    method_inits: Vec<TokenStream>,
}

pub fn make_class_method_table(api: &ExtensionApi) -> TokenStream {
    let groups: Vec<ClassMethodInits> = api
        .classes
        .iter()
        .filter(|class| !class.methods.is_empty())
        .map(make_class_method_inits)
        .collect();

    let class_count = groups.len();
    let method_count: usize = groups.iter().map(|g| g.method_decls.len()).sum();

    let sname_vars = groups.iter().map(|g| &g.class_sname_var);
    let sname_inits = groups.iter().map(|g| &g.class_sname_init);
    let method_decls = groups.iter().flat_map(|g| g.method_decls.iter());
    let method_inits = groups.iter().flat_map(|g| g.method_inits.iter());

    quote! {
        #[allow(non_snake_case)]
        pub struct ClassMethodTable {
            #( #method_decls, )*
        }

        impl ClassMethodTable {
            pub const CLASS_COUNT: usize = #class_count;
            pub const METHOD_COUNT: usize = #method_count;

            /// Resolves every method bind through `classdb_get_method_bind`.
            ///
            /// # Panics
            /// If the engine does not know one of the methods, or knows it with a different hash.
            pub fn load(string_names: &mut crate::StringCache) -> Self {
                let get_method_bind = crate::interface_fn!(classdb_get_method_bind);

                #( let #sname_vars = #sname_inits; )*

                Self {
                    #( #method_inits, )*
                }
            }
        }
    }
}

fn make_class_method_inits(class: &Class) -> ClassMethodInits {
    let class_name_str = strlit(&class.name.godot_ty);
    let class_sname_var = format_ident!("sname_{}", class.mod_name.rust_mod);

    let mut method_decls = Vec::with_capacity(class.methods.len());
    let mut method_inits = Vec::with_capacity(class.methods.len());

    for method in class.methods.iter() {
        let field = method.table_field();
        let method_name_str = strlit(&method.godot_name);
        let hash = method.hash;

        method_decls.push(quote! { pub #field: crate::ClassMethodBind });
        method_inits.push(quote! {
            #field: crate::load_class_method(
                get_method_bind,
                string_names,
                #class_sname_var,
                #class_name_str,
                #method_name_str,
                #hash
            )
        });
    }

    ClassMethodInits {
        class_sname_init: quote! { string_names.fetch(#class_name_str) },
        class_sname_var,
        method_decls,
        method_inits,
    }
}
