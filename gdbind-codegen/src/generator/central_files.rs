/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::generator::enums;
use crate::models::domain::{BuiltinSize, ExtensionApi};
use crate::util::ident;
use crate::SubmitFn;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use std::path::Path;

/// Builtins whose layout is hidden from Rust and only known by size.
const OPAQUE_BUILTINS: &[(&str, &str)] = &[("String", "OpaqueString"), ("StringName", "OpaqueStringName")];

pub fn generate_sys_central_file(api: &ExtensionApi, sys_gen_path: &Path, submit_fn: &mut SubmitFn) {
    let code = make_sys_central_code(api);
    submit_fn(sys_gen_path.join("central.rs"), code);
}

pub fn generate_core_central_file(api: &ExtensionApi, core_gen_path: &Path, submit_fn: &mut SubmitFn) {
    let global_enum_defs = enums::make_enums(&api.global_enums);

    let code = quote! {
        pub mod global_enums {
            #global_enum_defs
        }
    };

    submit_fn(core_gen_path.join("central.rs"), code);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

pub fn make_sys_central_code(api: &ExtensionApi) -> TokenStream {
    let version = &api.godot_version;
    let (major, minor, patch) = (version.major, version.minor, version.patch);
    let version_string = &version.version_string;
    let build_config_str = api.build_config.json_key();

    let sizes: Vec<&BuiltinSize> = api
        .builtin_sizes
        .iter()
        .filter(|s| s.config == api.build_config)
        .collect();

    let opaque_types = OPAQUE_BUILTINS.iter().map(|(godot_name, rust_name)| {
        let size = find_size(&sizes, godot_name);
        let rust_name = ident(rust_name);

        quote! {
            pub type #rust_name = crate::opaque::Opaque<#size>;
        }
    });

    let size_consts = sizes.iter().map(|s| {
        let name = ident(&s.builtin_original_name.to_uppercase());
        let size = Literal::usize_unsuffixed(s.size);

        quote! {
            pub const #name: usize = #size;
        }
    });

    quote! {
        pub const GODOT_VERSION_STRING: &str = #version_string;
        pub const GODOT_VERSION_MAJOR: u8 = #major;
        pub const GODOT_VERSION_MINOR: u8 = #minor;
        pub const GODOT_VERSION_PATCH: u8 = #patch;

        /// Key of the builtin size table these bindings were generated for, e.g. `float_64`.
        pub const BUILD_CONFIG: &str = #build_config_str;

        pub mod types {
            #( #opaque_types )*
        }

        /// Byte sizes of builtin types, as declared by the engine for the current build configuration.
        pub mod builtin_sizes {
            #( #size_consts )*
        }
    }
}

fn find_size(sizes: &[&BuiltinSize], godot_name: &str) -> Literal {
    let size = sizes
        .iter()
        .find(|s| s.builtin_original_name == godot_name)
        .unwrap_or_else(|| panic!("builtin size of `{godot_name}` missing in extension_api.json"))
        .size;

    Literal::usize_unsuffixed(size)
}
