/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Code generator turning the engine class database into Rust bindings.
//!
//! Invoked from the build scripts of `gdbind-ffi` (method-bind table, opaque type sizes) and `gdbind-core`
//! (engine classes, enums and constants).

mod context;
mod conv;
mod generator;
mod models;
mod special_cases;
mod util;

#[cfg(test)]
mod tests;

use crate::context::Context;
use crate::generator::central_files::{generate_core_central_file, generate_sys_central_file};
use crate::generator::classes::generate_class_files;
use crate::generator::method_tables::generate_sys_classes_file;
use crate::models::domain::{BuildConfig, ExtensionApi};
use crate::models::json::load_extension_api;
use gdbind_bindings::StopWatch;
use proc_macro2::TokenStream;
use std::path::{Path, PathBuf};

pub type SubmitFn<'a> = dyn FnMut(PathBuf, TokenStream) + 'a;

fn write_file(path: &Path, contents: String) {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .unwrap_or_else(|e| panic!("failed to create dir {};\n\t{}", dir.display(), e));
    }

    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write code file to {};\n\t{}", path.display(), e));
}

#[cfg(feature = "codegen-rustfmt")]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());
    format_file_if_needed(&path);
}

#[cfg(not(feature = "codegen-rustfmt"))]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());
}

/// Runs `rustfmt` on a generated file. A missing `rustfmt` leaves the file unformatted.
#[cfg(feature = "codegen-rustfmt")]
fn format_file_if_needed(path: &Path) {
    let output = std::process::Command::new("rustfmt")
        .arg("--edition=2021")
        .arg(path)
        .output();

    match output {
        Ok(out) if out.status.success() => {}
        Ok(out) => panic!(
            "rustfmt failed on {}:\n{}",
            path.display(),
            String::from_utf8_lossy(&out.stderr)
        ),
        Err(e) => println!("cargo:warning=rustfmt not available, generated code stays unformatted: {e}"),
    }
}

fn load_api(watch: &mut StopWatch) -> (ExtensionApi, Context) {
    let json_api = load_extension_api(watch);

    let ctx = Context::build_from_api(&json_api);
    watch.record("build_context");

    let api = ExtensionApi::from_json(&json_api, BuildConfig::from_env(), &ctx);
    watch.record("map_domain_models");

    (api, ctx)
}

/// Generates the files included by `gdbind-ffi`: `central.rs` and `table_classes.rs`.
pub fn generate_sys_files(sys_gen_path: &Path, watch: &mut StopWatch) {
    let (api, _ctx) = load_api(watch);

    generate_sys_central_file(&api, sys_gen_path, &mut submit_fn);
    watch.record("generate_central_file");

    generate_sys_classes_file(&api, sys_gen_path, &mut submit_fn);
    watch.record("generate_classes_file");
}

/// Generates the files included by `gdbind-core`: `central.rs`, `mod.rs` and one file per class under `classes/`.
pub fn generate_core_files(core_gen_path: &Path) {
    let mut watch = StopWatch::start();

    let (api, ctx) = load_api(&mut watch);

    generate_core_mod_file(core_gen_path, &mut submit_fn);

    generate_core_central_file(&api, core_gen_path, &mut submit_fn);
    watch.record("generate_central_file");

    // Note: deletes entire generated directory!
    generate_class_files(&api, &ctx, &core_gen_path.join("classes"), &mut submit_fn);
    watch.record("generate_class_files");

    watch.write_stats_to(&core_gen_path.join("codegen-stats.txt"));
}

fn generate_core_mod_file(gen_path: &Path, submit_fn: &mut SubmitFn) {
    let code = quote::quote! {
        pub mod central;
        pub mod classes;
    };

    submit_fn(gen_path.join("mod.rs"), code);
}
