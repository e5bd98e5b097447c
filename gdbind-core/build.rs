/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

fn main() {
    // Generated next to the sources rather than in OUT_DIR, so IDEs can resolve the symbols.
    let gen_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/gen"));

    if gen_path.exists() {
        gdbind_bindings::remove_dir_all_reliable(gen_path);
    }

    gdbind_codegen::generate_core_files(gen_path);

    println!("cargo:rerun-if-changed=build.rs");
    gdbind_bindings::emit_rerun_if_changed();
}
