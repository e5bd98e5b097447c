/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

fn main() {
    let mut watch = gdbind_bindings::StopWatch::start();

    // Generated next to the sources (not in OUT_DIR), so IDEs can resolve the symbols.
    let gen_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/gen"));
    gdbind_bindings::clear_dir(gen_path, &mut watch);

    gdbind_codegen::generate_sys_files(gen_path, &mut watch);

    println!("cargo:rerun-if-changed=build.rs");
    gdbind_bindings::emit_rerun_if_changed();

    watch.write_stats_to(&gen_path.join("codegen-stats.txt"));
}
