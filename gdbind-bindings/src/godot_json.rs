/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Loading of a user-provided class database.

use std::fs;
use std::path::Path;

use crate::CUSTOM_JSON_ENV_VAR;

pub fn load_custom_gdextension_json() -> String {
    let path = std::env::var(CUSTOM_JSON_ENV_VAR).unwrap_or_else(|_| {
        panic!(
            "gdbind with `api-custom-json` feature requires {CUSTOM_JSON_ENV_VAR} \
            environment variable (with the path to the said json)."
        )
    });
    let json_path = Path::new(&path);

    fs::read_to_string(json_path).unwrap_or_else(|e| {
        panic!(
            "failed to open file with custom GDExtension JSON {}: {e}",
            json_path.display()
        )
    })
}
