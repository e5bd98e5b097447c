/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Build-time resources for gdbind: the engine class database and a phase stopwatch.

pub(crate) mod watch;

#[cfg(feature = "api-custom-json")]
mod godot_json;

use std::borrow::Cow;
use std::path::Path;

pub use watch::StopWatch;

/// Name of the environment variable pointing to a user-supplied `extension_api.json`.
pub const CUSTOM_JSON_ENV_VAR: &str = "GDBIND_EXTENSION_JSON";

const BUNDLED_JSON: &str = include_str!("../res/extension_api.json");

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class database

/// Returns the engine class database that code generation runs on.
///
/// By default, this is the bundled `res/extension_api.json`. With the `api-custom-json` feature, the file named by
/// [`CUSTOM_JSON_ENV_VAR`] is read instead.
pub fn load_gdextension_json(watch: &mut StopWatch) -> Cow<'static, str> {
    #[cfg(feature = "api-custom-json")]
    let json = Cow::Owned(godot_json::load_custom_gdextension_json());

    #[cfg(not(feature = "api-custom-json"))]
    let json = Cow::Borrowed(BUNDLED_JSON);

    watch.record("load_api_json");
    json
}

/// The class database shipped with this crate, independent of feature flags.
///
/// Used by tooling that must match the compiled bindings exactly, e.g. test doubles of the engine.
pub fn bundled_gdextension_json() -> &'static str {
    BUNDLED_JSON
}

/// Tells Cargo to re-run the calling build script when the class database changes.
pub fn emit_rerun_if_changed() {
    #[cfg(feature = "api-custom-json")]
    {
        println!("cargo:rerun-if-env-changed={CUSTOM_JSON_ENV_VAR}");
        if let Ok(path) = std::env::var(CUSTOM_JSON_ENV_VAR) {
            println!("cargo:rerun-if-changed={path}");
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Common

pub fn clear_dir(dir: &Path, watch: &mut StopWatch) {
    if dir.exists() {
        remove_dir_all_reliable(dir);
        watch.record("delete_gen_dir");
    }
    std::fs::create_dir_all(dir).unwrap_or_else(|e| panic!("failed to create dir: {e}"));
}

// Removal sometimes fails spuriously on CI file systems; retry a few times.
pub fn remove_dir_all_reliable(path: &Path) {
    let mut retry_count = 0;

    while path.exists() {
        match std::fs::remove_dir_all(path) {
            Ok(_) => break,
            Err(err) => {
                assert_ne!(
                    retry_count,
                    5,
                    "cannot remove directory: {path_display} after 5 tries with error: {err}",
                    path_display = path.display()
                );
                retry_count += 1;
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_json_has_header_and_classes() {
        let json = bundled_gdextension_json();

        assert!(json.contains("\"header\""));
        assert!(json.contains("\"classes\""));
        assert!(json.contains("\"name\": \"Object\""));
    }

    #[cfg(not(feature = "api-custom-json"))]
    #[test]
    fn load_records_phase() {
        let mut watch = StopWatch::start();
        let json = load_gdextension_json(&mut watch);

        assert!(matches!(json, Cow::Borrowed(_)));
        assert_eq!(watch.phase_names(), vec!["load_api_json"]);
    }
}
