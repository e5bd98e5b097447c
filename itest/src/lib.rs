/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::init::{gdextension, ExtensionLibrary, InitLevel};

use crate::framework::LevelEvent;

mod framework;

#[cfg(test)]
mod builtin_tests;
#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod object_tests;

#[gdextension(entry_point = itest_init)]
unsafe impl ExtensionLibrary for framework::IntegrationTests {
    fn min_level() -> InitLevel {
        InitLevel::Servers
    }

    fn on_level_init(level: InitLevel) {
        framework::record_level_event(LevelEvent::Init(level));

        if level == InitLevel::Scene {
            framework::run_scene_check();
        }
    }

    fn on_level_deinit(level: InitLevel) {
        framework::record_level_event(LevelEvent::Deinit(level));
    }
}
