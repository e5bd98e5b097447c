/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::init::InitLevel;
use gdbind::sys;

use crate::framework::{engine, init, level_events, scene_check, LevelEvent};

#[test]
fn init_levels_in_order() {
    let startup = init();
    assert_eq!(startup.min_level(), InitLevel::Servers);

    let events = level_events();
    assert_eq!(
        events[..2],
        [
            LevelEvent::Init(InitLevel::Servers),
            LevelEvent::Init(InitLevel::Scene)
        ]
    );

    // Levels below the minimum are never reported to the library.
    assert!(!events.contains(&LevelEvent::Init(InitLevel::Core)));
}

#[test]
fn init_scene_classes_usable() {
    init();

    // The library created a `Label` during its own `Scene` callback.
    assert_eq!(scene_check(), Some("ready"));
    assert!(!sys::class_method_table().label__set_text.is_null());
}

#[test]
fn init_editor_level_roundtrip() {
    let startup = init();

    startup.initialize(InitLevel::Editor);
    startup.deinitialize(InitLevel::Editor);

    let events = level_events();
    let init_pos = events
        .iter()
        .position(|e| *e == LevelEvent::Init(InitLevel::Editor))
        .expect("editor level initialized");
    let deinit_pos = events
        .iter()
        .position(|e| *e == LevelEvent::Deinit(InitLevel::Editor))
        .expect("editor level deinitialized");

    assert!(init_pos < deinit_pos);
}

#[test]
fn init_twice_fails() {
    init();

    let (success, _) = engine::call_entry(crate::itest_init);

    assert_eq!(success, sys::GDEXTENSION_FALSE);
    assert!(engine::log_contains("Context: error when loading GDExtension library"));
    assert!(engine::log_contains("gdbind is already initialized"));
}

#[test]
fn init_runtime_version() {
    init();

    let version = sys::runtime_version();
    assert_eq!((version.major, version.minor, version.patch), (4, 3, 0));
    assert!(version.string.starts_with("Godot Engine v4.3"), "{}", version.string);
}
