/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::{Mutex, OnceLock, PoisonError};

use gdbind::classes::Label;
use gdbind::init::InitLevel;
use gdbind::obj::NewAlloc;

#[cfg(test)]
pub mod engine;

pub struct IntegrationTests;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Observations made from inside the library

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LevelEvent {
    Init(InitLevel),
    Deinit(InitLevel),
}

static LEVEL_EVENTS: Mutex<Vec<LevelEvent>> = Mutex::new(Vec::new());
static SCENE_CHECK: OnceLock<String> = OnceLock::new();

pub fn record_level_event(event: LevelEvent) {
    LEVEL_EVENTS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(event);
}

/// All level callbacks received so far, in order.
#[cfg(test)]
pub fn level_events() -> Vec<LevelEvent> {
    LEVEL_EVENTS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Uses an engine class as soon as classes become available.
pub fn run_scene_check() {
    let mut label = Label::new_alloc();
    label.set_text("ready");

    let _ = SCENE_CHECK.set(label.text());
    label.free();
}

/// Text that the scene check read back from the engine, if it ran.
#[cfg(test)]
pub fn scene_check() -> Option<&'static str> {
    SCENE_CHECK.get().map(String::as_str)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Test utilities

/// Loads the library into the in-process engine (once per test binary) and returns its level callbacks.
///
/// Every test touching the engine must call this first.
#[cfg(test)]
pub fn init() -> &'static engine::Startup {
    static STARTUP: OnceLock<engine::Startup> = OnceLock::new();

    STARTUP.get_or_init(|| engine::boot(crate::itest_init, InitLevel::Scene))
}

/// Runs `code` and asserts that it panics. Returns the panic message.
///
/// Unlike `#[should_panic]`, the test can continue afterwards, e.g. to check that an object survived.
#[cfg(test)]
pub fn expect_panic(context: &str, code: impl FnOnce()) -> String {
    let panic = std::panic::catch_unwind(std::panic::AssertUnwindSafe(code));

    match panic {
        Ok(()) => panic!("expected panic, but none occurred: {context}"),
        Err(payload) => gdbind::private::extract_panic_message(payload),
    }
}
