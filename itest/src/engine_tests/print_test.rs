/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::prelude::*;

use crate::framework::engine::{self, LogKind};
use crate::framework::init;

fn find_entry(message: &str) -> engine::LogEntry {
    engine::log_entries()
        .into_iter()
        .find(|entry| entry.message == message)
        .unwrap_or_else(|| panic!("message not logged: {message}"))
}

#[test]
fn print_macros_reach_engine() {
    init();

    godot_warn!("print_test: warning {}", 1);
    godot_error!("print_test: error {}", 2);
    godot_script_error!("print_test: script error {}", 3);

    assert_eq!(find_entry("print_test: warning 1").kind, LogKind::Warning);
    assert_eq!(find_entry("print_test: error 2").kind, LogKind::Error);
    assert_eq!(find_entry("print_test: script error 3").kind, LogKind::ScriptError);
}

#[test]
fn print_reports_calling_function() {
    init();

    godot_warn!("print_test: located");

    let entry = find_entry("print_test: located");
    assert!(
        entry.function.ends_with("print_test::print_reports_calling_function"),
        "{}",
        entry.function
    );
}

#[test]
fn print_panic_in_callback_logged() {
    init();

    let result: Result<(), String> = gdbind::private::handle_panic(
        || "print_test: callback context",
        || panic!("print_test: boom"),
    );

    assert_eq!(result, Err(String::from("[panic]  print_test: boom")));
    assert!(engine::log_contains("Context: print_test: callback context"));
    assert!(engine::log_contains("print_test: boom"));
}
