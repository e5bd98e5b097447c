/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Symbols used by generated code and the `#[gdextension]` macro. Not part of the public API.

use std::sync::{Arc, Mutex};

use crate::godot_error;

pub use crate::init::__gdbind_load_library;

struct PanicLocation {
    line: u32,
    file: String,
}

/// Executes `code`. If a panic is thrown, it is caught and an error message is printed to Godot.
///
/// Returns `Err(message)` if a panic occurred, and `Ok(result)` with the result of `code` otherwise.
pub fn handle_panic<E, F, R, S>(error_context: E, code: F) -> Result<R, String>
where
    E: FnOnce() -> S,
    F: FnOnce() -> R + std::panic::UnwindSafe,
    S: std::fmt::Display,
{
    let location: Arc<Mutex<Option<PanicLocation>>> = Arc::new(Mutex::new(None));

    // Back up previous hook, set new one.
    let prev_hook = std::panic::take_hook();
    {
        let location = location.clone();
        std::panic::set_hook(Box::new(move |panic_info| {
            let Ok(mut guard) = location.lock() else {
                return;
            };

            *guard = panic_info.location().map(|loc| PanicLocation {
                file: loc.file().to_string(),
                line: loc.line(),
            });
        }));
    }

    // Run code that may panic, restore hook.
    let outcome = std::panic::catch_unwind(code);
    std::panic::set_hook(prev_hook);

    match outcome {
        Ok(result) => Ok(result),
        Err(err) => {
            let where_ = match location.lock().ok().as_deref().and_then(Option::as_ref) {
                Some(loc) => format!("{}:{}", loc.file, loc.line),
                None => String::from("(unknown location)"),
            };

            godot_error!(
                "Rust function panicked at {}.\n  Context: {}",
                where_,
                error_context()
            );

            let msg = format_panic_message(extract_panic_message(err));
            godot_error!("{}", msg);

            Err(msg)
        }
    }
}

pub fn extract_panic_message(err: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = err.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        format!("(panic of type ID {:?})", err.type_id())
    }
}

fn format_panic_message(msg: String) -> String {
    // If the message contains newlines, print all of the lines after a line break, and indent them.
    let lbegin = "\n  ";
    let indented = msg.replace('\n', lbegin);

    if indented.len() != msg.len() {
        format!("[panic]{lbegin}{indented}")
    } else {
        format!("[panic]  {msg}")
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_value_without_panic() {
        let result = handle_panic(|| "ctx", || 7);
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn catches_panic_message() {
        let result: Result<(), String> = handle_panic(|| "loading", || panic!("bad level"));
        assert_eq!(result, Err(String::from("[panic]  bad level")));
    }

    #[test]
    fn indents_multiline_messages() {
        let msg = format_panic_message(String::from("first\nsecond"));
        assert_eq!(msg, "[panic]\n  first\n  second");
    }
}
