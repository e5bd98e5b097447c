/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Logging to the engine's debugger and output.

/// Path of the enclosing function, taken from the type name of a nested item.
#[macro_export]
#[doc(hidden)]
macro_rules! inner_function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! inner_godot_msg {
    ($godot_fn:ident; $fmt:literal $(, $args:expr)* $(,)?) => {{
        let msg = format!("{}\0", format_args!($fmt $(, $args)*));

        // Before the engine is loaded (and in unit tests), messages go to stderr.
        if $crate::sys::is_initialized() {
            let function = format!("{}\0", $crate::inner_function!());

            // SAFETY: all strings are null-terminated and outlive the call.
            unsafe {
                $crate::sys::interface_fn!($godot_fn)(
                    $crate::sys::c_str(msg.as_bytes()),
                    $crate::sys::c_str(function.as_bytes()),
                    $crate::sys::c_str(concat!(file!(), "\0").as_bytes()),
                    line!() as i32,
                    $crate::sys::GDEXTENSION_FALSE, // no toast notification in editor
                );
            }
        } else {
            eprintln!("[{}] {}", stringify!($godot_fn), &msg[..msg.len() - 1]);
        }
    }};
}

/// Reports a warning through the engine's `print_warning`, with the calling function, file and line.
#[macro_export]
macro_rules! godot_warn {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(print_warning; $fmt $(, $args)*)
    };
}

/// Reports an error through the engine's `print_error`.
///
/// Panics caught at the FFI boundary are reported this way.
#[macro_export]
macro_rules! godot_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(print_error; $fmt $(, $args)*)
    };
}

/// Reports a script error through the engine's `print_script_error`.
#[macro_export]
macro_rules! godot_script_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::inner_godot_msg!(print_script_error; $fmt $(, $args)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn falls_back_to_stderr_before_init() {
        // Must not touch the interface while no engine is loaded.
        crate::godot_warn!("value {} out of range", 42);
        crate::godot_error!("plain message");
        crate::godot_script_error!("{}:{}", "file.gd", 3,);
    }

    #[test]
    fn inner_function_names_enclosing_fn() {
        let name = crate::inner_function!();
        assert!(name.ends_with("inner_function_names_enclosing_fn"), "{name}");
    }
}
