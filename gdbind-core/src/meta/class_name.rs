/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::StringName;

/// Name of a class registered with Godot.
///
/// Engine classes are always known at compile time, so this only stores a static string. Conversion to the engine's
/// [`StringName`] happens on demand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ClassName {
    name: &'static str,
}

impl ClassName {
    #[doc(hidden)]
    pub const fn new_static(name: &'static str) -> Self {
        Self { name }
    }

    pub fn as_str(&self) -> &'static str {
        self.name
    }

    /// Converts to the engine's string name. Requires a running engine.
    pub fn to_string_name(&self) -> StringName {
        StringName::from(self.name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassName({:?})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_and_debug() {
        let name = ClassName::new_static("PlaceholderTexture2D");

        assert_eq!(name.to_string(), "PlaceholderTexture2D");
        assert_eq!(format!("{name:?}"), r#"ClassName("PlaceholderTexture2D")"#);
        assert_eq!(name.as_str(), "PlaceholderTexture2D");
    }
}
