/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Initialization level reported by the engine.
///
/// Levels are entered in ascending order and left in descending order. The generated class bindings are resolved
/// when `Scene` is entered. Earlier levels only have builtin types.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InitLevel {
    Core,
    Servers,

    /// Class method binds are loaded here.
    Scene,

    /// Only entered when running inside the editor.
    Editor,
}

impl InitLevel {
    #[doc(hidden)]
    pub fn from_sys(level: crate::GDExtensionInitializationLevel) -> Self {
        match level {
            crate::GDEXTENSION_INITIALIZATION_CORE => Self::Core,
            crate::GDEXTENSION_INITIALIZATION_SERVERS => Self::Servers,
            crate::GDEXTENSION_INITIALIZATION_SCENE => Self::Scene,
            crate::GDEXTENSION_INITIALIZATION_EDITOR => Self::Editor,
            _ => {
                // Newer engines may add levels; treat them like the last level that loads classes.
                eprintln!("WARNING: unknown initialization level {level}, treated as Scene");
                Self::Scene
            }
        }
    }

    #[doc(hidden)]
    pub fn to_sys(self) -> crate::GDExtensionInitializationLevel {
        match self {
            Self::Core => crate::GDEXTENSION_INITIALIZATION_CORE,
            Self::Servers => crate::GDEXTENSION_INITIALIZATION_SERVERS,
            Self::Scene => crate::GDEXTENSION_INITIALIZATION_SCENE,
            Self::Editor => crate::GDEXTENSION_INITIALIZATION_EDITOR,
        }
    }

    /// All levels, in initialization order.
    pub fn all() -> [Self; 4] {
        [Self::Core, Self::Servers, Self::Scene, Self::Editor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(InitLevel::Core < InitLevel::Servers);
        assert!(InitLevel::Servers < InitLevel::Scene);
        assert!(InitLevel::Scene < InitLevel::Editor);
    }

    #[test]
    fn sys_round_trip() {
        for level in InitLevel::all() {
            assert_eq!(InitLevel::from_sys(level.to_sys()), level);
        }
    }

    #[test]
    fn unknown_sys_level_maps_to_scene() {
        assert_eq!(
            InitLevel::from_sys(crate::GDEXTENSION_MAX_INITIALIZATION_LEVEL),
            InitLevel::Scene
        );
    }
}
