/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Stores an opaque engine value of `N` bytes, whose contents only the engine interprets.
///
/// Due to `align(4)` / `align(8)` and not `packed` repr, this type may be bigger than `N` bytes.
/// The engine only needs to read and write those `N` bytes reliably.
///
/// The pointer width check happens here, after code generation, since build scripts cannot know it for every target.
#[cfg_attr(target_pointer_width = "32", repr(C, align(4)))]
#[cfg_attr(target_pointer_width = "64", repr(C, align(8)))]
#[derive(Copy, Clone)]
pub struct Opaque<const N: usize> {
    storage: [u8; N],
    marker: std::marker::PhantomData<*const u8>, // disable Send/Sync
}

impl<const N: usize> Opaque<N> {
    /// All-zero bytes. Only valid as a placeholder that the engine overwrites, never as a constructed value.
    pub const fn zeroed() -> Self {
        Self {
            storage: [0; N],
            marker: std::marker::PhantomData,
        }
    }

    pub const fn size() -> usize {
        N
    }
}

impl<const N: usize> std::fmt::Debug for Opaque<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Opaque(")?;
        for byte in self.storage.iter() {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_alignment_fits_pointers() {
        assert!(std::mem::size_of::<Opaque<8>>() >= 8);
        assert_eq!(
            std::mem::align_of::<Opaque<8>>(),
            std::mem::align_of::<*const u8>()
        );
        assert_eq!(Opaque::<4>::size(), 4);
    }

    #[test]
    fn opaque_debug_prints_bytes() {
        let opaque = Opaque::<2>::zeroed();
        assert_eq!(format!("{opaque:?}"), "Opaque(0000)");
    }
}
