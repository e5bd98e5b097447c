/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::num::NonZeroU64;

/// Represents a non-zero instance ID.
///
/// The engine hands out IDs as `u64`, while scripts see them as `i64`. Both representations are available, with `i64` being
/// the canonical one in the public API.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct InstanceId {
    value: NonZeroU64,
}

impl InstanceId {
    /// Bit set by the engine for every object inheriting `RefCounted`.
    const REF_COUNTED_BIT: u64 = 1 << 63;

    /// Constructs an instance ID from an integer, or `None` if the integer is zero.
    ///
    /// This does *not* check if the instance is valid.
    pub fn try_from_i64(id: i64) -> Option<Self> {
        Self::try_from_u64(id as u64)
    }

    /// ⚠️ Constructs an instance ID from a non-zero integer, or panics.
    ///
    /// # Panics
    /// If `id` is zero.
    pub fn from_nonzero(id: i64) -> Self {
        Self::try_from_i64(id).unwrap_or_else(|| panic!("expected non-zero instance ID"))
    }

    pub(crate) fn try_from_u64(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(|value| Self { value })
    }

    pub fn to_i64(self) -> i64 {
        self.to_u64() as i64
    }

    /// Whether the object behind this ID inherits `RefCounted`.
    ///
    /// Needs no engine round-trip, the information is encoded in the ID itself.
    pub fn is_ref_counted(self) -> bool {
        self.to_u64() & Self::REF_COUNTED_BIT != 0
    }

    pub(crate) fn to_u64(self) -> u64 {
        self.value.get()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i64())
    }
}

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({})", self.to_i64())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(InstanceId::try_from_i64(0), None);
        assert_eq!(InstanceId::try_from_u64(0), None);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn from_nonzero_panics_on_zero() {
        InstanceId::from_nonzero(0);
    }

    #[test]
    fn ref_counted_bit() {
        let manual = InstanceId::from_nonzero(42);
        assert!(!manual.is_ref_counted());

        let ref_counted = InstanceId::try_from_u64((1 << 63) | 42).unwrap();
        assert!(ref_counted.is_ref_counted());
        assert!(ref_counted.to_i64() < 0, "scripts see ref-counted IDs as negative");
    }

    #[test]
    fn formatting() {
        let id = InstanceId::from_nonzero(-7);
        assert_eq!(id.to_string(), "-7");
        assert_eq!(format!("{id:?}"), "InstanceId(-7)");
        assert_eq!(id.to_u64(), (-7i64) as u64);
    }
}
