/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind_ffi::GodotFfi;

use crate::builtin::{Color, GString, Rect2, StringName, Vector2, Vector3};
use crate::meta::{ConvertError, ErrorKind};
use crate::obj::{Gd, GodotClass, RawGd};

/// Type that is directly representable in ptrcalls, possibly after conversion.
///
/// The engine encodes every integer as `int64_t` and every float as `double` in ptrcalls. Narrower Rust types such as `i32`
/// or `f32` are therefore widened on the way in and range-checked on the way out.
pub trait GodotType: Sized + 'static {
    /// The type as it is laid out in a ptrcall.
    type Ffi: GodotFfi + 'static;

    fn to_ffi(&self) -> Self::Ffi;

    /// Consuming conversion; defaults to [`to_ffi()`](Self::to_ffi).
    fn into_ffi(self) -> Self::Ffi {
        self.to_ffi()
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError>;

    /// Like [`try_from_ffi()`](Self::try_from_ffi), but panics on failure.
    fn from_ffi(ffi: Self::Ffi) -> Self {
        Self::try_from_ffi(ffi).unwrap_or_else(|err| {
            panic!(
                "conversion from FFI to `{}` failed: {err}",
                std::any::type_name::<Self>()
            )
        })
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Types passed as themselves

macro_rules! impl_godot_type_as_self {
    ($( $T:ty ),* $(,)?) => {
        $(
            impl GodotType for $T {
                type Ffi = $T;

                fn to_ffi(&self) -> Self::Ffi {
                    self.clone()
                }

                fn into_ffi(self) -> Self::Ffi {
                    self
                }

                fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                    Ok(ffi)
                }
            }
        )*
    };
}

impl_godot_type_as_self!(i64, f64, bool, (), Vector2, Vector3, Color, Rect2, GString, StringName);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Numbers widened to 64 bits

macro_rules! impl_godot_type_int {
    ($( $T:ty ),* $(,)?) => {
        $(
            impl GodotType for $T {
                type Ffi = i64;

                fn to_ffi(&self) -> i64 {
                    i64::from(*self)
                }

                fn try_from_ffi(ffi: i64) -> Result<Self, ConvertError> {
                    <$T>::try_from(ffi).map_err(|_| {
                        ConvertError::with_kind_value(ErrorKind::OutOfRange { to: stringify!($T) }, ffi)
                    })
                }
            }
        )*
    };
}

impl_godot_type_int!(i8, u8, i16, u16, i32, u32);

/// Godot has no unsigned 64-bit integer; `uint64` values travel bit-for-bit inside an `int64_t`.
impl GodotType for u64 {
    type Ffi = i64;

    fn to_ffi(&self) -> i64 {
        *self as i64
    }

    fn try_from_ffi(ffi: i64) -> Result<Self, ConvertError> {
        Ok(ffi as u64)
    }
}

impl GodotType for f32 {
    type Ffi = f64;

    fn to_ffi(&self) -> f64 {
        f64::from(*self)
    }

    // Precision loss is accepted, like for `float` properties in the engine itself.
    fn try_from_ffi(ffi: f64) -> Result<Self, ConvertError> {
        Ok(ffi as f32)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Objects

impl<T: GodotClass> GodotType for Gd<T> {
    type Ffi = RawGd<T>;

    fn to_ffi(&self) -> RawGd<T> {
        self.raw.clone()
    }

    fn into_ffi(self) -> RawGd<T> {
        self.raw
    }

    fn try_from_ffi(raw: RawGd<T>) -> Result<Self, ConvertError> {
        if raw.is_null() {
            Err(ConvertError::with_kind(ErrorKind::NullObject))
        } else {
            Ok(Gd { raw })
        }
    }
}

impl<T: GodotClass> GodotType for Option<Gd<T>> {
    type Ffi = RawGd<T>;

    fn to_ffi(&self) -> RawGd<T> {
        match self {
            Some(gd) => gd.raw.clone(),
            None => RawGd::null(),
        }
    }

    fn into_ffi(self) -> RawGd<T> {
        match self {
            Some(gd) => gd.raw,
            None => RawGd::null(),
        }
    }

    fn try_from_ffi(raw: RawGd<T>) -> Result<Self, ConvertError> {
        if raw.is_null() {
            Ok(None)
        } else {
            Ok(Some(Gd { raw }))
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn i32_out_of_range() {
        let err = i32::try_from_ffi(i64::from(i32::MAX) + 1).expect_err("must not fit");

        assert_eq!(err.kind(), &ErrorKind::OutOfRange { to: "i32" });
        assert_eq!(err.to_string(), "integer not in range of `i32`: 2147483648");
    }

    #[test]
    fn u32_rejects_negative() {
        assert!(u32::try_from_ffi(-1).is_err());
        assert_eq!(u32::try_from_ffi(4_000_000_000), Ok(4_000_000_000));
    }

    #[test]
    fn u64_keeps_bits() {
        let big = u64::MAX - 5;
        assert_eq!(u64::try_from_ffi(big.to_ffi()), Ok(big));
        assert_eq!(big.to_ffi(), -6);
    }

    #[test]
    fn f32_widens() {
        assert_eq!(1.5f32.into_ffi(), 1.5f64);
        assert_eq!(f32::from_ffi(0.25), 0.25f32);
    }

    #[test]
    fn value_types_pass_through() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.into_ffi(), v);
        assert_eq!(Rect2::try_from_ffi(Rect2::default()), Ok(Rect2::default()));
    }

    #[test]
    #[should_panic(expected = "conversion from FFI to `i16` failed")]
    fn from_ffi_panics_with_type() {
        let _ = i16::from_ffi(70_000);
    }

    proptest! {
        #[test]
        fn i32_roundtrip(value: i32) {
            prop_assert_eq!(i32::try_from_ffi(value.into_ffi()), Ok(value));
        }

        #[test]
        fn i32_accepts_exactly_its_range(ffi: i64) {
            let fits = ffi >= i64::from(i32::MIN) && ffi <= i64::from(i32::MAX);
            prop_assert_eq!(i32::try_from_ffi(ffi).is_ok(), fits);
        }

        #[test]
        fn f32_roundtrip(value in proptest::num::f32::NORMAL) {
            prop_assert_eq!(f32::try_from_ffi(value.into_ffi()), Ok(value));
        }
    }
}
