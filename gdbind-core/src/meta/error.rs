/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

/// Represents errors that can occur when converting values from Godot.
///
/// Returned by fallible APIs such as [`Gd::try_from_instance_id()`][crate::obj::Gd::try_from_instance_id]. Generated engine
/// methods panic with this error as the message instead, since a mismatch there means the bindings and the engine disagree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConvertError {
    kind: ErrorKind,
    value: Option<String>,
}

impl ConvertError {
    /// Create a new error for a conversion with the value that failed to convert.
    pub fn with_kind_value<V>(kind: ErrorKind, value: V) -> Self
    where
        V: fmt::Debug,
    {
        Self {
            kind,
            value: Some(format!("{value:?}")),
        }
    }

    /// Create a new error without value.
    pub fn with_kind(kind: ErrorKind) -> Self {
        Self { kind, value: None }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the value that failed to convert, rendered with `Debug`, if one exists.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(value) = &self.value {
            write!(f, ": {value}")?;
        }

        Ok(())
    }
}

impl Error for ConvertError {}

/// Why a conversion failed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An integer does not fit into the requested type, e.g. an `i64` into an `i32`.
    OutOfRange { to: &'static str },

    /// An ordinal does not match any enumerator.
    InvalidEnum,

    /// A non-nullable object was expected, but the engine provided null.
    NullObject,

    /// The object has a different class than required.
    WrongClass { expected: &'static str, actual: String },

    /// The instance ID does not belong to a live object.
    DeadObject,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { to } => write!(f, "integer not in range of `{to}`"),
            Self::InvalidEnum => write!(f, "invalid engine enum ordinal"),
            Self::NullObject => write!(f, "expected non-null object, but received null"),
            Self::WrongClass { expected, actual } => {
                write!(f, "expected class `{expected}`, got `{actual}`")
            }
            Self::DeadObject => write!(f, "object has been freed or never existed"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_value() {
        let err = ConvertError::with_kind_value(ErrorKind::OutOfRange { to: "i32" }, 5_000_000_000_i64);
        assert_eq!(err.to_string(), "integer not in range of `i32`: 5000000000");
        assert_eq!(err.value(), Some("5000000000"));
    }

    #[test]
    fn display_without_value() {
        let err = ConvertError::with_kind(ErrorKind::NullObject);
        assert_eq!(err.to_string(), "expected non-null object, but received null");
        assert_eq!(err.value(), None);
    }

    #[test]
    fn wrong_class_names_both() {
        let kind = ErrorKind::WrongClass {
            expected: "Button",
            actual: String::from("Label"),
        };
        assert_eq!(kind.to_string(), "expected class `Button`, got `Label`");
    }
}
