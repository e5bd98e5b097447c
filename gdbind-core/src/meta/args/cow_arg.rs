/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::Deref;

/// Owned or borrowed value, used when passing arguments through `impl AsArg` to Godot APIs.
///
/// Borrowed when the caller already has the engine type (`&GString`), owned when a conversion was necessary (`&str`).
/// Owned values are destroyed when the call frame holding them is dropped.
#[doc(hidden)]
#[derive(PartialEq)]
pub enum CowArg<'r, T> {
    Owned(T),
    Borrowed(&'r T),
}

impl<T> CowArg<'_, T> {
    pub fn cow_into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            CowArg::Owned(v) => v,
            CowArg::Borrowed(r) => r.clone(),
        }
    }

    pub fn cow_as_ref(&self) -> &T {
        match self {
            CowArg::Owned(v) => v,
            CowArg::Borrowed(r) => r,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, CowArg::Owned(_))
    }
}

impl<T> Deref for CowArg<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.cow_as_ref()
    }
}

impl<T> fmt::Debug for CowArg<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CowArg::Owned(v) => write!(f, "CowArg::Owned({v:?})"),
            CowArg::Borrowed(r) => write!(f, "CowArg::Borrowed({r:?})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_and_borrowed_deref_alike() {
        let text = String::from("label");
        let borrowed = CowArg::Borrowed(&text);
        let owned: CowArg<'_, String> = CowArg::Owned(String::from("label"));

        assert_eq!(*borrowed, *owned);
        assert!(!borrowed.is_owned());
        assert!(owned.is_owned());
        assert_eq!(borrowed.cow_into_owned(), "label");
        assert_eq!(format!("{owned:?}"), r#"CowArg::Owned("label")"#);
    }
}
