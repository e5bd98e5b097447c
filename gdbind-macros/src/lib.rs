/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**gdbind**](https://docs.rs/gdbind)
//!
//! Do not depend on this crate directly, instead use the `gdbind` crate.
//! No SemVer or other guarantees are provided.

mod gdextension;
mod util;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::util::ident;

/// Emits the C entry point for an [`ExtensionLibrary`] impl.
///
/// [`ExtensionLibrary`]: ../gdbind/init/trait.ExtensionLibrary.html
///
/// The engine looks the symbol up by name when it loads the library. It is `gdbind_init` unless `entry_point` says
/// otherwise, and must match `entry_symbol` in the `.gdextension` file:
///
/// ```ignore
/// use gdbind::init::*;
///
/// struct UiTools;
///
/// #[gdextension(entry_point = ui_tools_init)]
/// unsafe impl ExtensionLibrary for UiTools {}
/// ```
#[proc_macro_attribute]
pub fn gdextension(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = TokenStream2::from(meta);
    let input = TokenStream2::from(input);

    let expanded = util::venial_parse_meta(&meta, ident("gdextension"), &input)
        .and_then(gdextension::attribute_gdextension)
        .unwrap_or_else(|e| e.to_compile_error());

    TokenStream::from(expanded)
}

type ParseResult<T> = Result<T, venial::Error>;
