/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::TokenStream;
use quote::quote;

use crate::util::{bail, ident, validate_trait_impl, KvParser};
use crate::ParseResult;

/// Default symbol name of the entry point, to be referenced as `entry_symbol` in the `.gdextension` file.
pub const DEFAULT_ENTRY_POINT: &str = "gdbind_init";

pub fn attribute_gdextension(item: venial::Item) -> ParseResult<TokenStream> {
    let mut impl_decl = match item {
        venial::Item::Impl(item) => item,
        _ => return bail!(item, "#[gdextension] can only be applied to trait impls"),
    };

    validate_trait_impl(&impl_decl, "ExtensionLibrary", "gdextension")?;
    if impl_decl.tk_unsafe.is_none() {
        return bail!(
            impl_decl.tk_impl,
            "`impl ExtensionLibrary` must be marked unsafe, to confirm your opt-in to gdbind's safety model"
        );
    }

    let drained_attributes = std::mem::take(&mut impl_decl.attributes);
    let mut parser = KvParser::parse_required(&drained_attributes, "gdextension", &impl_decl.tk_impl)?;
    let entry_point = parser.handle_ident("entry_point")?;
    parser.finish()?;

    let entry_point = entry_point.unwrap_or_else(|| ident(DEFAULT_ENTRY_POINT));
    let impl_ty = &impl_decl.self_ty;

    Ok(quote! {
        #impl_decl

        #[no_mangle]
        unsafe extern "C" fn #entry_point(
            get_proc_address: ::gdbind::sys::GDExtensionInterfaceGetProcAddress,
            library: ::gdbind::sys::GDExtensionClassLibraryPtr,
            init: *mut ::gdbind::sys::GDExtensionInitialization,
        ) -> ::gdbind::sys::GDExtensionBool {
            ::gdbind::private::__gdbind_load_library::<#impl_ty>(
                get_proc_address,
                library,
                init
            )
        }

        // Ensures that the init function matches the signature advertised in the FFI header.
        const _: ::gdbind::sys::GDExtensionInitializationFunction = Some(#entry_point);
    })
}
