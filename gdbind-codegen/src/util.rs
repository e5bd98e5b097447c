/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

#[rustfmt::skip]
pub fn safe_ident(s: &str) -> Ident {
    // See also: https://doc.rust-lang.org/reference/keywords.html
    match s {
        // Lexer
        | "as" | "break" | "const" | "continue" | "crate" | "else" | "enum" | "extern" | "false" | "fn" | "for" | "if"
        | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "self" | "Self"
        | "static" | "struct" | "super" | "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while"

        // Lexer 2018+
        | "async" | "await" | "dyn"

        // Reserved
        | "abstract" | "become" | "box" | "do" | "final" | "macro" | "override" | "priv" | "typeof" | "unsized" | "virtual" | "yield"

        // Reserved 2018+
        | "try"
           => format_ident!("{}_", s),

         _ => ident(s)
    }
}

pub fn strlit(s: &str) -> Literal {
    Literal::string(s)
}

/// Imports shared by every generated class file.
pub fn make_imports() -> TokenStream {
    quote! {
        use gdbind_ffi as sys;
        use crate::builtin::*;
        use crate::meta::{AsArg, AsObjectArg, CallContext, CallFrame, ClassName, CowArg, GodotType, ObjectArg};
        use crate::obj::{EngineBitfield, EngineEnum, Gd};
    }
}

/// Float literal without suffix, so it fits both `f32` and `f64` slots.
pub fn float_lit(value: f64) -> TokenStream {
    if value.is_sign_negative() && value != 0.0 {
        let lit = Literal::f64_unsuffixed(-value);
        quote! { -#lit }
    } else {
        let lit = Literal::f64_unsuffixed(value);
        quote! { #lit }
    }
}

/// Integer literal without suffix; the target slot decides the type.
pub fn int_lit(value: i64) -> TokenStream {
    if value < 0 {
        let lit = Literal::u64_unsuffixed(value.unsigned_abs());
        quote! { -#lit }
    } else {
        let lit = Literal::i64_unsuffixed(value);
        quote! { #lit }
    }
}
