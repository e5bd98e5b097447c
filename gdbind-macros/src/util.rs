/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use proc_macro2::{Ident, Spacing, Span, TokenStream, TokenTree};
use quote::{format_ident, quote};

use crate::ParseResult;

/// Constructs a `venial::Error` at the span of `tokens`, with a formatted message.
macro_rules! error {
    ($tokens:expr, $($format_args:tt)*) => {
        venial::Error::new_at_tokens(&$tokens, format!($($format_args)*))
    };
}

/// Returns early with an error at the span of `tokens`.
macro_rules! bail {
    ($tokens:expr, $($format_args:tt)*) => {
        Err($crate::util::error!($tokens, $($format_args)*))
    };
}

pub(crate) use {bail, error};

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

/// Re-attaches the attribute meta to the item, so the attribute is parsed like any other outer attribute.
pub(crate) fn venial_parse_meta(
    meta: &TokenStream,
    self_name: Ident,
    content: &TokenStream,
) -> ParseResult<venial::Item> {
    let input = quote! {
        #[#self_name(#meta)]
        #content
    };

    venial::parse_item(input)
}

pub(crate) fn path_ends_with(path: &[TokenTree], expected: &str) -> bool {
    path.last()
        .map(|last| last.to_string() == expected)
        .unwrap_or(false)
}

fn path_is_single(path: &[TokenTree], expected: &str) -> bool {
    path.len() == 1 && path[0].to_string() == expected
}

/// Validates that the impl is of the form `impl <expected_trait> for SomeType`.
pub(crate) fn validate_trait_impl(original_impl: &venial::Impl, expected_trait: &str, attr: &str) -> ParseResult<()> {
    let is_expected = original_impl
        .trait_ty
        .as_ref()
        .is_some_and(|trait_ty| path_ends_with(&trait_ty.tokens, expected_trait));

    if !is_expected {
        return bail!(
            original_impl.tk_impl,
            "#[{attr}] requires an impl of trait `{expected_trait}`"
        );
    }

    Ok(())
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Key-value parsing of proc attributes

type KvMap = HashMap<Ident, Option<Vec<TokenTree>>>;

/// Parses attributes like `#[attr(key, key2 = value)]`.
pub(crate) struct KvParser {
    map: KvMap,
    span: Span,
}

impl KvParser {
    /// Create a new parser which requires a `#[expected]` attribute.
    pub fn parse_required(attributes: &[venial::Attribute], expected: &str, context: &Ident) -> ParseResult<Self> {
        let mut found_attr: Option<Self> = None;

        for attr in attributes {
            if !path_is_single(&attr.path, expected) {
                continue;
            }

            if found_attr.is_some() {
                return bail!(attr, "only a single #[{expected}] attribute allowed");
            }

            found_attr = Some(Self {
                span: attr.tk_brackets.span,
                map: parse_kv_map(&attr.value)?,
            });
        }

        match found_attr {
            Some(parser) => Ok(parser),
            None => bail!(context, "expected attribute #[{expected}], but not present"),
        }
    }

    #[allow(dead_code)]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Handles an optional key that can only occur with an identifier as the value.
    pub fn handle_ident(&mut self, key: &str) -> ParseResult<Option<Ident>> {
        match self.map.remove_entry(&ident(key)) {
            None => Ok(None),
            // The `key` that was removed from the map has the correct span.
            Some((key, None)) => bail!(key, "expected `{key}` to be followed by `= identifier`"),
            Some((key, Some(value))) => match value.as_slice() {
                [TokenTree::Ident(id)] => Ok(Some(id.clone())),
                _ => bail!(key, "value of `{key}` must be a single identifier"),
            },
        }
    }

    /// Checks that all keys have been consumed.
    pub fn finish(self) -> ParseResult<()> {
        let mut errors = self.map.keys().map(|ident| error!(ident, "unrecognized key `{ident}`"));

        match errors.next() {
            None => Ok(()),
            Some(first) => Err(errors.fold(first, |mut acc, e| {
                acc.combine(e);
                acc
            })),
        }
    }
}

fn parse_kv_map(value: &venial::AttributeValue) -> ParseResult<KvMap> {
    let tokens: &[TokenTree] = match value {
        venial::AttributeValue::Group(_, tokens) => tokens.as_slice(),
        venial::AttributeValue::Empty => &[],
        venial::AttributeValue::Equals(punct, _) => {
            return bail!(punct, "expected `#[attr(key = value)]` syntax, not `#[attr = value]`")
        }
    };

    let mut map = KvMap::new();

    for entry in tokens.split(|tt| is_punct(tt, ',')) {
        let Some((first, rest)) = entry.split_first() else {
            continue; // trailing comma
        };

        let TokenTree::Ident(key) = first else {
            return bail!(first, "expected identifier as key");
        };

        let value = match rest.split_first() {
            None => None,
            Some((eq, value)) if is_punct(eq, '=') && !value.is_empty() => Some(value.to_vec()),
            Some((other, _)) => return bail!(other, "expected `=` followed by a value"),
        };

        if map.insert(key.clone(), value).is_some() {
            return bail!(key, "duplicate key `{key}`");
        }
    }

    Ok(map)
}

fn is_punct(tt: &TokenTree, c: char) -> bool {
    match tt {
        TokenTree::Punct(punct) => punct.as_char() == c && (c != '=' || punct.spacing() == Spacing::Alone),
        _ => false,
    }
}
