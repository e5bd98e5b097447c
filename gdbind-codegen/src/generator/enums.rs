/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Functions for generating engine-provided enums and bitfields.

use crate::models::domain::{Enum, Enumerator, EnumeratorValue};
use crate::util::strlit;
use proc_macro2::{Ident, TokenStream};
use quote::quote;

pub fn make_enums(enums: &[Enum]) -> TokenStream {
    let definitions = enums.iter().map(make_enum_definition);

    quote! {
        #( #definitions )*
    }
}

/// Creates a definition for the given enum.
///
/// Enums are declared as newtype structs with associated constants, so that unknown ordinals coming from a newer engine remain
/// representable. This also implements all relevant traits.
pub fn make_enum_definition(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;
    let enum_doc = make_enum_doc(enum_);

    let (ord_type, derives) = if enum_.is_bitfield {
        (quote! { u64 }, quote! { Copy, Clone, Eq, PartialEq, Hash, Default })
    } else {
        (quote! { i32 }, quote! { Copy, Clone, Eq, PartialEq, Hash })
    };

    let enumerators = enum_
        .enumerators
        .iter()
        .map(|enumerator| make_enumerator_definition(enumerator, name));

    let debug_impl = make_enum_debug_impl(enum_);
    let engine_trait_impl = make_enum_engine_trait_impl(enum_);
    let godot_type_impl = make_enum_godot_type_impl(enum_);
    let bitwise_impls = make_enum_bitwise_operators(enum_);

    quote! {
        #[repr(transparent)]
        #[derive(#derives)]
        #( #[doc = #enum_doc] )*
        pub struct #name {
            ord: #ord_type
        }

        impl #name {
            #( #enumerators )*
        }

        #debug_impl
        #engine_trait_impl
        #godot_type_impl
        #bitwise_impls
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

/// Enumerators with distinct ordinals; for duplicates, the first declared one wins.
fn unique_enumerators(enum_: &Enum) -> Vec<&Enumerator> {
    let mut seen = std::collections::HashSet::new();

    enum_
        .enumerators
        .iter()
        .filter(|e| seen.insert(e.value))
        .collect()
}

fn make_enum_doc(enum_: &Enum) -> Vec<String> {
    let mut docs = Vec::new();

    if enum_.name != enum_.godot_name {
        docs.push(format!("Godot enum name: `{}`.", enum_.godot_name))
    }

    if let Some(class) = &enum_.surrounding_class {
        docs.push(format!("Declared by class [`{0}`][crate::classes::{0}].", class.rust_ty));
    }

    docs
}

fn make_enumerator_definition(enumerator: &Enumerator, enum_type: &Ident) -> TokenStream {
    let Enumerator {
        name,
        godot_name,
        value,
    } = enumerator;

    let docs = if &name.to_string() != godot_name {
        let doc = format!("Godot enumerator name: `{godot_name}`");

        quote! {
            #[doc(alias = #godot_name)]
            #[doc = #doc]
        }
    } else {
        TokenStream::new()
    };

    let ord = value.to_ord_tokens();

    quote! {
        #docs
        pub const #name: #enum_type = #enum_type {
            ord: #ord
        };
    }
}

/// `Debug` prints the enumerator name, or the struct with its raw ordinal if the value is unknown.
fn make_enum_debug_impl(enum_: &Enum) -> TokenStream {
    let enum_name = &enum_.name;
    let enum_name_str = enum_name.to_string();
    let arms = make_ord_to_name_arms(enum_);

    quote! {
        impl std::fmt::Debug for #enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let enumerator = match self.ord {
                    #( #arms )*
                    _ => {
                        return f.debug_struct(#enum_name_str)
                            .field("ord", &self.ord)
                            .finish();
                    }
                };

                f.write_str(enumerator)
            }
        }
    }
}

fn make_ord_to_name_arms(enum_: &Enum) -> Vec<TokenStream> {
    unique_enumerators(enum_)
        .into_iter()
        .map(|enumerator| {
            let ord = enumerator.value.unsuffixed_lit();
            let name_str = strlit(&enumerator.name.to_string());
            quote! { #ord => #name_str, }
        })
        .collect()
}

fn make_enum_engine_trait_impl(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;

    if enum_.is_bitfield {
        quote! {
            impl crate::obj::EngineBitfield for #name {
                fn try_from_ord(ord: u64) -> Option<Self> {
                    Some(Self { ord })
                }

                fn ord(self) -> u64 {
                    self.ord
                }
            }
        }
    } else {
        let uniques = unique_enumerators(enum_);
        let unique_ords = uniques.iter().map(|e| match e.value {
            EnumeratorValue::Enum(ord) => ord,
            EnumeratorValue::Bitfield(_) => panic!("enum {name} contains bitfield enumerators"),
        });
        let unique_names = uniques.iter().map(|e| &e.name);
        let name_arms = make_ord_to_name_arms(enum_);

        quote! {
            impl crate::obj::EngineEnum for #name {
                fn try_from_ord(ord: i32) -> Option<Self> {
                    match ord {
                        #( ord @ #unique_ords )|* => Some(Self { ord }),
                        _ => None,
                    }
                }

                fn ord(self) -> i32 {
                    self.ord
                }

                fn as_str(&self) -> &'static str {
                    match self.ord {
                        #( #name_arms )*
                        _ => "",
                    }
                }

                fn values() -> &'static [Self] {
                    &[
                        #( #name::#unique_names, )*
                    ]
                }
            }
        }
    }
}

/// Enums cross the FFI boundary as 64-bit integers.
fn make_enum_godot_type_impl(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;

    if enum_.is_bitfield {
        quote! {
            impl crate::meta::GodotType for #name {
                type Ffi = i64;

                fn to_ffi(&self) -> i64 {
                    self.ord as i64
                }

                fn try_from_ffi(ffi: i64) -> Result<Self, crate::meta::ConvertError> {
                    Ok(Self { ord: ffi as u64 })
                }
            }
        }
    } else {
        quote! {
            impl crate::meta::GodotType for #name {
                type Ffi = i64;

                fn to_ffi(&self) -> i64 {
                    self.ord as i64
                }

                fn try_from_ffi(ffi: i64) -> Result<Self, crate::meta::ConvertError> {
                    i32::try_from(ffi)
                        .ok()
                        .and_then(<Self as crate::obj::EngineEnum>::try_from_ord)
                        .ok_or_else(|| crate::meta::ConvertError::with_kind_value(crate::meta::ErrorKind::InvalidEnum, ffi))
                }
            }
        }
    }
}

/// Bitfields can be combined with `|`.
fn make_enum_bitwise_operators(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;

    if enum_.is_bitfield {
        quote! {
            impl std::ops::BitOr for #name {
                type Output = Self;

                fn bitor(self, rhs: Self) -> Self::Output {
                    Self { ord: self.ord | rhs.ord }
                }
            }
        }
    } else {
        TokenStream::new()
    }
}
