/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Identifier renamings (Godot -> Rust)

use crate::util::ident;
use proc_macro2::Ident;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Case conversions

fn to_snake_special_case(class_name: &str) -> Option<&'static str> {
    match class_name {
        // Classes
        "JSONRPC" => Some("json_rpc"),
        "OpenXRAPIExtension" => Some("open_xr_api_extension"),

        // Enums
        "VSyncMode" => Some("vsync_mode"),
        _ => None,
    }
}

pub fn to_snake_case(class_name: &str) -> String {
    use heck::ToSnakeCase;

    if let Some(special_case) = to_snake_special_case(class_name) {
        return special_case.to_string();
    }

    class_name
        .replace("2D", "_2d") // e.g. placeholder_texture_2d
        .replace("3D", "_3d")
        .to_snake_case()
}

pub fn to_pascal_case(class_name: &str) -> String {
    use heck::ToPascalCase;

    // Special cases: reuse snake_case impl to ensure at least consistency between those 2.
    if let Some(snake_special) = to_snake_special_case(class_name) {
        return snake_special.to_pascal_case();
    }

    class_name.to_pascal_case()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enum conversions

pub fn make_enum_name(enum_name: &str) -> Ident {
    ident(&to_pascal_case(enum_name))
}

/// Maps all enumerators of one enum at once, removing their longest shared `SHOUT_CASE` word prefix.
///
/// Enumerators keep at least one word. If stripping would leave a name starting with a digit (not a valid identifier),
/// one word less is stripped, e.g. `SUBDIV_64` stays as is when its siblings share only `SUBDIV_`.
/// Enums with a single enumerator are left unchanged, as there is nothing to compare against.
pub fn make_enumerator_names(enumerators: &[&str]) -> Vec<String> {
    if enumerators.len() < 2 {
        return enumerators.iter().map(|s| s.to_string()).collect();
    }

    let split: Vec<Vec<&str>> = enumerators.iter().map(|e| e.split('_').collect()).collect();

    let mut shared = shared_word_prefix_len(&split);
    while shared > 0 && !all_remainders_valid(&split, shared) {
        shared -= 1;
    }

    split.iter().map(|words| words[shared..].join("_")).collect()
}

/// Number of leading words that all enumerators have in common, leaving at least one word in each.
fn shared_word_prefix_len(split: &[Vec<&str>]) -> usize {
    let Some((first, rest)) = split.split_first() else {
        return 0;
    };

    let max_len = split.iter().map(|words| words.len() - 1).min().unwrap_or(0);

    (0..max_len)
        .take_while(|&i| rest.iter().all(|words| words[i] == first[i]))
        .count()
}

fn all_remainders_valid(split: &[Vec<&str>], strip: usize) -> bool {
    split.iter().all(|words| {
        words
            .get(strip)
            .and_then(|word| word.chars().next())
            .is_some_and(|c| !c.is_ascii_digit())
    })
}
