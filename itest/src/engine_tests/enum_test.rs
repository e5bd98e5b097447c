/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use gdbind::classes::base_material_3d::Transparency;
use gdbind::classes::control::{FocusMode, SizeFlags};
use gdbind::classes::node::InternalMode;
use gdbind::classes::{BaseButton, Button, Control, StandardMaterial3D};
use gdbind::global::{MouseButtonMask, Side};
use gdbind::prelude::*;

use crate::framework::engine::{self, Value};
use crate::framework::{expect_panic, init};

#[test]
fn enum_ords_and_names() {
    assert_eq!(Side::BOTTOM.ord(), 3);
    assert_eq!(Side::BOTTOM.as_str(), "BOTTOM");
    assert_eq!(format!("{:?}", InternalMode::FRONT), "FRONT");

    assert_eq!(Side::try_from_ord(1), Some(Side::TOP));
    assert_eq!(Side::try_from_ord(4), None);
    assert_eq!(Side::from_ord(2), Side::RIGHT);

    assert_eq!(
        FocusMode::values(),
        &[FocusMode::NONE, FocusMode::CLICK, FocusMode::ALL]
    );
}

#[test]
fn enum_from_ord_invalid_panics() {
    let msg = expect_panic("invalid ordinal", || {
        Side::from_ord(17);
    });

    assert_eq!(msg, "ordinal 17 does not map to any enumerator");
}

#[test]
fn enum_roundtrip_through_engine() {
    init();

    let mut control = Control::new_alloc();
    let id = control.instance_id();

    control.set_focus_mode(FocusMode::ALL);
    assert_eq!(
        engine::last_call(id, "set_focus_mode").map(|c| c.args),
        Some(vec![Value::Int(2)])
    );
    assert_eq!(control.get_focus_mode(), FocusMode::ALL);

    control.set_offset(Side::BOTTOM, 12.0);
    assert_eq!(control.get_offset(Side::BOTTOM), 12.0);
    assert_eq!(control.get_offset(Side::TOP), 0.0);

    control.free();
}

#[test]
fn enum_invalid_ordinal_from_engine() {
    init();

    let control = Control::new_alloc();
    engine::set_property(control.instance_id(), "get_focus_mode", Value::Int(99));

    let msg = expect_panic("unknown enumerator returned", || {
        control.get_focus_mode();
    });

    assert!(msg.starts_with("in function `Control::get_focus_mode` at return type"), "{msg}");
    assert!(msg.ends_with("invalid engine enum ordinal: 99"), "{msg}");

    control.free();
}

#[test]
fn enum_declared_by_base_class() {
    init();

    let mut material = StandardMaterial3D::new_gd();
    material.set_transparency(Transparency::ALPHA_SCISSOR);

    assert_eq!(material.get_transparency(), Transparency::ALPHA_SCISSOR);
    assert_eq!(material.transparency(), Transparency::ALPHA_SCISSOR);
}

#[test]
fn bitfield_combination() {
    init();

    let mut control = Control::new_alloc();
    let id = control.instance_id();

    let flags = SizeFlags::EXPAND | SizeFlags::SHRINK_END;
    control.set_h_size_flags(flags);
    assert_eq!(
        engine::last_call(id, "set_h_size_flags").map(|c| c.args),
        Some(vec![Value::Int(10)])
    );

    let read = control.get_h_size_flags();
    assert_eq!(read, flags);
    assert!(read.is_set(SizeFlags::EXPAND));
    assert!(!read.is_set(SizeFlags::FILL));

    // Unknown bits are preserved rather than rejected.
    engine::set_property(id, "get_v_size_flags", Value::Int(0x100 | 1));
    assert_eq!(control.get_v_size_flags().ord(), 0x101);

    control.free();
}

#[test]
fn bitfield_global() {
    init();

    let mut button = Button::new_alloc();
    let mask = MouseButtonMask::LEFT | MouseButtonMask::MB_XBUTTON2;

    button.set_button_mask(mask);
    assert_eq!(button.get_button_mask(), mask);
    assert_eq!(button.button_mask(), mask);

    let base: &BaseButton = &button;
    assert!(base.get_button_mask().is_set(MouseButtonMask::MB_XBUTTON2));

    button.free();
}
