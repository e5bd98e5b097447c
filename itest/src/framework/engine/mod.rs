/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Minimal in-process engine, serving the GDExtension interface to the library under test.
//!
//! Objects live in a table keyed by instance ID. Methods of the class database are executed by a small interpreter:
//! setters store values which the paired getters read back, and a handful of methods (reference counting, the node tree,
//! theme overrides, ...) have dedicated behavior. Every ptrcall is recorded with its decoded arguments, so tests can check
//! exactly what crossed the FFI boundary.

mod class_db;
mod dispatch;
mod interface;
mod values;

use std::collections::HashMap;
use std::ffi::c_void;
use std::ptr;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use gdbind::init::InitLevel;
use gdbind::obj::InstanceId;
use gdbind::sys;

use class_db::ClassInfo;
pub use values::Value;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// State

const REF_COUNTED_BIT: u64 = 1 << 63;

struct Engine {
    next_id: u64,
    objects: HashMap<u64, ObjectData>,
    destroy_counts: HashMap<u64, u32>,
    static_calls: Vec<CallRecord>,
    next_scene_id: u64,
    log: Vec<LogEntry>,
}

struct ObjectData {
    class: &'static ClassInfo,
    refcount: i64,
    // The first `init_ref()` after construction does not increment.
    ref_init_pending: bool,
    properties: HashMap<String, Value>,
    theme_colors: HashMap<String, Value>,
    parent: Option<u64>,
    children: Vec<u64>,
    calls: Vec<CallRecord>,
}

/// One ptrcall received by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct CallRecord {
    /// Class declaring the method (not the dynamic class of the object).
    pub class: String,
    pub method: String,
    pub args: Vec<Value>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogKind {
    Error,
    Warning,
    ScriptError,
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
    pub function: String,
}

impl Engine {
    fn new() -> Self {
        Self {
            next_id: 1,
            objects: HashMap::new(),
            destroy_counts: HashMap::new(),
            static_calls: Vec::new(),
            next_scene_id: 0,
            log: Vec::new(),
        }
    }

    fn construct(&mut self, class: &'static ClassInfo) -> u64 {
        let mut id = self.next_id;
        self.next_id += 1;

        if class.is_refcounted {
            id |= REF_COUNTED_BIT;
        }

        let data = ObjectData {
            class,
            refcount: 1,
            ref_init_pending: class.is_refcounted,
            properties: HashMap::new(),
            theme_colors: HashMap::new(),
            parent: None,
            children: Vec::new(),
            calls: Vec::new(),
        };

        self.objects.insert(id, data);
        id
    }

    /// Removes the object, its children and every reference it holds.
    fn destroy(&mut self, id: u64) {
        let Some(data) = self.objects.remove(&id) else {
            self.error(format!("object_destroy(): no object with ID {id}"));
            return;
        };

        *self.destroy_counts.entry(id).or_insert(0) += 1;

        if let Some(parent) = data.parent.and_then(|p| self.objects.get_mut(&p)) {
            parent.children.retain(|&child| child != id);
        }

        for child in data.children {
            if let Some(child_data) = self.objects.get_mut(&child) {
                child_data.parent = None;
            }
            self.destroy(child);
        }

        for value in data.properties.into_values() {
            if let Some(held) = value.as_object() {
                self.release(held);
            }
        }
    }

    fn is_alive(&self, id: u64) -> bool {
        self.objects.contains_key(&id)
    }

    /// Takes an engine-side reference, if `id` is a live ref-counted object.
    fn acquire(&mut self, id: u64) {
        if let Some(data) = self.objects.get_mut(&id) {
            if data.class.is_refcounted {
                data.refcount += 1;
            }
        }
    }

    /// Drops an engine-side reference, destroying the object when it was the last one.
    fn release(&mut self, id: u64) {
        let Some(data) = self.objects.get_mut(&id) else {
            return;
        };

        if !data.class.is_refcounted {
            return;
        }

        data.refcount -= 1;
        if data.refcount <= 0 {
            self.destroy(id);
        }
    }

    fn error(&mut self, message: String) {
        self.log.push(LogEntry {
            kind: LogKind::Error,
            message,
            function: String::from("engine"),
        });
    }
}

fn engine() -> MutexGuard<'static, Engine> {
    static ENGINE: OnceLock<Mutex<Engine>> = OnceLock::new();

    // A failed assertion in one test must not take down the engine for all others.
    ENGINE
        .get_or_init(|| Mutex::new(Engine::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn raw_id(id: InstanceId) -> u64 {
    id.to_i64() as u64
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Loading the library

/// Signature of the function generated by `#[gdextension]`.
pub type EntryPoint = unsafe extern "C" fn(
    sys::GDExtensionInterfaceGetProcAddress,
    sys::GDExtensionClassLibraryPtr,
    *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool;

type LevelCallback = unsafe extern "C" fn(*mut c_void, sys::GDExtensionInitializationLevel);

static LIBRARY_TOKEN: u8 = 0;

/// Calls the entry point the way the engine does when loading the library.
///
/// Returns the entry point's result and the initialization record it filled in.
pub fn call_entry(entry: EntryPoint) -> (sys::GDExtensionBool, sys::GDExtensionInitialization) {
    let mut init = sys::GDExtensionInitialization {
        minimum_initialization_level: sys::GDEXTENSION_INITIALIZATION_CORE,
        userdata: ptr::null_mut(),
        initialize: None,
        deinitialize: None,
    };

    let library = ptr::addr_of!(LIBRARY_TOKEN) as sys::GDExtensionClassLibraryPtr;

    // SAFETY: the entry point only writes to `init`, and resolves functions through our table.
    let success = unsafe { entry(Some(interface::get_proc_address), library, &mut init) };

    (success, init)
}

/// Level callbacks registered by the library.
pub struct Startup {
    min_level: InitLevel,
    initialize: LevelCallback,
    deinitialize: LevelCallback,
}

impl Startup {
    pub fn min_level(&self) -> InitLevel {
        self.min_level
    }

    pub fn initialize(&self, level: InitLevel) {
        // SAFETY: callback registered by the entry point; userdata is unused.
        unsafe { (self.initialize)(ptr::null_mut(), level.to_sys()) }
    }

    pub fn deinitialize(&self, level: InitLevel) {
        // SAFETY: see `initialize()`.
        unsafe { (self.deinitialize)(ptr::null_mut(), level.to_sys()) }
    }
}

/// Loads the library and initializes all levels from its minimum level up to `up_to`, in ascending order.
pub fn boot(entry: EntryPoint, up_to: InitLevel) -> Startup {
    let (success, init) = call_entry(entry);
    assert_eq!(success, sys::GDEXTENSION_TRUE, "entry point reported failure");

    let startup = Startup {
        min_level: InitLevel::from_sys(init.minimum_initialization_level),
        initialize: init.initialize.expect("entry point registered no initialize callback"),
        deinitialize: init.deinitialize.expect("entry point registered no deinitialize callback"),
    };

    for level in InitLevel::all() {
        if level >= startup.min_level && level <= up_to {
            startup.initialize(level);
        }
    }

    startup
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Inspection from tests

pub fn is_alive(id: InstanceId) -> bool {
    engine().is_alive(raw_id(id))
}

/// How often `object_destroy` ran for this ID.
pub fn destroy_count(id: InstanceId) -> u32 {
    engine().destroy_counts.get(&raw_id(id)).copied().unwrap_or(0)
}

/// Current reference count, or `None` for dead objects.
pub fn reference_count(id: InstanceId) -> Option<i64> {
    engine().objects.get(&raw_id(id)).map(|data| data.refcount)
}

/// All calls received by the object, in order.
pub fn calls(id: InstanceId) -> Vec<CallRecord> {
    engine()
        .objects
        .get(&raw_id(id))
        .map(|data| data.calls.clone())
        .unwrap_or_default()
}

/// Most recent call of `method` on the object.
pub fn last_call(id: InstanceId, method: &str) -> Option<CallRecord> {
    calls(id).into_iter().rev().find(|call| call.method == method)
}

/// All calls of static methods, in order.
pub fn static_calls() -> Vec<CallRecord> {
    engine().static_calls.clone()
}

/// Overrides what the getter `key` returns, bypassing the setter (e.g. to produce values the setter would never accept).
pub fn set_property(id: InstanceId, key: &str, value: Value) {
    let mut engine = engine();
    let data = engine
        .objects
        .get_mut(&raw_id(id))
        .unwrap_or_else(|| panic!("set_property() on dead object {id}"));

    data.properties.insert(key.to_string(), value);
}

pub fn log_contains(text: &str) -> bool {
    engine().log.iter().any(|entry| entry.message.contains(text))
}

pub fn log_entries() -> Vec<LogEntry> {
    engine().log.clone()
}
