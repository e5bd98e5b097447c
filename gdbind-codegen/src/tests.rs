/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::context::Context;
use crate::conv;
use crate::generator::{classes, method_tables};
use crate::models::domain::{BuildConfig, ExtensionApi, FnQualifier, RustTy};
use crate::models::json::{parse_extension_api, JsonExtensionApi};

fn load_bundled() -> (JsonExtensionApi, Context, ExtensionApi) {
    let json = parse_extension_api(gdbind_bindings::bundled_gdextension_json());
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, BuildConfig::Float64, &ctx);

    (json, ctx, api)
}

fn tokens_to_string(ty: &RustTy) -> String {
    ty.to_string()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Names

#[test]
fn test_pascal_conversion() {
    #[rustfmt::skip]
    let mappings = [
                                 ("AABB", "Aabb"),
                              ("AStar3D", "AStar3D"),
                       ("BaseMaterial3D", "BaseMaterial3D"),
                       ("CPUParticles3D", "CpuParticles3D"),
                           ("HSeparator", "HSeparator"),
                                   ("IP", "Ip"),
                                 ("JSON", "Json"),
                              ("JSONRPC", "JsonRpc"),
                             ("ObjectID", "ObjectId"),
                   ("OpenXRAPIExtension", "OpenXrApiExtension"),
                 ("PlaceholderTexture2D", "PlaceholderTexture2D"),
                                ("Rect2", "Rect2"),
                                  ("RID", "Rid"),
                        ("VBoxContainer", "VBoxContainer"),
                             ("XRServer", "XrServer"),
    ];

    for (class_name, expected) in mappings {
        let actual = conv::to_pascal_case(class_name);
        assert_eq!(actual, expected, "PascalCase: ident `{class_name}`");
    }
}

#[test]
fn test_snake_conversion() {
    #[rustfmt::skip]
    let mappings = [
                                 ("AABB", "aabb"),
                              ("AStar3D", "a_star_3d"),
                       ("BaseMaterial3D", "base_material_3d"),
                       ("CPUParticles3D", "cpu_particles_3d"),
                           ("HSeparator", "h_separator"),
                                 ("JSON", "json"),
                              ("JSONRPC", "json_rpc"),
                   ("OpenXRAPIExtension", "open_xr_api_extension"),
                 ("PlaceholderTexture2D", "placeholder_texture_2d"),
                            ("Texture2D", "texture_2d"),
                        ("VBoxContainer", "v_box_container"),
                             ("XRServer", "xr_server"),

        // Enum names
                            ("VSyncMode", "vsync_mode"),
                         ("ViewportMSAA", "viewport_msaa"),
    ];

    for (class_name, expected) in mappings {
        let actual = conv::to_snake_case(class_name);
        assert_eq!(actual, expected, "snake_case: ident `{class_name}`");
    }
}

#[test]
fn test_enumerator_names() {
    #[rustfmt::skip]
    let mappings: &[(&[&str], &[&str])] = &[
        // Shared prefix equals enum name
        (&["ACTION_MODE_BUTTON_PRESS", "ACTION_MODE_BUTTON_RELEASE"],     &["PRESS", "RELEASE"]),
        (&["PROCESS_MODE_INHERIT", "PROCESS_MODE_WHEN_PAUSED"],           &["INHERIT", "WHEN_PAUSED"]),

        // Shared prefix unrelated to enum name
        (&["SIZE_SHRINK_BEGIN", "SIZE_FILL", "SIZE_EXPAND_FILL"],         &["SHRINK_BEGIN", "FILL", "EXPAND_FILL"]),
        (&["FACE_X", "FACE_Y", "FACE_Z"],                                 &["X", "Y", "Z"]),

        // Remainder keeps its own underscores and digits
        (&["MOUSE_BUTTON_MASK_LEFT", "MOUSE_BUTTON_MASK_MB_XBUTTON1"],    &["LEFT", "MB_XBUTTON1"]),

        // Nothing shared
        (&["OK", "FAILED", "ERR_UNAVAILABLE"],                            &["OK", "FAILED", "ERR_UNAVAILABLE"]),

        // Remaining identifier would start with digit
        (&["SUBDIV_64", "SUBDIV_128"],                                    &["SUBDIV_64", "SUBDIV_128"]),
        (&["FFT_SIZE_256", "FFT_SIZE_512"],                               &["SIZE_256", "SIZE_512"]),

        // Single enumerator: nothing to compare against
        (&["FLAG_ONLY"],                                                  &["FLAG_ONLY"]),
    ];

    for (godot_names, expected) in mappings {
        let actual = conv::make_enumerator_names(godot_names);
        assert_eq!(actual, *expected, "enumerators of {godot_names:?}");
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Types and default values

#[test]
fn test_type_mapping() {
    let (_json, ctx, _api) = load_bundled();

    #[rustfmt::skip]
    let mappings = [
        ("bool",                          None,           "bool"),
        ("int",                           None,           "i64"),
        ("int",                           Some("int32"),  "i32"),
        ("int",                           Some("uint64"), "u64"),
        ("float",                         None,           "f64"),
        ("float",                         Some("float"),  "f32"),
        ("float",                         Some("double"), "f64"),
        ("String",                        None,           "GString"),
        ("StringName",                    None,           "StringName"),
        ("Vector2",                       None,           "Vector2"),
        ("Color",                         None,           "Color"),
        ("enum::Node.ProcessMode",        None,           "crate::classes::node::ProcessMode"),
        ("bitfield::Control.SizeFlags",   None,           "crate::classes::control::SizeFlags"),
        ("enum::HorizontalAlignment",     None,           "crate::global::HorizontalAlignment"),
        ("Texture2D",                     None,           "Gd<crate::classes::Texture2D>"),
    ];

    for (ty, meta, expected) in mappings {
        let meta = meta.map(String::from);
        let actual = conv::to_rust_type(ty, meta.as_ref(), &ctx)
            .unwrap_or_else(|| panic!("type `{ty}` should be supported"));

        assert_eq!(tokens_to_string(&actual), expected, "type `{ty}` with meta {meta:?}");
    }
}

#[test]
fn test_unsupported_types() {
    let (_json, ctx, _api) = load_bundled();

    for ty in ["Variant", "Array", "Dictionary", "enum::Unknown.Thing", "NoSuchClass"] {
        assert!(conv::to_rust_type(ty, None, &ctx).is_none(), "type `{ty}` should be unsupported");
    }

    let meta = Some(String::from("int8"));
    assert!(conv::to_rust_type("int", meta.as_ref(), &ctx).is_none());
}

#[test]
fn test_default_value_exprs() {
    let (_json, ctx, _api) = load_bundled();
    let ty = |name: &str, meta: Option<&str>| {
        let meta = meta.map(String::from);
        conv::to_rust_type(name, meta.as_ref(), &ctx).expect("supported type")
    };

    #[rustfmt::skip]
    let cases = [
        ("false",               ty("bool", None),                      "false"),
        ("-1",                  ty("int", Some("int32")),              "- 1"),
        ("0.5",                 ty("float", Some("float")),            "0.5"),
        ("\"\"",                ty("String", None),                    "CowArg :: Owned (GString :: from (\"\"))"),
        ("&\"\"",               ty("StringName", None),                "CowArg :: Owned (StringName :: from (\"\"))"),
        ("Color(1, 1, 1, 1)",   ty("Color", None),                     "Color :: from_rgba (1.0 , 1.0 , 1.0 , 1.0)"),
        ("Vector2(0, -2.5)",    ty("Vector2", None),                   "Vector2 :: new (0.0 , - 2.5)"),
        ("Rect2(0, 0, 1, 1)",   ty("Rect2", None),                     "Rect2 :: from_components (0.0 , 0.0 , 1.0 , 1.0)"),
        ("0",                   ty("enum::Node.InternalMode", None),   "crate :: classes :: node :: InternalMode :: from_ord (0)"),
        ("null",                ty("Node", None),                      "ObjectArg :: null ()"),
    ];

    for (expr, rust_ty, expected) in cases {
        let actual = conv::to_rust_expr(expr, &rust_ty)
            .unwrap_or_else(|e| panic!("default `{expr}`: {e}"));

        assert_eq!(actual.to_string(), expected, "default `{expr}`");
    }
}

#[test]
fn test_default_value_rejected() {
    let (_json, ctx, _api) = load_bundled();
    let color = conv::to_rust_type("Color", None, &ctx).expect("Color");
    let node = conv::to_rust_type("Node", None, &ctx).expect("Node");

    assert!(conv::to_rust_expr("Color(1, 1)", &color).is_err());
    assert!(conv::to_rust_expr("Vector2(1, 1)", &color).is_err());
    assert!(conv::to_rust_expr("Node.new()", &node).is_err());

    let float = conv::to_rust_type("float", None, &ctx).expect("float");
    assert!(conv::to_rust_expr("inf", &float).is_err());
    assert!(conv::to_rust_expr("-inf", &float).is_err());
    assert!(conv::to_rust_expr("nan", &float).is_err());
    assert!(conv::to_rust_expr("Color(1, 1, nan, 1)", &color).is_err());

    let err = conv::to_rust_expr("inf", &float).expect_err("non-finite");
    assert!(err.contains("`inf`"), "error names the expression: {err}");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Domain mapping

#[test]
fn test_bundled_api_parses() {
    let (json, _ctx, api) = load_bundled();

    assert_eq!(json.header.version_major, 4);
    assert_eq!(api.classes.len(), json.classes.len());

    let object = api.find_class("Object").expect("Object");
    assert!(object.base_class.is_none());
    assert!(object.all_bases.is_empty());

    let label = api.find_class("Label").expect("Label");
    let bases: Vec<&str> = label.all_bases.iter().map(|b| b.godot_ty.as_str()).collect();
    assert_eq!(bases, ["Control", "CanvasItem", "Node", "Object"]);
}

#[test]
fn test_whole_bundled_api_generates() {
    let (json, ctx, api) = load_bundled();

    for class in api.classes.iter() {
        let code = classes::make_class(class, &ctx).to_string();
        assert!(!code.is_empty(), "no code for {}", class.name.godot_ty);
    }

    let mapped_methods: usize = api.classes.iter().map(|c| c.methods.len()).sum();
    let json_methods: usize = json
        .classes
        .iter()
        .flat_map(|c| c.methods.iter().flatten())
        .filter(|m| !m.is_virtual && !m.is_vararg)
        .count();
    assert!(mapped_methods > 0);
    assert!(mapped_methods <= json_methods);

    let table = method_tables::make_class_method_table(&api).to_string();
    assert!(table.contains("resource__generate_scene_unique_id"));
}

#[test]
fn test_unsupported_methods_skipped() {
    let (_json, _ctx, api) = load_bundled();

    let object = api.find_class("Object").expect("Object");
    assert!(object.find_method("get_class").is_some());
    assert!(object.find_method("callv").is_none(), "Array/Variant signature");
    assert!(object.find_method("_to_string").is_none(), "virtual");

    let node = api.find_class("Node").expect("Node");
    assert!(node.find_method("rpc").is_none(), "vararg");
    assert!(node.find_method("_ready").is_none(), "virtual");
}

#[test]
fn test_method_qualifiers_and_privacy() {
    let (_json, _ctx, api) = load_bundled();

    let refcounted = api.find_class("RefCounted").expect("RefCounted");
    for name in ["init_ref", "reference", "unreference"] {
        let method = refcounted.find_method(name).expect(name);
        assert!(method.is_private, "{name} should be crate-private");
    }
    assert!(!refcounted.find_method("get_reference_count").expect("get_reference_count").is_private);

    let node = api.find_class("Node").expect("Node");
    let add_child = node.find_method("add_child").expect("add_child");
    assert!(add_child.uses_default_params());
    assert_eq!(add_child.params.len(), 3);
    assert!(add_child.params[0].default_value.is_none());
}

#[test]
fn test_static_methods_mapped() {
    let (_json, _ctx, api) = load_bundled();

    let resource = api.find_class("Resource").expect("Resource");
    let method = resource
        .find_method("generate_scene_unique_id")
        .expect("generate_scene_unique_id");

    assert_eq!(method.qualifier, FnQualifier::Static);
    assert!(method.qualifier.is_static());
    assert!(method.params.is_empty());

    let get_name = resource.find_method("get_name").expect("get_name");
    assert_eq!(get_name.qualifier, FnQualifier::Const);
}

#[test]
fn test_property_accessors() {
    let (_json, _ctx, api) = load_bundled();

    let accessor_names = |class: &str| -> Vec<String> {
        api.find_class(class)
            .expect(class)
            .properties
            .iter()
            .map(|p| p.name.to_string())
            .collect()
    };

    let label = accessor_names("Label");
    assert!(label.contains(&"text".to_string()));
    assert!(label.contains(&"clip_text".to_string()));

    // Indexed properties need an argument and are not mapped.
    let control = accessor_names("Control");
    assert!(control.contains(&"size".to_string()));
    assert!(!control.iter().any(|p| p.starts_with("offset_")));

    let material = accessor_names("BaseMaterial3D");
    assert!(material.contains(&"albedo_color".to_string()));
    assert!(!material.contains(&"albedo_texture".to_string()));

    // Getter declared by a base class.
    let placeholder = api.find_class("PlaceholderTexture2D").expect("PlaceholderTexture2D");
    let size = placeholder.properties.iter().find(|p| p.name == "size").expect("size");
    assert_eq!(size.getter.to_string(), "get_size");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Generated code

#[test]
fn test_method_table_fields() {
    let (_json, _ctx, api) = load_bundled();
    let code = method_tables::make_class_method_table(&api).to_string();

    assert!(code.contains("label__set_text"));
    assert!(code.contains("texture_2d__get_width"));
    assert!(code.contains("ref_counted__init_ref"));
    assert!(!code.contains("object__callv"));
}

#[test]
fn test_class_code_shape() {
    let (_json, ctx, api) = load_bundled();

    let node = api.find_class("Node").expect("Node");
    let code = classes::make_class(node, &ctx).to_string();

    assert!(code.contains("pub struct ExAddChild"));
    assert!(code.contains("fn add_child_ex"));
    assert!(code.contains("fn add_child_full"));
    assert!(code.contains("pub struct ProcessMode"));
    assert!(code.contains("NOTIFICATION_READY"));
    assert!(code.contains("type Target = crate :: classes :: Object"));

    let object = api.find_class("Object").expect("Object");
    let code = classes::make_class(object, &ctx).to_string();

    assert!(code.contains("type Base = crate :: obj :: NoBase"));
    assert!(code.contains("MemDynamic"));
    assert!(!code.contains("impl std :: ops :: Deref"));
}

#[test]
fn test_static_method_code_shape() {
    let (_json, ctx, api) = load_bundled();

    let resource = api.find_class("Resource").expect("Resource");
    let code = classes::make_class(resource, &ctx).to_string();

    assert!(code.contains("pub fn generate_scene_unique_id () -> GString"), "{code}");
    assert!(code.contains("out_static_ptrcall :: < GString > (method_bind)"));
    assert!(code.contains("pub fn get_name (& self"));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Output files

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("gdbind-codegen-{}-{name}", std::process::id()));
    gdbind_bindings::remove_dir_all_reliable(&dir);
    dir
}

#[test]
fn test_write_file_creates_parents() {
    let dir = scratch_dir("write");
    let path = dir.join("nested").join("deeper").join("out.rs");

    crate::write_file(&path, String::from("// generated"));

    assert_eq!(std::fs::read_to_string(&path).expect("read back"), "// generated");
    gdbind_bindings::remove_dir_all_reliable(&dir);
}

#[test]
fn test_class_files_replace_stale_output() {
    let (_json, ctx, api) = load_bundled();
    let dir = scratch_dir("classes");
    let stale = dir.join("removed_class.rs");

    std::fs::create_dir_all(&dir).expect("create scratch dir");
    std::fs::write(&stale, "// stale").expect("write stale file");

    let mut submitted = Vec::new();
    classes::generate_class_files(&api, &ctx, &dir, &mut |path, _code| submitted.push(path));

    assert!(!stale.exists(), "stale file survived regeneration");
    assert!(dir.is_dir());
    assert!(submitted.contains(&dir.join("mod.rs")));
    assert_eq!(submitted.len(), api.classes.len() + 1);

    gdbind_bindings::remove_dir_all_reliable(&dir);
}
