# [allow (non_snake_case)] pub struct ClassMethodTable { pub object__get_class : crate :: ClassMethodBind , pub object__is_class : crate :: ClassMethodBind , pub object__get_instance_id : crate :: ClassMethodBind , pub object__has_method : crate :: ClassMethodBind , pub object__notification : crate :: ClassMethodBind , pub object__is_queued_for_deletion : crate :: ClassMethodBind , pub ref_counted__init_ref : crate :: ClassMethodBind , pub ref_counted__reference : crate :: ClassMethodBind , pub ref_counted__unreference : crate :: ClassMethodBind , pub ref_counted__get_reference_count : crate :: ClassMethodBind , pub resource__set_name : crate :: ClassMethodBind , pub resource__get_name : crate :: ClassMethodBind , pub resource__generate_scene_unique_id : crate :: ClassMethodBind , pub resource__set_path : crate :: ClassMethodBind , pub resource__get_path : crate :: ClassMethodBind , pub resource__set_local_to_scene : crate :: ClassMethodBind , pub resource__is_local_to_scene : crate :: ClassMethodBind , pub resource__emit_changed : crate :: ClassMethodBind , pub resource__take_over_path : crate :: ClassMethodBind , pub node__set_name : crate :: ClassMethodBind , pub node__get_name : crate :: ClassMethodBind , pub node__set_process_mode : crate :: ClassMethodBind , pub node__get_process_mode : crate :: ClassMethodBind , pub node__add_child : crate :: ClassMethodBind , pub node__remove_child : crate :: ClassMethodBind , pub node__get_child_count : crate :: ClassMethodBind , pub node__get_child : crate :: ClassMethodBind , pub node__get_parent : crate :: ClassMethodBind , pub node__get_index : crate :: ClassMethodBind , pub node__is_inside_tree : crate :: ClassMethodBind , pub canvas_item__set_visible : crate :: ClassMethodBind , pub canvas_item__is_visible : crate :: ClassMethodBind , pub canvas_item__set_modulate : crate :: ClassMethodBind , pub canvas_item__get_modulate : crate :: ClassMethodBind , pub canvas_item__set_self_modulate : crate :: ClassMethodBind , pub canvas_item__get_self_modulate : crate :: ClassMethodBind , pub canvas_item__set_z_index : crate :: ClassMethodBind , pub canvas_item__get_z_index : crate :: ClassMethodBind , pub canvas_item__set_texture_filter : crate :: ClassMethodBind , pub canvas_item__get_texture_filter : crate :: ClassMethodBind , pub canvas_item__set_material : crate :: ClassMethodBind , pub canvas_item__get_material : crate :: ClassMethodBind , pub canvas_item__show : crate :: ClassMethodBind , pub canvas_item__hide : crate :: ClassMethodBind , pub canvas_item__queue_redraw : crate :: ClassMethodBind , pub canvas_item__draw_line : crate :: ClassMethodBind , pub canvas_item__draw_rect : crate :: ClassMethodBind , pub canvas_item__draw_texture : crate :: ClassMethodBind , pub control__set_position : crate :: ClassMethodBind , pub control__set_size : crate :: ClassMethodBind , pub control__get_position : crate :: ClassMethodBind , pub control__get_size : crate :: ClassMethodBind , pub control__set_custom_minimum_size : crate :: ClassMethodBind , pub control__get_custom_minimum_size : crate :: ClassMethodBind , pub control__set_tooltip_text : crate :: ClassMethodBind , pub control__get_tooltip_text : crate :: ClassMethodBind , pub control__set_h_size_flags : crate :: ClassMethodBind , pub control__get_h_size_flags : crate :: ClassMethodBind , pub control__set_v_size_flags : crate :: ClassMethodBind , pub control__get_v_size_flags : crate :: ClassMethodBind , pub control__set_focus_mode : crate :: ClassMethodBind , pub control__get_focus_mode : crate :: ClassMethodBind , pub control__set_mouse_filter : crate :: ClassMethodBind , pub control__get_mouse_filter : crate :: ClassMethodBind , pub control__set_offset : crate :: ClassMethodBind , pub control__get_offset : crate :: ClassMethodBind , pub control__set_anchor : crate :: ClassMethodBind , pub control__get_anchor : crate :: ClassMethodBind , pub control__set_anchors_preset : crate :: ClassMethodBind , pub control__get_rect : crate :: ClassMethodBind , pub control__grab_focus : crate :: ClassMethodBind , pub control__has_focus : crate :: ClassMethodBind , pub control__add_theme_color_override : crate :: ClassMethodBind , pub control__has_theme_color_override : crate :: ClassMethodBind , pub control__get_theme_color : crate :: ClassMethodBind , pub container__queue_sort : crate :: ClassMethodBind , pub box_container__set_alignment : crate :: ClassMethodBind , pub box_container__get_alignment : crate :: ClassMethodBind , pub box_container__set_vertical : crate :: ClassMethodBind , pub box_container__is_vertical : crate :: ClassMethodBind , pub box_container__add_spacer : crate :: ClassMethodBind , pub label__set_text : crate :: ClassMethodBind , pub label__get_text : crate :: ClassMethodBind , pub label__set_horizontal_alignment : crate :: ClassMethodBind , pub label__get_horizontal_alignment : crate :: ClassMethodBind , pub label__set_vertical_alignment : crate :: ClassMethodBind , pub label__get_vertical_alignment : crate :: ClassMethodBind , pub label__set_uppercase : crate :: ClassMethodBind , pub label__is_uppercase : crate :: ClassMethodBind , pub label__set_visible_characters : crate :: ClassMethodBind , pub label__get_visible_characters : crate :: ClassMethodBind , pub label__set_visible_ratio : crate :: ClassMethodBind , pub label__get_visible_ratio : crate :: ClassMethodBind , pub label__set_max_lines_visible : crate :: ClassMethodBind , pub label__get_max_lines_visible : crate :: ClassMethodBind , pub label__set_clip_text : crate :: ClassMethodBind , pub label__is_clipping_text : crate :: ClassMethodBind , pub label__get_line_count : crate :: ClassMethodBind , pub label__get_total_character_count : crate :: ClassMethodBind , pub base_button__set_disabled : crate :: ClassMethodBind , pub base_button__is_disabled : crate :: ClassMethodBind , pub base_button__set_toggle_mode : crate :: ClassMethodBind , pub base_button__is_toggle_mode : crate :: ClassMethodBind , pub base_button__set_pressed : crate :: ClassMethodBind , pub base_button__is_pressed : crate :: ClassMethodBind , pub base_button__set_action_mode : crate :: ClassMethodBind , pub base_button__get_action_mode : crate :: ClassMethodBind , pub base_button__set_button_mask : crate :: ClassMethodBind , pub base_button__get_button_mask : crate :: ClassMethodBind , pub base_button__set_button_group : crate :: ClassMethodBind , pub base_button__get_button_group : crate :: ClassMethodBind , pub base_button__is_hovered : crate :: ClassMethodBind , pub base_button__get_draw_mode : crate :: ClassMethodBind , pub button_group__set_allow_unpress : crate :: ClassMethodBind , pub button_group__is_allow_unpress : crate :: ClassMethodBind , pub button_group__get_pressed_button : crate :: ClassMethodBind , pub button__set_text : crate :: ClassMethodBind , pub button__get_text : crate :: ClassMethodBind , pub button__set_flat : crate :: ClassMethodBind , pub button__is_flat : crate :: ClassMethodBind , pub button__set_clip_text : crate :: ClassMethodBind , pub button__get_clip_text : crate :: ClassMethodBind , pub button__set_button_icon : crate :: ClassMethodBind , pub button__get_button_icon : crate :: ClassMethodBind , pub button__set_text_alignment : crate :: ClassMethodBind , pub button__get_text_alignment : crate :: ClassMethodBind , pub button__set_expand_icon : crate :: ClassMethodBind , pub button__is_expand_icon : crate :: ClassMethodBind , pub range__set_min : crate :: ClassMethodBind , pub range__get_min : crate :: ClassMethodBind , pub range__set_max : crate :: ClassMethodBind , pub range__get_max : crate :: ClassMethodBind , pub range__set_step : crate :: ClassMethodBind , pub range__get_step : crate :: ClassMethodBind , pub range__set_page : crate :: ClassMethodBind , pub range__get_page : crate :: ClassMethodBind , pub range__set_value : crate :: ClassMethodBind , pub range__get_value : crate :: ClassMethodBind , pub range__set_as_ratio : crate :: ClassMethodBind , pub range__get_as_ratio : crate :: ClassMethodBind , pub range__set_use_rounded_values : crate :: ClassMethodBind , pub range__is_using_rounded_values : crate :: ClassMethodBind , pub range__set_allow_greater : crate :: ClassMethodBind , pub range__is_greater_allowed : crate :: ClassMethodBind , pub range__set_allow_lesser : crate :: ClassMethodBind , pub range__is_lesser_allowed : crate :: ClassMethodBind , pub range__set_value_no_signal : crate :: ClassMethodBind , pub progress_bar__set_fill_mode : crate :: ClassMethodBind , pub progress_bar__get_fill_mode : crate :: ClassMethodBind , pub progress_bar__set_show_percentage : crate :: ClassMethodBind , pub progress_bar__is_percentage_shown : crate :: ClassMethodBind , pub line_edit__set_text : crate :: ClassMethodBind , pub line_edit__get_text : crate :: ClassMethodBind , pub line_edit__set_placeholder : crate :: ClassMethodBind , pub line_edit__get_placeholder : crate :: ClassMethodBind , pub line_edit__set_horizontal_alignment : crate :: ClassMethodBind , pub line_edit__get_horizontal_alignment : crate :: ClassMethodBind , pub line_edit__set_max_length : crate :: ClassMethodBind , pub line_edit__get_max_length : crate :: ClassMethodBind , pub line_edit__set_editable : crate :: ClassMethodBind , pub line_edit__is_editable : crate :: ClassMethodBind , pub line_edit__set_secret : crate :: ClassMethodBind , pub line_edit__is_secret : crate :: ClassMethodBind , pub line_edit__set_secret_character : crate :: ClassMethodBind , pub line_edit__get_secret_character : crate :: ClassMethodBind , pub line_edit__set_caret_column : crate :: ClassMethodBind , pub line_edit__get_caret_column : crate :: ClassMethodBind , pub line_edit__set_virtual_keyboard_type : crate :: ClassMethodBind , pub line_edit__get_virtual_keyboard_type : crate :: ClassMethodBind , pub line_edit__clear : crate :: ClassMethodBind , pub line_edit__select_all : crate :: ClassMethodBind , pub line_edit__deselect : crate :: ClassMethodBind , pub line_edit__select : crate :: ClassMethodBind , pub line_edit__has_selection : crate :: ClassMethodBind , pub line_edit__get_selected_text : crate :: ClassMethodBind , pub line_edit__insert_text_at_caret : crate :: ClassMethodBind , pub texture_rect__set_texture : crate :: ClassMethodBind , pub texture_rect__get_texture : crate :: ClassMethodBind , pub texture_rect__set_expand_mode : crate :: ClassMethodBind , pub texture_rect__get_expand_mode : crate :: ClassMethodBind , pub texture_rect__set_stretch_mode : crate :: ClassMethodBind , pub texture_rect__get_stretch_mode : crate :: ClassMethodBind , pub texture_rect__set_flip_h : crate :: ClassMethodBind , pub texture_rect__is_flipped_h : crate :: ClassMethodBind , pub texture_rect__set_flip_v : crate :: ClassMethodBind , pub texture_rect__is_flipped_v : crate :: ClassMethodBind , pub color_rect__set_color : crate :: ClassMethodBind , pub color_rect__get_color : crate :: ClassMethodBind , pub texture_2d__get_width : crate :: ClassMethodBind , pub texture_2d__get_height : crate :: ClassMethodBind , pub texture_2d__get_size : crate :: ClassMethodBind , pub texture_2d__has_alpha : crate :: ClassMethodBind , pub placeholder_texture_2d__set_size : crate :: ClassMethodBind , pub material__set_render_priority : crate :: ClassMethodBind , pub material__get_render_priority : crate :: ClassMethodBind , pub material__set_next_pass : crate :: ClassMethodBind , pub material__get_next_pass : crate :: ClassMethodBind , pub shader__set_code : crate :: ClassMethodBind , pub shader__get_code : crate :: ClassMethodBind , pub shader__get_mode : crate :: ClassMethodBind , pub shader_material__set_shader : crate :: ClassMethodBind , pub shader_material__get_shader : crate :: ClassMethodBind , pub base_material_3d__set_albedo : crate :: ClassMethodBind , pub base_material_3d__get_albedo : crate :: ClassMethodBind , pub base_material_3d__set_metallic : crate :: ClassMethodBind , pub base_material_3d__get_metallic : crate :: ClassMethodBind , pub base_material_3d__set_roughness : crate :: ClassMethodBind , pub base_material_3d__get_roughness : crate :: ClassMethodBind , pub base_material_3d__set_emission : crate :: ClassMethodBind , pub base_material_3d__get_emission : crate :: ClassMethodBind , pub base_material_3d__set_transparency : crate :: ClassMethodBind , pub base_material_3d__get_transparency : crate :: ClassMethodBind , pub base_material_3d__set_shading_mode : crate :: ClassMethodBind , pub base_material_3d__get_shading_mode : crate :: ClassMethodBind , pub base_material_3d__set_uv1_scale : crate :: ClassMethodBind , pub base_material_3d__get_uv1_scale : crate :: ClassMethodBind , pub base_material_3d__set_flag : crate :: ClassMethodBind , pub base_material_3d__get_flag : crate :: ClassMethodBind , pub base_material_3d__set_texture : crate :: ClassMethodBind , pub base_material_3d__get_texture : crate :: ClassMethodBind , pub mesh__get_surface_count : crate :: ClassMethodBind , pub mesh__surface_get_material : crate :: ClassMethodBind , pub primitive_mesh__set_material : crate :: ClassMethodBind , pub primitive_mesh__get_material : crate :: ClassMethodBind , pub primitive_mesh__set_flip_faces : crate :: ClassMethodBind , pub primitive_mesh__get_flip_faces : crate :: ClassMethodBind , pub primitive_mesh__set_add_uv2 : crate :: ClassMethodBind , pub primitive_mesh__get_add_uv2 : crate :: ClassMethodBind , pub primitive_mesh__set_uv2_padding : crate :: ClassMethodBind , pub primitive_mesh__get_uv2_padding : crate :: ClassMethodBind , pub primitive_mesh__request_update : crate :: ClassMethodBind , pub box_mesh__set_size : crate :: ClassMethodBind , pub box_mesh__get_size : crate :: ClassMethodBind , pub box_mesh__set_subdivide_width : crate :: ClassMethodBind , pub box_mesh__get_subdivide_width : crate :: ClassMethodBind , pub box_mesh__set_subdivide_height : crate :: ClassMethodBind , pub box_mesh__get_subdivide_height : crate :: ClassMethodBind , pub box_mesh__set_subdivide_depth : crate :: ClassMethodBind , pub box_mesh__get_subdivide_depth : crate :: ClassMethodBind , pub sphere_mesh__set_radius : crate :: ClassMethodBind , pub sphere_mesh__get_radius : crate :: ClassMethodBind , pub sphere_mesh__set_height : crate :: ClassMethodBind , pub sphere_mesh__get_height : crate :: ClassMethodBind , pub sphere_mesh__set_radial_segments : crate :: ClassMethodBind , pub sphere_mesh__get_radial_segments : crate :: ClassMethodBind , pub sphere_mesh__set_rings : crate :: ClassMethodBind , pub sphere_mesh__get_rings : crate :: ClassMethodBind , pub sphere_mesh__set_is_hemisphere : crate :: ClassMethodBind , pub sphere_mesh__get_is_hemisphere : crate :: ClassMethodBind , pub capsule_mesh__set_radius : crate :: ClassMethodBind , pub capsule_mesh__get_radius : crate :: ClassMethodBind , pub capsule_mesh__set_height : crate :: ClassMethodBind , pub capsule_mesh__get_height : crate :: ClassMethodBind , pub capsule_mesh__set_radial_segments : crate :: ClassMethodBind , pub capsule_mesh__get_radial_segments : crate :: ClassMethodBind , pub capsule_mesh__set_rings : crate :: ClassMethodBind , pub capsule_mesh__get_rings : crate :: ClassMethodBind , pub cylinder_mesh__set_top_radius : crate :: ClassMethodBind , pub cylinder_mesh__get_top_radius : crate :: ClassMethodBind , pub cylinder_mesh__set_bottom_radius : crate :: ClassMethodBind , pub cylinder_mesh__get_bottom_radius : crate :: ClassMethodBind , pub cylinder_mesh__set_height : crate :: ClassMethodBind , pub cylinder_mesh__get_height : crate :: ClassMethodBind , pub cylinder_mesh__set_radial_segments : crate :: ClassMethodBind , pub cylinder_mesh__get_radial_segments : crate :: ClassMethodBind , pub cylinder_mesh__set_rings : crate :: ClassMethodBind , pub cylinder_mesh__get_rings : crate :: ClassMethodBind , pub cylinder_mesh__set_cap_top : crate :: ClassMethodBind , pub cylinder_mesh__is_cap_top : crate :: ClassMethodBind , pub cylinder_mesh__set_cap_bottom : crate :: ClassMethodBind , pub cylinder_mesh__is_cap_bottom : crate :: ClassMethodBind , pub plane_mesh__set_size : crate :: ClassMethodBind , pub plane_mesh__get_size : crate :: ClassMethodBind , pub plane_mesh__set_subdivide_width : crate :: ClassMethodBind , pub plane_mesh__get_subdivide_width : crate :: ClassMethodBind , pub plane_mesh__set_subdivide_depth : crate :: ClassMethodBind , pub plane_mesh__get_subdivide_depth : crate :: ClassMethodBind , pub plane_mesh__set_center_offset : crate :: ClassMethodBind , pub plane_mesh__get_center_offset : crate :: ClassMethodBind , pub plane_mesh__set_orientation : crate :: ClassMethodBind , pub plane_mesh__get_orientation : crate :: ClassMethodBind , pub prism_mesh__set_left_to_right : crate :: ClassMethodBind , pub prism_mesh__get_left_to_right : crate :: ClassMethodBind , pub prism_mesh__set_size : crate :: ClassMethodBind , pub prism_mesh__get_size : crate :: ClassMethodBind , pub prism_mesh__set_subdivide_width : crate :: ClassMethodBind , pub prism_mesh__get_subdivide_width : crate :: ClassMethodBind , pub prism_mesh__set_subdivide_height : crate :: ClassMethodBind , pub prism_mesh__get_subdivide_height : crate :: ClassMethodBind , pub prism_mesh__set_subdivide_depth : crate :: ClassMethodBind , pub prism_mesh__get_subdivide_depth : crate :: ClassMethodBind , pub torus_mesh__set_inner_radius : crate :: ClassMethodBind , pub torus_mesh__get_inner_radius : crate :: ClassMethodBind , pub torus_mesh__set_outer_radius : crate :: ClassMethodBind , pub torus_mesh__get_outer_radius : crate :: ClassMethodBind , pub torus_mesh__set_rings : crate :: ClassMethodBind , pub torus_mesh__get_rings : crate :: ClassMethodBind , pub torus_mesh__set_ring_segments : crate :: ClassMethodBind , pub torus_mesh__get_ring_segments : crate :: ClassMethodBind , pub text_mesh__set_text : crate :: ClassMethodBind , pub text_mesh__get_text : crate :: ClassMethodBind , pub text_mesh__set_font_size : crate :: ClassMethodBind , pub text_mesh__get_font_size : crate :: ClassMethodBind , pub text_mesh__set_depth : crate :: ClassMethodBind , pub text_mesh__get_depth : crate :: ClassMethodBind , pub text_mesh__set_pixel_size : crate :: ClassMethodBind , pub text_mesh__get_pixel_size : crate :: ClassMethodBind , pub text_mesh__set_width : crate :: ClassMethodBind , pub text_mesh__get_width : crate :: ClassMethodBind , pub text_mesh__set_horizontal_alignment : crate :: ClassMethodBind , pub text_mesh__get_horizontal_alignment : crate :: ClassMethodBind , pub text_mesh__set_vertical_alignment : crate :: ClassMethodBind , pub text_mesh__get_vertical_alignment : crate :: ClassMethodBind , pub text_mesh__set_uppercase : crate :: ClassMethodBind , pub text_mesh__is_uppercase : crate :: ClassMethodBind , } impl ClassMethodTable { pub const CLASS_COUNT : usize = 33usize ; pub const METHOD_COUNT : usize = 315usize ; # [doc = r" Resolves every method bind through `classdb_get_method_bind`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If the engine does not know one of the methods, or knows it with a different hash."] pub fn load (string_names : & mut crate :: StringCache) -> Self { let get_method_bind = crate :: interface_fn ! (classdb_get_method_bind) ; let sname_object = string_names . fetch ("Object") ; let sname_ref_counted = string_names . fetch ("RefCounted") ; let sname_resource = string_names . fetch ("Resource") ; let sname_node = string_names . fetch ("Node") ; let sname_canvas_item = string_names . fetch ("CanvasItem") ; let sname_control = string_names . fetch ("Control") ; let sname_container = string_names . fetch ("Container") ; let sname_box_container = string_names . fetch ("BoxContainer") ; let sname_label = string_names . fetch ("Label") ; let sname_base_button = string_names . fetch ("BaseButton") ; let sname_button_group = string_names . fetch ("ButtonGroup") ; let sname_button = string_names . fetch ("Button") ; let sname_range = string_names . fetch ("Range") ; let sname_progress_bar = string_names . fetch ("ProgressBar") ; let sname_line_edit = string_names . fetch ("LineEdit") ; let sname_texture_rect = string_names . fetch ("TextureRect") ; let sname_color_rect = string_names . fetch ("ColorRect") ; let sname_texture_2d = string_names . fetch ("Texture2D") ; let sname_placeholder_texture_2d = string_names . fetch ("PlaceholderTexture2D") ; let sname_material = string_names . fetch ("Material") ; let sname_shader = string_names . fetch ("Shader") ; let sname_shader_material = string_names . fetch ("ShaderMaterial") ; let sname_base_material_3d = string_names . fetch ("BaseMaterial3D") ; let sname_mesh = string_names . fetch ("Mesh") ; let sname_primitive_mesh = string_names . fetch ("PrimitiveMesh") ; let sname_box_mesh = string_names . fetch ("BoxMesh") ; let sname_sphere_mesh = string_names . fetch ("SphereMesh") ; let sname_capsule_mesh = string_names . fetch ("CapsuleMesh") ; let sname_cylinder_mesh = string_names . fetch ("CylinderMesh") ; let sname_plane_mesh = string_names . fetch ("PlaneMesh") ; let sname_prism_mesh = string_names . fetch ("PrismMesh") ; let sname_torus_mesh = string_names . fetch ("TorusMesh") ; let sname_text_mesh = string_names . fetch ("TextMesh") ; Self { object__get_class : crate :: load_class_method (get_method_bind , string_names , sname_object , "Object" , "get_class" , 201670096i64) , object__is_class : crate :: load_class_method (get_method_bind , string_names , sname_object , "Object" , "is_class" , 3927539163i64) , object__get_instance_id : crate :: load_class_method (get_method_bind , string_names , sname_object , "Object" , "get_instance_id" , 3905245786i64) , object__has_method : crate :: load_class_method (get_method_bind , string_names , sname_object , "Object" , "has_method" , 2619796661i64) , object__notification : crate :: load_class_method (get_method_bind , string_names , sname_object , "Object" , "notification" , 4023243586i64) , object__is_queued_for_deletion : crate :: load_class_method (get_method_bind , string_names , sname_object , "Object" , "is_queued_for_deletion" , 36873697i64) , ref_counted__init_ref : crate :: load_class_method (get_method_bind , string_names , sname_ref_counted , "RefCounted" , "init_ref" , 2240911060i64) , ref_counted__reference : crate :: load_class_method (get_method_bind , string_names , sname_ref_counted , "RefCounted" , "reference" , 2240911060i64) , ref_counted__unreference : crate :: load_class_method (get_method_bind , string_names , sname_ref_counted , "RefCounted" , "unreference" , 2240911060i64) , ref_counted__get_reference_count : crate :: load_class_method (get_method_bind , string_names , sname_ref_counted , "RefCounted" , "get_reference_count" , 3905245786i64) , resource__set_name : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "set_name" , 83702148i64) , resource__get_name : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "get_name" , 201670096i64) , resource__generate_scene_unique_id : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "generate_scene_unique_id" , 2841200299i64) , resource__set_path : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "set_path" , 83702148i64) , resource__get_path : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "get_path" , 201670096i64) , resource__set_local_to_scene : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "set_local_to_scene" , 2586408642i64) , resource__is_local_to_scene : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "is_local_to_scene" , 36873697i64) , resource__emit_changed : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "emit_changed" , 3218959716i64) , resource__take_over_path : crate :: load_class_method (get_method_bind , string_names , sname_resource , "Resource" , "take_over_path" , 83702148i64) , node__set_name : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "set_name" , 3304788590i64) , node__get_name : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "get_name" , 2002593661i64) , node__set_process_mode : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "set_process_mode" , 23077235i64) , node__get_process_mode : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "get_process_mode" , 863392618i64) , node__add_child : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "add_child" , 3863233950i64) , node__remove_child : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "remove_child" , 1078189570i64) , node__get_child_count : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "get_child_count" , 894402480i64) , node__get_child : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "get_child" , 541253412i64) , node__get_parent : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "get_parent" , 3160264692i64) , node__get_index : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "get_index" , 894402480i64) , node__is_inside_tree : crate :: load_class_method (get_method_bind , string_names , sname_node , "Node" , "is_inside_tree" , 36873697i64) , canvas_item__set_visible : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "set_visible" , 2586408642i64) , canvas_item__is_visible : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "is_visible" , 36873697i64) , canvas_item__set_modulate : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "set_modulate" , 2920490490i64) , canvas_item__get_modulate : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "get_modulate" , 3444240500i64) , canvas_item__set_self_modulate : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "set_self_modulate" , 2920490490i64) , canvas_item__get_self_modulate : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "get_self_modulate" , 3444240500i64) , canvas_item__set_z_index : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "set_z_index" , 1286410249i64) , canvas_item__get_z_index : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "get_z_index" , 3905245786i64) , canvas_item__set_texture_filter : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "set_texture_filter" , 438359028i64) , canvas_item__get_texture_filter : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "get_texture_filter" , 1059805418i64) , canvas_item__set_material : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "set_material" , 1382589228i64) , canvas_item__get_material : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "get_material" , 1568044463i64) , canvas_item__show : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "show" , 3218959716i64) , canvas_item__hide : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "hide" , 3218959716i64) , canvas_item__queue_redraw : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "queue_redraw" , 3218959716i64) , canvas_item__draw_line : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "draw_line" , 1562330099i64) , canvas_item__draw_rect : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "draw_rect" , 2773573813i64) , canvas_item__draw_texture : crate :: load_class_method (get_method_bind , string_names , sname_canvas_item , "CanvasItem" , "draw_texture" , 520200117i64) , control__set_position : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_position" , 2436320129i64) , control__set_size : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_size" , 2436320129i64) , control__get_position : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_position" , 3341600327i64) , control__get_size : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_size" , 3341600327i64) , control__set_custom_minimum_size : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_custom_minimum_size" , 743155724i64) , control__get_custom_minimum_size : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_custom_minimum_size" , 3341600327i64) , control__set_tooltip_text : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_tooltip_text" , 83702148i64) , control__get_tooltip_text : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_tooltip_text" , 201670096i64) , control__set_h_size_flags : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_h_size_flags" , 1506524738i64) , control__get_h_size_flags : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_h_size_flags" , 1809697883i64) , control__set_v_size_flags : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_v_size_flags" , 1021477024i64) , control__get_v_size_flags : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_v_size_flags" , 250933945i64) , control__set_focus_mode : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_focus_mode" , 210313139i64) , control__get_focus_mode : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_focus_mode" , 1939320004i64) , control__set_mouse_filter : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_mouse_filter" , 176361798i64) , control__get_mouse_filter : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_mouse_filter" , 949314399i64) , control__set_offset : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_offset" , 4290182280i64) , control__get_offset : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_offset" , 2869120046i64) , control__set_anchor : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_anchor" , 2302782885i64) , control__get_anchor : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_anchor" , 2869120046i64) , control__set_anchors_preset : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "set_anchors_preset" , 509135270i64) , control__get_rect : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_rect" , 1639390495i64) , control__grab_focus : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "grab_focus" , 3218959716i64) , control__has_focus : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "has_focus" , 36873697i64) , control__add_theme_color_override : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "add_theme_color_override" , 4260178595i64) , control__has_theme_color_override : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "has_theme_color_override" , 2619796661i64) , control__get_theme_color : crate :: load_class_method (get_method_bind , string_names , sname_control , "Control" , "get_theme_color" , 2377051548i64) , container__queue_sort : crate :: load_class_method (get_method_bind , string_names , sname_container , "Container" , "queue_sort" , 3218959716i64) , box_container__set_alignment : crate :: load_class_method (get_method_bind , string_names , sname_box_container , "BoxContainer" , "set_alignment" , 400786928i64) , box_container__get_alignment : crate :: load_class_method (get_method_bind , string_names , sname_box_container , "BoxContainer" , "get_alignment" , 1667058108i64) , box_container__set_vertical : crate :: load_class_method (get_method_bind , string_names , sname_box_container , "BoxContainer" , "set_vertical" , 2586408642i64) , box_container__is_vertical : crate :: load_class_method (get_method_bind , string_names , sname_box_container , "BoxContainer" , "is_vertical" , 36873697i64) , box_container__add_spacer : crate :: load_class_method (get_method_bind , string_names , sname_box_container , "BoxContainer" , "add_spacer" , 1326660695i64) , label__set_text : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_text" , 83702148i64) , label__get_text : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_text" , 201670096i64) , label__set_horizontal_alignment : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_horizontal_alignment" , 1364193997i64) , label__get_horizontal_alignment : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_horizontal_alignment" , 1193415599i64) , label__set_vertical_alignment : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_vertical_alignment" , 1832175925i64) , label__get_vertical_alignment : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_vertical_alignment" , 409079924i64) , label__set_uppercase : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_uppercase" , 2586408642i64) , label__is_uppercase : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "is_uppercase" , 36873697i64) , label__set_visible_characters : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_visible_characters" , 1286410249i64) , label__get_visible_characters : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_visible_characters" , 3905245786i64) , label__set_visible_ratio : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_visible_ratio" , 373806689i64) , label__get_visible_ratio : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_visible_ratio" , 1740695150i64) , label__set_max_lines_visible : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_max_lines_visible" , 1286410249i64) , label__get_max_lines_visible : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_max_lines_visible" , 3905245786i64) , label__set_clip_text : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "set_clip_text" , 2586408642i64) , label__is_clipping_text : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "is_clipping_text" , 36873697i64) , label__get_line_count : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_line_count" , 3905245786i64) , label__get_total_character_count : crate :: load_class_method (get_method_bind , string_names , sname_label , "Label" , "get_total_character_count" , 3905245786i64) , base_button__set_disabled : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "set_disabled" , 2586408642i64) , base_button__is_disabled : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "is_disabled" , 36873697i64) , base_button__set_toggle_mode : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "set_toggle_mode" , 2586408642i64) , base_button__is_toggle_mode : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "is_toggle_mode" , 36873697i64) , base_button__set_pressed : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "set_pressed" , 2586408642i64) , base_button__is_pressed : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "is_pressed" , 36873697i64) , base_button__set_action_mode : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "set_action_mode" , 356163392i64) , base_button__get_action_mode : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "get_action_mode" , 1529111916i64) , base_button__set_button_mask : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "set_button_mask" , 695445647i64) , base_button__get_button_mask : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "get_button_mask" , 1735217827i64) , base_button__set_button_group : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "set_button_group" , 919140019i64) , base_button__get_button_group : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "get_button_group" , 81691818i64) , base_button__is_hovered : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "is_hovered" , 36873697i64) , base_button__get_draw_mode : crate :: load_class_method (get_method_bind , string_names , sname_base_button , "BaseButton" , "get_draw_mode" , 2492721305i64) , button_group__set_allow_unpress : crate :: load_class_method (get_method_bind , string_names , sname_button_group , "ButtonGroup" , "set_allow_unpress" , 2586408642i64) , button_group__is_allow_unpress : crate :: load_class_method (get_method_bind , string_names , sname_button_group , "ButtonGroup" , "is_allow_unpress" , 36873697i64) , button_group__get_pressed_button : crate :: load_class_method (get_method_bind , string_names , sname_button_group , "ButtonGroup" , "get_pressed_button" , 3886434893i64) , button__set_text : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "set_text" , 83702148i64) , button__get_text : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "get_text" , 201670096i64) , button__set_flat : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "set_flat" , 2586408642i64) , button__is_flat : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "is_flat" , 36873697i64) , button__set_clip_text : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "set_clip_text" , 2586408642i64) , button__get_clip_text : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "get_clip_text" , 36873697i64) , button__set_button_icon : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "set_button_icon" , 1579901870i64) , button__get_button_icon : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "get_button_icon" , 271948162i64) , button__set_text_alignment : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "set_text_alignment" , 200332155i64) , button__get_text_alignment : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "get_text_alignment" , 788224101i64) , button__set_expand_icon : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "set_expand_icon" , 2586408642i64) , button__is_expand_icon : crate :: load_class_method (get_method_bind , string_names , sname_button , "Button" , "is_expand_icon" , 36873697i64) , range__set_min : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_min" , 373806689i64) , range__get_min : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "get_min" , 1740695150i64) , range__set_max : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_max" , 373806689i64) , range__get_max : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "get_max" , 1740695150i64) , range__set_step : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_step" , 373806689i64) , range__get_step : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "get_step" , 1740695150i64) , range__set_page : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_page" , 373806689i64) , range__get_page : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "get_page" , 1740695150i64) , range__set_value : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_value" , 373806689i64) , range__get_value : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "get_value" , 1740695150i64) , range__set_as_ratio : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_as_ratio" , 373806689i64) , range__get_as_ratio : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "get_as_ratio" , 1740695150i64) , range__set_use_rounded_values : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_use_rounded_values" , 2586408642i64) , range__is_using_rounded_values : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "is_using_rounded_values" , 36873697i64) , range__set_allow_greater : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_allow_greater" , 2586408642i64) , range__is_greater_allowed : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "is_greater_allowed" , 36873697i64) , range__set_allow_lesser : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_allow_lesser" , 2586408642i64) , range__is_lesser_allowed : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "is_lesser_allowed" , 36873697i64) , range__set_value_no_signal : crate :: load_class_method (get_method_bind , string_names , sname_range , "Range" , "set_value_no_signal" , 373806689i64) , progress_bar__set_fill_mode : crate :: load_class_method (get_method_bind , string_names , sname_progress_bar , "ProgressBar" , "set_fill_mode" , 1286410249i64) , progress_bar__get_fill_mode : crate :: load_class_method (get_method_bind , string_names , sname_progress_bar , "ProgressBar" , "get_fill_mode" , 3905245786i64) , progress_bar__set_show_percentage : crate :: load_class_method (get_method_bind , string_names , sname_progress_bar , "ProgressBar" , "set_show_percentage" , 2586408642i64) , progress_bar__is_percentage_shown : crate :: load_class_method (get_method_bind , string_names , sname_progress_bar , "ProgressBar" , "is_percentage_shown" , 36873697i64) , line_edit__set_text : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_text" , 83702148i64) , line_edit__get_text : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_text" , 201670096i64) , line_edit__set_placeholder : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_placeholder" , 83702148i64) , line_edit__get_placeholder : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_placeholder" , 201670096i64) , line_edit__set_horizontal_alignment : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_horizontal_alignment" , 1826045804i64) , line_edit__get_horizontal_alignment : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_horizontal_alignment" , 2059066894i64) , line_edit__set_max_length : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_max_length" , 1286410249i64) , line_edit__get_max_length : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_max_length" , 3905245786i64) , line_edit__set_editable : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_editable" , 2586408642i64) , line_edit__is_editable : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "is_editable" , 36873697i64) , line_edit__set_secret : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_secret" , 2586408642i64) , line_edit__is_secret : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "is_secret" , 36873697i64) , line_edit__set_secret_character : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_secret_character" , 83702148i64) , line_edit__get_secret_character : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_secret_character" , 201670096i64) , line_edit__set_caret_column : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_caret_column" , 1286410249i64) , line_edit__get_caret_column : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_caret_column" , 3905245786i64) , line_edit__set_virtual_keyboard_type : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "set_virtual_keyboard_type" , 877926660i64) , line_edit__get_virtual_keyboard_type : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_virtual_keyboard_type" , 402551953i64) , line_edit__clear : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "clear" , 3218959716i64) , line_edit__select_all : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "select_all" , 3218959716i64) , line_edit__deselect : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "deselect" , 3218959716i64) , line_edit__select : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "select" , 1328111411i64) , line_edit__has_selection : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "has_selection" , 36873697i64) , line_edit__get_selected_text : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "get_selected_text" , 2841200299i64) , line_edit__insert_text_at_caret : crate :: load_class_method (get_method_bind , string_names , sname_line_edit , "LineEdit" , "insert_text_at_caret" , 83702148i64) , texture_rect__set_texture : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "set_texture" , 1558481274i64) , texture_rect__get_texture : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "get_texture" , 1120615987i64) , texture_rect__set_expand_mode : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "set_expand_mode" , 1276054010i64) , texture_rect__get_expand_mode : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "get_expand_mode" , 34730966i64) , texture_rect__set_stretch_mode : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "set_stretch_mode" , 1474161678i64) , texture_rect__get_stretch_mode : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "get_stretch_mode" , 1707843095i64) , texture_rect__set_flip_h : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "set_flip_h" , 2586408642i64) , texture_rect__is_flipped_h : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "is_flipped_h" , 36873697i64) , texture_rect__set_flip_v : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "set_flip_v" , 2586408642i64) , texture_rect__is_flipped_v : crate :: load_class_method (get_method_bind , string_names , sname_texture_rect , "TextureRect" , "is_flipped_v" , 36873697i64) , color_rect__set_color : crate :: load_class_method (get_method_bind , string_names , sname_color_rect , "ColorRect" , "set_color" , 2920490490i64) , color_rect__get_color : crate :: load_class_method (get_method_bind , string_names , sname_color_rect , "ColorRect" , "get_color" , 3444240500i64) , texture_2d__get_width : crate :: load_class_method (get_method_bind , string_names , sname_texture_2d , "Texture2D" , "get_width" , 3905245786i64) , texture_2d__get_height : crate :: load_class_method (get_method_bind , string_names , sname_texture_2d , "Texture2D" , "get_height" , 3905245786i64) , texture_2d__get_size : crate :: load_class_method (get_method_bind , string_names , sname_texture_2d , "Texture2D" , "get_size" , 3341600327i64) , texture_2d__has_alpha : crate :: load_class_method (get_method_bind , string_names , sname_texture_2d , "Texture2D" , "has_alpha" , 36873697i64) , placeholder_texture_2d__set_size : crate :: load_class_method (get_method_bind , string_names , sname_placeholder_texture_2d , "PlaceholderTexture2D" , "set_size" , 743155724i64) , material__set_render_priority : crate :: load_class_method (get_method_bind , string_names , sname_material , "Material" , "set_render_priority" , 1286410249i64) , material__get_render_priority : crate :: load_class_method (get_method_bind , string_names , sname_material , "Material" , "get_render_priority" , 3905245786i64) , material__set_next_pass : crate :: load_class_method (get_method_bind , string_names , sname_material , "Material" , "set_next_pass" , 195479691i64) , material__get_next_pass : crate :: load_class_method (get_method_bind , string_names , sname_material , "Material" , "get_next_pass" , 2132280519i64) , shader__set_code : crate :: load_class_method (get_method_bind , string_names , sname_shader , "Shader" , "set_code" , 83702148i64) , shader__get_code : crate :: load_class_method (get_method_bind , string_names , sname_shader , "Shader" , "get_code" , 201670096i64) , shader__get_mode : crate :: load_class_method (get_method_bind , string_names , sname_shader , "Shader" , "get_mode" , 3392948163i64) , shader_material__set_shader : crate :: load_class_method (get_method_bind , string_names , sname_shader_material , "ShaderMaterial" , "set_shader" , 277627521i64) , shader_material__get_shader : crate :: load_class_method (get_method_bind , string_names , sname_shader_material , "ShaderMaterial" , "get_shader" , 1053385491i64) , base_material_3d__set_albedo : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_albedo" , 2920490490i64) , base_material_3d__get_albedo : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_albedo" , 3444240500i64) , base_material_3d__set_metallic : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_metallic" , 373806689i64) , base_material_3d__get_metallic : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_metallic" , 1740695150i64) , base_material_3d__set_roughness : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_roughness" , 373806689i64) , base_material_3d__get_roughness : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_roughness" , 1740695150i64) , base_material_3d__set_emission : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_emission" , 2920490490i64) , base_material_3d__get_emission : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_emission" , 3444240500i64) , base_material_3d__set_transparency : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_transparency" , 738833132i64) , base_material_3d__get_transparency : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_transparency" , 505397493i64) , base_material_3d__set_shading_mode : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_shading_mode" , 725747514i64) , base_material_3d__get_shading_mode : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_shading_mode" , 424965411i64) , base_material_3d__set_uv1_scale : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_uv1_scale" , 3460891852i64) , base_material_3d__get_uv1_scale : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_uv1_scale" , 3360562783i64) , base_material_3d__set_flag : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_flag" , 3070159527i64) , base_material_3d__get_flag : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_flag" , 1286410065i64) , base_material_3d__set_texture : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "set_texture" , 464208135i64) , base_material_3d__get_texture : crate :: load_class_method (get_method_bind , string_names , sname_base_material_3d , "BaseMaterial3D" , "get_texture" , 329605813i64) , mesh__get_surface_count : crate :: load_class_method (get_method_bind , string_names , sname_mesh , "Mesh" , "get_surface_count" , 3905245786i64) , mesh__surface_get_material : crate :: load_class_method (get_method_bind , string_names , sname_mesh , "Mesh" , "surface_get_material" , 2897466400i64) , primitive_mesh__set_material : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "set_material" , 1453887537i64) , primitive_mesh__get_material : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "get_material" , 1505117874i64) , primitive_mesh__set_flip_faces : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "set_flip_faces" , 2586408642i64) , primitive_mesh__get_flip_faces : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "get_flip_faces" , 36873697i64) , primitive_mesh__set_add_uv2 : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "set_add_uv2" , 2586408642i64) , primitive_mesh__get_add_uv2 : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "get_add_uv2" , 36873697i64) , primitive_mesh__set_uv2_padding : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "set_uv2_padding" , 373806689i64) , primitive_mesh__get_uv2_padding : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "get_uv2_padding" , 1740695150i64) , primitive_mesh__request_update : crate :: load_class_method (get_method_bind , string_names , sname_primitive_mesh , "PrimitiveMesh" , "request_update" , 3218959716i64) , box_mesh__set_size : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "set_size" , 3460891852i64) , box_mesh__get_size : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "get_size" , 3360562783i64) , box_mesh__set_subdivide_width : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "set_subdivide_width" , 1286410249i64) , box_mesh__get_subdivide_width : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "get_subdivide_width" , 3905245786i64) , box_mesh__set_subdivide_height : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "set_subdivide_height" , 1286410249i64) , box_mesh__get_subdivide_height : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "get_subdivide_height" , 3905245786i64) , box_mesh__set_subdivide_depth : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "set_subdivide_depth" , 1286410249i64) , box_mesh__get_subdivide_depth : crate :: load_class_method (get_method_bind , string_names , sname_box_mesh , "BoxMesh" , "get_subdivide_depth" , 3905245786i64) , sphere_mesh__set_radius : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "set_radius" , 373806689i64) , sphere_mesh__get_radius : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "get_radius" , 1740695150i64) , sphere_mesh__set_height : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "set_height" , 373806689i64) , sphere_mesh__get_height : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "get_height" , 1740695150i64) , sphere_mesh__set_radial_segments : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "set_radial_segments" , 1286410249i64) , sphere_mesh__get_radial_segments : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "get_radial_segments" , 3905245786i64) , sphere_mesh__set_rings : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "set_rings" , 1286410249i64) , sphere_mesh__get_rings : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "get_rings" , 3905245786i64) , sphere_mesh__set_is_hemisphere : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "set_is_hemisphere" , 2586408642i64) , sphere_mesh__get_is_hemisphere : crate :: load_class_method (get_method_bind , string_names , sname_sphere_mesh , "SphereMesh" , "get_is_hemisphere" , 36873697i64) , capsule_mesh__set_radius : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "set_radius" , 373806689i64) , capsule_mesh__get_radius : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "get_radius" , 1740695150i64) , capsule_mesh__set_height : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "set_height" , 373806689i64) , capsule_mesh__get_height : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "get_height" , 1740695150i64) , capsule_mesh__set_radial_segments : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "set_radial_segments" , 1286410249i64) , capsule_mesh__get_radial_segments : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "get_radial_segments" , 3905245786i64) , capsule_mesh__set_rings : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "set_rings" , 1286410249i64) , capsule_mesh__get_rings : crate :: load_class_method (get_method_bind , string_names , sname_capsule_mesh , "CapsuleMesh" , "get_rings" , 3905245786i64) , cylinder_mesh__set_top_radius : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "set_top_radius" , 373806689i64) , cylinder_mesh__get_top_radius : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "get_top_radius" , 1740695150i64) , cylinder_mesh__set_bottom_radius : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "set_bottom_radius" , 373806689i64) , cylinder_mesh__get_bottom_radius : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "get_bottom_radius" , 1740695150i64) , cylinder_mesh__set_height : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "set_height" , 373806689i64) , cylinder_mesh__get_height : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "get_height" , 1740695150i64) , cylinder_mesh__set_radial_segments : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "set_radial_segments" , 1286410249i64) , cylinder_mesh__get_radial_segments : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "get_radial_segments" , 3905245786i64) , cylinder_mesh__set_rings : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "set_rings" , 1286410249i64) , cylinder_mesh__get_rings : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "get_rings" , 3905245786i64) , cylinder_mesh__set_cap_top : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "set_cap_top" , 2586408642i64) , cylinder_mesh__is_cap_top : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "is_cap_top" , 36873697i64) , cylinder_mesh__set_cap_bottom : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "set_cap_bottom" , 2586408642i64) , cylinder_mesh__is_cap_bottom : crate :: load_class_method (get_method_bind , string_names , sname_cylinder_mesh , "CylinderMesh" , "is_cap_bottom" , 36873697i64) , plane_mesh__set_size : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "set_size" , 743155724i64) , plane_mesh__get_size : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "get_size" , 3341600327i64) , plane_mesh__set_subdivide_width : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "set_subdivide_width" , 1286410249i64) , plane_mesh__get_subdivide_width : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "get_subdivide_width" , 3905245786i64) , plane_mesh__set_subdivide_depth : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "set_subdivide_depth" , 1286410249i64) , plane_mesh__get_subdivide_depth : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "get_subdivide_depth" , 3905245786i64) , plane_mesh__set_center_offset : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "set_center_offset" , 3460891852i64) , plane_mesh__get_center_offset : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "get_center_offset" , 3360562783i64) , plane_mesh__set_orientation : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "set_orientation" , 751391470i64) , plane_mesh__get_orientation : crate :: load_class_method (get_method_bind , string_names , sname_plane_mesh , "PlaneMesh" , "get_orientation" , 1658300610i64) , prism_mesh__set_left_to_right : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "set_left_to_right" , 373806689i64) , prism_mesh__get_left_to_right : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "get_left_to_right" , 1740695150i64) , prism_mesh__set_size : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "set_size" , 3460891852i64) , prism_mesh__get_size : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "get_size" , 3360562783i64) , prism_mesh__set_subdivide_width : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "set_subdivide_width" , 1286410249i64) , prism_mesh__get_subdivide_width : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "get_subdivide_width" , 3905245786i64) , prism_mesh__set_subdivide_height : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "set_subdivide_height" , 1286410249i64) , prism_mesh__get_subdivide_height : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "get_subdivide_height" , 3905245786i64) , prism_mesh__set_subdivide_depth : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "set_subdivide_depth" , 1286410249i64) , prism_mesh__get_subdivide_depth : crate :: load_class_method (get_method_bind , string_names , sname_prism_mesh , "PrismMesh" , "get_subdivide_depth" , 3905245786i64) , torus_mesh__set_inner_radius : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "set_inner_radius" , 373806689i64) , torus_mesh__get_inner_radius : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "get_inner_radius" , 1740695150i64) , torus_mesh__set_outer_radius : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "set_outer_radius" , 373806689i64) , torus_mesh__get_outer_radius : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "get_outer_radius" , 1740695150i64) , torus_mesh__set_rings : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "set_rings" , 1286410249i64) , torus_mesh__get_rings : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "get_rings" , 3905245786i64) , torus_mesh__set_ring_segments : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "set_ring_segments" , 1286410249i64) , torus_mesh__get_ring_segments : crate :: load_class_method (get_method_bind , string_names , sname_torus_mesh , "TorusMesh" , "get_ring_segments" , 3905245786i64) , text_mesh__set_text : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_text" , 83702148i64) , text_mesh__get_text : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "get_text" , 201670096i64) , text_mesh__set_font_size : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_font_size" , 1286410249i64) , text_mesh__get_font_size : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "get_font_size" , 3905245786i64) , text_mesh__set_depth : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_depth" , 373806689i64) , text_mesh__get_depth : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "get_depth" , 1740695150i64) , text_mesh__set_pixel_size : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_pixel_size" , 373806689i64) , text_mesh__get_pixel_size : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "get_pixel_size" , 1740695150i64) , text_mesh__set_width : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_width" , 373806689i64) , text_mesh__get_width : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "get_width" , 1740695150i64) , text_mesh__set_horizontal_alignment : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_horizontal_alignment" , 117400961i64) , text_mesh__get_horizontal_alignment : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "get_horizontal_alignment" , 278037731i64) , text_mesh__set_vertical_alignment : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_vertical_alignment" , 358888645i64) , text_mesh__get_vertical_alignment : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "get_vertical_alignment" , 1613950340i64) , text_mesh__set_uppercase : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "set_uppercase" , 2586408642i64) , text_mesh__is_uppercase : crate :: load_class_method (get_method_bind , string_names , sname_text_mesh , "TextMesh" , "is_uppercase" , 36873697i64) , } } }