pub mod object ; pub use object :: re_export :: Object ; pub mod ref_counted ; pub use ref_counted :: re_export :: RefCounted ; pub mod resource ; pub use resource :: re_export :: Resource ; pub mod node ; pub use node :: re_export :: Node ; pub mod canvas_item ; pub use canvas_item :: re_export :: CanvasItem ; pub mod control ; pub use control :: re_export :: Control ; pub mod container ; pub use container :: re_export :: Container ; pub mod box_container ; pub use box_container :: re_export :: BoxContainer ; pub mod h_box_container ; pub use h_box_container :: re_export :: HBoxContainer ; pub mod v_box_container ; pub use v_box_container :: re_export :: VBoxContainer ; pub mod label ; pub use label :: re_export :: Label ; pub mod base_button ; pub use base_button :: re_export :: BaseButton ; pub mod button_group ; pub use button_group :: re_export :: ButtonGroup ; pub mod button ; pub use button :: re_export :: Button ; pub mod check_box ; pub use check_box :: re_export :: CheckBox ; pub mod check_button ; pub use check_button :: re_export :: CheckButton ; pub mod range ; pub use range :: re_export :: Range ; pub mod progress_bar ; pub use progress_bar :: re_export :: ProgressBar ; pub mod line_edit ; pub use line_edit :: re_export :: LineEdit ; pub mod texture_rect ; pub use texture_rect :: re_export :: TextureRect ; pub mod color_rect ; pub use color_rect :: re_export :: ColorRect ; pub mod panel ; pub use panel :: re_export :: Panel ; pub mod texture ; pub use texture :: re_export :: Texture ; pub mod texture_2d ; pub use texture_2d :: re_export :: Texture2D ; pub mod placeholder_texture_2d ; pub use placeholder_texture_2d :: re_export :: PlaceholderTexture2D ; pub mod material ; pub use material :: re_export :: Material ; pub mod shader ; pub use shader :: re_export :: Shader ; pub mod shader_material ; pub use shader_material :: re_export :: ShaderMaterial ; pub mod base_material_3d ; pub use base_material_3d :: re_export :: BaseMaterial3D ; pub mod standard_material_3d ; pub use standard_material_3d :: re_export :: StandardMaterial3D ; pub mod mesh ; pub use mesh :: re_export :: Mesh ; pub mod primitive_mesh ; pub use primitive_mesh :: re_export :: PrimitiveMesh ; pub mod box_mesh ; pub use box_mesh :: re_export :: BoxMesh ; pub mod sphere_mesh ; pub use sphere_mesh :: re_export :: SphereMesh ; pub mod capsule_mesh ; pub use capsule_mesh :: re_export :: CapsuleMesh ; pub mod cylinder_mesh ; pub use cylinder_mesh :: re_export :: CylinderMesh ; pub mod plane_mesh ; pub use plane_mesh :: re_export :: PlaneMesh ; pub mod quad_mesh ; pub use quad_mesh :: re_export :: QuadMesh ; pub mod prism_mesh ; pub use prism_mesh :: re_export :: PrismMesh ; pub mod torus_mesh ; pub use torus_mesh :: re_export :: TorusMesh ; pub mod text_mesh ; pub use text_mesh :: re_export :: TextMesh ;