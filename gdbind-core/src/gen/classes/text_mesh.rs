# ! [doc = "Sidecar module for class [`TextMesh`][crate::classes::TextMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `TextMesh`.\n\nInherits [`PrimitiveMesh`][crate::classes::PrimitiveMesh]."] # [repr (C)] # [derive (Debug)] pub struct TextMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl TextMesh { pub fn set_text (& mut self , text : impl AsArg < GString > ,) { let args = (text . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_text ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_text") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_text (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__get_text ; CallFrame :: new (CallContext :: new ("TextMesh" , "get_text") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_font_size (& mut self , font_size : i32 ,) { let args = (font_size . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_font_size ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_font_size") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_font_size (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__get_font_size ; CallFrame :: new (CallContext :: new ("TextMesh" , "get_font_size") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_depth (& mut self , depth : f32 ,) { let args = (depth . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_depth ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_depth") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_depth (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__get_depth ; CallFrame :: new (CallContext :: new ("TextMesh" , "get_depth") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_pixel_size (& mut self , pixel_size : f32 ,) { let args = (pixel_size . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_pixel_size ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_pixel_size") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_pixel_size (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__get_pixel_size ; CallFrame :: new (CallContext :: new ("TextMesh" , "get_pixel_size") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_width (& mut self , width : f32 ,) { let args = (width . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_width ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_width") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_width (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__get_width ; CallFrame :: new (CallContext :: new ("TextMesh" , "get_width") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_horizontal_alignment (& mut self , horizontal_alignment : crate :: global :: HorizontalAlignment ,) { let args = (horizontal_alignment . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_horizontal_alignment ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_horizontal_alignment") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_horizontal_alignment (& self ,) -> crate :: global :: HorizontalAlignment { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__get_horizontal_alignment ; CallFrame :: new (CallContext :: new ("TextMesh" , "get_horizontal_alignment") , args) . out_ptrcall :: < crate :: global :: HorizontalAlignment > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_vertical_alignment (& mut self , vertical_alignment : crate :: global :: VerticalAlignment ,) { let args = (vertical_alignment . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_vertical_alignment ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_vertical_alignment") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_vertical_alignment (& self ,) -> crate :: global :: VerticalAlignment { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__get_vertical_alignment ; CallFrame :: new (CallContext :: new ("TextMesh" , "get_vertical_alignment") , args) . out_ptrcall :: < crate :: global :: VerticalAlignment > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_uppercase (& mut self , uppercase : bool ,) { let args = (uppercase . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__set_uppercase ; CallFrame :: new (CallContext :: new ("TextMesh" , "set_uppercase") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_uppercase (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . text_mesh__is_uppercase ; CallFrame :: new (CallContext :: new ("TextMesh" , "is_uppercase") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `text`, read through [`get_text()`][Self::get_text]."] pub fn text (& self) -> String { self . get_text () . to_string () } # [doc = "Value of property `font_size`, read through [`get_font_size()`][Self::get_font_size]."] pub fn font_size (& self) -> i32 { self . get_font_size () } # [doc = "Value of property `depth`, read through [`get_depth()`][Self::get_depth]."] pub fn depth (& self) -> f32 { self . get_depth () } # [doc = "Value of property `pixel_size`, read through [`get_pixel_size()`][Self::get_pixel_size]."] pub fn pixel_size (& self) -> f32 { self . get_pixel_size () } # [doc = "Value of property `width`, read through [`get_width()`][Self::get_width]."] pub fn width (& self) -> f32 { self . get_width () } # [doc = "Value of property `horizontal_alignment`, read through [`get_horizontal_alignment()`][Self::get_horizontal_alignment]."] pub fn horizontal_alignment (& self) -> crate :: global :: HorizontalAlignment { self . get_horizontal_alignment () } # [doc = "Value of property `vertical_alignment`, read through [`get_vertical_alignment()`][Self::get_vertical_alignment]."] pub fn vertical_alignment (& self) -> crate :: global :: VerticalAlignment { self . get_vertical_alignment () } # [doc = "Value of property `uppercase`, read through [`is_uppercase()`][Self::is_uppercase]."] pub fn uppercase (& self) -> bool { self . is_uppercase () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for TextMesh { type Base = crate :: classes :: PrimitiveMesh ; fn class_name () -> ClassName { ClassName :: new_static ("TextMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for TextMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for TextMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: PrimitiveMesh > for TextMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for TextMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for TextMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for TextMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for TextMesh { } impl crate :: obj :: cap :: GodotDefault for TextMesh { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for TextMesh { type Target = crate :: classes :: PrimitiveMesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for TextMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }