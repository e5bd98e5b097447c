# ! [doc = "Sidecar module for class [`PlaceholderTexture2D`][crate::classes::PlaceholderTexture2D]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `PlaceholderTexture2D`.\n\nInherits [`Texture2D`][crate::classes::Texture2D]."] # [repr (C)] # [derive (Debug)] pub struct PlaceholderTexture2D { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl PlaceholderTexture2D { pub fn set_size (& mut self , size : Vector2 ,) { let args = (size . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . placeholder_texture_2d__set_size ; CallFrame :: new (CallContext :: new ("PlaceholderTexture2D" , "set_size") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `size`, read through [`get_size()`][Self::get_size]."] pub fn size (& self) -> Vector2 { self . get_size () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for PlaceholderTexture2D { type Base = crate :: classes :: Texture2D ; fn class_name () -> ClassName { ClassName :: new_static ("PlaceholderTexture2D") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for PlaceholderTexture2D { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for PlaceholderTexture2D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Texture2D > for PlaceholderTexture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Texture > for PlaceholderTexture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for PlaceholderTexture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for PlaceholderTexture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for PlaceholderTexture2D { } impl crate :: obj :: cap :: GodotDefault for PlaceholderTexture2D { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for PlaceholderTexture2D { type Target = crate :: classes :: Texture2D ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for PlaceholderTexture2D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }