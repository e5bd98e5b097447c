# ! [doc = "Sidecar module for class [`ShaderMaterial`][crate::classes::ShaderMaterial]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `ShaderMaterial`.\n\nInherits [`Material`][crate::classes::Material]."] # [repr (C)] # [derive (Debug)] pub struct ShaderMaterial { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl ShaderMaterial { pub fn set_shader (& mut self , shader : impl AsObjectArg < crate :: classes :: Shader > ,) { let args = (shader . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . shader_material__set_shader ; CallFrame :: new (CallContext :: new ("ShaderMaterial" , "set_shader") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_shader (& self ,) -> Option < Gd < crate :: classes :: Shader > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . shader_material__get_shader ; CallFrame :: new (CallContext :: new ("ShaderMaterial" , "get_shader") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Shader > > > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `shader`, read through [`get_shader()`][Self::get_shader]."] pub fn shader (& self) -> Option < Gd < crate :: classes :: Shader > > { self . get_shader () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for ShaderMaterial { type Base = crate :: classes :: Material ; fn class_name () -> ClassName { ClassName :: new_static ("ShaderMaterial") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for ShaderMaterial { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for ShaderMaterial { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Material > for ShaderMaterial { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for ShaderMaterial { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for ShaderMaterial { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for ShaderMaterial { } impl crate :: obj :: cap :: GodotDefault for ShaderMaterial { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for ShaderMaterial { type Target = crate :: classes :: Material ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for ShaderMaterial { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }