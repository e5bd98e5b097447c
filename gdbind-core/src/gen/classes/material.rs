# ! [doc = "Sidecar module for class [`Material`][crate::classes::Material]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Material`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols live in the [`material`][crate::classes::material] module."] # [repr (C)] # [derive (Debug)] pub struct Material { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Material { pub fn set_render_priority (& mut self , render_priority : i32 ,) { let args = (render_priority . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . material__set_render_priority ; CallFrame :: new (CallContext :: new ("Material" , "set_render_priority") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_render_priority (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . material__get_render_priority ; CallFrame :: new (CallContext :: new ("Material" , "get_render_priority") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_next_pass (& mut self , next_pass : impl AsObjectArg < crate :: classes :: Material > ,) { let args = (next_pass . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . material__set_next_pass ; CallFrame :: new (CallContext :: new ("Material" , "set_next_pass") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_next_pass (& self ,) -> Option < Gd < crate :: classes :: Material > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . material__get_next_pass ; CallFrame :: new (CallContext :: new ("Material" , "get_next_pass") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Material > > > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `render_priority`, read through [`get_render_priority()`][Self::get_render_priority]."] pub fn render_priority (& self) -> i32 { self . get_render_priority () } # [doc = "Value of property `next_pass`, read through [`get_next_pass()`][Self::get_next_pass]."] pub fn next_pass (& self) -> Option < Gd < crate :: classes :: Material > > { self . get_next_pass () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Material { type Base = crate :: classes :: Resource ; fn class_name () -> ClassName { ClassName :: new_static ("Material") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Material { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for Material { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Material { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Material { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Material { } impl std :: ops :: Deref for Material { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Material { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } pub const RENDER_PRIORITY_MAX : i32 = 127i32 ; pub const RENDER_PRIORITY_MIN : i32 = - 128i32 ;