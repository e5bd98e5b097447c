# ! [doc = "Sidecar module for class [`Resource`][crate::classes::Resource]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Resource`.\n\nInherits [`RefCounted`][crate::classes::RefCounted]."] # [repr (C)] # [derive (Debug)] pub struct Resource { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Resource { pub fn set_name (& mut self , resource_name : impl AsArg < GString > ,) { let args = (resource_name . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . resource__set_name ; CallFrame :: new (CallContext :: new ("Resource" , "set_name") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_name (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . resource__get_name ; CallFrame :: new (CallContext :: new ("Resource" , "get_name") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn generate_scene_unique_id () -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . resource__generate_scene_unique_id ; CallFrame :: new (CallContext :: new ("Resource" , "generate_scene_unique_id") , args) . out_static_ptrcall :: < GString > (method_bind) } } pub fn set_path (& mut self , resource_path : impl AsArg < GString > ,) { let args = (resource_path . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . resource__set_path ; CallFrame :: new (CallContext :: new ("Resource" , "set_path") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_path (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . resource__get_path ; CallFrame :: new (CallContext :: new ("Resource" , "get_path") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_local_to_scene (& mut self , resource_local_to_scene : bool ,) { let args = (resource_local_to_scene . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . resource__set_local_to_scene ; CallFrame :: new (CallContext :: new ("Resource" , "set_local_to_scene") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_local_to_scene (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . resource__is_local_to_scene ; CallFrame :: new (CallContext :: new ("Resource" , "is_local_to_scene") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn emit_changed (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . resource__emit_changed ; CallFrame :: new (CallContext :: new ("Resource" , "emit_changed") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn take_over_path (& mut self , path : impl AsArg < GString > ,) { let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . resource__take_over_path ; CallFrame :: new (CallContext :: new ("Resource" , "take_over_path") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `resource_name`, read through [`get_name()`][Self::get_name]."] pub fn resource_name (& self) -> String { self . get_name () . to_string () } # [doc = "Value of property `resource_path`, read through [`get_path()`][Self::get_path]."] pub fn resource_path (& self) -> String { self . get_path () . to_string () } # [doc = "Value of property `resource_local_to_scene`, read through [`is_local_to_scene()`][Self::is_local_to_scene]."] pub fn resource_local_to_scene (& self) -> bool { self . is_local_to_scene () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Resource { type Base = crate :: classes :: RefCounted ; fn class_name () -> ClassName { ClassName :: new_static ("Resource") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Resource { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for Resource { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Resource { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Resource { } impl crate :: obj :: cap :: GodotDefault for Resource { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Resource { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Resource { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }