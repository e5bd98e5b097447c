# ! [doc = "Sidecar module for class [`Texture2D`][crate::classes::Texture2D]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Texture2D`.\n\nInherits [`Texture`][crate::classes::Texture]."] # [repr (C)] # [derive (Debug)] pub struct Texture2D { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Texture2D { pub fn get_width (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_2d__get_width ; CallFrame :: new (CallContext :: new ("Texture2D" , "get_width") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_height (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_2d__get_height ; CallFrame :: new (CallContext :: new ("Texture2D" , "get_height") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_size (& self ,) -> Vector2 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_2d__get_size ; CallFrame :: new (CallContext :: new ("Texture2D" , "get_size") , args) . out_ptrcall :: < Vector2 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn has_alpha (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_2d__has_alpha ; CallFrame :: new (CallContext :: new ("Texture2D" , "has_alpha") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Texture2D { type Base = crate :: classes :: Texture ; fn class_name () -> ClassName { ClassName :: new_static ("Texture2D") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Texture2D { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for Texture2D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Texture > for Texture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Texture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Texture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Texture2D { } impl std :: ops :: Deref for Texture2D { type Target = crate :: classes :: Texture ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Texture2D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }