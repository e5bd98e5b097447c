# ! [doc = "Sidecar module for class [`RefCounted`][crate::classes::RefCounted]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `RefCounted`.\n\nInherits [`Object`][crate::classes::Object]."] # [repr (C)] # [derive (Debug)] pub struct RefCounted { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl RefCounted { pub (crate) fn init_ref (& mut self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . ref_counted__init_ref ; CallFrame :: new (CallContext :: new ("RefCounted" , "init_ref") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn reference (& mut self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . ref_counted__reference ; CallFrame :: new (CallContext :: new ("RefCounted" , "reference") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn unreference (& mut self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . ref_counted__unreference ; CallFrame :: new (CallContext :: new ("RefCounted" , "unreference") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_reference_count (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . ref_counted__get_reference_count ; CallFrame :: new (CallContext :: new ("RefCounted" , "get_reference_count") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for RefCounted { type Base = crate :: classes :: Object ; fn class_name () -> ClassName { ClassName :: new_static ("RefCounted") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for RefCounted { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for RefCounted { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for RefCounted { } impl crate :: obj :: cap :: GodotDefault for RefCounted { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for RefCounted { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for RefCounted { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }