# ! [doc = "Sidecar module for class [`Container`][crate::classes::Container]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Container`.\n\nInherits [`Control`][crate::classes::Control].\n\nRelated symbols live in the [`container`][crate::classes::container] module."] # [repr (C)] # [derive (Debug)] pub struct Container { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Container { pub fn queue_sort (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . container__queue_sort ; CallFrame :: new (CallContext :: new ("Container" , "queue_sort") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Container { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { ClassName :: new_static ("Container") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Container { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for Container { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for Container { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Container { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Container { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Container { } impl crate :: obj :: cap :: GodotDefault for Container { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Container { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Container { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } pub const NOTIFICATION_PRE_SORT_CHILDREN : i32 = 50i32 ; pub const NOTIFICATION_SORT_CHILDREN : i32 = 51i32 ;