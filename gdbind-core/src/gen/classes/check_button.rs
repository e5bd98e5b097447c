# ! [doc = "Sidecar module for class [`CheckButton`][crate::classes::CheckButton]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `CheckButton`.\n\nInherits [`Button`][crate::classes::Button]."] # [repr (C)] # [derive (Debug)] pub struct CheckButton { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl CheckButton { fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for CheckButton { type Base = crate :: classes :: Button ; fn class_name () -> ClassName { ClassName :: new_static ("CheckButton") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for CheckButton { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for CheckButton { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Button > for CheckButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: BaseButton > for CheckButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for CheckButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for CheckButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for CheckButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for CheckButton { } impl crate :: obj :: cap :: GodotDefault for CheckButton { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for CheckButton { type Target = crate :: classes :: Button ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CheckButton { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }