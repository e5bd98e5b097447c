# ! [doc = "Sidecar module for class [`CheckBox`][crate::classes::CheckBox]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `CheckBox`.\n\nInherits [`Button`][crate::classes::Button]."] # [repr (C)] # [derive (Debug)] pub struct CheckBox { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl CheckBox { fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for CheckBox { type Base = crate :: classes :: Button ; fn class_name () -> ClassName { ClassName :: new_static ("CheckBox") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for CheckBox { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for CheckBox { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Button > for CheckBox { } unsafe impl crate :: obj :: Inherits < crate :: classes :: BaseButton > for CheckBox { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for CheckBox { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for CheckBox { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for CheckBox { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for CheckBox { } impl crate :: obj :: cap :: GodotDefault for CheckBox { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for CheckBox { type Target = crate :: classes :: Button ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CheckBox { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }