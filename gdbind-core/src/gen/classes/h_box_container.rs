# ! [doc = "Sidecar module for class [`HBoxContainer`][crate::classes::HBoxContainer]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `HBoxContainer`.\n\nInherits [`BoxContainer`][crate::classes::BoxContainer]."] # [repr (C)] # [derive (Debug)] pub struct HBoxContainer { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl HBoxContainer { fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for HBoxContainer { type Base = crate :: classes :: BoxContainer ; fn class_name () -> ClassName { ClassName :: new_static ("HBoxContainer") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for HBoxContainer { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for HBoxContainer { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: BoxContainer > for HBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Container > for HBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for HBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for HBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for HBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for HBoxContainer { } impl crate :: obj :: cap :: GodotDefault for HBoxContainer { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for HBoxContainer { type Target = crate :: classes :: BoxContainer ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for HBoxContainer { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }