# ! [doc = "Sidecar module for class [`VBoxContainer`][crate::classes::VBoxContainer]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `VBoxContainer`.\n\nInherits [`BoxContainer`][crate::classes::BoxContainer]."] # [repr (C)] # [derive (Debug)] pub struct VBoxContainer { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl VBoxContainer { fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for VBoxContainer { type Base = crate :: classes :: BoxContainer ; fn class_name () -> ClassName { ClassName :: new_static ("VBoxContainer") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for VBoxContainer { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for VBoxContainer { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: BoxContainer > for VBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Container > for VBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for VBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for VBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for VBoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for VBoxContainer { } impl crate :: obj :: cap :: GodotDefault for VBoxContainer { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for VBoxContainer { type Target = crate :: classes :: BoxContainer ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for VBoxContainer { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }