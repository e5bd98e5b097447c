# ! [doc = "Sidecar module for class [`StandardMaterial3D`][crate::classes::StandardMaterial3D]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `StandardMaterial3D`.\n\nInherits [`BaseMaterial3D`][crate::classes::BaseMaterial3D]."] # [repr (C)] # [derive (Debug)] pub struct StandardMaterial3D { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl StandardMaterial3D { fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for StandardMaterial3D { type Base = crate :: classes :: BaseMaterial3D ; fn class_name () -> ClassName { ClassName :: new_static ("StandardMaterial3D") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for StandardMaterial3D { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for StandardMaterial3D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: BaseMaterial3D > for StandardMaterial3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Material > for StandardMaterial3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for StandardMaterial3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for StandardMaterial3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for StandardMaterial3D { } impl crate :: obj :: cap :: GodotDefault for StandardMaterial3D { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for StandardMaterial3D { type Target = crate :: classes :: BaseMaterial3D ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for StandardMaterial3D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }