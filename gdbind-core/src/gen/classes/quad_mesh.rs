# ! [doc = "Sidecar module for class [`QuadMesh`][crate::classes::QuadMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `QuadMesh`.\n\nInherits [`PlaneMesh`][crate::classes::PlaneMesh]."] # [repr (C)] # [derive (Debug)] pub struct QuadMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl QuadMesh { fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for QuadMesh { type Base = crate :: classes :: PlaneMesh ; fn class_name () -> ClassName { ClassName :: new_static ("QuadMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for QuadMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for QuadMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: PlaneMesh > for QuadMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: PrimitiveMesh > for QuadMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for QuadMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for QuadMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for QuadMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for QuadMesh { } impl crate :: obj :: cap :: GodotDefault for QuadMesh { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for QuadMesh { type Target = crate :: classes :: PlaneMesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for QuadMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }