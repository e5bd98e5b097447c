# ! [doc = "Sidecar module for class [`TorusMesh`][crate::classes::TorusMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `TorusMesh`.\n\nInherits [`PrimitiveMesh`][crate::classes::PrimitiveMesh]."] # [repr (C)] # [derive (Debug)] pub struct TorusMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl TorusMesh { pub fn set_inner_radius (& mut self , inner_radius : f32 ,) { let args = (inner_radius . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__set_inner_radius ; CallFrame :: new (CallContext :: new ("TorusMesh" , "set_inner_radius") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_inner_radius (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__get_inner_radius ; CallFrame :: new (CallContext :: new ("TorusMesh" , "get_inner_radius") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_outer_radius (& mut self , outer_radius : f32 ,) { let args = (outer_radius . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__set_outer_radius ; CallFrame :: new (CallContext :: new ("TorusMesh" , "set_outer_radius") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_outer_radius (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__get_outer_radius ; CallFrame :: new (CallContext :: new ("TorusMesh" , "get_outer_radius") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_rings (& mut self , rings : i32 ,) { let args = (rings . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__set_rings ; CallFrame :: new (CallContext :: new ("TorusMesh" , "set_rings") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_rings (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__get_rings ; CallFrame :: new (CallContext :: new ("TorusMesh" , "get_rings") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_ring_segments (& mut self , ring_segments : i32 ,) { let args = (ring_segments . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__set_ring_segments ; CallFrame :: new (CallContext :: new ("TorusMesh" , "set_ring_segments") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_ring_segments (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . torus_mesh__get_ring_segments ; CallFrame :: new (CallContext :: new ("TorusMesh" , "get_ring_segments") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `inner_radius`, read through [`get_inner_radius()`][Self::get_inner_radius]."] pub fn inner_radius (& self) -> f32 { self . get_inner_radius () } # [doc = "Value of property `outer_radius`, read through [`get_outer_radius()`][Self::get_outer_radius]."] pub fn outer_radius (& self) -> f32 { self . get_outer_radius () } # [doc = "Value of property `rings`, read through [`get_rings()`][Self::get_rings]."] pub fn rings (& self) -> i32 { self . get_rings () } # [doc = "Value of property `ring_segments`, read through [`get_ring_segments()`][Self::get_ring_segments]."] pub fn ring_segments (& self) -> i32 { self . get_ring_segments () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for TorusMesh { type Base = crate :: classes :: PrimitiveMesh ; fn class_name () -> ClassName { ClassName :: new_static ("TorusMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for TorusMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for TorusMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: PrimitiveMesh > for TorusMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for TorusMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for TorusMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for TorusMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for TorusMesh { } impl crate :: obj :: cap :: GodotDefault for TorusMesh { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for TorusMesh { type Target = crate :: classes :: PrimitiveMesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for TorusMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }