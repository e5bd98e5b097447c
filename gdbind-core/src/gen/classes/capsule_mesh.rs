# ! [doc = "Sidecar module for class [`CapsuleMesh`][crate::classes::CapsuleMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `CapsuleMesh`.\n\nInherits [`PrimitiveMesh`][crate::classes::PrimitiveMesh]."] # [repr (C)] # [derive (Debug)] pub struct CapsuleMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl CapsuleMesh { pub fn set_radius (& mut self , radius : f32 ,) { let args = (radius . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__set_radius ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "set_radius") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_radius (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__get_radius ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "get_radius") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_height (& mut self , height : f32 ,) { let args = (height . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__set_height ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "set_height") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_height (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__get_height ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "get_height") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_radial_segments (& mut self , radial_segments : i32 ,) { let args = (radial_segments . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__set_radial_segments ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "set_radial_segments") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_radial_segments (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__get_radial_segments ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "get_radial_segments") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_rings (& mut self , rings : i32 ,) { let args = (rings . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__set_rings ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "set_rings") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_rings (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . capsule_mesh__get_rings ; CallFrame :: new (CallContext :: new ("CapsuleMesh" , "get_rings") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `radius`, read through [`get_radius()`][Self::get_radius]."] pub fn radius (& self) -> f32 { self . get_radius () } # [doc = "Value of property `height`, read through [`get_height()`][Self::get_height]."] pub fn height (& self) -> f32 { self . get_height () } # [doc = "Value of property `radial_segments`, read through [`get_radial_segments()`][Self::get_radial_segments]."] pub fn radial_segments (& self) -> i32 { self . get_radial_segments () } # [doc = "Value of property `rings`, read through [`get_rings()`][Self::get_rings]."] pub fn rings (& self) -> i32 { self . get_rings () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for CapsuleMesh { type Base = crate :: classes :: PrimitiveMesh ; fn class_name () -> ClassName { ClassName :: new_static ("CapsuleMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for CapsuleMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for CapsuleMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: PrimitiveMesh > for CapsuleMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for CapsuleMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for CapsuleMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for CapsuleMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for CapsuleMesh { } impl crate :: obj :: cap :: GodotDefault for CapsuleMesh { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for CapsuleMesh { type Target = crate :: classes :: PrimitiveMesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CapsuleMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }