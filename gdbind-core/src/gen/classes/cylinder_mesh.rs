# ! [doc = "Sidecar module for class [`CylinderMesh`][crate::classes::CylinderMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `CylinderMesh`.\n\nInherits [`PrimitiveMesh`][crate::classes::PrimitiveMesh]."] # [repr (C)] # [derive (Debug)] pub struct CylinderMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl CylinderMesh { pub fn set_top_radius (& mut self , top_radius : f32 ,) { let args = (top_radius . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__set_top_radius ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "set_top_radius") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_top_radius (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__get_top_radius ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "get_top_radius") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_bottom_radius (& mut self , bottom_radius : f32 ,) { let args = (bottom_radius . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__set_bottom_radius ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "set_bottom_radius") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_bottom_radius (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__get_bottom_radius ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "get_bottom_radius") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_height (& mut self , height : f32 ,) { let args = (height . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__set_height ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "set_height") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_height (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__get_height ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "get_height") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_radial_segments (& mut self , radial_segments : i32 ,) { let args = (radial_segments . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__set_radial_segments ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "set_radial_segments") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_radial_segments (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__get_radial_segments ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "get_radial_segments") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_rings (& mut self , rings : i32 ,) { let args = (rings . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__set_rings ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "set_rings") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_rings (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__get_rings ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "get_rings") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_cap_top (& mut self , cap_top : bool ,) { let args = (cap_top . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__set_cap_top ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "set_cap_top") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_cap_top (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__is_cap_top ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "is_cap_top") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_cap_bottom (& mut self , cap_bottom : bool ,) { let args = (cap_bottom . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__set_cap_bottom ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "set_cap_bottom") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_cap_bottom (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . cylinder_mesh__is_cap_bottom ; CallFrame :: new (CallContext :: new ("CylinderMesh" , "is_cap_bottom") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `top_radius`, read through [`get_top_radius()`][Self::get_top_radius]."] pub fn top_radius (& self) -> f32 { self . get_top_radius () } # [doc = "Value of property `bottom_radius`, read through [`get_bottom_radius()`][Self::get_bottom_radius]."] pub fn bottom_radius (& self) -> f32 { self . get_bottom_radius () } # [doc = "Value of property `height`, read through [`get_height()`][Self::get_height]."] pub fn height (& self) -> f32 { self . get_height () } # [doc = "Value of property `radial_segments`, read through [`get_radial_segments()`][Self::get_radial_segments]."] pub fn radial_segments (& self) -> i32 { self . get_radial_segments () } # [doc = "Value of property `rings`, read through [`get_rings()`][Self::get_rings]."] pub fn rings (& self) -> i32 { self . get_rings () } # [doc = "Value of property `cap_top`, read through [`is_cap_top()`][Self::is_cap_top]."] pub fn cap_top (& self) -> bool { self . is_cap_top () } # [doc = "Value of property `cap_bottom`, read through [`is_cap_bottom()`][Self::is_cap_bottom]."] pub fn cap_bottom (& self) -> bool { self . is_cap_bottom () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for CylinderMesh { type Base = crate :: classes :: PrimitiveMesh ; fn class_name () -> ClassName { ClassName :: new_static ("CylinderMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for CylinderMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for CylinderMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: PrimitiveMesh > for CylinderMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for CylinderMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for CylinderMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for CylinderMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for CylinderMesh { } impl crate :: obj :: cap :: GodotDefault for CylinderMesh { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for CylinderMesh { type Target = crate :: classes :: PrimitiveMesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CylinderMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }