# ! [doc = "Sidecar module for class [`PrismMesh`][crate::classes::PrismMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `PrismMesh`.\n\nInherits [`PrimitiveMesh`][crate::classes::PrimitiveMesh]."] # [repr (C)] # [derive (Debug)] pub struct PrismMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl PrismMesh { pub fn set_left_to_right (& mut self , left_to_right : f32 ,) { let args = (left_to_right . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__set_left_to_right ; CallFrame :: new (CallContext :: new ("PrismMesh" , "set_left_to_right") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_left_to_right (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__get_left_to_right ; CallFrame :: new (CallContext :: new ("PrismMesh" , "get_left_to_right") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_size (& mut self , size : Vector3 ,) { let args = (size . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__set_size ; CallFrame :: new (CallContext :: new ("PrismMesh" , "set_size") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_size (& self ,) -> Vector3 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__get_size ; CallFrame :: new (CallContext :: new ("PrismMesh" , "get_size") , args) . out_ptrcall :: < Vector3 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_subdivide_width (& mut self , subdivide_width : i32 ,) { let args = (subdivide_width . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__set_subdivide_width ; CallFrame :: new (CallContext :: new ("PrismMesh" , "set_subdivide_width") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_subdivide_width (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__get_subdivide_width ; CallFrame :: new (CallContext :: new ("PrismMesh" , "get_subdivide_width") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_subdivide_height (& mut self , subdivide_height : i32 ,) { let args = (subdivide_height . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__set_subdivide_height ; CallFrame :: new (CallContext :: new ("PrismMesh" , "set_subdivide_height") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_subdivide_height (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__get_subdivide_height ; CallFrame :: new (CallContext :: new ("PrismMesh" , "get_subdivide_height") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_subdivide_depth (& mut self , subdivide_depth : i32 ,) { let args = (subdivide_depth . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__set_subdivide_depth ; CallFrame :: new (CallContext :: new ("PrismMesh" , "set_subdivide_depth") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_subdivide_depth (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . prism_mesh__get_subdivide_depth ; CallFrame :: new (CallContext :: new ("PrismMesh" , "get_subdivide_depth") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `left_to_right`, read through [`get_left_to_right()`][Self::get_left_to_right]."] pub fn left_to_right (& self) -> f32 { self . get_left_to_right () } # [doc = "Value of property `size`, read through [`get_size()`][Self::get_size]."] pub fn size (& self) -> Vector3 { self . get_size () } # [doc = "Value of property `subdivide_width`, read through [`get_subdivide_width()`][Self::get_subdivide_width]."] pub fn subdivide_width (& self) -> i32 { self . get_subdivide_width () } # [doc = "Value of property `subdivide_height`, read through [`get_subdivide_height()`][Self::get_subdivide_height]."] pub fn subdivide_height (& self) -> i32 { self . get_subdivide_height () } # [doc = "Value of property `subdivide_depth`, read through [`get_subdivide_depth()`][Self::get_subdivide_depth]."] pub fn subdivide_depth (& self) -> i32 { self . get_subdivide_depth () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for PrismMesh { type Base = crate :: classes :: PrimitiveMesh ; fn class_name () -> ClassName { ClassName :: new_static ("PrismMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for PrismMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for PrismMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: PrimitiveMesh > for PrismMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for PrismMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for PrismMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for PrismMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for PrismMesh { } impl crate :: obj :: cap :: GodotDefault for PrismMesh { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for PrismMesh { type Target = crate :: classes :: PrimitiveMesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for PrismMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }