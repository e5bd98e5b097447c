# ! [doc = "Sidecar module for class [`PrimitiveMesh`][crate::classes::PrimitiveMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `PrimitiveMesh`.\n\nInherits [`Mesh`][crate::classes::Mesh]."] # [repr (C)] # [derive (Debug)] pub struct PrimitiveMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl PrimitiveMesh { pub fn set_material (& mut self , material : impl AsObjectArg < crate :: classes :: Material > ,) { let args = (material . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__set_material ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "set_material") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_material (& self ,) -> Option < Gd < crate :: classes :: Material > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__get_material ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "get_material") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Material > > > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_flip_faces (& mut self , flip_faces : bool ,) { let args = (flip_faces . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__set_flip_faces ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "set_flip_faces") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_flip_faces (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__get_flip_faces ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "get_flip_faces") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_add_uv2 (& mut self , add_uv2 : bool ,) { let args = (add_uv2 . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__set_add_uv2 ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "set_add_uv2") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_add_uv2 (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__get_add_uv2 ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "get_add_uv2") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_uv2_padding (& mut self , uv2_padding : f32 ,) { let args = (uv2_padding . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__set_uv2_padding ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "set_uv2_padding") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_uv2_padding (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__get_uv2_padding ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "get_uv2_padding") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn request_update (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . primitive_mesh__request_update ; CallFrame :: new (CallContext :: new ("PrimitiveMesh" , "request_update") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `material`, read through [`get_material()`][Self::get_material]."] pub fn material (& self) -> Option < Gd < crate :: classes :: Material > > { self . get_material () } # [doc = "Value of property `flip_faces`, read through [`get_flip_faces()`][Self::get_flip_faces]."] pub fn flip_faces (& self) -> bool { self . get_flip_faces () } # [doc = "Value of property `add_uv2`, read through [`get_add_uv2()`][Self::get_add_uv2]."] pub fn add_uv2 (& self) -> bool { self . get_add_uv2 () } # [doc = "Value of property `uv2_padding`, read through [`get_uv2_padding()`][Self::get_uv2_padding]."] pub fn uv2_padding (& self) -> f32 { self . get_uv2_padding () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for PrimitiveMesh { type Base = crate :: classes :: Mesh ; fn class_name () -> ClassName { ClassName :: new_static ("PrimitiveMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for PrimitiveMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for PrimitiveMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for PrimitiveMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for PrimitiveMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for PrimitiveMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for PrimitiveMesh { } impl std :: ops :: Deref for PrimitiveMesh { type Target = crate :: classes :: Mesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for PrimitiveMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }