# ! [doc = "Sidecar module for class [`PlaneMesh`][crate::classes::PlaneMesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `PlaneMesh`.\n\nInherits [`PrimitiveMesh`][crate::classes::PrimitiveMesh].\n\nRelated symbols live in the [`plane_mesh`][crate::classes::plane_mesh] module."] # [repr (C)] # [derive (Debug)] pub struct PlaneMesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl PlaneMesh { pub fn set_size (& mut self , size : Vector2 ,) { let args = (size . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__set_size ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "set_size") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_size (& self ,) -> Vector2 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__get_size ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "get_size") , args) . out_ptrcall :: < Vector2 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_subdivide_width (& mut self , subdivide_width : i32 ,) { let args = (subdivide_width . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__set_subdivide_width ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "set_subdivide_width") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_subdivide_width (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__get_subdivide_width ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "get_subdivide_width") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_subdivide_depth (& mut self , subdivide_depth : i32 ,) { let args = (subdivide_depth . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__set_subdivide_depth ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "set_subdivide_depth") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_subdivide_depth (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__get_subdivide_depth ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "get_subdivide_depth") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_center_offset (& mut self , center_offset : Vector3 ,) { let args = (center_offset . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__set_center_offset ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "set_center_offset") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_center_offset (& self ,) -> Vector3 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__get_center_offset ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "get_center_offset") , args) . out_ptrcall :: < Vector3 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_orientation (& mut self , orientation : crate :: classes :: plane_mesh :: Orientation ,) { let args = (orientation . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__set_orientation ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "set_orientation") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_orientation (& self ,) -> crate :: classes :: plane_mesh :: Orientation { let args = () ; unsafe { let method_bind = sys :: class_method_table () . plane_mesh__get_orientation ; CallFrame :: new (CallContext :: new ("PlaneMesh" , "get_orientation") , args) . out_ptrcall :: < crate :: classes :: plane_mesh :: Orientation > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `size`, read through [`get_size()`][Self::get_size]."] pub fn size (& self) -> Vector2 { self . get_size () } # [doc = "Value of property `subdivide_width`, read through [`get_subdivide_width()`][Self::get_subdivide_width]."] pub fn subdivide_width (& self) -> i32 { self . get_subdivide_width () } # [doc = "Value of property `subdivide_depth`, read through [`get_subdivide_depth()`][Self::get_subdivide_depth]."] pub fn subdivide_depth (& self) -> i32 { self . get_subdivide_depth () } # [doc = "Value of property `center_offset`, read through [`get_center_offset()`][Self::get_center_offset]."] pub fn center_offset (& self) -> Vector3 { self . get_center_offset () } # [doc = "Value of property `orientation`, read through [`get_orientation()`][Self::get_orientation]."] pub fn orientation (& self) -> crate :: classes :: plane_mesh :: Orientation { self . get_orientation () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for PlaneMesh { type Base = crate :: classes :: PrimitiveMesh ; fn class_name () -> ClassName { ClassName :: new_static ("PlaneMesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for PlaneMesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for PlaneMesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: PrimitiveMesh > for PlaneMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Mesh > for PlaneMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for PlaneMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for PlaneMesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for PlaneMesh { } impl crate :: obj :: cap :: GodotDefault for PlaneMesh { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for PlaneMesh { type Target = crate :: classes :: PrimitiveMesh ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for PlaneMesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`PlaneMesh`][crate::classes::PlaneMesh]."] pub struct Orientation { ord : i32 } impl Orientation { # [doc (alias = "FACE_X")] # [doc = "Godot enumerator name: `FACE_X`"] pub const X : Orientation = Orientation { ord : 0i32 } ; # [doc (alias = "FACE_Y")] # [doc = "Godot enumerator name: `FACE_Y`"] pub const Y : Orientation = Orientation { ord : 1i32 } ; # [doc (alias = "FACE_Z")] # [doc = "Godot enumerator name: `FACE_Z`"] pub const Z : Orientation = Orientation { ord : 2i32 } ; } impl std :: fmt :: Debug for Orientation { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "X" , 1 => "Y" , 2 => "Z" , _ => { return f . debug_struct ("Orientation") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for Orientation { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "X" , 1 => "Y" , 2 => "Z" , _ => "" , } } fn values () -> & 'static [Self] { & [Orientation :: X , Orientation :: Y , Orientation :: Z ,] } } impl crate :: meta :: GodotType for Orientation { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }