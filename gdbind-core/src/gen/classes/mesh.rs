# ! [doc = "Sidecar module for class [`Mesh`][crate::classes::Mesh]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Mesh`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols live in the [`mesh`][crate::classes::mesh] module."] # [repr (C)] # [derive (Debug)] pub struct Mesh { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Mesh { pub fn get_surface_count (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . mesh__get_surface_count ; CallFrame :: new (CallContext :: new ("Mesh" , "get_surface_count") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn surface_get_material (& self , surf_idx : i32 ,) -> Option < Gd < crate :: classes :: Material > > { let args = (surf_idx . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . mesh__surface_get_material ; CallFrame :: new (CallContext :: new ("Mesh" , "surface_get_material") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Material > > > (method_bind , self . object_ptr , self . __checked_id ()) } } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Mesh { type Base = crate :: classes :: Resource ; fn class_name () -> ClassName { ClassName :: new_static ("Mesh") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Mesh { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for Mesh { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Mesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Mesh { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Mesh { } impl std :: ops :: Deref for Mesh { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Mesh { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`Mesh`][crate::classes::Mesh]."] pub struct PrimitiveType { ord : i32 } impl PrimitiveType { # [doc (alias = "PRIMITIVE_POINTS")] # [doc = "Godot enumerator name: `PRIMITIVE_POINTS`"] pub const POINTS : PrimitiveType = PrimitiveType { ord : 0i32 } ; # [doc (alias = "PRIMITIVE_LINES")] # [doc = "Godot enumerator name: `PRIMITIVE_LINES`"] pub const LINES : PrimitiveType = PrimitiveType { ord : 1i32 } ; # [doc (alias = "PRIMITIVE_LINE_STRIP")] # [doc = "Godot enumerator name: `PRIMITIVE_LINE_STRIP`"] pub const LINE_STRIP : PrimitiveType = PrimitiveType { ord : 2i32 } ; # [doc (alias = "PRIMITIVE_TRIANGLES")] # [doc = "Godot enumerator name: `PRIMITIVE_TRIANGLES`"] pub const TRIANGLES : PrimitiveType = PrimitiveType { ord : 3i32 } ; # [doc (alias = "PRIMITIVE_TRIANGLE_STRIP")] # [doc = "Godot enumerator name: `PRIMITIVE_TRIANGLE_STRIP`"] pub const TRIANGLE_STRIP : PrimitiveType = PrimitiveType { ord : 4i32 } ; } impl std :: fmt :: Debug for PrimitiveType { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "POINTS" , 1 => "LINES" , 2 => "LINE_STRIP" , 3 => "TRIANGLES" , 4 => "TRIANGLE_STRIP" , _ => { return f . debug_struct ("PrimitiveType") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for PrimitiveType { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "POINTS" , 1 => "LINES" , 2 => "LINE_STRIP" , 3 => "TRIANGLES" , 4 => "TRIANGLE_STRIP" , _ => "" , } } fn values () -> & 'static [Self] { & [PrimitiveType :: POINTS , PrimitiveType :: LINES , PrimitiveType :: LINE_STRIP , PrimitiveType :: TRIANGLES , PrimitiveType :: TRIANGLE_STRIP ,] } } impl crate :: meta :: GodotType for PrimitiveType { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default)] # [doc = "Declared by class [`Mesh`][crate::classes::Mesh]."] pub struct ArrayFormat { ord : u64 } impl ArrayFormat { # [doc (alias = "ARRAY_FORMAT_VERTEX")] # [doc = "Godot enumerator name: `ARRAY_FORMAT_VERTEX`"] pub const VERTEX : ArrayFormat = ArrayFormat { ord : 0x0000000000000001 } ; # [doc (alias = "ARRAY_FORMAT_NORMAL")] # [doc = "Godot enumerator name: `ARRAY_FORMAT_NORMAL`"] pub const NORMAL : ArrayFormat = ArrayFormat { ord : 0x0000000000000002 } ; # [doc (alias = "ARRAY_FORMAT_TANGENT")] # [doc = "Godot enumerator name: `ARRAY_FORMAT_TANGENT`"] pub const TANGENT : ArrayFormat = ArrayFormat { ord : 0x0000000000000004 } ; # [doc (alias = "ARRAY_FORMAT_COLOR")] # [doc = "Godot enumerator name: `ARRAY_FORMAT_COLOR`"] pub const COLOR : ArrayFormat = ArrayFormat { ord : 0x0000000000000008 } ; # [doc (alias = "ARRAY_FORMAT_TEX_UV")] # [doc = "Godot enumerator name: `ARRAY_FORMAT_TEX_UV`"] pub const TEX_UV : ArrayFormat = ArrayFormat { ord : 0x0000000000000010 } ; # [doc (alias = "ARRAY_FORMAT_TEX_UV2")] # [doc = "Godot enumerator name: `ARRAY_FORMAT_TEX_UV2`"] pub const TEX_UV2 : ArrayFormat = ArrayFormat { ord : 0x0000000000000020 } ; # [doc (alias = "ARRAY_FORMAT_INDEX")] # [doc = "Godot enumerator name: `ARRAY_FORMAT_INDEX`"] pub const INDEX : ArrayFormat = ArrayFormat { ord : 0x0000000000001000 } ; } impl std :: fmt :: Debug for ArrayFormat { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 1 => "VERTEX" , 2 => "NORMAL" , 4 => "TANGENT" , 8 => "COLOR" , 16 => "TEX_UV" , 32 => "TEX_UV2" , 4096 => "INDEX" , _ => { return f . debug_struct ("ArrayFormat") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineBitfield for ArrayFormat { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl crate :: meta :: GodotType for ArrayFormat { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : ffi as u64 }) } } impl std :: ops :: BitOr for ArrayFormat { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } }