# ! [doc = "Sidecar module for class [`Shader`][crate::classes::Shader]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Shader`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols live in the [`shader`][crate::classes::shader] module."] # [repr (C)] # [derive (Debug)] pub struct Shader { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Shader { pub fn set_code (& mut self , code : impl AsArg < GString > ,) { let args = (code . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . shader__set_code ; CallFrame :: new (CallContext :: new ("Shader" , "set_code") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_code (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . shader__get_code ; CallFrame :: new (CallContext :: new ("Shader" , "get_code") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_mode (& self ,) -> crate :: classes :: shader :: Mode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . shader__get_mode ; CallFrame :: new (CallContext :: new ("Shader" , "get_mode") , args) . out_ptrcall :: < crate :: classes :: shader :: Mode > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `code`, read through [`get_code()`][Self::get_code]."] pub fn code (& self) -> String { self . get_code () . to_string () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Shader { type Base = crate :: classes :: Resource ; fn class_name () -> ClassName { ClassName :: new_static ("Shader") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Shader { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for Shader { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Shader { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Shader { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Shader { } impl crate :: obj :: cap :: GodotDefault for Shader { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Shader { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Shader { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`Shader`][crate::classes::Shader]."] pub struct Mode { ord : i32 } impl Mode { # [doc (alias = "MODE_SPATIAL")] # [doc = "Godot enumerator name: `MODE_SPATIAL`"] pub const SPATIAL : Mode = Mode { ord : 0i32 } ; # [doc (alias = "MODE_CANVAS_ITEM")] # [doc = "Godot enumerator name: `MODE_CANVAS_ITEM`"] pub const CANVAS_ITEM : Mode = Mode { ord : 1i32 } ; # [doc (alias = "MODE_PARTICLES")] # [doc = "Godot enumerator name: `MODE_PARTICLES`"] pub const PARTICLES : Mode = Mode { ord : 2i32 } ; # [doc (alias = "MODE_SKY")] # [doc = "Godot enumerator name: `MODE_SKY`"] pub const SKY : Mode = Mode { ord : 3i32 } ; # [doc (alias = "MODE_FOG")] # [doc = "Godot enumerator name: `MODE_FOG`"] pub const FOG : Mode = Mode { ord : 4i32 } ; } impl std :: fmt :: Debug for Mode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "SPATIAL" , 1 => "CANVAS_ITEM" , 2 => "PARTICLES" , 3 => "SKY" , 4 => "FOG" , _ => { return f . debug_struct ("Mode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for Mode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "SPATIAL" , 1 => "CANVAS_ITEM" , 2 => "PARTICLES" , 3 => "SKY" , 4 => "FOG" , _ => "" , } } fn values () -> & 'static [Self] { & [Mode :: SPATIAL , Mode :: CANVAS_ITEM , Mode :: PARTICLES , Mode :: SKY , Mode :: FOG ,] } } impl crate :: meta :: GodotType for Mode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }