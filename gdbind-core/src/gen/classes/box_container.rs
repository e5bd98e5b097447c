# ! [doc = "Sidecar module for class [`BoxContainer`][crate::classes::BoxContainer]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `BoxContainer`.\n\nInherits [`Container`][crate::classes::Container].\n\nRelated symbols live in the [`box_container`][crate::classes::box_container] module."] # [repr (C)] # [derive (Debug)] pub struct BoxContainer { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl BoxContainer { pub fn set_alignment (& mut self , alignment : crate :: classes :: box_container :: AlignmentMode ,) { let args = (alignment . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . box_container__set_alignment ; CallFrame :: new (CallContext :: new ("BoxContainer" , "set_alignment") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_alignment (& self ,) -> crate :: classes :: box_container :: AlignmentMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . box_container__get_alignment ; CallFrame :: new (CallContext :: new ("BoxContainer" , "get_alignment") , args) . out_ptrcall :: < crate :: classes :: box_container :: AlignmentMode > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_vertical (& mut self , vertical : bool ,) { let args = (vertical . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . box_container__set_vertical ; CallFrame :: new (CallContext :: new ("BoxContainer" , "set_vertical") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_vertical (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . box_container__is_vertical ; CallFrame :: new (CallContext :: new ("BoxContainer" , "is_vertical") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn add_spacer (& mut self , begin : bool ,) -> Option < Gd < crate :: classes :: Control > > { let args = (begin . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . box_container__add_spacer ; CallFrame :: new (CallContext :: new ("BoxContainer" , "add_spacer") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Control > > > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `alignment`, read through [`get_alignment()`][Self::get_alignment]."] pub fn alignment (& self) -> crate :: classes :: box_container :: AlignmentMode { self . get_alignment () } # [doc = "Value of property `vertical`, read through [`is_vertical()`][Self::is_vertical]."] pub fn vertical (& self) -> bool { self . is_vertical () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for BoxContainer { type Base = crate :: classes :: Container ; fn class_name () -> ClassName { ClassName :: new_static ("BoxContainer") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for BoxContainer { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for BoxContainer { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Container > for BoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for BoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for BoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for BoxContainer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for BoxContainer { } impl crate :: obj :: cap :: GodotDefault for BoxContainer { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for BoxContainer { type Target = crate :: classes :: Container ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for BoxContainer { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`BoxContainer`][crate::classes::BoxContainer]."] pub struct AlignmentMode { ord : i32 } impl AlignmentMode { # [doc (alias = "ALIGNMENT_BEGIN")] # [doc = "Godot enumerator name: `ALIGNMENT_BEGIN`"] pub const BEGIN : AlignmentMode = AlignmentMode { ord : 0i32 } ; # [doc (alias = "ALIGNMENT_CENTER")] # [doc = "Godot enumerator name: `ALIGNMENT_CENTER`"] pub const CENTER : AlignmentMode = AlignmentMode { ord : 1i32 } ; # [doc (alias = "ALIGNMENT_END")] # [doc = "Godot enumerator name: `ALIGNMENT_END`"] pub const END : AlignmentMode = AlignmentMode { ord : 2i32 } ; } impl std :: fmt :: Debug for AlignmentMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "BEGIN" , 1 => "CENTER" , 2 => "END" , _ => { return f . debug_struct ("AlignmentMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for AlignmentMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "BEGIN" , 1 => "CENTER" , 2 => "END" , _ => "" , } } fn values () -> & 'static [Self] { & [AlignmentMode :: BEGIN , AlignmentMode :: CENTER , AlignmentMode :: END ,] } } impl crate :: meta :: GodotType for AlignmentMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }