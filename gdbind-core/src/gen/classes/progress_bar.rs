# ! [doc = "Sidecar module for class [`ProgressBar`][crate::classes::ProgressBar]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `ProgressBar`.\n\nInherits [`Range`][crate::classes::Range].\n\nRelated symbols live in the [`progress_bar`][crate::classes::progress_bar] module."] # [repr (C)] # [derive (Debug)] pub struct ProgressBar { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl ProgressBar { pub fn set_fill_mode (& mut self , fill_mode : i32 ,) { let args = (fill_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . progress_bar__set_fill_mode ; CallFrame :: new (CallContext :: new ("ProgressBar" , "set_fill_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_fill_mode (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . progress_bar__get_fill_mode ; CallFrame :: new (CallContext :: new ("ProgressBar" , "get_fill_mode") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_show_percentage (& mut self , show_percentage : bool ,) { let args = (show_percentage . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . progress_bar__set_show_percentage ; CallFrame :: new (CallContext :: new ("ProgressBar" , "set_show_percentage") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_percentage_shown (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . progress_bar__is_percentage_shown ; CallFrame :: new (CallContext :: new ("ProgressBar" , "is_percentage_shown") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `fill_mode`, read through [`get_fill_mode()`][Self::get_fill_mode]."] pub fn fill_mode (& self) -> i32 { self . get_fill_mode () } # [doc = "Value of property `show_percentage`, read through [`is_percentage_shown()`][Self::is_percentage_shown]."] pub fn show_percentage (& self) -> bool { self . is_percentage_shown () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for ProgressBar { type Base = crate :: classes :: Range ; fn class_name () -> ClassName { ClassName :: new_static ("ProgressBar") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for ProgressBar { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for ProgressBar { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Range > for ProgressBar { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for ProgressBar { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for ProgressBar { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for ProgressBar { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for ProgressBar { } impl crate :: obj :: cap :: GodotDefault for ProgressBar { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for ProgressBar { type Target = crate :: classes :: Range ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for ProgressBar { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`ProgressBar`][crate::classes::ProgressBar]."] pub struct FillMode { ord : i32 } impl FillMode { # [doc (alias = "FILL_BEGIN_TO_END")] # [doc = "Godot enumerator name: `FILL_BEGIN_TO_END`"] pub const BEGIN_TO_END : FillMode = FillMode { ord : 0i32 } ; # [doc (alias = "FILL_END_TO_BEGIN")] # [doc = "Godot enumerator name: `FILL_END_TO_BEGIN`"] pub const END_TO_BEGIN : FillMode = FillMode { ord : 1i32 } ; # [doc (alias = "FILL_TOP_TO_BOTTOM")] # [doc = "Godot enumerator name: `FILL_TOP_TO_BOTTOM`"] pub const TOP_TO_BOTTOM : FillMode = FillMode { ord : 2i32 } ; # [doc (alias = "FILL_BOTTOM_TO_TOP")] # [doc = "Godot enumerator name: `FILL_BOTTOM_TO_TOP`"] pub const BOTTOM_TO_TOP : FillMode = FillMode { ord : 3i32 } ; } impl std :: fmt :: Debug for FillMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "BEGIN_TO_END" , 1 => "END_TO_BEGIN" , 2 => "TOP_TO_BOTTOM" , 3 => "BOTTOM_TO_TOP" , _ => { return f . debug_struct ("FillMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for FillMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "BEGIN_TO_END" , 1 => "END_TO_BEGIN" , 2 => "TOP_TO_BOTTOM" , 3 => "BOTTOM_TO_TOP" , _ => "" , } } fn values () -> & 'static [Self] { & [FillMode :: BEGIN_TO_END , FillMode :: END_TO_BEGIN , FillMode :: TOP_TO_BOTTOM , FillMode :: BOTTOM_TO_TOP ,] } } impl crate :: meta :: GodotType for FillMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }