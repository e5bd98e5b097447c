# ! [doc = "Sidecar module for class [`BaseButton`][crate::classes::BaseButton]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `BaseButton`.\n\nInherits [`Control`][crate::classes::Control].\n\nRelated symbols live in the [`base_button`][crate::classes::base_button] module."] # [repr (C)] # [derive (Debug)] pub struct BaseButton { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl BaseButton { pub fn set_disabled (& mut self , disabled : bool ,) { let args = (disabled . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_button__set_disabled ; CallFrame :: new (CallContext :: new ("BaseButton" , "set_disabled") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_disabled (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__is_disabled ; CallFrame :: new (CallContext :: new ("BaseButton" , "is_disabled") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_toggle_mode (& mut self , toggle_mode : bool ,) { let args = (toggle_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_button__set_toggle_mode ; CallFrame :: new (CallContext :: new ("BaseButton" , "set_toggle_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_toggle_mode (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__is_toggle_mode ; CallFrame :: new (CallContext :: new ("BaseButton" , "is_toggle_mode") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_pressed (& mut self , button_pressed : bool ,) { let args = (button_pressed . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_button__set_pressed ; CallFrame :: new (CallContext :: new ("BaseButton" , "set_pressed") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_pressed (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__is_pressed ; CallFrame :: new (CallContext :: new ("BaseButton" , "is_pressed") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_action_mode (& mut self , action_mode : crate :: classes :: base_button :: ActionMode ,) { let args = (action_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_button__set_action_mode ; CallFrame :: new (CallContext :: new ("BaseButton" , "set_action_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_action_mode (& self ,) -> crate :: classes :: base_button :: ActionMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__get_action_mode ; CallFrame :: new (CallContext :: new ("BaseButton" , "get_action_mode") , args) . out_ptrcall :: < crate :: classes :: base_button :: ActionMode > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_button_mask (& mut self , button_mask : crate :: global :: MouseButtonMask ,) { let args = (button_mask . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_button__set_button_mask ; CallFrame :: new (CallContext :: new ("BaseButton" , "set_button_mask") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_button_mask (& self ,) -> crate :: global :: MouseButtonMask { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__get_button_mask ; CallFrame :: new (CallContext :: new ("BaseButton" , "get_button_mask") , args) . out_ptrcall :: < crate :: global :: MouseButtonMask > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_button_group (& mut self , button_group : impl AsObjectArg < crate :: classes :: ButtonGroup > ,) { let args = (button_group . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_button__set_button_group ; CallFrame :: new (CallContext :: new ("BaseButton" , "set_button_group") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_button_group (& self ,) -> Option < Gd < crate :: classes :: ButtonGroup > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__get_button_group ; CallFrame :: new (CallContext :: new ("BaseButton" , "get_button_group") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: ButtonGroup > > > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_hovered (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__is_hovered ; CallFrame :: new (CallContext :: new ("BaseButton" , "is_hovered") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_draw_mode (& self ,) -> crate :: classes :: base_button :: DrawMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_button__get_draw_mode ; CallFrame :: new (CallContext :: new ("BaseButton" , "get_draw_mode") , args) . out_ptrcall :: < crate :: classes :: base_button :: DrawMode > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `disabled`, read through [`is_disabled()`][Self::is_disabled]."] pub fn disabled (& self) -> bool { self . is_disabled () } # [doc = "Value of property `toggle_mode`, read through [`is_toggle_mode()`][Self::is_toggle_mode]."] pub fn toggle_mode (& self) -> bool { self . is_toggle_mode () } # [doc = "Value of property `button_pressed`, read through [`is_pressed()`][Self::is_pressed]."] pub fn button_pressed (& self) -> bool { self . is_pressed () } # [doc = "Value of property `action_mode`, read through [`get_action_mode()`][Self::get_action_mode]."] pub fn action_mode (& self) -> crate :: classes :: base_button :: ActionMode { self . get_action_mode () } # [doc = "Value of property `button_mask`, read through [`get_button_mask()`][Self::get_button_mask]."] pub fn button_mask (& self) -> crate :: global :: MouseButtonMask { self . get_button_mask () } # [doc = "Value of property `button_group`, read through [`get_button_group()`][Self::get_button_group]."] pub fn button_group (& self) -> Option < Gd < crate :: classes :: ButtonGroup > > { self . get_button_group () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for BaseButton { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { ClassName :: new_static ("BaseButton") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for BaseButton { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for BaseButton { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for BaseButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for BaseButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for BaseButton { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for BaseButton { } impl std :: ops :: Deref for BaseButton { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for BaseButton { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`BaseButton`][crate::classes::BaseButton]."] pub struct DrawMode { ord : i32 } impl DrawMode { # [doc (alias = "DRAW_NORMAL")] # [doc = "Godot enumerator name: `DRAW_NORMAL`"] pub const NORMAL : DrawMode = DrawMode { ord : 0i32 } ; # [doc (alias = "DRAW_PRESSED")] # [doc = "Godot enumerator name: `DRAW_PRESSED`"] pub const PRESSED : DrawMode = DrawMode { ord : 1i32 } ; # [doc (alias = "DRAW_HOVER")] # [doc = "Godot enumerator name: `DRAW_HOVER`"] pub const HOVER : DrawMode = DrawMode { ord : 2i32 } ; # [doc (alias = "DRAW_DISABLED")] # [doc = "Godot enumerator name: `DRAW_DISABLED`"] pub const DISABLED : DrawMode = DrawMode { ord : 3i32 } ; # [doc (alias = "DRAW_HOVER_PRESSED")] # [doc = "Godot enumerator name: `DRAW_HOVER_PRESSED`"] pub const HOVER_PRESSED : DrawMode = DrawMode { ord : 4i32 } ; } impl std :: fmt :: Debug for DrawMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "NORMAL" , 1 => "PRESSED" , 2 => "HOVER" , 3 => "DISABLED" , 4 => "HOVER_PRESSED" , _ => { return f . debug_struct ("DrawMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for DrawMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "NORMAL" , 1 => "PRESSED" , 2 => "HOVER" , 3 => "DISABLED" , 4 => "HOVER_PRESSED" , _ => "" , } } fn values () -> & 'static [Self] { & [DrawMode :: NORMAL , DrawMode :: PRESSED , DrawMode :: HOVER , DrawMode :: DISABLED , DrawMode :: HOVER_PRESSED ,] } } impl crate :: meta :: GodotType for DrawMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`BaseButton`][crate::classes::BaseButton]."] pub struct ActionMode { ord : i32 } impl ActionMode { # [doc (alias = "ACTION_MODE_BUTTON_PRESS")] # [doc = "Godot enumerator name: `ACTION_MODE_BUTTON_PRESS`"] pub const PRESS : ActionMode = ActionMode { ord : 0i32 } ; # [doc (alias = "ACTION_MODE_BUTTON_RELEASE")] # [doc = "Godot enumerator name: `ACTION_MODE_BUTTON_RELEASE`"] pub const RELEASE : ActionMode = ActionMode { ord : 1i32 } ; } impl std :: fmt :: Debug for ActionMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "PRESS" , 1 => "RELEASE" , _ => { return f . debug_struct ("ActionMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for ActionMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "PRESS" , 1 => "RELEASE" , _ => "" , } } fn values () -> & 'static [Self] { & [ActionMode :: PRESS , ActionMode :: RELEASE ,] } } impl crate :: meta :: GodotType for ActionMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }