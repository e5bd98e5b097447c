# ! [doc = "Sidecar module for class [`LineEdit`][crate::classes::LineEdit]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `LineEdit`.\n\nInherits [`Control`][crate::classes::Control].\n\nRelated symbols live in the [`line_edit`][crate::classes::line_edit] module."] # [repr (C)] # [derive (Debug)] pub struct LineEdit { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl LineEdit { pub fn set_text (& mut self , text : impl AsArg < GString > ,) { let args = (text . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_text ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_text") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_text (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_text ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_text") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_placeholder (& mut self , placeholder_text : impl AsArg < GString > ,) { let args = (placeholder_text . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_placeholder ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_placeholder") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_placeholder (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_placeholder ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_placeholder") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_horizontal_alignment (& mut self , alignment : crate :: global :: HorizontalAlignment ,) { let args = (alignment . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_horizontal_alignment ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_horizontal_alignment") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_horizontal_alignment (& self ,) -> crate :: global :: HorizontalAlignment { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_horizontal_alignment ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_horizontal_alignment") , args) . out_ptrcall :: < crate :: global :: HorizontalAlignment > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_max_length (& mut self , max_length : i32 ,) { let args = (max_length . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_max_length ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_max_length") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_max_length (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_max_length ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_max_length") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_editable (& mut self , editable : bool ,) { let args = (editable . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_editable ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_editable") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_editable (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__is_editable ; CallFrame :: new (CallContext :: new ("LineEdit" , "is_editable") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_secret (& mut self , secret : bool ,) { let args = (secret . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_secret ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_secret") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_secret (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__is_secret ; CallFrame :: new (CallContext :: new ("LineEdit" , "is_secret") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_secret_character (& mut self , secret_character : impl AsArg < GString > ,) { let args = (secret_character . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_secret_character ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_secret_character") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_secret_character (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_secret_character ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_secret_character") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_caret_column (& mut self , caret_column : i32 ,) { let args = (caret_column . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_caret_column ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_caret_column") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_caret_column (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_caret_column ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_caret_column") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_virtual_keyboard_type (& mut self , virtual_keyboard_type : crate :: classes :: line_edit :: VirtualKeyboardType ,) { let args = (virtual_keyboard_type . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__set_virtual_keyboard_type ; CallFrame :: new (CallContext :: new ("LineEdit" , "set_virtual_keyboard_type") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_virtual_keyboard_type (& self ,) -> crate :: classes :: line_edit :: VirtualKeyboardType { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_virtual_keyboard_type ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_virtual_keyboard_type") , args) . out_ptrcall :: < crate :: classes :: line_edit :: VirtualKeyboardType > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn clear (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__clear ; CallFrame :: new (CallContext :: new ("LineEdit" , "clear") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn select_all (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__select_all ; CallFrame :: new (CallContext :: new ("LineEdit" , "select_all") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn deselect (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__deselect ; CallFrame :: new (CallContext :: new ("LineEdit" , "deselect") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn select_full (& mut self , from : i32 , to : i32 ,) { let args = (from . into_ffi () , to . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__select ; CallFrame :: new (CallContext :: new ("LineEdit" , "select") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn select (& mut self ,) { self . select_ex () . done () } # [inline] pub fn select_ex < 'a > (& 'a mut self ,) -> ExSelect < 'a > { ExSelect :: new (self ,) } pub fn has_selection (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__has_selection ; CallFrame :: new (CallContext :: new ("LineEdit" , "has_selection") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_selected_text (& mut self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . line_edit__get_selected_text ; CallFrame :: new (CallContext :: new ("LineEdit" , "get_selected_text") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn insert_text_at_caret (& mut self , text : impl AsArg < GString > ,) { let args = (text . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . line_edit__insert_text_at_caret ; CallFrame :: new (CallContext :: new ("LineEdit" , "insert_text_at_caret") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `text`, read through [`get_text()`][Self::get_text]."] pub fn text (& self) -> String { self . get_text () . to_string () } # [doc = "Value of property `placeholder_text`, read through [`get_placeholder()`][Self::get_placeholder]."] pub fn placeholder_text (& self) -> String { self . get_placeholder () . to_string () } # [doc = "Value of property `alignment`, read through [`get_horizontal_alignment()`][Self::get_horizontal_alignment]."] pub fn alignment (& self) -> crate :: global :: HorizontalAlignment { self . get_horizontal_alignment () } # [doc = "Value of property `max_length`, read through [`get_max_length()`][Self::get_max_length]."] pub fn max_length (& self) -> i32 { self . get_max_length () } # [doc = "Value of property `editable`, read through [`is_editable()`][Self::is_editable]."] pub fn editable (& self) -> bool { self . is_editable () } # [doc = "Value of property `secret`, read through [`is_secret()`][Self::is_secret]."] pub fn secret (& self) -> bool { self . is_secret () } # [doc = "Value of property `secret_character`, read through [`get_secret_character()`][Self::get_secret_character]."] pub fn secret_character (& self) -> String { self . get_secret_character () . to_string () } # [doc = "Value of property `caret_column`, read through [`get_caret_column()`][Self::get_caret_column]."] pub fn caret_column (& self) -> i32 { self . get_caret_column () } # [doc = "Value of property `virtual_keyboard_type`, read through [`get_virtual_keyboard_type()`][Self::get_virtual_keyboard_type]."] pub fn virtual_keyboard_type (& self) -> crate :: classes :: line_edit :: VirtualKeyboardType { self . get_virtual_keyboard_type () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for LineEdit { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { ClassName :: new_static ("LineEdit") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for LineEdit { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for LineEdit { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for LineEdit { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for LineEdit { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for LineEdit { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for LineEdit { } impl crate :: obj :: cap :: GodotDefault for LineEdit { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for LineEdit { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for LineEdit { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`LineEdit::select`][super::LineEdit::select]."] # [must_use] pub struct ExSelect < 'a > { surround_object : & 'a mut re_export :: LineEdit , from : i32 , to : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExSelect < 'a > { fn new (surround_object : & 'a mut re_export :: LineEdit ,) -> Self { Self { surround_object , from : 0 , to : - 1 , } } # [inline] pub fn from (self , value : i32) -> Self { Self { from : value , .. self } } # [inline] pub fn to (self , value : i32) -> Self { Self { to : value , .. self } } # [inline] pub fn done (self) { re_export :: LineEdit :: select_full (self . surround_object , self . from , self . to ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`LineEdit`][crate::classes::LineEdit]."] pub struct VirtualKeyboardType { ord : i32 } impl VirtualKeyboardType { # [doc (alias = "KEYBOARD_TYPE_DEFAULT")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_DEFAULT`"] pub const DEFAULT : VirtualKeyboardType = VirtualKeyboardType { ord : 0i32 } ; # [doc (alias = "KEYBOARD_TYPE_MULTILINE")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_MULTILINE`"] pub const MULTILINE : VirtualKeyboardType = VirtualKeyboardType { ord : 1i32 } ; # [doc (alias = "KEYBOARD_TYPE_NUMBER")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_NUMBER`"] pub const NUMBER : VirtualKeyboardType = VirtualKeyboardType { ord : 2i32 } ; # [doc (alias = "KEYBOARD_TYPE_NUMBER_DECIMAL")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_NUMBER_DECIMAL`"] pub const NUMBER_DECIMAL : VirtualKeyboardType = VirtualKeyboardType { ord : 3i32 } ; # [doc (alias = "KEYBOARD_TYPE_PHONE")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_PHONE`"] pub const PHONE : VirtualKeyboardType = VirtualKeyboardType { ord : 4i32 } ; # [doc (alias = "KEYBOARD_TYPE_EMAIL_ADDRESS")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_EMAIL_ADDRESS`"] pub const EMAIL_ADDRESS : VirtualKeyboardType = VirtualKeyboardType { ord : 5i32 } ; # [doc (alias = "KEYBOARD_TYPE_PASSWORD")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_PASSWORD`"] pub const PASSWORD : VirtualKeyboardType = VirtualKeyboardType { ord : 6i32 } ; # [doc (alias = "KEYBOARD_TYPE_URL")] # [doc = "Godot enumerator name: `KEYBOARD_TYPE_URL`"] pub const URL : VirtualKeyboardType = VirtualKeyboardType { ord : 7i32 } ; } impl std :: fmt :: Debug for VirtualKeyboardType { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "DEFAULT" , 1 => "MULTILINE" , 2 => "NUMBER" , 3 => "NUMBER_DECIMAL" , 4 => "PHONE" , 5 => "EMAIL_ADDRESS" , 6 => "PASSWORD" , 7 => "URL" , _ => { return f . debug_struct ("VirtualKeyboardType") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for VirtualKeyboardType { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 5i32 | ord @ 6i32 | ord @ 7i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "DEFAULT" , 1 => "MULTILINE" , 2 => "NUMBER" , 3 => "NUMBER_DECIMAL" , 4 => "PHONE" , 5 => "EMAIL_ADDRESS" , 6 => "PASSWORD" , 7 => "URL" , _ => "" , } } fn values () -> & 'static [Self] { & [VirtualKeyboardType :: DEFAULT , VirtualKeyboardType :: MULTILINE , VirtualKeyboardType :: NUMBER , VirtualKeyboardType :: NUMBER_DECIMAL , VirtualKeyboardType :: PHONE , VirtualKeyboardType :: EMAIL_ADDRESS , VirtualKeyboardType :: PASSWORD , VirtualKeyboardType :: URL ,] } } impl crate :: meta :: GodotType for VirtualKeyboardType { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }