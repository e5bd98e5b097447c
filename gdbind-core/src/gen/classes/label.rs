# ! [doc = "Sidecar module for class [`Label`][crate::classes::Label]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Label`.\n\nInherits [`Control`][crate::classes::Control]."] # [repr (C)] # [derive (Debug)] pub struct Label { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Label { pub fn set_text (& mut self , text : impl AsArg < GString > ,) { let args = (text . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_text ; CallFrame :: new (CallContext :: new ("Label" , "set_text") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_text (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_text ; CallFrame :: new (CallContext :: new ("Label" , "get_text") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_horizontal_alignment (& mut self , horizontal_alignment : crate :: global :: HorizontalAlignment ,) { let args = (horizontal_alignment . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_horizontal_alignment ; CallFrame :: new (CallContext :: new ("Label" , "set_horizontal_alignment") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_horizontal_alignment (& self ,) -> crate :: global :: HorizontalAlignment { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_horizontal_alignment ; CallFrame :: new (CallContext :: new ("Label" , "get_horizontal_alignment") , args) . out_ptrcall :: < crate :: global :: HorizontalAlignment > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_vertical_alignment (& mut self , vertical_alignment : crate :: global :: VerticalAlignment ,) { let args = (vertical_alignment . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_vertical_alignment ; CallFrame :: new (CallContext :: new ("Label" , "set_vertical_alignment") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_vertical_alignment (& self ,) -> crate :: global :: VerticalAlignment { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_vertical_alignment ; CallFrame :: new (CallContext :: new ("Label" , "get_vertical_alignment") , args) . out_ptrcall :: < crate :: global :: VerticalAlignment > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_uppercase (& mut self , uppercase : bool ,) { let args = (uppercase . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_uppercase ; CallFrame :: new (CallContext :: new ("Label" , "set_uppercase") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_uppercase (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__is_uppercase ; CallFrame :: new (CallContext :: new ("Label" , "is_uppercase") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_visible_characters (& mut self , visible_characters : i32 ,) { let args = (visible_characters . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_visible_characters ; CallFrame :: new (CallContext :: new ("Label" , "set_visible_characters") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_visible_characters (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_visible_characters ; CallFrame :: new (CallContext :: new ("Label" , "get_visible_characters") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_visible_ratio (& mut self , visible_ratio : f32 ,) { let args = (visible_ratio . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_visible_ratio ; CallFrame :: new (CallContext :: new ("Label" , "set_visible_ratio") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_visible_ratio (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_visible_ratio ; CallFrame :: new (CallContext :: new ("Label" , "get_visible_ratio") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_max_lines_visible (& mut self , max_lines_visible : i32 ,) { let args = (max_lines_visible . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_max_lines_visible ; CallFrame :: new (CallContext :: new ("Label" , "set_max_lines_visible") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_max_lines_visible (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_max_lines_visible ; CallFrame :: new (CallContext :: new ("Label" , "get_max_lines_visible") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_clip_text (& mut self , clip_text : bool ,) { let args = (clip_text . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . label__set_clip_text ; CallFrame :: new (CallContext :: new ("Label" , "set_clip_text") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_clipping_text (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__is_clipping_text ; CallFrame :: new (CallContext :: new ("Label" , "is_clipping_text") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_line_count (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_line_count ; CallFrame :: new (CallContext :: new ("Label" , "get_line_count") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_total_character_count (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . label__get_total_character_count ; CallFrame :: new (CallContext :: new ("Label" , "get_total_character_count") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `text`, read through [`get_text()`][Self::get_text]."] pub fn text (& self) -> String { self . get_text () . to_string () } # [doc = "Value of property `horizontal_alignment`, read through [`get_horizontal_alignment()`][Self::get_horizontal_alignment]."] pub fn horizontal_alignment (& self) -> crate :: global :: HorizontalAlignment { self . get_horizontal_alignment () } # [doc = "Value of property `vertical_alignment`, read through [`get_vertical_alignment()`][Self::get_vertical_alignment]."] pub fn vertical_alignment (& self) -> crate :: global :: VerticalAlignment { self . get_vertical_alignment () } # [doc = "Value of property `uppercase`, read through [`is_uppercase()`][Self::is_uppercase]."] pub fn uppercase (& self) -> bool { self . is_uppercase () } # [doc = "Value of property `visible_characters`, read through [`get_visible_characters()`][Self::get_visible_characters]."] pub fn visible_characters (& self) -> i32 { self . get_visible_characters () } # [doc = "Value of property `visible_ratio`, read through [`get_visible_ratio()`][Self::get_visible_ratio]."] pub fn visible_ratio (& self) -> f32 { self . get_visible_ratio () } # [doc = "Value of property `max_lines_visible`, read through [`get_max_lines_visible()`][Self::get_max_lines_visible]."] pub fn max_lines_visible (& self) -> i32 { self . get_max_lines_visible () } # [doc = "Value of property `clip_text`, read through [`is_clipping_text()`][Self::is_clipping_text]."] pub fn clip_text (& self) -> bool { self . is_clipping_text () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Label { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { ClassName :: new_static ("Label") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Label { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for Label { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for Label { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Label { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Label { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Label { } impl crate :: obj :: cap :: GodotDefault for Label { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Label { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Label { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }