# ! [doc = "Sidecar module for class [`Button`][crate::classes::Button]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Button`.\n\nInherits [`BaseButton`][crate::classes::BaseButton]."] # [repr (C)] # [derive (Debug)] pub struct Button { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Button { pub fn set_text (& mut self , text : impl AsArg < GString > ,) { let args = (text . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . button__set_text ; CallFrame :: new (CallContext :: new ("Button" , "set_text") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_text (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button__get_text ; CallFrame :: new (CallContext :: new ("Button" , "get_text") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_flat (& mut self , flat : bool ,) { let args = (flat . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . button__set_flat ; CallFrame :: new (CallContext :: new ("Button" , "set_flat") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_flat (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button__is_flat ; CallFrame :: new (CallContext :: new ("Button" , "is_flat") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_clip_text (& mut self , clip_text : bool ,) { let args = (clip_text . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . button__set_clip_text ; CallFrame :: new (CallContext :: new ("Button" , "set_clip_text") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_clip_text (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button__get_clip_text ; CallFrame :: new (CallContext :: new ("Button" , "get_clip_text") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_button_icon (& mut self , icon : impl AsObjectArg < crate :: classes :: Texture2D > ,) { let args = (icon . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . button__set_button_icon ; CallFrame :: new (CallContext :: new ("Button" , "set_button_icon") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_button_icon (& self ,) -> Option < Gd < crate :: classes :: Texture2D > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button__get_button_icon ; CallFrame :: new (CallContext :: new ("Button" , "get_button_icon") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Texture2D > > > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_text_alignment (& mut self , alignment : crate :: global :: HorizontalAlignment ,) { let args = (alignment . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . button__set_text_alignment ; CallFrame :: new (CallContext :: new ("Button" , "set_text_alignment") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_text_alignment (& self ,) -> crate :: global :: HorizontalAlignment { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button__get_text_alignment ; CallFrame :: new (CallContext :: new ("Button" , "get_text_alignment") , args) . out_ptrcall :: < crate :: global :: HorizontalAlignment > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_expand_icon (& mut self , expand_icon : bool ,) { let args = (expand_icon . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . button__set_expand_icon ; CallFrame :: new (CallContext :: new ("Button" , "set_expand_icon") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_expand_icon (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button__is_expand_icon ; CallFrame :: new (CallContext :: new ("Button" , "is_expand_icon") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `text`, read through [`get_text()`][Self::get_text]."] pub fn text (& self) -> String { self . get_text () . to_string () } # [doc = "Value of property `flat`, read through [`is_flat()`][Self::is_flat]."] pub fn flat (& self) -> bool { self . is_flat () } # [doc = "Value of property `clip_text`, read through [`get_clip_text()`][Self::get_clip_text]."] pub fn clip_text (& self) -> bool { self . get_clip_text () } # [doc = "Value of property `icon`, read through [`get_button_icon()`][Self::get_button_icon]."] pub fn icon (& self) -> Option < Gd < crate :: classes :: Texture2D > > { self . get_button_icon () } # [doc = "Value of property `alignment`, read through [`get_text_alignment()`][Self::get_text_alignment]."] pub fn alignment (& self) -> crate :: global :: HorizontalAlignment { self . get_text_alignment () } # [doc = "Value of property `expand_icon`, read through [`is_expand_icon()`][Self::is_expand_icon]."] pub fn expand_icon (& self) -> bool { self . is_expand_icon () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Button { type Base = crate :: classes :: BaseButton ; fn class_name () -> ClassName { ClassName :: new_static ("Button") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Button { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for Button { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: BaseButton > for Button { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for Button { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Button { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Button { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Button { } impl crate :: obj :: cap :: GodotDefault for Button { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Button { type Target = crate :: classes :: BaseButton ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Button { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }