# ! [doc = "Sidecar module for class [`ColorRect`][crate::classes::ColorRect]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `ColorRect`.\n\nInherits [`Control`][crate::classes::Control]."] # [repr (C)] # [derive (Debug)] pub struct ColorRect { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl ColorRect { pub fn set_color (& mut self , color : Color ,) { let args = (color . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . color_rect__set_color ; CallFrame :: new (CallContext :: new ("ColorRect" , "set_color") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_color (& self ,) -> Color { let args = () ; unsafe { let method_bind = sys :: class_method_table () . color_rect__get_color ; CallFrame :: new (CallContext :: new ("ColorRect" , "get_color") , args) . out_ptrcall :: < Color > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `color`, read through [`get_color()`][Self::get_color]."] pub fn color (& self) -> Color { self . get_color () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for ColorRect { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { ClassName :: new_static ("ColorRect") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for ColorRect { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for ColorRect { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for ColorRect { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for ColorRect { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for ColorRect { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for ColorRect { } impl crate :: obj :: cap :: GodotDefault for ColorRect { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for ColorRect { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for ColorRect { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }