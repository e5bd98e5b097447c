# ! [doc = "Sidecar module for class [`ButtonGroup`][crate::classes::ButtonGroup]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `ButtonGroup`.\n\nInherits [`Resource`][crate::classes::Resource]."] # [repr (C)] # [derive (Debug)] pub struct ButtonGroup { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl ButtonGroup { pub fn set_allow_unpress (& mut self , allow_unpress : bool ,) { let args = (allow_unpress . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . button_group__set_allow_unpress ; CallFrame :: new (CallContext :: new ("ButtonGroup" , "set_allow_unpress") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_allow_unpress (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button_group__is_allow_unpress ; CallFrame :: new (CallContext :: new ("ButtonGroup" , "is_allow_unpress") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_pressed_button (& mut self ,) -> Option < Gd < crate :: classes :: BaseButton > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . button_group__get_pressed_button ; CallFrame :: new (CallContext :: new ("ButtonGroup" , "get_pressed_button") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: BaseButton > > > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `allow_unpress`, read through [`is_allow_unpress()`][Self::is_allow_unpress]."] pub fn allow_unpress (& self) -> bool { self . is_allow_unpress () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for ButtonGroup { type Base = crate :: classes :: Resource ; fn class_name () -> ClassName { ClassName :: new_static ("ButtonGroup") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for ButtonGroup { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for ButtonGroup { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for ButtonGroup { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for ButtonGroup { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for ButtonGroup { } impl crate :: obj :: cap :: GodotDefault for ButtonGroup { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for ButtonGroup { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for ButtonGroup { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }