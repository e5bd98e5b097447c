# ! [doc = "Sidecar module for class [`Range`][crate::classes::Range]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Range`.\n\nInherits [`Control`][crate::classes::Control]."] # [repr (C)] # [derive (Debug)] pub struct Range { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Range { pub fn set_min (& mut self , min_value : f64 ,) { let args = (min_value . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_min ; CallFrame :: new (CallContext :: new ("Range" , "set_min") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_min (& self ,) -> f64 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__get_min ; CallFrame :: new (CallContext :: new ("Range" , "get_min") , args) . out_ptrcall :: < f64 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_max (& mut self , max_value : f64 ,) { let args = (max_value . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_max ; CallFrame :: new (CallContext :: new ("Range" , "set_max") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_max (& self ,) -> f64 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__get_max ; CallFrame :: new (CallContext :: new ("Range" , "get_max") , args) . out_ptrcall :: < f64 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_step (& mut self , step : f64 ,) { let args = (step . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_step ; CallFrame :: new (CallContext :: new ("Range" , "set_step") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_step (& self ,) -> f64 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__get_step ; CallFrame :: new (CallContext :: new ("Range" , "get_step") , args) . out_ptrcall :: < f64 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_page (& mut self , page : f64 ,) { let args = (page . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_page ; CallFrame :: new (CallContext :: new ("Range" , "set_page") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_page (& self ,) -> f64 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__get_page ; CallFrame :: new (CallContext :: new ("Range" , "get_page") , args) . out_ptrcall :: < f64 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_value (& mut self , value : f64 ,) { let args = (value . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_value ; CallFrame :: new (CallContext :: new ("Range" , "set_value") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_value (& self ,) -> f64 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__get_value ; CallFrame :: new (CallContext :: new ("Range" , "get_value") , args) . out_ptrcall :: < f64 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_as_ratio (& mut self , ratio : f64 ,) { let args = (ratio . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_as_ratio ; CallFrame :: new (CallContext :: new ("Range" , "set_as_ratio") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_as_ratio (& self ,) -> f64 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__get_as_ratio ; CallFrame :: new (CallContext :: new ("Range" , "get_as_ratio") , args) . out_ptrcall :: < f64 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_use_rounded_values (& mut self , rounded : bool ,) { let args = (rounded . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_use_rounded_values ; CallFrame :: new (CallContext :: new ("Range" , "set_use_rounded_values") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_using_rounded_values (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__is_using_rounded_values ; CallFrame :: new (CallContext :: new ("Range" , "is_using_rounded_values") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_allow_greater (& mut self , allow_greater : bool ,) { let args = (allow_greater . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_allow_greater ; CallFrame :: new (CallContext :: new ("Range" , "set_allow_greater") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_greater_allowed (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__is_greater_allowed ; CallFrame :: new (CallContext :: new ("Range" , "is_greater_allowed") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_allow_lesser (& mut self , allow_lesser : bool ,) { let args = (allow_lesser . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_allow_lesser ; CallFrame :: new (CallContext :: new ("Range" , "set_allow_lesser") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_lesser_allowed (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . range__is_lesser_allowed ; CallFrame :: new (CallContext :: new ("Range" , "is_lesser_allowed") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_value_no_signal (& mut self , value : f64 ,) { let args = (value . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . range__set_value_no_signal ; CallFrame :: new (CallContext :: new ("Range" , "set_value_no_signal") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `min_value`, read through [`get_min()`][Self::get_min]."] pub fn min_value (& self) -> f64 { self . get_min () } # [doc = "Value of property `max_value`, read through [`get_max()`][Self::get_max]."] pub fn max_value (& self) -> f64 { self . get_max () } # [doc = "Value of property `step`, read through [`get_step()`][Self::get_step]."] pub fn step (& self) -> f64 { self . get_step () } # [doc = "Value of property `page`, read through [`get_page()`][Self::get_page]."] pub fn page (& self) -> f64 { self . get_page () } # [doc = "Value of property `value`, read through [`get_value()`][Self::get_value]."] pub fn value (& self) -> f64 { self . get_value () } # [doc = "Value of property `ratio`, read through [`get_as_ratio()`][Self::get_as_ratio]."] pub fn ratio (& self) -> f64 { self . get_as_ratio () } # [doc = "Value of property `rounded`, read through [`is_using_rounded_values()`][Self::is_using_rounded_values]."] pub fn rounded (& self) -> bool { self . is_using_rounded_values () } # [doc = "Value of property `allow_greater`, read through [`is_greater_allowed()`][Self::is_greater_allowed]."] pub fn allow_greater (& self) -> bool { self . is_greater_allowed () } # [doc = "Value of property `allow_lesser`, read through [`is_lesser_allowed()`][Self::is_lesser_allowed]."] pub fn allow_lesser (& self) -> bool { self . is_lesser_allowed () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Range { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { ClassName :: new_static ("Range") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Range { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for Range { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for Range { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Range { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Range { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Range { } impl crate :: obj :: cap :: GodotDefault for Range { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Range { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Range { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } }