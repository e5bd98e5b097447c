# ! [doc = "Sidecar module for class [`Node`][crate::classes::Node]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Node`.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols live in the [`node`][crate::classes::node] module."] # [repr (C)] # [derive (Debug)] pub struct Node { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Node { pub fn set_name (& mut self , name : impl AsArg < StringName > ,) { let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . node__set_name ; CallFrame :: new (CallContext :: new ("Node" , "set_name") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_name (& self ,) -> StringName { let args = () ; unsafe { let method_bind = sys :: class_method_table () . node__get_name ; CallFrame :: new (CallContext :: new ("Node" , "get_name") , args) . out_ptrcall :: < StringName > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_process_mode (& mut self , process_mode : crate :: classes :: node :: ProcessMode ,) { let args = (process_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . node__set_process_mode ; CallFrame :: new (CallContext :: new ("Node" , "set_process_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_process_mode (& self ,) -> crate :: classes :: node :: ProcessMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . node__get_process_mode ; CallFrame :: new (CallContext :: new ("Node" , "get_process_mode") , args) . out_ptrcall :: < crate :: classes :: node :: ProcessMode > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn add_child_full (& mut self , node : ObjectArg < '_ , crate :: classes :: Node > , force_readable_name : bool , internal : crate :: classes :: node :: InternalMode ,) { let args = (node , force_readable_name . into_ffi () , internal . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . node__add_child ; CallFrame :: new (CallContext :: new ("Node" , "add_child") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn add_child (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { self . add_child_ex (node ,) . done () } # [inline] pub fn add_child_ex < 'a > (& 'a mut self , node : impl AsObjectArg < crate :: classes :: Node > + 'a ,) -> ExAddChild < 'a > { ExAddChild :: new (self , node . into_object_arg () ,) } pub fn remove_child (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { let args = (node . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . node__remove_child ; CallFrame :: new (CallContext :: new ("Node" , "remove_child") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn get_child_count_full (& self , include_internal : bool ,) -> i32 { let args = (include_internal . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . node__get_child_count ; CallFrame :: new (CallContext :: new ("Node" , "get_child_count") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn get_child_count (& self ,) -> i32 { self . get_child_count_ex () . done () } # [inline] pub fn get_child_count_ex < 'a > (& 'a self ,) -> ExGetChildCount < 'a > { ExGetChildCount :: new (self ,) } pub (crate) fn get_child_full (& self , idx : i32 , include_internal : bool ,) -> Option < Gd < crate :: classes :: Node > > { let args = (idx . into_ffi () , include_internal . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . node__get_child ; CallFrame :: new (CallContext :: new ("Node" , "get_child") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Node > > > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn get_child (& self , idx : i32 ,) -> Option < Gd < crate :: classes :: Node > > { self . get_child_ex (idx ,) . done () } # [inline] pub fn get_child_ex < 'a > (& 'a self , idx : i32 ,) -> ExGetChild < 'a > { ExGetChild :: new (self , idx ,) } pub fn get_parent (& self ,) -> Option < Gd < crate :: classes :: Node > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . node__get_parent ; CallFrame :: new (CallContext :: new ("Node" , "get_parent") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Node > > > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn get_index_full (& self , include_internal : bool ,) -> i32 { let args = (include_internal . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . node__get_index ; CallFrame :: new (CallContext :: new ("Node" , "get_index") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn get_index (& self ,) -> i32 { self . get_index_ex () . done () } # [inline] pub fn get_index_ex < 'a > (& 'a self ,) -> ExGetIndex < 'a > { ExGetIndex :: new (self ,) } pub fn is_inside_tree (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . node__is_inside_tree ; CallFrame :: new (CallContext :: new ("Node" , "is_inside_tree") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `name`, read through [`get_name()`][Self::get_name]."] pub fn name (& self) -> String { self . get_name () . to_string () } # [doc = "Value of property `process_mode`, read through [`get_process_mode()`][Self::get_process_mode]."] pub fn process_mode (& self) -> crate :: classes :: node :: ProcessMode { self . get_process_mode () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Node { type Base = crate :: classes :: Object ; fn class_name () -> ClassName { ClassName :: new_static ("Node") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Node { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for Node { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Node { } impl crate :: obj :: cap :: GodotDefault for Node { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Node { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Node::add_child`][super::Node::add_child]."] # [must_use] pub struct ExAddChild < 'a > { surround_object : & 'a mut re_export :: Node , node : ObjectArg < 'a , crate :: classes :: Node > , force_readable_name : bool , internal : crate :: classes :: node :: InternalMode , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExAddChild < 'a > { fn new (surround_object : & 'a mut re_export :: Node , node : ObjectArg < 'a , crate :: classes :: Node > ,) -> Self { Self { surround_object , node , force_readable_name : false , internal : crate :: classes :: node :: InternalMode :: from_ord (0) , } } # [inline] pub fn force_readable_name (self , value : bool) -> Self { Self { force_readable_name : value , .. self } } # [inline] pub fn internal (self , value : crate :: classes :: node :: InternalMode) -> Self { Self { internal : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: add_child_full (self . surround_object , self . node , self . force_readable_name , self . internal ,) } } # [doc = "Default-param extender for [`Node::get_child_count`][super::Node::get_child_count]."] # [must_use] pub struct ExGetChildCount < 'a > { surround_object : & 'a re_export :: Node , include_internal : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExGetChildCount < 'a > { fn new (surround_object : & 'a re_export :: Node ,) -> Self { Self { surround_object , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Node :: get_child_count_full (self . surround_object , self . include_internal ,) } } # [doc = "Default-param extender for [`Node::get_child`][super::Node::get_child]."] # [must_use] pub struct ExGetChild < 'a > { surround_object : & 'a re_export :: Node , idx : i32 , include_internal : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExGetChild < 'a > { fn new (surround_object : & 'a re_export :: Node , idx : i32 ,) -> Self { Self { surround_object , idx , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Node > > { re_export :: Node :: get_child_full (self . surround_object , self . idx , self . include_internal ,) } } # [doc = "Default-param extender for [`Node::get_index`][super::Node::get_index]."] # [must_use] pub struct ExGetIndex < 'a > { surround_object : & 'a re_export :: Node , include_internal : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExGetIndex < 'a > { fn new (surround_object : & 'a re_export :: Node ,) -> Self { Self { surround_object , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Node :: get_index_full (self . surround_object , self . include_internal ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`Node`][crate::classes::Node]."] pub struct ProcessMode { ord : i32 } impl ProcessMode { # [doc (alias = "PROCESS_MODE_INHERIT")] # [doc = "Godot enumerator name: `PROCESS_MODE_INHERIT`"] pub const INHERIT : ProcessMode = ProcessMode { ord : 0i32 } ; # [doc (alias = "PROCESS_MODE_PAUSABLE")] # [doc = "Godot enumerator name: `PROCESS_MODE_PAUSABLE`"] pub const PAUSABLE : ProcessMode = ProcessMode { ord : 1i32 } ; # [doc (alias = "PROCESS_MODE_WHEN_PAUSED")] # [doc = "Godot enumerator name: `PROCESS_MODE_WHEN_PAUSED`"] pub const WHEN_PAUSED : ProcessMode = ProcessMode { ord : 2i32 } ; # [doc (alias = "PROCESS_MODE_ALWAYS")] # [doc = "Godot enumerator name: `PROCESS_MODE_ALWAYS`"] pub const ALWAYS : ProcessMode = ProcessMode { ord : 3i32 } ; # [doc (alias = "PROCESS_MODE_DISABLED")] # [doc = "Godot enumerator name: `PROCESS_MODE_DISABLED`"] pub const DISABLED : ProcessMode = ProcessMode { ord : 4i32 } ; } impl std :: fmt :: Debug for ProcessMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "INHERIT" , 1 => "PAUSABLE" , 2 => "WHEN_PAUSED" , 3 => "ALWAYS" , 4 => "DISABLED" , _ => { return f . debug_struct ("ProcessMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for ProcessMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "INHERIT" , 1 => "PAUSABLE" , 2 => "WHEN_PAUSED" , 3 => "ALWAYS" , 4 => "DISABLED" , _ => "" , } } fn values () -> & 'static [Self] { & [ProcessMode :: INHERIT , ProcessMode :: PAUSABLE , ProcessMode :: WHEN_PAUSED , ProcessMode :: ALWAYS , ProcessMode :: DISABLED ,] } } impl crate :: meta :: GodotType for ProcessMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`Node`][crate::classes::Node]."] pub struct InternalMode { ord : i32 } impl InternalMode { # [doc (alias = "INTERNAL_MODE_DISABLED")] # [doc = "Godot enumerator name: `INTERNAL_MODE_DISABLED`"] pub const DISABLED : InternalMode = InternalMode { ord : 0i32 } ; # [doc (alias = "INTERNAL_MODE_FRONT")] # [doc = "Godot enumerator name: `INTERNAL_MODE_FRONT`"] pub const FRONT : InternalMode = InternalMode { ord : 1i32 } ; # [doc (alias = "INTERNAL_MODE_BACK")] # [doc = "Godot enumerator name: `INTERNAL_MODE_BACK`"] pub const BACK : InternalMode = InternalMode { ord : 2i32 } ; } impl std :: fmt :: Debug for InternalMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "DISABLED" , 1 => "FRONT" , 2 => "BACK" , _ => { return f . debug_struct ("InternalMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for InternalMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "DISABLED" , 1 => "FRONT" , 2 => "BACK" , _ => "" , } } fn values () -> & 'static [Self] { & [InternalMode :: DISABLED , InternalMode :: FRONT , InternalMode :: BACK ,] } } impl crate :: meta :: GodotType for InternalMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } pub const NOTIFICATION_ENTER_TREE : i32 = 10i32 ; pub const NOTIFICATION_EXIT_TREE : i32 = 11i32 ; pub const NOTIFICATION_READY : i32 = 13i32 ;