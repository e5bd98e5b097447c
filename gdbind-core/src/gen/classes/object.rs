# ! [doc = "Sidecar module for class [`Object`][crate::classes::Object]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Object`.\n\nRelated symbols live in the [`object`][crate::classes::object] module."] # [repr (C)] # [derive (Debug)] pub struct Object { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Object { pub fn get_class (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . object__get_class ; CallFrame :: new (CallContext :: new ("Object" , "get_class") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_class (& self , class : impl AsArg < GString > ,) -> bool { let args = (class . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . object__is_class ; CallFrame :: new (CallContext :: new ("Object" , "is_class") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_instance_id (& self ,) -> u64 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . object__get_instance_id ; CallFrame :: new (CallContext :: new ("Object" , "get_instance_id") , args) . out_ptrcall :: < u64 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn has_method (& self , method : impl AsArg < StringName > ,) -> bool { let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . object__has_method ; CallFrame :: new (CallContext :: new ("Object" , "has_method") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn notification_full (& mut self , what : i32 , reversed : bool ,) { let args = (what . into_ffi () , reversed . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . object__notification ; CallFrame :: new (CallContext :: new ("Object" , "notification") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn notification (& mut self , what : i32 ,) { self . notification_ex (what ,) . done () } # [inline] pub fn notification_ex < 'a > (& 'a mut self , what : i32 ,) -> ExNotification < 'a > { ExNotification :: new (self , what ,) } pub fn is_queued_for_deletion (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . object__is_queued_for_deletion ; CallFrame :: new (CallContext :: new ("Object" , "is_queued_for_deletion") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Object { type Base = crate :: obj :: NoBase ; fn class_name () -> ClassName { ClassName :: new_static ("Object") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Object { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemDynamic ; } impl crate :: obj :: EngineClass for Object { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } impl crate :: obj :: cap :: GodotDefault for Object { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } } # [doc = "Default-param extender for [`Object::notification`][super::Object::notification]."] # [must_use] pub struct ExNotification < 'a > { surround_object : & 'a mut re_export :: Object , what : i32 , reversed : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExNotification < 'a > { fn new (surround_object : & 'a mut re_export :: Object , what : i32 ,) -> Self { Self { surround_object , what , reversed : false , } } # [inline] pub fn reversed (self , value : bool) -> Self { Self { reversed : value , .. self } } # [inline] pub fn done (self) { re_export :: Object :: notification_full (self . surround_object , self . what , self . reversed ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default)] # [doc = "Declared by class [`Object`][crate::classes::Object]."] pub struct ConnectFlags { ord : u64 } impl ConnectFlags { # [doc (alias = "CONNECT_DEFERRED")] # [doc = "Godot enumerator name: `CONNECT_DEFERRED`"] pub const DEFERRED : ConnectFlags = ConnectFlags { ord : 0x0000000000000001 } ; # [doc (alias = "CONNECT_PERSIST")] # [doc = "Godot enumerator name: `CONNECT_PERSIST`"] pub const PERSIST : ConnectFlags = ConnectFlags { ord : 0x0000000000000002 } ; # [doc (alias = "CONNECT_ONE_SHOT")] # [doc = "Godot enumerator name: `CONNECT_ONE_SHOT`"] pub const ONE_SHOT : ConnectFlags = ConnectFlags { ord : 0x0000000000000004 } ; # [doc (alias = "CONNECT_REFERENCE_COUNTED")] # [doc = "Godot enumerator name: `CONNECT_REFERENCE_COUNTED`"] pub const REFERENCE_COUNTED : ConnectFlags = ConnectFlags { ord : 0x0000000000000008 } ; } impl std :: fmt :: Debug for ConnectFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 1 => "DEFERRED" , 2 => "PERSIST" , 4 => "ONE_SHOT" , 8 => "REFERENCE_COUNTED" , _ => { return f . debug_struct ("ConnectFlags") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineBitfield for ConnectFlags { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl crate :: meta :: GodotType for ConnectFlags { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : ffi as u64 }) } } impl std :: ops :: BitOr for ConnectFlags { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } pub const NOTIFICATION_POSTINITIALIZE : i32 = 0i32 ; pub const NOTIFICATION_PREDELETE : i32 = 1i32 ;