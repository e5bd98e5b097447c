# ! [doc = "Sidecar module for class [`TextureRect`][crate::classes::TextureRect]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `TextureRect`.\n\nInherits [`Control`][crate::classes::Control].\n\nRelated symbols live in the [`texture_rect`][crate::classes::texture_rect] module."] # [repr (C)] # [derive (Debug)] pub struct TextureRect { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl TextureRect { pub fn set_texture (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > ,) { let args = (texture . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__set_texture ; CallFrame :: new (CallContext :: new ("TextureRect" , "set_texture") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_texture (& self ,) -> Option < Gd < crate :: classes :: Texture2D > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__get_texture ; CallFrame :: new (CallContext :: new ("TextureRect" , "get_texture") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Texture2D > > > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_expand_mode (& mut self , expand_mode : crate :: classes :: texture_rect :: ExpandMode ,) { let args = (expand_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__set_expand_mode ; CallFrame :: new (CallContext :: new ("TextureRect" , "set_expand_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_expand_mode (& self ,) -> crate :: classes :: texture_rect :: ExpandMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__get_expand_mode ; CallFrame :: new (CallContext :: new ("TextureRect" , "get_expand_mode") , args) . out_ptrcall :: < crate :: classes :: texture_rect :: ExpandMode > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_stretch_mode (& mut self , stretch_mode : crate :: classes :: texture_rect :: StretchMode ,) { let args = (stretch_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__set_stretch_mode ; CallFrame :: new (CallContext :: new ("TextureRect" , "set_stretch_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_stretch_mode (& self ,) -> crate :: classes :: texture_rect :: StretchMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__get_stretch_mode ; CallFrame :: new (CallContext :: new ("TextureRect" , "get_stretch_mode") , args) . out_ptrcall :: < crate :: classes :: texture_rect :: StretchMode > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_flip_h (& mut self , flip_h : bool ,) { let args = (flip_h . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__set_flip_h ; CallFrame :: new (CallContext :: new ("TextureRect" , "set_flip_h") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_flipped_h (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__is_flipped_h ; CallFrame :: new (CallContext :: new ("TextureRect" , "is_flipped_h") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_flip_v (& mut self , flip_v : bool ,) { let args = (flip_v . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__set_flip_v ; CallFrame :: new (CallContext :: new ("TextureRect" , "set_flip_v") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_flipped_v (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . texture_rect__is_flipped_v ; CallFrame :: new (CallContext :: new ("TextureRect" , "is_flipped_v") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `texture`, read through [`get_texture()`][Self::get_texture]."] pub fn texture (& self) -> Option < Gd < crate :: classes :: Texture2D > > { self . get_texture () } # [doc = "Value of property `expand_mode`, read through [`get_expand_mode()`][Self::get_expand_mode]."] pub fn expand_mode (& self) -> crate :: classes :: texture_rect :: ExpandMode { self . get_expand_mode () } # [doc = "Value of property `stretch_mode`, read through [`get_stretch_mode()`][Self::get_stretch_mode]."] pub fn stretch_mode (& self) -> crate :: classes :: texture_rect :: StretchMode { self . get_stretch_mode () } # [doc = "Value of property `flip_h`, read through [`is_flipped_h()`][Self::is_flipped_h]."] pub fn flip_h (& self) -> bool { self . is_flipped_h () } # [doc = "Value of property `flip_v`, read through [`is_flipped_v()`][Self::is_flipped_v]."] pub fn flip_v (& self) -> bool { self . is_flipped_v () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for TextureRect { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { ClassName :: new_static ("TextureRect") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for TextureRect { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for TextureRect { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for TextureRect { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for TextureRect { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for TextureRect { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for TextureRect { } impl crate :: obj :: cap :: GodotDefault for TextureRect { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for TextureRect { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for TextureRect { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`TextureRect`][crate::classes::TextureRect]."] pub struct ExpandMode { ord : i32 } impl ExpandMode { # [doc (alias = "EXPAND_KEEP_SIZE")] # [doc = "Godot enumerator name: `EXPAND_KEEP_SIZE`"] pub const KEEP_SIZE : ExpandMode = ExpandMode { ord : 0i32 } ; # [doc (alias = "EXPAND_IGNORE_SIZE")] # [doc = "Godot enumerator name: `EXPAND_IGNORE_SIZE`"] pub const IGNORE_SIZE : ExpandMode = ExpandMode { ord : 1i32 } ; # [doc (alias = "EXPAND_FIT_WIDTH")] # [doc = "Godot enumerator name: `EXPAND_FIT_WIDTH`"] pub const FIT_WIDTH : ExpandMode = ExpandMode { ord : 2i32 } ; # [doc (alias = "EXPAND_FIT_WIDTH_PROPORTIONAL")] # [doc = "Godot enumerator name: `EXPAND_FIT_WIDTH_PROPORTIONAL`"] pub const FIT_WIDTH_PROPORTIONAL : ExpandMode = ExpandMode { ord : 3i32 } ; # [doc (alias = "EXPAND_FIT_HEIGHT")] # [doc = "Godot enumerator name: `EXPAND_FIT_HEIGHT`"] pub const FIT_HEIGHT : ExpandMode = ExpandMode { ord : 4i32 } ; # [doc (alias = "EXPAND_FIT_HEIGHT_PROPORTIONAL")] # [doc = "Godot enumerator name: `EXPAND_FIT_HEIGHT_PROPORTIONAL`"] pub const FIT_HEIGHT_PROPORTIONAL : ExpandMode = ExpandMode { ord : 5i32 } ; } impl std :: fmt :: Debug for ExpandMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "KEEP_SIZE" , 1 => "IGNORE_SIZE" , 2 => "FIT_WIDTH" , 3 => "FIT_WIDTH_PROPORTIONAL" , 4 => "FIT_HEIGHT" , 5 => "FIT_HEIGHT_PROPORTIONAL" , _ => { return f . debug_struct ("ExpandMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for ExpandMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 5i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "KEEP_SIZE" , 1 => "IGNORE_SIZE" , 2 => "FIT_WIDTH" , 3 => "FIT_WIDTH_PROPORTIONAL" , 4 => "FIT_HEIGHT" , 5 => "FIT_HEIGHT_PROPORTIONAL" , _ => "" , } } fn values () -> & 'static [Self] { & [ExpandMode :: KEEP_SIZE , ExpandMode :: IGNORE_SIZE , ExpandMode :: FIT_WIDTH , ExpandMode :: FIT_WIDTH_PROPORTIONAL , ExpandMode :: FIT_HEIGHT , ExpandMode :: FIT_HEIGHT_PROPORTIONAL ,] } } impl crate :: meta :: GodotType for ExpandMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`TextureRect`][crate::classes::TextureRect]."] pub struct StretchMode { ord : i32 } impl StretchMode { # [doc (alias = "STRETCH_SCALE")] # [doc = "Godot enumerator name: `STRETCH_SCALE`"] pub const SCALE : StretchMode = StretchMode { ord : 0i32 } ; # [doc (alias = "STRETCH_TILE")] # [doc = "Godot enumerator name: `STRETCH_TILE`"] pub const TILE : StretchMode = StretchMode { ord : 1i32 } ; # [doc (alias = "STRETCH_KEEP")] # [doc = "Godot enumerator name: `STRETCH_KEEP`"] pub const KEEP : StretchMode = StretchMode { ord : 2i32 } ; # [doc (alias = "STRETCH_KEEP_CENTERED")] # [doc = "Godot enumerator name: `STRETCH_KEEP_CENTERED`"] pub const KEEP_CENTERED : StretchMode = StretchMode { ord : 3i32 } ; # [doc (alias = "STRETCH_KEEP_ASPECT")] # [doc = "Godot enumerator name: `STRETCH_KEEP_ASPECT`"] pub const KEEP_ASPECT : StretchMode = StretchMode { ord : 4i32 } ; # [doc (alias = "STRETCH_KEEP_ASPECT_CENTERED")] # [doc = "Godot enumerator name: `STRETCH_KEEP_ASPECT_CENTERED`"] pub const KEEP_ASPECT_CENTERED : StretchMode = StretchMode { ord : 5i32 } ; # [doc (alias = "STRETCH_KEEP_ASPECT_COVERED")] # [doc = "Godot enumerator name: `STRETCH_KEEP_ASPECT_COVERED`"] pub const KEEP_ASPECT_COVERED : StretchMode = StretchMode { ord : 6i32 } ; } impl std :: fmt :: Debug for StretchMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "SCALE" , 1 => "TILE" , 2 => "KEEP" , 3 => "KEEP_CENTERED" , 4 => "KEEP_ASPECT" , 5 => "KEEP_ASPECT_CENTERED" , 6 => "KEEP_ASPECT_COVERED" , _ => { return f . debug_struct ("StretchMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for StretchMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 5i32 | ord @ 6i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "SCALE" , 1 => "TILE" , 2 => "KEEP" , 3 => "KEEP_CENTERED" , 4 => "KEEP_ASPECT" , 5 => "KEEP_ASPECT_CENTERED" , 6 => "KEEP_ASPECT_COVERED" , _ => "" , } } fn values () -> & 'static [Self] { & [StretchMode :: SCALE , StretchMode :: TILE , StretchMode :: KEEP , StretchMode :: KEEP_CENTERED , StretchMode :: KEEP_ASPECT , StretchMode :: KEEP_ASPECT_CENTERED , StretchMode :: KEEP_ASPECT_COVERED ,] } } impl crate :: meta :: GodotType for StretchMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }