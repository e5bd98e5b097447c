# ! [doc = "Sidecar module for class [`Control`][crate::classes::Control]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Control`.\n\nInherits [`CanvasItem`][crate::classes::CanvasItem].\n\nRelated symbols live in the [`control`][crate::classes::control] module."] # [repr (C)] # [derive (Debug)] pub struct Control { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl Control { pub (crate) fn set_position_full (& mut self , position : Vector2 , keep_offsets : bool ,) { let args = (position . into_ffi () , keep_offsets . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_position ; CallFrame :: new (CallContext :: new ("Control" , "set_position") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn set_position (& mut self , position : Vector2 ,) { self . set_position_ex (position ,) . done () } # [inline] pub fn set_position_ex < 'a > (& 'a mut self , position : Vector2 ,) -> ExSetPosition < 'a > { ExSetPosition :: new (self , position ,) } pub (crate) fn set_size_full (& mut self , size : Vector2 , keep_offsets : bool ,) { let args = (size . into_ffi () , keep_offsets . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_size ; CallFrame :: new (CallContext :: new ("Control" , "set_size") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn set_size (& mut self , size : Vector2 ,) { self . set_size_ex (size ,) . done () } # [inline] pub fn set_size_ex < 'a > (& 'a mut self , size : Vector2 ,) -> ExSetSize < 'a > { ExSetSize :: new (self , size ,) } pub fn get_position (& self ,) -> Vector2 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_position ; CallFrame :: new (CallContext :: new ("Control" , "get_position") , args) . out_ptrcall :: < Vector2 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_size (& self ,) -> Vector2 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_size ; CallFrame :: new (CallContext :: new ("Control" , "get_size") , args) . out_ptrcall :: < Vector2 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_custom_minimum_size (& mut self , custom_minimum_size : Vector2 ,) { let args = (custom_minimum_size . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_custom_minimum_size ; CallFrame :: new (CallContext :: new ("Control" , "set_custom_minimum_size") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_custom_minimum_size (& self ,) -> Vector2 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_custom_minimum_size ; CallFrame :: new (CallContext :: new ("Control" , "get_custom_minimum_size") , args) . out_ptrcall :: < Vector2 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_tooltip_text (& mut self , tooltip_text : impl AsArg < GString > ,) { let args = (tooltip_text . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_tooltip_text ; CallFrame :: new (CallContext :: new ("Control" , "set_tooltip_text") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_tooltip_text (& self ,) -> GString { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_tooltip_text ; CallFrame :: new (CallContext :: new ("Control" , "get_tooltip_text") , args) . out_ptrcall :: < GString > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_h_size_flags (& mut self , size_flags_horizontal : crate :: classes :: control :: SizeFlags ,) { let args = (size_flags_horizontal . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_h_size_flags ; CallFrame :: new (CallContext :: new ("Control" , "set_h_size_flags") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_h_size_flags (& self ,) -> crate :: classes :: control :: SizeFlags { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_h_size_flags ; CallFrame :: new (CallContext :: new ("Control" , "get_h_size_flags") , args) . out_ptrcall :: < crate :: classes :: control :: SizeFlags > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_v_size_flags (& mut self , size_flags_vertical : crate :: classes :: control :: SizeFlags ,) { let args = (size_flags_vertical . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_v_size_flags ; CallFrame :: new (CallContext :: new ("Control" , "set_v_size_flags") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_v_size_flags (& self ,) -> crate :: classes :: control :: SizeFlags { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_v_size_flags ; CallFrame :: new (CallContext :: new ("Control" , "get_v_size_flags") , args) . out_ptrcall :: < crate :: classes :: control :: SizeFlags > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_focus_mode (& mut self , focus_mode : crate :: classes :: control :: FocusMode ,) { let args = (focus_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_focus_mode ; CallFrame :: new (CallContext :: new ("Control" , "set_focus_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_focus_mode (& self ,) -> crate :: classes :: control :: FocusMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_focus_mode ; CallFrame :: new (CallContext :: new ("Control" , "get_focus_mode") , args) . out_ptrcall :: < crate :: classes :: control :: FocusMode > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_mouse_filter (& mut self , mouse_filter : crate :: classes :: control :: MouseFilter ,) { let args = (mouse_filter . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_mouse_filter ; CallFrame :: new (CallContext :: new ("Control" , "set_mouse_filter") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_mouse_filter (& self ,) -> crate :: classes :: control :: MouseFilter { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_mouse_filter ; CallFrame :: new (CallContext :: new ("Control" , "get_mouse_filter") , args) . out_ptrcall :: < crate :: classes :: control :: MouseFilter > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_offset (& mut self , side : crate :: global :: Side , offset : f32 ,) { let args = (side . into_ffi () , offset . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_offset ; CallFrame :: new (CallContext :: new ("Control" , "set_offset") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_offset (& self , offset : crate :: global :: Side ,) -> f32 { let args = (offset . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__get_offset ; CallFrame :: new (CallContext :: new ("Control" , "get_offset") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn set_anchor_full (& mut self , side : crate :: global :: Side , anchor : f32 , keep_offset : bool , push_opposite_anchor : bool ,) { let args = (side . into_ffi () , anchor . into_ffi () , keep_offset . into_ffi () , push_opposite_anchor . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_anchor ; CallFrame :: new (CallContext :: new ("Control" , "set_anchor") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn set_anchor (& mut self , side : crate :: global :: Side , anchor : f32 ,) { self . set_anchor_ex (side , anchor ,) . done () } # [inline] pub fn set_anchor_ex < 'a > (& 'a mut self , side : crate :: global :: Side , anchor : f32 ,) -> ExSetAnchor < 'a > { ExSetAnchor :: new (self , side , anchor ,) } pub fn get_anchor (& self , side : crate :: global :: Side ,) -> f32 { let args = (side . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__get_anchor ; CallFrame :: new (CallContext :: new ("Control" , "get_anchor") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn set_anchors_preset_full (& mut self , preset : crate :: classes :: control :: LayoutPreset , keep_offsets : bool ,) { let args = (preset . into_ffi () , keep_offsets . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__set_anchors_preset ; CallFrame :: new (CallContext :: new ("Control" , "set_anchors_preset") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn set_anchors_preset (& mut self , preset : crate :: classes :: control :: LayoutPreset ,) { self . set_anchors_preset_ex (preset ,) . done () } # [inline] pub fn set_anchors_preset_ex < 'a > (& 'a mut self , preset : crate :: classes :: control :: LayoutPreset ,) -> ExSetAnchorsPreset < 'a > { ExSetAnchorsPreset :: new (self , preset ,) } pub fn get_rect (& self ,) -> Rect2 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__get_rect ; CallFrame :: new (CallContext :: new ("Control" , "get_rect") , args) . out_ptrcall :: < Rect2 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn grab_focus (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__grab_focus ; CallFrame :: new (CallContext :: new ("Control" , "grab_focus") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn has_focus (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . control__has_focus ; CallFrame :: new (CallContext :: new ("Control" , "has_focus") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn add_theme_color_override (& mut self , name : impl AsArg < StringName > , color : Color ,) { let args = (name . into_arg () , color . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__add_theme_color_override ; CallFrame :: new (CallContext :: new ("Control" , "add_theme_color_override") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn has_theme_color_override (& self , name : impl AsArg < StringName > ,) -> bool { let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . control__has_theme_color_override ; CallFrame :: new (CallContext :: new ("Control" , "has_theme_color_override") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn get_theme_color_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> Color { let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_method_table () . control__get_theme_color ; CallFrame :: new (CallContext :: new ("Control" , "get_theme_color") , args) . out_ptrcall :: < Color > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn get_theme_color (& self , name : impl AsArg < StringName > ,) -> Color { self . get_theme_color_ex (name ,) . done () } # [inline] pub fn get_theme_color_ex < 'a > (& 'a self , name : impl AsArg < StringName > + 'a ,) -> ExGetThemeColor < 'a > { ExGetThemeColor :: new (self , name . into_arg () ,) } # [doc = "Value of property `position`, read through [`get_position()`][Self::get_position]."] pub fn position (& self) -> Vector2 { self . get_position () } # [doc = "Value of property `size`, read through [`get_size()`][Self::get_size]."] pub fn size (& self) -> Vector2 { self . get_size () } # [doc = "Value of property `custom_minimum_size`, read through [`get_custom_minimum_size()`][Self::get_custom_minimum_size]."] pub fn custom_minimum_size (& self) -> Vector2 { self . get_custom_minimum_size () } # [doc = "Value of property `tooltip_text`, read through [`get_tooltip_text()`][Self::get_tooltip_text]."] pub fn tooltip_text (& self) -> String { self . get_tooltip_text () . to_string () } # [doc = "Value of property `size_flags_horizontal`, read through [`get_h_size_flags()`][Self::get_h_size_flags]."] pub fn size_flags_horizontal (& self) -> crate :: classes :: control :: SizeFlags { self . get_h_size_flags () } # [doc = "Value of property `size_flags_vertical`, read through [`get_v_size_flags()`][Self::get_v_size_flags]."] pub fn size_flags_vertical (& self) -> crate :: classes :: control :: SizeFlags { self . get_v_size_flags () } # [doc = "Value of property `focus_mode`, read through [`get_focus_mode()`][Self::get_focus_mode]."] pub fn focus_mode (& self) -> crate :: classes :: control :: FocusMode { self . get_focus_mode () } # [doc = "Value of property `mouse_filter`, read through [`get_mouse_filter()`][Self::get_mouse_filter]."] pub fn mouse_filter (& self) -> crate :: classes :: control :: MouseFilter { self . get_mouse_filter () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for Control { type Base = crate :: classes :: CanvasItem ; fn class_name () -> ClassName { ClassName :: new_static ("Control") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Control { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for Control { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Control { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Control { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Control { } impl crate :: obj :: cap :: GodotDefault for Control { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: obj :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Control { type Target = crate :: classes :: CanvasItem ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Control { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Control::set_position`][super::Control::set_position]."] # [must_use] pub struct ExSetPosition < 'a > { surround_object : & 'a mut re_export :: Control , position : Vector2 , keep_offsets : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExSetPosition < 'a > { fn new (surround_object : & 'a mut re_export :: Control , position : Vector2 ,) -> Self { Self { surround_object , position , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_position_full (self . surround_object , self . position , self . keep_offsets ,) } } # [doc = "Default-param extender for [`Control::set_size`][super::Control::set_size]."] # [must_use] pub struct ExSetSize < 'a > { surround_object : & 'a mut re_export :: Control , size : Vector2 , keep_offsets : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExSetSize < 'a > { fn new (surround_object : & 'a mut re_export :: Control , size : Vector2 ,) -> Self { Self { surround_object , size , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_size_full (self . surround_object , self . size , self . keep_offsets ,) } } # [doc = "Default-param extender for [`Control::set_anchor`][super::Control::set_anchor]."] # [must_use] pub struct ExSetAnchor < 'a > { surround_object : & 'a mut re_export :: Control , side : crate :: global :: Side , anchor : f32 , keep_offset : bool , push_opposite_anchor : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExSetAnchor < 'a > { fn new (surround_object : & 'a mut re_export :: Control , side : crate :: global :: Side , anchor : f32 ,) -> Self { Self { surround_object , side , anchor , keep_offset : false , push_opposite_anchor : true , } } # [inline] pub fn keep_offset (self , value : bool) -> Self { Self { keep_offset : value , .. self } } # [inline] pub fn push_opposite_anchor (self , value : bool) -> Self { Self { push_opposite_anchor : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_anchor_full (self . surround_object , self . side , self . anchor , self . keep_offset , self . push_opposite_anchor ,) } } # [doc = "Default-param extender for [`Control::set_anchors_preset`][super::Control::set_anchors_preset]."] # [must_use] pub struct ExSetAnchorsPreset < 'a > { surround_object : & 'a mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset , keep_offsets : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExSetAnchorsPreset < 'a > { fn new (surround_object : & 'a mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset ,) -> Self { Self { surround_object , preset , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_anchors_preset_full (self . surround_object , self . preset , self . keep_offsets ,) } } # [doc = "Default-param extender for [`Control::get_theme_color`][super::Control::get_theme_color]."] # [must_use] pub struct ExGetThemeColor < 'a > { surround_object : & 'a re_export :: Control , name : CowArg < 'a , StringName > , theme_type : CowArg < 'a , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExGetThemeColor < 'a > { fn new (surround_object : & 'a re_export :: Control , name : CowArg < 'a , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'a) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> Color { re_export :: Control :: get_theme_color_full (self . surround_object , self . name , self . theme_type ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`Control`][crate::classes::Control]."] pub struct FocusMode { ord : i32 } impl FocusMode { # [doc (alias = "FOCUS_NONE")] # [doc = "Godot enumerator name: `FOCUS_NONE`"] pub const NONE : FocusMode = FocusMode { ord : 0i32 } ; # [doc (alias = "FOCUS_CLICK")] # [doc = "Godot enumerator name: `FOCUS_CLICK`"] pub const CLICK : FocusMode = FocusMode { ord : 1i32 } ; # [doc (alias = "FOCUS_ALL")] # [doc = "Godot enumerator name: `FOCUS_ALL`"] pub const ALL : FocusMode = FocusMode { ord : 2i32 } ; } impl std :: fmt :: Debug for FocusMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "NONE" , 1 => "CLICK" , 2 => "ALL" , _ => { return f . debug_struct ("FocusMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for FocusMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "NONE" , 1 => "CLICK" , 2 => "ALL" , _ => "" , } } fn values () -> & 'static [Self] { & [FocusMode :: NONE , FocusMode :: CLICK , FocusMode :: ALL ,] } } impl crate :: meta :: GodotType for FocusMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default)] # [doc = "Declared by class [`Control`][crate::classes::Control]."] pub struct SizeFlags { ord : u64 } impl SizeFlags { # [doc (alias = "SIZE_SHRINK_BEGIN")] # [doc = "Godot enumerator name: `SIZE_SHRINK_BEGIN`"] pub const SHRINK_BEGIN : SizeFlags = SizeFlags { ord : 0x0000000000000000 } ; # [doc (alias = "SIZE_FILL")] # [doc = "Godot enumerator name: `SIZE_FILL`"] pub const FILL : SizeFlags = SizeFlags { ord : 0x0000000000000001 } ; # [doc (alias = "SIZE_EXPAND")] # [doc = "Godot enumerator name: `SIZE_EXPAND`"] pub const EXPAND : SizeFlags = SizeFlags { ord : 0x0000000000000002 } ; # [doc (alias = "SIZE_EXPAND_FILL")] # [doc = "Godot enumerator name: `SIZE_EXPAND_FILL`"] pub const EXPAND_FILL : SizeFlags = SizeFlags { ord : 0x0000000000000003 } ; # [doc (alias = "SIZE_SHRINK_CENTER")] # [doc = "Godot enumerator name: `SIZE_SHRINK_CENTER`"] pub const SHRINK_CENTER : SizeFlags = SizeFlags { ord : 0x0000000000000004 } ; # [doc (alias = "SIZE_SHRINK_END")] # [doc = "Godot enumerator name: `SIZE_SHRINK_END`"] pub const SHRINK_END : SizeFlags = SizeFlags { ord : 0x0000000000000008 } ; } impl std :: fmt :: Debug for SizeFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "SHRINK_BEGIN" , 1 => "FILL" , 2 => "EXPAND" , 3 => "EXPAND_FILL" , 4 => "SHRINK_CENTER" , 8 => "SHRINK_END" , _ => { return f . debug_struct ("SizeFlags") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineBitfield for SizeFlags { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl crate :: meta :: GodotType for SizeFlags { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : ffi as u64 }) } } impl std :: ops :: BitOr for SizeFlags { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`Control`][crate::classes::Control]."] pub struct LayoutPreset { ord : i32 } impl LayoutPreset { # [doc (alias = "PRESET_TOP_LEFT")] # [doc = "Godot enumerator name: `PRESET_TOP_LEFT`"] pub const TOP_LEFT : LayoutPreset = LayoutPreset { ord : 0i32 } ; # [doc (alias = "PRESET_TOP_RIGHT")] # [doc = "Godot enumerator name: `PRESET_TOP_RIGHT`"] pub const TOP_RIGHT : LayoutPreset = LayoutPreset { ord : 1i32 } ; # [doc (alias = "PRESET_BOTTOM_LEFT")] # [doc = "Godot enumerator name: `PRESET_BOTTOM_LEFT`"] pub const BOTTOM_LEFT : LayoutPreset = LayoutPreset { ord : 2i32 } ; # [doc (alias = "PRESET_BOTTOM_RIGHT")] # [doc = "Godot enumerator name: `PRESET_BOTTOM_RIGHT`"] pub const BOTTOM_RIGHT : LayoutPreset = LayoutPreset { ord : 3i32 } ; # [doc (alias = "PRESET_CENTER_LEFT")] # [doc = "Godot enumerator name: `PRESET_CENTER_LEFT`"] pub const CENTER_LEFT : LayoutPreset = LayoutPreset { ord : 4i32 } ; # [doc (alias = "PRESET_CENTER_TOP")] # [doc = "Godot enumerator name: `PRESET_CENTER_TOP`"] pub const CENTER_TOP : LayoutPreset = LayoutPreset { ord : 5i32 } ; # [doc (alias = "PRESET_CENTER_RIGHT")] # [doc = "Godot enumerator name: `PRESET_CENTER_RIGHT`"] pub const CENTER_RIGHT : LayoutPreset = LayoutPreset { ord : 6i32 } ; # [doc (alias = "PRESET_CENTER_BOTTOM")] # [doc = "Godot enumerator name: `PRESET_CENTER_BOTTOM`"] pub const CENTER_BOTTOM : LayoutPreset = LayoutPreset { ord : 7i32 } ; # [doc (alias = "PRESET_CENTER")] # [doc = "Godot enumerator name: `PRESET_CENTER`"] pub const CENTER : LayoutPreset = LayoutPreset { ord : 8i32 } ; # [doc (alias = "PRESET_LEFT_WIDE")] # [doc = "Godot enumerator name: `PRESET_LEFT_WIDE`"] pub const LEFT_WIDE : LayoutPreset = LayoutPreset { ord : 9i32 } ; # [doc (alias = "PRESET_TOP_WIDE")] # [doc = "Godot enumerator name: `PRESET_TOP_WIDE`"] pub const TOP_WIDE : LayoutPreset = LayoutPreset { ord : 10i32 } ; # [doc (alias = "PRESET_RIGHT_WIDE")] # [doc = "Godot enumerator name: `PRESET_RIGHT_WIDE`"] pub const RIGHT_WIDE : LayoutPreset = LayoutPreset { ord : 11i32 } ; # [doc (alias = "PRESET_BOTTOM_WIDE")] # [doc = "Godot enumerator name: `PRESET_BOTTOM_WIDE`"] pub const BOTTOM_WIDE : LayoutPreset = LayoutPreset { ord : 12i32 } ; # [doc (alias = "PRESET_VCENTER_WIDE")] # [doc = "Godot enumerator name: `PRESET_VCENTER_WIDE`"] pub const VCENTER_WIDE : LayoutPreset = LayoutPreset { ord : 13i32 } ; # [doc (alias = "PRESET_HCENTER_WIDE")] # [doc = "Godot enumerator name: `PRESET_HCENTER_WIDE`"] pub const HCENTER_WIDE : LayoutPreset = LayoutPreset { ord : 14i32 } ; # [doc (alias = "PRESET_FULL_RECT")] # [doc = "Godot enumerator name: `PRESET_FULL_RECT`"] pub const FULL_RECT : LayoutPreset = LayoutPreset { ord : 15i32 } ; } impl std :: fmt :: Debug for LayoutPreset { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "TOP_LEFT" , 1 => "TOP_RIGHT" , 2 => "BOTTOM_LEFT" , 3 => "BOTTOM_RIGHT" , 4 => "CENTER_LEFT" , 5 => "CENTER_TOP" , 6 => "CENTER_RIGHT" , 7 => "CENTER_BOTTOM" , 8 => "CENTER" , 9 => "LEFT_WIDE" , 10 => "TOP_WIDE" , 11 => "RIGHT_WIDE" , 12 => "BOTTOM_WIDE" , 13 => "VCENTER_WIDE" , 14 => "HCENTER_WIDE" , 15 => "FULL_RECT" , _ => { return f . debug_struct ("LayoutPreset") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for LayoutPreset { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 5i32 | ord @ 6i32 | ord @ 7i32 | ord @ 8i32 | ord @ 9i32 | ord @ 10i32 | ord @ 11i32 | ord @ 12i32 | ord @ 13i32 | ord @ 14i32 | ord @ 15i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "TOP_LEFT" , 1 => "TOP_RIGHT" , 2 => "BOTTOM_LEFT" , 3 => "BOTTOM_RIGHT" , 4 => "CENTER_LEFT" , 5 => "CENTER_TOP" , 6 => "CENTER_RIGHT" , 7 => "CENTER_BOTTOM" , 8 => "CENTER" , 9 => "LEFT_WIDE" , 10 => "TOP_WIDE" , 11 => "RIGHT_WIDE" , 12 => "BOTTOM_WIDE" , 13 => "VCENTER_WIDE" , 14 => "HCENTER_WIDE" , 15 => "FULL_RECT" , _ => "" , } } fn values () -> & 'static [Self] { & [LayoutPreset :: TOP_LEFT , LayoutPreset :: TOP_RIGHT , LayoutPreset :: BOTTOM_LEFT , LayoutPreset :: BOTTOM_RIGHT , LayoutPreset :: CENTER_LEFT , LayoutPreset :: CENTER_TOP , LayoutPreset :: CENTER_RIGHT , LayoutPreset :: CENTER_BOTTOM , LayoutPreset :: CENTER , LayoutPreset :: LEFT_WIDE , LayoutPreset :: TOP_WIDE , LayoutPreset :: RIGHT_WIDE , LayoutPreset :: BOTTOM_WIDE , LayoutPreset :: VCENTER_WIDE , LayoutPreset :: HCENTER_WIDE , LayoutPreset :: FULL_RECT ,] } } impl crate :: meta :: GodotType for LayoutPreset { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`Control`][crate::classes::Control]."] pub struct MouseFilter { ord : i32 } impl MouseFilter { # [doc (alias = "MOUSE_FILTER_STOP")] # [doc = "Godot enumerator name: `MOUSE_FILTER_STOP`"] pub const STOP : MouseFilter = MouseFilter { ord : 0i32 } ; # [doc (alias = "MOUSE_FILTER_PASS")] # [doc = "Godot enumerator name: `MOUSE_FILTER_PASS`"] pub const PASS : MouseFilter = MouseFilter { ord : 1i32 } ; # [doc (alias = "MOUSE_FILTER_IGNORE")] # [doc = "Godot enumerator name: `MOUSE_FILTER_IGNORE`"] pub const IGNORE : MouseFilter = MouseFilter { ord : 2i32 } ; } impl std :: fmt :: Debug for MouseFilter { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "STOP" , 1 => "PASS" , 2 => "IGNORE" , _ => { return f . debug_struct ("MouseFilter") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for MouseFilter { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "STOP" , 1 => "PASS" , 2 => "IGNORE" , _ => "" , } } fn values () -> & 'static [Self] { & [MouseFilter :: STOP , MouseFilter :: PASS , MouseFilter :: IGNORE ,] } } impl crate :: meta :: GodotType for MouseFilter { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } pub const NOTIFICATION_RESIZED : i32 = 40i32 ; pub const NOTIFICATION_MOUSE_ENTER : i32 = 41i32 ; pub const NOTIFICATION_MOUSE_EXIT : i32 = 42i32 ; pub const NOTIFICATION_FOCUS_ENTER : i32 = 43i32 ; pub const NOTIFICATION_FOCUS_EXIT : i32 = 44i32 ;