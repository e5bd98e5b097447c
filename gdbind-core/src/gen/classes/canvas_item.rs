# ! [doc = "Sidecar module for class [`CanvasItem`][crate::classes::CanvasItem]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `CanvasItem`.\n\nInherits [`Node`][crate::classes::Node].\n\nRelated symbols live in the [`canvas_item`][crate::classes::canvas_item] module."] # [repr (C)] # [derive (Debug)] pub struct CanvasItem { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl CanvasItem { pub fn set_visible (& mut self , visible : bool ,) { let args = (visible . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__set_visible ; CallFrame :: new (CallContext :: new ("CanvasItem" , "set_visible") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn is_visible (& self ,) -> bool { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__is_visible ; CallFrame :: new (CallContext :: new ("CanvasItem" , "is_visible") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_modulate (& mut self , modulate : Color ,) { let args = (modulate . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__set_modulate ; CallFrame :: new (CallContext :: new ("CanvasItem" , "set_modulate") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_modulate (& self ,) -> Color { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__get_modulate ; CallFrame :: new (CallContext :: new ("CanvasItem" , "get_modulate") , args) . out_ptrcall :: < Color > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_self_modulate (& mut self , self_modulate : Color ,) { let args = (self_modulate . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__set_self_modulate ; CallFrame :: new (CallContext :: new ("CanvasItem" , "set_self_modulate") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_self_modulate (& self ,) -> Color { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__get_self_modulate ; CallFrame :: new (CallContext :: new ("CanvasItem" , "get_self_modulate") , args) . out_ptrcall :: < Color > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_z_index (& mut self , z_index : i32 ,) { let args = (z_index . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__set_z_index ; CallFrame :: new (CallContext :: new ("CanvasItem" , "set_z_index") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_z_index (& self ,) -> i32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__get_z_index ; CallFrame :: new (CallContext :: new ("CanvasItem" , "get_z_index") , args) . out_ptrcall :: < i32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_texture_filter (& mut self , texture_filter : crate :: classes :: canvas_item :: TextureFilter ,) { let args = (texture_filter . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__set_texture_filter ; CallFrame :: new (CallContext :: new ("CanvasItem" , "set_texture_filter") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_texture_filter (& self ,) -> crate :: classes :: canvas_item :: TextureFilter { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__get_texture_filter ; CallFrame :: new (CallContext :: new ("CanvasItem" , "get_texture_filter") , args) . out_ptrcall :: < crate :: classes :: canvas_item :: TextureFilter > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_material (& mut self , material : impl AsObjectArg < crate :: classes :: Material > ,) { let args = (material . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__set_material ; CallFrame :: new (CallContext :: new ("CanvasItem" , "set_material") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_material (& self ,) -> Option < Gd < crate :: classes :: Material > > { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__get_material ; CallFrame :: new (CallContext :: new ("CanvasItem" , "get_material") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Material > > > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn show (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__show ; CallFrame :: new (CallContext :: new ("CanvasItem" , "show") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn hide (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__hide ; CallFrame :: new (CallContext :: new ("CanvasItem" , "hide") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn queue_redraw (& mut self ,) { let args = () ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__queue_redraw ; CallFrame :: new (CallContext :: new ("CanvasItem" , "queue_redraw") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub (crate) fn draw_line_full (& mut self , from : Vector2 , to : Vector2 , color : Color , width : f32 , antialiased : bool ,) { let args = (from . into_ffi () , to . into_ffi () , color . into_ffi () , width . into_ffi () , antialiased . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__draw_line ; CallFrame :: new (CallContext :: new ("CanvasItem" , "draw_line") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn draw_line (& mut self , from : Vector2 , to : Vector2 , color : Color ,) { self . draw_line_ex (from , to , color ,) . done () } # [inline] pub fn draw_line_ex < 'a > (& 'a mut self , from : Vector2 , to : Vector2 , color : Color ,) -> ExDrawLine < 'a > { ExDrawLine :: new (self , from , to , color ,) } pub (crate) fn draw_rect_full (& mut self , rect : Rect2 , color : Color , filled : bool , width : f32 , antialiased : bool ,) { let args = (rect . into_ffi () , color . into_ffi () , filled . into_ffi () , width . into_ffi () , antialiased . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__draw_rect ; CallFrame :: new (CallContext :: new ("CanvasItem" , "draw_rect") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn draw_rect (& mut self , rect : Rect2 , color : Color ,) { self . draw_rect_ex (rect , color ,) . done () } # [inline] pub fn draw_rect_ex < 'a > (& 'a mut self , rect : Rect2 , color : Color ,) -> ExDrawRect < 'a > { ExDrawRect :: new (self , rect , color ,) } pub (crate) fn draw_texture_full (& mut self , texture : ObjectArg < '_ , crate :: classes :: Texture2D > , position : Vector2 , modulate : Color ,) { let args = (texture , position . into_ffi () , modulate . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . canvas_item__draw_texture ; CallFrame :: new (CallContext :: new ("CanvasItem" , "draw_texture") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } # [inline] pub fn draw_texture (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , position : Vector2 ,) { self . draw_texture_ex (texture , position ,) . done () } # [inline] pub fn draw_texture_ex < 'a > (& 'a mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > + 'a , position : Vector2 ,) -> ExDrawTexture < 'a > { ExDrawTexture :: new (self , texture . into_object_arg () , position ,) } # [doc = "Value of property `visible`, read through [`is_visible()`][Self::is_visible]."] pub fn visible (& self) -> bool { self . is_visible () } # [doc = "Value of property `modulate`, read through [`get_modulate()`][Self::get_modulate]."] pub fn modulate (& self) -> Color { self . get_modulate () } # [doc = "Value of property `self_modulate`, read through [`get_self_modulate()`][Self::get_self_modulate]."] pub fn self_modulate (& self) -> Color { self . get_self_modulate () } # [doc = "Value of property `z_index`, read through [`get_z_index()`][Self::get_z_index]."] pub fn z_index (& self) -> i32 { self . get_z_index () } # [doc = "Value of property `texture_filter`, read through [`get_texture_filter()`][Self::get_texture_filter]."] pub fn texture_filter (& self) -> crate :: classes :: canvas_item :: TextureFilter { self . get_texture_filter () } # [doc = "Value of property `material`, read through [`get_material()`][Self::get_material]."] pub fn material (& self) -> Option < Gd < crate :: classes :: Material > > { self . get_material () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for CanvasItem { type Base = crate :: classes :: Node ; fn class_name () -> ClassName { ClassName :: new_static ("CanvasItem") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for CanvasItem { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; } impl crate :: obj :: EngineClass for CanvasItem { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for CanvasItem { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for CanvasItem { } impl std :: ops :: Deref for CanvasItem { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CanvasItem { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`CanvasItem::draw_line`][super::CanvasItem::draw_line]."] # [must_use] pub struct ExDrawLine < 'a > { surround_object : & 'a mut re_export :: CanvasItem , from : Vector2 , to : Vector2 , color : Color , width : f32 , antialiased : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExDrawLine < 'a > { fn new (surround_object : & 'a mut re_export :: CanvasItem , from : Vector2 , to : Vector2 , color : Color ,) -> Self { Self { surround_object , from , to , color , width : - 1.0 , antialiased : false , } } # [inline] pub fn width (self , value : f32) -> Self { Self { width : value , .. self } } # [inline] pub fn antialiased (self , value : bool) -> Self { Self { antialiased : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_line_full (self . surround_object , self . from , self . to , self . color , self . width , self . antialiased ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_rect`][super::CanvasItem::draw_rect]."] # [must_use] pub struct ExDrawRect < 'a > { surround_object : & 'a mut re_export :: CanvasItem , rect : Rect2 , color : Color , filled : bool , width : f32 , antialiased : bool , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExDrawRect < 'a > { fn new (surround_object : & 'a mut re_export :: CanvasItem , rect : Rect2 , color : Color ,) -> Self { Self { surround_object , rect , color , filled : true , width : - 1.0 , antialiased : false , } } # [inline] pub fn filled (self , value : bool) -> Self { Self { filled : value , .. self } } # [inline] pub fn width (self , value : f32) -> Self { Self { width : value , .. self } } # [inline] pub fn antialiased (self , value : bool) -> Self { Self { antialiased : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_rect_full (self . surround_object , self . rect , self . color , self . filled , self . width , self . antialiased ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_texture`][super::CanvasItem::draw_texture]."] # [must_use] pub struct ExDrawTexture < 'a > { surround_object : & 'a mut re_export :: CanvasItem , texture : ObjectArg < 'a , crate :: classes :: Texture2D > , position : Vector2 , modulate : Color , } # [allow (clippy :: wrong_self_convention , clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExDrawTexture < 'a > { fn new (surround_object : & 'a mut re_export :: CanvasItem , texture : ObjectArg < 'a , crate :: classes :: Texture2D > , position : Vector2 ,) -> Self { Self { surround_object , texture , position , modulate : Color :: from_rgba (1.0 , 1.0 , 1.0 , 1.0) , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_texture_full (self . surround_object , self . texture , self . position , self . modulate ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`CanvasItem`][crate::classes::CanvasItem]."] pub struct TextureFilter { ord : i32 } impl TextureFilter { # [doc (alias = "TEXTURE_FILTER_PARENT_NODE")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_PARENT_NODE`"] pub const PARENT_NODE : TextureFilter = TextureFilter { ord : 0i32 } ; # [doc (alias = "TEXTURE_FILTER_NEAREST")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_NEAREST`"] pub const NEAREST : TextureFilter = TextureFilter { ord : 1i32 } ; # [doc (alias = "TEXTURE_FILTER_LINEAR")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_LINEAR`"] pub const LINEAR : TextureFilter = TextureFilter { ord : 2i32 } ; # [doc (alias = "TEXTURE_FILTER_NEAREST_WITH_MIPMAPS")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_NEAREST_WITH_MIPMAPS`"] pub const NEAREST_WITH_MIPMAPS : TextureFilter = TextureFilter { ord : 3i32 } ; # [doc (alias = "TEXTURE_FILTER_LINEAR_WITH_MIPMAPS")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_LINEAR_WITH_MIPMAPS`"] pub const LINEAR_WITH_MIPMAPS : TextureFilter = TextureFilter { ord : 4i32 } ; # [doc (alias = "TEXTURE_FILTER_MAX")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_MAX`"] pub const MAX : TextureFilter = TextureFilter { ord : 7i32 } ; } impl std :: fmt :: Debug for TextureFilter { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "PARENT_NODE" , 1 => "NEAREST" , 2 => "LINEAR" , 3 => "NEAREST_WITH_MIPMAPS" , 4 => "LINEAR_WITH_MIPMAPS" , 7 => "MAX" , _ => { return f . debug_struct ("TextureFilter") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for TextureFilter { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 7i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "PARENT_NODE" , 1 => "NEAREST" , 2 => "LINEAR" , 3 => "NEAREST_WITH_MIPMAPS" , 4 => "LINEAR_WITH_MIPMAPS" , 7 => "MAX" , _ => "" , } } fn values () -> & 'static [Self] { & [TextureFilter :: PARENT_NODE , TextureFilter :: NEAREST , TextureFilter :: LINEAR , TextureFilter :: NEAREST_WITH_MIPMAPS , TextureFilter :: LINEAR_WITH_MIPMAPS , TextureFilter :: MAX ,] } } impl crate :: meta :: GodotType for TextureFilter { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } pub const NOTIFICATION_DRAW : i32 = 30i32 ; pub const NOTIFICATION_VISIBILITY_CHANGED : i32 = 31i32 ;