# ! [doc = "Sidecar module for class [`BaseMaterial3D`][crate::classes::BaseMaterial3D]."] use gdbind_ffi as sys ; use crate :: builtin :: * ; use crate :: meta :: { AsArg , AsObjectArg , CallContext , CallFrame , ClassName , CowArg , GodotType , ObjectArg } ; use crate :: obj :: { EngineBitfield , EngineEnum , Gd } ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `BaseMaterial3D`.\n\nInherits [`Material`][crate::classes::Material].\n\nRelated symbols live in the [`base_material_3d`][crate::classes::base_material_3d] module."] # [repr (C)] # [derive (Debug)] pub struct BaseMaterial3D { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } impl BaseMaterial3D { pub fn set_albedo (& mut self , albedo_color : Color ,) { let args = (albedo_color . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_albedo ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_albedo") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_albedo (& self ,) -> Color { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_albedo ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_albedo") , args) . out_ptrcall :: < Color > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_metallic (& mut self , metallic : f32 ,) { let args = (metallic . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_metallic ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_metallic") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_metallic (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_metallic ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_metallic") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_roughness (& mut self , roughness : f32 ,) { let args = (roughness . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_roughness ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_roughness") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_roughness (& self ,) -> f32 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_roughness ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_roughness") , args) . out_ptrcall :: < f32 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_emission (& mut self , emission : Color ,) { let args = (emission . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_emission ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_emission") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_emission (& self ,) -> Color { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_emission ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_emission") , args) . out_ptrcall :: < Color > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_transparency (& mut self , transparency : crate :: classes :: base_material_3d :: Transparency ,) { let args = (transparency . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_transparency ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_transparency") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_transparency (& self ,) -> crate :: classes :: base_material_3d :: Transparency { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_transparency ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_transparency") , args) . out_ptrcall :: < crate :: classes :: base_material_3d :: Transparency > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_shading_mode (& mut self , shading_mode : crate :: classes :: base_material_3d :: ShadingMode ,) { let args = (shading_mode . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_shading_mode ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_shading_mode") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_shading_mode (& self ,) -> crate :: classes :: base_material_3d :: ShadingMode { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_shading_mode ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_shading_mode") , args) . out_ptrcall :: < crate :: classes :: base_material_3d :: ShadingMode > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_uv1_scale (& mut self , uv1_scale : Vector3 ,) { let args = (uv1_scale . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_uv1_scale ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_uv1_scale") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_uv1_scale (& self ,) -> Vector3 { let args = () ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_uv1_scale ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_uv1_scale") , args) . out_ptrcall :: < Vector3 > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_flag (& mut self , flag : crate :: classes :: base_material_3d :: Flags , enable : bool ,) { let args = (flag . into_ffi () , enable . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_flag ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_flag") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_flag (& self , flag : crate :: classes :: base_material_3d :: Flags ,) -> bool { let args = (flag . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_flag ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_flag") , args) . out_ptrcall :: < bool > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn set_texture (& mut self , param : crate :: classes :: base_material_3d :: TextureParam , texture : impl AsObjectArg < crate :: classes :: Texture2D > ,) { let args = (param . into_ffi () , texture . into_object_arg () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__set_texture ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "set_texture") , args) . out_ptrcall :: < () > (method_bind , self . object_ptr , self . __checked_id ()) } } pub fn get_texture (& self , param : crate :: classes :: base_material_3d :: TextureParam ,) -> Option < Gd < crate :: classes :: Texture2D > > { let args = (param . into_ffi () ,) ; unsafe { let method_bind = sys :: class_method_table () . base_material_3d__get_texture ; CallFrame :: new (CallContext :: new ("BaseMaterial3D" , "get_texture") , args) . out_ptrcall :: < Option < Gd < crate :: classes :: Texture2D > > > (method_bind , self . object_ptr , self . __checked_id ()) } } # [doc = "Value of property `albedo_color`, read through [`get_albedo()`][Self::get_albedo]."] pub fn albedo_color (& self) -> Color { self . get_albedo () } # [doc = "Value of property `metallic`, read through [`get_metallic()`][Self::get_metallic]."] pub fn metallic (& self) -> f32 { self . get_metallic () } # [doc = "Value of property `roughness`, read through [`get_roughness()`][Self::get_roughness]."] pub fn roughness (& self) -> f32 { self . get_roughness () } # [doc = "Value of property `emission`, read through [`get_emission()`][Self::get_emission]."] pub fn emission (& self) -> Color { self . get_emission () } # [doc = "Value of property `transparency`, read through [`get_transparency()`][Self::get_transparency]."] pub fn transparency (& self) -> crate :: classes :: base_material_3d :: Transparency { self . get_transparency () } # [doc = "Value of property `shading_mode`, read through [`get_shading_mode()`][Self::get_shading_mode]."] pub fn shading_mode (& self) -> crate :: classes :: base_material_3d :: ShadingMode { self . get_shading_mode () } # [doc = "Value of property `uv1_scale`, read through [`get_uv1_scale()`][Self::get_uv1_scale]."] pub fn uv1_scale (& self) -> Vector3 { self . get_uv1_scale () } fn __checked_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: GodotClass for BaseMaterial3D { type Base = crate :: classes :: Material ; fn class_name () -> ClassName { ClassName :: new_static ("BaseMaterial3D") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for BaseMaterial3D { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; } impl crate :: obj :: EngineClass for BaseMaterial3D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Material > for BaseMaterial3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for BaseMaterial3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for BaseMaterial3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for BaseMaterial3D { } impl std :: ops :: Deref for BaseMaterial3D { type Target = crate :: classes :: Material ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for BaseMaterial3D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`BaseMaterial3D`][crate::classes::BaseMaterial3D]."] pub struct TextureParam { ord : i32 } impl TextureParam { # [doc (alias = "TEXTURE_ALBEDO")] # [doc = "Godot enumerator name: `TEXTURE_ALBEDO`"] pub const ALBEDO : TextureParam = TextureParam { ord : 0i32 } ; # [doc (alias = "TEXTURE_METALLIC")] # [doc = "Godot enumerator name: `TEXTURE_METALLIC`"] pub const METALLIC : TextureParam = TextureParam { ord : 1i32 } ; # [doc (alias = "TEXTURE_ROUGHNESS")] # [doc = "Godot enumerator name: `TEXTURE_ROUGHNESS`"] pub const ROUGHNESS : TextureParam = TextureParam { ord : 2i32 } ; # [doc (alias = "TEXTURE_EMISSION")] # [doc = "Godot enumerator name: `TEXTURE_EMISSION`"] pub const EMISSION : TextureParam = TextureParam { ord : 3i32 } ; # [doc (alias = "TEXTURE_NORMAL")] # [doc = "Godot enumerator name: `TEXTURE_NORMAL`"] pub const NORMAL : TextureParam = TextureParam { ord : 4i32 } ; # [doc (alias = "TEXTURE_MAX")] # [doc = "Godot enumerator name: `TEXTURE_MAX`"] pub const MAX : TextureParam = TextureParam { ord : 18i32 } ; } impl std :: fmt :: Debug for TextureParam { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "ALBEDO" , 1 => "METALLIC" , 2 => "ROUGHNESS" , 3 => "EMISSION" , 4 => "NORMAL" , 18 => "MAX" , _ => { return f . debug_struct ("TextureParam") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for TextureParam { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 18i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "ALBEDO" , 1 => "METALLIC" , 2 => "ROUGHNESS" , 3 => "EMISSION" , 4 => "NORMAL" , 18 => "MAX" , _ => "" , } } fn values () -> & 'static [Self] { & [TextureParam :: ALBEDO , TextureParam :: METALLIC , TextureParam :: ROUGHNESS , TextureParam :: EMISSION , TextureParam :: NORMAL , TextureParam :: MAX ,] } } impl crate :: meta :: GodotType for TextureParam { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`BaseMaterial3D`][crate::classes::BaseMaterial3D]."] pub struct Transparency { ord : i32 } impl Transparency { # [doc (alias = "TRANSPARENCY_DISABLED")] # [doc = "Godot enumerator name: `TRANSPARENCY_DISABLED`"] pub const DISABLED : Transparency = Transparency { ord : 0i32 } ; # [doc (alias = "TRANSPARENCY_ALPHA")] # [doc = "Godot enumerator name: `TRANSPARENCY_ALPHA`"] pub const ALPHA : Transparency = Transparency { ord : 1i32 } ; # [doc (alias = "TRANSPARENCY_ALPHA_SCISSOR")] # [doc = "Godot enumerator name: `TRANSPARENCY_ALPHA_SCISSOR`"] pub const ALPHA_SCISSOR : Transparency = Transparency { ord : 2i32 } ; # [doc (alias = "TRANSPARENCY_ALPHA_HASH")] # [doc = "Godot enumerator name: `TRANSPARENCY_ALPHA_HASH`"] pub const ALPHA_HASH : Transparency = Transparency { ord : 3i32 } ; # [doc (alias = "TRANSPARENCY_ALPHA_DEPTH_PRE_PASS")] # [doc = "Godot enumerator name: `TRANSPARENCY_ALPHA_DEPTH_PRE_PASS`"] pub const ALPHA_DEPTH_PRE_PASS : Transparency = Transparency { ord : 4i32 } ; # [doc (alias = "TRANSPARENCY_MAX")] # [doc = "Godot enumerator name: `TRANSPARENCY_MAX`"] pub const MAX : Transparency = Transparency { ord : 5i32 } ; } impl std :: fmt :: Debug for Transparency { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "DISABLED" , 1 => "ALPHA" , 2 => "ALPHA_SCISSOR" , 3 => "ALPHA_HASH" , 4 => "ALPHA_DEPTH_PRE_PASS" , 5 => "MAX" , _ => { return f . debug_struct ("Transparency") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for Transparency { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 5i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "DISABLED" , 1 => "ALPHA" , 2 => "ALPHA_SCISSOR" , 3 => "ALPHA_HASH" , 4 => "ALPHA_DEPTH_PRE_PASS" , 5 => "MAX" , _ => "" , } } fn values () -> & 'static [Self] { & [Transparency :: DISABLED , Transparency :: ALPHA , Transparency :: ALPHA_SCISSOR , Transparency :: ALPHA_HASH , Transparency :: ALPHA_DEPTH_PRE_PASS , Transparency :: MAX ,] } } impl crate :: meta :: GodotType for Transparency { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`BaseMaterial3D`][crate::classes::BaseMaterial3D]."] pub struct ShadingMode { ord : i32 } impl ShadingMode { # [doc (alias = "SHADING_MODE_UNSHADED")] # [doc = "Godot enumerator name: `SHADING_MODE_UNSHADED`"] pub const UNSHADED : ShadingMode = ShadingMode { ord : 0i32 } ; # [doc (alias = "SHADING_MODE_PER_PIXEL")] # [doc = "Godot enumerator name: `SHADING_MODE_PER_PIXEL`"] pub const PER_PIXEL : ShadingMode = ShadingMode { ord : 1i32 } ; # [doc (alias = "SHADING_MODE_PER_VERTEX")] # [doc = "Godot enumerator name: `SHADING_MODE_PER_VERTEX`"] pub const PER_VERTEX : ShadingMode = ShadingMode { ord : 2i32 } ; # [doc (alias = "SHADING_MODE_MAX")] # [doc = "Godot enumerator name: `SHADING_MODE_MAX`"] pub const MAX : ShadingMode = ShadingMode { ord : 3i32 } ; } impl std :: fmt :: Debug for ShadingMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "UNSHADED" , 1 => "PER_PIXEL" , 2 => "PER_VERTEX" , 3 => "MAX" , _ => { return f . debug_struct ("ShadingMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for ShadingMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "UNSHADED" , 1 => "PER_PIXEL" , 2 => "PER_VERTEX" , 3 => "MAX" , _ => "" , } } fn values () -> & 'static [Self] { & [ShadingMode :: UNSHADED , ShadingMode :: PER_PIXEL , ShadingMode :: PER_VERTEX , ShadingMode :: MAX ,] } } impl crate :: meta :: GodotType for ShadingMode { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [doc = "Declared by class [`BaseMaterial3D`][crate::classes::BaseMaterial3D]."] pub struct Flags { ord : i32 } impl Flags { # [doc (alias = "FLAG_DISABLE_DEPTH_TEST")] # [doc = "Godot enumerator name: `FLAG_DISABLE_DEPTH_TEST`"] pub const DISABLE_DEPTH_TEST : Flags = Flags { ord : 0i32 } ; # [doc (alias = "FLAG_ALBEDO_FROM_VERTEX_COLOR")] # [doc = "Godot enumerator name: `FLAG_ALBEDO_FROM_VERTEX_COLOR`"] pub const ALBEDO_FROM_VERTEX_COLOR : Flags = Flags { ord : 1i32 } ; # [doc (alias = "FLAG_SRGB_VERTEX_COLOR")] # [doc = "Godot enumerator name: `FLAG_SRGB_VERTEX_COLOR`"] pub const SRGB_VERTEX_COLOR : Flags = Flags { ord : 2i32 } ; # [doc (alias = "FLAG_USE_POINT_SIZE")] # [doc = "Godot enumerator name: `FLAG_USE_POINT_SIZE`"] pub const USE_POINT_SIZE : Flags = Flags { ord : 3i32 } ; # [doc (alias = "FLAG_FIXED_SIZE")] # [doc = "Godot enumerator name: `FLAG_FIXED_SIZE`"] pub const FIXED_SIZE : Flags = Flags { ord : 4i32 } ; # [doc (alias = "FLAG_BILLBOARD_KEEP_SCALE")] # [doc = "Godot enumerator name: `FLAG_BILLBOARD_KEEP_SCALE`"] pub const BILLBOARD_KEEP_SCALE : Flags = Flags { ord : 5i32 } ; # [doc (alias = "FLAG_MAX")] # [doc = "Godot enumerator name: `FLAG_MAX`"] pub const MAX : Flags = Flags { ord : 22i32 } ; } impl std :: fmt :: Debug for Flags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "DISABLE_DEPTH_TEST" , 1 => "ALBEDO_FROM_VERTEX_COLOR" , 2 => "SRGB_VERTEX_COLOR" , 3 => "USE_POINT_SIZE" , 4 => "FIXED_SIZE" , 5 => "BILLBOARD_KEEP_SCALE" , 22 => "MAX" , _ => { return f . debug_struct ("Flags") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for Flags { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 | ord @ 4i32 | ord @ 5i32 | ord @ 22i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "DISABLE_DEPTH_TEST" , 1 => "ALBEDO_FROM_VERTEX_COLOR" , 2 => "SRGB_VERTEX_COLOR" , 3 => "USE_POINT_SIZE" , 4 => "FIXED_SIZE" , 5 => "BILLBOARD_KEEP_SCALE" , 22 => "MAX" , _ => "" , } } fn values () -> & 'static [Self] { & [Flags :: DISABLE_DEPTH_TEST , Flags :: ALBEDO_FROM_VERTEX_COLOR , Flags :: SRGB_VERTEX_COLOR , Flags :: USE_POINT_SIZE , Flags :: FIXED_SIZE , Flags :: BILLBOARD_KEEP_SCALE , Flags :: MAX ,] } } impl crate :: meta :: GodotType for Flags { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } }