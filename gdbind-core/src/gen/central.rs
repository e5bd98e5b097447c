pub mod global_enums { # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] pub struct Side { ord : i32 } impl Side { # [doc (alias = "SIDE_LEFT")] # [doc = "Godot enumerator name: `SIDE_LEFT`"] pub const LEFT : Side = Side { ord : 0i32 } ; # [doc (alias = "SIDE_TOP")] # [doc = "Godot enumerator name: `SIDE_TOP`"] pub const TOP : Side = Side { ord : 1i32 } ; # [doc (alias = "SIDE_RIGHT")] # [doc = "Godot enumerator name: `SIDE_RIGHT`"] pub const RIGHT : Side = Side { ord : 2i32 } ; # [doc (alias = "SIDE_BOTTOM")] # [doc = "Godot enumerator name: `SIDE_BOTTOM`"] pub const BOTTOM : Side = Side { ord : 3i32 } ; } impl std :: fmt :: Debug for Side { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "LEFT" , 1 => "TOP" , 2 => "RIGHT" , 3 => "BOTTOM" , _ => { return f . debug_struct ("Side") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for Side { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "LEFT" , 1 => "TOP" , 2 => "RIGHT" , 3 => "BOTTOM" , _ => "" , } } fn values () -> & 'static [Self] { & [Side :: LEFT , Side :: TOP , Side :: RIGHT , Side :: BOTTOM ,] } } impl crate :: meta :: GodotType for Side { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] pub struct HorizontalAlignment { ord : i32 } impl HorizontalAlignment { # [doc (alias = "HORIZONTAL_ALIGNMENT_LEFT")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_LEFT`"] pub const LEFT : HorizontalAlignment = HorizontalAlignment { ord : 0i32 } ; # [doc (alias = "HORIZONTAL_ALIGNMENT_CENTER")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_CENTER`"] pub const CENTER : HorizontalAlignment = HorizontalAlignment { ord : 1i32 } ; # [doc (alias = "HORIZONTAL_ALIGNMENT_RIGHT")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_RIGHT`"] pub const RIGHT : HorizontalAlignment = HorizontalAlignment { ord : 2i32 } ; # [doc (alias = "HORIZONTAL_ALIGNMENT_FILL")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_FILL`"] pub const FILL : HorizontalAlignment = HorizontalAlignment { ord : 3i32 } ; } impl std :: fmt :: Debug for HorizontalAlignment { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "LEFT" , 1 => "CENTER" , 2 => "RIGHT" , 3 => "FILL" , _ => { return f . debug_struct ("HorizontalAlignment") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for HorizontalAlignment { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "LEFT" , 1 => "CENTER" , 2 => "RIGHT" , 3 => "FILL" , _ => "" , } } fn values () -> & 'static [Self] { & [HorizontalAlignment :: LEFT , HorizontalAlignment :: CENTER , HorizontalAlignment :: RIGHT , HorizontalAlignment :: FILL ,] } } impl crate :: meta :: GodotType for HorizontalAlignment { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] pub struct VerticalAlignment { ord : i32 } impl VerticalAlignment { # [doc (alias = "VERTICAL_ALIGNMENT_TOP")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_TOP`"] pub const TOP : VerticalAlignment = VerticalAlignment { ord : 0i32 } ; # [doc (alias = "VERTICAL_ALIGNMENT_CENTER")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_CENTER`"] pub const CENTER : VerticalAlignment = VerticalAlignment { ord : 1i32 } ; # [doc (alias = "VERTICAL_ALIGNMENT_BOTTOM")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_BOTTOM`"] pub const BOTTOM : VerticalAlignment = VerticalAlignment { ord : 2i32 } ; # [doc (alias = "VERTICAL_ALIGNMENT_FILL")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_FILL`"] pub const FILL : VerticalAlignment = VerticalAlignment { ord : 3i32 } ; } impl std :: fmt :: Debug for VerticalAlignment { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "TOP" , 1 => "CENTER" , 2 => "BOTTOM" , 3 => "FILL" , _ => { return f . debug_struct ("VerticalAlignment") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for VerticalAlignment { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "TOP" , 1 => "CENTER" , 2 => "BOTTOM" , 3 => "FILL" , _ => "" , } } fn values () -> & 'static [Self] { & [VerticalAlignment :: TOP , VerticalAlignment :: CENTER , VerticalAlignment :: BOTTOM , VerticalAlignment :: FILL ,] } } impl crate :: meta :: GodotType for VerticalAlignment { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default)] pub struct MouseButtonMask { ord : u64 } impl MouseButtonMask { # [doc (alias = "MOUSE_BUTTON_MASK_LEFT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_LEFT`"] pub const LEFT : MouseButtonMask = MouseButtonMask { ord : 0x0000000000000001 } ; # [doc (alias = "MOUSE_BUTTON_MASK_RIGHT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_RIGHT`"] pub const RIGHT : MouseButtonMask = MouseButtonMask { ord : 0x0000000000000002 } ; # [doc (alias = "MOUSE_BUTTON_MASK_MIDDLE")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_MIDDLE`"] pub const MIDDLE : MouseButtonMask = MouseButtonMask { ord : 0x0000000000000004 } ; # [doc (alias = "MOUSE_BUTTON_MASK_MB_XBUTTON1")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_MB_XBUTTON1`"] pub const MB_XBUTTON1 : MouseButtonMask = MouseButtonMask { ord : 0x0000000000000080 } ; # [doc (alias = "MOUSE_BUTTON_MASK_MB_XBUTTON2")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_MB_XBUTTON2`"] pub const MB_XBUTTON2 : MouseButtonMask = MouseButtonMask { ord : 0x0000000000000100 } ; } impl std :: fmt :: Debug for MouseButtonMask { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 1 => "LEFT" , 2 => "RIGHT" , 4 => "MIDDLE" , 128 => "MB_XBUTTON1" , 256 => "MB_XBUTTON2" , _ => { return f . debug_struct ("MouseButtonMask") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineBitfield for MouseButtonMask { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl crate :: meta :: GodotType for MouseButtonMask { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : ffi as u64 }) } } impl std :: ops :: BitOr for MouseButtonMask { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] pub struct Error { ord : i32 } impl Error { pub const OK : Error = Error { ord : 0i32 } ; pub const FAILED : Error = Error { ord : 1i32 } ; pub const ERR_UNAVAILABLE : Error = Error { ord : 2i32 } ; pub const ERR_UNCONFIGURED : Error = Error { ord : 3i32 } ; } impl std :: fmt :: Debug for Error { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = match self . ord { 0 => "OK" , 1 => "FAILED" , 2 => "ERR_UNAVAILABLE" , 3 => "ERR_UNCONFIGURED" , _ => { return f . debug_struct ("Error") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: obj :: EngineEnum for Error { fn try_from_ord (ord : i32) -> Option < Self > { match ord { ord @ 0i32 | ord @ 1i32 | ord @ 2i32 | ord @ 3i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "OK" , 1 => "FAILED" , 2 => "ERR_UNAVAILABLE" , 3 => "ERR_UNCONFIGURED" , _ => "" , } } fn values () -> & 'static [Self] { & [Error :: OK , Error :: FAILED , Error :: ERR_UNAVAILABLE , Error :: ERR_UNCONFIGURED ,] } } impl crate :: meta :: GodotType for Error { type Ffi = i64 ; fn to_ffi (& self) -> i64 { self . ord as i64 } fn try_from_ffi (ffi : i64) -> Result < Self , crate :: meta :: ConvertError > { i32 :: try_from (ffi) . ok () . and_then (< Self as crate :: obj :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: ConvertError :: with_kind_value (crate :: meta :: ErrorKind :: InvalidEnum , ffi)) } } }