pub const GODOT_VERSION_STRING : & str = "Godot Engine v4.3.stable.official" ; pub const GODOT_VERSION_MAJOR : u8 = 4u8 ; pub const GODOT_VERSION_MINOR : u8 = 3u8 ; pub const GODOT_VERSION_PATCH : u8 = 0u8 ; # [doc = r" Key of the builtin size table these bindings were generated for, e.g. `float_64`."] pub const BUILD_CONFIG : & str = "float_64" ; pub mod types { pub type OpaqueString = crate :: opaque :: Opaque < 8 > ; pub type OpaqueStringName = crate :: opaque :: Opaque < 8 > ; } # [doc = r" Byte sizes of builtin types, as declared by the engine for the current build configuration."] pub mod builtin_sizes { pub const STRING : usize = 8 ; pub const STRINGNAME : usize = 8 ; pub const VECTOR2 : usize = 8 ; pub const VECTOR3 : usize = 12 ; pub const COLOR : usize = 16 ; pub const RECT2 : usize = 16 ; pub const OBJECT : usize = 8 ; }