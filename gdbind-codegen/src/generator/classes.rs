/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::context::Context;
use crate::generator::functions_common::{FnDefinitions, make_method_definition};
use crate::generator::{constants, enums};
use crate::models::domain::{Class, ExtensionApi, HostConversion, ModName, PropertyAccessor, TyName};
use crate::util;
use crate::SubmitFn;
use proc_macro2::TokenStream;
use quote::quote;
use std::path::Path;

pub fn generate_class_files(api: &ExtensionApi, ctx: &Context, gen_path: &Path, submit_fn: &mut SubmitFn) {
    gdbind_bindings::remove_dir_all_reliable(gen_path);
    std::fs::create_dir_all(gen_path)
        .unwrap_or_else(|e| panic!("failed to create classes dir {};\n\t{}", gen_path.display(), e));

    let mut modules = vec![];
    for class in api.classes.iter() {
        let code = make_class(class, ctx);
        let out_path = gen_path.join(format!("{}.rs", class.mod_name.rust_mod));

        submit_fn(out_path, code);

        modules.push(GeneratedClassModule {
            class_name: class.name.clone(),
            module_name: class.mod_name.clone(),
        });
    }

    let out_path = gen_path.join("mod.rs");
    let mod_contents = make_class_module_file(&modules);

    submit_fn(out_path, mod_contents);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

struct GeneratedClassModule {
    class_name: TyName,
    module_name: ModName,
}

pub(crate) fn make_class(class: &Class, ctx: &Context) -> TokenStream {
    let class_name = &class.name;
    let godot_class_str = util::strlit(&class_name.godot_ty);

    let base_ty = match &class.base_class {
        Some(base) => quote! { crate::classes::#base },
        None => quote! { crate::obj::NoBase },
    };

    let init_level = class.init_level.to_init_level();

    let FnDefinitions {
        functions: methods,
        builders,
    } = FnDefinitions::expand(class.methods.iter().map(make_method_definition));

    let accessors = class.properties.iter().map(make_property_accessor);

    let enums = enums::make_enums(&class.enums);
    let constants = constants::make_constants(&class.constants);
    let deref_impl = make_deref_impl(class);
    let inherits_impls = make_inherits_impls(class);
    let godot_default_impl = make_godot_default_impl(class);
    let (assoc_memory, assoc_dyn_memory) = make_bounds(class, ctx);

    let class_doc = make_class_doc(class);
    let module_doc = format!(
        "Sidecar module for class [`{0}`][crate::classes::{0}].",
        class_name.rust_ty
    );

    let imports = util::make_imports();

    quote! {
        #![doc = #module_doc]

        #imports

        pub(super) mod re_export {
            use super::*;

            #[doc = #class_doc]
            #[repr(C)]
            #[derive(Debug)]
            pub struct #class_name {
                object_ptr: sys::GDExtensionObjectPtr,
                instance_id: Option<crate::obj::InstanceId>,
            }

            impl #class_name {
                #methods

                #( #accessors )*

                fn __checked_id(&self) -> Option<crate::obj::InstanceId> {
                    self.instance_id
                }
            }

            impl crate::obj::GodotClass for #class_name {
                type Base = #base_ty;

                fn class_name() -> ClassName {
                    ClassName::new_static(#godot_class_str)
                }

                const INIT_LEVEL: crate::init::InitLevel = #init_level;
            }

            unsafe impl crate::obj::Bounds for #class_name {
                type Memory = crate::obj::bounds::#assoc_memory;
                type DynMemory = crate::obj::bounds::#assoc_dyn_memory;
            }

            impl crate::obj::EngineClass for #class_name {
                fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
                    self.object_ptr
                }
            }

            #inherits_impls
            #godot_default_impl
            #deref_impl
        }

        #builders
        #enums
        #constants
    }
}

fn make_class_doc(class: &Class) -> String {
    let mut doc = format!("Godot class `{}`.", class.name.godot_ty);

    if let Some(base) = &class.base_class {
        doc.push_str(&format!("\n\nInherits [`{0}`][crate::classes::{0}].", base.rust_ty));
    }

    if class.has_sidecar_items() {
        doc.push_str(&format!(
            "\n\nRelated symbols live in the [`{0}`][crate::classes::{0}] module.",
            class.mod_name.rust_mod
        ));
    }

    doc
}

/// `Memory` decides how `Gd` manages the lifetime, `DynMemory` whether this is decided per instance.
///
/// Only `Object` itself may hold either kind of object, so its memory is determined dynamically.
fn make_bounds(class: &Class, ctx: &Context) -> (proc_macro2::Ident, proc_macro2::Ident) {
    let memory = if ctx.is_refcounted(&class.name.godot_ty) {
        "MemRefCounted"
    } else {
        "MemManual"
    };

    let dyn_memory = if class.name.godot_ty == "Object" {
        "MemDynamic"
    } else {
        memory
    };

    (util::ident(memory), util::ident(dyn_memory))
}

fn make_inherits_impls(class: &Class) -> TokenStream {
    let class_name = &class.name;
    let bases = class.all_bases.iter();

    quote! {
        #(
            unsafe impl crate::obj::Inherits<crate::classes::#bases> for #class_name {}
        )*
    }
}

fn make_godot_default_impl(class: &Class) -> TokenStream {
    if !class.is_instantiable {
        return TokenStream::new();
    }

    let class_name = &class.name;

    quote! {
        impl crate::obj::cap::GodotDefault for #class_name {
            fn __godot_default() -> crate::obj::Gd<Self> {
                crate::obj::construct_engine_object::<Self>()
            }
        }
    }
}

fn make_deref_impl(class: &Class) -> TokenStream {
    let Some(base) = &class.base_class else {
        return TokenStream::new();
    };

    let class_name = &class.name;

    // All engine classes share the same layout, a base view of an object is the object itself.
    quote! {
        impl std::ops::Deref for #class_name {
            type Target = crate::classes::#base;

            fn deref(&self) -> &Self::Target {
                // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments.
                unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
            }
        }

        impl std::ops::DerefMut for #class_name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see above.
                unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
            }
        }
    }
}

fn make_property_accessor(property: &PropertyAccessor) -> TokenStream {
    let PropertyAccessor {
        name,
        godot_name,
        getter,
        conversion,
        ..
    } = property;

    let return_ty = property.host_return_tokens();
    let doc = format!("Value of property `{godot_name}`, read through [`{getter}()`][Self::{getter}].");

    let body = match conversion {
        HostConversion::Identity => quote! { self.#getter() },
        HostConversion::ToRustString => quote! { self.#getter().to_string() },
    };

    quote! {
        #[doc = #doc]
        pub fn #name(&self) -> #return_ty {
            #body
        }
    }
}

fn make_class_module_file(modules: &[GeneratedClassModule]) -> TokenStream {
    let decls = modules.iter().map(|m| {
        let GeneratedClassModule {
            module_name,
            class_name,
        } = m;

        quote! {
            pub mod #module_name;
            pub use #module_name::re_export::#class_name;
        }
    });

    quote! {
        #( #decls )*
    }
}
