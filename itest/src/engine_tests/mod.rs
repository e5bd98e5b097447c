/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod codegen_test;
mod default_param_test;
mod enum_test;
mod method_table_test;
mod node_test;
mod print_test;
mod property_test;
