// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod env;
mod fonts;

pub(crate) use env::TestEnv;
pub(crate) use fonts::{encrypt, font_data, handle, named_font, symbol_font, symp_table};
