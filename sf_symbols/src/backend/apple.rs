// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{env_path, under};
use std::path::PathBuf;

pub(super) fn font_dirs() -> Vec<PathBuf> {
    let home = env_path("HOME");
    [
        Some(PathBuf::from("/System/Library/Fonts")),
        Some(PathBuf::from("/Library/Fonts")),
        under(home.as_deref(), "Library/Fonts"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
