// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{env_path, under};
use std::path::PathBuf;

pub(super) fn font_dirs() -> Vec<PathBuf> {
    let home = env_path("HOME");
    let data_home = env_path("XDG_DATA_HOME").or_else(|| under(home.as_deref(), ".local/share"));
    [
        Some(PathBuf::from("/usr/share/fonts")),
        Some(PathBuf::from("/usr/local/share/fonts")),
        under(data_home.as_deref(), "fonts"),
        under(home.as_deref(), ".fonts"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
