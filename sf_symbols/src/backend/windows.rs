// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{env_path, under};
use std::path::PathBuf;

pub(super) fn font_dirs() -> Vec<PathBuf> {
    let windir = env_path("WINDIR").unwrap_or_else(|| PathBuf::from("C:\\Windows"));
    let local_app_data = env_path("LOCALAPPDATA");
    [
        Some(windir.join("Fonts")),
        under(local_app_data.as_deref(), "Microsoft\\Windows\\Fonts"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
