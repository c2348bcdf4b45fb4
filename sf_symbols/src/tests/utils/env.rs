// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// Temporary directory tree for tests that touch the file system.
pub(crate) struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create a temporary directory"),
        }
    }

    /// Returns the path of `rel` inside the environment.
    pub(crate) fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Writes `data` to `rel`, creating parent directories.
    pub(crate) fn write(&self, rel: &str, data: &[u8]) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create directories");
        }
        fs::write(&path, data).expect("failed to write file");
        path
    }

    /// Creates an application bundle `rel` with the given identifier and,
    /// optionally, a resource file.
    pub(crate) fn app_bundle(
        &self,
        rel: &str,
        bundle_id: &str,
        resource: Option<(&str, &[u8])>,
    ) -> PathBuf {
        let bundle = self.path(rel);
        self.write(&format!("{rel}/Contents/Info.plist"), info_plist(bundle_id).as_bytes());
        if let Some((name, data)) = resource {
            self.write(&format!("{rel}/Contents/Resources/{name}"), data);
        }
        bundle
    }
}

fn info_plist(bundle_id: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>{bundle_id}</string>
    <key>CFBundleName</key>
    <string>Symbols</string>
</dict>
</plist>
"#
    )
}

impl AsRef<Path> for TestEnv {
    fn as_ref(&self) -> &Path {
        self.dir.path()
    }
}
