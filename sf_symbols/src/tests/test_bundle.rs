// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::TestEnv;
use crate::bundle::{bundle_identifier, find_resource};
use crate::{AppBundles, BundleLocator, COMPANION_BUNDLE_ID};

#[test]
fn locates_matching_bundles() {
    let env = TestEnv::new();
    let second = env.app_bundle("Applications/Symbols 2.app", COMPANION_BUNDLE_ID, None);
    let first = env.app_bundle("Applications/SF Symbols.app", COMPANION_BUNDLE_ID, None);
    env.app_bundle("Applications/Other.app", "com.example.other", None);
    env.app_bundle("Applications/Plain", COMPANION_BUNDLE_ID, None);
    env.write("Applications/Notes.app", b"not a directory");
    let mut bundles = AppBundles::with_paths([env.path("Applications")]);
    assert_eq!(bundles.locate(COMPANION_BUNDLE_ID), [first, second]);
    assert!(bundles.locate("com.example.missing").is_empty());
}

#[test]
fn searches_every_directory() {
    let env = TestEnv::new();
    let system = env.app_bundle("System/SF Symbols.app", COMPANION_BUNDLE_ID, None);
    let user = env.app_bundle("User/SF Symbols.app", COMPANION_BUNDLE_ID, None);
    let mut bundles = AppBundles::with_paths([
        env.path("Missing"),
        env.path("User"),
        env.path("System"),
    ]);
    assert_eq!(bundles.locate(COMPANION_BUNDLE_ID), [user, system]);
}

#[test]
fn bundles_are_not_searched_recursively() {
    let env = TestEnv::new();
    env.app_bundle("Applications/Tools/SF Symbols.app", COMPANION_BUNDLE_ID, None);
    let mut bundles = AppBundles::with_paths([env.path("Applications")]);
    assert!(bundles.locate(COMPANION_BUNDLE_ID).is_empty());
}

#[test]
fn reads_bundle_identifier() {
    let env = TestEnv::new();
    let app = env.app_bundle("SF Symbols.app", COMPANION_BUNDLE_ID, None);
    assert_eq!(bundle_identifier(&app).as_deref(), Some(COMPANION_BUNDLE_ID));

    let broken = env.path("Broken.app");
    env.write("Broken.app/Contents/Info.plist", b"<plist><dict>");
    assert_eq!(bundle_identifier(&broken), None);

    let missing = env.path("Missing.app");
    assert_eq!(bundle_identifier(&missing), None);

    env.write(
        "Untagged.app/Contents/Info.plist",
        br#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0"><dict><key>CFBundleName</key><string>Untagged</string></dict></plist>"#,
    );
    assert_eq!(bundle_identifier(&env.path("Untagged.app")), None);
}

#[test]
fn finds_resources() {
    let env = TestEnv::new();
    let app = env.app_bundle(
        "SF Symbols.app",
        COMPANION_BUNDLE_ID,
        Some(("Symbols.ttf", &b"font"[..])),
    );
    let nested = env.write("SF Symbols.app/Contents/Resources/Fonts/Nested.ttf", b"font");
    assert_eq!(
        find_resource(&app, "Symbols.ttf"),
        Some(app.join("Contents/Resources/Symbols.ttf"))
    );
    assert_eq!(find_resource(&app, "Nested.ttf"), Some(nested));
    assert_eq!(find_resource(&app, "Missing.ttf"), None);
    assert_eq!(find_resource(&app, "Fonts"), None);
}
