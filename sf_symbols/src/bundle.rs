// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discovery of installed application bundles.

use std::{
    fs,
    path::{Path, PathBuf},
};

const BUNDLE_EXTENSION: &str = "app";
const INFO_PLIST: &str = "Contents/Info.plist";
const BUNDLE_IDENTIFIER_KEY: &str = "CFBundleIdentifier";

/// Directories inside a bundle that may hold font resources.
const RESOURCE_DIRS: &[&str] = &["Contents/Resources", "Contents/Resources/Fonts"];

/// Service that finds installed copies of an application.
pub trait BundleLocator {
    /// Returns the bundle directories of all installed applications with the
    /// given bundle identifier.
    fn locate(&mut self, bundle_id: &str) -> Vec<PathBuf>;
}

impl<T: BundleLocator + ?Sized> BundleLocator for &mut T {
    fn locate(&mut self, bundle_id: &str) -> Vec<PathBuf> {
        (**self).locate(bundle_id)
    }
}

/// Application bundles found by scanning application directories.
#[derive(Clone, Debug)]
pub struct AppBundles {
    paths: Vec<PathBuf>,
}

impl AppBundles {
    /// Creates a locator over the default application directories of the
    /// platform. Only Apple platforms have any.
    pub fn new() -> Self {
        Self::with_paths(default_app_dirs())
    }

    /// Creates a locator over the given application directories.
    pub fn with_paths(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the directories that are searched.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Default for AppBundles {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleLocator for AppBundles {
    fn locate(&mut self, bundle_id: &str) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for dir in &self.paths {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            let mut bundles: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| is_bundle(path))
                .collect();
            bundles.sort();
            found.extend(
                bundles
                    .into_iter()
                    .filter(|bundle| bundle_identifier(bundle).as_deref() == Some(bundle_id)),
            );
        }
        found
    }
}

fn is_bundle(path: &Path) -> bool {
    path.is_dir()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(BUNDLE_EXTENSION))
}

/// Reads the bundle identifier from the `Info.plist` of a bundle.
pub(crate) fn bundle_identifier(bundle: &Path) -> Option<String> {
    let info = plist::Value::from_file(bundle.join(INFO_PLIST))
        .inspect_err(|err| log::trace!("unreadable Info.plist in {}: {err}", bundle.display()))
        .ok()?;
    info.into_dictionary()?
        .remove(BUNDLE_IDENTIFIER_KEY)?
        .into_string()
}

/// Returns the path of the resource file `name` inside `bundle`, if present.
pub(crate) fn find_resource(bundle: &Path, name: &str) -> Option<PathBuf> {
    RESOURCE_DIRS
        .iter()
        .map(|dir| bundle.join(dir).join(name))
        .find(|path| path.is_file())
}

#[cfg(target_vendor = "apple")]
fn default_app_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/Applications"),
        PathBuf::from("/Applications/Utilities"),
        PathBuf::from("/System/Applications"),
    ];
    if let Some(home) = std::env::var_os("HOME").filter(|home| !home.is_empty()) {
        dirs.push(PathBuf::from(home).join("Applications"));
    }
    dirs
}

#[cfg(not(target_vendor = "apple"))]
fn default_app_dirs() -> Vec<PathBuf> {
    Vec::new()
}
