// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup of installed system fonts.

#[cfg(target_vendor = "apple")]
#[path = "apple.rs"]
mod system;

#[cfg(target_os = "windows")]
#[path = "windows.rs"]
mod system;

#[cfg(not(any(target_vendor = "apple", target_os = "windows")))]
#[path = "unix.rs"]
mod system;

mod family_name;
mod matching;
mod scan;

use super::FontHandle;
use std::path::{Path, PathBuf};

use family_name::NameKey;

/// Maximum directory depth searched below each font directory.
const MAX_SCAN_DEPTH: u32 = 8;

/// Service that finds an installed font by family name.
pub trait SystemFontLookup {
    /// Returns the face of the family `family` that best matches `weight`,
    /// given on the `usWeightClass` scale, at the point size `size`.
    fn find_family(&mut self, family: &str, weight: f32, size: f32) -> Option<FontHandle>;
}

impl<T: SystemFontLookup + ?Sized> SystemFontLookup for &mut T {
    fn find_family(&mut self, family: &str, weight: f32, size: f32) -> Option<FontHandle> {
        (**self).find_family(family, weight, size)
    }
}

/// Installed fonts found by scanning font directories.
///
/// The directories are scanned on every lookup, so fonts installed while
/// the program runs are found.
#[derive(Clone, Debug)]
pub struct SystemFonts {
    paths: Vec<PathBuf>,
}

impl SystemFonts {
    /// Creates a lookup over the default font directories of the platform.
    pub fn new() -> Self {
        Self::with_paths(system::font_dirs())
    }

    /// Creates a lookup over the given font directories.
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

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemFontLookup for SystemFonts {
    fn find_family(&mut self, family: &str, weight: f32, size: f32) -> Option<FontHandle> {
        let key = NameKey::new(family);
        let faces = scan::scan_family(
            self.paths.iter().map(PathBuf::as_path),
            &key,
            MAX_SCAN_DEPTH,
        );
        let weights: Vec<f32> = faces.iter().map(|face| face.weight).collect();
        let Some(index) = matching::match_weight(&weights, weight) else {
            log::debug!("no installed faces for family {family:?}");
            return None;
        };
        let face = &faces[index];
        log::debug!(
            "matched {family:?} at {size}pt to {} (index {}, weight {})",
            face.path.display(),
            face.index,
            face.weight
        );
        FontHandle::from_path(&face.path, face.index)
            .inspect_err(|err| log::debug!("{err}"))
            .ok()
    }
}

/// Returns the value of an environment variable as a path, if set and not
/// empty.
fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns `base` joined with `rest` when `base` is available.
fn under(base: Option<&Path>, rest: &str) -> Option<PathBuf> {
    base.map(|base| base.join(rest))
}
