// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanning of font directories.

use super::NameKey;
use crate::font::load_blob;
use hashbrown::HashSet;
use read_fonts::{
    tables::name::NameId,
    FileRef, FontRef, TableProvider as _,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// English (United States) on the Windows platform.
const WINDOWS_ENGLISH: u16 = 0x409;
const PLATFORM_MAC: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;

/// A face found while scanning.
#[derive(Clone, Debug)]
pub(super) struct ScannedFace {
    pub(super) path: PathBuf,
    pub(super) index: u32,
    pub(super) weight: f32,
}

/// Collects all faces of the family with the given name below `roots`.
pub(super) fn scan_family<'a>(
    roots: impl Iterator<Item = &'a Path>,
    family: &NameKey,
    max_depth: u32,
) -> Vec<ScannedFace> {
    let mut files = Vec::new();
    let mut visited = HashSet::new();
    for root in roots {
        collect_font_files(root, max_depth, &mut visited, &mut files);
    }
    let mut faces = Vec::new();
    for path in files {
        scan_file(&path, family, &mut faces);
    }
    faces
}

fn collect_font_files(
    dir: &Path,
    depth: u32,
    visited: &mut HashSet<PathBuf>,
    files: &mut Vec<PathBuf>,
) {
    // Symlinked directories may form cycles.
    let Ok(canonical) = fs::canonicalize(dir) else {
        return;
    };
    if !visited.insert(canonical) {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut entries: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    // Sorted for deterministic lookups.
    entries.sort();
    for path in entries {
        if path.is_dir() {
            if depth > 0 {
                collect_font_files(&path, depth - 1, visited, files);
            }
        } else if is_font_file(&path) {
            files.push(path);
        }
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

fn scan_file(path: &Path, family: &NameKey, faces: &mut Vec<ScannedFace>) {
    let Ok(blob) = load_blob(path) else {
        return;
    };
    let Ok(file) = FileRef::new(blob.data()) else {
        return;
    };
    for (index, font) in (0_u32..).zip(file.fonts()) {
        let Ok(font) = font else {
            continue;
        };
        let matches = family_name(&font).is_some_and(|name| &name == family);
        if matches {
            faces.push(ScannedFace {
                path: path.to_owned(),
                index,
                weight: weight_class(&font),
            });
        }
    }
}

/// Returns the key of the typographic family name of a face, falling back
/// to the legacy family name.
fn family_name(font: &FontRef<'_>) -> Option<NameKey> {
    let name = font.name().ok()?;
    let data = name.string_data();
    [NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME]
        .into_iter()
        .find_map(|id| {
            let records = name
                .name_record()
                .iter()
                .filter(|record| record.name_id() == id);
            let english = records.clone().find(|record| {
                (record.platform_id() == PLATFORM_WINDOWS
                    && record.language_id() == WINDOWS_ENGLISH)
                    || (record.platform_id() == PLATFORM_MAC && record.language_id() == 0)
            });
            let record = english.or_else(|| records.clone().next())?;
            let string = record.string(data).ok()?;
            Some(NameKey::from_chars(string.chars()))
        })
}

fn weight_class(font: &FontRef<'_>) -> f32 {
    font.os2()
        .map(|os2| f32::from(os2.us_weight_class()))
        .unwrap_or(400.0)
}
