// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{FontHandle, GlyphSize};
use core::fmt;

/// A symbol from the catalog of a symbol font.
#[derive(Clone)]
pub struct Glyph {
    size: GlyphSize,
    name: String,
    fields: Vec<String>,
    font: FontHandle,
}

impl Glyph {
    /// Builds a glyph from the fields of one catalog line.
    ///
    /// The first field names the symbol; one pair of enclosing double quotes
    /// is removed from it. Returns `None` if the name is empty.
    pub fn from_record(size: GlyphSize, fields: Vec<String>, font: &FontHandle) -> Option<Self> {
        let first = fields.first()?.trim();
        let name = first
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(first);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            size,
            name: name.to_owned(),
            fields,
            font: font.clone(),
        })
    }

    /// Returns the symbol name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the requested rendering size.
    pub fn size(&self) -> GlyphSize {
        self.size
    }

    /// Returns the raw fields of the catalog line, including the name.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the font the glyph belongs to.
    pub fn font(&self) -> &FontHandle {
        &self.font
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Glyph")
            .field("size", &self.size)
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
