// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for a resolved symbol font.

use super::{extract, Error, FontDescriptor, Glyph, Weight};
use core::fmt;
use linebender_resource_handle::Blob;
use read_fonts::{FontRef, ReadError};
use std::{path::Path, sync::Arc};

/// Shared handle to the data of a single font face.
///
/// Cloning a handle is cheap; the underlying data is reference counted.
#[derive(Clone)]
pub struct FontHandle {
    data: Blob<u8>,
    index: u32,
    path: Option<Arc<Path>>,
}

impl FontHandle {
    /// Creates a handle for the face at `index` in the given font data.
    pub fn new(data: Blob<u8>, index: u32) -> Self {
        Self {
            data,
            index,
            path: None,
        }
    }

    /// Creates a handle for the face at `index` in the font file at `path`.
    pub fn from_path(path: &Path, index: u32) -> Result<Self, Error> {
        let data = load_blob(path)?;
        Ok(Self {
            data,
            index,
            path: Some(path.into()),
        })
    }

    /// Returns the font data. For collections this is the whole file.
    pub fn data(&self) -> &Blob<u8> {
        &self.data
    }

    /// Returns the index of the face in a collection.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the path the font was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Parses the face.
    pub fn font_ref(&self) -> Result<FontRef<'_>, ReadError> {
        FontRef::from_index(self.data.data(), self.index)
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("data", &format_args!("[{} bytes]", self.data.data().len()))
            .field("index", &self.index)
            .field("path", &self.path)
            .finish()
    }
}

/// A symbol font together with its glyph catalog.
#[derive(Clone, Debug)]
pub struct Font {
    handle: FontHandle,
    weight: Weight,
    size: f32,
    glyphs: Vec<Glyph>,
}

impl Font {
    /// Builds a font from the face in the file at `path`.
    ///
    /// Returns `None` if the file can't be loaded or has no readable
    /// catalog.
    pub fn from_path(path: &Path, descriptor: &FontDescriptor) -> Option<Self> {
        match FontHandle::from_path(path, 0) {
            Ok(handle) => Self::from_handle(handle, descriptor),
            Err(err) => {
                log::debug!("{err}");
                None
            }
        }
    }

    /// Builds a font from a handle by extracting its catalog.
    pub fn from_handle(handle: FontHandle, descriptor: &FontDescriptor) -> Option<Self> {
        let glyphs = extract::extract_glyphs(&handle, descriptor)?;
        Some(Self {
            handle,
            weight: descriptor.weight,
            size: descriptor.point_size,
            glyphs,
        })
    }

    /// Returns the underlying font handle.
    pub fn handle(&self) -> &FontHandle {
        &self.handle
    }

    /// Returns the weight the font was resolved for.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the point size the font was resolved for.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the glyphs in catalog order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Returns the first glyph with the given name.
    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.iter().find(|glyph| glyph.name() == name)
    }

    /// Returns an iterator over the glyph names in catalog order.
    pub fn glyph_names(&self) -> impl Iterator<Item = &str> + '_ + Clone {
        self.glyphs.iter().map(Glyph::name)
    }

    /// Returns the number of glyphs in the catalog.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the catalog has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[expect(unsafe_code, reason = "Font files are memory mapped read-only.")]
pub(crate) fn load_blob(path: &Path) -> Result<Blob<u8>, Error> {
    let io_err = |err: std::io::Error| Error::Io {
        path: path.into(),
        kind: err.kind(),
    };
    let file = std::fs::File::open(path).map_err(io_err)?;
    // SAFETY: the mapping is only read, and font files are not expected to
    // change while they are in use.
    let mapped = unsafe { memmap2::Mmap::map(&file) }.map_err(io_err)?;
    Ok(Blob::new(Arc::new(mapped)))
}
