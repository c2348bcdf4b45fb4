// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol font resolution and glyph catalog extraction.
//!
//! Symbol fonts carry a catalog of their glyphs in a private, encrypted
//! `symp` table. This crate locates a usable symbol font, either from an
//! explicit path, from the installed system fonts or from the fallback font
//! shipped inside the companion symbols application, and decodes that table
//! into an ordered list of [`Glyph`] records.
//!
//! ```no_run
//! use sf_symbols::{FontDescriptor, Weight};
//!
//! let descriptor = FontDescriptor {
//!     weight: Weight::Bold,
//!     ..Default::default()
//! };
//! if let Some(font) = sf_symbols::resolve(None, &descriptor) {
//!     for name in font.glyph_names() {
//!         println!("{name}");
//!     }
//! }
//! ```
//!
//! Every stage reports failure as absence. The `try_*` variants of the
//! lower level operations return an [`Error`] describing why a stage failed.

mod backend;
mod bundle;
mod decrypt;
mod descriptor;
mod error;
mod extract;
mod font;
mod glyph;
mod record;
mod resolve;

#[cfg(test)]
mod tests;

pub use read_fonts::types::Tag;

pub use backend::{SystemFontLookup, SystemFonts};
pub use bundle::{AppBundles, BundleLocator};
pub use decrypt::{decrypt, try_decrypt};
pub use descriptor::{
    Family, FontDescriptor, GlyphSize, ParseDescriptorError, Variant, Weight,
};
pub use error::Error;
pub use extract::{extract_glyphs, table_tag, try_extract_records, SYMP_TABLE};
pub use font::{Font, FontHandle};
pub use glyph::Glyph;
pub use record::tokenize;
pub use resolve::{
    resolve, Candidate, Resolver, ResolverOptions, COMPANION_BUNDLE_ID, FALLBACK_FONT_NAME,
};
