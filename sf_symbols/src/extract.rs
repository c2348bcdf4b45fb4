// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding of the glyph catalog embedded in a symbol font.

use super::{decrypt, record, Error, FontDescriptor, FontHandle, Glyph};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use read_fonts::types::Tag;

/// Name of the table holding the glyph catalog.
pub const SYMP_TABLE: &str = "symp";

const LINE_TERMINATOR: &str = "\r\n";

/// Packs a four character table name into its tag, most significant byte
/// first.
///
/// ```
/// use sf_symbols::{table_tag, Tag};
///
/// assert_eq!(table_tag("symp"), Tag::new(b"symp"));
/// ```
pub fn table_tag(name: &str) -> Tag {
    let code = name
        .bytes()
        .fold(0_u32, |acc, byte| (acc << 8) + u32::from(byte));
    Tag::from_u32(code)
}

/// Extracts the glyph catalog of a font.
///
/// Returns `None` if the font has no readable catalog. Lines that don't
/// produce a [`Glyph`] are skipped.
pub fn extract_glyphs(font: &FontHandle, descriptor: &FontDescriptor) -> Option<Vec<Glyph>> {
    let records = match try_extract_records(font) {
        Ok(records) => records,
        Err(err) => {
            log::debug!("no catalog in {font:?}: {err}");
            return None;
        }
    };
    let glyphs = records
        .into_iter()
        .filter_map(|fields| {
            let glyph = Glyph::from_record(descriptor.glyph_size, fields, font);
            if glyph.is_none() {
                log::trace!("skipping catalog line without a symbol name");
            }
            glyph
        })
        .collect();
    Some(glyphs)
}

/// Decodes the catalog of a font into the fields of each glyph line.
///
/// The header and summary lines of the catalog are not included.
pub fn try_extract_records(font: &FontHandle) -> Result<Vec<Vec<String>>, Error> {
    let font = font.font_ref()?;
    let table = font
        .table_data(table_tag(SYMP_TABLE))
        .ok_or(Error::MissingTable)?;
    let plaintext = decode_table(table.as_bytes())?;
    Ok(catalog_lines(&plaintext)
        .into_iter()
        .map(record::tokenize)
        .collect())
}

/// Turns the raw table into the catalog text.
pub(crate) fn decode_table(table: &[u8]) -> Result<String, Error> {
    let text = core::str::from_utf8(table).map_err(|_| Error::BadEncoding)?;
    let ciphertext = STANDARD.decode(text).map_err(|_| Error::BadBase64)?;
    let plaintext = decrypt::try_decrypt(&ciphertext)?;
    String::from_utf8(plaintext).map_err(|_| Error::BadEncoding)
}

/// Returns the glyph lines of the catalog text, without the leading header
/// and the trailing summary line.
pub(crate) fn catalog_lines(text: &str) -> Vec<&str> {
    let text = text.strip_suffix(LINE_TERMINATOR).unwrap_or(text);
    let lines: Vec<&str> = text.split(LINE_TERMINATOR).collect();
    if lines.len() < 2 {
        return Vec::new();
    }
    lines[1..lines.len() - 1].to_vec()
}
