// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builders for in-memory test fonts.

use crate::decrypt::{IV, KEY};
use crate::FontHandle;
use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use linebender_resource_handle::Blob;
use std::sync::Arc;
use write_fonts::{types::Tag, FontBuilder};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Encrypts `plaintext` the way catalogs are stored.
pub(crate) fn encrypt(plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(&KEY.into(), &IV.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Returns the contents of a `symp` table holding `catalog`.
pub(crate) fn symp_table(catalog: &str) -> Vec<u8> {
    STANDARD.encode(encrypt(catalog.as_bytes())).into_bytes()
}

/// Builds a font containing the given raw tables.
pub(crate) fn font_data(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut builder = FontBuilder::new();
    for (tag, data) in tables {
        builder.add_raw(Tag::new(tag), data.clone());
    }
    builder.build()
}

/// Builds a font with only a `symp` table holding `catalog`.
pub(crate) fn symbol_font(catalog: &str) -> Vec<u8> {
    font_data(&[(b"symp", symp_table(catalog))])
}

/// Builds a font with a family name, a weight class and, optionally, a
/// catalog.
pub(crate) fn named_font(family: &str, weight: u16, catalog: Option<&str>) -> Vec<u8> {
    let mut tables = vec![(b"name", name_table(family)), (b"OS/2", os2_table(weight))];
    if let Some(catalog) = catalog {
        tables.push((b"symp", symp_table(catalog)));
    }
    font_data(&tables)
}

/// Wraps font data in a handle.
pub(crate) fn handle(data: Vec<u8>) -> FontHandle {
    FontHandle::new(Blob::new(Arc::new(data)), 0)
}

/// A version 0 `name` table with a single Windows English family name.
fn name_table(family: &str) -> Vec<u8> {
    let string: Vec<u8> = family.encode_utf16().flat_map(u16::to_be_bytes).collect();
    let header_len = 6 + 12;
    let mut data = Vec::new();
    for value in [
        // version, count, storage offset
        0,
        1,
        header_len,
        // platform, encoding, language, name id, length, offset
        3,
        1,
        0x409,
        1,
        u16::try_from(string.len()).expect("family name fits in a name record"),
        0,
    ] {
        data.extend_from_slice(&value.to_be_bytes());
    }
    data.extend_from_slice(&string);
    data
}

/// A version 0 `OS/2` table with the given weight class.
fn os2_table(weight: u16) -> Vec<u8> {
    let mut data = vec![0_u8; 78];
    data[4..6].copy_from_slice(&weight.to_be_bytes());
    data
}
