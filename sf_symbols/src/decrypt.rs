// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decryption of the glyph catalog.

use super::Error;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const BLOCK_LEN: usize = 16;

/// Key for the catalog stored in the `symp` table.
pub(crate) const KEY: [u8; 32] = [
    0xB8, 0x85, 0xF6, 0x9E, 0x39, 0x8C, 0xBA, 0x72, 0x40, 0xDB, 0x49, 0x6B, 0xE8, 0xC6, 0x14, 0x88,
    0x54, 0x9F, 0x1F, 0x88, 0x5D, 0x47, 0x6B, 0x2E, 0x2C, 0xC1, 0x14, 0xF1, 0x3B, 0x17, 0x21, 0x20,
];

/// Initialization vector for the catalog stored in the `symp` table.
pub(crate) const IV: [u8; 16] = [
    0xEF, 0xB0, 0xD1, 0x2E, 0xFA, 0xC5, 0x91, 0x14, 0xC3, 0xE5, 0xB9, 0x12, 0x70, 0xF0, 0xC0, 0x46,
];

/// Decrypts a catalog ciphertext.
///
/// The catalog is encrypted with AES-256 in CBC mode and PKCS#7 padding,
/// using a fixed key and initialization vector. Returns `None` if the
/// ciphertext is malformed.
pub fn decrypt(ciphertext: &[u8]) -> Option<Vec<u8>> {
    try_decrypt(ciphertext).ok()
}

/// Decrypts a catalog ciphertext, reporting why decryption failed.
pub fn try_decrypt(ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(Error::BadBlockLength(ciphertext.len()));
    }
    Aes256CbcDec::new(&KEY.into(), &IV.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::DecryptFailed)
}
