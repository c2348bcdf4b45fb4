// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::encrypt;
use crate::{decrypt, try_decrypt, Error};

#[test]
fn round_trip() {
    let plaintext = b"name,unicode\r\nsquare,100000\r\n1 symbols\r\n";
    let ciphertext = encrypt(plaintext);
    assert_eq!(ciphertext.len() % 16, 0, "ciphertext must be block aligned");
    assert_eq!(decrypt(&ciphertext).as_deref(), Some(&plaintext[..]));
}

#[test]
fn round_trip_block_sized() {
    // A full padding block is appended when the plaintext is block aligned.
    let plaintext = [b'x'; 32];
    let ciphertext = encrypt(&plaintext);
    assert_eq!(ciphertext.len(), 48);
    assert_eq!(decrypt(&ciphertext).as_deref(), Some(&plaintext[..]));
}

#[test]
fn fixed_vector() {
    // AES-256-CBC of the empty string is a single block of padding.
    let ciphertext = encrypt(b"");
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(decrypt(&ciphertext), Some(Vec::new()));
}

#[test]
fn misaligned_input() {
    assert!(decrypt(&[]).is_none());
    assert!(decrypt(&[0; 15]).is_none());
    let mut ciphertext = encrypt(b"hello");
    ciphertext.push(0);
    assert!(matches!(try_decrypt(&ciphertext), Err(Error::BadBlockLength(17))));
}

#[test]
fn corrupted_input() {
    // 20 bytes of plaintext leave 12 bytes of padding in the second block.
    let mut ciphertext = encrypt(b"hello, symbol fonts!");
    assert_eq!(ciphertext.len(), 32);
    // In CBC mode this flips the last plaintext byte of the next block,
    // turning the padding length into 0xF3.
    ciphertext[15] ^= 0xFF;
    assert!(matches!(try_decrypt(&ciphertext), Err(Error::DecryptFailed)));
}
