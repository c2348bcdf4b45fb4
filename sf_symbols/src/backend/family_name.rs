// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Key for case-insensitive comparison of family names.
#[derive(Default, PartialEq, Eq, Debug)]
pub(crate) struct NameKey {
    data: SmallVec<[u8; 64]>,
}

impl NameKey {
    pub(crate) fn new(s: &str) -> Self {
        Self::from_chars(s.chars())
    }

    pub(crate) fn from_chars(chars: impl Iterator<Item = char>) -> Self {
        let mut res = Self::default();
        let mut buf = [0_u8; 4];
        for ch in chars.flat_map(char::to_lowercase) {
            res.data
                .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
        res
    }
}
