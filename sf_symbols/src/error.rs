// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use read_fonts::ReadError;
use std::{io, path::Path, sync::Arc};

/// Reason a stage of font loading or catalog decoding failed.
///
/// Public entry points collapse these into absence; the `try_*` functions
/// surface them for diagnostics.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The font file could not be opened or mapped.
    Io {
        /// Path that failed to load.
        path: Arc<Path>,
        /// Category of the underlying I/O error.
        kind: io::ErrorKind,
    },
    /// The font data could not be parsed.
    Font(ReadError),
    /// The font has no `symp` table.
    MissingTable,
    /// The table or the decrypted catalog is not valid UTF-8.
    BadEncoding,
    /// The table text is not valid base64.
    BadBase64,
    /// The ciphertext length is not a positive multiple of the cipher block
    /// size.
    BadBlockLength(usize),
    /// Decryption or padding removal failed.
    DecryptFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, kind } => write!(f, "failed to load {}: {kind}", path.display()),
            Self::Font(err) => write!(f, "invalid font data: {err}"),
            Self::MissingTable => f.write_str("font has no symp table"),
            Self::BadEncoding => f.write_str("catalog text is not valid UTF-8"),
            Self::BadBase64 => f.write_str("catalog table is not valid base64"),
            Self::BadBlockLength(len) => {
                write!(f, "ciphertext length {len} is not a multiple of the block size")
            }
            Self::DecryptFailed => f.write_str("catalog decryption failed"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Self::Font(err)
    }
}
