// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_bundle;
mod test_decrypt;
mod utils;
