// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting of catalog lines into fields.

/// Splits a catalog line into comma separated fields.
///
/// A double quote toggles quoted mode, in which commas do not separate
/// fields. Quote characters are kept in the field text and there is no
/// escape mechanism, so a quote always toggles. The text after the last
/// separator is always emitted, which means an empty line yields a single
/// empty field.
///
/// ```
/// use sf_symbols::tokenize;
///
/// assert_eq!(tokenize("a,\"b,c\",d"), ["a", "\"b,c\"", "d"]);
/// assert_eq!(tokenize("a,"), ["a", ""]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut in_quote = false;
    let mut start = 0;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quote = !in_quote,
            ',' if !in_quote => {
                fields.push(line[start..i].to_owned());
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(line[start..].to_owned());
    fields
}
