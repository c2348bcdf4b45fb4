// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weight matching within a family, following the CSS font matching
//! algorithm.

use core::cmp::Ordering;

/// Returns the index of the weight in `set` that best matches `weight`.
pub(super) fn match_weight(set: &[f32], weight: f32) -> Option<usize> {
    match set.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }
    let weights = || set.iter().copied().enumerate();
    if let Some((index, _)) = weights().find(|&(_, w)| w == weight) {
        return Some(index);
    }
    let found = if (400.0..=500.0).contains(&weight) {
        // Heavier up to 500, then lighter, then heavier than 500.
        lightest(weights().filter(|&(_, w)| w > weight && w <= 500.0))
            .or_else(|| heaviest(weights().filter(|&(_, w)| w < weight)))
            .or_else(|| lightest(weights().filter(|&(_, w)| w > 500.0)))
    } else if weight < 400.0 {
        // Lighter first, then heavier.
        heaviest(weights().filter(|&(_, w)| w < weight))
            .or_else(|| lightest(weights().filter(|&(_, w)| w > weight)))
    } else {
        // Heavier first, then lighter.
        lightest(weights().filter(|&(_, w)| w > weight))
            .or_else(|| heaviest(weights().filter(|&(_, w)| w < weight)))
    };
    found.map(|(index, _)| index)
}

fn by_weight(a: &(usize, f32), b: &(usize, f32)) -> Ordering {
    a.1.partial_cmp(&b.1).unwrap_or(Ordering::Less)
}

fn lightest(faces: impl Iterator<Item = (usize, f32)>) -> Option<(usize, f32)> {
    faces.min_by(by_weight)
}

fn heaviest(faces: impl Iterator<Item = (usize, f32)>) -> Option<(usize, f32)> {
    faces.max_by(by_weight)
}
