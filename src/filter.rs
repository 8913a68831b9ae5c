extern crate alloc;
use alloc::vec::Vec;

use crate::maxima::LocalMaximum;

/// Fixed distance below which a candidate counts as too similar to the
/// avoid color. Not configurable.
pub const AVOID_DISTANCE: f32 = 0.5;

/// Drop candidates whose average color lies within [`AVOID_DISTANCE`] of
/// `avoid` in normalized RGB space.
pub fn filter_too_similar(maxima: Vec<LocalMaximum>, avoid: rgb::RGB<u8>) -> Vec<LocalMaximum> {
    let r = avoid.r as f32 / 255.0;
    let g = avoid.g as f32 / 255.0;
    let b = avoid.b as f32 / 255.0;

    maxima
        .into_iter()
        .filter(|m| m.distance_to(r, g, b) >= AVOID_DISTANCE)
        .collect()
}

/// Greedy distinctness pass: walk candidates in their existing order and
/// keep one only if it is at least `threshold` away from every candidate
/// kept before it.
///
/// Order-dependent, not a symmetric clustering: with the input sorted by
/// descending hit count, the more dominant maximum always wins a color
/// neighborhood.
pub fn filter_distinct(maxima: Vec<LocalMaximum>, threshold: f32) -> Vec<LocalMaximum> {
    let mut result: Vec<LocalMaximum> = Vec::new();

    for m in maxima {
        let distinct = result
            .iter()
            .all(|n| m.distance_to(n.r, n.g, n.b) >= threshold);
        if distinct {
            result.push(m);
        }
    }

    result
}
