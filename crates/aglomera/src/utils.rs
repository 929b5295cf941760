//! Utility functions for the crate.

/// The tolerance used when comparing dissimilarities of clusters.
pub const EPSILON: f64 = 1e-9;

/// Whether two dissimilarities are equal within `EPSILON`.
///
/// Two `NaN` values are considered equal so that degenerate clusters can
/// still be compared structurally.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() <= EPSILON
}

/// Whether a merge at `current` breaks the monotonicity of the dendrogram
/// after a merge at `previous`.
///
/// Differences within `EPSILON` and `NaN`s are not inversions.
#[must_use]
pub fn is_inversion(previous: f64, current: f64) -> bool {
    current + EPSILON < previous
}

/// Return the index and value of the minimum value in the given slice of values.
///
/// NAN values are ignored. When several values tie for the minimum, the first
/// one is returned.
///
/// This will return `None` if the given slice is empty or only holds `NaN`s.
#[must_use]
pub fn arg_min(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |acc, (i, v)| match acc {
            Some((_, m)) if m <= v => acc,
            _ => Some((i, v)),
        })
}

/// Merge two sorted slices into one sorted vector.
///
/// Equal items from both slices are all kept, left ones first.
pub(crate) fn merge_sorted<I: Ord + Clone>(left: &[I], right: &[I]) -> Vec<I> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        if right[r] < left[l] {
            merged.push(right[r].clone());
            r += 1;
        } else {
            merged.push(left[l].clone());
            l += 1;
        }
    }
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);
    merged
}
