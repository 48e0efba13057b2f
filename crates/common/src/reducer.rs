//! Grouped extremum reducer
//!
//! Splits a sequence into contiguous, non-overlapping groups of `k` values
//! (the last group may be shorter) and reduces every group to its maximum or
//! minimum, preserving group order.
//!
//! An empty sequence always yields an empty result, even when `k` is not a
//! valid group size. Validation of `k` only happens once there is something
//! to group.
//!
//! NaN inside a group makes that group's result NaN; other groups are not
//! affected. See [`Extremum::pick`] for the signed-zero rule.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::types::{Extremum, GroupExtremum};

fn checked_group_size(k: i64) -> Result<usize> {
    if k <= 0 {
        return Err(Error::group_size(k));
    }
    // Larger than any slice can be, so one group covers everything.
    Ok(usize::try_from(k).unwrap_or(usize::MAX))
}

/// Per-group maxima
pub fn grouped_max(values: &[f64], k: i64) -> Result<Vec<f64>> {
    grouped_extrema(values, k, Extremum::Max)
}

/// Per-group maxima with the default group size of 3
pub fn grouped_max_default(values: &[f64]) -> Result<Vec<f64>> {
    grouped_max(values, Extremum::Max.default_group_size())
}

/// Per-group minima
pub fn grouped_min(values: &[f64], k: i64) -> Result<Vec<f64>> {
    grouped_extrema(values, k, Extremum::Min)
}

/// Per-group minima with the default group size of 2
pub fn grouped_min_default(values: &[f64]) -> Result<Vec<f64>> {
    grouped_min(values, Extremum::Min.default_group_size())
}

/// Reduce each group of `k` values to its extremum.
pub fn grouped_extrema(values: &[f64], k: i64, extremum: Extremum) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    let k = checked_group_size(k)?;

    // chunks() never yields an empty window
    Ok(values
        .chunks(k)
        .filter_map(|window| extremum.reduce(window))
        .collect())
}

/// Half-open index ranges of the groups a sequence of `len` values splits into.
pub fn group_bounds(len: usize, k: i64) -> Result<Vec<Range<usize>>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    let k = checked_group_size(k)?;

    Ok((0..len)
        .step_by(k)
        .map(|start| start..start.saturating_add(k).min(len))
        .collect())
}

/// Like [`grouped_extrema`], but keeps the input range of every group.
pub fn group_report(values: &[f64], k: i64, extremum: Extremum) -> Result<Vec<GroupExtremum>> {
    let bounds = group_bounds(values.len(), k)?;

    Ok(bounds
        .into_iter()
        .enumerate()
        .filter_map(|(group, range)| {
            let value = extremum.reduce(&values[range.clone()])?;
            Some(GroupExtremum {
                group,
                start: range.start,
                end: range.end,
                value,
            })
        })
        .collect())
}
