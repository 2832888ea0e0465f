//! Merge sort over register ranges with overlap detection.
//!
//! The sort orders items by their [`RegisterRange`] using [`compare`] and
//! fails as soon as a merge meets two heads that are equal or intersecting.
//! It works on `Copy` keys so a failed sort can be discarded without
//! touching the caller's data.

use crate::error::{Error, Result};
use crate::range::{compare, RangeOrdering, RegisterRange};

/// Midpoint between two indices, rounding toward `lower`.
///
/// Requires `upper >= lower`.
///
/// # Examples
///
/// ```rust
/// use devmap6502::midpoint;
///
/// assert_eq!(midpoint(1, 5), 3);
/// assert_eq!(midpoint(2, 2), 2);
/// assert_eq!(midpoint(0, 1), 0);
/// ```
pub fn midpoint(lower: usize, upper: usize) -> usize {
    debug_assert!(upper >= lower, "midpoint requires upper >= lower");
    lower + (upper - lower) / 2
}

/// Sort `array` in place by register range, using `scratch` as the merge
/// buffer.
///
/// `scratch` must be at least as long as `array`. On error the contents of
/// both slices are unspecified.
pub(crate) fn merge_sort<T, F>(array: &mut [T], scratch: &mut [T], range_of: &F) -> Result<()>
where
    T: Copy,
    F: Fn(&T) -> RegisterRange,
{
    let entries = array.len();
    if entries <= 1 {
        return Ok(());
    }

    let scratch = &mut scratch[..entries];
    let lhs_size = midpoint(0, entries);

    {
        let (left, right) = array.split_at_mut(lhs_size);
        let (left_scratch, right_scratch) = scratch.split_at_mut(lhs_size);
        merge_sort(left, left_scratch, range_of)?;
        merge_sort(right, right_scratch, range_of)?;
    }

    let (left, right) = array.split_at(lhs_size);
    let (mut lhs_idx, mut rhs_idx, mut out_idx) = (0, 0, 0);

    while lhs_idx < left.len() && rhs_idx < right.len() {
        let lhs = range_of(&left[lhs_idx]);
        let rhs = range_of(&right[rhs_idx]);

        match compare(lhs, rhs) {
            RangeOrdering::Lesser => {
                scratch[out_idx] = left[lhs_idx];
                lhs_idx += 1;
            }
            RangeOrdering::Greater => {
                scratch[out_idx] = right[rhs_idx];
                rhs_idx += 1;
            }
            RangeOrdering::Equal | RangeOrdering::Intersecting => {
                return Err(Error::Overlap {
                    first: lhs,
                    second: rhs,
                });
            }
        }

        out_idx += 1;
    }

    let left_rest = &left[lhs_idx..];
    scratch[out_idx..out_idx + left_rest.len()].copy_from_slice(left_rest);
    out_idx += left_rest.len();

    let right_rest = &right[rhs_idx..];
    scratch[out_idx..out_idx + right_rest.len()].copy_from_slice(right_rest);

    array.copy_from_slice(scratch);
    Ok(())
}
