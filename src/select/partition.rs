//! Two-way and three-way partition schemes.
//!
//! Both work over an index window of a [`Lanes`] view, move elements and keys
//! together, and stop at the first comparator failure. Neither allocates.

use crate::error::Result;
use crate::select::comparator::Comparator;
use crate::select::keys::Lanes;

/// Lomuto partition of `[left, right]` around the element at `pivot`.
///
/// Returns the pivot's resting index `p`. Afterwards every key in
/// `[left, p)` is less than the pivot key and every key in `(p, right]` is
/// not less than it.
///
/// # Complexity
/// * Time: O(right - left)
/// * Space: O(1)
pub fn partition_two_way<L, C>(
    lanes: &mut L,
    cmp: &mut C,
    left: usize,
    right: usize,
    pivot: usize,
) -> Result<usize>
where
    L: Lanes + ?Sized,
    C: Comparator<L::Key> + ?Sized,
{
    debug_assert!(left <= pivot && pivot <= right && right < lanes.len());

    lanes.swap(pivot, right);
    let mut store = left;
    for i in left..right {
        if cmp.less_than(lanes.key(i), lanes.key(right))? {
            lanes.swap(i, store);
            store += 1;
        }
    }
    lanes.swap(store, right);
    Ok(store)
}

/// Dutch-flag partition of `[left, end)` around the key of the element at `pivot`.
///
/// Returns `(low, mid)`: keys in `[left, low)` are less than the pivot key,
/// keys in `[low, mid)` are equal to it and keys in `[mid, end)` are greater.
/// The pivot element is followed through the swaps, so the pivot key is read
/// in place rather than copied out.
///
/// # Complexity
/// * Time: O(end - left)
/// * Space: O(1)
pub fn partition_three_way<L, C>(
    lanes: &mut L,
    cmp: &mut C,
    left: usize,
    end: usize,
    mut pivot: usize,
) -> Result<(usize, usize)>
where
    L: Lanes + ?Sized,
    C: Comparator<L::Key> + ?Sized,
{
    debug_assert!(left <= pivot && pivot < end && end <= lanes.len());

    let mut i = left;
    let mut j = left;
    let mut k = end;
    while j < k {
        if cmp.less_than(lanes.key(j), lanes.key(pivot))? {
            lanes.swap(i, j);
            pivot = follow(pivot, i, j);
            i += 1;
            j += 1;
        } else if cmp.less_than(lanes.key(pivot), lanes.key(j))? {
            k -= 1;
            lanes.swap(j, k);
            pivot = follow(pivot, j, k);
        } else {
            j += 1;
        }
    }
    Ok((i, j))
}

/// Where the element at `pos` ends up after swapping `a` and `b`.
#[inline]
fn follow(pos: usize, a: usize, b: usize) -> usize {
    if pos == a {
        b
    } else if pos == b {
        a
    } else {
        pos
    }
}
