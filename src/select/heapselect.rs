use log::trace;

use crate::error::{Result, SelectError};
use crate::select::comparator::Comparator;
use crate::select::keys::Lanes;
use crate::select::partition::partition_three_way;

/// Heapselect over the window `[left, right]` of `lanes`, placing the
/// order statistic that belongs at absolute index `k`.
///
/// A bounded max-heap of the positions `[left, k]` is built first; every
/// later position whose key is strictly smaller than the heap root replaces
/// the root. The heap stores positions, not elements, and nothing is moved
/// while it is live, so each position still names its element and key. When
/// the scan ends the root names the pivot, and one three-way partition of the
/// window moves it into place. `k` must then lie in the pivot's equal region;
/// if it does not, the comparator is not a strict weak ordering and the call
/// fails with [`SelectError::InvariantViolation`].
///
/// # Complexity
/// * Time: O(m log(k - left + 1)) where m = right - left + 1
/// * Space: O(k - left + 1) positions
pub fn heapselect_lanes<L, C>(
    lanes: &mut L,
    cmp: &mut C,
    left: usize,
    right: usize,
    k: usize,
) -> Result<()>
where
    L: Lanes + ?Sized,
    C: Comparator<L::Key> + ?Sized,
{
    debug_assert!(left <= k && k <= right && right < lanes.len());

    let size = k - left + 1;
    let mut heap: Vec<usize> = Vec::new();
    heap.try_reserve_exact(size)
        .map_err(|_| SelectError::Allocation { requested: size })?;
    heap.extend(left..=k);

    for root in (0..size / 2).rev() {
        sift_down(&mut heap, root, &*lanes, cmp)?;
    }

    for pos in k + 1..=right {
        if cmp.less_than(lanes.key(pos), lanes.key(heap[0]))? {
            heap[0] = pos;
            sift_down(&mut heap, 0, &*lanes, cmp)?;
        }
    }
    let pivot = heap[0];
    drop(heap);

    let (low, mid) = partition_three_way(lanes, cmp, left, right + 1, pivot)?;
    trace!("heapselect: window [{left}, {right}], pivot from {pivot}, equal region [{low}, {mid})");
    if low <= k && k < mid {
        Ok(())
    } else {
        Err(SelectError::InvariantViolation {
            index: k,
            low,
            high: mid,
        })
    }
}

/// Restores the max-heap property below `root`, ordering positions by key.
fn sift_down<L, C>(heap: &mut [usize], mut root: usize, lanes: &L, cmp: &mut C) -> Result<()>
where
    L: Lanes + ?Sized,
    C: Comparator<L::Key> + ?Sized,
{
    let len = heap.len();
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child < len && cmp.less_than(lanes.key(heap[largest]), lanes.key(heap[child]))? {
                largest = child;
            }
        }
        if largest == root {
            return Ok(());
        }
        heap.swap(root, largest);
        root = largest;
    }
}
