use log::trace;
use rand::Rng;

use crate::error::Result;
use crate::select::comparator::Comparator;
use crate::select::keys::Lanes;
use crate::select::partition::{partition_three_way, partition_two_way};

/// How a quickselect run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The target index holds its final value.
    Placed,
    /// The round budget ran out. `[left, right]` still contains the target
    /// and every element outside it is already on the correct side.
    Exhausted { left: usize, right: usize },
}

/// Randomized quickselect over the whole of `lanes`.
///
/// Narrows the window `[left, right]` around `k` with a Lomuto partition per
/// round, drawing each pivot uniformly from the current window. A pivot that
/// lands on `left` is the window minimum; when the target lies above it, one
/// three-way pass steps over the whole run of keys equal to it, so
/// duplicate-heavy windows shrink by more than one element per round. With
/// `max_rounds` set, the run gives up after that many partitions and reports
/// the unresolved window instead of degrading towards O(n²).
///
/// `lanes` must be non-empty and `k < lanes.len()`.
///
/// # Complexity
/// * Time: O(n) expected, O(n · max_rounds) when capped
/// * Space: O(1)
pub fn quickselect_lanes<L, C, R>(
    lanes: &mut L,
    cmp: &mut C,
    rng: &mut R,
    k: usize,
    max_rounds: Option<usize>,
) -> Result<Progress>
where
    L: Lanes + ?Sized,
    C: Comparator<L::Key> + ?Sized,
    R: Rng,
{
    debug_assert!(k < lanes.len());

    let mut left = 0;
    let mut right = lanes.len() - 1;
    let mut rounds = 0usize;
    while left < right {
        if max_rounds.is_some_and(|cap| rounds >= cap) {
            return Ok(Progress::Exhausted { left, right });
        }
        rounds += 1;

        let pivot = rng.gen_range(left..=right);
        let pos = partition_two_way(lanes, cmp, left, right, pivot)?;
        trace!("quickselect round {rounds}: window [{left}, {right}], pivot settled at {pos}");
        if pos == k {
            return Ok(Progress::Placed);
        } else if k < pos {
            right = pos - 1;
        } else if pos == left {
            let (low, mid) = partition_three_way(lanes, cmp, left, right + 1, pos)?;
            if k < low {
                right = low - 1;
            } else if k < mid {
                return Ok(Progress::Placed);
            } else {
                left = mid;
            }
        } else {
            left = pos + 1;
        }
    }
    Ok(Progress::Placed)
}
