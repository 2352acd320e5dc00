//! In-place order statistic selection.
//!
//! This module provides three ways of moving the k-th smallest element of a
//! sequence to index k without sorting it:
//! - Randomized quickselect (expected O(n))
//! - Heapselect (O(n log k), worst-case safe)
//! - An adaptive `nth_element` that picks between them and escalates from
//!   quickselect to heapselect when quickselect stops making progress
//!
//! Every operation can order elements directly, through a key projection
//! computed once per element, or through a custom [`Comparator`].
//!
//! # Examples
//!
//! ```rust
//! use selectlib::{heapselect, nth_element_by_key, quickselect};
//!
//! let mut values = vec![9, 3, 7, 1, 5, 8, 2];
//! quickselect(&mut values, 3).unwrap();
//! assert_eq!(values[3], 5);
//!
//! heapselect(&mut values, 0).unwrap();
//! assert_eq!(values[0], 1);
//!
//! // Third largest, by ordering on the negated value.
//! let mut values = vec![15, 8, 22, 5, 13];
//! nth_element_by_key(&mut values, 2, |x: &i32| -x).unwrap();
//! assert_eq!(values[2], 13);
//! ```

use rand::rngs::ThreadRng;

use crate::error::{Result, SelectError};

pub mod comparator;
pub mod config;
pub mod heapselect;
pub mod keys;
pub mod partition;
pub mod quickselect;
pub mod selector;
pub mod sequence;

pub use comparator::{Comparator, FnComparator, NaturalOrder};
pub use config::SelectConfig;
pub use selector::{Selector, Strategy};
pub use sequence::Sequence;

fn thread_selector() -> Selector<ThreadRng> {
    Selector::with_rng(SelectConfig::default(), rand::thread_rng())
}

/// Moves the k-th smallest element to index `k` using randomized quickselect.
///
/// # Arguments
/// * `seq` - The sequence to rearrange in place
/// * `k` - Target index, `0 <= k < seq.len()`
///
/// # Returns
/// * `Ok(())` - `seq[k]` holds its sorted value, smaller-or-equal elements
///   before it and greater-or-equal elements after it
/// * `Err(SelectError)` - If `k` is out of range or two elements cannot be
///   compared
pub fn quickselect<S>(seq: &mut S, k: usize) -> Result<()>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    thread_selector().quickselect(seq, k)
}

/// Moves the k-th smallest element to index `k` using heapselect.
pub fn heapselect<S>(seq: &mut S, k: usize) -> Result<()>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    thread_selector().heapselect(seq, k)
}

/// Moves the k-th smallest element to index `k`, choosing the strategy from
/// the ratio of `k` to the length.
pub fn nth_element<S>(seq: &mut S, k: usize) -> Result<()>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    thread_selector().nth_element(seq, k)
}

/// [`quickselect`] ordering by `key`, computed once per element.
pub fn quickselect_by_key<S, K, F>(seq: &mut S, k: usize, key: F) -> Result<()>
where
    S: Sequence + ?Sized,
    K: PartialOrd,
    F: FnMut(&S::Item) -> K,
{
    thread_selector().quickselect_by_key(seq, k, key)
}

/// [`heapselect`] ordering by `key`, computed once per element.
pub fn heapselect_by_key<S, K, F>(seq: &mut S, k: usize, key: F) -> Result<()>
where
    S: Sequence + ?Sized,
    K: PartialOrd,
    F: FnMut(&S::Item) -> K,
{
    thread_selector().heapselect_by_key(seq, k, key)
}

/// [`nth_element`] ordering by `key`, computed once per element.
pub fn nth_element_by_key<S, K, F>(seq: &mut S, k: usize, key: F) -> Result<()>
where
    S: Sequence + ?Sized,
    K: PartialOrd,
    F: FnMut(&S::Item) -> K,
{
    thread_selector().nth_element_by_key(seq, k, key)
}

/// Places the low median at index `(n - 1) / 2` and returns it.
///
/// For even lengths this is the smaller of the two middle elements.
pub fn median_low<S>(seq: &mut S) -> Result<&S::Item>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    if seq.is_empty() {
        return Err(SelectError::IndexOutOfRange { index: 0, len: 0 });
    }
    let mid = (seq.len() - 1) / 2;
    nth_element(seq, mid)?;
    Ok(seq.get(mid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_free_functions() {
        let mut a = vec![9, 3, 7, 1, 5, 8, 2];
        let mut b = a.clone();
        let mut c = a.clone();
        quickselect(&mut a, 3).unwrap();
        heapselect(&mut b, 3).unwrap();
        nth_element(&mut c, 3).unwrap();
        assert_eq!((a[3], b[3], c[3]), (5, 5, 5));
    }

    #[test]
    fn test_free_functions_by_key() {
        let mut words = vec!["kiwi", "fig", "banana", "apple"];
        quickselect_by_key(&mut words, 3, |w: &&str| w.len()).unwrap();
        assert_eq!(words[3], "banana");
        heapselect_by_key(&mut words, 0, |w: &&str| w.len()).unwrap();
        assert_eq!(words[0], "fig");
        nth_element_by_key(&mut words, 0, |w: &&str| std::cmp::Reverse(w.len())).unwrap();
        assert_eq!(words[0], "banana");
    }

    #[test]
    fn test_slices_arrays_and_deques() {
        let mut arr = [4, 2, 5, 1, 3];
        nth_element(&mut arr, 2).unwrap();
        assert_eq!(arr[2], 3);

        let mut v = vec![0, 10, 9, 8, 7, 0];
        quickselect(&mut v[1..5], 0).unwrap();
        assert_eq!(v[1], 7);

        let mut d: VecDeque<i32> = (0..20).rev().collect();
        heapselect(&mut d, 17).unwrap();
        assert_eq!(d[17], 17);
    }

    #[test]
    fn test_median_low() {
        let mut odd = vec![5, 1, 4, 2, 3];
        assert_eq!(*median_low(&mut odd).unwrap(), 3);

        let mut even = vec![6, 1, 5, 2, 4, 3];
        assert_eq!(*median_low(&mut even).unwrap(), 3);

        let mut empty: Vec<i32> = Vec::new();
        assert!(matches!(
            median_low(&mut empty),
            Err(SelectError::IndexOutOfRange { .. })
        ));
    }
}
