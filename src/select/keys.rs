//! Key projection and the lock-step view of a sequence and its keys.
//!
//! Every strategy works over [`Lanes`]: a sequence plus the keys it is ordered
//! by. With no projection the elements are their own keys ([`Direct`]); with a
//! projection the keys live in a transient array built once per call
//! ([`Projected`]) and every element swap is mirrored on it, so `key(i)`
//! always belongs to the element currently at position `i`.

use std::error::Error as StdError;

use crate::error::{Result, SelectError};
use crate::select::sequence::Sequence;

/// A sequence viewed through its comparison keys.
pub trait Lanes {
    type Key: ?Sized;

    fn len(&self) -> usize;

    /// The key of the element currently at `index`.
    fn key(&self, index: usize) -> &Self::Key;

    /// Swaps two elements together with their keys.
    fn swap(&mut self, a: usize, b: usize);
}

/// Elements compared directly.
pub struct Direct<'a, S: ?Sized> {
    seq: &'a mut S,
}

impl<'a, S: Sequence + ?Sized> Direct<'a, S> {
    pub fn new(seq: &'a mut S) -> Self {
        Direct { seq }
    }
}

impl<S: Sequence + ?Sized> Lanes for Direct<'_, S> {
    type Key = S::Item;

    #[inline]
    fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    fn key(&self, index: usize) -> &S::Item {
        self.seq.get(index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.seq.swap(a, b);
    }
}

/// Elements paired with an owned, index-aligned key array.
pub struct Projected<'a, S: ?Sized, K> {
    seq: &'a mut S,
    keys: Vec<K>,
}

impl<'a, S: Sequence + ?Sized, K> Projected<'a, S, K> {
    /// Projects every element once, in index order.
    ///
    /// The first failing projection stops the pass; keys computed so far are
    /// dropped and the sequence has not been touched.
    pub fn project<F, E>(seq: &'a mut S, mut key_fn: F) -> Result<Self>
    where
        F: FnMut(&S::Item) -> std::result::Result<K, E>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let n = seq.len();
        let mut keys = Vec::new();
        keys.try_reserve_exact(n)
            .map_err(|_| SelectError::Allocation { requested: n })?;
        for index in 0..n {
            let key = key_fn(seq.get(index)).map_err(|e| SelectError::Projection {
                index,
                source: e.into(),
            })?;
            keys.push(key);
        }
        Ok(Projected { seq, keys })
    }

    /// Pairs the sequence with keys the caller already computed.
    pub fn with_keys(seq: &'a mut S, keys: Vec<K>) -> Result<Self> {
        if keys.len() != seq.len() {
            return Err(SelectError::type_mismatch(format!(
                "key array has {} entries but the sequence has {}",
                keys.len(),
                seq.len()
            )));
        }
        Ok(Projected { seq, keys })
    }
}

impl<S: Sequence + ?Sized, K> Lanes for Projected<'_, S, K> {
    type Key = K;

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.seq.swap(a, b);
        self.keys.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_index_aligned() {
        let mut v = vec!["ccc", "a", "bb"];
        let lanes = Projected::project(&mut v, |s: &&str| Ok::<_, String>(s.len())).unwrap();
        assert_eq!(Lanes::len(&lanes), 3);
        assert_eq!(*lanes.key(0), 3);
        assert_eq!(*lanes.key(1), 1);
        assert_eq!(*lanes.key(2), 2);
    }

    #[test]
    fn test_swap_mirrors_keys() {
        let mut v = vec![10, 20, 30];
        {
            let mut lanes = Projected::project(&mut v, |x: &i32| Ok::<_, String>(-x)).unwrap();
            lanes.swap(0, 2);
            assert_eq!(*lanes.key(0), -30);
            assert_eq!(*lanes.key(2), -10);
        }
        assert_eq!(v, vec![30, 20, 10]);
    }

    #[test]
    fn test_projection_failure_leaves_sequence() {
        let mut v = vec![1, 2, -3, 4];
        let mut calls = 0;
        let result = Projected::project(&mut v, |x: &i32| {
            calls += 1;
            if *x < 0 {
                Err(format!("negative value {}", x))
            } else {
                Ok(*x as u32)
            }
        });
        match result {
            Err(SelectError::Projection { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(source.to_string(), "negative value -3");
            }
            _ => panic!("expected projection error"),
        }
        assert_eq!(calls, 3);
        assert_eq!(v, vec![1, 2, -3, 4]);
    }

    #[test]
    fn test_with_keys_length_mismatch() {
        let mut v = vec![1, 2, 3];
        assert!(matches!(
            Projected::with_keys(&mut v, vec![1, 2]),
            Err(SelectError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_direct_lanes() {
        let mut v = [3, 1, 2];
        let mut lanes = Direct::new(&mut v);
        lanes.swap(0, 1);
        assert_eq!(*lanes.key(0), 1);
        assert_eq!(Lanes::len(&lanes), 3);
    }
}
