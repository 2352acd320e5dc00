//! The single less-than predicate every selection strategy orders by.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::error::{Result, SelectError};

/// Strict less-than over keys, with a failure channel for operands that
/// cannot be ordered.
///
/// Strategies assume a strict weak ordering. A comparator that contradicts
/// itself across calls can make heapselect report
/// [`SelectError::InvariantViolation`].
pub trait Comparator<K: ?Sized> {
    fn less_than(&mut self, a: &K, b: &K) -> Result<bool>;
}

/// Orders keys by their `PartialOrd` implementation.
///
/// Pairs without an ordering (`partial_cmp` returning `None`, such as `NaN`)
/// are a comparison error rather than being treated as equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<K: PartialOrd + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn less_than(&mut self, a: &K, b: &K) -> Result<bool> {
        match a.partial_cmp(b) {
            Some(ordering) => Ok(ordering == Ordering::Less),
            None => Err(SelectError::comparison("values are not comparable")),
        }
    }
}

/// A caller-supplied predicate, see [`from_fn`].
pub struct FnComparator<K: ?Sized, F> {
    f: F,
    _key: PhantomData<fn(&K)>,
}

impl<K: ?Sized, F> Comparator<K> for FnComparator<K, F>
where
    F: FnMut(&K, &K) -> Result<bool>,
{
    #[inline]
    fn less_than(&mut self, a: &K, b: &K) -> Result<bool> {
        (self.f)(a, b)
    }
}

/// Wraps a fallible less-than predicate as a [`Comparator`].
///
/// # Examples
/// ```
/// use selectlib::select::comparator::from_fn;
/// use selectlib::{Selector, Strategy};
///
/// let mut words = vec!["pear", "fig", "banana", "kiwi"];
/// let by_len = from_fn(|a: &&str, b: &&str| Ok(a.len() < b.len()));
/// Selector::with_seed(7)
///     .select_by(Strategy::Adaptive, &mut words, 0, by_len)
///     .unwrap();
/// assert_eq!(words[0], "fig");
/// ```
pub fn from_fn<K, F>(f: F) -> FnComparator<K, F>
where
    K: ?Sized,
    F: FnMut(&K, &K) -> Result<bool>,
{
    FnComparator {
        f,
        _key: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        let mut cmp = NaturalOrder;
        assert!(cmp.less_than(&1, &2).unwrap());
        assert!(!cmp.less_than(&2, &2).unwrap());
        assert!(!cmp.less_than(&3, &2).unwrap());
        assert!(cmp.less_than("apple", "banana").unwrap());
    }

    #[test]
    fn test_natural_order_incomparable() {
        let mut cmp = NaturalOrder;
        assert!(matches!(
            cmp.less_than(&f64::NAN, &1.0),
            Err(SelectError::Comparison(_))
        ));
    }

    #[test]
    fn test_from_fn_reversed() {
        let mut cmp = from_fn(|a: &i32, b: &i32| Ok(a > b));
        assert!(cmp.less_than(&5, &1).unwrap());
        assert!(!cmp.less_than(&1, &5).unwrap());
    }

    #[test]
    fn test_from_fn_failure() {
        let mut cmp = from_fn(|_: &i32, _: &i32| Err(SelectError::comparison("refused")));
        assert!(matches!(cmp.less_than(&1, &2), Err(SelectError::Comparison(_))));
    }
}
