use std::collections::VecDeque;

/// A mutable, randomly indexable container the selection engine can permute.
///
/// The engine never resizes a sequence: it reads elements by index and
/// exchanges pairs of positions, both in O(1).
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`. Panics if `index >= len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Exchanges the elements at `a` and `b`. Panics if either is out of bounds.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}
