use std::vec;

use super::Stack;

/// Insertion-order copy of a stack's elements, taken when the iterator is created.
///
/// Mutating the stack afterwards has no effect on an existing snapshot. Cloning
/// a snapshot restarts from its current position.
#[derive(Debug, Clone)]
pub struct Snapshot<T>(vec::IntoIter<T>);

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(elems: Vec<T>) -> Self {
        Self(elems.into_iter())
    }
}

impl<'a, T: Clone> IntoIterator for &'a Stack<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

/// Pops elements off a stack, top first. Whatever is left when the iterator
/// is dropped gets cleared.
pub struct Drain<'a, T>(pub(super) &'a mut Stack<T>);

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.0.clear();
    }
}
