use std::{any::Any, fmt};

use crate::{
    chain::{self, Chain},
    dbg_line,
    error::{EmptyStack, StackError, UnsupportedOperation},
};

mod snapshot;
pub use snapshot::{Drain, Snapshot};

/// Builds a stack by pushing the given elements in order, the last one ends up on top.
#[macro_export]
macro_rules! stack {
    () => {
        $crate::Stack::new()
    };

    ($($elem:expr),+ $(,)?) => {{
        let mut stack = $crate::Stack::new();
        stack.push_all([$($elem),+]);
        stack
    }};
}

/// Pushes several elements at once, same as `push_all` over the listed elements.
#[macro_export]
macro_rules! push {
    ($stack:expr; $($elem:expr),+ $(,)?) => {
        $stack.push_all([$($elem),+])
    };
}

/// Mutable last-in-first-out container backed by a singly linked chain.
///
/// New elements are linked in front of the current head, so `push`, `top` and
/// `pop` are O(1). Iteration yields a snapshot in insertion order, oldest first.
///
/// `Stack` does not implement [`Hash`](std::hash::Hash): its contents change
/// under mutation, so [`Stack::hash_code`] always fails instead.
pub struct Stack<T> {
    chain: Chain<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self {
            chain: Chain::new(),
        }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn push(&mut self, elem: T) {
        self.chain.push_front(elem);
    }

    /// Pushes every element in iteration order. The first element yielded ends
    /// up farthest from the top.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, elems: I) {
        let before = self.len();
        for elem in elems {
            self.push(elem);
        }
        tracing::trace!(pushed = self.len() - before, len = self.len(), "push_all");
    }

    pub fn top(&self) -> Result<&T, StackError> {
        self.chain.front().ok_or_else(|| empty_stack("top"))
    }

    pub fn top_mut(&mut self) -> Result<&mut T, StackError> {
        self.chain.front_mut().ok_or_else(|| empty_stack("top_mut"))
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.chain.pop_front().ok_or_else(|| empty_stack("pop"))
    }

    pub fn clear(&mut self) {
        tracing::trace!(released = self.len(), "clear");
        self.chain.clear();
    }

    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self)
    }

    /// Mutable stacks are never valid hash keys, so this always fails.
    pub fn hash_code(&self) -> Result<u64, StackError> {
        Err(StackError::UnsupportedOperation(UnsupportedOperation {
            dbg_line: dbg_line!(),
            operation: "hash_code",
        }))
    }
}

impl<T: Clone> Stack<T> {
    /// Elements in insertion order, the reverse of the order `pop` returns them.
    pub fn to_ordered_list(&self) -> Vec<T> {
        let mut elems: Vec<T> = self.chain.iter().cloned().collect();
        elems.reverse();
        elems
    }

    pub fn iter(&self) -> Snapshot<T> {
        Snapshot::from(self.to_ordered_list())
    }
}

impl<T: PartialEq + 'static> Stack<T> {
    /// Equality against an arbitrary value. Anything other than a `Stack<T>`
    /// compares unequal.
    pub fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Stack<T>>()
            .is_some_and(|other| self == other)
    }
}

fn empty_stack(operation: &'static str) -> StackError {
    StackError::EmptyStack(EmptyStack {
        dbg_line: dbg_line!(),
        operation,
    })
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        // zip stops at the shorter side, lengths have to match first
        self.len() == other.len()
            && self
                .chain
                .iter()
                .zip(other.chain.iter())
                .all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut stack = Stack::new();
        stack.push_all(self.iter());
        stack
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_elems(f, |f, elem| write!(f, "{elem}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_elems(f, |f, elem| write!(f, "{elem:?}"))
    }
}

impl<T> Stack<T> {
    // insertion order, oldest first
    fn ordered_refs(&self) -> Vec<&T> {
        let mut elems: Vec<&T> = self.chain.iter().collect();
        elems.reverse();
        elems
    }

    fn write_elems(
        &self,
        f: &mut fmt::Formatter<'_>,
        mut write_elem: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    ) -> fmt::Result {
        write!(f, "Stack(")?;
        for (i, elem) in self.ordered_refs().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_elem(f, elem)?;
        }
        write!(f, ")")
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.push_all(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

/// Consumes the stack in pop order, top first.
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = chain::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}
