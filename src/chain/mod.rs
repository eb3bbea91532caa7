mod iter;
pub use iter::{IntoIter, Iter};

#[derive(Debug)]
struct Node<T> {
    elem: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// Singly linked chain of owned nodes.
///
/// Only the head end is touched: insertion, removal and inspection all happen
/// at the front, iteration walks from the head towards the last node.
#[derive(Debug)]
pub struct Chain<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, elem: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { elem, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { elem, next } = *node;
            self.head = next;
            self.len -= 1;
            elem
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.elem)
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        // Unlink one node at a time, dropping a Box<Node> recursively would
        // recurse once per node.
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.head.as_deref(), self.len)
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
