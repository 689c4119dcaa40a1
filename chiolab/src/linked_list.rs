//! A mutable singly-linked list
//!
//! Each node is owned by its predecessor through a `Box`, and the first node by the list itself,
//! so a chain can never contain a cycle. The length is not cached; [`LinkedList::len`] walks
//! the chain.

use crate::error::{Error, Result};
use std::{fmt, iter};

/// Rendered before the first element by [`LinkedList::show_list`]
pub const HEAD: &str = "<< HEAD >>";

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

/// A singly-linked list modified in place
pub struct LinkedList<T> {
    head: Link<T>,
}

/// Iterator over references to the elements of a [`LinkedList`], front to back
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}

impl<T> LinkedList<T> {
    #[inline]
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements, counted by walking the list
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Adds `elem` at the front of the list in `O(1)`
    pub fn add(&mut self, elem: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { elem, next }));
    }

    /// Adds `elem` at the end of the list in `O(n)`
    pub fn add_to_end(&mut self, elem: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { elem, next: None }));
    }

    /// Returns a reference to the first element
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the list is empty
    pub fn get(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.elem)
            .ok_or(Error::EmptyList)
    }

    /// Removes and returns the first element
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the list is empty
    pub fn remove(&mut self) -> Result<T> {
        let node = *self.head.take().ok_or(Error::EmptyList)?;
        self.head = node.next;
        Ok(node.elem)
    }

    /// Removes and returns the last element
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the list is empty
    pub fn remove_last(&mut self) -> Result<T> {
        let len = self.len();
        if len == 0 {
            return Err(Error::EmptyList);
        }
        let last = self.link_at(len - 1).take().ok_or(Error::EmptyList)?;
        Ok(last.elem)
    }

    /// Releases every node, leaving the list empty
    pub fn destroy(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Lazily renders the [`HEAD`] marker, followed by each element numbered from 1
    pub fn show_list(&self) -> impl Iterator<Item = String> + '_
    where
        T: fmt::Display,
    {
        iter::once(HEAD.to_string()).chain(
            self.iter()
                .enumerate()
                .map(|(i, elem)| format!("{} - {}", i + 1, elem)),
        )
    }

    /// Returns the link holding the node at `index`, or the trailing empty link if the list is
    /// not that long
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        link
    }
}

impl<T: Clone> LinkedList<T> {
    /// Returns a new list holding copies of the first `n` elements
    ///
    /// If the list has no more than `n` elements, the result is a full copy.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `n` is zero
    pub fn take(&self, n: usize) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidCount(n));
        }
        Ok(self.iter().take(n).cloned().collect())
    }

    /// Returns a new list holding copies of the elements after the first `n`
    ///
    /// If the list has no more than `n` elements, the result is empty.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `n` is zero
    pub fn drop(&self, n: usize) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidCount(n));
        }
        log::trace!("drop: copying elements after position {}", n);
        Ok(self.iter().skip(n).cloned().collect())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Builds the list in iteration order, appending through a tail cursor
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for elem in iter {
            let node = tail.insert(Box::new(Node { elem, next: None }));
            tail = &mut node.next;
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
