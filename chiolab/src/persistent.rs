//! A persistent singly-linked list
//!
//! Every operation on a [`List`] leaves its input untouched and returns a new list. Nodes are
//! immutable once built and are shared between lists through reference counting, so a list
//! returned by [`List::cons`], [`List::rest`] or [`List::drop`] may reuse the suffix of its
//! input without copying it. Operations that change the end of a list ([`List::add_end`],
//! [`List::remove_last`], [`List::take`]) rebuild the affected prefix instead.
//!
//! ```
//! use chiolab::persistent::List;
//!
//! let l: List<i32> = [1, 2, 3].into_iter().collect();
//! let m = l.cons(0).add_end(4);
//! assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(l.len(), 3);
//! ```

use crate::error::{Error, Result};
use std::{fmt, iter, rc::Rc};

/// Rendered after the last element by [`List::show`]
pub const TAIL: &str = "<< TAIL >>";

type Link<T> = Option<Rc<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

/// An immutable singly-linked list with structural sharing
///
/// Cloning a `List` is `O(1)` and shares every node.
pub struct List<T> {
    head: Link<T>,
}

/// Iterator over references to the elements of a [`List`], front to back
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

impl<T> List<T> {
    /// The empty list
    #[inline]
    pub fn nil() -> Self {
        List { head: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a new list with `elem` in front of the elements of `self`
    pub fn cons(&self, elem: T) -> Self {
        List {
            head: Some(Rc::new(Node {
                elem,
                next: self.head.clone(),
            })),
        }
    }

    /// Same as [`List::cons`]
    #[inline]
    pub fn add(&self, elem: T) -> Self {
        self.cons(elem)
    }

    /// Returns a reference to the first element, if any
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.elem)
    }

    /// Returns the list without its first element; the empty list stays empty
    ///
    /// The result shares every node with `self`.
    pub fn rest(&self) -> Self {
        List {
            head: self.head.as_ref().and_then(|node| node.next.clone()),
        }
    }

    /// Same as [`List::rest`]
    #[inline]
    pub fn remove(&self) -> Self {
        self.rest()
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

    /// Returns the list without its first `n` elements, or the empty list if it has no more
    /// than `n` elements
    ///
    /// The result shares the remaining nodes with `self`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `n` is zero
    pub fn drop(&self, n: usize) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidCount(n));
        }
        let mut link = self.head.as_ref();
        for _ in 0..n {
            match link {
                Some(node) => link = node.next.as_ref(),
                None => break,
            }
        }
        Ok(List {
            head: link.cloned(),
        })
    }

    /// Consumes the list, returning the empty list
    #[inline]
    pub fn destroy(self) -> Self {
        List::nil()
    }

    /// Builds a list with the elements of `front` followed by those of `self`, sharing `self`
    fn prepend_all(&self, front: Vec<T>) -> Self {
        front.into_iter().rev().fold(self.clone(), |list, elem| list.cons(elem))
    }
}

impl<T: Clone> List<T> {
    /// Returns a one-element list holding the first element, or the empty list
    pub fn first(&self) -> Self {
        match self.head() {
            Some(elem) => List::nil().cons(elem.clone()),
            None => List::nil(),
        }
    }

    /// Same as [`List::first`]
    #[inline]
    pub fn get(&self) -> Self {
        self.first()
    }

    /// Returns a one-element list holding the last element, or the empty list
    pub fn get_last(&self) -> Self {
        match self.iter().last() {
            Some(elem) => List::nil().cons(elem.clone()),
            None => List::nil(),
        }
    }

    /// Returns a new list with `elem` after the elements of `self`
    ///
    /// Every node of `self` is rebuilt, so this is `O(n)`.
    pub fn add_end(&self, elem: T) -> Self {
        List::nil().cons(elem).prepend_all(self.iter().cloned().collect())
    }

    /// Returns a new list without the last element of `self`
    ///
    /// Lists with fewer than two elements become empty.
    pub fn remove_last(&self) -> Self {
        let len = self.len();
        if len <= 1 {
            return List::nil();
        }
        List::nil().prepend_all(self.iter().take(len - 1).cloned().collect())
    }

    /// Returns a list of the first `n` elements of `self`, in order
    ///
    /// If `self` has no more than `n` elements, a list equal to `self` is returned.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] if `n` is zero
    pub fn take(&self, n: usize) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidCount(n));
        }
        if n >= self.len() {
            log::trace!("take: {} covers the whole list", n);
            return Ok(self.clone());
        }
        Ok(List::nil().prepend_all(self.iter().take(n).cloned().collect()))
    }
}

impl<T: fmt::Display> List<T> {
    /// Lazily renders each element, followed by the [`TAIL`] marker
    pub fn show(&self) -> impl Iterator<Item = String> + '_ {
        self.iter()
            .map(ToString::to_string)
            .chain(iter::once(TAIL.to_string()))
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::nil()
    }
}

impl<T> Drop for List<T> {
    /// Unlinks uniquely owned nodes one at a time, so long lists do not overflow the stack
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::nil().prepend_all(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
