//! # Doubly Linked List
//!
//! A sequence with insertion and deletion at both ends.
//!
//! Nodes live in an arena owned by the list and refer to each other by slot
//! index. The `next` chain starting at `head` defines the sequence; `prev`
//! links only serve navigation and never decide when a node is released.
//!
//! The list keeps no tail link: appending and removing the last node walk the
//! `next` chain from the head and are `O(n)`.
//!
//! Released slots are never handed to a later insert. Trailing empty slots
//! are dropped right away, the arena is compacted once empty slots outnumber
//! live nodes, and a drained list gives its storage back entirely.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, warn};

type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    head: Link,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Links a new node in front of the current head. `O(1)`.
    pub fn insert_at_beginning(&mut self, value: T) {
        let old_head: Link = self.head;
        let idx: usize = self.allocate(Node {
            value,
            prev: None,
            next: old_head,
        });

        if let Some(old) = old_head {
            self.node_mut(old).prev = Some(idx);
        }
        self.head = Some(idx);

        debug!("Inserted node {idx} at the beginning");
    }

    /// Links a new node after the last one. `O(n)`.
    pub fn insert_at_end(&mut self, value: T) {
        let last: Link = self.last();
        let idx: usize = self.allocate(Node {
            value,
            prev: last,
            next: None,
        });

        match last {
            Some(last) => self.node_mut(last).next = Some(idx),
            None => self.head = Some(idx),
        }

        debug!("Inserted node {idx} at the end");
    }

    /// Unlinks the head and returns its value.
    ///
    /// On an empty list this logs a notice and returns `None`.
    pub fn delete_from_beginning(&mut self) -> Option<T> {
        let Some(old_head) = self.head else {
            warn!("List is empty");
            return None;
        };

        let node: Node<T> = self.release(old_head);
        self.head = node.next;
        if let Some(new_head) = self.head {
            self.node_mut(new_head).prev = None;
        }
        self.shrink();

        Some(node.value)
    }

    /// Unlinks the last node and returns its value. `O(n)`.
    ///
    /// On an empty list this logs a notice and returns `None`.
    pub fn delete_from_end(&mut self) -> Option<T> {
        let Some(last) = self.last() else {
            warn!("List is empty");
            return None;
        };

        let node: Node<T> = self.release(last);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        self.shrink();

        Some(node.value)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.head = None;
        self.len = 0;
    }

    /// Values from head to tail.
    pub fn display(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Walks the `next` chain from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Walks the `prev` chain, starting at the last node reachable from the head.
    pub fn iter_backward(&self) -> IterBackward<'_, T> {
        IterBackward {
            list: self,
            cursor: self.last(),
            remaining: self.len,
        }
    }

    fn last(&self) -> Link {
        let mut cursor: usize = self.head?;
        while let Some(next) = self.node(cursor).next {
            cursor = next;
        }
        Some(cursor)
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        self.len += 1;
        self.slots.push(Some(node));
        self.slots.len() - 1
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        let node = self.slots[idx]
            .take()
            .unwrap_or_else(|| unreachable!("released an unoccupied slot {idx}"));
        self.len -= 1;
        node
    }

    /// Gives back storage held by released slots. Must run after relinking.
    fn shrink(&mut self) {
        if self.head.is_none() {
            self.slots = Vec::new();
            return;
        }

        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }

        if self.slots.len() > 2 * self.len {
            self.compact();
        } else if self.slots.capacity() > 4 * self.slots.len() {
            self.slots.shrink_to(2 * self.slots.len());
        }
    }

    /// Moves the live nodes to the front of a fresh arena, in list order.
    fn compact(&mut self) {
        let mut slots: Vec<Option<Node<T>>> = Vec::with_capacity(self.len);
        let mut cursor: Link = self.head;

        while let Some(idx) = cursor {
            let mut node: Node<T> = self.slots[idx]
                .take()
                .unwrap_or_else(|| unreachable!("dangling link to slot {idx}"));
            cursor = node.next;

            let new_idx: usize = slots.len();
            node.prev = new_idx.checked_sub(1);
            node.next = cursor.map(|_| new_idx + 1);
            slots.push(Some(node));
        }

        debug!("Compacted {} slots down to {}", self.slots.len(), slots.len());
        self.slots = slots;
        self.head = Some(0);
    }

    fn node(&self, idx: usize) -> &Node<T> {
        self.slots[idx]
            .as_ref()
            .unwrap_or_else(|| unreachable!("dangling link to slot {idx}"))
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.slots[idx]
            .as_mut()
            .unwrap_or_else(|| unreachable!("dangling link to slot {idx}"))
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_end(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node: &'a Node<T> = self.list.node(self.cursor?);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

pub struct IterBackward<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: Link,
    remaining: usize,
}

impl<'a, T> Iterator for IterBackward<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node: &'a Node<T> = self.list.node(self.cursor?);
        self.cursor = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterBackward<'_, T> {}
impl<T> FusedIterator for IterBackward<'_, T> {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
