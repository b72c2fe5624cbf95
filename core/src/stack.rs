//! # Linked Stack
//!
//! A LIFO stack built from singly linked, heap-allocated frames. Each frame
//! owns the one below it.

use std::fmt;

use tracing::warn;

struct Frame<T> {
    value: T,
    below: Option<Box<Frame<T>>>,
}

pub struct LinkedStack<T> {
    top: Option<Box<Frame<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Frame { value, below }));
        self.len += 1;
    }

    /// Removes the top value. On an empty stack this logs a notice and returns `None`.
    pub fn pop(&mut self) -> Option<T> {
        let Some(frame) = self.top.take() else {
            warn!("Stack is empty");
            return None;
        };

        let Frame { value, below } = *frame;
        self.top = below;
        self.len -= 1;
        Some(value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|frame| &frame.value)
    }

    /// Values from top to bottom.
    pub fn display(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.top.as_deref(),
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    // Unlink frame by frame; the default drop would recurse once per frame.
    fn drop(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut frame) = cursor {
            cursor = frame.below.take();
        }
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
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

pub struct Iter<'a, T> {
    cursor: Option<&'a Frame<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.cursor?;
        self.cursor = frame.below.as_deref();
        Some(&frame.value)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_sequence() {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        stack.push(50);
        stack.push(30);
        stack.push(10);

        assert_eq!(stack.pop(), Some(10));
        assert!(!stack.is_empty());
        assert_eq!(stack.display(), vec![30, 50]);
        assert_eq!(stack.to_string(), "30 50");
        assert_eq!(stack.peek(), Some(&30));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_empty() {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_drop_deep_stack() {
        let mut stack: LinkedStack<u32> = LinkedStack::new();
        stack.extend(0..1_000_000);
        assert_eq!(stack.len(), 1_000_000);
        drop(stack);
    }
}
