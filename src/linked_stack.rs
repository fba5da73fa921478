// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::{FromIterator, FusedIterator};

use tracing::trace;

use crate::StackError;

#[derive(Clone)]
enum Slot<A> {
    Occupied { value: A, next: Option<usize> },
    Vacant { next_free: Option<usize> },
}

/// An unbounded last in, first out stack built from linked nodes.
///
/// The nodes live in an arena and link to each other by index, so there's no
/// pointer juggling and dropping a long stack can't overflow the call stack.
/// Popping a value leaves its node slot on a free list, and the next push
/// reuses it instead of growing the arena, so a stack which goes up and down
/// a lot settles into a fixed amount of memory.
///
/// Pushing never fails. Popping or peeking at an empty stack fails with
/// [`StackError::Underflow`][Underflow].
///
/// # Example
///
/// ```rust
/// # use boundstack::{LinkedStack, StackError};
/// let mut stack = LinkedStack::new();
/// stack.push(10);
/// stack.push(20);
/// assert_eq!(Ok(20), stack.pop());
///
/// // The slot `20` lived in is reused here.
/// stack.push(30);
/// assert_eq!(2, stack.slot_count());
/// assert_eq!(Ok(&30), stack.peek());
///
/// stack.clear();
/// assert_eq!(Err(StackError::Underflow), stack.pop());
/// ```
///
/// [Underflow]: enum.StackError.html#variant.Underflow
#[derive(Clone)]
pub struct LinkedStack<A> {
    slots: Vec<Slot<A>>,
    head: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<A> LinkedStack<A> {
    /// Construct an empty stack.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Construct an empty stack with room for `capacity` nodes before it has
    /// to reallocate its arena.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            free: None,
            len: 0,
        }
    }

    /// The number of values currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test whether the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The number of node slots in the arena, whether in use or free.
    ///
    /// This is the most values the stack has held at once since it was
    /// constructed or last cleared.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: A) {
        let node = Slot::Occupied {
            value,
            next: self.head,
        };
        let index = match self.free {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free = next_free;
                }
                self.slots[index] = node;
                index
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        };
        self.head = Some(index);
        self.len += 1;
    }

    /// Remove the value on top of the stack and return it.
    pub fn pop(&mut self) -> Result<A, StackError> {
        let index = self.head_or_underflow("pop")?;
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { value, next } => {
                self.head = next;
                self.free = Some(index);
                self.len -= 1;
                Ok(value)
            }
            Slot::Vacant { .. } => unreachable!("stack head points at a vacant slot"),
        }
    }

    /// Get a reference to the value on top of the stack.
    pub fn peek(&self) -> Result<&A, StackError> {
        let index = self.head_or_underflow("peek")?;
        Ok(self.node(index).0)
    }

    /// Get a mutable reference to the value on top of the stack.
    pub fn peek_mut(&mut self) -> Result<&mut A, StackError> {
        let index = self.head_or_underflow("peek")?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Ok(value),
            Slot::Vacant { .. } => unreachable!("stack head points at a vacant slot"),
        }
    }

    /// Drop every value on the stack and release its free slots.
    ///
    /// The arena keeps its allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.free = None;
        self.len = 0;
    }

    /// Iterate over the values on the stack, starting from the top.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            stack: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Find how far from the top of the stack a value is.
    ///
    /// The top of the stack is at position `1`. If the value occurs more than
    /// once, you get the position nearest the top.
    pub fn search(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.iter()
            .position(|item| item == value)
            .map(|index| index + 1)
    }

    fn head_or_underflow(&self, operation: &'static str) -> Result<usize, StackError> {
        self.head.ok_or_else(|| {
            trace!(operation, "rejected: stack underflow");
            StackError::Underflow
        })
    }

    fn node(&self, index: usize) -> (&A, Option<usize>) {
        match &self.slots[index] {
            Slot::Occupied { value, next } => (value, *next),
            Slot::Vacant { .. } => unreachable!("live link points at a vacant slot"),
        }
    }
}

impl<A> Default for LinkedStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Extend<A> for LinkedStack<A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<A> FromIterator<A> for LinkedStack<A> {
    /// Push every value from the iterator in order, so the last one ends up
    /// on top.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<A> PartialEq for LinkedStack<A>
where
    A: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<A> Eq for LinkedStack<A> where A: Eq {}

impl<'a, A> IntoIterator for &'a LinkedStack<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> Debug for LinkedStack<A>
where
    A: Debug,
{
    /// Debug implementation for `LinkedStack`.
    ///
    /// Unlike the array backed stacks, values are listed from the top down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::LinkedStack;
    /// let stack: LinkedStack<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!("LinkedStack[3][3, 2, 1]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "LinkedStack[{}]", self.len)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over a [`LinkedStack`][LinkedStack], from the top down.
///
/// [LinkedStack]: struct.LinkedStack.html
pub struct Iter<'a, A> {
    stack: &'a LinkedStack<A>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, next) = self.stack.node(self.next?);
        self.next = next;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, A> Debug for Iter<'a, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Iter[{} remaining]", self.remaining)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::DropTest;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn push_peek_pop() {
        let mut stack = LinkedStack::new();
        for value in &[10, 20, 30, 40] {
            stack.push(*value);
        }
        assert_eq!(4, stack.len());
        assert_eq!(Ok(&40), stack.peek());
        assert_eq!(Ok(40), stack.pop());
        assert_eq!(Ok(30), stack.pop());
        assert_eq!(2, stack.len());
        assert_eq!(Ok(&20), stack.peek());
        assert!(!stack.is_empty());
    }

    #[test]
    fn underflow() {
        let mut stack: LinkedStack<String> = LinkedStack::default();
        assert_eq!(Err(StackError::Underflow), stack.pop());
        assert_eq!(Err(StackError::Underflow), stack.peek());
        assert_eq!(Err(StackError::Underflow), stack.peek_mut());
        assert!(stack.is_empty());
        assert_eq!(0, stack.len());
    }

    #[test]
    fn popped_slots_get_reused() {
        let mut stack = LinkedStack::new();
        stack.extend(0..8);
        assert_eq!(8, stack.slot_count());
        for _ in 0..5 {
            assert!(stack.pop().is_ok());
        }
        stack.extend(100..105);
        assert_eq!(8, stack.slot_count());
        assert_eq!(
            vec![104, 103, 102, 101, 100, 2, 1, 0],
            stack.iter().copied().collect::<Vec<_>>()
        );
        stack.push(1337);
        assert_eq!(9, stack.slot_count());
    }

    #[test]
    fn search_from_the_top() {
        let stack: LinkedStack<_> = vec!["a", "b", "c", "b"].into_iter().collect();
        assert_eq!(Some(1), stack.search(&"b"));
        assert_eq!(Some(2), stack.search(&"c"));
        assert_eq!(Some(4), stack.search(&"a"));
        assert_eq!(None, stack.search(&"z"));
    }

    #[test]
    fn clear_drops_everything() {
        let counter = AtomicUsize::new(0);
        let mut stack = LinkedStack::new();
        for _ in 0..6 {
            stack.push(DropTest::new(&counter));
        }
        drop(stack.pop());
        assert_eq!(5, counter.load(Ordering::SeqCst));
        stack.clear();
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert_eq!(0, stack.slot_count());
        assert!(stack.is_empty());
        stack.push(DropTest::new(&counter));
        drop(stack);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_a_long_stack() {
        let mut stack = LinkedStack::new();
        stack.extend(0..1_000_000usize);
        assert_eq!(1_000_000, stack.len());
    }

    #[test]
    fn equality_ignores_slot_layout() {
        let mut churned = LinkedStack::new();
        churned.extend(0..10);
        for _ in 0..8 {
            assert!(churned.pop().is_ok());
        }
        churned.push(2);
        let fresh: LinkedStack<_> = (0..3).collect();
        assert_eq!(fresh, churned);
        assert_ne!(fresh.slot_count(), churned.slot_count());
    }

    #[test]
    fn iterator_length() {
        let stack: LinkedStack<_> = (0..5).collect();
        let mut iter = stack.iter();
        assert_eq!(5, iter.len());
        iter.next();
        assert_eq!(4, iter.len());
        assert_eq!(4, (&stack).into_iter().skip(1).count());
    }

    proptest! {
        #[test]
        fn matches_a_vec(
            actions in proptest::collection::vec(proptest::option::of(any::<i32>()), 0..128)
        ) {
            let mut stack = LinkedStack::new();
            let mut model = Vec::new();
            for action in actions {
                match action {
                    Some(value) => {
                        stack.push(value);
                        model.push(value);
                    }
                    None => {
                        let expected = model.pop().ok_or(StackError::Underflow);
                        prop_assert_eq!(expected, stack.pop());
                    }
                }
                prop_assert_eq!(model.len(), stack.len());
                prop_assert_eq!(model.last(), stack.peek().ok());
                prop_assert!(stack.slot_count() >= stack.len());
            }
            let drained: Vec<i32> = stack.iter().copied().collect();
            model.reverse();
            prop_assert_eq!(model, drained);
        }
    }
}
