// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::{FromIterator, Rev};
use std::slice;

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::{PushError, StackError, DEFAULT_CAPACITY};

/// A last in, first out stack with a capacity fixed at construction time.
///
/// The values live in a single contiguous buffer which is allocated up front
/// and never grows. Pushing onto a full stack fails with
/// [`StackError::Overflow`][Overflow], and popping or peeking at an empty
/// stack fails with [`StackError::Underflow`][Underflow]. A failed operation
/// leaves the stack exactly as it was.
///
/// # Example
///
/// ```rust
/// # use boundstack::BoundedStack;
/// let mut stack = BoundedStack::new(5);
/// for value in &[10, 20, 30, 40] {
///     stack.push(*value).unwrap();
/// }
/// assert_eq!(4, stack.len());
/// assert_eq!(Ok(&40), stack.peek());
///
/// assert_eq!(Ok(40), stack.pop());
/// assert_eq!(3, stack.len());
/// assert_eq!(Ok(&30), stack.peek());
/// ```
///
/// [Overflow]: enum.StackError.html#variant.Overflow
/// [Underflow]: enum.StackError.html#variant.Underflow
pub struct BoundedStack<A> {
    buffer: Buffer<A>,
    len: usize,
}

impl<A> BoundedStack<A> {
    /// Construct an empty stack which can hold at most `capacity` values.
    ///
    /// The whole buffer is allocated here. A capacity of `0` gives you a
    /// stack which is always both empty and full.
    ///
    /// # Panics
    ///
    /// If `capacity` exceeds [`MAX_CAPACITY`][MAX_CAPACITY].
    ///
    /// [MAX_CAPACITY]: constant.MAX_CAPACITY.html
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "constructing bounded stack");
        Self {
            buffer: Buffer::new(capacity),
            len: 0,
        }
    }

    /// The maximum number of values the stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The number of values currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// How many more values can be pushed before the stack is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Test whether the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Test whether the stack is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Push a value onto the top of the stack.
    ///
    /// If the stack is full, you get the value back inside a
    /// [`PushError`][PushError].
    ///
    /// [PushError]: struct.PushError.html
    pub fn push(&mut self, value: A) -> Result<(), PushError<A>> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "push rejected: stack overflow");
            return Err(PushError::new(value));
        }
        unsafe { self.buffer.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Remove the value on top of the stack and return it.
    pub fn pop(&mut self) -> Result<A, StackError> {
        if self.is_empty() {
            trace!("pop rejected: stack underflow");
            return Err(StackError::Underflow);
        }
        self.len -= 1;
        Ok(unsafe { self.buffer.read(self.len) })
    }

    /// Get a reference to the value on top of the stack.
    pub fn peek(&self) -> Result<&A, StackError> {
        if self.is_empty() {
            trace!("peek rejected: stack underflow");
            return Err(StackError::Underflow);
        }
        Ok(unsafe { self.buffer.get(self.len - 1) })
    }

    /// Get a mutable reference to the value on top of the stack.
    pub fn peek_mut(&mut self) -> Result<&mut A, StackError> {
        if self.is_empty() {
            trace!("peek rejected: stack underflow");
            return Err(StackError::Underflow);
        }
        Ok(unsafe { self.buffer.get_mut(self.len - 1) })
    }

    /// Drop every value on the stack, keeping its buffer.
    pub fn clear(&mut self) {
        let len = self.len;
        // Forget the values before dropping them, so a panicking `Drop`
        // can't get them dropped twice.
        self.len = 0;
        unsafe { self.buffer.drop_range(0..len) };
    }

    /// The values on the stack, in the order they were pushed.
    ///
    /// The bottom of the stack is at index `0` and the top is at the end.
    pub fn as_slice(&self) -> &[A] {
        unsafe { self.buffer.slice(0..self.len) }
    }

    /// Iterate over the values on the stack, starting from the top.
    pub fn iter(&self) -> Rev<slice::Iter<'_, A>> {
        self.as_slice().iter().rev()
    }

    /// Find how far from the top of the stack a value is.
    ///
    /// The top of the stack is at position `1`. If the value occurs more than
    /// once, you get the position nearest the top.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::BoundedStack;
    /// let mut stack = BoundedStack::new(8);
    /// for value in &["a", "b", "c", "b"] {
    ///     stack.push(*value).unwrap();
    /// }
    /// assert_eq!(Some(1), stack.search(&"b"));
    /// assert_eq!(Some(4), stack.search(&"a"));
    /// assert_eq!(None, stack.search(&"z"));
    /// ```
    pub fn search(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.iter()
            .position(|item| item == value)
            .map(|index| index + 1)
    }
}

impl<A> Default for BoundedStack<A> {
    /// Construct an empty stack with a capacity of
    /// [`DEFAULT_CAPACITY`][DEFAULT_CAPACITY].
    ///
    /// [DEFAULT_CAPACITY]: constant.DEFAULT_CAPACITY.html
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<A> Drop for BoundedStack<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<A> Clone for BoundedStack<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        let mut out = Self::new(self.capacity());
        for (index, value) in self.as_slice().iter().enumerate() {
            unsafe { out.buffer.write(index, value.clone()) };
            out.len += 1;
        }
        out
    }
}

impl<A> From<Vec<A>> for BoundedStack<A> {
    /// Construct a full stack out of the values in a `Vec`.
    ///
    /// The capacity is the length of the `Vec`, and its last value ends up on
    /// top.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::BoundedStack;
    /// let stack = BoundedStack::from(vec![1, 2, 3]);
    /// assert!(stack.is_full());
    /// assert_eq!(Ok(&3), stack.peek());
    /// ```
    fn from(values: Vec<A>) -> Self {
        let mut stack = Self::new(values.len());
        for (index, value) in values.into_iter().enumerate() {
            unsafe { stack.buffer.write(index, value) };
            stack.len += 1;
        }
        stack
    }
}

impl<A> FromIterator<A> for BoundedStack<A> {
    /// Push every value from the iterator in order into a stack just big
    /// enough to hold them.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<A> PartialEq for BoundedStack<A>
where
    A: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.as_slice() == other.as_slice()
    }
}

impl<A> Eq for BoundedStack<A> where A: Eq {}

impl<'a, A> IntoIterator for &'a BoundedStack<A> {
    type Item = &'a A;
    type IntoIter = Rev<slice::Iter<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> Debug for BoundedStack<A>
where
    A: Debug,
{
    /// Debug implementation for `BoundedStack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::BoundedStack;
    /// let mut stack = BoundedStack::new(4);
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// assert_eq!("BoundedStack[2/4][1, 2]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "BoundedStack[{}/{}]", self.len, self.capacity())?;
        f.debug_list().entries(self.as_slice()).finish()
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
        let mut stack = BoundedStack::new(5);
        for value in &[10, 20, 30, 40] {
            assert_eq!(Ok(()), stack.push(*value).map_err(StackError::from));
        }
        assert_eq!(4, stack.len());
        assert_eq!(Ok(&40), stack.peek());
        assert_eq!(Ok(40), stack.pop());
        assert_eq!(3, stack.len());
        assert_eq!(Ok(&30), stack.peek());
        assert!(!stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(2, stack.remaining());
    }

    #[test]
    fn overflow_leaves_stack_unchanged() {
        let mut stack = BoundedStack::new(3);
        for value in 0..3 {
            stack.push(value).unwrap();
        }
        assert!(stack.is_full());
        let before = stack.clone();
        let error = stack.push(1337).unwrap_err();
        assert_eq!(StackError::Overflow, error.kind());
        assert_eq!(1337, error.into_inner());
        assert_eq!(before, stack);
        assert_eq!(&[0, 1, 2], stack.as_slice());
    }

    #[test]
    fn underflow_leaves_stack_unchanged() {
        let mut stack: BoundedStack<String> = BoundedStack::new(2);
        assert_eq!(Err(StackError::Underflow), stack.pop());
        assert_eq!(Err(StackError::Underflow), stack.peek());
        assert_eq!(Err(StackError::Underflow), stack.peek_mut());
        assert!(stack.is_empty());
        assert_eq!(2, stack.remaining());
    }

    #[test]
    fn zero_capacity_is_empty_and_full() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_empty());
        assert!(stack.is_full());
        assert!(stack.push(1).is_err());
        assert_eq!(Err(StackError::Underflow), stack.pop());
    }

    #[test]
    fn default_capacity() {
        let stack: BoundedStack<u8> = Default::default();
        assert_eq!(DEFAULT_CAPACITY, stack.capacity());
    }

    #[test]
    fn peek_mut_updates_top() {
        let mut stack = BoundedStack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        *stack.peek_mut().unwrap() *= 10;
        assert_eq!(Ok(20), stack.pop());
        assert_eq!(Ok(1), stack.pop());
    }

    #[test]
    fn iterates_from_the_top() {
        let mut stack = BoundedStack::new(4);
        for value in 1..=4 {
            stack.push(value).unwrap();
        }
        assert_eq!(vec![4, 3, 2, 1], stack.iter().copied().collect::<Vec<_>>());
        assert_eq!(
            vec![4, 3, 2, 1],
            (&stack).into_iter().copied().collect::<Vec<_>>()
        );
        assert_eq!(&[1, 2, 3, 4], stack.as_slice());
    }

    #[test]
    fn clear_drops_values_and_keeps_capacity() {
        let counter = AtomicUsize::new(0);
        let mut stack = BoundedStack::new(8);
        for _ in 0..5 {
            assert!(stack.push(DropTest::new(&counter)).is_ok());
        }
        assert_eq!(5, counter.load(Ordering::SeqCst));
        stack.clear();
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert!(stack.is_empty());
        assert_eq!(8, stack.remaining());
    }

    #[test]
    fn dropping_releases_live_values_once() {
        let counter = AtomicUsize::new(0);
        {
            let mut stack = BoundedStack::new(16);
            for _ in 0..10 {
                assert!(stack.push(DropTest::new(&counter)).is_ok());
            }
            drop(stack.pop());
            drop(stack.pop());
            assert_eq!(8, counter.load(Ordering::SeqCst));
            let rejected = {
                let mut full = BoundedStack::new(0);
                full.push(DropTest::new(&counter)).unwrap_err().into_inner()
            };
            assert_eq!(9, counter.load(Ordering::SeqCst));
            drop(rejected);
        }
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn clone_is_deep() {
        let mut stack = BoundedStack::new(3);
        stack.push(String::from("hello")).unwrap();
        stack.push(String::from("world")).unwrap();
        let mut cloned = stack.clone();
        assert_eq!(stack, cloned);
        cloned.peek_mut().unwrap().push('!');
        assert_eq!(Ok(&String::from("world")), stack.peek());
        assert_eq!(Ok(&String::from("world!")), cloned.peek());
        assert_ne!(stack, cloned);
    }

    #[test]
    fn from_collection_is_full_with_last_on_top() {
        let mut stack = BoundedStack::from(vec!["a", "b", "c"]);
        assert_eq!(3, stack.capacity());
        assert!(stack.is_full());
        assert_eq!(Ok(&"c"), stack.peek());
        assert_eq!(StackError::Overflow, stack.push("d").unwrap_err().kind());
        assert_eq!(Ok("c"), stack.pop());
        assert_eq!(Ok("b"), stack.pop());
        assert_eq!(Ok("a"), stack.pop());

        let collected: BoundedStack<_> = (1..=4).collect();
        assert!(collected.is_full());
        assert_eq!(&[1, 2, 3, 4], collected.as_slice());

        let empty: BoundedStack<u8> = Vec::new().into();
        assert!(empty.is_empty());
        assert!(empty.is_full());
    }

    #[test]
    fn from_collection_drops_values_once() {
        let counter = AtomicUsize::new(0);
        let values: Vec<_> = (0..6).map(|_| DropTest::new(&counter)).collect();
        let stack = BoundedStack::from(values);
        assert_eq!(6, counter.load(Ordering::SeqCst));
        drop(stack);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn equality_includes_capacity() {
        let mut small = BoundedStack::new(1);
        let mut big = BoundedStack::new(2);
        small.push(1).unwrap();
        big.push(1).unwrap();
        assert_ne!(small, big);
    }

    #[test]
    fn debug_format() {
        let mut stack = BoundedStack::new(3);
        assert_eq!("BoundedStack[0/3][]", format!("{:?}", stack));
        stack.push("a").unwrap();
        assert_eq!("BoundedStack[1/3][\"a\"]", format!("{:?}", stack));
    }

    proptest! {
        #[test]
        fn pops_in_reverse_push_order(
            values in proptest::collection::vec(any::<i64>(), 0..64),
            slack in 0usize..8,
        ) {
            let mut stack = BoundedStack::new(values.len() + slack);
            for value in &values {
                prop_assert!(stack.push(*value).is_ok());
            }
            prop_assert_eq!(values.len(), stack.len());
            let mut popped = Vec::new();
            while let Ok(value) = stack.pop() {
                popped.push(value);
            }
            popped.reverse();
            prop_assert_eq!(values, popped);
            prop_assert!(stack.is_empty());
        }

        #[test]
        fn never_exceeds_capacity(
            capacity in 0usize..16,
            pushes in 0usize..32,
        ) {
            let mut stack = BoundedStack::new(capacity);
            let mut accepted = 0;
            for value in 0..pushes {
                match stack.push(value) {
                    Ok(()) => accepted += 1,
                    Err(error) => {
                        prop_assert_eq!(value, error.into_inner());
                    }
                }
            }
            prop_assert_eq!(pushes.min(capacity), accepted);
            prop_assert_eq!(accepted, stack.len());
            prop_assert!(stack.len() <= stack.capacity());
        }
    }
}
