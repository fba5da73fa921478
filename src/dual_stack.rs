// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::FusedIterator;
use std::slice;

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::{PushError, StackError, DEFAULT_CAPACITY};

/// Selects one of the two stacks in a [`DualBoundedStack`][DualBoundedStack].
///
/// [DualBoundedStack]: struct.DualBoundedStack.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The stack which starts at the beginning of the buffer and grows
    /// towards the end.
    First,
    /// The stack which starts at the end of the buffer and grows towards the
    /// beginning.
    Second,
}

impl Side {
    /// Both sides, first side first.
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Two last in, first out stacks sharing one fixed capacity buffer.
///
/// The [first][Side::First] stack grows upwards from the start of the buffer
/// and the [second][Side::Second] grows downwards from its end. Neither
/// side has a capacity of its own: either one can keep growing until it runs
/// into the other, so a push only fails with
/// [`StackError::Overflow`][Overflow] when the two sides together occupy the
/// whole buffer. That's the point of sharing the buffer: when one side is
/// busy and the other is quiet, the busy side gets to use the room the quiet
/// side isn't using.
///
/// Popping or peeking at an empty side fails with
/// [`StackError::Underflow`][Underflow] regardless of what's on the other
/// side. A failed operation leaves both sides exactly as they were.
///
/// # Example
///
/// ```rust
/// # use boundstack::{DualBoundedStack, Side};
/// let mut stacks = DualBoundedStack::new(10);
/// for value in &[10, 20, 30] {
///     stacks.push(Side::First, *value).unwrap();
/// }
/// for value in &[100, 200, 300] {
///     stacks.push(Side::Second, *value).unwrap();
/// }
/// assert_eq!(3, stacks.len(Side::First));
/// assert_eq!(3, stacks.len(Side::Second));
/// assert_eq!(Some(2), stacks.top_index(Side::First));
/// assert_eq!(Some(7), stacks.top_index(Side::Second));
///
/// assert_eq!(Ok(&30), stacks.peek(Side::First));
/// assert_eq!(Ok(300), stacks.pop(Side::Second));
/// ```
///
/// [Side::First]: enum.Side.html#variant.First
/// [Side::Second]: enum.Side.html#variant.Second
/// [Overflow]: enum.StackError.html#variant.Overflow
/// [Underflow]: enum.StackError.html#variant.Underflow
pub struct DualBoundedStack<A> {
    buffer: Buffer<A>,
    // The first side lives in `0..low` and the second in `high..capacity`,
    // with `low <= high` at all times.
    low: usize,
    high: usize,
}

impl<A> DualBoundedStack<A> {
    /// Construct two empty stacks sharing room for `capacity` values between
    /// them.
    ///
    /// # Panics
    ///
    /// If `capacity` exceeds [`MAX_CAPACITY`][MAX_CAPACITY].
    ///
    /// [MAX_CAPACITY]: constant.MAX_CAPACITY.html
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "constructing dual bounded stack");
        Self {
            buffer: Buffer::new(capacity),
            low: 0,
            high: capacity,
        }
    }

    /// The number of values both sides can hold between them.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The number of values on one side.
    #[inline]
    pub fn len(&self, side: Side) -> usize {
        match side {
            Side::First => self.low,
            Side::Second => self.capacity() - self.high,
        }
    }

    /// The number of values on both sides together.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.low + (self.capacity() - self.high)
    }

    /// How many more values can be pushed, to either side, before the buffer
    /// is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.high - self.low
    }

    /// Test whether one side is empty.
    #[inline]
    pub fn is_empty(&self, side: Side) -> bool {
        self.len(side) == 0
    }

    /// Test whether the shared buffer is full.
    ///
    /// When it is, neither side can be pushed to.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.low == self.high
    }

    /// The buffer index of the value on top of one side, or `None` if that
    /// side is empty.
    pub fn top_index(&self, side: Side) -> Option<usize> {
        if self.is_empty(side) {
            return None;
        }
        Some(match side {
            Side::First => self.low - 1,
            Side::Second => self.high,
        })
    }

    /// Push a value onto the top of one side.
    ///
    /// This fails when the buffer is full, which depends on how much room the
    /// other side is taking up as well as this one. You get the value back
    /// inside the [`PushError`][PushError].
    ///
    /// [PushError]: struct.PushError.html
    pub fn push(&mut self, side: Side, value: A) -> Result<(), PushError<A>> {
        if self.is_full() {
            trace!(
                ?side,
                first = self.len(Side::First),
                second = self.len(Side::Second),
                "push rejected: shared buffer exhausted"
            );
            return Err(PushError::new(value));
        }
        match side {
            Side::First => {
                unsafe { self.buffer.write(self.low, value) };
                self.low += 1;
            }
            Side::Second => {
                unsafe { self.buffer.write(self.high - 1, value) };
                self.high -= 1;
            }
        }
        Ok(())
    }

    /// Remove the value on top of one side and return it.
    pub fn pop(&mut self, side: Side) -> Result<A, StackError> {
        let index = self.top_or_underflow(side, "pop")?;
        match side {
            Side::First => self.low -= 1,
            Side::Second => self.high += 1,
        }
        Ok(unsafe { self.buffer.read(index) })
    }

    /// Get a reference to the value on top of one side.
    pub fn peek(&self, side: Side) -> Result<&A, StackError> {
        let index = self.top_or_underflow(side, "peek")?;
        Ok(unsafe { self.buffer.get(index) })
    }

    /// Get a mutable reference to the value on top of one side.
    pub fn peek_mut(&mut self, side: Side) -> Result<&mut A, StackError> {
        let index = self.top_or_underflow(side, "peek")?;
        Ok(unsafe { self.buffer.get_mut(index) })
    }

    fn top_or_underflow(
        &self,
        side: Side,
        operation: &'static str,
    ) -> Result<usize, StackError> {
        self.top_index(side).ok_or_else(|| {
            trace!(?side, operation, "rejected: stack underflow");
            StackError::Underflow
        })
    }

    /// Drop every value on one side, leaving the other side alone.
    pub fn clear(&mut self, side: Side) {
        let range = self.range(side);
        match side {
            Side::First => self.low = 0,
            Side::Second => self.high = self.capacity(),
        }
        unsafe { self.buffer.drop_range(range) };
    }

    /// Iterate over the values on one side, starting from the top.
    pub fn iter(&self, side: Side) -> Iter<'_, A> {
        let values = unsafe { self.buffer.slice(self.range(side)) };
        Iter {
            inner: values.iter(),
            // The first side's top is at the end of its range, the second
            // side's at the start.
            reversed: side == Side::First,
        }
    }

    /// Find how far from the top of one side a value is.
    ///
    /// The top is at position `1`. Only the given side is searched.
    pub fn search(&self, side: Side, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.iter(side)
            .position(|item| item == value)
            .map(|index| index + 1)
    }

    fn range(&self, side: Side) -> std::ops::Range<usize> {
        match side {
            Side::First => 0..self.low,
            Side::Second => self.high..self.capacity(),
        }
    }
}

impl<A> Default for DualBoundedStack<A> {
    /// Construct two empty stacks sharing a buffer of
    /// [`DEFAULT_CAPACITY`][DEFAULT_CAPACITY].
    ///
    /// [DEFAULT_CAPACITY]: constant.DEFAULT_CAPACITY.html
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<A> Drop for DualBoundedStack<A> {
    fn drop(&mut self) {
        for side in &Side::BOTH {
            self.clear(*side);
        }
    }
}

impl<A> Clone for DualBoundedStack<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        let mut out = Self::new(self.capacity());
        for index in self.range(Side::First) {
            unsafe { out.buffer.write(index, self.buffer.get(index).clone()) };
            out.low += 1;
        }
        for index in self.range(Side::Second).rev() {
            unsafe { out.buffer.write(index, self.buffer.get(index).clone()) };
            out.high -= 1;
        }
        out
    }
}

impl<A> PartialEq for DualBoundedStack<A>
where
    A: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && Side::BOTH
                .iter()
                .all(|side| self.iter(*side).eq(other.iter(*side)))
    }
}

impl<A> Eq for DualBoundedStack<A> where A: Eq {}

impl<A> Debug for DualBoundedStack<A>
where
    A: Debug,
{
    /// Debug implementation for `DualBoundedStack`.
    ///
    /// Each side is listed from the bottom up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::{DualBoundedStack, Side};
    /// let mut stacks = DualBoundedStack::new(5);
    /// stacks.push(Side::First, 1).unwrap();
    /// stacks.push(Side::First, 2).unwrap();
    /// stacks.push(Side::Second, 3).unwrap();
    /// assert_eq!("DualBoundedStack[2+1/5][1, 2][3]", format!("{:?}", stacks));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "DualBoundedStack[{}+{}/{}]",
            self.len(Side::First),
            self.len(Side::Second),
            self.capacity()
        )?;
        f.debug_list()
            .entries(self.iter(Side::First).rev())
            .finish()?;
        f.debug_list()
            .entries(self.iter(Side::Second).rev())
            .finish()
    }
}

/// An iterator over one side of a [`DualBoundedStack`][DualBoundedStack],
/// from the top down.
///
/// [DualBoundedStack]: struct.DualBoundedStack.html
#[derive(Debug)]
pub struct Iter<'a, A> {
    inner: slice::Iter<'a, A>,
    reversed: bool,
}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            reversed: self.reversed,
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}
