// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{BoundedStack, LinkedStack, PushError, StackError};

/// The operations every LIFO container in this crate shares.
///
/// This lets you write code which doesn't care whether it's running on a
/// [`BoundedStack`][BoundedStack], a [`LinkedStack`][LinkedStack] or a plain
/// `Vec`. The methods carry a `stack_` prefix so they don't shadow the
/// inherent methods of the same name.
///
/// # Examples
///
/// ```rust
/// # use boundstack::{BoundedStack, LinkedStack, Stack};
/// fn drain<S: Stack<usize>>(stack: &mut S) -> Vec<usize> {
///     let mut out = Vec::new();
///     while let Ok(value) = stack.stack_pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut bounded = BoundedStack::new(3);
/// let mut linked = LinkedStack::new();
/// for value in 0..3 {
///     bounded.push(value).unwrap();
///     linked.push(value);
/// }
/// assert_eq!(drain(&mut bounded), drain(&mut linked));
/// ```
///
/// [BoundedStack]: struct.BoundedStack.html
/// [LinkedStack]: struct.LinkedStack.html
pub trait Stack<A> {
    /// Construct an empty stack with room for `capacity` values.
    ///
    /// Only bounded stacks treat this as a limit. The others treat it as a
    /// hint for how much to preallocate.
    fn stack_new(capacity: usize) -> Self;
    /// Push a value, handing it back if there's no room for it.
    fn stack_push(&mut self, value: A) -> Result<(), PushError<A>>;
    /// Remove and return the most recently pushed value.
    fn stack_pop(&mut self) -> Result<A, StackError>;
    /// Look at the most recently pushed value.
    fn stack_peek(&self) -> Result<&A, StackError>;
    /// The number of values currently on the stack.
    fn stack_len(&self) -> usize;
}

impl<A> Stack<A> for Vec<A> {
    fn stack_new(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline(always)]
    fn stack_push(&mut self, value: A) -> Result<(), PushError<A>> {
        self.push(value);
        Ok(())
    }

    #[inline(always)]
    fn stack_pop(&mut self) -> Result<A, StackError> {
        self.pop().ok_or(StackError::Underflow)
    }

    #[inline(always)]
    fn stack_peek(&self) -> Result<&A, StackError> {
        self.last().ok_or(StackError::Underflow)
    }

    #[inline(always)]
    fn stack_len(&self) -> usize {
        self.len()
    }
}

impl<A> Stack<A> for BoundedStack<A> {
    fn stack_new(capacity: usize) -> Self {
        Self::new(capacity)
    }

    #[inline(always)]
    fn stack_push(&mut self, value: A) -> Result<(), PushError<A>> {
        self.push(value)
    }

    #[inline(always)]
    fn stack_pop(&mut self) -> Result<A, StackError> {
        self.pop()
    }

    #[inline(always)]
    fn stack_peek(&self) -> Result<&A, StackError> {
        self.peek()
    }

    #[inline(always)]
    fn stack_len(&self) -> usize {
        self.len()
    }
}

impl<A> Stack<A> for LinkedStack<A> {
    fn stack_new(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline(always)]
    fn stack_push(&mut self, value: A) -> Result<(), PushError<A>> {
        self.push(value);
        Ok(())
    }

    #[inline(always)]
    fn stack_pop(&mut self) -> Result<A, StackError> {
        self.pop()
    }

    #[inline(always)]
    fn stack_peek(&self) -> Result<&A, StackError> {
        self.peek()
    }

    #[inline(always)]
    fn stack_len(&self) -> usize {
        self.len()
    }
}
