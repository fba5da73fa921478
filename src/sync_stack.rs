// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::sync::Arc;

use parking_lot::Mutex;
use static_assertions::assert_impl_all;

use crate::{DualBoundedStack, PushError, Side, StackError};

/// A [`DualBoundedStack`][DualBoundedStack] which can be shared between
/// threads.
///
/// Whether a push to one side succeeds depends on how full the other side is,
/// so the two sides can't be locked separately: a single lock covers the
/// whole structure, and every operation holds it for its full duration.
/// Cloning the handle gives you another reference to the same stacks.
///
/// This is only available if you've enabled the `sync` feature flag.
///
/// # Example
///
/// ```rust
/// # use boundstack::{SharedDualStack, Side};
/// let stacks = SharedDualStack::new(4);
/// let handle = stacks.clone();
/// std::thread::spawn(move || {
///     handle.push(Side::Second, 1337).unwrap();
/// })
/// .join()
/// .unwrap();
/// assert_eq!(Ok(1337), stacks.pop(Side::Second));
/// ```
///
/// [DualBoundedStack]: struct.DualBoundedStack.html
pub struct SharedDualStack<A> {
    inner: Arc<Mutex<DualBoundedStack<A>>>,
}

assert_impl_all!(SharedDualStack<u8>: Send, Sync, Clone);

impl<A> SharedDualStack<A> {
    /// Construct two empty stacks sharing room for `capacity` values between
    /// them.
    ///
    /// # Panics
    ///
    /// If `capacity` exceeds [`MAX_CAPACITY`][MAX_CAPACITY].
    ///
    /// [MAX_CAPACITY]: constant.MAX_CAPACITY.html
    pub fn new(capacity: usize) -> Self {
        DualBoundedStack::new(capacity).into()
    }

    /// The number of values both sides can hold between them.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// The number of values on one side.
    pub fn len(&self, side: Side) -> usize {
        self.inner.lock().len(side)
    }

    /// Test whether one side is empty.
    pub fn is_empty(&self, side: Side) -> bool {
        self.inner.lock().is_empty(side)
    }

    /// Test whether the shared buffer is full.
    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    /// Push a value onto the top of one side.
    pub fn push(&self, side: Side, value: A) -> Result<(), PushError<A>> {
        self.inner.lock().push(side, value)
    }

    /// Remove the value on top of one side and return it.
    pub fn pop(&self, side: Side) -> Result<A, StackError> {
        self.inner.lock().pop(side)
    }

    /// Get a copy of the value on top of one side.
    ///
    /// Use [`with()`][with] if you don't want to clone it.
    ///
    /// [with]: #method.with
    pub fn peek(&self, side: Side) -> Result<A, StackError>
    where
        A: Clone,
    {
        self.inner.lock().peek(side).map(Clone::clone)
    }

    /// Run a function with exclusive access to both stacks.
    ///
    /// Use this when you need several operations to happen without another
    /// thread getting in between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::{SharedDualStack, Side, StackError};
    /// let stacks = SharedDualStack::new(4);
    /// stacks.push(Side::First, 1).unwrap();
    /// // Move the top of the first side over to the second.
    /// stacks.with(|stacks| -> Result<(), StackError> {
    ///     let value = stacks.pop(Side::First)?;
    ///     stacks.push(Side::Second, value)?;
    ///     Ok(())
    /// })
    /// .unwrap();
    /// assert_eq!(1, stacks.len(Side::Second));
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DualBoundedStack<A>) -> R,
    {
        let mut stacks = self.inner.lock();
        f(&mut *stacks)
    }
}

impl<A> From<DualBoundedStack<A>> for SharedDualStack<A> {
    fn from(stacks: DualBoundedStack<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(stacks)),
        }
    }
}

impl<A> Clone for SharedDualStack<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A> Debug for SharedDualStack<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Shared{:?}", *self.inner.lock())
    }
}
