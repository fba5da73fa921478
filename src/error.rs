// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{self, Debug, Display, Formatter};

use thiserror::Error;

/// The ways a stack operation can fail.
///
/// Both of these indicate the caller asked for something the stack can't
/// give it. A failed operation never modifies the stack.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackError {
    /// There was no room left to push another value.
    #[error("stack overflow: no capacity left")]
    Overflow,
    /// There was no value to pop or peek at.
    #[error("stack underflow: stack is empty")]
    Underflow,
}

/// A rejected push.
///
/// Pushing onto a full stack hands the value back to you instead of dropping
/// it. Use [`into_inner()`][into_inner] to recover it, or convert into a
/// [`StackError`][StackError] with `?` if you don't care.
///
/// # Examples
///
/// ```rust
/// # use boundstack::{BoundedStack, StackError};
/// let mut stack = BoundedStack::new(1);
/// stack.push(String::from("in")).unwrap();
/// let error = stack.push(String::from("out")).unwrap_err();
/// assert_eq!(StackError::Overflow, error.kind());
/// assert_eq!("out", error.into_inner());
/// ```
///
/// [into_inner]: #method.into_inner
/// [StackError]: enum.StackError.html
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PushError<A> {
    value: A,
}

impl<A> PushError<A> {
    pub(crate) fn new(value: A) -> Self {
        Self { value }
    }

    /// The kind of failure, which is always
    /// [`StackError::Overflow`][StackError::Overflow].
    ///
    /// [StackError::Overflow]: enum.StackError.html#variant.Overflow
    pub fn kind(&self) -> StackError {
        StackError::Overflow
    }

    /// Get a reference to the value which couldn't be pushed.
    pub fn value(&self) -> &A {
        &self.value
    }

    /// Take back the value which couldn't be pushed.
    pub fn into_inner(self) -> A {
        self.value
    }
}

impl<A> From<PushError<A>> for StackError {
    fn from(error: PushError<A>) -> Self {
        error.kind()
    }
}

impl<A> Debug for PushError<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError").finish()
    }
}

impl<A> Display for PushError<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind(), f)
    }
}

impl<A> std::error::Error for PushError<A> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_error_converts_to_overflow() {
        fn fails() -> Result<(), StackError> {
            Err::<(), _>(PushError::new(1337usize))?;
            Ok(())
        }
        assert_eq!(Err(StackError::Overflow), fails());
    }

    #[test]
    fn push_error_displays_like_its_kind() {
        let error = PushError::new(vec![1, 2, 3]);
        assert_eq!(StackError::Overflow.to_string(), error.to_string());
        assert_eq!("PushError", format!("{:?}", error));
        assert_eq!(&vec![1, 2, 3], error.value());
    }

    #[test]
    fn messages() {
        assert_eq!(
            "stack overflow: no capacity left",
            StackError::Overflow.to_string()
        );
        assert_eq!(
            "stack underflow: stack is empty",
            StackError::Underflow.to_string()
        );
    }
}
