// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Last in, first out stacks with a capacity fixed at construction time.
//!
//! # Stacks
//!
//!   * [`BoundedStack`][BoundedStack] keeps its values in a single buffer
//!     allocated up front. It never grows, and pushing onto a full stack is
//!     an error rather than a reallocation.
//!   * [`DualBoundedStack`][DualBoundedStack] keeps two stacks in one buffer,
//!     one growing from each end. Neither side has a limit of its own, so
//!     either side can use whatever room the other isn't using, and a push
//!     only fails when the buffer as a whole is full.
//!   * [`LinkedStack`][LinkedStack] is an unbounded stack of linked nodes,
//!     which recycles the nodes of popped values for later pushes.
//!
//! The [`Stack`][Stack] trait covers the operations these share with `Vec`,
//! for code which shouldn't care which one it's given.
//!
//! # Errors
//!
//! There are only two ways a stack operation can go wrong: you push onto a
//! stack with no room left ([`StackError::Overflow`][Overflow]), or you pop or
//! peek at a stack with nothing on it ([`StackError::Underflow`][Underflow]).
//! Both are reported right away as an `Err`, and both leave the stack
//! untouched. A failed push gives you back the value you tried to push,
//! wrapped in a [`PushError`][PushError], which converts into a
//! [`StackError`][StackError] with `?`.
//!
//! # Example
//!
//! ```rust
//! # use boundstack::{DualBoundedStack, Side, StackError};
//! // Room for four values, shared between two stacks.
//! let mut stacks = DualBoundedStack::new(4);
//!
//! // The first side can take more than half the room...
//! stacks.push(Side::First, "a").unwrap();
//! stacks.push(Side::First, "b").unwrap();
//! stacks.push(Side::First, "c").unwrap();
//! stacks.push(Side::Second, "z").unwrap();
//!
//! // ...but then there's no room left on either side.
//! assert!(stacks.is_full());
//! let rejected = stacks.push(Side::Second, "y").unwrap_err();
//! assert_eq!("y", rejected.into_inner());
//!
//! assert_eq!(Ok("c"), stacks.pop(Side::First));
//! assert_eq!(Ok("z"), stacks.pop(Side::Second));
//! assert_eq!(Err(StackError::Underflow), stacks.pop(Side::Second));
//! ```
//!
//! # Logging
//!
//! Construction is logged at the `debug` level and every rejected operation
//! at the `trace` level, through the [`tracing`][tracing] crate. Nothing is
//! printed unless your application installs a subscriber.
//!
//! # Thread Safety
//!
//! The stacks themselves are plain values: share them between threads the
//! way you would share a `Vec`. If you want both sides of a
//! [`DualBoundedStack`][DualBoundedStack] to be usable from several threads
//! at once, enable the `sync` feature flag and use
//! [`SharedDualStack`][SharedDualStack], which puts the whole thing behind
//! one lock.
//!
//! # Feature Flags
//!
//! There's one feature flag available, `sync`, which provides
//! [`SharedDualStack`][SharedDualStack].
//!
//! [BoundedStack]: struct.BoundedStack.html
//! [DualBoundedStack]: struct.DualBoundedStack.html
//! [LinkedStack]: struct.LinkedStack.html
//! [SharedDualStack]: struct.SharedDualStack.html
//! [Stack]: trait.Stack.html
//! [StackError]: enum.StackError.html
//! [PushError]: struct.PushError.html
//! [Overflow]: enum.StackError.html#variant.Overflow
//! [Underflow]: enum.StackError.html#variant.Underflow
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod bounded_stack;
mod buffer;
mod dual_stack;
mod error;
mod linked_stack;
mod stack;
#[cfg(feature = "sync")]
mod sync_stack;

pub mod algorithms;

pub use self::bounded_stack::BoundedStack;
pub use self::dual_stack::{DualBoundedStack, Iter as DualIter, Side};
pub use self::error::{PushError, StackError};
pub use self::linked_stack::{Iter as LinkedIter, LinkedStack};
pub use self::stack::Stack;
#[cfg(feature = "sync")]
pub use self::sync_stack::SharedDualStack;

/// The capacity you get from `Default::default()`.
pub const DEFAULT_CAPACITY: usize = 100;

/// The largest capacity a bounded stack can be constructed with.
pub const MAX_CAPACITY: usize = isize::MAX as usize;
