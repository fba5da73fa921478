// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::mem::MaybeUninit;
use std::ops::Range;

use crate::MAX_CAPACITY;

/// A fixed size run of possibly uninitialised slots.
///
/// The buffer doesn't know which of its slots are live, so it never drops
/// values on its own. Whoever owns it must track the live ranges and call
/// `drop_range` for them before letting go of the buffer.
pub(crate) struct Buffer<A> {
    data: Box<[MaybeUninit<A>]>,
}

impl<A> Buffer<A> {
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_CAPACITY,
            "capacity {} exceeds MAX_CAPACITY",
            capacity
        );
        let mut data = Vec::with_capacity(capacity);
        // Uninitialised slots are valid `MaybeUninit` values.
        unsafe { data.set_len(capacity) };
        Self {
            data: data.into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// # Safety
    ///
    /// The slot at `index` must not hold a live value, or that value leaks.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, index: usize, value: A) {
        self.data[index].as_mut_ptr().write(value);
    }

    /// # Safety
    ///
    /// The slot at `index` must hold a live value, and the caller takes
    /// ownership of it: the slot counts as uninitialised afterwards.
    #[inline(always)]
    pub(crate) unsafe fn read(&mut self, index: usize) -> A {
        self.data[index].as_ptr().read()
    }

    /// # Safety
    ///
    /// The slot at `index` must hold a live value.
    #[inline(always)]
    pub(crate) unsafe fn get(&self, index: usize) -> &A {
        &*self.data[index].as_ptr()
    }

    /// # Safety
    ///
    /// The slot at `index` must hold a live value.
    #[inline(always)]
    pub(crate) unsafe fn get_mut(&mut self, index: usize) -> &mut A {
        &mut *self.data[index].as_mut_ptr()
    }

    /// # Safety
    ///
    /// Every slot in `range` must hold a live value.
    pub(crate) unsafe fn slice(&self, range: Range<usize>) -> &[A] {
        let slots = &self.data[range];
        std::slice::from_raw_parts(slots.as_ptr().cast::<A>(), slots.len())
    }

    /// # Safety
    ///
    /// Every slot in `range` must hold a live value. They're all dead after
    /// this call.
    pub(crate) unsafe fn drop_range(&mut self, range: Range<usize>) {
        if std::mem::needs_drop::<A>() {
            let slots = &mut self.data[range];
            std::ptr::drop_in_place(std::slice::from_raw_parts_mut(
                slots.as_mut_ptr().cast::<A>(),
                slots.len(),
            ));
        }
    }
}
