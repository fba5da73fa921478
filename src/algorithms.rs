// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Classic algorithms which use a [`BoundedStack`][BoundedStack] as scratch
//! space.
//!
//! Each of these knows up front how big its stack needs to get, so it sizes a
//! [`BoundedStack`][BoundedStack] to fit and never touches the allocator
//! again.
//!
//! [BoundedStack]: ../struct.BoundedStack.html

use crate::{BoundedStack, StackError};

/// For every value, find the first value to its right which is strictly
/// greater than it.
///
/// Values with nothing greater to their right get `None`. This walks the
/// input from right to left, keeping a stack of candidates which is always
/// decreasing from bottom to top, so it runs in linear time.
///
/// # Examples
///
/// ```rust
/// # use boundstack::algorithms::next_greater;
/// assert_eq!(
///     Ok(vec![Some(5), Some(25), Some(25), None, Some(8), None]),
///     next_greater(&[4, 5, 2, 25, 7, 8])
/// );
/// ```
pub fn next_greater<A>(values: &[A]) -> Result<Vec<Option<A>>, StackError>
where
    A: PartialOrd + Clone,
{
    let mut result = vec![None; values.len()];
    let mut candidates: BoundedStack<&A> = BoundedStack::new(values.len());
    for (index, value) in values.iter().enumerate().rev() {
        while candidates.peek().map_or(false, |top| *top <= value) {
            candidates.pop()?;
        }
        result[index] = candidates.peek().ok().map(|top| (*top).clone());
        candidates.push(value)?;
    }
    Ok(result)
}

/// The same as [`next_greater()`][next_greater], but walking the input from
/// left to right.
///
/// This keeps a stack of the indices still waiting for a greater value, and
/// resolves them as soon as one shows up.
///
/// [next_greater]: fn.next_greater.html
pub fn next_greater_by_index<A>(values: &[A]) -> Result<Vec<Option<A>>, StackError>
where
    A: PartialOrd + Clone,
{
    let mut result = vec![None; values.len()];
    let mut pending: BoundedStack<usize> = BoundedStack::new(values.len());
    for (index, value) in values.iter().enumerate() {
        while pending.peek().map_or(false, |top| values[*top] < *value) {
            let resolved = pending.pop()?;
            result[resolved] = Some(value.clone());
        }
        pending.push(index)?;
    }
    Ok(result)
}

/// Test whether every bracket in a string is closed by the matching bracket
/// in the right order.
///
/// Round, square and curly brackets are recognised. Everything else is
/// ignored, and the empty string is balanced.
///
/// # Examples
///
/// ```rust
/// # use boundstack::algorithms::is_balanced;
/// assert!(is_balanced("{[()()]}"));
/// assert!(is_balanced("fn main() { let x = [1, 2]; }"));
/// assert!(!is_balanced("([)]"));
/// assert!(!is_balanced("(("));
/// ```
pub fn is_balanced(input: &str) -> bool {
    // An unmatched closing bracket underflows the stack.
    match_brackets(input).unwrap_or(false)
}

fn match_brackets(input: &str) -> Result<bool, StackError> {
    // A string can't contain more chars than bytes.
    let mut open = BoundedStack::new(input.len());
    for c in input.chars() {
        match c {
            '(' | '[' | '{' => open.push(c)?,
            ')' | ']' | '}' => {
                if open.pop()? != opening(c) {
                    return Ok(false);
                }
            }
            _ => {}
        }
    }
    Ok(open.is_empty())
}

fn opening(closing: char) -> char {
    match closing {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}
