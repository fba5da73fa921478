#![no_main]
use arbitrary::Arbitrary;
use boundstack::{DualBoundedStack, Side, StackError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(bool, String),
    Pop(bool),
    Peek(bool),
    Clear(bool),
}

use self::Action::*;

fn side(second: bool) -> (Side, usize) {
    if second {
        (Side::Second, 1)
    } else {
        (Side::First, 0)
    }
}

fuzz_target!(|input: (u8, Vec<Action>)| {
    let capacity = input.0 as usize;
    let mut stacks = DualBoundedStack::new(capacity);
    let mut model: [Vec<String>; 2] = [Vec::new(), Vec::new()];
    for action in input.1 {
        match action {
            Push(second, value) => {
                let (side, index) = side(second);
                let fits = model[0].len() + model[1].len() < capacity;
                match stacks.push(side, value.clone()) {
                    Ok(()) => {
                        assert!(fits);
                        model[index].push(value);
                    }
                    Err(error) => {
                        assert!(!fits);
                        assert_eq!(value, error.into_inner());
                    }
                }
            }
            Pop(second) => {
                let (side, index) = side(second);
                assert_eq!(
                    model[index].pop().ok_or(StackError::Underflow),
                    stacks.pop(side)
                );
            }
            Peek(second) => {
                let (side, index) = side(second);
                assert_eq!(model[index].last(), stacks.peek(side).ok());
            }
            Clear(second) => {
                let (side, index) = side(second);
                stacks.clear(side);
                model[index].clear();
            }
        }
        for (index, side) in Side::BOTH.iter().enumerate() {
            assert_eq!(model[index].len(), stacks.len(*side));
            assert!(stacks.iter(*side).eq(model[index].iter().rev()));
        }
        assert_eq!(model[0].is_empty() && model[1].is_empty(), stacks.total_len() == 0);
        assert_eq!(model[0].len() + model[1].len() == capacity, stacks.is_full());
    }
});
