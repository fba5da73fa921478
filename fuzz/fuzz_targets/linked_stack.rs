#![no_main]
use arbitrary::Arbitrary;
use boundstack::{LinkedStack, StackError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    Search(String),
    Clear,
}

use self::Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let mut stack = LinkedStack::new();
    let mut model = Vec::new();
    let mut high_water = 0;
    for action in actions {
        match action {
            Push(value) => {
                stack.push(value.clone());
                model.push(value);
            }
            Pop => {
                assert_eq!(model.pop().ok_or(StackError::Underflow), stack.pop());
            }
            Search(value) => {
                let expected = model
                    .iter()
                    .rev()
                    .position(|item| *item == value)
                    .map(|index| index + 1);
                assert_eq!(expected, stack.search(&value));
            }
            Clear => {
                stack.clear();
                model.clear();
                high_water = 0;
            }
        }
        high_water = high_water.max(model.len());
        assert_eq!(model.len(), stack.len());
        assert_eq!(high_water, stack.slot_count());
        assert!(stack.iter().eq(model.iter().rev()));
    }
});
