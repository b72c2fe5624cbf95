use labkit_core::stack::LinkedStack;
use tracing::info;

use crate::terminal::print;

pub fn stack(values: Vec<i64>, pops: usize) {
    let mut stack: LinkedStack<i64> = LinkedStack::new();

    for value in values {
        stack.push(value);
    }
    print::aligned_line("Pushed", print::sequence(stack.iter()));

    for _ in 0..pops {
        if let Some(value) = stack.pop() {
            info!("Popped {value}");
        }
    }

    print::aligned_line("Empty", stack.is_empty().to_string());
    print::aligned_line("Top to bottom", print::sequence(stack.iter()));
}
