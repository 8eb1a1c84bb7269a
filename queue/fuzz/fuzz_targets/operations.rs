#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ordered_queue::{Item, OrderedQueue};
use std::collections::HashMap;

#[derive(Arbitrary, Debug)]
enum Operation {
    Push { priority: i64, key: u8, content: u16 },
    Pop,
    Delete { key: u8 },
    Peek,
    Contains { key: u8 },
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    operations: Vec<Operation>,
}

fn fuzz(input: FuzzInput) {
    let queue = OrderedQueue::new();
    let mut expected: HashMap<u8, (i64, u16)> = HashMap::new();

    for operation in input.operations {
        match operation {
            Operation::Push {
                priority,
                key,
                content,
            } => {
                queue.push(Item::new(priority, key, content));
                expected.insert(key, (priority, content));
            }
            Operation::Pop => {
                let max = expected.values().map(|(priority, _)| *priority).max();
                match queue.try_pop() {
                    Some(item) => {
                        assert_eq!(Some(item.priority), max);
                        let (priority, content) = expected.remove(&item.key).unwrap();
                        assert_eq!(item.priority, priority);
                        assert_eq!(item.content, content);
                    }
                    None => assert!(max.is_none()),
                }
            }
            Operation::Delete { key } => {
                let item = queue.delete(&key).map(|item| (item.priority, item.content));
                assert_eq!(item, expected.remove(&key));
            }
            Operation::Peek => {
                let max = expected.values().map(|(priority, _)| *priority).max();
                assert_eq!(queue.peek().map(|item| item.priority), max);
            }
            Operation::Contains { key } => {
                assert_eq!(queue.contains(&key), expected.contains_key(&key));
                assert_eq!(
                    queue.priority(&key),
                    expected.get(&key).map(|(priority, _)| *priority)
                );
            }
        }
        assert_eq!(queue.len(), expected.len());
    }

    // Whatever remains drains in non-increasing priority order
    let mut last = i64::MAX;
    while let Some(item) = queue.try_pop() {
        assert!(item.priority <= last);
        assert!(expected.remove(&item.key).is_some());
        last = item.priority;
    }
    assert!(expected.is_empty());
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
