#![no_main]

use libfuzzer_sys::fuzz_target;
use mrucache::ds::{RecencyList, SlotId};

// Fuzz arbitrary operation sequences on RecencyList
//
// Tracks live handles alongside a Vec model of the list order and checks
// the links after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u8> = RecencyList::new();
    let mut model: Vec<(SlotId, u8)> = Vec::new();

    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 6;
        let arg = chunk[1];

        match op {
            0 | 1 => {
                let id = list.push_back(arg);
                model.push((id, arg));
            },
            2 => {
                if !model.is_empty() {
                    let (id, value) = model.remove(arg as usize % model.len());
                    assert_eq!(list.remove(id), Some(value));
                }
            },
            3 => {
                if !model.is_empty() {
                    let entry = model.remove(arg as usize % model.len());
                    assert!(list.move_to_back(entry.0));
                    model.push(entry);
                }
            },
            4 => {
                assert_eq!(list.pop_back(), model.pop().map(|(_, v)| v));
            },
            5 => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0).1)
                };
                assert_eq!(list.pop_front(), expected);
            },
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert!(list.check_invariants().is_ok());
        assert!(list.iter().eq(model.iter().map(|(_, v)| v)));
        assert!(list.iter().rev().eq(model.iter().rev().map(|(_, v)| v)));
    }
});
