#![no_main]

use boundkit::ds::RingBuffer;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on RingBuffer
//
// Drives random sequences of push, pop, first, get and clear against a
// shadow count, checking the capacity bound and FIFO observations after
// every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 32).max(1);
    let mut buffer = RingBuffer::new(capacity).unwrap();
    let mut expected_len = 0usize;

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = data[idx + 1] as u32;

        match op {
            0 => {
                let displaced = buffer.push(value);
                if expected_len < capacity {
                    assert!(displaced.is_none());
                    expected_len += 1;
                } else {
                    assert!(displaced.is_some());
                }
            }
            1 => {
                let popped = buffer.pop();
                if expected_len == 0 {
                    assert!(popped.is_err());
                } else {
                    assert!(popped.is_ok());
                    expected_len -= 1;
                }
            }
            2 => {
                assert_eq!(buffer.first().is_ok(), expected_len > 0);
            }
            3 => {
                let index = value as usize;
                assert_eq!(buffer.get(index).is_ok(), index < expected_len);
            }
            _ => {
                buffer.clear();
                expected_len = 0;
            }
        }

        assert_eq!(buffer.len(), expected_len);
        assert!(buffer.len() <= buffer.capacity());
        assert_eq!(buffer.iter().count(), expected_len);
        idx += 2;
    }
});
