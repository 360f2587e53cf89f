#![no_main]

use bytecursor::ByteCursor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;

        match op {
            0 => {
                let _ = cursor.read_u8();
            }
            1 => {
                let _ = cursor.read_u16();
            }
            2 => {
                let _ = cursor.read_f32();
            }
            3 => {
                let before = cursor.position();
                let _ = cursor.peek_u32();
                assert_eq!(cursor.position(), before);
            }
            4 => {
                let step = usize::from(data[idx.saturating_sub(1)] % 8);
                let before = cursor.position();
                if cursor.advance(step).is_ok() {
                    cursor.retreat(step).unwrap();
                }
                assert_eq!(cursor.position(), before);
            }
            5 => {
                let _ = cursor.read_ascii(3);
            }
            _ => {
                let _ = cursor.read_bytes(4);
            }
        }
    }
});
