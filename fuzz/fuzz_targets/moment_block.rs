#![no_main]

use bytecursor::ByteCursor;
use libfuzzer_sys::fuzz_target;
use moment::{decode_moment_block, decode_moment_block_with, DecodeOptions, HeaderBounds};

fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::new(data);
    if let Ok(block) = decode_moment_block(&mut cursor) {
        assert!(block.samples().len() <= usize::from(block.gate_count()));
        assert_eq!(
            block.samples().len() as u32 + block.missing_count(),
            u32::from(block.gate_count())
        );
    }

    // Unbounded headers exercise gate counts and word sizes the table rejects.
    let options = DecodeOptions {
        bounds: HeaderBounds::unbounded(),
        ..DecodeOptions::default()
    };
    let mut cursor = ByteCursor::new(data);
    while !cursor.is_empty() {
        let before = cursor.position();
        if decode_moment_block_with(&mut cursor, &options).is_err() || cursor.position() == before {
            break;
        }
    }
});
