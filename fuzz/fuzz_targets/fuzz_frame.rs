//! Fuzz target for the binary frame reader.
//!
//! Feeds arbitrary bytes at arbitrary offsets to find panics, overruns, and
//! framing bugs. A successful parse must also survive re-serialization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use respb::{frame_to_bytes, parse_one};

fuzz_target!(|data: &[u8]| {
    let offset = data.first().copied().unwrap_or(0) as usize % (data.len() + 1);

    // Must never panic, whatever the input.
    if let Ok(Some((cmd, next))) = parse_one(data, offset) {
        assert!(next <= data.len());
        assert!(next > offset, "a complete frame consumes at least its header");

        // Whatever parsed must round-trip bitwise.
        let bytes = frame_to_bytes(&cmd).expect("parsed command must serialize");
        assert_eq!(&bytes[..], &data[offset..next]);
    }
});
