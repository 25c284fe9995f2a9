//! Fuzz target for the reference text-RESP parser.
//!
//! Tests the passthrough collaborator with arbitrary input to find parsing
//! bugs, panics, and potential security issues.

#![no_main]

use libfuzzer_sys::fuzz_target;
use respb::protocol::resp_text::parse_multibulk;

fuzz_target!(|data: &[u8]| {
    // Should never panic; the result itself does not matter.
    if let Ok(Some((args, consumed))) = parse_multibulk(data, 0) {
        assert!(consumed <= data.len());
        for arg in args {
            assert!(arg.len() <= data.len());
        }
    }
});
