//! Fuzz target for scanner report decoding.
//!
//! Goal: The decoder should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_report_decoder
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes may fail, but must not panic.
    let _ = brakeport_app::decode_report(data);
});
