#![no_main]

use libfuzzer_sys::fuzz_target;
use ogm::core::Notation;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Rejections are fine, panics are bugs.
        let _ = ogm::extract::identify(s, Notation::Structured);
        let _ = ogm::extract::identify(s, Notation::Numeric);
        for m in ogm::extract::find_all(s, Notation::Numeric) {
            assert_eq!(m.as_str().len(), 12);
        }
    }
});
