#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → render → parse must agree whenever the first parse succeeds.
        if let Ok(code) = ogm::core::parse_structured(s) {
            let text = ogm::core::render(code);
            assert_eq!(text.as_str(), s);
            assert_eq!(ogm::core::parse_structured(text.as_str()).ok(), Some(code));
        }
        if let Ok(code) = ogm::core::parse_numeric(s) {
            assert_eq!(code.digits(), s);
        }
    }
});
