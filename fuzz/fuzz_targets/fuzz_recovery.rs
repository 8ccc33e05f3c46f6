#![no_main]

use libfuzzer_sys::fuzz_target;
use ogm::service::{Operation, StructuredComm};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary bytes as a query string must not panic.
        let svc = StructuredComm::new();
        if let Some(readings) = ogm::recovery::QueryReadings::parse(s, "value") {
            let r = readings.recover(|v| svc.identify_structured_in_line(v));
            assert!((1..=4).contains(&r.attempts));
        }
        let r = svc.run_recovering(Operation::ValidateNumeric, s, None);
        assert!(r.attempts <= 2);
    }
});
