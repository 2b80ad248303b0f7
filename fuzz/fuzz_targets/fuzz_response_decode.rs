#![no_main]

use clearance_tac::transport::decode_body;
use clearance_tac::ResponseValidator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding and validating arbitrary bodies must never panic.
    if let Ok(response) = decode_body(data) {
        let strict = ResponseValidator::new("VALID", false);
        let lenient = ResponseValidator::new("VALID", true);
        // A strict pass implies a lenient pass.
        if strict.is_valid(response.as_ref()) {
            assert!(lenient.is_valid(response.as_ref()));
        }
    }
});
