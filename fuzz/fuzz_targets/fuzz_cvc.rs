//! Fuzz target for CVC validation.
//!
//! Tests that CVC functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_validation::cvc;

fuzz_target!(|data: &str| {
    let _ = cvc::is_valid_cvc(data);

    // If validation succeeds, test other methods
    if let Ok(validated) = cvc::validate_cvc(data) {
        let _ = validated.length();
        let _ = validated.is_four_digit();
        let _ = validated.digits();
        assert!(!format!("{:?}", validated).contains(data));
        let _ = format!("{}", validated);
    }
});
