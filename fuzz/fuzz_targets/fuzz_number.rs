//! Fuzz target for card number validation and classification.
//!
//! Tests that the number functions never panic and always agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_validation::{classify_network, detect, is_valid_number, number};

fuzz_target!(|data: &str| {
    let valid = is_valid_number(data);
    assert_eq!(valid, classify_network(data).is_ok());
    assert_eq!(valid, number::parse_number(data).is_ok());

    // Also test with raw bytes interpreted as digits
    let digits: Vec<u8> = data.bytes().map(|b| b % 10).collect();
    let _ = detect::detect_network(&digits);
    let _ = detect::match_network(&digits);
});
