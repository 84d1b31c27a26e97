//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use card_validation::expiry;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = expiry::parse_expiry(data);
    let _ = expiry::validate_expiry(data);
    let _ = expiry::is_valid_expiry(data);
    for today in [NaiveDate::MIN, NaiveDate::MAX] {
        let _ = expiry::validate_expiry_on(data, today);
    }

    // If parsing succeeds, test other methods
    if let Ok(exp) = expiry::parse_expiry(data) {
        let _ = exp.last_day();
        let _ = exp.is_expired();
        let _ = exp.format_short();
        let _ = exp.format_long();
        let _ = exp.to_string();
    }
});
