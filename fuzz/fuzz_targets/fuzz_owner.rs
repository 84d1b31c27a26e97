//! Fuzz target for owner name validation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_validation::owner;

fuzz_target!(|data: &str| {
    let result = owner::validate_owner(data);
    assert_eq!(result.is_ok(), owner::is_valid_owner(data));
    if let Err(e) = result {
        let _ = e.to_string();
    }
});
