//! Fuzz target for record validation.
//!
//! A record that validates must always classify.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use card_validation::check::{classify_record, validate_record, StandardRules};
use card_validation::CardRecord;

#[derive(Arbitrary, Debug)]
struct Input {
    owner: Option<String>,
    number: Option<String>,
    expiry: Option<String>,
    cvc: Option<String>,
}

fuzz_target!(|input: Input| {
    let rules = StandardRules::new();
    let record = CardRecord::from_parts(input.owner, input.number, input.expiry, input.cvc);

    match validate_record(&rules, &record) {
        Ok(()) => assert!(classify_record(&rules, &record).is_ok()),
        Err(errors) => assert!(!errors.is_empty() && errors.len() <= 4),
    }
});
