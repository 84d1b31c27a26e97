//! Owner, CVC and expiry validation example.
//!
//! Run with: `cargo run --example fields`

use card_validation::{cvc, expiry, owner};
use chrono::NaiveDate;

fn main() {
    println!("=== Owner Validation ===\n");

    for name in ["Jane Doe", "Jane Doe Smith", "Jane", "Jane  Doe", "John-Doe"] {
        match owner::validate_owner(name) {
            Ok(()) => println!("  {:16} valid", format!("{:?}", name)),
            Err(e) => println!("  {:16} invalid: {}", format!("{:?}", name), e),
        }
    }
    println!();

    println!("=== CVC Validation ===\n");

    for input in ["123", "1234", "12", "12a", "12345"] {
        match cvc::validate_cvc(input) {
            Ok(validated) => println!(
                "  {:6} valid, {} digits, shown as {}",
                input,
                validated.length(),
                validated
            ),
            Err(e) => println!("  {:6} invalid: {}", input, e),
        }
    }
    println!();

    println!("=== Expiry Validation ===\n");

    let Some(today) = NaiveDate::from_ymd_opt(2026, 10, 19) else {
        return;
    };
    println!("Evaluated as of {}\n", today);

    for input in ["12/2026", "12/26", "1226", "122026", "09/2026", "00/2030", "12-2026"] {
        match expiry::validate_expiry_on(input, today) {
            Ok(date) => println!(
                "  {:8} valid until {}",
                input,
                date.last_day().map_or_else(|| date.format_long(), |d| d.to_string())
            ),
            Err(e) => println!("  {:8} invalid: {}", input, e),
        }
    }
}
