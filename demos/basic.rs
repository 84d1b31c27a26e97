//! Basic card record validation example.
//!
//! Run with: `cargo run --example basic`

use card_validation::check::{classify_record, validate_record, StandardRules};
use card_validation::{classify_network, is_valid_number, CardRecord, Field};

fn main() {
    println!("=== Basic Card Record Validation ===\n");

    let rules = StandardRules::new();

    // Example 1: A complete, valid record
    let record = CardRecord::new()
        .with_owner("Jane Doe")
        .with_number("4111111111111111")
        .with_expiry("12/2099")
        .with_cvc("123");
    println!("Validating: {:?}", record);

    match validate_record(&rules, &record) {
        Ok(()) => {
            println!("  Valid: yes");
            match classify_record(&rules, &record) {
                Ok(network) => println!("  Network: {}", network),
                Err(e) => println!("  Network: {}", e),
            }
        }
        Err(errors) => println!("  Valid: no ({})", errors),
    }
    println!();

    // Example 2: Every failing field is reported
    let record = CardRecord::new()
        .with_owner("Jane")
        .with_number("4111-1111-1111-1111")
        .with_cvc("12");
    println!("Validating a broken record:");

    if let Err(errors) = validate_record(&rules, &record) {
        for field in Field::ALL {
            match errors.get(field) {
                Some(error) => println!(
                    "  {:6} {} ({})",
                    field.key(),
                    error.message(),
                    error.reason().unwrap_or("missing")
                ),
                None => println!("  {:6} ok", field.key()),
            }
        }
    }
    println!();

    // Example 3: Quick checks on bare numbers
    let test_cards = [
        ("4123456789012", "Visa, 13 digits"),
        ("2221001234567890", "MasterCard 2-series"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover (unsupported)"),
        ("41234567890123451", "Too long"),
    ];

    println!("Quick number checks:");
    for (number, description) in test_cards {
        let verdict = match classify_network(number) {
            Ok(network) => network.identifier().to_string(),
            Err(e) => e.to_string(),
        };
        println!(
            "  {:17} - {:22}: {} ({})",
            number,
            description,
            if is_valid_number(number) { "VALID" } else { "INVALID" },
            verdict
        );
    }
}
