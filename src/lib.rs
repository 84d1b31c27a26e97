//! # card_validation
//!
//! Credit card record validation and payment network classification.
//!
//! ## Features
//!
//! - Owner, number, expiry and CVC predicates
//! - Network classification (Visa, MasterCard, American Express)
//! - Record-level validation with field-keyed error messages
//! - Multiple interfaces: library, CLI, REST API
//!
//! ## Quick Start
//!
//! ```rust
//! use card_validation::{classify_network, is_valid_number, PaymentNetwork};
//!
//! assert!(is_valid_number("4123456789012"));
//! assert!(!is_valid_number("4123-4567-8901-2"));
//!
//! assert_eq!(classify_network("378282246310005"), Ok(PaymentNetwork::AmericanExpress));
//! assert!(classify_network("1234567890123456").is_err());
//! ```
//!
//! ## Field Predicates
//!
//! ```rust
//! use card_validation::{is_valid_cvc, is_valid_expiry, is_valid_owner};
//!
//! assert!(is_valid_owner("Jone Doe Smith"));
//! assert!(!is_valid_owner("John-Doe"));
//!
//! assert!(is_valid_cvc("1234"));
//! assert!(!is_valid_cvc("12a"));
//!
//! assert!(is_valid_expiry("12/99"));
//! assert!(!is_valid_expiry("00/2030"));
//! ```
//!
//! ## Record Validation
//!
//! ```rust
//! use card_validation::check::{classify_record, validate_record, StandardRules};
//! use card_validation::{CardRecord, PaymentNetwork};
//!
//! let rules = StandardRules::new();
//! let record = CardRecord::new()
//!     .with_owner("Jane Doe")
//!     .with_number("5100123412341234")
//!     .with_expiry("12/99")
//!     .with_cvc("123");
//!
//! validate_record(&rules, &record).unwrap();
//! assert_eq!(classify_record(&rules, &record), Ok(PaymentNetwork::MasterCard));
//!
//! let errors = validate_record(&rules, &CardRecord::new().with_owner("Jane")).unwrap_err();
//! assert_eq!(errors.to_string(), "Wrong owner; Number is required; Date is required; Cvv is required");
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Prefix | Length |
//! |---------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |
//!
//! No checksum is verified.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//!
//! ## Security
//!
//! - `CardRecord` and `ValidatedCvc` are zeroized on drop
//! - `Debug` output never shows the card number or CVC
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod check;
pub mod cvc;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod network;
pub mod number;
pub mod owner;
pub mod record;

#[cfg(feature = "server")]
pub mod api;

// Re-export main types at crate root
pub use check::{CardRules, StandardRules, ValidationErrors};
pub use error::{NumberError, UnsupportedNetwork};
pub use network::PaymentNetwork;
pub use record::{CardRecord, Field};

// Re-export the predicates
pub use cvc::is_valid_cvc;
pub use expiry::is_valid_expiry;
pub use number::{classify_network, is_valid_number};
pub use owner::is_valid_owner;
