//! Error types for card number validation and classification.
//!
//! `NumberError` explains why a number failed validation. `UnsupportedNetwork`
//! is the classifier's failure and is deliberately a separate type: callers
//! are expected to validate first, so reaching it means the data was never
//! checked.

use crate::PaymentNetwork;
use std::fmt;

/// Errors that can occur while validating a card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// The input string was empty.
    Empty,

    /// A non-digit character was found in the input.
    ///
    /// Separators such as spaces and hyphens are rejected too.
    InvalidCharacter {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The number has more digits than any supported network allows.
    TooLong {
        /// The number of digits seen before giving up.
        length: usize,
        /// The maximum allowed digits (16).
        maximum: usize,
    },

    /// The prefix does not belong to a supported network.
    UnknownNetwork,

    /// The prefix matched a network but the length is wrong for it.
    InvalidLengthForNetwork {
        /// The network whose prefix matched.
        network: PaymentNetwork,
        /// The actual number of digits.
        length: usize,
        /// The valid lengths for this network.
        valid_lengths: &'static [u8],
    },
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }

            Self::UnknownNetwork => {
                write!(f, "unknown payment network - check the card number prefix")
            }

            Self::InvalidLengthForNetwork {
                network,
                length,
                valid_lengths,
            } => {
                let valid_str: Vec<String> =
                    valid_lengths.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "{} cards must have {} digits, got {}",
                    network,
                    valid_str.join(" or "),
                    length
                )
            }
        }
    }
}

impl std::error::Error for NumberError {}

/// Returned by the classifier when a number matches no supported network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedNetwork;

impl fmt::Display for UnsupportedNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported payment network")
    }
}

impl std::error::Error for UnsupportedNetwork {}

impl From<NumberError> for UnsupportedNetwork {
    fn from(_: NumberError) -> Self {
        UnsupportedNetwork
    }
}
