//! Card number validation and network classification.
//!
//! Numbers are accepted as bare digit strings only. Unlike most payment
//! forms there is no separator stripping: `"4111 1111 1111 1111"` is
//! rejected at the first space.
//!
//! No checksum is computed; a number is valid when its prefix and length
//! match Visa, MasterCard or American Express.

use crate::detect::detect_network;
use crate::error::{NumberError, UnsupportedNetwork};
use crate::PaymentNetwork;

/// Longest number any supported network issues.
pub const MAX_NUMBER_DIGITS: usize = 16;

/// Parses a card number and returns the network it belongs to.
///
/// This performs:
/// 1. Digit extraction (any other character is an error)
/// 2. Prefix detection
/// 3. Network-specific length validation
///
/// # Example
///
/// ```
/// use card_validation::number::parse_number;
/// use card_validation::{NumberError, PaymentNetwork};
///
/// assert_eq!(parse_number("4123456789012"), Ok(PaymentNetwork::Visa));
/// assert_eq!(parse_number("1234567890123456"), Err(NumberError::UnknownNetwork));
/// ```
pub fn parse_number(input: &str) -> Result<PaymentNetwork, NumberError> {
    if input.is_empty() {
        return Err(NumberError::Empty);
    }

    let mut digits = [0u8; MAX_NUMBER_DIGITS];
    let mut count = 0usize;

    for (position, c) in input.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(NumberError::InvalidCharacter {
                position,
                character: c,
            });
        }
        if count >= MAX_NUMBER_DIGITS {
            return Err(NumberError::TooLong {
                length: count + 1,
                maximum: MAX_NUMBER_DIGITS,
            });
        }
        digits[count] = (c as u8) - b'0';
        count += 1;
    }

    let network = detect_network(&digits[..count]).ok_or(NumberError::UnknownNetwork)?;

    if !network.is_valid_length(count) {
        return Err(NumberError::InvalidLengthForNetwork {
            network,
            length: count,
            valid_lengths: network.valid_lengths(),
        });
    }

    Ok(network)
}

/// Quick check if a card number is well-formed.
///
/// Returns `true` only for numbers that belong to one of the supported
/// networks.
///
/// # Example
///
/// ```
/// use card_validation::is_valid_number;
///
/// assert!(is_valid_number("4123456789012"));
/// assert!(!is_valid_number("41234567890123451"));
/// assert!(!is_valid_number(""));
/// ```
#[inline]
pub fn is_valid_number(input: &str) -> bool {
    parse_number(input).is_ok()
}

/// Classifies a card number into its payment network.
///
/// Fails with [`UnsupportedNetwork`] for anything [`is_valid_number`]
/// rejects, including the empty string.
///
/// # Example
///
/// ```
/// use card_validation::{classify_network, PaymentNetwork, UnsupportedNetwork};
///
/// assert_eq!(classify_network("378282246310005"), Ok(PaymentNetwork::AmericanExpress));
/// assert_eq!(classify_network("1234567890123456"), Err(UnsupportedNetwork));
/// ```
#[inline]
pub fn classify_network(input: &str) -> Result<PaymentNetwork, UnsupportedNetwork> {
    Ok(parse_number(input)?)
}
