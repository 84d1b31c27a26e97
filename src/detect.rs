//! Network detection using IIN prefix matching.
//!
//! The Issuer Identification Number (IIN) is the leading run of digits of a
//! card number. This module pattern-matches on those prefixes only; lengths
//! are checked separately against [`PaymentNetwork::valid_lengths`].
//!
//! # Performance
//!
//! Detection is O(1) using slice patterns - no loops or hash lookups.

use crate::PaymentNetwork;

/// Detects the payment network from a sequence of digits.
///
/// Looks at up to the first 4 digits. The prefix ranges of the three
/// networks are disjoint, so arm order does not change the result.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9) representing the card number.
///
/// # Returns
///
/// `Some(PaymentNetwork)` if a known prefix is found, `None` otherwise.
///
/// # Example
///
/// ```
/// use card_validation::detect::detect_network;
/// use card_validation::PaymentNetwork;
///
/// // Visa starts with 4
/// let visa = [4, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2];
/// assert_eq!(detect_network(&visa), Some(PaymentNetwork::Visa));
///
/// // Amex starts with 34 or 37
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(detect_network(&amex), Some(PaymentNetwork::AmericanExpress));
/// ```
#[inline]
pub fn detect_network(digits: &[u8]) -> Option<PaymentNetwork> {
    match digits {
        // Visa: 4
        [4, ..] => Some(PaymentNetwork::Visa),

        // MasterCard: 51-55 or 2221-2720
        [5, 1..=5, ..] => Some(PaymentNetwork::MasterCard),
        [2, 2, 2, 1..=9, ..] => Some(PaymentNetwork::MasterCard), // 2221-2229
        [2, 2, 3..=9, _, ..] => Some(PaymentNetwork::MasterCard), // 2230-2299
        [2, 3..=6, _, _, ..] => Some(PaymentNetwork::MasterCard), // 2300-2699
        [2, 7, 0..=1, _, ..] => Some(PaymentNetwork::MasterCard), // 2700-2719
        [2, 7, 2, 0, ..] => Some(PaymentNetwork::MasterCard),     // 2720

        // American Express: 34 or 37
        [3, 4, ..] | [3, 7, ..] => Some(PaymentNetwork::AmericanExpress),

        _ => None,
    }
}

/// Detects the network and checks the length in one step.
///
/// Returns `Some` only when both the prefix and the total number of digits
/// match a network.
#[inline]
pub fn match_network(digits: &[u8]) -> Option<PaymentNetwork> {
    detect_network(digits).filter(|network| network.is_valid_length(digits.len()))
}
