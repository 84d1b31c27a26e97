//! Payment network identifiers.
//!
//! This module provides the `PaymentNetwork` enum produced by classification.
//! Callers never build one by hand; it comes out of
//! [`classify_network`](crate::number::classify_network).

use std::fmt;

/// Payment networks recognised by the classifier.
///
/// Each variant carries its own prefix ranges and allowed lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentNetwork {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// MasterCard - Prefix 51-55, 2221-2720, length 16
    MasterCard,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
}

impl PaymentNetwork {
    /// All networks, in declaration order.
    pub const ALL: [PaymentNetwork; 3] = [Self::Visa, Self::MasterCard, Self::AmericanExpress];

    /// Returns the valid number lengths for this network.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16],
            Self::MasterCard => &[16],
            Self::AmericanExpress => &[15],
        }
    }

    /// Returns true if the given length is valid for this network.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
        }
    }

    /// Returns the identifier used on the wire (`"AmericanExpress"`, not
    /// `"American Express"`).
    #[inline]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "AmericanExpress",
        }
    }
}

impl fmt::Display for PaymentNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PaymentNetwork {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}
