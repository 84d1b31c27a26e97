//! CVC validation.
//!
//! A card verification code is 3 or 4 decimal digits. The length is not tied
//! to the network here: any record may carry either length.
//!
//! # Example
//!
//! ```
//! use card_validation::cvc::{is_valid_cvc, validate_cvc};
//!
//! assert!(validate_cvc("123").is_ok());
//! assert!(validate_cvc("1234").is_ok());
//! assert!(!is_valid_cvc("12a"));
//! ```

use std::fmt;
use zeroize::Zeroize;

/// Shortest accepted code.
pub const MIN_CVC_DIGITS: usize = 3;

/// Longest accepted code.
pub const MAX_CVC_DIGITS: usize = 4;

/// A validated CVC.
#[derive(Clone)]
pub struct ValidatedCvc {
    /// The CVC digits.
    digits: [u8; MAX_CVC_DIGITS],
    /// Number of digits (3 or 4).
    length: u8,
}

impl ValidatedCvc {
    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length as usize
    }

    /// Returns true if this is a 4-digit code.
    #[inline]
    pub const fn is_four_digit(&self) -> bool {
        self.length == 4
    }

    /// Returns the digits as a slice.
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.length as usize]
    }
}

impl fmt::Debug for ValidatedCvc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCvc")
            .field("value", &"***")
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for ValidatedCvc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "*".repeat(self.length as usize))
    }
}

impl Drop for ValidatedCvc {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Errors that can occur during CVC validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvcError {
    /// The input is empty.
    Empty,
    /// The CVC contains a non-digit character.
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character.
        position: usize,
    },
    /// The CVC has an invalid length.
    InvalidLength {
        /// Actual number of digits.
        length: usize,
    },
}

impl fmt::Display for CvcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CVC is empty"),
            Self::InvalidCharacter { character, position } => {
                write!(
                    f,
                    "invalid character '{}' at position {}",
                    character.escape_default(),
                    position
                )
            }
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "CVC must be {} or {} digits, got {}",
                    MIN_CVC_DIGITS, MAX_CVC_DIGITS, length
                )
            }
        }
    }
}

impl std::error::Error for CvcError {}

/// Validates a CVC string.
///
/// # Example
///
/// ```
/// use card_validation::cvc::validate_cvc;
///
/// let cvc = validate_cvc("123").unwrap();
/// assert_eq!(cvc.length(), 3);
///
/// let cvc = validate_cvc("1234").unwrap();
/// assert!(cvc.is_four_digit());
/// ```
pub fn validate_cvc(input: &str) -> Result<ValidatedCvc, CvcError> {
    if input.is_empty() {
        return Err(CvcError::Empty);
    }

    let mut digits = [0u8; MAX_CVC_DIGITS];
    let mut count = 0usize;

    for (position, c) in input.chars().enumerate() {
        if !c.is_ascii_digit() {
            digits.zeroize();
            return Err(CvcError::InvalidCharacter {
                character: c,
                position,
            });
        }
        if count < MAX_CVC_DIGITS {
            digits[count] = (c as u8) - b'0';
        }
        count += 1;
    }

    if !(MIN_CVC_DIGITS..=MAX_CVC_DIGITS).contains(&count) {
        digits.zeroize();
        return Err(CvcError::InvalidLength { length: count });
    }

    Ok(ValidatedCvc {
        digits,
        length: count as u8,
    })
}

/// Checks if a string is a valid CVC (3 or 4 digits).
#[inline]
pub fn is_valid_cvc(input: &str) -> bool {
    validate_cvc(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_3_digit_cvc() {
        let cvc = validate_cvc("123").unwrap();
        assert_eq!(cvc.length(), 3);
        assert_eq!(cvc.digits(), &[1, 2, 3]);
        assert!(!cvc.is_four_digit());
    }

    #[test]
    fn test_validate_4_digit_cvc() {
        let cvc = validate_cvc("1234").unwrap();
        assert_eq!(cvc.length(), 4);
        assert!(cvc.is_four_digit());
    }

    #[test]
    fn test_cvc_with_leading_zeros() {
        assert_eq!(validate_cvc("007").unwrap().digits(), &[0, 0, 7]);
        assert_eq!(validate_cvc("0001").unwrap().digits(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_invalid_cvc_empty() {
        assert!(matches!(validate_cvc(""), Err(CvcError::Empty)));
    }

    #[test]
    fn test_invalid_cvc_length() {
        assert_eq!(validate_cvc("1").unwrap_err(), CvcError::InvalidLength { length: 1 });
        assert_eq!(validate_cvc("12").unwrap_err(), CvcError::InvalidLength { length: 2 });
        assert_eq!(validate_cvc("12345").unwrap_err(), CvcError::InvalidLength { length: 5 });
    }

    #[test]
    fn test_invalid_cvc_non_digit() {
        assert!(matches!(
            validate_cvc("12a"),
            Err(CvcError::InvalidCharacter {
                character: 'a',
                position: 2
            })
        ));
        assert!(matches!(
            validate_cvc("12@"),
            Err(CvcError::InvalidCharacter { character: '@', .. })
        ));
    }

    #[test]
    fn test_is_valid_cvc() {
        assert!(is_valid_cvc("123"));
        assert!(is_valid_cvc("1234"));
        for cvc in ["", "1", "12", "12a", "12345", "abc", "12@", " 123"] {
            assert!(!is_valid_cvc(cvc), "{cvc:?} should be invalid");
        }
    }

    #[test]
    fn test_cvc_debug_is_masked() {
        let cvc = validate_cvc("123").unwrap();
        let debug = format!("{:?}", cvc);
        assert!(!debug.contains("123"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_cvc_display_is_masked() {
        assert_eq!(validate_cvc("123").unwrap().to_string(), "***");
        assert_eq!(validate_cvc("1234").unwrap().to_string(), "****");
    }

    #[test]
    fn test_cvc_error_display() {
        assert_eq!(CvcError::Empty.to_string(), "CVC is empty");
        assert_eq!(
            CvcError::InvalidLength { length: 5 }.to_string(),
            "CVC must be 3 or 4 digits, got 5"
        );
    }
}
