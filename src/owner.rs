//! Card owner name validation.
//!
//! An owner name is two or three alphabetic names separated by single
//! spaces, e.g. `"Jane Doe"` or `"Jane Doe Smith"`. Nothing is trimmed:
//! leading, trailing or doubled spaces make the name invalid.

use std::fmt;

/// Fewest names an owner may have.
pub const MIN_NAMES: usize = 2;

/// Most names an owner may have.
pub const MAX_NAMES: usize = 3;

/// Errors that can occur during owner name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerError {
    /// The input is empty.
    Empty,
    /// A character that is neither alphabetic nor a space.
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character (0-indexed, in characters).
        position: usize,
    },
    /// Leading, trailing or repeated spaces.
    IrregularSpacing,
    /// Too few or too many names.
    WrongNameCount {
        /// How many names were found.
        count: usize,
    },
}

impl fmt::Display for OwnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "owner name is empty"),
            Self::InvalidCharacter { character, position } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only letters and single spaces allowed)",
                    character.escape_default(),
                    position
                )
            }
            Self::IrregularSpacing => {
                write!(f, "names must be separated by exactly one space")
            }
            Self::WrongNameCount { count } => {
                write!(
                    f,
                    "owner must have {} or {} names, got {}",
                    MIN_NAMES, MAX_NAMES, count
                )
            }
        }
    }
}

impl std::error::Error for OwnerError {}

/// Validates an owner name.
///
/// # Example
///
/// ```
/// use card_validation::owner::{validate_owner, OwnerError};
///
/// assert!(validate_owner("Jane Doe Smith").is_ok());
/// assert_eq!(validate_owner("Jane"), Err(OwnerError::WrongNameCount { count: 1 }));
/// assert_eq!(validate_owner("Jane  Doe"), Err(OwnerError::IrregularSpacing));
/// ```
pub fn validate_owner(input: &str) -> Result<(), OwnerError> {
    if input.is_empty() {
        return Err(OwnerError::Empty);
    }

    for (position, c) in input.chars().enumerate() {
        if c != ' ' && !c.is_alphabetic() {
            return Err(OwnerError::InvalidCharacter {
                character: c,
                position,
            });
        }
    }

    // An empty token means a space at either end or two spaces in a row.
    let mut count = 0usize;
    for name in input.split(' ') {
        if name.is_empty() {
            return Err(OwnerError::IrregularSpacing);
        }
        count += 1;
    }

    if !(MIN_NAMES..=MAX_NAMES).contains(&count) {
        return Err(OwnerError::WrongNameCount { count });
    }

    Ok(())
}

/// Quick check if an owner name is valid.
///
/// # Example
///
/// ```
/// use card_validation::is_valid_owner;
///
/// assert!(is_valid_owner("Jone Doe Smith"));
/// assert!(!is_valid_owner("John-Doe"));
/// assert!(!is_valid_owner("Jone Doe  "));
/// ```
#[inline]
pub fn is_valid_owner(input: &str) -> bool {
    validate_owner(input).is_ok()
}
