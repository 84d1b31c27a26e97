//! The card record submitted for validation.
//!
//! A `CardRecord` is input only. It lives for the duration of one
//! validation call, is never stored, and wipes its buffers on drop.

use std::fmt;
use zeroize::Zeroize;

/// The four fields of a card record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Card owner name.
    Owner,
    /// Card number.
    Number,
    /// Expiry date.
    Expiry,
    /// Card verification code.
    Cvc,
}

impl Field {
    /// All fields, in the order they are checked and reported.
    pub const ALL: [Field; 4] = [Self::Owner, Self::Number, Self::Expiry, Self::Cvc];

    /// Key used for this field in error responses (`"Owner"`, `"Date"`, ...).
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Number => "Number",
            Self::Expiry => "Date",
            Self::Cvc => "Cvv",
        }
    }

    /// Lowercase label used inside messages (`"owner"`, `"date"`, ...).
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Number => "number",
            Self::Expiry => "date",
            Self::Cvc => "cvv",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A candidate credit card record.
///
/// Every field is optional. A missing field and an empty one are treated
/// the same by validation.
///
/// # Example
///
/// ```
/// use card_validation::{CardRecord, Field};
///
/// let record = CardRecord::new()
///     .with_owner("Jane Doe")
///     .with_number("4123456789012");
///
/// assert_eq!(record.get(Field::Owner), Some("Jane Doe"));
/// assert_eq!(record.get(Field::Cvc), None);
/// ```
#[derive(Clone, Default, Zeroize)]
pub struct CardRecord {
    owner: Option<String>,
    number: Option<String>,
    expiry: Option<String>,
    cvc: Option<String>,
}

impl CardRecord {
    /// Creates an empty record.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from all four fields at once.
    pub fn from_parts(
        owner: Option<String>,
        number: Option<String>,
        expiry: Option<String>,
        cvc: Option<String>,
    ) -> Self {
        Self {
            owner,
            number,
            expiry,
            cvc,
        }
    }

    /// Sets the owner name.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the card number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Sets the expiry date.
    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry = Some(expiry.into());
        self
    }

    /// Sets the CVC.
    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    /// Returns the owner name, if present.
    #[inline]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns the card number, if present.
    #[inline]
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Returns the expiry date, if present.
    #[inline]
    pub fn expiry(&self) -> Option<&str> {
        self.expiry.as_deref()
    }

    /// Returns the CVC, if present.
    #[inline]
    pub fn cvc(&self) -> Option<&str> {
        self.cvc.as_deref()
    }

    /// Returns the value of the given field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Owner => self.owner(),
            Field::Number => self.number(),
            Field::Expiry => self.expiry(),
            Field::Cvc => self.cvc(),
        }
    }
}

impl fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only presence is shown
        let presence = |value: &Option<String>| if value.is_some() { "<redacted>" } else { "None" };
        f.debug_struct("CardRecord")
            .field("owner", &presence(&self.owner))
            .field("number", &presence(&self.number))
            .field("expiry", &presence(&self.expiry))
            .field("cvc", &presence(&self.cvc))
            .finish()
    }
}

impl Drop for CardRecord {
    fn drop(&mut self) {
        self.zeroize();
    }
}
