//! Record-level validation.
//!
//! This is the explicit step a transport runs before handing a record to
//! its handler. Every field is checked on its own and every failure is
//! reported; nothing short-circuits. Classification stays separate and
//! keeps its own error type, see [`classify_record`].
//!
//! # Example
//!
//! ```
//! use card_validation::check::{validate_record, StandardRules};
//! use card_validation::{CardRecord, Field};
//!
//! let record = CardRecord::new()
//!     .with_owner("Jane Doe")
//!     .with_number("1234567890123456")
//!     .with_expiry("12/99");
//!
//! let errors = validate_record(&StandardRules::new(), &record).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.get(Field::Number).unwrap().message(), "Wrong number");
//! assert_eq!(errors.get(Field::Cvc).unwrap().message(), "Cvv is required");
//! ```

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::UnsupportedNetwork;
use crate::record::{CardRecord, Field};
use crate::{cvc, expiry, number, owner, PaymentNetwork};

/// The rule set a record is checked against.
///
/// Each check returns the reason a present, non-empty value is rejected.
/// Missing values never reach these methods.
pub trait CardRules: Send + Sync {
    /// Checks an owner name.
    fn check_owner(&self, owner: &str) -> Result<(), String>;

    /// Checks a card number.
    fn check_number(&self, number: &str) -> Result<(), String>;

    /// Checks an expiry date.
    fn check_expiry(&self, expiry: &str) -> Result<(), String>;

    /// Checks a CVC.
    fn check_cvc(&self, cvc: &str) -> Result<(), String>;

    /// Classifies a card number.
    fn classify_network(&self, number: &str) -> Result<PaymentNetwork, UnsupportedNetwork>;

    /// Dispatches to the check for `field`.
    fn check(&self, field: Field, value: &str) -> Result<(), String> {
        match field {
            Field::Owner => self.check_owner(value),
            Field::Number => self.check_number(value),
            Field::Expiry => self.check_expiry(value),
            Field::Cvc => self.check_cvc(value),
        }
    }
}

/// The standard rules backed by this crate's validators.
///
/// Expiry dates are checked against the local clock unless a fixed
/// evaluation date was given with [`StandardRules::at`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules {
    today: Option<NaiveDate>,
}

impl StandardRules {
    /// Rules that read the clock on every expiry check.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules that evaluate expiry dates as of `today`.
    #[inline]
    pub fn at(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    /// The date expiry checks are evaluated against.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(expiry::today)
    }
}

impl CardRules for StandardRules {
    fn check_owner(&self, value: &str) -> Result<(), String> {
        owner::validate_owner(value).map_err(|e| e.to_string())
    }

    fn check_number(&self, value: &str) -> Result<(), String> {
        number::parse_number(value)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    fn check_expiry(&self, value: &str) -> Result<(), String> {
        expiry::validate_expiry_on(value, self.today())
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    fn check_cvc(&self, value: &str) -> Result<(), String> {
        cvc::validate_cvc(value)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    fn classify_network(&self, value: &str) -> Result<PaymentNetwork, UnsupportedNetwork> {
        number::classify_network(value)
    }
}

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    /// The value is present and well-formed.
    Valid,
    /// The value is absent or empty.
    Missing,
    /// The value is present but rejected, with the reason.
    Malformed(String),
}

impl FieldCheck {
    /// Returns true for [`FieldCheck::Valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Checks one field value with `rule`.
///
/// `None` and `""` are both [`FieldCheck::Missing`]; `rule` only sees
/// non-empty values.
pub fn check_field<F>(value: Option<&str>, rule: F) -> FieldCheck
where
    F: FnOnce(&str) -> Result<(), String>,
{
    match value {
        None | Some("") => FieldCheck::Missing,
        Some(v) => match rule(v) {
            Ok(()) => FieldCheck::Valid,
            Err(reason) => FieldCheck::Malformed(reason),
        },
    }
}

/// Why a field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The value was absent or empty.
    Required,
    /// The value was present but rejected.
    Wrong {
        /// Detail from the rule that rejected it.
        reason: String,
    },
}

/// A validation failure tied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: Field,
    kind: FieldErrorKind,
}

impl FieldError {
    /// A missing-value error.
    pub fn required(field: Field) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
        }
    }

    /// A rejected-value error.
    pub fn wrong(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Wrong {
                reason: reason.into(),
            },
        }
    }

    /// Builds the error for a failed check, or `None` if it passed.
    pub fn from_check(field: Field, check: FieldCheck) -> Option<Self> {
        match check {
            FieldCheck::Valid => None,
            FieldCheck::Missing => Some(Self::required(field)),
            FieldCheck::Malformed(reason) => Some(Self::wrong(field, reason)),
        }
    }

    /// The field that failed.
    #[inline]
    pub fn field(&self) -> Field {
        self.field
    }

    /// How it failed.
    #[inline]
    pub fn kind(&self) -> &FieldErrorKind {
        &self.kind
    }

    /// Detail from the rule, for rejected values.
    pub fn reason(&self) -> Option<&str> {
        match &self.kind {
            FieldErrorKind::Required => None,
            FieldErrorKind::Wrong { reason } => Some(reason),
        }
    }

    /// The client-facing message: `"<Key> is required"` or `"Wrong <label>"`.
    pub fn message(&self) -> String {
        match self.kind {
            FieldErrorKind::Required => format!("{} is required", self.field.key()),
            FieldErrorKind::Wrong { .. } => format!("Wrong {}", self.field.label()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FieldError {}

/// All field errors found in one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty error list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns true if no field failed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if `field` already has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// The first error for `field`.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Iterates over the errors in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Failing fields, without duplicates, in check order.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.errors.iter().map(|e| e.field).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    /// Groups messages by field key, the shape used in error responses.
    pub fn to_map(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut map: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            map.entry(error.field.key()).or_default().push(error.message());
        }
        map
    }

    /// `Ok(())` when empty, the errors otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.message()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Checks every field of `record`.
///
/// Returns all failing fields together, one error per field.
pub fn validate_record<R>(rules: &R, record: &CardRecord) -> Result<(), ValidationErrors>
where
    R: CardRules + ?Sized,
{
    let mut errors = ValidationErrors::new();
    validate_record_into(rules, record, &mut errors);
    errors.into_result()
}

/// Checks the fields of `record` that have no error in `errors` yet,
/// appending new failures.
///
/// Transports that reject some fields on their own (while decoding, say)
/// pass those errors in so each field is reported once.
pub fn validate_record_into<R>(rules: &R, record: &CardRecord, errors: &mut ValidationErrors)
where
    R: CardRules + ?Sized,
{
    for field in Field::ALL {
        if errors.contains(field) {
            continue;
        }
        let check = check_field(record.get(field), |value| rules.check(field, value));
        if let Some(error) = FieldError::from_check(field, check) {
            errors.push(error);
        }
    }
}

/// Classifies the record's number. A missing number is classified as `""`.
///
/// Meant to run after [`validate_record`] succeeded; on unvalidated input
/// it fails with [`UnsupportedNetwork`] rather than a field error.
pub fn classify_record<R>(rules: &R, record: &CardRecord) -> Result<PaymentNetwork, UnsupportedNetwork>
where
    R: CardRules + ?Sized,
{
    rules.classify_network(record.number().unwrap_or_default())
}
