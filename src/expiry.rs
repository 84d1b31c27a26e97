//! Credit card expiry date validation.
//!
//! # Supported Formats
//!
//! - `MM/YYYY` - e.g., "12/2030"
//! - `MM/YY` - e.g., "12/30"
//! - `MMYY` - e.g., "1230"
//! - `MMYYYY` - e.g., "122030"
//!
//! Two-digit years are read as `2000 + YY`. Nothing else is accepted: no
//! dashes, no surrounding whitespace, no single-digit months.
//!
//! A card stays valid through the last day of its expiry month.
//!
//! # Example
//!
//! ```
//! use card_validation::expiry::{parse_expiry, validate_expiry_on};
//! use chrono::NaiveDate;
//!
//! let expiry = parse_expiry("12/30").unwrap();
//! assert_eq!(expiry.month(), 12);
//! assert_eq!(expiry.year(), 2030);
//!
//! let today = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap();
//! assert!(validate_expiry_on("12/30", today).is_ok());
//! ```

use chrono::{Local, NaiveDate};
use std::fmt;

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpiryDate {
    /// Four-digit year (e.g., 2030)
    year: u16,
    /// Month (1-12)
    month: u8,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is invalid (not 1-12).
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the last calendar day of the expiry month.
    pub fn last_day(&self) -> Option<NaiveDate> {
        let (year, month) = if self.month == 12 {
            (i32::from(self.year) + 1, 1)
        } else {
            (i32::from(self.year), u32::from(self.month) + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
    }

    /// Returns true if the card had expired by `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        match self.last_day() {
            Some(last_day) => last_day < today,
            None => true,
        }
    }

    /// Returns true if the card has expired according to the local clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(today())
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The input string is empty.
    Empty,
    /// Not one of the accepted shapes.
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    InvalidMonth(u8),
    /// The expiry month is already over.
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "expiry date is empty"),
            Self::InvalidFormat => {
                write!(f, "invalid expiry format (expected MM/YY, MM/YYYY, MMYY or MMYYYY)")
            }
            Self::InvalidMonth(m) => {
                write!(f, "invalid month {:02}: must be 01-12", m)
            }
            Self::Expired { month, year } => {
                write!(f, "card expired ({:02}/{})", month, year)
            }
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Parses an expiry date string without checking it against the clock.
///
/// # Example
///
/// ```
/// use card_validation::expiry::{parse_expiry, ExpiryError};
///
/// let expiry = parse_expiry("122026").unwrap();
/// assert_eq!((expiry.month(), expiry.year()), (12, 2026));
///
/// assert_eq!(parse_expiry("00/2030"), Err(ExpiryError::InvalidMonth(0)));
/// assert_eq!(parse_expiry("12-30"), Err(ExpiryError::InvalidFormat));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    let (month_str, year_str) = match input.split_once('/') {
        Some(parts) => parts,
        // MMYY or MMYYYY
        None if input.len() == 4 || input.len() == 6 => {
            if !input.is_char_boundary(2) {
                return Err(ExpiryError::InvalidFormat);
            }
            input.split_at(2)
        }
        None => return Err(ExpiryError::InvalidFormat),
    };

    parse_month_year(month_str, year_str)
}

/// Parses month and year parts, each of which must be all ASCII digits.
fn parse_month_year(month_str: &str, year_str: &str) -> Result<ExpiryDate, ExpiryError> {
    if month_str.len() != 2 || !all_digits(month_str) || !all_digits(year_str) {
        return Err(ExpiryError::InvalidFormat);
    }

    let month: u8 = month_str.parse().map_err(|_| ExpiryError::InvalidFormat)?;

    let year: u16 = match year_str.len() {
        2 => {
            let yy: u16 = year_str.parse().map_err(|_| ExpiryError::InvalidFormat)?;
            2000 + yy
        }
        4 => year_str.parse().map_err(|_| ExpiryError::InvalidFormat)?,
        _ => return Err(ExpiryError::InvalidFormat),
    };

    ExpiryDate::new(month, year).ok_or(ExpiryError::InvalidMonth(month))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validates an expiry date string against a given day.
///
/// The card is valid while `today` is on or before the last day of the
/// expiry month.
pub fn validate_expiry_on(input: &str, today: NaiveDate) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired_on(today) {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

/// Validates an expiry date string against the local clock.
///
/// # Example
///
/// ```
/// use card_validation::expiry::{validate_expiry, ExpiryError};
///
/// assert!(validate_expiry("12/99").is_ok());
/// assert!(matches!(validate_expiry("12/2022"), Err(ExpiryError::Expired { .. })));
/// ```
pub fn validate_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    validate_expiry_on(input, today())
}

/// Checks if an expiry date string is well-formed and not yet expired.
#[inline]
pub fn is_valid_expiry(input: &str) -> bool {
    validate_expiry(input).is_ok()
}

/// Like [`is_valid_expiry`], against a given day.
#[inline]
pub fn is_valid_expiry_on(input: &str, today: NaiveDate) -> bool {
    validate_expiry_on(input, today).is_ok()
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).unwrap()
    }

    #[test]
    fn test_parse_mm_yyyy() {
        let expiry = parse_expiry("01/2030").unwrap();
        assert_eq!(expiry.month(), 1);
        assert_eq!(expiry.year(), 2030);
    }

    #[test]
    fn test_parse_mm_yy() {
        let expiry = parse_expiry("12/26").unwrap();
        assert_eq!(expiry.month(), 12);
        assert_eq!(expiry.year(), 2026);
    }

    #[test]
    fn test_parse_mmyy() {
        let expiry = parse_expiry("1226").unwrap();
        assert_eq!((expiry.month(), expiry.year()), (12, 2026));
    }

    #[test]
    fn test_parse_mmyyyy() {
        let expiry = parse_expiry("122026").unwrap();
        assert_eq!((expiry.month(), expiry.year()), (12, 2026));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(parse_expiry("00/2030"), Err(ExpiryError::InvalidMonth(0)));
        assert_eq!(parse_expiry("13/2030"), Err(ExpiryError::InvalidMonth(13)));
        assert_eq!(parse_expiry("1330"), Err(ExpiryError::InvalidMonth(13)));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_expiry(""), Err(ExpiryError::Empty));
        for input in [
            "abc/2030",
            "1/2030",
            "12/203",
            "12/20301",
            "12-30",
            "12 / 30",
            " 12/30",
            "12/3a",
            "123",
            "12345",
            "1234567",
            "12/",
            "/30",
            "12/30/1",
            "+1/30",
            "1é30",
        ] {
            assert_eq!(
                parse_expiry(input),
                Err(ExpiryError::InvalidFormat),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_last_day() {
        assert_eq!(ExpiryDate::new(2, 2028).unwrap().last_day(), Some(day(2028, 2, 29)));
        assert_eq!(ExpiryDate::new(2, 2027).unwrap().last_day(), Some(day(2027, 2, 28)));
        assert_eq!(ExpiryDate::new(12, 2026).unwrap().last_day(), Some(day(2026, 12, 31)));
        assert_eq!(ExpiryDate::new(4, 2026).unwrap().last_day(), Some(day(2026, 4, 30)));
    }

    #[test]
    fn test_current_month_is_still_valid() {
        let expiry = ExpiryDate::new(10, 2026).unwrap();
        assert!(!expiry.is_expired_on(day(2026, 10, 1)));
        assert!(!expiry.is_expired_on(day(2026, 10, 31)));
        assert!(expiry.is_expired_on(day(2026, 11, 1)));
    }

    #[test]
    fn test_validate_on_fixed_day() {
        let today = day(2026, 10, 19);
        for input in ["12/2026", "12/26", "1226", "122026", "10/26"] {
            assert!(is_valid_expiry_on(input, today), "{input} should be valid");
        }
        for input in ["12/2022", "12/22", "1222", "122022", "09/26", "13/2030", "00/2030", "abc/2030", ""] {
            assert!(!is_valid_expiry_on(input, today), "{input:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_expired_error() {
        let result = validate_expiry_on("12/2022", day(2026, 1, 1));
        assert_eq!(result, Err(ExpiryError::Expired { month: 12, year: 2022 }));
    }

    #[test]
    fn test_validate_against_clock() {
        assert!(is_valid_expiry("12/99"));
        assert!(is_valid_expiry("129999"));
        assert!(!is_valid_expiry("12/2022"));
        assert!(!is_valid_expiry("01/2000"));
    }

    #[test]
    fn test_current_month_against_clock() {
        let now = today();
        let input = format!("{:02}/{:04}", now.month(), now.year());
        assert!(is_valid_expiry(&input));
    }

    #[test]
    fn test_format() {
        let expiry = ExpiryDate::new(3, 2025).unwrap();
        assert_eq!(expiry.format_short(), "03/25");
        assert_eq!(expiry.format_long(), "03/2025");
        assert_eq!(expiry.to_string(), "03/2025");
    }

    #[test]
    fn test_expiry_date_new() {
        assert!(ExpiryDate::new(1, 2025).is_some());
        assert!(ExpiryDate::new(12, 2025).is_some());
        assert!(ExpiryDate::new(0, 2025).is_none());
        assert!(ExpiryDate::new(13, 2025).is_none());
    }

    #[test]
    fn test_ordering() {
        assert!(ExpiryDate::new(12, 2025).unwrap() < ExpiryDate::new(1, 2026).unwrap());
    }
}
