//! Human-readable ticket numbers of the form `TCK-<year>-<sequence>`.

use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "TCK-";
const MIN_SEQUENCE_DIGITS: usize = 6;
const YEAR_DIGITS: usize = 4;

/// Sequential ticket number combining a calendar year and a sequence value.
///
/// The sequence is zero-padded to at least six digits and grows past six
/// digits once it exceeds `999999`; nothing is truncated.
///
/// # Examples
/// ```
/// use support_tickets::domain::TicketNumber;
///
/// let number = TicketNumber::format(42, 2025);
/// assert_eq!(number.as_str(), "TCK-2025-000042");
/// assert_eq!(number.sequence(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketNumber {
    value: String,
    year: i32,
    sequence: u64,
}

/// Reasons a string is not a ticket number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketNumberParseError {
    /// The value does not start with `TCK-`.
    #[error("ticket number must start with TCK-")]
    MissingPrefix,
    /// The year segment is not exactly four digits.
    #[error("ticket number year must be four digits")]
    InvalidYear,
    /// The sequence segment is shorter than six digits or not numeric.
    #[error("ticket number sequence must be at least six digits")]
    InvalidSequence,
}

impl TicketNumber {
    /// Format a sequence value for the given year.
    #[must_use]
    pub fn format(sequence: u64, year: i32) -> Self {
        Self {
            value: format!("{PREFIX}{year}-{sequence:0width$}", width = MIN_SEQUENCE_DIGITS),
            year,
            sequence,
        }
    }

    /// Borrow the formatted number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Calendar year embedded in the number.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Sequence value embedded in the number.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_str())
    }
}

impl AsRef<str> for TicketNumber {
    fn as_ref(&self) -> &str {
        self.value.as_str()
    }
}

impl From<TicketNumber> for String {
    fn from(value: TicketNumber) -> Self {
        value.value
    }
}

fn all_ascii_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}

impl FromStr for TicketNumber {
    type Err = TicketNumberParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let rest = value
            .strip_prefix(PREFIX)
            .ok_or(TicketNumberParseError::MissingPrefix)?;
        let (year_part, sequence_part) = rest
            .split_once('-')
            .ok_or(TicketNumberParseError::InvalidYear)?;

        if year_part.len() != YEAR_DIGITS || !all_ascii_digits(year_part) {
            return Err(TicketNumberParseError::InvalidYear);
        }
        if sequence_part.len() < MIN_SEQUENCE_DIGITS || !all_ascii_digits(sequence_part) {
            return Err(TicketNumberParseError::InvalidSequence);
        }

        let year = year_part
            .parse::<i32>()
            .map_err(|_| TicketNumberParseError::InvalidYear)?;
        let sequence = sequence_part
            .parse::<u64>()
            .map_err(|_| TicketNumberParseError::InvalidSequence)?;

        Ok(Self {
            value: value.to_owned(),
            year,
            sequence,
        })
    }
}
