//! The audit identifier value type.
//!
//! An [`AuditId`] is the typed form of the canonical string
//! `YYYYMMDD-AUD-QXX-NN`: a calendar date, the fixed `AUD` tag, a
//! zero-padded quarter, and a zero-padded two-digit sequence number.
//! [`Display`](fmt::Display) renders the canonical form and
//! [`FromStr`](str::FromStr) parses it strictly, so parse and render
//! round-trip for every identifier the generator can issue.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::ParseIdError;
use crate::quarter::Quarter;

/// The fixed literal tag between the date and quarter fields.
pub const AUDIT_TAG: &str = "AUD";

/// Largest sequence number the counter issues before wrapping to 1.
pub const MAX_SEQUENCE: u32 = 99;

/// A datacenter audit identifier, e.g. `20250719-AUD-Q03-01`.
///
/// The quarter is always derived from the date's month; construction does
/// not accept an independent quarter, so a mismatched pair cannot exist.
/// The sequence is normally `01..99`, but an explicit generator override
/// may place it outside that range — such values render as-is (`0` as
/// `00`, `123` as `123`) and will not re-parse.
///
/// `Ord` compares `(date, quarter, sequence)`, which for by-construction
/// values agrees with lexicographic order of the canonical string — the
/// property that makes the IDs sortable as plain text columns.
///
/// # Example
///
/// ```
/// use audit_id::AuditId;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
/// let id = AuditId::new(date, 1);
///
/// assert_eq!(id.to_string(), "20250719-AUD-Q03-01");
/// assert_eq!("20250719-AUD-Q03-01".parse::<AuditId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuditId {
    date: NaiveDate,
    quarter: Quarter,
    sequence: u32,
}

impl AuditId {
    /// Creates an identifier for the given date and sequence number.
    ///
    /// The quarter is derived from the date's month.
    pub fn new(date: NaiveDate, sequence: u32) -> Self {
        Self {
            date,
            quarter: Quarter::from_month(date.month()),
            sequence,
        }
    }

    /// Returns the calendar date component.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the quarter component.
    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Returns the sequence number component.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Returns the `YYYYMMDD` date field as it appears in the canonical form.
    pub fn date_field(&self) -> String {
        format!(
            "{:04}{:02}{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }
}

impl fmt::Display for AuditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{:02}",
            self.date_field(),
            AUDIT_TAG,
            self.quarter,
            self.sequence
        )
    }
}

impl FromStr for AuditId {
    type Err = ParseIdError;

    /// Parses the canonical `YYYYMMDD-AUD-QXX-NN` form.
    ///
    /// The parse is strict: every field must be present, zero-padded to
    /// its canonical width, and internally consistent (the quarter must
    /// match the date's month, the sequence must be `01..99`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let date_field = parts.next().unwrap_or_default();
        let tag = parts.next().ok_or(ParseIdError::Malformed {
            expected: "four '-'-separated fields",
        })?;
        let quarter_field = parts.next().ok_or(ParseIdError::Malformed {
            expected: "four '-'-separated fields",
        })?;
        let sequence_field = parts.next().ok_or(ParseIdError::Malformed {
            expected: "four '-'-separated fields",
        })?;
        if parts.next().is_some() {
            return Err(ParseIdError::Malformed {
                expected: "four '-'-separated fields",
            });
        }

        let date = parse_date_field(date_field)?;

        if tag != AUDIT_TAG {
            return Err(ParseIdError::Malformed {
                expected: "'AUD' tag",
            });
        }

        let quarter_num = match quarter_field.strip_prefix('Q') {
            Some(digits) if digits.len() == 2 => {
                parse_digits(digits).ok_or(ParseIdError::Malformed {
                    expected: "zero-padded quarter field 'QXX'",
                })?
            }
            _ => {
                return Err(ParseIdError::Malformed {
                    expected: "zero-padded quarter field 'QXX'",
                });
            }
        };
        if !(1..=4).contains(&quarter_num) {
            return Err(ParseIdError::InvalidQuarter {
                quarter: quarter_num,
            });
        }

        let expected = Quarter::from_month(date.month());
        if quarter_num != expected.number() {
            return Err(ParseIdError::QuarterMismatch {
                expected: expected.number(),
                found: quarter_num,
            });
        }

        if sequence_field.len() != 2 {
            return Err(ParseIdError::Malformed {
                expected: "two-digit sequence field",
            });
        }
        let sequence = parse_digits(sequence_field).ok_or(ParseIdError::Malformed {
            expected: "two-digit sequence field",
        })?;
        if !(1..=MAX_SEQUENCE).contains(&sequence) {
            return Err(ParseIdError::InvalidSequence { sequence });
        }

        Ok(AuditId {
            date,
            quarter: expected,
            sequence,
        })
    }
}

/// Parses the eight-digit `YYYYMMDD` field into a calendar date.
fn parse_date_field(field: &str) -> Result<NaiveDate, ParseIdError> {
    if field.len() != 8 || parse_digits(field).is_none() {
        return Err(ParseIdError::Malformed {
            expected: "eight-digit date field 'YYYYMMDD'",
        });
    }
    // Widths checked above, so these slices are pure ASCII digits.
    let year: i32 = field[..4].parse().map_err(|_| ParseIdError::Malformed {
        expected: "eight-digit date field 'YYYYMMDD'",
    })?;
    let month: u32 = field[4..6].parse().map_err(|_| ParseIdError::Malformed {
        expected: "eight-digit date field 'YYYYMMDD'",
    })?;
    let day: u32 = field[6..8].parse().map_err(|_| ParseIdError::Malformed {
        expected: "eight-digit date field 'YYYYMMDD'",
    })?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ParseIdError::InvalidDate {
        field: field.to_string(),
    })
}

/// Parses an all-ASCII-digit field, rejecting signs and whitespace.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_canonical_form() {
        let id = AuditId::new(date(2025, 7, 19), 1);
        assert_eq!(id.to_string(), "20250719-AUD-Q03-01");
    }

    #[test]
    fn single_digit_month_and_day_are_padded() {
        let id = AuditId::new(date(2025, 1, 5), 7);
        assert_eq!(id.to_string(), "20250105-AUD-Q01-07");
    }

    #[test]
    fn quarter_follows_the_month() {
        assert_eq!(AuditId::new(date(2025, 2, 15), 1).quarter(), Quarter::Q1);
        assert_eq!(AuditId::new(date(2025, 5, 1), 1).quarter(), Quarter::Q2);
        assert_eq!(AuditId::new(date(2025, 9, 30), 1).quarter(), Quarter::Q3);
        assert_eq!(AuditId::new(date(2025, 12, 31), 1).quarter(), Quarter::Q4);
    }

    #[test]
    fn parse_round_trips() {
        let id = AuditId::new(date(2025, 10, 2), 42);
        let parsed: AuditId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_wrong_tag() {
        let err = "20250719-XYZ-Q03-01".parse::<AuditId>().unwrap_err();
        assert_eq!(
            err,
            ParseIdError::Malformed {
                expected: "'AUD' tag"
            }
        );
    }

    #[test]
    fn parse_rejects_unpadded_quarter() {
        let err = "20250719-AUD-Q3-01".parse::<AuditId>().unwrap_err();
        assert_eq!(
            err,
            ParseIdError::Malformed {
                expected: "zero-padded quarter field 'QXX'"
            }
        );
    }

    #[test]
    fn parse_rejects_quarter_outside_range() {
        let err = "20250719-AUD-Q05-01".parse::<AuditId>().unwrap_err();
        assert_eq!(err, ParseIdError::InvalidQuarter { quarter: 5 });
    }

    #[test]
    fn parse_rejects_quarter_month_mismatch() {
        // July is Q3; the written Q01 is in range but inconsistent.
        let err = "20250719-AUD-Q01-01".parse::<AuditId>().unwrap_err();
        assert_eq!(
            err,
            ParseIdError::QuarterMismatch {
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn parse_rejects_sequence_zero_and_overflow() {
        let err = "20250719-AUD-Q03-00".parse::<AuditId>().unwrap_err();
        assert_eq!(err, ParseIdError::InvalidSequence { sequence: 0 });

        let err = "20250719-AUD-Q03-123".parse::<AuditId>().unwrap_err();
        assert_eq!(
            err,
            ParseIdError::Malformed {
                expected: "two-digit sequence field"
            }
        );
    }

    #[test]
    fn parse_rejects_impossible_date() {
        let err = "20250230-AUD-Q01-01".parse::<AuditId>().unwrap_err();
        assert_eq!(
            err,
            ParseIdError::InvalidDate {
                field: "20250230".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_missing_or_extra_fields() {
        assert!("20250719-AUD-Q03".parse::<AuditId>().is_err());
        assert!("20250719-AUD-Q03-01-02".parse::<AuditId>().is_err());
        assert!("".parse::<AuditId>().is_err());
    }

    #[test]
    fn parse_rejects_signed_sequence() {
        // "+1" parses as a u32 via str::parse; the digit check must reject it.
        assert!("20250719-AUD-Q03-+1".parse::<AuditId>().is_err());
    }

    #[test]
    fn ordering_matches_canonical_text() {
        let a = AuditId::new(date(2025, 3, 31), 99);
        let b = AuditId::new(date(2025, 4, 1), 1);
        let c = AuditId::new(date(2025, 4, 1), 2);

        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string());
        assert!(b.to_string() < c.to_string());
    }

    #[test]
    fn override_values_render_as_is() {
        assert_eq!(AuditId::new(date(2025, 7, 19), 0).to_string(), "20250719-AUD-Q03-00");
        assert_eq!(
            AuditId::new(date(2025, 7, 19), 123).to_string(),
            "20250719-AUD-Q03-123"
        );
    }
}
