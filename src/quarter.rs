//! Calendar quarters for audit identifier scoping.
//!
//! The quarter field of an audit ID is a pure function of the calendar
//! month; it is never inferred from any other input (in particular, not
//! from a location label).

use std::fmt;

/// A calendar quarter, `Q1` through `Q4`.
///
/// Derived from a month with the fixed mapping January–March → `Q1`,
/// April–June → `Q2`, July–September → `Q3`, October–December → `Q4`.
///
/// Rendered zero-padded inside an audit ID (`Q01`..`Q04`), which is also
/// what [`Display`](fmt::Display) produces.
///
/// # Example
///
/// ```
/// use audit_id::Quarter;
///
/// assert_eq!(Quarter::from_month(2), Quarter::Q1);
/// assert_eq!(Quarter::from_month(7), Quarter::Q3);
/// assert_eq!(Quarter::Q3.to_string(), "Q03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quarter {
    /// January through March
    Q1,
    /// April through June
    Q2,
    /// July through September
    Q3,
    /// October through December
    Q4,
}

impl Quarter {
    /// Derives the quarter from a 1-based calendar month.
    ///
    /// Months outside `1..=12` are clamped into range first, so the
    /// function is total; well-formed dates never hit the clamp.
    pub fn from_month(month: u32) -> Self {
        let month = month.clamp(1, 12);
        match (month - 1) / 3 {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// Returns the quarter number, `1..=4`.
    pub fn number(self) -> u32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    /// Returns the 1-based months covered by this quarter.
    pub fn months(self) -> [u32; 3] {
        match self {
            Quarter::Q1 => [1, 2, 3],
            Quarter::Q2 => [4, 5, 6],
            Quarter::Q3 => [7, 8, 9],
            Quarter::Q4 => [10, 11, 12],
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{:02}", self.number())
    }
}
