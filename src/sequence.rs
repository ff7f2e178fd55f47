//! Per-(date, quarter) sequence counters.
//!
//! Every audit ID draws its sequence number from a counter scoped by a
//! [`SequenceKey`]. Counters are created lazily on first use, advance
//! independently of each other, and wrap from 99 back to 1.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::id::MAX_SEQUENCE;
use crate::quarter::Quarter;

/// Scope of one sequence counter: a calendar date and its quarter.
///
/// The textual form is the date field followed by the unpadded quarter,
/// e.g. `20250719-Q3`. Only the rendered audit ID zero-pads the quarter.
///
/// # Example
///
/// ```
/// use audit_id::SequenceKey;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
/// assert_eq!(SequenceKey::for_date(date).to_string(), "20250719-Q3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceKey {
    date: NaiveDate,
    quarter: Quarter,
}

impl SequenceKey {
    /// Derives the key for a date; the quarter comes from the date's month.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            quarter: Quarter::from_month(date.month()),
        }
    }

    /// Returns the date this key scopes.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the quarter this key scopes.
    pub fn quarter(&self) -> Quarter {
        self.quarter
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}-Q{}",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.quarter.number()
        )
    }
}

/// In-memory table of per-key counters.
///
/// Each entry stores the *next* sequence number to issue for its key.
/// The table lives for the lifetime of its owner; only [`reset`](Self::reset)
/// clears it. Uniqueness therefore holds within one table instance only —
/// callers needing cross-process uniqueness must back the counter by a
/// shared store instead.
#[derive(Debug, Default)]
pub struct SequenceTable {
    next: HashMap<SequenceKey, u32>,
}

impl SequenceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next sequence number for `key`.
    ///
    /// A key seen for the first time issues 1. After 99 the counter wraps
    /// back to 1, so by-construction values stay within `1..=99`.
    pub fn issue(&mut self, key: SequenceKey) -> u32 {
        match self.next.get_mut(&key) {
            None => {
                self.next.insert(key, 2);
                1
            }
            Some(next) => {
                let sequence = *next;
                *next = if sequence >= MAX_SEQUENCE { 1 } else { sequence + 1 };
                sequence
            }
        }
    }

    /// Issues `sequence` directly and records `sequence + 1` as the key's
    /// next value, as if `sequence` had just been issued by the counter.
    ///
    /// No range check is applied; values outside `1..=99` pass through
    /// (the one case where an issued value can exceed [`MAX_SEQUENCE`]).
    pub fn replay(&mut self, key: SequenceKey, sequence: u32) -> u32 {
        self.next.insert(key, sequence.saturating_add(1));
        sequence
    }

    /// Clears every counter. Idempotent.
    pub fn reset(&mut self) {
        self.next.clear();
    }

    /// Returns the number of keys with live counters.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Returns `true` if no counter has been created yet.
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(y: i32, m: u32, d: u32) -> SequenceKey {
        SequenceKey::for_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn key_text_uses_unpadded_quarter() {
        assert_eq!(key(2025, 7, 19).to_string(), "20250719-Q3");
        assert_eq!(key(2025, 1, 5).to_string(), "20250105-Q1");
    }

    #[test]
    fn first_issue_is_one() {
        let mut table = SequenceTable::new();
        assert_eq!(table.issue(key(2025, 7, 19)), 1);
    }

    #[test]
    fn issues_are_consecutive_per_key() {
        let mut table = SequenceTable::new();
        let k = key(2025, 7, 19);
        let issued: Vec<u32> = (0..5).map(|_| table.issue(k)).collect();
        assert_eq!(issued, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn wraps_after_ninety_nine() {
        let mut table = SequenceTable::new();
        let k = key(2025, 7, 19);
        for expected in 1..=MAX_SEQUENCE {
            assert_eq!(table.issue(k), expected);
        }
        assert_eq!(table.issue(k), 1);
        assert_eq!(table.issue(k), 2);
    }

    #[test]
    fn keys_advance_independently() {
        let mut table = SequenceTable::new();
        let jan = key(2025, 1, 1);
        let dec = key(2025, 12, 31);

        for _ in 0..10 {
            table.issue(jan);
        }
        assert_eq!(table.issue(dec), 1);
        assert_eq!(table.issue(jan), 11);
    }

    #[test]
    fn replay_sets_the_next_value() {
        let mut table = SequenceTable::new();
        let k = key(2025, 7, 19);

        assert_eq!(table.replay(k, 5), 5);
        assert_eq!(table.issue(k), 6);
    }

    #[test]
    fn replay_at_the_bound_passes_through() {
        // An override of 99 stores 100 as next, so the following default
        // issue emits 100 once before the counter wraps.
        let mut table = SequenceTable::new();
        let k = key(2025, 7, 19);

        assert_eq!(table.replay(k, MAX_SEQUENCE), 99);
        assert_eq!(table.issue(k), 100);
        assert_eq!(table.issue(k), 1);
    }

    #[test]
    fn reset_clears_all_keys() {
        let mut table = SequenceTable::new();
        table.issue(key(2025, 1, 1));
        table.issue(key(2025, 12, 31));
        assert_eq!(table.len(), 2);

        table.reset();
        assert!(table.is_empty());
        assert_eq!(table.issue(key(2025, 1, 1)), 1);
    }

    #[test]
    fn reset_on_empty_table_is_a_no_op() {
        let mut table = SequenceTable::new();
        table.reset();
        table.reset();
        assert!(table.is_empty());
    }
}
