use chrono::{Local, NaiveDate};

use crate::id::AuditId;
use crate::sequence::{SequenceKey, SequenceTable};

/// A request for one audit identifier.
///
/// Built with the usual chaining style; everything is optional:
/// the date defaults to the current local wall-clock date, the sequence
/// defaults to the generator's counter for the date's key, and the
/// location label defaults to none.
///
/// The location label is caller-supplied context only. It never changes
/// the date, quarter, or sequence fields of the emitted identifier — the
/// quarter is always derived from the date's month — and is surfaced only
/// through the generator's debug log event.
///
/// # Example
///
/// ```
/// use audit_id::IdRequest;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
/// let request = IdRequest::for_date(date)
///     .with_sequence(5)
///     .with_location("DH-EAST-02");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdRequest {
    date: Option<NaiveDate>,
    sequence: Option<u32>,
    location: Option<String>,
}

impl IdRequest {
    /// Creates a request for the current local date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request for an explicit date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Overrides the sequence number for this request.
    ///
    /// The value is issued as-is and the stored counter for the date's
    /// key becomes `sequence + 1`, as if the counter had just issued it.
    /// No range check is applied: values outside `1..=99` render outside
    /// the canonical two-digit field and will not re-parse. Validate at
    /// the call site if the strict format must hold for all inputs.
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Attaches a free-text location label (e.g. a data-hall name).
    ///
    /// Cosmetic: logged alongside the issued ID, never encoded into it.
    pub fn with_location(mut self, label: impl Into<String>) -> Self {
        self.location = Some(label.into());
        self
    }
}

/// Issues audit identifiers and owns their sequence counters.
///
/// Each generator instance holds its own [`SequenceTable`], so counters
/// never leak between instances — tests can create a fresh generator
/// instead of sharing process-global state. Within one instance,
/// identifiers are unique per (date, quarter) until the 99-value
/// sequence space wraps.
///
/// Uniqueness does **not** extend across processes or restarts: two
/// generators (or one recreated after a restart) each start counting
/// from 1. Callers needing system-wide uniqueness must externalize the
/// counter into shared storage (an atomic increment, or a unique
/// constraint with retry on conflict) and treat this type as the
/// in-memory reference behavior.
///
/// # Example
///
/// ```
/// use audit_id::{AuditIdGenerator, IdRequest};
/// use chrono::NaiveDate;
///
/// let mut generator = AuditIdGenerator::new();
/// let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
///
/// let first = generator.generate(IdRequest::for_date(date));
/// let second = generator.generate(IdRequest::for_date(date));
///
/// assert_eq!(first.to_string(), "20250719-AUD-Q03-01");
/// assert_eq!(second.to_string(), "20250719-AUD-Q03-02");
/// ```
#[derive(Debug, Default)]
pub struct AuditIdGenerator {
    table: SequenceTable,
}

impl AuditIdGenerator {
    /// Creates a generator with an empty counter table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the identifier described by `request`.
    ///
    /// Total over its inputs: any valid date produces a well-formed ID
    /// and the only side effect is the counter update for the date's key.
    pub fn generate(&mut self, request: IdRequest) -> AuditId {
        let date = request
            .date
            .unwrap_or_else(|| Local::now().date_naive());
        let key = SequenceKey::for_date(date);

        let sequence = match request.sequence {
            Some(sequence) => self.table.replay(key, sequence),
            None => self.table.issue(key),
        };

        let id = AuditId::new(date, sequence);
        tracing::debug!(
            key = %key,
            sequence,
            location = request.location.as_deref(),
            "issued audit id {}",
            id
        );
        id
    }

    /// Issues an identifier for the current local date with no overrides.
    pub fn generate_now(&mut self) -> AuditId {
        self.generate(IdRequest::new())
    }

    /// Clears every sequence counter.
    ///
    /// Intended for test isolation; idempotent, and not part of normal
    /// runtime flow. Afterward every key starts again at 1.
    pub fn reset(&mut self) {
        self.table.reset();
    }
}
