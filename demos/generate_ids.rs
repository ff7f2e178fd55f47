//! Audit identifier generation walkthrough.
//!
//! This example shows the generator's behavior end to end:
//! 1. Per-(date, quarter) counters starting at 01
//! 2. Independence between dates and quarters
//! 3. Sequence override (replay) and continuation
//! 4. Wraparound after 99
//! 5. The debug log events emitted per issued ID
//!
//! Run with: `cargo run --example generate_ids`

use audit_id::{AuditIdGenerator, IdRequest};
use chrono::NaiveDate;

fn main() {
    // Show the generator's debug events on stderr
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Audit ID Generation Example ===\n");

    let mut generator = AuditIdGenerator::new();
    let july = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
    let december = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    // Scenario 1: counters per date and quarter
    println!("--- Scenario 1: Counters start at 01 per (date, quarter) ---");
    for _ in 0..3 {
        println!("  {}", generator.generate(IdRequest::for_date(july)));
    }
    println!("  {}  <- December counts on its own", generator.generate(IdRequest::for_date(december)));

    // Scenario 2: replaying a known sequence value
    println!("\n--- Scenario 2: Sequence override ---");
    let replayed = generator.generate(
        IdRequest::for_date(july)
            .with_sequence(42)
            .with_location("DH-EAST-02"),
    );
    println!("  {}  <- replayed 42 (location only appears in the log)", replayed);
    println!("  {}  <- counter continues from there", generator.generate(IdRequest::for_date(july)));

    // Scenario 3: wraparound
    println!("\n--- Scenario 3: Wraparound after 99 ---");
    let mut fresh = AuditIdGenerator::new();
    let mut last = fresh.generate(IdRequest::for_date(july));
    for _ in 0..98 {
        last = fresh.generate(IdRequest::for_date(july));
    }
    println!("  99th issue:  {}", last);
    println!("  100th issue: {}", fresh.generate(IdRequest::for_date(july)));

    // Scenario 4: strict parsing of stored identifiers
    println!("\n--- Scenario 4: Parsing ---");
    let parsed: audit_id::AuditId = "20250719-AUD-Q03-07".parse().unwrap();
    println!("  parsed {} (quarter {}, sequence {})", parsed, parsed.quarter(), parsed.sequence());
    let rejected = "20250719-AUD-Q01-07".parse::<audit_id::AuditId>().unwrap_err();
    println!("  rejected mismatched quarter: {}", rejected);
}
