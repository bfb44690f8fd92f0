// 🏗️ Record Parser - raw record → Member
//
// Applies the period filter first, then reads the required fields and
// classifies the party. Skipped records produce no Member and no error.

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::entities::member::MIN_PERIOD;
use crate::entities::Member;
use crate::rules::classify_membership;
use crate::source::RawRecord;

// ============================================================================
// FIELD NAMES (source JSON keys)
// ============================================================================

pub const FIELD_PERIOD: &str = "WP";
pub const FIELD_JOB: &str = "beruf";
pub const FIELD_FIRST_NAME: &str = "vorname";
pub const FIELD_LAST_NAME: &str = "name";
pub const FIELD_MEMBERSHIP: &str = "membership";

// ============================================================================
// PERIOD COERCION
// ============================================================================

/// Parse a period string, 0 if it is not a plain integer.
///
/// No trimming: `" 21"` is 0. A leading sign is accepted.
pub fn parse_period(period: &str) -> i32 {
    period.parse::<i32>().unwrap_or(0)
}

/// Period of a raw record. Missing or non-string values count as 0.
pub fn record_period(record: &RawRecord) -> i32 {
    record.get_str(FIELD_PERIOD).map(parse_period).unwrap_or(0)
}

// ============================================================================
// RECORD PARSING
// ============================================================================

/// Parse one raw record.
///
/// # Returns
/// * `Ok(Some(member))` - record is from period 21 or later
/// * `Ok(None)` - record is filtered out by its period
/// * `Err(anyhow::Error)` - a kept record lacks a required string field
pub fn parse_record(record: &RawRecord) -> Result<Option<Member>> {
    let period = record_period(record);
    if period < MIN_PERIOD {
        return Ok(None);
    }

    let job = required_str(record, FIELD_JOB)?;
    let first_name = required_str(record, FIELD_FIRST_NAME)?;
    let last_name = required_str(record, FIELD_LAST_NAME)?;
    let party = classify_membership(record.get(FIELD_MEMBERSHIP));

    Ok(Some(Member::new(job, first_name, last_name, period, party)))
}

/// Parse all records in order, dropping the filtered ones.
///
/// The first malformed kept record aborts the whole load.
pub fn parse_records(records: &[RawRecord]) -> Result<Vec<Member>> {
    let mut members = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match parse_record(record).with_context(|| format!("Failed to parse record {}", index))? {
            Some(member) => members.push(member),
            None => debug!(index, period = record_period(record), "skipping record before period 21"),
        }
    }

    Ok(members)
}

fn required_str(record: &RawRecord, key: &str) -> Result<String> {
    record
        .get_str(key)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Missing or non-string field '{}'", key))
}

// ============================================================================
// TESTS
// ============================================================================
