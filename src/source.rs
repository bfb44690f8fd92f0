// 📂 Record Sources - Where raw member records come from
//
// The report never touches the filesystem directly. It asks a RecordSource
// for the raw records, so tests can hand in records from memory.

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// ============================================================================
// RAW RECORD
// ============================================================================

/// One raw input object, kept as untyped JSON.
///
/// Fields are only read when needed: a record that fails the period filter
/// is never asked for its name or job, so it may lack them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        RawRecord { fields }
    }

    /// Raw value of a field, if present
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field as a string, `None` if missing or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// Split a top-level JSON value into raw records.
///
/// The value must be an array of objects, anything else is a load failure.
pub fn records_from_value(value: Value) -> Result<Vec<RawRecord>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(anyhow!(
                "Expected a JSON array of member records, found {}",
                json_kind(&other)
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(RawRecord::new(fields)),
            other => Err(anyhow!(
                "Record {} is not a JSON object (found {})",
                index,
                json_kind(&other)
            )),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// RecordSource - produces the full raw record sequence in one read
pub trait RecordSource {
    /// Load all raw records
    ///
    /// # Returns
    /// * `Ok(Vec<RawRecord>)` - records in input order
    /// * `Err(anyhow::Error)` - source missing, unreadable or malformed
    fn load(&self) -> Result<Vec<RawRecord>>;

    /// Short description for log output
    fn describe(&self) -> String;
}

// ============================================================================
// JSON FILE SOURCE
// ============================================================================

/// Reads a JSON array of member objects from a file
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<RawRecord>> {
        // File handle lives only for this scope
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?;

        let reader = BufReader::new(file);
        let json: Value = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse JSON from {}", self.path.display()))?;

        records_from_value(json)
            .with_context(|| format!("Malformed member data in {}", self.path.display()))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

// ============================================================================
// IN-MEMORY SOURCE
// ============================================================================

/// Serves records already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<RawRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        InMemorySource { records }
    }

    /// Build from a JSON document, validated the same way as a file
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Failed to parse JSON input")?;
        Ok(InMemorySource::new(records_from_value(value)?))
    }
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================
