// MdB Report - Core Library
// Loads parliament member records, classifies parties and builds the report

pub mod config;
pub mod entities;
pub mod parser;
pub mod report;
pub mod rules;
pub mod source;

// Re-export commonly used types
pub use config::Config;
pub use entities::{Faction, Member, Party};
pub use entities::member::MIN_PERIOD;
pub use parser::{parse_period, parse_record, parse_records};
pub use report::{build_report, group_by_party, PartyReport};
pub use rules::{classify, classify_membership, PartyRule, PARTY_RULES};
pub use source::{InMemorySource, JsonFileSource, RawRecord, RecordSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
