// 🏛️ Party Entity - Fixed label set
//
// Every member ends up in exactly one of these. The textual label (not the
// enum order) is what the report groups and sorts by.

use serde::{Serialize, Serializer};
use std::fmt;

// ============================================================================
// PARTY
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Party {
    /// Alternative für Deutschland
    AfD,

    /// BÜNDNIS 90/DIE GRÜNEN
    Gruene,

    /// Die Linke
    Linke,

    /// Sozialdemokratische Partei Deutschlands
    Spd,

    /// Christlich Demokratische Union / Christlich-Soziale Union
    CduCsu,

    /// No rule matched, or affiliation data was missing or unreadable
    #[default]
    Independent,
}

impl Party {
    /// Human-readable label, used as report heading and sort key
    pub fn label(&self) -> &'static str {
        match self {
            Party::AfD => "AfD",
            Party::Gruene => "GRÜNE",
            Party::Linke => "LINKE",
            Party::Spd => "SPD",
            Party::CduCsu => "CDU/CSU",
            Party::Independent => "Independent Candidate",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as its label so JSON output matches the printed report
impl Serialize for Party {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ============================================================================
// TESTS
// ============================================================================
