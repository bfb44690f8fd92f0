// 🏷️ Party Rules - Rules as Data
// Ordered substring rules that map membership strings to a party

use serde_json::Value;

use crate::entities::Party;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyRule {
    /// Substring to look for (case-sensitive)
    pub pattern: &'static str,

    /// Party assigned when the pattern is found
    pub party: Party,
}

impl PartyRule {
    /// Check if the pattern occurs anywhere in the given text
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.pattern)
    }

    /// Check if the pattern occurs in any of the given strings
    pub fn matches_any<S: AsRef<str>>(&self, groups: &[S]) -> bool {
        groups.iter().any(|group| self.matches(group.as_ref()))
    }
}

/// Rule table in priority order. First rule that matches any group wins.
pub const PARTY_RULES: &[PartyRule] = &[
    PartyRule { pattern: "Alternative", party: Party::AfD },
    PartyRule { pattern: "GRÜNEN", party: Party::Gruene },
    PartyRule { pattern: "Die Linke", party: Party::Linke },
    PartyRule { pattern: "Sozialdemokratischen", party: Party::Spd },
    PartyRule { pattern: "Christlich Demokratischen", party: Party::CduCsu },
];

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a list of membership strings.
///
/// Rule-major scan: rule 1 is tested against every group before rule 2 is
/// tried, so a list holding both an AfD and a LINKE entry is always AfD
/// regardless of the order the entries appear in.
pub fn classify<S: AsRef<str>>(groups: &[S]) -> Party {
    PARTY_RULES
        .iter()
        .find(|rule| rule.matches_any(groups))
        .map(|rule| rule.party)
        .unwrap_or_default()
}

/// Classify the raw `membership` value of a record.
///
/// Absent data, a non-array value, or any non-string entry falls back to
/// `Party::Independent`. Nothing here can fail the caller.
pub fn classify_membership(membership: Option<&Value>) -> Party {
    match membership.and_then(membership_groups) {
        Some(groups) => classify(&groups),
        None => Party::Independent,
    }
}

/// Read the membership array as strings, `None` if it is not readable.
///
/// The whole list is read before any rule runs, so one bad entry makes
/// the list unreadable even when an earlier entry would have matched.
/// A string-by-string scan would still return that earlier match.
fn membership_groups(value: &Value) -> Option<Vec<&str>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_str)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
