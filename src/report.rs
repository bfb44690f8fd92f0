// 📊 Party Report - grouping and rendering
//
// Members are grouped into factions keyed by party label. The map is a
// BTreeMap so iteration order is the sorted (code point) order of labels.

use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

use crate::entities::{Faction, Member};
use crate::parser::parse_records;
use crate::source::RecordSource;

pub const REPORT_TITLE: &str = "Members of Parliament and their Party (from period 21):";
pub const REPORT_RULE: &str = "======================================";

// ============================================================================
// GROUPING
// ============================================================================

/// Group members into factions, sorted by party label.
///
/// Members keep their input order inside a faction. Factions are only
/// created when a member needs one.
pub fn group_by_party(members: &[Member]) -> Vec<Faction> {
    let mut by_party: BTreeMap<&'static str, Faction> = BTreeMap::new();

    for member in members {
        let party = member.party();
        by_party
            .entry(party.label())
            .or_insert_with(|| Faction::new(party))
            .add_member(member.clone());
    }

    by_party.into_values().collect()
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyReport {
    factions: Vec<Faction>,
}

impl PartyReport {
    /// Build the report from members in input order
    pub fn new(members: &[Member]) -> Self {
        PartyReport {
            factions: group_by_party(members),
        }
    }

    /// Factions in sorted party order
    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    /// Sum of all faction counts
    pub fn total(&self) -> usize {
        self.factions.iter().map(Faction::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }
}

impl fmt::Display for PartyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_TITLE)?;
        writeln!(f, "{}", REPORT_RULE)?;

        for faction in &self.factions {
            writeln!(f)?;
            writeln!(f, "{}:", faction.name())?;
            for member in faction.members() {
                writeln!(f, "  - {}", member)?;
            }
            writeln!(f, "  Count: {}", faction.count())?;
        }

        writeln!(f)?;
        writeln!(f, "Total: {} Members", self.total())
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Load, parse, classify and group everything a source provides
pub fn build_report(source: &dyn RecordSource) -> Result<PartyReport> {
    let records = source.load()?;
    info!(source = %source.describe(), records = records.len(), "loaded member records");

    let members = parse_records(&records)?;
    let report = PartyReport::new(&members);
    debug!(
        members = members.len(),
        factions = report.factions().len(),
        "grouped members by party"
    );

    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Party;
    use crate::source::InMemorySource;

    fn member(first: &str, last: &str, job: &str, period: i32, party: Party) -> Member {
        Member::new(
            job.to_string(),
            first.to_string(),
            last.to_string(),
            period,
            party,
        )
    }

    #[test]
    fn test_group_sorts_by_label() {
        let members = vec![
            member("A", "Spd", "x", 21, Party::Spd),
            member("B", "Ind", "x", 21, Party::Independent),
            member("C", "Gru", "x", 21, Party::Gruene),
            member("D", "Cdu", "x", 21, Party::CduCsu),
            member("E", "Lin", "x", 21, Party::Linke),
            member("F", "Afd", "x", 21, Party::AfD),
        ];

        let names: Vec<&str> = group_by_party(&members).iter().map(Faction::name).collect();
        assert_eq!(
            names,
            vec!["AfD", "CDU/CSU", "GRÜNE", "Independent Candidate", "LINKE", "SPD"]
        );

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_group_is_stable() {
        let members = vec![
            member("Zoe", "Zander", "x", 21, Party::Spd),
            member("Max", "Adam", "x", 22, Party::Linke),
            member("Ida", "Berg", "x", 21, Party::Spd),
        ];

        let factions = group_by_party(&members);
        let spd = factions.iter().find(|f| f.party() == Party::Spd).unwrap();
        assert_eq!(spd.members()[0].last_name(), "Zander");
        assert_eq!(spd.members()[1].last_name(), "Berg");
    }

    #[test]
    fn test_empty_parties_are_absent() {
        let members = vec![member("Anna", "Müller", "Lawyer", 21, Party::Spd)];
        let report = PartyReport::new(&members);

        assert_eq!(report.factions().len(), 1);
        assert_eq!(report.factions()[0].name(), "SPD");
    }

    #[test]
    fn test_total_is_sum_of_counts() {
        let members = vec![
            member("A", "A", "x", 21, Party::Spd),
            member("B", "B", "x", 21, Party::Spd),
            member("C", "C", "x", 21, Party::AfD),
        ];
        let report = PartyReport::new(&members);

        let sum: usize = report.factions().iter().map(Faction::count).sum();
        assert_eq!(report.total(), sum);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_render_single_member() {
        let report = PartyReport::new(&[member("Anna", "Müller", "Lawyer", 21, Party::Spd)]);

        let expected = "\
Members of Parliament and their Party (from period 21):
======================================

SPD:
  - Müller, Anna (Lawyer) - WP 21
  Count: 1

Total: 1 Members
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_render_empty() {
        let report = PartyReport::new(&[]);
        assert!(report.is_empty());

        let expected = "\
Members of Parliament and their Party (from period 21):
======================================

Total: 0 Members
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_build_report_from_source() {
        let source = InMemorySource::from_json_str(
            r#"[
                {"WP": "21", "beruf": "Lawyer", "vorname": "Anna", "name": "Müller",
                 "membership": ["Sozialdemokratischen Partei"]},
                {"WP": "19", "beruf": "Doctor", "vorname": "Jan", "name": "Keller",
                 "membership": []}
            ]"#,
        )
        .unwrap();

        let report = build_report(&source).unwrap();
        assert_eq!(report.total(), 1);
        assert_eq!(report.factions()[0].party(), Party::Spd);
    }
}
