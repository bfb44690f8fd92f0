// 🗂️ Faction Entity - A party and its members
//
// Created lazily by the report grouping: a faction only exists once a member
// with that party shows up, so empty factions never reach the output.

use serde::Serialize;

use super::{Member, Party};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faction {
    party: Party,

    /// Members in input order
    members: Vec<Member>,
}

impl Faction {
    /// Create an empty faction for a party
    pub fn new(party: Party) -> Self {
        Faction {
            party,
            members: Vec::new(),
        }
    }

    /// Append a member, keeping insertion order
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn party(&self) -> Party {
        self.party
    }

    /// Faction name as printed in the report
    pub fn name(&self) -> &'static str {
        self.party.label()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }
}
