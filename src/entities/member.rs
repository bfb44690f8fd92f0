// 👤 Member Entity - One member of parliament
//
// Built once, right after a raw record passes the period filter and has its
// party classified. Never mutated afterwards.

use serde::Serialize;
use std::fmt;

use super::Party;

/// First legislative period (Wahlperiode) that makes it into the report
pub const MIN_PERIOD: i32 = 21;

// ============================================================================
// MEMBER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Profession as given in the source (`beruf`)
    job: String,

    first_name: String,
    last_name: String,

    /// Legislative period number (WP)
    period: i32,

    party: Party,
}

impl Member {
    pub fn new(
        job: String,
        first_name: String,
        last_name: String,
        period: i32,
        party: Party,
    ) -> Self {
        Member {
            job,
            first_name,
            last_name,
            period,
            party,
        }
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn period(&self) -> i32 {
        self.period
    }

    pub fn party(&self) -> Party {
        self.party
    }
}

/// Format: "Lastname, Firstname (Job) - WP Period"
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({}) - WP {}",
            self.last_name, self.first_name, self.job, self.period
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
