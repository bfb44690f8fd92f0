// ⚙️ Configuration - where the member data lives
//
// The input path is fixed by configuration, not by a command line flag.
// Defaults to data/mdb.json, overridable through MDB_REPORT_INPUT.

use std::env;
use std::path::PathBuf;

pub const INPUT_ENV_VAR: &str = "MDB_REPORT_INPUT";
pub const DEFAULT_INPUT_PATH: &str = "data/mdb.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding the array of member records
    pub input_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from any key lookup (testable without env)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = lookup(INPUT_ENV_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));

        Config { input_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
        }
    }
}
