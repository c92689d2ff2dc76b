use std::fmt;

use serde::{Deserialize, Serialize};

/// Module or chunk identifier: numeric for deterministic ids, string for
/// named ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatsId {
    Number(u64),
    Name(String),
}

impl From<u64> for StatsId {
    fn from(value: u64) -> Self {
        StatsId::Number(value)
    }
}

impl From<&str> for StatsId {
    fn from(value: &str) -> Self {
        StatsId::Name(value.to_owned())
    }
}

impl From<String> for StatsId {
    fn from(value: String) -> Self {
        StatsId::Name(value)
    }
}

impl fmt::Display for StatsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsId::Number(id) => write!(f, "{id}"),
            StatsId::Name(name) => f.write_str(name),
        }
    }
}
