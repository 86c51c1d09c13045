//! Player identifiers and the two player pools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque player identifier (usually a short seed code such as "12").
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Which side a player plays for. Spirits are always paired against witches.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    Spirit,
    Witch,
}

impl Pool {
    pub fn opposite(self) -> Pool {
        match self {
            Pool::Spirit => Pool::Witch,
            Pool::Witch => Pool::Spirit,
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::Spirit => write!(f, "spirit"),
            Pool::Witch => write!(f, "witch"),
        }
    }
}
