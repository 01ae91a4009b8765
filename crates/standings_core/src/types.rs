use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque competitor identifier (player number, team seed, ...)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitorId(String);

impl CompetitorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompetitorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CompetitorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A ranked entity: a player in the seeding round or a team in round-robin play
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    /// Display name
    pub name: String,
    /// Round-robin division, if the stage is divided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<u32>,
}

impl Competitor {
    pub fn new(id: impl Into<CompetitorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            division: None,
        }
    }

    pub fn in_division(mut self, division: u32) -> Self {
        self.division = Some(division);
        self
    }
}
