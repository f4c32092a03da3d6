use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the detail resolver answers a `(category, id)` request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Look the pair up in the catalog table
    #[default]
    Keyed,
    /// Always answer with the placeholder dinner record, echoing the requested id
    Fixed,
}

impl fmt::Display for ResolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverMode::Keyed => write!(f, "keyed"),
            ResolverMode::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for ResolverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyed" => Ok(ResolverMode::Keyed),
            "fixed" => Ok(ResolverMode::Fixed),
            _ => Err(format!("Invalid resolver mode: {}", s)),
        }
    }
}

/// Outcome label recorded for catalog lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    NotFound,
    Failed,
}

impl LookupOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupOutcome::Found => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::Failed => "failed",
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
