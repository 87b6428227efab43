use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Network partition name, e.g. `mainnet`. Held in ordered sets so iteration is lexicographic.
pub type Domain = String;

/// Opaque teacher connection string. Not parsed at the aggregation layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherUri(String);

impl TeacherUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeacherUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeacherUri {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<String> for TeacherUri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

/// Domain-keyed teacher URIs as read from `static-nodes.json`.
pub type StaticNodes = BTreeMap<Domain, Vec<TeacherUri>>;

/// Acceptance policy a candidate teacher is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeacherPolicy {
    pub min_stake: u64,
    pub federated_only: bool,
}

/// Outcome of a single attempt to turn a URI into a teacher.
#[derive(Debug)]
pub enum TeacherConnection<T> {
    Connected(T),
    /// The peer could not be reached. Skipped.
    Unreachable(String),
    /// The peer answered but does not meet the staking requirement. Skipped.
    NotStaking(String),
    /// Anything else. Aborts the bootstrap.
    Failed(crate::utils::error::SeedError),
}

/// Color hint for user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Yellow,
}

impl Color {
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Yellow => "\x1b[33m",
        }
    }
}

/// Public information a teacher reports about itself over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherNode {
    #[serde(default)]
    pub uri: Option<TeacherUri>,
    #[serde(default)]
    pub nickname: Option<String>,
    pub stake: u64,
}
