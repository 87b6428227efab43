use crate::domain::model::{Domain, StaticNodes, TeacherUri};
use crate::utils::error::{Result, SeedError};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const STATIC_NODES_FILENAME: &str = "static-nodes.json";

/// Read-only view of a `static-nodes.json` file: a JSON object mapping
/// domain names to arrays of teacher URIs.
#[derive(Debug, Clone)]
pub struct StaticNodeStore {
    path: PathBuf,
}

impl StaticNodeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config root>/static-nodes.json`.
    pub fn in_config_root(config_root: &Path) -> Self {
        Self::new(config_root.join(STATIC_NODES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the entries for `domains`. A missing file yields an empty mapping;
    /// unrequested domains are dropped without being inspected.
    pub fn load(&self, domains: &BTreeSet<Domain>) -> Result<StaticNodes> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No static nodes file at {}", self.path.display());
                return Ok(StaticNodes::new());
            }
            Err(e) => return Err(SeedError::IoError(e)),
        };

        let parsed: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            SeedError::configuration(format!(
                "Static nodes file '{}' contains invalid JSON: {}",
                self.path.display(),
                e
            ))
        })?;

        let serde_json::Value::Object(entries) = parsed else {
            return Err(SeedError::configuration(format!(
                "Static nodes file '{}' must be a JSON object keyed by domain",
                self.path.display()
            )));
        };

        let mut static_nodes = StaticNodes::new();
        for (domain, uris) in entries {
            if !domains.contains(&domain) {
                continue;
            }
            let uris: Vec<TeacherUri> = serde_json::from_value(uris).map_err(|e| {
                SeedError::configuration(format!(
                    "Static nodes file '{}' has a malformed entry for domain '{}': {}",
                    self.path.display(),
                    domain,
                    e
                ))
            })?;
            static_nodes.insert(domain, uris);
        }

        tracing::debug!(
            "Loaded static nodes for {} domain(s) from {}",
            static_nodes.len(),
            self.path.display()
        );
        Ok(static_nodes)
    }
}
