use crate::core::static_nodes::StaticNodeStore;
use crate::core::teachers::HardcodedTeachers;
use crate::domain::model::{Domain, TeacherUri};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// Merges teacher URI sources into one list ordered by connection priority:
///
/// 1. URIs passed explicitly (`--teacher`)
/// 2. `static-nodes.json`, per domain
/// 3. Hardcoded teachers, per domain
#[derive(Debug, Clone)]
pub struct SeedUriAggregator {
    store: StaticNodeStore,
    hardcoded: HardcodedTeachers,
}

impl SeedUriAggregator {
    pub fn new(store: StaticNodeStore, hardcoded: HardcodedTeachers) -> Self {
        Self { store, hardcoded }
    }

    pub fn with_builtin_teachers(store: StaticNodeStore) -> Self {
        Self::new(store, HardcodedTeachers::builtin().clone())
    }

    /// Duplicates are kept; domains are visited in sorted order.
    pub fn aggregate(
        &self,
        domains: &BTreeSet<Domain>,
        highest_priority: &[TeacherUri],
    ) -> Result<Vec<TeacherUri>> {
        let static_nodes = self.store.load(domains)?;

        let mut uris = highest_priority.to_vec();
        for domain in domains {
            if let Some(domain_static_nodes) = static_nodes.get(domain) {
                uris.extend(domain_static_nodes.iter().cloned());
            }
            if let Some(hardcoded_uris) = self.hardcoded.get(domain) {
                uris.extend(hardcoded_uris.iter().cloned());
            }
        }

        tracing::debug!(
            "Aggregated {} teacher URI(s) ({} explicit) for {} domain(s)",
            uris.len(),
            highest_priority.len(),
            domains.len()
        );
        Ok(uris)
    }
}
