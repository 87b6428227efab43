use crate::domain::model::{Domain, TeacherUri};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Built-in fallback teachers, tried after explicit and static-file URIs.
pub const TEACHER_NODES: &[(&str, &[&str])] = &[
    (
        "mainnet",
        &[
            "https://closest-seed.nucypher.network:9151",
            "https://seeds.nucypher.network:9151",
            "https://mainnet.nucypher.network:9151",
        ],
    ),
    ("lynx", &["https://lynx.nucypher.network:9151"]),
    ("ibex", &["https://ibex.nucypher.network:9151"]),
];

/// Immutable domain → teacher URI table. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct HardcodedTeachers {
    table: Arc<BTreeMap<Domain, Vec<TeacherUri>>>,
}

impl HardcodedTeachers {
    /// The process-wide table built from [`TEACHER_NODES`] on first use.
    pub fn builtin() -> &'static HardcodedTeachers {
        static BUILTIN: OnceLock<HardcodedTeachers> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::from_table(TEACHER_NODES))
    }

    pub fn from_table(table: &[(&str, &[&str])]) -> Self {
        let table = table
            .iter()
            .map(|(domain, uris)| {
                (
                    domain.to_string(),
                    uris.iter().map(|uri| TeacherUri::from(*uri)).collect(),
                )
            })
            .collect();
        Self {
            table: Arc::new(table),
        }
    }

    pub fn get(&self, domain: &str) -> Option<&[TeacherUri]> {
        self.table.get(domain).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_shared() {
        let first = HardcodedTeachers::builtin();
        let second = HardcodedTeachers::builtin();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.get("lynx").unwrap().len(), 1);
    }

    #[test]
    fn test_builtin_uris_are_unique_per_domain() {
        for (domain, uris) in TEACHER_NODES {
            for (idx, uri) in uris.iter().enumerate() {
                assert!(
                    !uris[..idx].contains(uri),
                    "duplicate teacher {uri} for {domain}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_domain_has_no_teachers() {
        assert!(HardcodedTeachers::builtin().get("no-such-domain").is_none());
    }
}
