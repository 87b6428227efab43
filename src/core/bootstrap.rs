use crate::core::aggregator::SeedUriAggregator;
use crate::core::messages;
use crate::domain::model::{Color, Domain, TeacherConnection, TeacherPolicy, TeacherUri};
use crate::domain::ports::{Emitter, TeacherFactory};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// What to bootstrap: the domains to draw teachers from, explicit URIs that
/// take precedence over every other source, and the acceptance policy.
#[derive(Debug, Clone, Default)]
pub struct BootstrapRequest {
    pub domains: BTreeSet<Domain>,
    pub teacher_uris: Vec<TeacherUri>,
    pub policy: TeacherPolicy,
}

pub struct TeacherBootstrapper<F: TeacherFactory> {
    aggregator: SeedUriAggregator,
    factory: F,
}

impl<F: TeacherFactory> TeacherBootstrapper<F> {
    pub fn new(aggregator: SeedUriAggregator, factory: F) -> Self {
        Self {
            aggregator,
            factory,
        }
    }

    /// Tries every aggregated URI once, in priority order, and returns the
    /// teachers that connected. Unreachable and non-staking teachers are
    /// reported and skipped; any other failure aborts.
    pub async fn bootstrap(
        &self,
        emitter: &dyn Emitter,
        request: &BootstrapRequest,
        network: &F::Network,
        registry: Option<&F::Registry>,
    ) -> Result<Vec<F::Teacher>> {
        emitter.message(messages::CONNECTING_TO_TEACHERS, Some(Color::Yellow));

        let mut teachers = Vec::new();
        let uris = self
            .aggregator
            .aggregate(&request.domains, &request.teacher_uris)?;
        if uris.is_empty() {
            emitter.message(&messages::no_domain_peers(&request.domains), None);
            return Ok(teachers);
        }

        for uri in &uris {
            tracing::debug!("Connecting to teacher {}", uri);
            match self
                .factory
                .from_teacher_uri(uri, &request.policy, network, registry)
                .await
            {
                TeacherConnection::Connected(teacher) => {
                    tracing::info!("Connected to teacher {}", uri);
                    teachers.push(teacher);
                }
                TeacherConnection::Unreachable(reason) => {
                    tracing::warn!("Teacher {} unreachable: {}", uri, reason);
                    emitter.message(&messages::teacher_unreachable(uri), None);
                }
                TeacherConnection::NotStaking(reason) => {
                    tracing::warn!("Teacher {} not staking: {}", uri, reason);
                    emitter.message(&messages::teacher_not_staking(uri), None);
                }
                TeacherConnection::Failed(err) => {
                    tracing::error!("Aborting bootstrap at teacher {}: {}", uri, err);
                    return Err(err);
                }
            }
        }

        if teachers.is_empty() {
            emitter.message(&messages::no_domain_peers(&request.domains), None);
        }
        tracing::info!(
            "Bootstrapped {} of {} teacher candidate(s)",
            teachers.len(),
            uris.len()
        );
        Ok(teachers)
    }
}
