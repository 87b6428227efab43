use crate::domain::model::{Color, TeacherConnection, TeacherPolicy, TeacherUri};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::Ipv4Addr;

/// Sink for user-facing progress and warning notices. Must not fail.
pub trait Emitter: Send + Sync {
    fn message(&self, text: &str, color: Option<Color>);
}

/// Builds a validated teacher from a URI.
///
/// `Network` is the transport the teacher is reached over and `Registry` the
/// optional chain registry used for stake lookups. Both are opaque to the
/// bootstrap loop, which only passes them through.
#[async_trait]
pub trait TeacherFactory: Send + Sync {
    type Teacher: Send;
    type Network: Send + Sync;
    type Registry: Send + Sync;

    async fn from_teacher_uri(
        &self,
        uri: &TeacherUri,
        policy: &TeacherPolicy,
        network: &Self::Network,
        registry: Option<&Self::Registry>,
    ) -> TeacherConnection<Self::Teacher>;
}

/// Interactive questions asked while configuring the node.
pub trait Prompter: Send + Sync {
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Keeps asking until the answer is a well-formed IPv4 address.
    fn prompt_ipv4(&self, question: &str) -> Result<Ipv4Addr>;
}
