use crate::domain::model::{TeacherConnection, TeacherNode, TeacherPolicy, TeacherUri};
use crate::domain::ports::TeacherFactory;
use crate::utils::error::{Result, SeedError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const PUBLIC_INFORMATION_PATH: &str = "public_information";

/// HTTP transport teachers are reached over.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
}

impl RestClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Builds teachers by fetching `<uri>/public_information` and checking the
/// reported stake against the policy.
#[derive(Debug, Clone, Default)]
pub struct HttpTeacherFactory;

impl HttpTeacherFactory {
    fn endpoint(uri: &TeacherUri) -> Result<Url> {
        let mut url = Url::parse(uri.as_str()).map_err(|e| {
            SeedError::configuration(format!("Invalid teacher URI '{}': {}", uri, e))
        })?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(SeedError::configuration(format!(
                    "Unsupported teacher URI scheme '{}' in '{}'",
                    scheme, uri
                )))
            }
        }
        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            PUBLIC_INFORMATION_PATH
        );
        url.set_path(&path);
        Ok(url)
    }
}

#[async_trait]
impl TeacherFactory for HttpTeacherFactory {
    type Teacher = TeacherNode;
    type Network = RestClient;
    type Registry = ();

    async fn from_teacher_uri(
        &self,
        uri: &TeacherUri,
        policy: &TeacherPolicy,
        network: &RestClient,
        _registry: Option<&()>,
    ) -> TeacherConnection<TeacherNode> {
        let endpoint = match Self::endpoint(uri) {
            Ok(endpoint) => endpoint,
            Err(e) => return TeacherConnection::Failed(e),
        };

        tracing::debug!("Fetching teacher information from {}", endpoint);
        let response = match network.client().get(endpoint).send().await {
            Ok(response) => response,
            // a teacher that redirects forever is misconfigured, not down
            Err(e) if e.is_redirect() || e.is_builder() => {
                return TeacherConnection::Failed(SeedError::PeerConnectionError {
                    uri: uri.to_string(),
                    message: e.to_string(),
                })
            }
            Err(e) => return TeacherConnection::Unreachable(e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            return TeacherConnection::Unreachable(format!("status code {}", status.as_u16()));
        }

        let mut node: TeacherNode = match response.json().await {
            Ok(node) => node,
            Err(e) => {
                return TeacherConnection::Unreachable(format!("unreadable public information: {}", e))
            }
        };
        node.uri = Some(uri.clone());

        if !policy.federated_only && node.stake < policy.min_stake {
            return TeacherConnection::NotStaking(format!(
                "stake {} is below the minimum of {}",
                node.stake, policy.min_stake
            ));
        }

        TeacherConnection::Connected(node)
    }
}
