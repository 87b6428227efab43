use crate::core::messages;
use crate::domain::model::Color;
use crate::domain::ports::{Emitter, Prompter};
use crate::utils::error::{Result, SeedError};
use reqwest::{Client, StatusCode};
use tokio::runtime::{Handle, RuntimeFlavor};

pub const DEFAULT_ECHO_URL: &str = "https://ifconfig.me/";

/// Determines the node's public-facing address from a plain-text
/// address-echo service, asking the operator to confirm it unless forced.
#[derive(Debug, Clone)]
pub struct ExternalAddressResolver {
    client: Client,
    echo_url: String,
}

impl ExternalAddressResolver {
    pub fn new(client: Client, echo_url: impl Into<String>) -> Self {
        Self {
            client,
            echo_url: echo_url.into(),
        }
    }

    /// Single GET against the echo service. Any status other than 200, and
    /// any transport failure, is an unknown address.
    pub async fn detect(&self) -> Result<String> {
        tracing::debug!("Requesting external address from {}", self.echo_url);
        let response = self
            .client
            .get(&self.echo_url)
            .send()
            .await
            .map_err(|e| {
                SeedError::unknown_address(format!(
                    "There was an error determining the IP address automatically. ({})",
                    e
                ))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SeedError::unknown_address(format!(
                "There was an error determining the IP address automatically. (status code {})",
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(|e| {
            SeedError::unknown_address(format!("Could not read address-echo response: {}", e))
        })?;
        Ok(body.trim().to_string())
    }

    /// A failed lookup is returned as-is, forced or not: there is no
    /// interactive fallback when the echo service is unavailable.
    pub async fn resolve(
        &self,
        emitter: &dyn Emitter,
        prompter: &dyn Prompter,
        force: bool,
    ) -> Result<String> {
        let rest_host = self.detect().await?;

        if force {
            emitter.message(&messages::force_detect_ip_warning(&rest_host), Some(Color::Yellow));
            return Ok(rest_host);
        }

        let question = messages::confirm_node_ipv4_address(&rest_host);
        if blocking_prompt(|| prompter.confirm(&question))? {
            Ok(rest_host)
        } else {
            let entered =
                blocking_prompt(|| prompter.prompt_ipv4(messages::COLLECT_NODE_IPV4_ADDRESS))?;
            tracing::info!("Using operator-supplied address {}", entered);
            Ok(entered.to_string())
        }
    }
}

/// Prompts wait on the terminal. On a multi-threaded runtime the worker is
/// handed off first; `block_in_place` panics on a current-thread runtime.
fn blocking_prompt<T>(prompt: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(prompt)
        }
        _ => prompt(),
    }
}

impl Default for ExternalAddressResolver {
    fn default() -> Self {
        Self::new(Client::new(), DEFAULT_ECHO_URL)
    }
}
