use log::debug;
use serde_json::Value;

use crate::utils::constants::SEND_RAW_TX_PATH;
use crate::{Envelope, SdkError, SdkResult};

/// An abstraction over the transport that delivers envelopes to a node.
#[async_trait::async_trait]
pub trait TxSubmitter {
    /// Submits a single envelope and returns the node's decoded JSON reply.
    async fn send_raw_tx(&self, envelope: &Envelope) -> SdkResult<Value>;
}

/// HTTP client bound to a single node endpoint.
#[derive(Debug, Clone)]
pub struct NodeClient {
    endpoint: String,
    client: reqwest::Client,
}

impl NodeClient {
    pub fn new(endpoint: impl ToString) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: impl ToString, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl TxSubmitter for NodeClient {
    async fn send_raw_tx(&self, envelope: &Envelope) -> SdkResult<Value> {
        post_envelope(&self.client, &self.endpoint, envelope).await
    }
}

/// Submits `envelope` to `{endpoint}/send_raw_tx` with a one-off HTTP client.
///
/// A non-2xx reply is an error and its body is never parsed. No retry is
/// attempted.
pub async fn submit(endpoint: &str, envelope: &Envelope) -> SdkResult<Value> {
    post_envelope(&reqwest::Client::new(), endpoint, envelope).await
}

async fn post_envelope(
    client: &reqwest::Client,
    endpoint: &str,
    envelope: &Envelope,
) -> SdkResult<Value> {
    let url = send_raw_tx_url(endpoint);
    let body = envelope.to_json()?;
    debug!("posting envelope to {url}: {body}");

    let response = client
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    debug!("node replied with status {status}");

    if !status.is_success() {
        return Err(SdkError::Status {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    let bytes = response.bytes().await?;
    let reply: Value = serde_json::from_slice(&bytes)?;
    debug!("reply: {reply}");

    Ok(reply)
}

fn send_raw_tx_url(endpoint: &str) -> String {
    format!("{}/{SEND_RAW_TX_PATH}", endpoint.trim_end_matches('/'))
}
