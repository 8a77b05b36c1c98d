// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! HTTP client for the hosted form relay.
//!
//! The relay accepts one JSON object per message and answers with a JSON
//! object carrying a boolean `success`. Non-2xx statuses still carry that
//! body, so the body alone decides acceptance.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::RelayConfig;
use crate::models::submission::Submission;

/// Transport or decoding failures while talking to the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse relay response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON body sent to the relay: the three form fields plus the access key.
#[derive(Debug, Serialize)]
pub struct RelayPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub access_key: &'a str,
}

impl<'a> RelayPayload<'a> {
    pub fn new(submission: &'a Submission, access_key: &'a str) -> Self {
        Self {
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
            access_key,
        }
    }
}

/// Decoded relay answer.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RelayReply {
    /// Missing counts as a rejection.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Anything able to forward a validated submission.
pub trait Relay: Send + Sync {
    fn submit(&self, submission: &Submission) -> Result<RelayReply, RelayError>;
}

/// Blocking Web3Forms client, meant to run on a worker thread.
pub struct Web3FormsRelay {
    client: Client,
    config: RelayConfig,
}

impl Web3FormsRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RelayError::Client)?;
        Ok(Self { client, config })
    }
}

impl Relay for Web3FormsRelay {
    fn submit(&self, submission: &Submission) -> Result<RelayReply, RelayError> {
        let payload = RelayPayload::new(submission, &self.config.access_key);
        let body = serde_json::to_vec(&payload)?;

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let bytes = response.bytes()?;
        debug!(%status, len = bytes.len(), "relay responded");

        Ok(serde_json::from_slice(&bytes)?)
    }
}
