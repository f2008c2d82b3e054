// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport abstraction for provider APIs.
//!
//! Provides the [`DispatchHttpClient`] trait for abstracting the two raw
//! HTTP operations and [`ReqwestDispatchClient`] for production use, plus
//! [`MockDispatchClient`] for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::error::{DispatchError, Error, Result};
use crate::job::JobParams;
use crate::provider::Provider;

/// Submit response from a provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Provider-assigned job identifier
    pub id: String,
    /// Initial raw status, if the provider reports one
    #[serde(default)]
    pub status: Option<String>,
}

/// Status response from a provider.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    /// Raw provider status string
    pub status: String,
}

/// Trait for raw provider HTTP operations.
///
/// This trait enables testing the dispatch path without real HTTP calls.
#[async_trait]
pub trait DispatchHttpClient: Send + Sync {
    /// `POST {endpoint}/jobs` with the job parameters as JSON body.
    async fn post_job(
        &self,
        provider: &Provider,
        body: &JobParams,
    ) -> std::result::Result<SubmitResponse, DispatchError>;

    /// `GET {endpoint}/jobs/{job_id}`.
    async fn get_job(
        &self,
        provider: &Provider,
        job_id: &str,
    ) -> std::result::Result<StatusResponse, DispatchError>;
}

/// Production HTTP client using reqwest.
///
/// One client serves every provider; per-request endpoint and credential
/// come from the [`Provider`] entry. Every request carries the configured
/// timeout so a stuck provider surfaces as `ProviderUnreachable` instead
/// of pinning a rate-limiter slot indefinitely.
pub struct ReqwestDispatchClient {
    client: reqwest::Client,
}

impl ReqwestDispatchClient {
    /// Create a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DispatchHttpClient for ReqwestDispatchClient {
    async fn post_job(
        &self,
        provider: &Provider,
        body: &JobParams,
    ) -> std::result::Result<SubmitResponse, DispatchError> {
        let url = provider.jobs_url();

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body);
        if let Some(credential) = provider.credential() {
            request = request.bearer_auth(credential.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(provider, e))?;
        let response = classify_status(provider, response).await?;

        response.json::<SubmitResponse>().await.map_err(|e| {
            DispatchError::BadResponse(format!(
                "{}: failed to parse submit response: {e}",
                provider.id()
            ))
        })
    }

    async fn get_job(
        &self,
        provider: &Provider,
        job_id: &str,
    ) -> std::result::Result<StatusResponse, DispatchError> {
        let url = provider.job_url(job_id);

        let mut request = self.client.get(&url);
        if let Some(credential) = provider.credential() {
            request = request.bearer_auth(credential.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(provider, e))?;
        let response = classify_status(provider, response).await?;

        response.json::<StatusResponse>().await.map_err(|e| {
            DispatchError::BadResponse(format!(
                "{}: failed to parse status response: {e}",
                provider.id()
            ))
        })
    }
}

/// Map a reqwest transport failure onto the error taxonomy.
///
/// Timeouts and connect failures are both unreachability from the hub's
/// point of view.
fn transport_error(provider: &Provider, e: reqwest::Error) -> DispatchError {
    if e.is_timeout() {
        DispatchError::ProviderUnreachable(format!("{}: request timed out: {e}", provider.id()))
    } else {
        DispatchError::ProviderUnreachable(format!("{}: {e}", provider.id()))
    }
}

/// Reject non-success responses, distinguishing auth rejection.
async fn classify_status(
    provider: &Provider,
    response: reqwest::Response,
) -> std::result::Result<reqwest::Response, DispatchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(DispatchError::AuthRejected(format!(
            "{} returned {status}: {body}",
            provider.id()
        )));
    }
    Err(DispatchError::BadResponse(format!(
        "{} returned {status}: {body}",
        provider.id()
    )))
}

/// Mock dispatch client for testing.
///
/// Responses are scripted; call counters let tests assert that an
/// operation issued no network call at all.
pub struct MockDispatchClient {
    pub submit_response: std::result::Result<SubmitResponse, DispatchError>,
    pub status_response: std::result::Result<StatusResponse, DispatchError>,
    submit_calls: AtomicUsize,
    status_calls: AtomicUsize,
}

impl Default for MockDispatchClient {
    fn default() -> Self {
        Self {
            submit_response: Ok(SubmitResponse {
                id: "mock-job-id".to_string(),
                status: Some("QUEUED".to_string()),
            }),
            status_response: Ok(StatusResponse {
                status: "COMPLETED".to_string(),
            }),
            submit_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
        }
    }
}

impl MockDispatchClient {
    /// A mock whose every call fails with the given error.
    pub fn failing(error: DispatchError) -> Self {
        Self {
            submit_response: Err(error.clone()),
            status_response: Err(error),
            ..Default::default()
        }
    }

    /// A mock answering status polls with the given raw status string.
    pub fn with_raw_status(raw: &str) -> Self {
        Self {
            status_response: Ok(StatusResponse {
                status: raw.to_string(),
            }),
            ..Default::default()
        }
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.submit_calls() + self.status_calls()
    }
}

#[async_trait]
impl DispatchHttpClient for MockDispatchClient {
    async fn post_job(
        &self,
        _provider: &Provider,
        _body: &JobParams,
    ) -> std::result::Result<SubmitResponse, DispatchError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submit_response.clone()
    }

    async fn get_job(
        &self,
        _provider: &Provider,
        _job_id: &str,
    ) -> std::result::Result<StatusResponse, DispatchError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.status_response.clone()
    }
}
