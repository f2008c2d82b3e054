// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Authenticated submit/status calls against provider endpoints.
//!
//! The dispatch client is generic over [`DispatchHttpClient`], enabling
//! deterministic testing with a mock transport while using
//! [`ReqwestDispatchClient`] in production. Every call runs inside the
//! shared [`RateLimiter`], so the process-wide in-flight ceiling holds
//! across all providers combined.

pub mod client;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

pub use client::{
    DispatchHttpClient, MockDispatchClient, ReqwestDispatchClient, StatusResponse, SubmitResponse,
};

use crate::config::DispatchConfig;
use crate::error::{DispatchError, Result};
use crate::job::{JobHandle, JobParams, JobStatus};
use crate::limiter::RateLimiter;
use crate::provider::Provider;

/// Rate-limited dispatch client.
pub struct DispatchClient<C: DispatchHttpClient = ReqwestDispatchClient> {
    http: C,
    limiter: Arc<RateLimiter>,
}

impl DispatchClient<ReqwestDispatchClient> {
    /// Create the production client from configuration.
    pub fn from_config(config: &DispatchConfig, limiter: Arc<RateLimiter>) -> Result<Self> {
        let http = ReqwestDispatchClient::new(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self { http, limiter })
    }
}

impl<C: DispatchHttpClient> DispatchClient<C> {
    /// Create with a custom transport (for testing).
    pub fn with_client(http: C, limiter: Arc<RateLimiter>) -> Self {
        Self { http, limiter }
    }

    /// The shared limiter gating this client's calls.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// The underlying transport.
    pub fn transport(&self) -> &C {
        &self.http
    }

    /// Submit optimized parameters to a provider.
    ///
    /// Returns a handle carrying the provider-assigned job id.
    pub async fn submit(
        &self,
        provider: &Provider,
        params: &JobParams,
    ) -> std::result::Result<JobHandle, DispatchError> {
        let response = self
            .limiter
            .run(|| self.http.post_job(provider, params))
            .await?;

        info!(job_id = %response.id, provider = %provider.id(), "Job submitted");
        Ok(JobHandle::new(response.id, provider.id().clone()))
    }

    /// Poll a job's status once.
    ///
    /// The provider's raw vocabulary is mapped onto the canonical
    /// [`JobStatus`] set; an unrecognized value is reported as `Unknown`.
    pub async fn check_status(
        &self,
        provider: &Provider,
        job_id: &str,
    ) -> std::result::Result<JobStatus, DispatchError> {
        let response = self
            .limiter
            .run(|| self.http.get_job(provider, job_id))
            .await?;

        let status = JobStatus::from_raw(&response.status);
        if status == JobStatus::Unknown {
            warn!(
                job_id = %job_id,
                provider = %provider.id(),
                raw = %response.status,
                "Unrecognized job status"
            );
        } else {
            debug!(job_id = %job_id, provider = %provider.id(), status = %status, "Job status polled");
        }
        Ok(status)
    }
}
