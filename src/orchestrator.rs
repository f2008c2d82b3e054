// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Public façade over registry, optimizer, and dispatch.
//!
//! The orchestrator resolves a framework/provider alias to a registry
//! entry, applies parameter optimization, and exposes submit/poll
//! operations with typed errors. It holds no per-job state: `launch`
//! returns a handle immediately and `check_job` is idempotently callable
//! any number of times; polling cadence belongs to the caller.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Framework, FrameworkCatalog};
use crate::config::Config;
use crate::dispatch::{DispatchClient, DispatchHttpClient, ReqwestDispatchClient};
use crate::error::{OrchestratorError, Result};
use crate::job::{JobHandle, JobParams, JobStatus};
use crate::limiter::RateLimiter;
use crate::optimizer;
use crate::provider::{Provider, ProviderInfo, ProviderRegistry};

/// Job orchestrator.
pub struct JobOrchestrator<C: DispatchHttpClient = ReqwestDispatchClient> {
    registry: ProviderRegistry,
    catalog: FrameworkCatalog,
    dispatch: DispatchClient<C>,
}

impl JobOrchestrator<ReqwestDispatchClient> {
    /// Build the production orchestrator from configuration.
    ///
    /// The rate limiter is constructed here, once, and shared with the
    /// dispatch client by handle.
    pub fn from_config(config: &Config) -> Result<Self> {
        let limiter = Arc::new(RateLimiter::new(config.dispatch.max_in_flight));
        let dispatch = DispatchClient::from_config(&config.dispatch, limiter)?;

        Ok(Self {
            registry: ProviderRegistry::from_config(&config.providers),
            catalog: FrameworkCatalog::default(),
            dispatch,
        })
    }
}

impl<C: DispatchHttpClient> JobOrchestrator<C> {
    /// Assemble an orchestrator from parts (for testing or embedding).
    pub fn new(
        registry: ProviderRegistry,
        catalog: FrameworkCatalog,
        dispatch: DispatchClient<C>,
    ) -> Self {
        Self {
            registry,
            catalog,
            dispatch,
        }
    }

    /// Read-only registry snapshot, alphabetical by name.
    pub fn list_providers(&self) -> Vec<ProviderInfo> {
        self.registry.list()
    }

    /// Static framework catalog, independent of provider reachability.
    pub fn list_frameworks(&self) -> &[Framework] {
        self.catalog.list()
    }

    /// Submit a job to the named framework/provider.
    ///
    /// Resolution and credential checks happen before any network call;
    /// dispatch errors are wrapped preserving their kind.
    pub async fn launch(
        &self,
        name: &str,
        params: &JobParams,
    ) -> std::result::Result<JobHandle, OrchestratorError> {
        let provider = self.resolve_with_credential(name)?;
        let optimized = optimizer::optimize(params);

        debug!(provider = %provider.id(), "Launching job");
        self.dispatch
            .submit(provider, &optimized)
            .await
            .map_err(OrchestratorError::Dispatch)
    }

    /// Poll a previously launched job once.
    pub async fn check_job(
        &self,
        job_id: &str,
        name: &str,
    ) -> std::result::Result<JobStatus, OrchestratorError> {
        let provider = self.resolve_with_credential(name)?;

        self.dispatch
            .check_status(provider, job_id)
            .await
            .map_err(OrchestratorError::Dispatch)
    }

    /// Preview parameter optimization without submitting.
    pub fn optimize_existing(&self, job_id: &str, name: &str, params: &JobParams) -> JobParams {
        debug!(job_id = %job_id, provider = %name, "Optimizing job parameters");
        optimizer::optimize(params)
    }

    fn resolve_with_credential(
        &self,
        name: &str,
    ) -> std::result::Result<&Provider, OrchestratorError> {
        let provider = self.registry.resolve(name)?;
        if provider.credential().is_none() {
            return Err(OrchestratorError::MissingCredential(
                provider.id().to_string(),
            ));
        }
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::MockDispatchClient;
    use crate::error::DispatchError;
    use crate::provider::ProviderId;
    use crate::test_utils::InstrumentedDispatchClient;
    use secrecy::SecretString;
    use serde_json::json;
    use std::time::Duration;

    fn credentialed(id: ProviderId) -> Provider {
        Provider::new(
            id,
            "https://example.com/api/",
            Some(SecretString::from("token".to_string())),
        )
    }

    fn orchestrator<C: DispatchHttpClient>(
        providers: Vec<Provider>,
        http: C,
    ) -> JobOrchestrator<C> {
        let mut registry = ProviderRegistry::new();
        for provider in providers {
            registry.register(provider);
        }
        let dispatch = DispatchClient::with_client(http, Arc::new(RateLimiter::new(5)));
        JobOrchestrator::new(registry, FrameworkCatalog::default(), dispatch)
    }

    fn params() -> JobParams {
        json!({"shots": 100}).as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_launch_unknown_provider_no_network_call() {
        let hub = orchestrator(vec![], MockDispatchClient::default());

        let err = hub.launch("unknown-provider", &params()).await.unwrap_err();
        assert!(matches!(err, OrchestratorError::UnknownProvider(_)));
        assert_eq!(hub.dispatch.transport().total_calls(), 0);
    }

    #[tokio::test]
    async fn test_launch_missing_credential_no_network_call() {
        let hub = orchestrator(
            vec![Provider::new(ProviderId::Ibm, "https://example.com/", None)],
            MockDispatchClient::default(),
        );

        let err = hub.launch("ibm", &params()).await.unwrap_err();
        assert!(matches!(err, OrchestratorError::MissingCredential(name) if name == "IBM"));
        assert_eq!(hub.dispatch.transport().total_calls(), 0);
    }

    #[tokio::test]
    async fn test_launch_returns_handle() {
        let hub = orchestrator(
            vec![credentialed(ProviderId::Ibm)],
            MockDispatchClient::default(),
        );

        let handle = hub.launch("ibm", &params()).await.unwrap();
        assert_eq!(handle.id(), "mock-job-id");
        assert_eq!(handle.provider(), &ProviderId::Ibm);
    }

    #[tokio::test]
    async fn test_launch_submits_optimized_params() {
        let http = InstrumentedDispatchClient::new(Duration::ZERO);
        let hub = orchestrator(vec![credentialed(ProviderId::Google)], http);

        hub.launch("google", &params()).await.unwrap();

        let body = hub.dispatch.transport().last_submitted_body().unwrap();
        assert_eq!(body["shots"], json!(200));
        assert_eq!(body["optimizationLevel"], json!(3));
    }

    #[tokio::test]
    async fn test_launch_wraps_dispatch_error_preserving_kind() {
        let hub = orchestrator(
            vec![credentialed(ProviderId::Ibm)],
            MockDispatchClient::failing(DispatchError::ProviderUnreachable("timeout".into())),
        );

        let err = hub.launch("ibm", &params()).await.unwrap_err();
        assert!(matches!(
            err,
            OrchestratorError::Dispatch(DispatchError::ProviderUnreachable(_))
        ));
    }

    #[tokio::test]
    async fn test_check_job_round_trips_submitted_id() {
        let http = InstrumentedDispatchClient::new(Duration::ZERO);
        let hub = orchestrator(vec![credentialed(ProviderId::Amazon)], http);

        let handle = hub.launch("amazon", &params()).await.unwrap();
        let status = hub.check_job(handle.id(), "amazon").await.unwrap();
        assert_eq!(status, JobStatus::Running);

        // An id the transport never issued is a bad response, not a status.
        let err = hub.check_job("never-issued", "amazon").await.unwrap_err();
        assert!(matches!(
            err,
            OrchestratorError::Dispatch(DispatchError::BadResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_check_job_unrecognized_status_is_unknown() {
        let hub = orchestrator(
            vec![credentialed(ProviderId::Ibm)],
            MockDispatchClient::with_raw_status("QUEUED_RETRY"),
        );

        let status = hub.check_job("j-1", "ibm").await.unwrap();
        assert_eq!(status, JobStatus::Unknown);
    }

    #[tokio::test]
    async fn test_check_job_requires_known_provider() {
        let hub = orchestrator(vec![], MockDispatchClient::default());

        let err = hub.check_job("j-1", "nope").await.unwrap_err();
        assert!(matches!(err, OrchestratorError::UnknownProvider(_)));
    }

    #[test]
    fn test_list_providers_sorted() {
        let hub = orchestrator(
            vec![
                credentialed(ProviderId::Microsoft),
                credentialed(ProviderId::Amazon),
                credentialed(ProviderId::Ibm),
            ],
            MockDispatchClient::default(),
        );

        let names: Vec<String> = hub.list_providers().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["AMAZON", "IBM", "MICROSOFT"]);
    }

    #[test]
    fn test_list_frameworks_static() {
        let hub = orchestrator(vec![], MockDispatchClient::default());
        let frameworks = hub.list_frameworks();
        assert_eq!(frameworks.len(), 4);
        assert_eq!(frameworks[0].name, "Qiskit");
    }

    #[test]
    fn test_optimize_existing_previews_without_network() {
        let hub = orchestrator(vec![], MockDispatchClient::default());

        let optimized = hub.optimize_existing("j-1", "ibm", &params());
        assert_eq!(optimized["shots"], json!(200));
        assert_eq!(optimized["optimizationLevel"], json!(3));
    }

    #[tokio::test]
    async fn test_framework_name_does_not_resolve_as_provider() {
        // The catalog lists "Qiskit" for discovery, but launching goes by
        // provider name; the uppercase alias of a framework name is not a
        // registered provider.
        let hub = orchestrator(
            vec![credentialed(ProviderId::Ibm)],
            MockDispatchClient::default(),
        );

        let err = hub.launch("qiskit", &params()).await.unwrap_err();
        assert!(matches!(err, OrchestratorError::UnknownProvider(name) if name == "QISKIT"));
    }
}
