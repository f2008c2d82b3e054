// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities for hub tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::dispatch::{DispatchHttpClient, StatusResponse, SubmitResponse};
use crate::error::DispatchError;
use crate::job::JobParams;
use crate::provider::Provider;

/// Instrumented fake transport.
///
/// Tracks the number of simultaneously executing calls and the high-water
/// mark, so tests can observe whether the rate-limiter ceiling held. Every
/// submit is assigned a sequential id and recorded together with its body;
/// status polls succeed only for ids this transport actually issued, which
/// makes submit-then-poll round trips observable.
pub struct InstrumentedDispatchClient {
    delay: Duration,
    raw_status: String,
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
    next_id: AtomicUsize,
    submit_calls: AtomicUsize,
    status_calls: AtomicUsize,
    submitted_ids: Mutex<Vec<String>>,
    submitted_bodies: Mutex<Vec<JobParams>>,
}

impl InstrumentedDispatchClient {
    /// Create a transport that holds each call open for `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            raw_status: "RUNNING".to_string(),
            in_flight: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
            next_id: AtomicUsize::new(0),
            submit_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            submitted_ids: Mutex::new(Vec::new()),
            submitted_bodies: Mutex::new(Vec::new()),
        }
    }

    /// Same, but status polls answer with the given raw status string.
    pub fn with_raw_status(delay: Duration, raw_status: &str) -> Self {
        Self {
            raw_status: raw_status.to_string(),
            ..Self::new(delay)
        }
    }

    /// Highest number of calls observed executing at once.
    pub fn max_observed_in_flight(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
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

    /// Ids issued by this transport, in submission order.
    pub fn submitted_ids(&self) -> Vec<String> {
        self.submitted_ids.lock().unwrap().clone()
    }

    /// Body of the most recent submit, if any.
    pub fn last_submitted_body(&self) -> Option<JobParams> {
        self.submitted_bodies.lock().unwrap().last().cloned()
    }

    async fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DispatchHttpClient for InstrumentedDispatchClient {
    async fn post_job(
        &self,
        _provider: &Provider,
        body: &JobParams,
    ) -> Result<SubmitResponse, DispatchError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.enter().await;

        let id = format!("job-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.submitted_ids.lock().unwrap().push(id.clone());
        self.submitted_bodies.lock().unwrap().push(body.clone());

        self.exit();
        Ok(SubmitResponse {
            id,
            status: Some("QUEUED".to_string()),
        })
    }

    async fn get_job(
        &self,
        _provider: &Provider,
        job_id: &str,
    ) -> Result<StatusResponse, DispatchError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.enter().await;

        let known = self.submitted_ids.lock().unwrap().iter().any(|id| id == job_id);

        self.exit();
        if known {
            Ok(StatusResponse {
                status: self.raw_status.clone(),
            })
        } else {
            Err(DispatchError::BadResponse(format!(
                "unknown job id: {job_id}"
            )))
        }
    }
}
