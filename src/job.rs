// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Job model: parameters, handles, and the canonical status vocabulary.

use serde::{Deserialize, Serialize};

use crate::provider::ProviderId;

/// Backend-specific job parameters, opaque to the hub.
///
/// Serialized verbatim as the submit body.
pub type JobParams = serde_json::Map<String, serde_json::Value>;

/// Canonical job status as observed through polling.
///
/// Providers evolve their raw status vocabularies independently of this
/// hub, so classification is fail-open: anything unrecognized maps to
/// [`JobStatus::Unknown`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Accepted by the provider, not yet running
    Submitted,
    /// Executing on the provider
    Running,
    /// Finished successfully (terminal)
    Completed,
    /// Finished unsuccessfully (terminal)
    Failed,
    /// Raw status not in the recognized vocabulary
    Unknown,
}

impl JobStatus {
    /// Map a provider's raw status string onto the canonical vocabulary.
    ///
    /// Matching is case-insensitive. The recognized spellings cover the
    /// IBM, IQM, and Braket vocabularies; everything else is `Unknown`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "SUBMITTED" | "QUEUED" | "PENDING" | "VALIDATING" | "ACCEPTED" => JobStatus::Submitted,
            "RUNNING" | "IN_PROGRESS" | "EXECUTING" => JobStatus::Running,
            "COMPLETED" | "DONE" | "READY" | "SUCCEEDED" => JobStatus::Completed,
            "FAILED" | "ERROR" | "CANCELLED" | "CANCELED" => JobStatus::Failed,
            _ => JobStatus::Unknown,
        }
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Submitted => write!(f, "submitted"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Opaque reference to a submitted job.
///
/// The id is assigned exactly once, from the provider's submit response,
/// and is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobHandle {
    id: String,
    provider: ProviderId,
}

impl JobHandle {
    pub(crate) fn new(id: String, provider: ProviderId) -> Self {
        Self { id, provider }
    }

    /// Provider-assigned job identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Provider the job was submitted to.
    pub fn provider(&self) -> &ProviderId {
        &self.provider
    }
}

/// Caller-side bookkeeping for one submitted job.
///
/// The hub itself is stateless between calls; this type implements the
/// status bookkeeping rules for callers that cache poll results.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    handle: JobHandle,
    params: JobParams,
    status: JobStatus,
}

impl Job {
    /// Track a freshly submitted job.
    pub fn new(handle: JobHandle, params: JobParams) -> Self {
        Self {
            handle,
            params,
            status: JobStatus::Submitted,
        }
    }

    pub fn handle(&self) -> &JobHandle {
        &self.handle
    }

    pub fn params(&self) -> &JobParams {
        &self.params
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// Record a polled status and return the effective one.
    ///
    /// Terminal states are never overwritten, and an `Unknown` observation
    /// is non-authoritative: it never replaces a previously observed
    /// status.
    pub fn record(&mut self, observed: JobStatus) -> JobStatus {
        if self.status.is_terminal() || observed == JobStatus::Unknown {
            return self.status;
        }
        self.status = observed;
        self.status
    }
}
