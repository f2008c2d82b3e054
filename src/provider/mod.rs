// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Provider identity and registration.
//!
//! A provider is a remote execution backend reachable over HTTP with its
//! own endpoint and credential. The well-known providers form a closed
//! enumeration; anything else is carried by the `Custom` fallback so
//! stringly-typed lookups stay out of the business logic.

pub mod registry;

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use registry::ProviderRegistry;

/// Identity of a registered provider.
///
/// Parsing is case-insensitive via uppercase normalization, aliasing
/// "ibm" and "IBM" to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderId {
    Ibm,
    Google,
    Microsoft,
    Amazon,
    /// Any other provider, keyed by its normalized (uppercase) name
    Custom(String),
}

impl ProviderId {
    /// Parse a provider or framework name.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "IBM" => ProviderId::Ibm,
            "GOOGLE" => ProviderId::Google,
            "MICROSOFT" => ProviderId::Microsoft,
            "AMAZON" => ProviderId::Amazon,
            other => ProviderId::Custom(other.to_string()),
        }
    }

    /// Normalized name.
    pub fn as_str(&self) -> &str {
        match self {
            ProviderId::Ibm => "IBM",
            ProviderId::Google => "GOOGLE",
            ProviderId::Microsoft => "MICROSOFT",
            ProviderId::Amazon => "AMAZON",
            ProviderId::Custom(name) => name,
        }
    }

    /// Built-in endpoint for the well-known providers.
    pub fn default_endpoint(&self) -> Option<&'static str> {
        match self {
            ProviderId::Ibm => Some("https://quantum-computing.ibm.com/api/"),
            ProviderId::Google => Some("https://quantumai.google.com/api/"),
            ProviderId::Microsoft => Some("https://azure.microsoft.com/api/"),
            ProviderId::Amazon => Some("https://braket.aws.amazon.com/api/"),
            ProviderId::Custom(_) => None,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ProviderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ProviderId::parse(&name))
    }
}

/// A registered remote execution provider.
///
/// Immutable after registration; lifetime = process lifetime.
#[derive(Clone)]
pub struct Provider {
    id: ProviderId,
    endpoint: String,
    credential: Option<SecretString>,
}

impl Provider {
    /// Create a provider entry. The endpoint's trailing slash, if any, is
    /// normalized away so URL joining is uniform.
    pub fn new(
        id: ProviderId,
        endpoint: impl Into<String>,
        credential: Option<SecretString>,
    ) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            id,
            endpoint,
            credential,
        }
    }

    pub fn id(&self) -> &ProviderId {
        &self.id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Opaque bearer credential, if one is configured.
    pub fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }

    /// URL of the provider's job collection.
    pub fn jobs_url(&self) -> String {
        format!("{}/jobs", self.endpoint)
    }

    /// URL of one job resource.
    pub fn job_url(&self, job_id: &str) -> String {
        format!("{}/jobs/{}", self.endpoint, job_id)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("id", &self.id)
            .field("endpoint", &self.endpoint)
            .field(
                "credential",
                &self.credential.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Discovery view of one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub name: String,
    pub endpoint: String,
}

impl From<&Provider> for ProviderInfo {
    fn from(provider: &Provider) -> Self {
        Self {
            name: provider.id().to_string(),
            endpoint: provider.endpoint().to_string(),
        }
    }
}
