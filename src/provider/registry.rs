// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Static provider registry.
//!
//! The registry maps provider names to endpoints and credentials. It is
//! built once at startup from configuration and shared immutably; there
//! is no runtime mutation surface, so lookups take no locks.

use std::collections::HashMap;

use tracing::{info, warn};

use super::{Provider, ProviderId, ProviderInfo};
use crate::config::ProvidersConfig;
use crate::error::OrchestratorError;
use secrecy::SecretString;

/// Name -> provider lookup table.
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, Provider>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Build the registry from configuration.
    ///
    /// Enabled well-known providers fall back to their built-in endpoints;
    /// custom entries must carry an explicit endpoint and are skipped with
    /// a warning otherwise.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let mut registry = Self::new();

        for (id, provider_config) in [
            (ProviderId::Ibm, &config.ibm),
            (ProviderId::Google, &config.google),
            (ProviderId::Microsoft, &config.microsoft),
            (ProviderId::Amazon, &config.amazon),
        ] {
            if !provider_config.enabled {
                continue;
            }
            let endpoint = provider_config
                .endpoint
                .clone()
                .or_else(|| id.default_endpoint().map(str::to_string));
            match endpoint {
                Some(endpoint) => {
                    let credential = provider_config
                        .credential
                        .clone()
                        .map(SecretString::from);
                    registry.register(Provider::new(id, endpoint, credential));
                }
                None => warn!(provider = %id, "Provider enabled without endpoint, skipping"),
            }
        }

        for custom in &config.custom {
            if custom.name.is_empty() || custom.endpoint.is_empty() {
                warn!("Custom provider entry missing name or endpoint, skipping");
                continue;
            }
            let credential = custom.credential.clone().map(SecretString::from);
            registry.register(Provider::new(
                ProviderId::parse(&custom.name),
                custom.endpoint.clone(),
                credential,
            ));
        }

        registry
    }

    /// Register a provider. An existing entry with the same id is replaced.
    pub fn register(&mut self, provider: Provider) {
        info!(provider = %provider.id(), endpoint = %provider.endpoint(), "Registering provider");
        self.providers.insert(provider.id().clone(), provider);
    }

    /// Resolve a provider or framework name.
    pub fn resolve(&self, name: &str) -> Result<&Provider, OrchestratorError> {
        let id = ProviderId::parse(name);
        self.providers
            .get(&id)
            .ok_or_else(|| OrchestratorError::UnknownProvider(id.to_string()))
    }

    /// Check whether a name resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(&ProviderId::parse(name))
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Discovery snapshot, alphabetical by name for determinism.
    pub fn list(&self) -> Vec<ProviderInfo> {
        let mut infos: Vec<ProviderInfo> =
            self.providers.values().map(ProviderInfo::from).collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
