// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Static framework catalog for discovery.
//!
//! Each framework entry names the provider it dispatches to. The catalog
//! is seeded at startup and read-only; listing it does not depend on any
//! provider being reachable.
//!
//! Framework and provider names are a 1:1 convenience here (launching
//! "qiskit" does not resolve; launching "ibm" does). A multi-framework-
//! per-provider deployment would need a separate resolution table.

use serde::Serialize;

use crate::provider::ProviderId;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Framework {
    pub name: String,
    pub description: String,
    pub provider: ProviderId,
}

impl Framework {
    fn new(name: &str, description: &str, provider: ProviderId) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            provider,
        }
    }
}

/// Read-only list of available frameworks.
pub struct FrameworkCatalog {
    frameworks: Vec<Framework>,
}

impl FrameworkCatalog {
    pub fn new(frameworks: Vec<Framework>) -> Self {
        Self { frameworks }
    }

    /// The seeded entries, verbatim.
    pub fn list(&self) -> &[Framework] {
        &self.frameworks
    }

    /// Case-insensitive lookup by framework name.
    pub fn find(&self, name: &str) -> Option<&Framework> {
        self.frameworks
            .iter()
            .find(|framework| framework.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}

impl Default for FrameworkCatalog {
    fn default() -> Self {
        Self::new(vec![
            Framework::new(
                "Qiskit",
                "IBM Quantum Computing Framework",
                ProviderId::Ibm,
            ),
            Framework::new(
                "Cirq",
                "Google Quantum Computing Framework",
                ProviderId::Google,
            ),
            Framework::new(
                "Q#",
                "Microsoft Quantum Computing Framework",
                ProviderId::Microsoft,
            ),
            Framework::new(
                "Braket",
                "Amazon Quantum Computing Framework",
                ProviderId::Amazon,
            ),
        ])
    }
}
