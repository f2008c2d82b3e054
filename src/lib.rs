// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! LaunchHub: rate-limited multi-provider job dispatch.
//!
//! This crate routes abstract computational jobs to heterogeneous remote
//! execution providers over authenticated HTTP, under a process-wide
//! in-flight ceiling, with a two-phase submit/poll lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Job Orchestrator             │
//! ├─────────────┬──────────────┬────────────┤
//! │  Provider   │  Framework   │   Job      │
//! │  Registry   │  Catalog     │ Optimizer  │
//! ├─────────────┴──────────────┴────────────┤
//! │       Dispatch Client (reqwest)         │
//! ├─────────────────────────────────────────┤
//! │     Rate Limiter (tokio semaphore)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`provider`]: Provider identity and registry
//! - [`limiter`]: Outbound concurrency ceiling
//! - [`optimizer`]: Job parameter optimization
//! - [`dispatch`]: Authenticated submit/status calls
//! - [`orchestrator`]: Public façade
//! - [`catalog`]: Framework discovery
//! - [`job`]: Job model and canonical status
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod job;
pub mod limiter;
pub mod optimizer;
pub mod orchestrator;
pub mod provider;

pub use config::Config;
pub use error::{Error, Result};
pub use orchestrator::JobOrchestrator;

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
