// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Concurrency ceiling for outbound provider calls.
//!
//! The limiter bounds how many dispatch calls may be in flight at once
//! across all providers combined. Callers beyond the ceiling suspend in
//! FIFO arrival order until a slot frees. One instance is constructed at
//! startup and handed to the dispatch client by `Arc`; there is no
//! process-wide singleton.

use std::future::Future;

use tokio::sync::Semaphore;

/// Counting-semaphore gate around outbound calls.
///
/// A slot is held for exactly the duration of one task body and released
/// on every exit path, including error returns and panics, by permit drop.
/// A caller cancelled while waiting leaves the queue without consuming a
/// slot; a running task is never preempted.
pub struct RateLimiter {
    semaphore: Semaphore,
    max_in_flight: usize,
}

impl RateLimiter {
    /// Create a limiter admitting at most `max_in_flight` concurrent tasks.
    ///
    /// A ceiling of zero admits nothing; [`crate::config::Config::validate`]
    /// rejects it before a limiter is ever built.
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            semaphore: Semaphore::new(max_in_flight),
            max_in_flight,
        }
    }

    /// Run `task` under the concurrency ceiling.
    ///
    /// `task` must perform exactly one outbound call. Errors it returns
    /// propagate unchanged; the slot is freed first either way.
    pub async fn run<F, Fut, T>(&self, task: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        // The semaphore lives as long as the limiter and is never closed.
        let _permit = self
            .semaphore
            .acquire()
            .await
            .expect("rate limiter semaphore closed");
        task().await
    }

    /// The configured ceiling.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Currently free slots.
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}
