// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Backend-agnostic job parameter optimization.
//!
//! Applied uniformly to every submission before dispatch; callers can also
//! preview it through the orchestrator without submitting. Pure and
//! deterministic: no I/O, input never mutated.

use serde_json::Value;

use crate::job::JobParams;

/// Top of the 0-3 optimization tier range shared by the provider APIs.
pub const MAX_OPTIMIZATION_LEVEL: u64 = 3;

/// Derive optimized parameters from raw job parameters.
///
/// A numeric `shots` repetition count is doubled; `optimizationLevel` is
/// forced to [`MAX_OPTIMIZATION_LEVEL`]. Everything else passes through
/// unchanged, and no field other than `optimizationLevel` is fabricated.
pub fn optimize(params: &JobParams) -> JobParams {
    let mut optimized = params.clone();

    let doubled = optimized.get("shots").and_then(double_number);
    if let Some(doubled) = doubled {
        optimized.insert("shots".to_string(), doubled);
    }
    optimized.insert(
        "optimizationLevel".to_string(),
        Value::from(MAX_OPTIMIZATION_LEVEL),
    );

    optimized
}

/// Double a JSON number, preserving its integer/float flavor.
///
/// Non-numeric values yield `None` and are left untouched by the caller.
fn double_number(value: &Value) -> Option<Value> {
    if let Some(n) = value.as_u64() {
        Some(Value::from(n.saturating_mul(2)))
    } else if let Some(n) = value.as_i64() {
        Some(Value::from(n.saturating_mul(2)))
    } else if let Some(n) = value.as_f64() {
        serde_json::Number::from_f64(n * 2.0).map(Value::Number)
    } else {
        None
    }
}
