//! Bounded retry with fixed backoff

use super::{FetchExhausted, TransientFailure};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Sequential retry policy: fixed spacing, no jitter, no growth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first (0 is treated as 1)
    pub max_attempts: u32,
    /// Pause between consecutive attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(600),
        }
    }
}

/// Run `operation` until it succeeds or the policy's attempts are used up.
///
/// The operation receives the 1-based attempt number. Attempts never overlap;
/// the backoff sleep suspends the task and is skipped after the final attempt.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T, FetchExhausted>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, TransientFailure>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(last) if attempt >= max_attempts => {
                tracing::error!(attempts = attempt, error = %last, "Provider fetch exhausted");
                return Err(FetchExhausted {
                    attempts: attempt,
                    last,
                });
            }
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    backoff_ms = policy.backoff.as_millis() as u64,
                    error = %e,
                    "Provider fetch attempt failed, retrying"
                );
                sleep(policy.backoff).await;
                attempt += 1;
            }
        }
    }
}
