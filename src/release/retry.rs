//! Fixed-delay retry

use crate::error::ReleaseResult;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Default number of attempts for extraction
pub const DEFAULT_TRIES: u32 = 5;

/// Default delay between failed attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// How often and how patiently to retry a failing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (zero behaves as one)
    pub max_tries: u32,

    /// Pause between a failed attempt and the next one
    pub retry_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_tries: u32, retry_delay: Duration) -> Self {
        Self {
            max_tries,
            retry_delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TRIES, DEFAULT_RETRY_DELAY)
    }
}

/// Final result of a retried operation and how many attempts it took
#[derive(Debug)]
pub struct RetryOutcome<T> {
    pub result: ReleaseResult<T>,
    pub attempts: u32,
}

impl<T> RetryOutcome<T> {
    pub fn into_result(self) -> ReleaseResult<T> {
        self.result
    }
}

/// Run `op` until it succeeds or `policy.max_tries` attempts have failed
///
/// `op` receives the 1-based attempt number. The delay is applied between
/// attempts only, never after the last one. On exhaustion the last error is
/// returned.
pub async fn fixed_delay<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> RetryOutcome<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = ReleaseResult<T>>,
{
    let max_tries = policy.max_tries.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => {
                return RetryOutcome {
                    result: Ok(value),
                    attempts: attempt,
                }
            }
            Err(err) if attempt < max_tries => {
                warn!(
                    attempt,
                    max_tries,
                    error = %err,
                    "Attempt failed, retrying in {:?}",
                    policy.retry_delay
                );
                tokio::time::sleep(policy.retry_delay).await;
                attempt += 1;
            }
            Err(err) => {
                return RetryOutcome {
                    result: Err(err),
                    attempts: attempt,
                }
            }
        }
    }
}
