//! Bounded retry with exponential backoff.
//!
//! The sleep function is injected so the policy runs unchanged on browser
//! timers and in native tests.

use std::future::Future;

use crate::config::retry::{BASE_DELAY_MS, MAX_ATTEMPTS};
use crate::core::error::FetchError;

/// Errors that know whether a retry could help.
pub trait Transient {
    fn is_transient(&self) -> bool;
}

impl Transient for FetchError {
    fn is_transient(&self) -> bool {
        FetchError::is_transient(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    pub max_attempts: u32,
    pub base_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay_ms: BASE_DELAY_MS,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (0-based): `base * 2^retry`.
    pub fn delay_ms(&self, retry: u32) -> u32 {
        self.base_delay_ms.saturating_mul(1u32 << retry.min(16))
    }
}

/// Run `op` until it succeeds, fails permanently, or attempts run out.
///
/// Returns the last error when giving up.
pub async fn retry_with_backoff<T, E, Op, Fut, Sleep, SleepFut>(
    policy: RetryPolicy,
    mut op: Op,
    mut sleep: Sleep,
) -> Result<T, E>
where
    E: Transient + std::fmt::Display,
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    Sleep: FnMut(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let attempts = policy.max_attempts.max(1);
    let mut retry = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && retry + 1 < attempts => {
                let delay = policy.delay_ms(retry);
                log::debug!("attempt {} failed ({e}); retrying in {delay}ms", retry + 1);
                sleep(delay).await;
                retry += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
