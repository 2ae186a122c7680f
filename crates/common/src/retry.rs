use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Bounded retry with a linearly growing pause: the wait after attempt `n`
/// is `n * step`. No pause follows the final attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearRetry {
    pub max_attempts: u32,
    pub step: Duration,
}

impl LinearRetry {
    pub const fn new(max_attempts: u32, step: Duration) -> Self {
        Self { max_attempts, step }
    }

    /// Cluster queries: 3 attempts, 5s, 10s between them.
    pub const fn cluster_queries() -> Self {
        Self::new(3, Duration::from_secs(5))
    }

    /// Topic publishes: 3 attempts, 1s, 2s between them.
    pub const fn publish() -> Self {
        Self::new(3, Duration::from_secs(1))
    }

    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.step.saturating_mul(attempt)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    pub attempts: u32,
    pub result: Result<T, E>,
}

impl<T, E> RetryOutcome<T, E> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub async fn retry_linear<F, Fut, T, E>(policy: &LinearRetry, mut f: F) -> RetryOutcome<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max = policy.attempts();
    let mut attempt = 1;

    loop {
        match f(attempt).await {
            Ok(v) => {
                return RetryOutcome {
                    attempts: attempt,
                    result: Ok(v),
                }
            }
            Err(e) if attempt >= max => {
                return RetryOutcome {
                    attempts: attempt,
                    result: Err(e),
                }
            }
            Err(e) => {
                let delay = policy.delay_after(attempt);
                tracing::warn!(
                    attempt,
                    max_attempts = max,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "attempt failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> LinearRetry {
        LinearRetry::new(3, Duration::from_millis(1))
    }

    #[test]
    fn delays_grow_linearly() {
        let policy = LinearRetry::cluster_queries();
        assert_eq!(policy.delay_after(1), Duration::from_secs(5));
        assert_eq!(policy.delay_after(2), Duration::from_secs(10));
        assert_eq!(LinearRetry::publish().delay_after(2), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn succeeds_on_first_try() {
        let out = retry_linear(&fast(), |_| async { Ok::<_, &str>(42) }).await;
        assert_eq!(out.attempts, 1);
        assert_eq!(out.result.unwrap(), 42);
    }

    #[tokio::test]
    async fn succeeds_on_third_attempt() {
        let counter = AtomicU32::new(0);
        let out: RetryOutcome<u32, &str> = retry_linear(&fast(), |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err("not yet")
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(out.attempts, 3);
        assert_eq!(out.result.unwrap(), 3);
    }

    #[tokio::test]
    async fn stops_after_max_attempts() {
        let counter = AtomicU32::new(0);
        let out: RetryOutcome<(), String> = retry_linear(&fast(), |attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Err(format!("fail #{attempt}")) }
        })
        .await;

        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(out.attempts, 3);
        assert_eq!(out.result.unwrap_err(), "fail #3");
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let policy = LinearRetry::new(0, Duration::from_millis(1));
        let out = retry_linear(&policy, |_| async { Err::<(), _>("nope") }).await;
        assert_eq!(out.attempts, 1);
        assert!(!out.is_ok());
    }
}
