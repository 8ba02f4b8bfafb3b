use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for connection attempts.
///
/// The first retry waits `base_delay`, each subsequent retry doubles the
/// wait up to `max_delay`. Jitter shrinks each wait to a random 50-100%
/// of its nominal value so restarting replicas don't reconnect in lockstep.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    fn delay_for(&self, retry: u32) -> Duration {
        let nominal = self
            .base_delay
            .saturating_mul(1u32 << retry.min(16))
            .min(self.max_delay);

        if self.use_jitter {
            jittered(nominal)
        } else {
            nominal
        }
    }
}

/// Run `operation`, retrying per `config` on failure.
///
/// Returns the error of the final attempt once retries are exhausted;
/// the caller decides whether that is fatal.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retries = 0;

    loop {
        let err = match operation().await {
            Ok(value) => {
                if retries > 0 {
                    debug!(retries, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if retries >= config.max_retries {
            warn!(
                attempts = retries + 1,
                "Operation failed, retries exhausted: {}", err
            );
            return Err(err);
        }

        let delay = config.delay_for(retries);
        retries += 1;
        debug!(
            retry = retries,
            max = config.max_retries,
            delay_ms = delay.as_millis() as u64,
            "Operation failed, retrying: {}",
            err
        );
        tokio::time::sleep(delay).await;
    }
}

/// Retry with the default policy (3 retries, 100ms base delay).
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

// Scale to 50-100% of the nominal delay. A hashed timestamp is enough
// randomness here; pulling in a rand dependency for this is not worth it.
fn jittered(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = RandomState::new().hash_one(std::time::Instant::now()) % 50 + 50;
    delay.mul_f64(percent as f64 / 100.0)
}
