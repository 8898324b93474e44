use crate::config::RetryConfig;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Run one generation attempt until it yields a story or attempts run out.
///
/// An attempt is a model call followed by story parsing, so a model that
/// exits cleanly but answers with prose is retried like a failed call.
/// Delays grow as `backoff_base_ms * 2^n` plus up to one base of jitter.
pub async fn retry_with_backoff<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempts = 0;
    let mut backoff_ms = config.backoff_base_ms;

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if attempts >= config.max_attempts => {
                warn!("Giving up on generation after {} attempts: {}", attempts, e);
                return Err(e);
            }
            Err(e) => {
                let jitter = rand::random::<u64>() % config.backoff_base_ms.max(1);
                let delay = Duration::from_millis(backoff_ms + jitter);

                warn!(
                    "Generation attempt {}/{} failed: {}. Retrying in {:?}...",
                    attempts, config.max_attempts, e, delay
                );

                sleep(delay).await;
                backoff_ms = backoff_ms.saturating_mul(2);
            }
        }
    }
}
