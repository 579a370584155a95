//! Retry scheduling for transient HTTP errors.
//!
//! Transient conditions (429, network failures) are retried after a delay;
//! everything else (404, other non-2xx statuses, parse failures) is
//! propagated immediately. The default configuration sets `max_retries = 0`,
//! so the catalog load stays single-shot unless retries are opted in.

use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;

/// Picks the delay before retry number `attempt`, or `None` if `err` is not
/// worth retrying.
///
/// The schedule is exponential, `backoff_base_secs * 2^attempt`. For a 429
/// the server's `Retry-After` value acts as a floor on that schedule: when
/// the backend names a longer wait than we would have picked, we honor it.
///
/// Non-retriable errors:
/// - [`ClientError::NotFound`] — 404; retrying would return the same result.
/// - [`ClientError::UnexpectedStatus`] — non-retriable HTTP status.
/// - [`ClientError::Deserialize`] — response body does not parse; retrying won't fix it.
/// - [`ClientError::InvalidBaseUrl`] — configuration issue; retrying won't fix it.
fn retry_delay(err: &ClientError, attempt: u32, backoff_base_secs: u64) -> Option<Duration> {
    // Cap the shift so large attempt counts saturate instead of overflowing.
    let scheduled = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
    match err {
        ClientError::RateLimited { retry_after_secs } => {
            Some(Duration::from_secs(scheduled.max(*retry_after_secs)))
        }
        ClientError::Http(_) => Some(Duration::from_secs(scheduled)),
        ClientError::NotFound { .. }
        | ClientError::UnexpectedStatus { .. }
        | ClientError::Deserialize { .. }
        | ClientError::InvalidBaseUrl { .. } => None,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries`
/// additional attempts after the first try.
///
/// Delays between attempts come from [`retry_delay`]; non-retriable errors
/// and the final failed attempt are returned without sleeping.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        let delay = match retry_delay(&err, attempt, backoff_base_secs) {
            Some(delay) if attempt < max_retries => delay,
            _ => return Err(err),
        };
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs = delay.as_secs(),
            error = %err,
            "transient storefront error, retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
