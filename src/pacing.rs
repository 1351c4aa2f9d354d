/*!
 * Request pacing between remote API calls.
 *
 * The remote endpoint enforces rate limits; the walker idles between
 * consecutive requests rather than reacting to limit errors. The `Pacer`
 * trait keeps the delay injectable so tests run without real sleeps.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

/// Waits until the next remote call is permitted
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Block the caller until a request may be sent
    async fn pause(&self);
}

/// Fixed idle delay between consecutive requests, constant per deployment
#[derive(Debug, Clone)]
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    /// Create a pacer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a pacer from a delay in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!("Sleeping {:?} to respect rate limits", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

/// Pacer that never waits, for tests and unthrottled endpoints
#[derive(Debug, Clone, Default)]
pub struct NoDelayPacer;

#[async_trait]
impl Pacer for NoDelayPacer {
    async fn pause(&self) {}
}
