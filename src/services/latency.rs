use std::time::Duration;

/// Artificial-latency decorator for the HTTP boundary.
///
/// The storefront UI expects mood analysis and recommendations to behave
/// like remote inference calls so it can show loading states. The engine
/// itself is synchronous and pure; this delay is applied by the handlers
/// before invoking it, never inside the algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
        }
    }

    pub fn none() -> Self {
        Self::from_millis(0)
    }

    /// Single-shot, non-cancellable sleep; a no-op when configured to zero.
    pub async fn apply(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::none()
    }
}
