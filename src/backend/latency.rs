use std::time::Duration;

/// Fixed-duration stand-in for a network round trip.
///
/// The delay always succeeds; there is no timeout or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay. Actions still suspend once so overlapping calls interleave.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn round_trip(&self) {
        if self.delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}
