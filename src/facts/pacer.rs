use core::time::Duration;
use tokio::time::sleep;

/// Fixed pacing between packages.
///
/// The analysis loop is fully sequential; the only rate control is a fixed
/// sleep before each package. [`Pacer::pace`] sleeps the full delay on every
/// call, no matter how long the surrounding work took.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Create a pacer with a fixed delay between consecutive calls.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Sleep the fixed delay.
    pub async fn pace(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}
