//! Configuration for a decision session.

use std::time::Duration;

/// Base wheel animation length at normal speed.
pub const BASE_SPIN_DURATION: Duration = Duration::from_millis(800);

/// How long the celebration overlay stays up after a win.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(5);

/// Configuration for a decision session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible spins. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Animation length at normal speed; scaled inversely by the speed multiplier.
    pub base_spin_duration: Duration,
    /// Lifetime of the celebration effect.
    pub celebration_duration: Duration,
    /// Abandon a spin whose completion signal has not arrived within this time.
    pub spin_timeout: Option<Duration>,
    /// Link attached to shared results.
    pub share_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            base_spin_duration: BASE_SPIN_DURATION,
            celebration_duration: CELEBRATION_DURATION,
            spin_timeout: None,
            share_url: String::new(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the base animation duration.
    pub fn with_base_spin_duration(mut self, duration: Duration) -> Self {
        self.base_spin_duration = duration;
        self
    }

    /// Set the celebration duration.
    pub fn with_celebration_duration(mut self, duration: Duration) -> Self {
        self.celebration_duration = duration;
        self
    }

    /// Set the link attached to shared results.
    pub fn with_share_url(mut self, url: impl Into<String>) -> Self {
        self.share_url = url.into();
        self
    }

    /// Enable the stalled-spin timeout.
    pub fn with_spin_timeout(mut self, timeout: Duration) -> Self {
        self.spin_timeout = Some(timeout);
        self
    }
}
