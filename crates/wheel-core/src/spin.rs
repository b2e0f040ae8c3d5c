//! The spin state machine.
//!
//! A spin picks its winner up front, when it starts, and then waits for the
//! renderer to announce that the animation has finished. The engine never
//! measures time itself; the only time-based transition is the optional
//! stalled-spin check, which the caller drives.
//!
//! ```text
//! Idle ──spin()──▶ Spinning ──complete()──▶ Resolved
//!   ▲                 │                        │
//!   └────cancel()─────┘◀────────reset()────────┘
//! ```

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::choice::ChoiceList;
use crate::palette::Color;

/// Animation speed presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinSpeed {
    /// Half speed.
    Slow,
    /// The base speed.
    #[default]
    Normal,
    /// Double speed.
    Fast,
}

impl SpinSpeed {
    /// Every preset, slowest first.
    pub const ALL: [SpinSpeed; 3] = [SpinSpeed::Slow, SpinSpeed::Normal, SpinSpeed::Fast];

    /// Speed multiplier: 0.5, 1 or 2.
    pub fn multiplier(self) -> f64 {
        match self {
            SpinSpeed::Slow => 0.5,
            SpinSpeed::Normal => 1.0,
            SpinSpeed::Fast => 2.0,
        }
    }

    /// Match a multiplier to its preset.
    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| (s.multiplier() - value).abs() < f64::EPSILON)
    }

    /// Parse a preset name (`slow`, `normal`, `fast`) or a multiplier.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "slow" => Some(SpinSpeed::Slow),
            "normal" => Some(SpinSpeed::Normal),
            "fast" => Some(SpinSpeed::Fast),
            other => other.parse().ok().and_then(Self::from_multiplier),
        }
    }

    /// Animation length for this speed: `base / multiplier`.
    pub fn duration(self, base: Duration) -> Duration {
        base.div_f64(self.multiplier())
    }
}

impl fmt::Display for SpinSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinSpeed::Slow => write!(f, "Slow"),
            SpinSpeed::Normal => write!(f, "Normal"),
            SpinSpeed::Fast => write!(f, "Fast"),
        }
    }
}

/// Where the engine is in a spin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinState {
    /// Ready to spin.
    #[default]
    Idle,
    /// Waiting for the renderer to finish the animation.
    Spinning {
        /// Index fixed when the spin began.
        winner_index: usize,
        /// When the spin began.
        started_at: DateTime<Utc>,
    },
    /// The last spin finished and its winner is on display.
    Resolved {
        /// Index of the winning option.
        winner_index: usize,
    },
}

impl SpinState {
    /// Whether a spin is in flight.
    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinState::Spinning { .. })
    }
}

/// Everything the renderer needs to animate one spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinRequest {
    /// Option labels in wheel order.
    pub options: Vec<String>,
    /// One color per option.
    pub colors: Vec<Color>,
    /// Where the wheel must stop.
    pub winner_index: usize,
    /// How long the animation should take.
    pub duration: Duration,
}

/// Picks winners and tracks spin state and count.
#[derive(Debug)]
pub struct SpinEngine {
    state: SpinState,
    spin_count: u64,
    rng: StdRng,
}

impl SpinEngine {
    /// Create an engine, seeded for reproducibility when `seed` is set.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: SpinState::Idle,
            spin_count: 0,
            rng,
        }
    }

    /// Current state.
    pub fn state(&self) -> SpinState {
        self.state
    }

    /// Whether a spin is in flight.
    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Spins started this session, including restored ones.
    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    /// Overwrite the spin count (used when restoring a session).
    pub fn set_spin_count(&mut self, count: u64) {
        self.spin_count = count;
    }

    /// Start a spin over `options`.
    ///
    /// Returns the chosen index, or `None` when there are fewer than two
    /// options or a spin is already running.
    pub fn start(&mut self, options: &ChoiceList, now: DateTime<Utc>) -> Option<usize> {
        if self.is_spinning() || !options.is_spinnable() {
            return None;
        }
        let winner_index = self.rng.random_range(0..options.len());
        self.spin_count += 1;
        self.state = SpinState::Spinning {
            winner_index,
            started_at: now,
        };
        Some(winner_index)
    }

    /// Handle the animation-complete signal. Returns the winning index, or
    /// `None` if no spin was running.
    pub fn complete(&mut self) -> Option<usize> {
        match self.state {
            SpinState::Spinning { winner_index, .. } => {
                self.state = SpinState::Resolved { winner_index };
                Some(winner_index)
            }
            _ => None,
        }
    }

    /// Abandon a running spin without a result. Returns true if one was running.
    pub fn cancel(&mut self) -> bool {
        if self.is_spinning() {
            self.state = SpinState::Idle;
            true
        } else {
            false
        }
    }

    /// Whether the running spin started more than `timeout` before `now`.
    pub fn is_stalled(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        match self.state {
            SpinState::Spinning { started_at, .. } => now
                .signed_duration_since(started_at)
                .to_std()
                .is_ok_and(|elapsed| elapsed > timeout),
            _ => false,
        }
    }

    /// Show `winner_index` as the result of a spin finished in an earlier
    /// run. A running spin is left alone.
    pub fn resume_resolved(&mut self, winner_index: usize) {
        if !self.is_spinning() {
            self.state = SpinState::Resolved { winner_index };
        }
    }

    /// Return to `Idle` from `Resolved`. A running spin is left alone.
    pub fn reset(&mut self) {
        if !self.is_spinning() {
            self.state = SpinState::Idle;
        }
    }
}
