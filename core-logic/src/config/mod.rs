use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Randomized pacing delays between network-facing steps and between
/// identities. A policy knob against abuse detection, not correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    pub min_step_delay_ms: u64,
    pub max_step_delay_ms: u64,
    pub min_cycle_delay_ms: u64,
    pub max_cycle_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_step_delay_ms: 1_000,
            max_step_delay_ms: 2_000,
            min_cycle_delay_ms: 5_000,
            max_cycle_delay_ms: 10_000,
        }
    }
}

impl PacingConfig {
    /// No delays at all. Used by tests.
    pub fn none() -> Self {
        Self {
            min_step_delay_ms: 0,
            max_step_delay_ms: 0,
            min_cycle_delay_ms: 0,
            max_cycle_delay_ms: 0,
        }
    }

    pub fn step_delay(&self) -> Duration {
        Self::pick(self.min_step_delay_ms, self.max_step_delay_ms)
    }

    pub fn cycle_delay(&self) -> Duration {
        Self::pick(self.min_cycle_delay_ms, self.max_cycle_delay_ms)
    }

    fn pick(min_ms: u64, max_ms: u64) -> Duration {
        if max_ms == 0 {
            return Duration::ZERO;
        }
        let ms = if min_ms >= max_ms {
            max_ms
        } else {
            rand::thread_rng().gen_range(min_ms..=max_ms)
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}
