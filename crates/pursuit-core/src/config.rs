//! Engine configuration.
//!
//! The two movement tasks run on independent wall-clock periods; nothing in
//! the engine synchronizes them.  All intervals are plain `Duration`s so an
//! application crate can load them from TOML/JSON and pass them straight in.

use std::time::Duration;

/// Top-level engine configuration.
///
/// `Default` gives the reference cadence: the player steps a little faster
/// than the pursuer pack, and modes toggle every fifteen seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Period of the player movement task.
    pub player_period: Duration,

    /// Period of the pursuit-coordinator task (shared by all pursuers).
    pub pursuer_period: Duration,

    /// How long pursuers stay in Chase (or Scatter) before the coordinator
    /// toggles every non-exempt pursuer to the other mode.
    pub mode_switch_interval: Duration,

    /// Master RNG seed.  The same seed always produces identical frightened
    /// wander and stuck-recovery choices for a given tick sequence.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player_period: Duration::from_millis(200),
            pursuer_period: Duration::from_millis(250),
            mode_switch_interval: Duration::from_millis(15_000),
            seed: 0x5eed,
        }
    }
}
